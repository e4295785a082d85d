use super::*;


fn jwt() -> JwtService {
    JwtService::new(JwtConfig::new("test-secret", 1))
}
