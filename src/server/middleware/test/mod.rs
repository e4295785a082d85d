use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::{TeamRole, UserRole};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        team::TeamGuard,
    },
    model::user::User,
    util::jwt::{JwtConfig, JwtService},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;

fn jwt() -> JwtService {
    JwtService::new(JwtConfig::new("test-secret", 1))
}

/// Builds request headers carrying a bearer token for `user`.
fn bearer_for(jwt: &JwtService, user: &entity::user::Model) -> HeaderMap {
    let token = jwt.generate(&User::from_entity(user.clone())).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
