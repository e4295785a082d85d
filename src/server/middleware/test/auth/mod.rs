use super::*;

mod require_self_or_admin;
