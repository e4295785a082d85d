//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so services can run several
//! repository calls inside one transaction.

use sea_orm::sea_query::LikeExpr;

pub mod team;
pub mod team_member;
pub mod ticket;
pub mod user;

/// Builds a `LIKE` pattern matching `search` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped with `\`.
pub(crate) fn contains_literal(search: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}

#[cfg(test)]
mod test;
