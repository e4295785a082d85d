//! Request guards.
//!
//! Guards are explicit predicates that controllers call at the start of a handler. They
//! return the resolved context (`User`, `TeamAccess`) by value or a typed error, and never
//! mutate shared request state.

pub mod auth;
pub mod team;

#[cfg(test)]
mod test;
