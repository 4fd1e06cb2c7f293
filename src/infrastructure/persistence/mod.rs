//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Uniqueness violations surface as [`crate::error::AppError::Conflict`] via
//! [`crate::error::map_sqlx_error`]; services decide whether a conflict is an
//! idempotent-create race or a real error.

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
