//! Application layer services implementing business logic.
//!
//! Services consume the domain repository traits and provide the API the
//! HTTP handlers call into.
//!
//! - [`services::LinkService`] - URL shortening, resolution, and listing
//! - [`services::AuthService`] - Signup, login, logout, session checks

pub mod services;
