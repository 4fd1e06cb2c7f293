//! HTTP request handlers for JSON and redirect endpoints.

pub mod auth;
pub mod links;
pub mod redirect;

pub use auth::{login_handler, logout_handler, signup_handler};
pub use links::{create_link_handler, list_links_handler};
pub use redirect::redirect_handler;
