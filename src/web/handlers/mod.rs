//! HTML template rendering handlers.

mod pages;

pub use pages::{index_handler, login_page_handler, signup_page_handler};
