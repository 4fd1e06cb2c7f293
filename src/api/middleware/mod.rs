//! Request processing middleware for the API layer.

pub mod tracing;
