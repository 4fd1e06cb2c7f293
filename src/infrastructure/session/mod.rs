//! Session storage.
//!
//! Sessions are an in-process concern: created at login/signup, destroyed at
//! logout, gone on restart. There is deliberately no database table behind
//! them.

pub mod memory_session_store;

pub use memory_session_store::MemorySessionStore;
