//! Short code generation.
//!
//! Codes are derived from the long URL itself so that generation is a pure
//! function of its inputs: the same URL always produces the same first-choice
//! code, and the retry counter folds into the hash to produce distinct
//! candidates when the store reports a collision.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Digest bytes kept before base64 encoding. 6 bytes encode to 8 characters.
const CODE_LENGTH_BYTES: usize = 6;

/// Codes reserved for application routes.
///
/// A generated code matching one of these would be shadowed by an explicit
/// route and never resolve, so it is treated as a collision.
pub const RESERVED_CODES: &[&str] = &["signup", "login", "logout", "links", "create", "static"];

/// Generates a URL-path-safe short code for a long URL.
///
/// Hashes the URL with SHA-256, mixing in `attempt` when non-zero, and
/// encodes the leading digest bytes as URL-safe base64 without padding. The
/// result is 8 characters drawn from `[A-Za-z0-9_-]`, none of which require
/// percent-encoding in a path segment.
///
/// Uniqueness is enforced by the store, not here: callers retry with an
/// incremented `attempt` until the store accepts the code.
pub fn generate_code(url: &str, attempt: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    if attempt > 0 {
        hasher.update(attempt.to_le_bytes());
    }
    let digest = hasher.finalize();

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..CODE_LENGTH_BYTES])
}

/// Returns true when a code is reserved for application routes.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
