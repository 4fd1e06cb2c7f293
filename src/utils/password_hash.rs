//! Password digest computation and verification.
//!
//! Passwords are stored as the SHA-256 hex digest of the plaintext and
//! verified by re-hashing the submitted plaintext and comparing digests.
//! The stored value is never reversed.
//!
//! The format doubles as a version tag: a SHA-256 digest is exactly 64
//! lowercase hex characters, so a future primitive with a different output
//! shape can coexist without ambiguity. [`verify_password`] rejects any
//! stored value that does not match the current format.

use sha2::{Digest, Sha256};

/// Length in characters of a SHA-256 hex digest.
const DIGEST_HEX_LEN: usize = 64;

/// Hashes a plaintext password into its stored digest form.
///
/// Deterministic: the same plaintext always yields the same digest, which is
/// what makes equality-based verification possible.
pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

/// Verifies a submitted plaintext against a stored digest.
///
/// Returns false for digests that are not in the current format rather than
/// guessing at legacy formats.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    if digest.len() != DIGEST_HEX_LEN {
        return false;
    }

    hash_password(plaintext) == digest
}
