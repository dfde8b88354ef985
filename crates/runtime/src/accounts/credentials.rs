//! Password hashing.

use sha2::{Digest, Sha256};

/// Hash a password as lowercase hex SHA-256 of its UTF-8 bytes.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Check a password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(password_hash)
}
