use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Minimum accepted password length on registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a password for storage as `salt$hex(sha256(salt || password))`
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest(&salt, password))
}

/// Check a candidate password against a stored `salt$hash` value
#[cfg(test)]
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
