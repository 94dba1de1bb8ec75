//! One-way salted password hashing for account credentials.

use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use rand::rngs::OsRng;

use crate::errors::{Error, Result};

/// Hashes a password with Argon2 and a fresh random salt.
///
/// The returned PHC string embeds the algorithm parameters and the salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Unexpected(format!("Failed to hash password: {e}")))
}

/// Checks a candidate password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; a stored hash that cannot be parsed is an error.
pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| Error::Unexpected(format!("Stored password hash is invalid: {e}")))?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(other) => Err(Error::Unexpected(format!(
            "Password verification failed: {other}"
        ))),
    }
}
