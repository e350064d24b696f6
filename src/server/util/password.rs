use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash including algorithm parameters and salt
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored PHC hash; malformed hashes never match.
#[cfg(test)]
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
