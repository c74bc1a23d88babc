//! Argon2 password hashing shared by user accounts and business profiles.
use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;

use super::errors::AuthError;

/// Hash with a fresh random salt, returning the PHC string.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unparseable.
pub fn verify_password(plain: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifies() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, "hunter22");
        assert_ne!(a, b);
        assert!(verify_password("hunter22", &a).unwrap());
        assert!(!verify_password("hunter23", &a).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(matches!(verify_password("x", "not-a-phc-string"), Err(AuthError::HashError(_))));
    }
}
