/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{BoardError, Result};

/// Hash a password using Argon2id.
///
/// A fresh random salt is generated per call, so hashing the same password
/// twice yields different PHC strings that both verify. Length policy is
/// enforced upstream by request validation; this function accepts input of
/// any byte length without failing on it.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| BoardError::Internal(format!("password hashing failed: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored PHC hash string.
///
/// The salt is recovered from the hash itself and the comparison inside the
/// argon2 crate is constant-time. Malformed hash input yields `false`,
/// never an error, so lookup paths fail closed.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("secr3t").expect("hash");
        assert!(verify_password("secr3t", &hash));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("secr3t").expect("hash");
        assert!(!verify_password("not-secr3t", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("secr3t").expect("hash");
        let second = hash_password("secr3t").expect("hash");
        // Random salt per call
        assert_ne!(first, second);
        assert!(verify_password("secr3t", &first));
        assert!(verify_password("secr3t", &second));
    }

    #[test]
    fn malformed_hash_returns_false() {
        assert!(!verify_password("secr3t", "not-a-phc-string"));
        assert!(!verify_password("secr3t", ""));
        assert!(!verify_password("secr3t", "$argon2id$v=19$truncated"));
    }

    #[test]
    fn arbitrary_length_input_does_not_panic() {
        let long = "x".repeat(4096);
        let hash = hash_password(&long).expect("hash");
        assert!(verify_password(&long, &hash));

        let empty = hash_password("").expect("hash");
        assert!(verify_password("", &empty));
    }
}
