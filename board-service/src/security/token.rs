/// Opaque bearer token value generation
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{BoardError, Result};

/// 32 bytes of OS entropy, hex-encoded to a fixed 64-character value
const TOKEN_BYTES: usize = 32;

pub fn generate_token_value() -> Result<String> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| BoardError::Internal(format!("entropy source failure: {}", e)))?;

    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_value_is_fixed_length_hex() {
        let token = generate_token_value().expect("token");
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn token_values_do_not_repeat() {
        let first = generate_token_value().expect("token");
        let second = generate_token_value().expect("token");
        assert_ne!(first, second);
    }
}
