use rand_core::{OsRng, TryRngCore};

use crate::domain::{
    error::DomainError, models::credential::GeneratedPassword,
    services::password_service::PasswordGenerator,
};

// 64 symbols so a byte maps onto the alphabet without modulo bias.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

// 24 symbols at 6 bits each: 144 bits of entropy per secret.
const SECRET_LEN: usize = 24;

#[derive(Clone)]
pub struct OsRandomPasswordGenerator;

impl OsRandomPasswordGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRandomPasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator for OsRandomPasswordGenerator {
    fn generate(&self) -> Result<GeneratedPassword, DomainError> {
        let mut bytes = [0u8; SECRET_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| DomainError::PasswordGeneration(e.to_string()))?;

        let secret: String = bytes
            .iter()
            .map(|b| ALPHABET[usize::from(b % 64)] as char)
            .collect();

        Ok(GeneratedPassword::new(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_secret_of_expected_length() {
        let generator = OsRandomPasswordGenerator::new();
        let secret = generator.generate().unwrap();
        assert_eq!(secret.as_str().len(), SECRET_LEN);
    }

    #[test]
    fn secret_uses_only_alphabet_symbols() {
        let generator = OsRandomPasswordGenerator::new();
        let secret = generator.generate().unwrap();
        assert!(
            secret
                .as_str()
                .bytes()
                .all(|b| ALPHABET.contains(&b))
        );
    }

    #[test]
    fn generates_fresh_secret_per_call() {
        let generator = OsRandomPasswordGenerator::new();
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_ne!(first.as_str(), second.as_str());
    }
}
