use crate::domain::{error::DomainError, models::credential::GeneratedPassword};

/// Service producing one fresh credential secret per registration
pub trait PasswordGenerator: Clone {
    /// Generate a new secret from a cryptographically strong source
    fn generate(&self) -> Result<GeneratedPassword, DomainError>;
}
