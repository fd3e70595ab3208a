use async_trait::async_trait;

use crate::domain::{
    error::PlatformError,
    models::{
        account::{SignUpMetadata, SignUpOutcome},
        credential::GeneratedPassword,
    },
};

/// Port for the external identity provider's account-creation API.
#[async_trait]
pub trait IdentityProvider {
    /// Create an account for `email`.
    ///
    /// Expected auth failures (duplicate or invalid email) come back as
    /// `SignUpOutcome::Rejected`, not as errors.
    async fn sign_up(
        &self,
        email: &str,
        password: &GeneratedPassword,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpOutcome, PlatformError>;
}
