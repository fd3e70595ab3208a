use tracing::{info, warn};

use crate::domain::{
    error::DomainError,
    models::{
        account::{ProviderUser, SignUpMetadata, SignUpOutcome, SignUpRejection},
        preferences::UserPreferences,
    },
    repositories::{
        identity_provider::IdentityProvider, preferences_repository::PreferencesRepository,
    },
    services::password_service::PasswordGenerator,
};

#[derive(Debug)]
pub struct RegistrationResult {
    pub user: Option<ProviderUser>,
    pub rejection: Option<SignUpRejection>,
}

pub struct RegisterUserUsecase<I: IdentityProvider, S: PreferencesRepository, G: PasswordGenerator>
{
    identity_provider: I,
    preferences_repository: S,
    password_generator: G,
}

impl<I: IdentityProvider, S: PreferencesRepository, G: PasswordGenerator>
    RegisterUserUsecase<I, S, G>
{
    pub fn new(identity_provider: I, preferences_repository: S, password_generator: G) -> Self {
        Self {
            identity_provider,
            preferences_repository,
            password_generator,
        }
    }

    pub async fn register(
        &self,
        email: String,
        preferences: UserPreferences,
    ) -> Result<RegistrationResult, DomainError>
    where
        I: Send + Sync,
        S: Send + Sync,
        G: Send + Sync,
    {
        // Generate a fresh credential secret
        let password = self.password_generator.generate()?;

        // Create the account at the identity provider
        let metadata = SignUpMetadata::from(&preferences);
        let outcome = self
            .identity_provider
            .sign_up(&email, &password, &metadata)
            .await?;

        match outcome {
            SignUpOutcome::Created(user) => {
                // Rows are keyed by the owning account id; no account, no row.
                self.preferences_repository
                    .insert(user.id(), &preferences)
                    .await?;

                info!(user_id = %user.id(), "user registered");
                Ok(RegistrationResult {
                    user: Some(user),
                    rejection: None,
                })
            }
            SignUpOutcome::Rejected(rejection) => {
                warn!(code = rejection.code(), "sign-up rejected by provider");
                Ok(RegistrationResult {
                    user: None,
                    rejection: Some(rejection),
                })
            }
        }
    }
}
