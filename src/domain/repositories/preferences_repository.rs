use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{error::PlatformError, models::preferences::UserPreferences};

/// Port for the external store holding user preference rows.
#[async_trait]
pub trait PreferencesRepository {
    /// Insert `preferences` as a new row owned by the account `user_id`.
    async fn insert(
        &self,
        user_id: Uuid,
        preferences: &UserPreferences,
    ) -> Result<(), PlatformError>;
}
