use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::preferences::UserPreferences;

/// Account record returned by the identity provider on successful sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderUser {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
}

impl ProviderUser {
    pub fn new(id: Uuid, email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Metadata bag forwarded to the identity provider alongside the credentials.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpMetadata {
    pub full_name: String,
    pub preferred_districts: Vec<String>,
    pub language: String,
}

impl From<&UserPreferences> for SignUpMetadata {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            full_name: preferences.full_name.clone(),
            preferred_districts: preferences.districts.clone(),
            language: preferences.language.clone(),
        }
    }
}

/// Expected, provider-reported sign-up failure (e.g. duplicate email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRejection {
    code: Option<String>,
    message: String,
}

impl SignUpRejection {
    pub fn new(code: Option<String>, message: String) -> Self {
        Self { code, message }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The identity provider's verdict on a sign-up attempt.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    Created(ProviderUser),
    Rejected(SignUpRejection),
}
