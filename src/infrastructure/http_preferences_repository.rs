use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    domain::{
        error::PlatformError, models::preferences::UserPreferences,
        repositories::preferences_repository::PreferencesRepository,
    },
};

/// Preferences store adapter against the platform REST API.
#[derive(Clone)]
pub struct HttpPreferencesRepository {
    client: reqwest::Client,
    insert_url: String,
    service_key: String,
}

impl HttpPreferencesRepository {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            client,
            insert_url: format!(
                "{}/rest/v1/user_preferences",
                config.platform_url.trim_end_matches('/')
            ),
            service_key: config.service_key.clone(),
        }
    }
}

/// Row shape of the `user_preferences` table, keyed by the owning account.
#[derive(Serialize)]
struct PreferencesRow<'a> {
    user_id: Uuid,
    full_name: &'a str,
    preferred_districts: &'a [String],
    language: &'a str,
}

#[async_trait]
impl PreferencesRepository for HttpPreferencesRepository {
    async fn insert(
        &self,
        user_id: Uuid,
        preferences: &UserPreferences,
    ) -> Result<(), PlatformError> {
        let row = PreferencesRow {
            user_id,
            full_name: &preferences.full_name,
            preferred_districts: &preferences.districts,
            language: &preferences.language,
        };

        let response = self
            .client
            .post(&self.insert_url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| PlatformError::Transport(e.to_string()))?;
            return Err(PlatformError::UnexpectedStatus {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    fn repository(server: &MockServer) -> HttpPreferencesRepository {
        let config = AppConfig {
            platform_url: server.base_url(),
            service_key: "service-key".to_string(),
        };
        HttpPreferencesRepository::new(reqwest::Client::new(), &config)
    }

    fn preferences() -> UserPreferences {
        UserPreferences {
            full_name: "Alex Wong".to_string(),
            districts: vec!["Central".to_string(), "Wan Chai".to_string()],
            language: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn inserts_row_linked_to_account() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/rest/v1/user_preferences")
                .header("apikey", "service-key")
                .header("Prefer", "return=minimal")
                .json_body(serde_json::json!({
                    "user_id": "00000000-0000-0000-0000-000000000001",
                    "full_name": "Alex Wong",
                    "preferred_districts": ["Central", "Wan Chai"],
                    "language": "en"
                }));
            then.status(201);
        });

        let user_id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        repository(&server)
            .insert(user_id, &preferences())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn surfaces_rejected_insert_as_platform_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rest/v1/user_preferences");
            then.status(409).body("duplicate key value");
        });

        let error = repository(&server)
            .insert(Uuid::new_v4(), &preferences())
            .await
            .unwrap_err();

        match error {
            PlatformError::UnexpectedStatus { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("duplicate key value"));
            }
            other => panic!("expected UnexpectedStatus, got {other}"),
        }
    }
}
