use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    domain::{
        error::PlatformError,
        models::{
            account::{ProviderUser, SignUpMetadata, SignUpOutcome, SignUpRejection},
            credential::GeneratedPassword,
        },
        repositories::identity_provider::IdentityProvider,
    },
};

/// Identity provider adapter against the platform auth API.
///
/// Owns transport concerns only: request shape, auth headers, and the mapping
/// from HTTP statuses onto the sign-up outcome.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    signup_url: String,
    service_key: String,
}

impl HttpIdentityProvider {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            client,
            signup_url: format!(
                "{}/auth/v1/signup",
                config.platform_url.trim_end_matches('/')
            ),
            service_key: config.service_key.clone(),
        }
    }
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a SignUpMetadata,
}

#[derive(Deserialize)]
struct CreatedUserBody {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
}

#[derive(Default, Deserialize)]
struct RejectionBody {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &GeneratedPassword,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpOutcome, PlatformError> {
        let body = SignUpBody {
            email,
            password: password.as_str(),
            data: metadata,
        };

        let response = self
            .client
            .post(&self.signup_url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;

        if status.is_success() {
            let created: CreatedUserBody = serde_json::from_slice(&bytes)
                .map_err(|e| PlatformError::Decode(format!("invalid sign-up response: {e}")))?;
            return Ok(SignUpOutcome::Created(ProviderUser::new(
                created.id,
                created.email,
                created.created_at,
            )));
        }

        // Client errors carry the provider's business verdict (duplicate
        // email, invalid address). Anything else is an infrastructure fault.
        if status.is_client_error() {
            return Ok(SignUpOutcome::Rejected(parse_rejection(status, &bytes)));
        }

        Err(PlatformError::UnexpectedStatus {
            status: status.as_u16(),
            message: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

fn parse_rejection(status: StatusCode, body: &[u8]) -> SignUpRejection {
    let decoded: RejectionBody = serde_json::from_slice(body).unwrap_or_default();
    let message = decoded
        .msg
        .or(decoded.message)
        .unwrap_or_else(|| format!("sign-up rejected with status {}", status.as_u16()));
    SignUpRejection::new(decoded.error_code, message)
}

fn map_transport_error(error: reqwest::Error) -> PlatformError {
    PlatformError::Transport(error.to_string())
}
