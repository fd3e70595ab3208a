use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        models::{
            account::{ProviderUser, SignUpRejection},
            preferences::UserPreferences,
        },
        repositories::{
            identity_provider::IdentityProvider, preferences_repository::PreferencesRepository,
        },
        services::password_service::PasswordGenerator,
    },
    usecase::register_user_usecase::{RegisterUserUsecase, RegistrationResult},
};

// Request

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub preferences: UserPreferences,
}

// Response

/// json for register response
///
/// A provider rejection still serializes here with status 200; only
/// infrastructure failures use the `FailureResponse` shape below.
#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: Option<UserInfo>,
    pub error: Option<ErrorInfo>,
}

#[derive(Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: Option<String>,
    pub message: String,
}

/// json emitted with status 500 at the outermost boundary
#[derive(Serialize, Deserialize)]
pub struct FailureResponse {
    pub error: String,
}

impl From<ProviderUser> for UserInfo {
    fn from(user: ProviderUser) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
        }
    }
}

impl From<SignUpRejection> for ErrorInfo {
    fn from(rejection: SignUpRejection) -> Self {
        Self {
            code: rejection.code().map(str::to_string),
            message: rejection.message().to_string(),
        }
    }
}

impl From<RegistrationResult> for RegisterResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            user: result.user.map(UserInfo::from),
            error: result.rejection.map(ErrorInfo::from),
        }
    }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_registration_router<
    I: IdentityProvider + Send + Sync + 'static + Clone,
    S: PreferencesRepository + Send + Sync + 'static + Clone,
    G: PasswordGenerator + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<I, S, G>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<I, S, G>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<I: IdentityProvider, S: PreferencesRepository, G: PasswordGenerator> {
    pub register_service: Arc<RegisterUserUsecase<I, S, G>>,
}

// handler function

/// handler function for register
async fn register<
    I: IdentityProvider + Send + Sync,
    S: PreferencesRepository + Send + Sync,
    G: PasswordGenerator + Send + Sync,
>(
    State(state): State<AppState<I, S, G>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Malformed bodies surface through the same boundary shape as any
    // other failure, not through axum's default rejection.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match state
        .register_service
        .register(payload.email, payload.preferences)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(RegisterResponse::from(result))).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FailureResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}
