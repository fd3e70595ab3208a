mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    infrastructure::{
        http_identity_provider::HttpIdentityProvider,
        http_preferences_repository::HttpPreferencesRepository,
        random_password_generator::OsRandomPasswordGenerator,
    },
    presentation::handlers::registration_handler::create_registration_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_config = AppConfig::from_env()?;
    let client = reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()?;

    let identity_provider = HttpIdentityProvider::new(client.clone(), &app_config);
    let preferences_repository = HttpPreferencesRepository::new(client, &app_config);
    let password_generator = OsRandomPasswordGenerator::new();
    let register_service = RegisterUserUsecase::new(
        identity_provider,
        preferences_repository,
        password_generator,
    );

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", create_registration_router(register_service));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
