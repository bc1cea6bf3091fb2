use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

use crate::config::MailingConfig;
use crate::handlers::{health_check, register_user_handler};

mod config;
mod error;
mod handlers;
mod logging;
mod services;

#[derive(Clone)]
pub struct AppState {
    http: reqwest::Client,
    mailing: Result<Arc<MailingConfig>, &'static str>,
}

impl AppState {
    pub fn new(mailing: Result<MailingConfig, error::Error>) -> Self {
        let mailing = match mailing {
            Ok(config) => Ok(Arc::new(config)),
            Err(error::Error::Config(message)) => Err(message),
            Err(e) => {
                warn!("Unexpected configuration error: {}", e);
                Err(config::MISSING_MAILCHIMP_CONFIG)
            }
        };
        Self {
            http: reqwest::Client::new(),
            mailing,
        }
    }
}

pub fn create_app(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let index = format!("{}/index.html", static_dir.trim_end_matches('/'));
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    let api = Router::new()
        .route("/api/health_check", get(health_check))
        .route("/api/register-user", post(register_user_handler))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    api.fallback_service(frontend)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup();

    let mailing = MailingConfig::from_env();
    if let Err(e) = &mailing {
        warn!("Registrations will not be forwarded: {}", e);
    }
    let state = AppState::new(mailing);
    let app = create_app(state, &config::static_dir());

    let addr = config::bind_addr();
    info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
