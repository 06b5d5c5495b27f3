//! Voice Gateway REST API

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::api::ApiError;
use crate::credential::{Credential, CredentialIssuer};
use crate::identity::generate_identity;
use crate::routing::CallRouter;
use crate::session::IdentitySlot;
use webcall_core::{DependencyStatus, HealthStatus, ReadinessStatus};

/// Where the browser calling SDK bundle is served from
const VOICE_SDK_PATH: &str = "/node_modules/@twilio/voice-sdk/dist/twilio.min.js";

pub const SERVICE_ID: &str = "voice-gateway";

#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<CredentialIssuer>,
    pub router: Arc<CallRouter>,
    pub identity_slot: IdentitySlot,
    /// Directory served for the browser client
    pub static_dir: String,
    pub started_at: Instant,
}

impl AppState {
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus {
            healthy: true,
            service_id: SERVICE_ID.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.started_at.elapsed().as_secs(),
        }
    }

    /// Ready only when every dependency is available
    pub fn readiness_status(&self) -> ReadinessStatus {
        let dependencies = vec![DependencyStatus {
            name: "static-assets".to_string(),
            available: std::path::Path::new(&self.static_dir).is_dir(),
            latency_ms: None,
        }];

        ReadinessStatus {
            ready: dependencies.iter().all(|d| d.available),
            dependencies,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        // Health
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Browser client
        .route("/token", get(issue_token))
        .route("/twilio.min.js", get(voice_sdk))
        // Platform webhook
        .route("/voice", post(voice))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health_status())
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessStatus>) {
    let status = state.readiness_status();
    let code = if status.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

async fn voice_sdk() -> Redirect {
    Redirect::temporary(VOICE_SDK_PATH)
}

async fn issue_token(State(state): State<AppState>) -> Result<Json<Credential>, ApiError> {
    let identity = generate_identity();
    state.identity_slot.replace(identity.clone());

    let credential = state.issuer.issue_credential(&identity)?;
    info!(identity = %credential.identity, "Issued access token");

    Ok(Json(credential))
}

/// Voice webhook parameters. The platform posts many more fields; only the
/// destination is read.
#[derive(Debug, Default, Deserialize)]
pub struct VoiceRequest {
    #[serde(rename = "To")]
    pub to: Option<String>,
}

async fn voice(
    State(state): State<AppState>,
    Form(req): Form<VoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = state.identity_slot.current();
    let response = state.router.route_call(req.to.as_deref(), &identity);
    let xml = response.to_xml()?;

    Ok(([(header::CONTENT_TYPE, "text/xml")], xml))
}
