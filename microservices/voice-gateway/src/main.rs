//! Voice Gateway
//!
//! Backend for a browser calling client:
//! - Access tokens with a voice grant for randomly named browser identities
//! - Call-control documents for the platform's voice webhook
//! - Static assets for the client page

use std::sync::Arc;
use tracing::info;
use webcall_core::{
    HealthStatus, MicroserviceRuntime, ReadinessStatus, Result, WebcallError, WebcallService,
};

mod api;
mod config;
mod credential;
mod identity;
mod routing;
mod session;
mod twiml;


use config::VoiceGatewayConfig;
use credential::CredentialIssuer;
use routing::CallRouter;
use session::IdentitySlot;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be populated
    let dotenv = dotenvy::dotenv();

    webcall_telemetry::init("voice-gateway")
        .map_err(|e| WebcallError::Internal(e.to_string()))?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) => info!(reason = %e, "No environment file loaded"),
    }

    info!("Starting Voice Gateway");

    let config = VoiceGatewayConfig::from_env()?;
    let service = Arc::new(VoiceGateway::new(config)?);
    MicroserviceRuntime::run(service).await
}

pub struct VoiceGateway {
    config: VoiceGatewayConfig,
    state: api::AppState,
}

impl VoiceGateway {
    pub fn new(config: VoiceGatewayConfig) -> Result<Self> {
        let state = api::AppState {
            issuer: Arc::new(CredentialIssuer::from_config(&config)),
            router: Arc::new(CallRouter::new(&config.caller_id)?),
            identity_slot: IdentitySlot::new(),
            static_dir: config.static_dir.clone(),
            started_at: std::time::Instant::now(),
        };

        Ok(Self { config, state })
    }
}

#[async_trait::async_trait]
impl WebcallService for VoiceGateway {
    fn service_id(&self) -> &'static str {
        api::rest::SERVICE_ID
    }

    async fn health(&self) -> HealthStatus {
        self.state.health_status()
    }

    async fn ready(&self) -> ReadinessStatus {
        self.state.readiness_status()
    }

    async fn shutdown(&self) -> Result<()> {
        info!(
            last_identity = %self.state.identity_slot.current(),
            "Shutting down Voice Gateway"
        );
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        let http_bind = self.config.service.bind_address();
        info!(
            bind = %http_bind,
            static_dir = %self.config.static_dir,
            caller_id = %self.state.router.caller_id(),
            "Starting Voice Gateway HTTP server"
        );

        let readiness = self.state.readiness_status();
        if !readiness.ready {
            tracing::warn!(static_dir = %self.config.static_dir, "Static asset directory not found");
        }

        let app = api::create_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(&http_bind).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
