//! Voice Gateway configuration

use webcall_core::{Result, ServiceConfig};

/// Voice Gateway configuration, read from the process environment.
///
/// Telephony credentials are not validated here: empty values are passed
/// through and rejected by the token signer when a token is requested.
#[derive(Debug, Clone)]
pub struct VoiceGatewayConfig {
    pub service: ServiceConfig,
    /// Account identifier (`TWILIO_ACCOUNT_SID`)
    pub account_sid: String,
    /// Voice application the outgoing grant points at (`TWILIO_TWIML_APP_SID`)
    pub application_sid: String,
    /// API key identifier (`API_KEY`)
    pub api_key: String,
    /// API key secret (`API_SECRET`)
    pub api_secret: String,
    /// Caller-id address used on outbound dials (`TWILIO_CALLER_ID`)
    pub caller_id: String,
    /// Directory served for the browser client
    pub static_dir: String,
    /// Access token lifetime
    pub token_ttl_secs: u64,
}

impl VoiceGatewayConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            service: ServiceConfig::from_env()?,
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            application_sid: std::env::var("TWILIO_TWIML_APP_SID").unwrap_or_default(),
            api_key: std::env::var("API_KEY").unwrap_or_default(),
            api_secret: std::env::var("API_SECRET").unwrap_or_default(),
            caller_id: std::env::var("TWILIO_CALLER_ID").unwrap_or_default(),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        })
    }
}
