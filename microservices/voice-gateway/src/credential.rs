//! Credential Issuer
//!
//! Mints voice access tokens for browser clients. Signing sits behind
//! [`TokenSigner`]; [`AccessTokenSigner`] produces the platform's HS256
//! access-token JWT.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use webcall_core::WebcallError;

use crate::config::VoiceGatewayConfig;

/// Content type the platform expects in access-token headers
pub const ACCESS_TOKEN_CONTENT_TYPE: &str = "twilio-fpa;v=1";

/// Voice capability grant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceGrant {
    pub outgoing_application_sid: String,
    pub incoming_allow: bool,
}

impl VoiceGrant {
    /// Outbound calls go through `application_sid`; inbound calls are always allowed.
    pub fn new(application_sid: &str) -> Self {
        Self {
            outgoing_application_sid: application_sid.to_string(),
            incoming_allow: true,
        }
    }
}

/// API key material used to sign tokens
#[derive(Debug, Clone)]
pub struct ApiKeyCredentials {
    pub account_sid: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Token returned to the browser client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub identity: String,
    pub token: String,
}

/// Produces a bearer token bound to an identity and a voice grant
pub trait TokenSigner: Send + Sync {
    fn sign(
        &self,
        credentials: &ApiKeyCredentials,
        identity: &str,
        grant: &VoiceGrant,
    ) -> Result<String, SignError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("Missing signing credential: {0}")]
    MissingCredential(&'static str),
    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl From<SignError> for WebcallError {
    fn from(err: SignError) -> Self {
        match err {
            SignError::MissingCredential(_) => WebcallError::Config(err.to_string()),
            SignError::Encoding(_) => WebcallError::Serialization(err.to_string()),
        }
    }
}

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub jti: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub grants: Grants,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grants {
    pub identity: String,
    pub voice: VoiceGrantClaims,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceGrantClaims {
    pub incoming: IncomingClaims,
    pub outgoing: OutgoingClaims,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingClaims {
    pub allow: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingClaims {
    pub application_sid: String,
}

/// HS256 access-token signer keyed by the API key secret
#[derive(Debug, Clone)]
pub struct AccessTokenSigner {
    ttl_secs: u64,
}

impl AccessTokenSigner {
    pub fn new(ttl_secs: u64) -> Self {
        Self { ttl_secs }
    }
}

impl TokenSigner for AccessTokenSigner {
    fn sign(
        &self,
        credentials: &ApiKeyCredentials,
        identity: &str,
        grant: &VoiceGrant,
    ) -> Result<String, SignError> {
        if credentials.account_sid.is_empty() {
            return Err(SignError::MissingCredential("account sid"));
        }
        if credentials.api_key.is_empty() {
            return Err(SignError::MissingCredential("api key"));
        }
        if credentials.api_secret.is_empty() {
            return Err(SignError::MissingCredential("api secret"));
        }

        let iat = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            jti: format!("{}-{}", credentials.api_key, iat),
            iss: credentials.api_key.clone(),
            sub: credentials.account_sid.clone(),
            iat,
            nbf: iat,
            exp: iat + self.ttl_secs as i64,
            grants: Grants {
                identity: identity.to_string(),
                voice: VoiceGrantClaims {
                    incoming: IncomingClaims {
                        allow: grant.incoming_allow,
                    },
                    outgoing: OutgoingClaims {
                        application_sid: grant.outgoing_application_sid.clone(),
                    },
                },
            },
        };

        let mut header = Header::new(Algorithm::HS256);
        header.cty = Some(ACCESS_TOKEN_CONTENT_TYPE.to_string());

        let key = EncodingKey::from_secret(credentials.api_secret.as_bytes());
        encode(&header, &claims, &key).map_err(|e| SignError::Encoding(e.to_string()))
    }
}

/// Issues credentials for display identities
#[derive(Clone)]
pub struct CredentialIssuer {
    credentials: ApiKeyCredentials,
    application_sid: String,
    signer: Arc<dyn TokenSigner>,
}

impl CredentialIssuer {
    pub fn new(
        credentials: ApiKeyCredentials,
        application_sid: &str,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            credentials,
            application_sid: application_sid.to_string(),
            signer,
        }
    }

    pub fn from_config(config: &VoiceGatewayConfig) -> Self {
        Self::new(
            ApiKeyCredentials {
                account_sid: config.account_sid.clone(),
                api_key: config.api_key.clone(),
                api_secret: config.api_secret.clone(),
            },
            &config.application_sid,
            Arc::new(AccessTokenSigner::new(config.token_ttl_secs)),
        )
    }

    pub fn issue_credential(&self, identity: &str) -> webcall_core::Result<Credential> {
        let grant = VoiceGrant::new(&self.application_sid);
        let token = self.signer.sign(&self.credentials, identity, &grant)?;

        Ok(Credential {
            identity: identity.to_string(),
            token,
        })
    }
}
