//! Configuration management for microservices

use crate::error::{Result, WebcallError};
use std::env;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub http_port: u16,
    /// Full bind address; overrides `http_port` when set
    pub http_bind: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|e| WebcallError::Config(format!("Invalid PORT: {}", e)))?,
            http_bind: env::var("HTTP_BIND").ok().filter(|v| !v.is_empty()),
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        match &self.http_bind {
            Some(bind) => bind.clone(),
            None => format!("0.0.0.0:{}", self.http_port),
        }
    }
}
