//! Error types for Webcall services

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebcallError>;

#[derive(Error, Debug)]
pub enum WebcallError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WebcallError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Network(_) => 503,
            _ => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<std::io::Error> for WebcallError {
    fn from(err: std::io::Error) -> Self {
        WebcallError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = WebcallError::Config("API_SECRET is empty".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.to_string(), "Configuration error: API_SECRET is empty");

        let err = WebcallError::Serialization("bad xml".to_string());
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_io_error_maps_to_network() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: WebcallError = io.into();
        assert!(matches!(err, WebcallError::Network(_)));
        assert_eq!(err.status_code(), 503);
    }
}
