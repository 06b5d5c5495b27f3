//! Webcall Core - Shared service infrastructure
//!
//! This crate provides:
//! - Standard service trait the voice gateway implements
//! - Error handling utilities
//! - Configuration management

pub mod config;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use error::{Result, WebcallError};
pub use service::{DependencyStatus, HealthStatus, MicroserviceRuntime, ReadinessStatus, WebcallService};
