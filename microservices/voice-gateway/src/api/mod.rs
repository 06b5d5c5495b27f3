//! HTTP surface of the Voice Gateway

pub mod response;
pub mod rest;

pub use response::ApiError;
pub use rest::{create_router, AppState};
