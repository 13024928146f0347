//! HTTP inbound adapter exposing the laborer REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod laborers;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
