//! Core library for the cloud migration analyzer
//!
//! This crate provides:
//! - Cost & ROI derivation (per-server breakdowns, portfolio aggregates)
//! - Roadmap summarization into a presentable timeline
//! - Complexity assessment and strategy suggestion for raw inventories
//! - Health checks and observability

pub mod assessment;
pub mod cost;
pub mod engine;
pub mod error;
pub mod health;
pub mod models;
pub mod observability;
pub mod roadmap;

pub use error::AnalysisError;
pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use observability::{EngineMetrics, StructuredLogger};
