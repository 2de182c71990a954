//! Engine error taxonomy
//!
//! Only an empty portfolio is a hard failure. Malformed metric values
//! clamp to zero inside the cost model, and division guards resolve to
//! `0` sentinels, so every other input still produces a report.

use thiserror::Error;

/// Errors produced by the analysis engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Aggregation over zero servers; per-server averages would be
    /// undefined. Callers must supply at least one server.
    #[error("portfolio contains no servers")]
    EmptyPortfolio,
}
