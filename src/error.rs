//! Crate-level error type.

use thiserror::Error;

use crate::milp::SolverError;
use crate::validation::ValidationError;

/// Failures surfaced by the staffing pipeline.
#[derive(Debug, Error)]
pub enum StaffingError {
    /// An unrecognized dataset selector was supplied.
    #[error("unknown dataset '{0}' (expected \"small\", \"medium\", or \"large\")")]
    UnknownDataset(String),

    /// The input could not be parsed against the problem schema.
    #[error("malformed problem data: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// The parsed input failed structural validation.
    #[error("invalid problem data ({} issue(s)): {}", .0.len(), format_issues(.0))]
    Validation(Vec<ValidationError>),

    /// The solving engine failed (distinct from infeasible/unbounded,
    /// which are reported as statuses).
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// A solved variable value fell outside `[-eps, 1 + eps]` — a solver
    /// or formulation defect, never silently coerced.
    #[error("solved value {value} for variable '{variable}' is not binary")]
    SolutionAnomaly {
        /// Name of the offending variable.
        variable: String,
        /// Raw value reported by the engine.
        value: f64,
    },
}

fn format_issues(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
