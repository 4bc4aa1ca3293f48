//! Solver-adapter boundary.
//!
//! The core never depends on how an engine searches for optima — only on
//! this contract: take a `MilpModel`, block on one optimize call, report a
//! status, and hand back per-variable values. Swapping engines means
//! implementing `MilpSolver` for another backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::model::{MilpModel, VarId};

/// Outcome of one optimize invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// A provably optimal assignment was found.
    Optimal,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The objective is unbounded.
    Unbounded,
    /// The engine hit its time limit before proving optimality.
    TimedOut,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded => "unbounded",
            SolveStatus::TimedOut => "timed out",
        };
        f.write_str(s)
    }
}

/// Result of a solve: status plus, for optimal solves, the variable values.
#[derive(Debug, Clone)]
pub struct MilpSolution {
    status: SolveStatus,
    objective_value: f64,
    values: Vec<f64>,
}

impl MilpSolution {
    /// Creates an optimal solution with per-variable values
    /// (indexed by `VarId::index`).
    pub fn optimal(objective_value: f64, values: Vec<f64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective_value,
            values,
        }
    }

    /// Creates a non-optimal outcome carrying no assignment.
    pub fn without_assignment(status: SolveStatus) -> Self {
        Self {
            status,
            objective_value: 0.0,
            values: Vec::new(),
        }
    }

    /// Solve status.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Whether the solve was optimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Realized objective value (0.0 for non-optimal outcomes).
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Solved value of a variable.
    ///
    /// # Panics
    /// Panics if the solve was not optimal or the variable belongs to a
    /// different model.
    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.index()]
    }
}

/// Configuration passed through to the engine.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Wall-clock limit for the optimize call. `None` = no limit.
    /// Pass-through: enforcement is up to the backend.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    /// Configuration with a time limit.
    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self {
            time_limit: Some(time_limit),
        }
    }
}

/// Engine-side failures (distinct from infeasible/unbounded outcomes,
/// which are statuses, not errors).
#[derive(Debug, Error)]
pub enum SolverError {
    /// The model was submitted without an objective.
    #[error("model '{0}' has no objective")]
    MissingObjective(String),
    /// The backend failed internally.
    #[error("solver backend failure: {0}")]
    Backend(String),
}

/// A mixed-integer linear programming engine.
///
/// Implementations own variable creation, constraint submission, and the
/// blocking optimize call; callers read results back from the returned
/// `MilpSolution`.
pub trait MilpSolver {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Builds the model inside the engine and optimizes it.
    fn solve(&self, model: &MilpModel, config: &SolverConfig) -> Result<MilpSolution, SolverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_optimal_solution_has_no_assignment() {
        let solution = MilpSolution::without_assignment(SolveStatus::Infeasible);
        assert!(!solution.is_optimal());
        assert_eq!(solution.status(), SolveStatus::Infeasible);
        assert_eq!(solution.objective_value(), 0.0);
    }

    #[test]
    fn test_optimal_solution_values() {
        let solution = MilpSolution::optimal(7.0, vec![1.0, 0.0]);
        assert!(solution.is_optimal());
        assert!((solution.value(VarId(0)) - 1.0).abs() < 1e-9);
        assert!((solution.value(VarId(1))).abs() < 1e-9);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Optimal.to_string(), "optimal");
        assert_eq!(SolveStatus::TimedOut.to_string(), "timed out");
    }
}
