//! Interpreted staffing decisions.
//!
//! A `StaffingPlan` is the domain-level reading of a solved model: who
//! works which job on which day, under which qualification each employee
//! is credited per job, and the single day each job finishes. Records are
//! emitted in variable-creation order (employee index, then job index,
//! then day/qualification index), so reporting is deterministic.

use serde::{Deserialize, Serialize};

use crate::error::StaffingError;
use crate::milp::SolveStatus;

/// Solver outputs farther from an integer than this are an anomaly.
const BINARY_EPS: f64 = 1e-6;
/// Values this close to 1.0 are read as true.
const ROUNDING_TOLERANCE: f64 = 1e-4;

/// Employee `employee` works job `job` on day `day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkAssignment {
    pub employee: String,
    pub job: String,
    pub day: usize,
}

/// Employee `employee` is credited on job `job` under `qualification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub employee: String,
    pub job: String,
    pub qualification: String,
}

/// Job `job` finishes on day `day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub job: String,
    pub day: usize,
}

/// Domain-level reading of one solve.
///
/// For non-optimal statuses the record lists are empty and
/// `objective_value` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingPlan {
    /// Outcome reported by the engine.
    pub status: SolveStatus,
    /// Realized total profit for optimal solves.
    pub objective_value: Option<f64>,
    /// Per-day work assignments.
    pub work: Vec<WorkAssignment>,
    /// Per-job qualification roles.
    pub roles: Vec<RoleAssignment>,
    /// One completion fact per job.
    pub completions: Vec<Completion>,
}

impl StaffingPlan {
    /// Creates an empty plan for a non-optimal outcome.
    pub fn without_assignments(status: SolveStatus) -> Self {
        Self {
            status,
            objective_value: None,
            work: Vec::new(),
            roles: Vec::new(),
            completions: Vec::new(),
        }
    }

    /// Whether the underlying solve was optimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Days on which an employee works a given job, ascending.
    pub fn work_days(&self, employee: &str, job: &str) -> Vec<usize> {
        self.work
            .iter()
            .filter(|w| w.employee == employee && w.job == job)
            .map(|w| w.day)
            .collect()
    }

    /// The completion day of a job, if it appears in the plan.
    pub fn completion_day(&self, job: &str) -> Option<usize> {
        self.completions.iter().find(|c| c.job == job).map(|c| c.day)
    }

    /// Whether an employee is credited under a qualification on a job.
    pub fn has_role(&self, employee: &str, job: &str, qualification: &str) -> bool {
        self.roles.iter().any(|r| {
            r.employee == employee && r.job == job && r.qualification == qualification
        })
    }

    /// Renders the textual report: one line per solved-true variable,
    /// then the objective value. Non-optimal solves report only the status.
    pub fn report(&self) -> String {
        if !self.is_optimal() {
            return format!("No optimal solution: solver reported {}\n", self.status);
        }

        let mut out = String::from("Optimal solution found\n");
        for w in &self.work {
            out.push_str(&format!(
                "Employee {} works on job {} on day {}\n",
                w.employee, w.job, w.day
            ));
        }
        for r in &self.roles {
            out.push_str(&format!(
                "Employee {} is assigned to job {} for qualification {}\n",
                r.employee, r.job, r.qualification
            ));
        }
        for c in &self.completions {
            out.push_str(&format!("Job {} is finished on day {}\n", c.job, c.day));
        }
        out.push_str(&format!(
            "Objective value: {}\n",
            self.objective_value.unwrap_or(0.0)
        ));
        out
    }
}

/// Reads a solved variable value as a boolean.
///
/// Values within `ROUNDING_TOLERANCE` of 1.0 are true, values within the
/// valid band `[-eps, 1 + eps]` otherwise are false, and anything outside
/// the band is a `SolutionAnomaly`.
pub(crate) fn read_binary(variable: &str, value: f64) -> Result<bool, StaffingError> {
    if !(-BINARY_EPS..=1.0 + BINARY_EPS).contains(&value) {
        return Err(StaffingError::SolutionAnomaly {
            variable: variable.to_string(),
            value,
        });
    }
    Ok((value - 1.0).abs() <= ROUNDING_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> StaffingPlan {
        StaffingPlan {
            status: SolveStatus::Optimal,
            objective_value: Some(100.0),
            work: vec![
                WorkAssignment {
                    employee: "Olivia".into(),
                    job: "Website".into(),
                    day: 0,
                },
                WorkAssignment {
                    employee: "Olivia".into(),
                    job: "Website".into(),
                    day: 1,
                },
            ],
            roles: vec![RoleAssignment {
                employee: "Olivia".into(),
                job: "Website".into(),
                qualification: "A".into(),
            }],
            completions: vec![Completion {
                job: "Website".into(),
                day: 1,
            }],
        }
    }

    #[test]
    fn test_queries() {
        let plan = sample_plan();
        assert_eq!(plan.work_days("Olivia", "Website"), vec![0, 1]);
        assert_eq!(plan.completion_day("Website"), Some(1));
        assert!(plan.has_role("Olivia", "Website", "A"));
        assert!(!plan.has_role("Olivia", "Website", "B"));
        assert_eq!(plan.completion_day("Missing"), None);
    }

    #[test]
    fn test_report_lists_facts_and_objective() {
        let report = sample_plan().report();
        assert!(report.starts_with("Optimal solution found"));
        assert!(report.contains("Employee Olivia works on job Website on day 0"));
        assert!(report.contains("Employee Olivia is assigned to job Website for qualification A"));
        assert!(report.contains("Job Website is finished on day 1"));
        assert!(report.contains("Objective value: 100"));
    }

    #[test]
    fn test_report_for_infeasible_solve() {
        let plan = StaffingPlan::without_assignments(SolveStatus::Infeasible);
        let report = plan.report();
        assert!(report.contains("infeasible"));
        assert!(!report.contains("Employee"));
    }

    #[test]
    fn test_read_binary_rounding() {
        assert!(read_binary("x", 1.0).unwrap());
        assert!(read_binary("x", 0.999_99).unwrap());
        assert!(!read_binary("x", 0.0).unwrap());
        assert!(!read_binary("x", 1e-7).unwrap());
    }

    #[test]
    fn test_read_binary_anomalies() {
        assert!(matches!(
            read_binary("x", 1.5),
            Err(StaffingError::SolutionAnomaly { .. })
        ));
        assert!(matches!(
            read_binary("x", -0.2),
            Err(StaffingError::SolutionAnomaly { .. })
        ));
    }
}
