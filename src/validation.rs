//! Input validation for staffing problems.
//!
//! Checks structural integrity of the problem instance before any model
//! construction. Detects:
//! - Duplicate employee, job, or qualification names
//! - Vacation days outside the planning horizon
//! - An empty horizon
//!
//! Qualification labels referenced by a job requirement or an employee but
//! absent from the global set are deliberately *not* rejected: the
//! formulation tolerates them by generating vacuous constraints (the
//! qualification can simply never be assigned).

use crate::models::ProblemData;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same name.
    DuplicateName,
    /// A vacation day lies outside `[0, horizon)`.
    VacationOutOfRange,
    /// The horizon is zero — there are no days to schedule.
    EmptyHorizon,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a staffing problem instance.
///
/// Checks:
/// 1. Horizon is at least one day
/// 2. No duplicate qualification labels
/// 3. No duplicate employee names
/// 4. No duplicate job names
/// 5. All vacation days lie within `[0, horizon)`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(data: &ProblemData) -> ValidationResult {
    let mut errors = Vec::new();

    if data.horizon == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyHorizon,
            "Horizon must be at least one day",
        ));
    }

    let mut qualification_labels = HashSet::new();
    for q in &data.qualifications {
        if !qualification_labels.insert(q.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate qualification label: {q}"),
            ));
        }
    }

    let mut employee_names = HashSet::new();
    for employee in &data.staff {
        if !employee_names.insert(employee.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }

        for &day in &employee.vacations {
            if day >= data.horizon {
                errors.push(ValidationError::new(
                    ValidationErrorKind::VacationOutOfRange,
                    format!(
                        "Employee '{}' has vacation day {} outside horizon {}",
                        employee.name, day, data.horizon
                    ),
                ));
            }
        }
    }

    let mut job_names = HashSet::new();
    for job in &data.jobs {
        if !job_names.insert(job.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate job name: {}", job.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Job};

    fn sample_problem() -> ProblemData {
        ProblemData::new(5)
            .with_qualification("A")
            .with_qualification("B")
            .with_employee(
                Employee::new("Olivia")
                    .with_qualification("A")
                    .with_vacation(2),
            )
            .with_employee(Employee::new("Liam").with_qualification("B"))
            .with_job(
                Job::new("Website")
                    .with_gain(20)
                    .with_due_date(3)
                    .with_daily_penalty(3)
                    .with_requirement("A", 1),
            )
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_zero_horizon() {
        let data = ProblemData::new(0);
        let errors = validate_problem(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyHorizon));
    }

    #[test]
    fn test_duplicate_employee_name() {
        let data = sample_problem().with_employee(Employee::new("Olivia"));
        let errors = validate_problem(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("Olivia")));
    }

    #[test]
    fn test_duplicate_job_name() {
        let data = sample_problem().with_job(Job::new("Website"));
        let errors = validate_problem(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("Website")));
    }

    #[test]
    fn test_duplicate_qualification_label() {
        let data = sample_problem().with_qualification("A");
        let errors = validate_problem(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_vacation_out_of_range() {
        let data = sample_problem().with_employee(Employee::new("Emma").with_vacation(7));
        let errors = validate_problem(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::VacationOutOfRange));
    }

    #[test]
    fn test_unknown_qualification_reference_is_tolerated() {
        // "Z" is not in the global qualification set; this yields vacuous
        // constraints downstream rather than a validation error.
        let data = sample_problem()
            .with_employee(Employee::new("Noah").with_qualification("Z"))
            .with_job(Job::new("Audit").with_requirement("Z", 2));
        assert!(validate_problem(&data).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let data = ProblemData::new(0).with_employee(Employee::new("Olivia").with_vacation(3));
        let errors = validate_problem(&data).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
