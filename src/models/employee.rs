//! Employee model.
//!
//! An employee is a member of staff who can be assigned to jobs, carries a
//! set of qualification labels, and may be unavailable on certain days
//! (vacations). Immutable once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A staff member available for job assignments.
///
/// # Time Representation
/// Vacation days are day indices into the planning horizon `[0, horizon)`.
/// The consumer defines what day 0 means (e.g., start of the planning period).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee name.
    pub name: String,
    /// Qualification labels this employee holds.
    pub qualifications: Vec<String>,
    /// Days on which this employee is unavailable.
    pub vacations: Vec<usize>,
}

impl Employee {
    /// Creates a new employee with no qualifications and no vacations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifications: Vec::new(),
            vacations: Vec::new(),
        }
    }

    /// Adds a qualification label.
    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualifications.push(qualification.into());
        self
    }

    /// Adds a vacation day.
    pub fn with_vacation(mut self, day: usize) -> Self {
        self.vacations.push(day);
        self
    }

    /// Whether this employee holds the given qualification.
    pub fn holds(&self, qualification: &str) -> bool {
        self.qualifications.iter().any(|q| q == qualification)
    }

    /// Whether this employee is on vacation on the given day.
    pub fn is_on_vacation(&self, day: usize) -> bool {
        self.vacations.contains(&day)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee: {} (qualifications: {:?}, vacations: {:?})",
            self.name, self.qualifications, self.vacations
        )
    }
}
