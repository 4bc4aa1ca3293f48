//! Problem instance model.
//!
//! Bundles the planning horizon, the global qualification set, the staff,
//! and the jobs into one problem instance. Matches the JSON input schema
//! consumed by `datasets`.

use serde::{Deserialize, Serialize};

use super::{Employee, Job};

/// A complete staffing problem instance.
///
/// # Invariant
/// Qualification labels referenced by jobs or employees should belong to
/// `qualifications`. Labels that do not are tolerated: they yield vacuous
/// constraints in the formulation (the qualification can never be assigned),
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemData {
    /// Number of scheduling days; days are indexed `0..horizon`.
    pub horizon: usize,
    /// Global ordered set of qualification labels.
    pub qualifications: Vec<String>,
    /// Employees available for assignment.
    pub staff: Vec<Employee>,
    /// Jobs to be completed within the horizon.
    pub jobs: Vec<Job>,
}

impl ProblemData {
    /// Creates an empty problem over the given horizon.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            qualifications: Vec::new(),
            staff: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Adds a qualification label to the global set.
    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualifications.push(qualification.into());
        self
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.staff.push(employee);
        self
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Index of a qualification label in the global set.
    pub fn qualification_index(&self, label: &str) -> Option<usize> {
        self.qualifications.iter().position(|q| q == label)
    }

    /// Number of employees.
    pub fn employee_count(&self) -> usize {
        self.staff.len()
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Number of qualification labels in the global set.
    pub fn qualification_count(&self) -> usize {
        self.qualifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_builder() {
        let data = ProblemData::new(10)
            .with_qualification("A")
            .with_qualification("B")
            .with_employee(Employee::new("Olivia").with_qualification("A"))
            .with_job(Job::new("Website").with_gain(100));

        assert_eq!(data.horizon, 10);
        assert_eq!(data.qualification_count(), 2);
        assert_eq!(data.employee_count(), 1);
        assert_eq!(data.job_count(), 1);
    }

    #[test]
    fn test_qualification_index() {
        let data = ProblemData::new(5)
            .with_qualification("A")
            .with_qualification("B");

        assert_eq!(data.qualification_index("A"), Some(0));
        assert_eq!(data.qualification_index("B"), Some(1));
        assert_eq!(data.qualification_index("Z"), None);
    }

    #[test]
    fn test_json_schema_round_trip() {
        let json = r#"{
            "horizon": 3,
            "qualifications": ["A"],
            "staff": [{"name": "Olivia", "qualifications": ["A"], "vacations": [1]}],
            "jobs": [{
                "name": "Website",
                "gain": 100,
                "due_date": 2,
                "daily_penalty": 10,
                "working_days_per_qualification": {"A": 1}
            }]
        }"#;

        let data: ProblemData = serde_json::from_str(json).unwrap();
        assert_eq!(data.horizon, 3);
        assert_eq!(data.staff[0].vacations, vec![1]);
        assert_eq!(data.jobs[0].required_days("A"), 1);
    }
}
