//! Staffing domain models.
//!
//! Passive data holders describing the problem: who can work (`Employee`),
//! what must be done (`Job`), and the full instance (`ProblemData`).
//! All types are immutable after construction; behavior beyond simple
//! lookups lives in `validation`, `profit`, and `formulation`.

mod employee;
mod job;
mod problem;

pub use employee::Employee;
pub use job::Job;
pub use problem::ProblemData;
