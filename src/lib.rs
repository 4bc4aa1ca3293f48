//! Workforce staffing optimization.
//!
//! Assigns employees to time-bounded jobs over a finite planning horizon to
//! maximize total profit: each job yields a fixed gain when finished by its
//! due date and loses a daily penalty afterwards (floored at zero), and
//! requires a given number of employee-days of work per qualification.
//!
//! The crate is the *formulation* layer: it translates the domain problem
//! into a mixed-integer linear program and interprets solved models back
//! into staffing decisions. The combinatorial search itself lives behind
//! the `milp::MilpSolver` trait; a reference engine over `good_lp` with the
//! pure-Rust `microlp` backend is included.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Job`, `ProblemData`
//! - **`validation`**: Input integrity checks (duplicate names, vacation range)
//! - **`profit`**: Completion-day profit and the objective coefficient table
//! - **`milp`**: Solver-agnostic model description and the solver boundary
//! - **`formulation`**: `StaffingMilpBuilder` — variables, constraint
//!   groups, objective, and solution decoding
//! - **`solution`**: `StaffingPlan` — interpreted staffing decisions and the
//!   textual report
//! - **`datasets`**: Bundled "small" / "medium" / "large" instances
//!
//! # Example
//!
//! ```no_run
//! use staffplan::datasets;
//! use staffplan::formulation::StaffingMilpBuilder;
//! use staffplan::milp::{GoodLpSolver, SolverConfig};
//!
//! let data = datasets::load_named("small")?;
//! let builder = StaffingMilpBuilder::new(&data);
//! let plan = builder.solve(&GoodLpSolver::new(), &SolverConfig::default())?;
//! print!("{}", plan.report());
//! # Ok::<(), staffplan::StaffingError>(())
//! ```

pub mod datasets;
pub mod error;
pub mod formulation;
pub mod milp;
pub mod models;
pub mod profit;
pub mod solution;
pub mod validation;

pub use error::StaffingError;
