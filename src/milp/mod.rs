//! MILP model description and the solver-adapter boundary.
//!
//! `model` holds the solver-agnostic description (variables, labelled
//! linear constraints, one objective); `solver` defines the contract a
//! solving engine must satisfy; `backend` provides the reference engine
//! over `good_lp`/`microlp`.

mod backend;
mod model;
mod solver;

pub use backend::GoodLpSolver;
pub use model::{Comparison, LinExpr, LinearConstraint, MilpModel, Objective, Sense, VarId};
pub use solver::{MilpSolution, MilpSolver, SolveStatus, SolverConfig, SolverError};
