//! Reference `MilpSolver` over `good_lp`.
//!
//! Uses the pure-Rust `microlp` branch-and-bound backend, so solving works
//! without system solver libraries. The configured time limit is carried by
//! the trait contract but is advisory here: microlp exposes no deadline
//! parameter, and a solve runs to completion.

use good_lp::{default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable};
use tracing::debug;

use super::model::{Comparison, LinExpr, MilpModel, Sense};
use super::solver::{MilpSolution, MilpSolver, SolveStatus, SolverConfig, SolverError};

/// MILP engine backed by `good_lp` with `microlp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }
}

fn to_expression(expr: &LinExpr, handles: &[Variable]) -> Expression {
    let mut out = Expression::with_capacity(expr.terms.len());
    for &(var, coefficient) in &expr.terms {
        out.add_mul(coefficient, handles[var.index()]);
    }
    out
}

impl MilpSolver for GoodLpSolver {
    fn name(&self) -> &str {
        "good_lp/microlp"
    }

    fn solve(&self, model: &MilpModel, config: &SolverConfig) -> Result<MilpSolution, SolverError> {
        let objective = model
            .objective()
            .ok_or_else(|| SolverError::MissingObjective(model.name().to_string()))?;

        if let Some(limit) = config.time_limit {
            debug!(?limit, "time limit is advisory for the microlp backend");
        }

        let mut vars = variables!();
        let handles: Vec<Variable> = model
            .variable_names()
            .map(|name| vars.add(variable().binary().name(name)))
            .collect();

        let objective_expr = to_expression(&objective.expr, &handles);
        let mut problem = match objective.sense {
            Sense::Maximize => vars.maximise(objective_expr),
            Sense::Minimize => vars.minimise(objective_expr),
        }
        .using(default_solver);

        for constraint in model.constraints() {
            let lhs = to_expression(&constraint.expr, &handles);
            problem = problem.with(match constraint.comparison {
                Comparison::LessEq => lhs.leq(constraint.rhs),
                Comparison::GreaterEq => lhs.geq(constraint.rhs),
                Comparison::Equal => lhs.eq(constraint.rhs),
            });
        }

        debug!(
            model = model.name(),
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "submitting model to {}",
            self.name()
        );

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = handles.iter().map(|&h| solution.value(h)).collect();
                let objective_value = objective.expr.evaluate(&values);
                debug!(objective_value, "optimal solution found");
                Ok(MilpSolution::optimal(objective_value, values))
            }
            Err(ResolutionError::Infeasible) => {
                Ok(MilpSolution::without_assignment(SolveStatus::Infeasible))
            }
            Err(ResolutionError::Unbounded) => {
                Ok(MilpSolution::without_assignment(SolveStatus::Unbounded))
            }
            Err(other) => Err(SolverError::Backend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milp::model::{LinExpr, LinearConstraint, MilpModel, Sense};

    #[test]
    fn test_solve_small_maximization() {
        // max x + y  s.t.  x + y <= 1  → objective 1
        let mut model = MilpModel::new("tiny");
        let x = model.add_binary("x");
        let y = model.add_binary("y");
        model.add_constraint(LinearConstraint::less_eq(
            "at_most_one",
            LinExpr::sum([x, y]),
            1.0,
        ));
        model.set_objective(Sense::Maximize, LinExpr::sum([x, y]));

        let solution = GoodLpSolver::new()
            .solve(&model, &SolverConfig::default())
            .unwrap();

        assert!(solution.is_optimal());
        assert!((solution.objective_value() - 1.0).abs() < 1e-6);
        let picked = solution.value(x) + solution.value(y);
        assert!((picked - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_objective_prefers_heavier_variable() {
        // max 2x + y  s.t.  x + y <= 1  → x = 1
        let mut model = MilpModel::new("weighted");
        let x = model.add_binary("x");
        let y = model.add_binary("y");
        model.add_constraint(LinearConstraint::less_eq(
            "at_most_one",
            LinExpr::sum([x, y]),
            1.0,
        ));
        let mut objective = LinExpr::term(x, 2.0);
        objective.add_term(y, 1.0);
        model.set_objective(Sense::Maximize, objective);

        let solution = GoodLpSolver::new()
            .solve(&model, &SolverConfig::default())
            .unwrap();

        assert!(solution.is_optimal());
        assert!((solution.value(x) - 1.0).abs() < 1e-6);
        assert!(solution.value(y).abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_model_reports_status() {
        // x >= 1 and x <= 0 cannot both hold
        let mut model = MilpModel::new("infeasible");
        let x = model.add_binary("x");
        model.add_constraint(LinearConstraint::greater_eq("force_on", LinExpr::term(x, 1.0), 1.0));
        model.add_constraint(LinearConstraint::less_eq("force_off", LinExpr::term(x, 1.0), 0.0));
        model.set_objective(Sense::Maximize, LinExpr::term(x, 1.0));

        let solution = GoodLpSolver::new()
            .solve(&model, &SolverConfig::default())
            .unwrap();

        assert_eq!(solution.status(), SolveStatus::Infeasible);
    }

    #[test]
    fn test_missing_objective_is_an_error() {
        let model = MilpModel::new("no_objective");
        let result = GoodLpSolver::new().solve(&model, &SolverConfig::default());
        assert!(matches!(result, Err(SolverError::MissingObjective(_))));
    }

    #[test]
    fn test_equality_constraint() {
        // max x + y  s.t.  x + y == 1
        let mut model = MilpModel::new("equality");
        let x = model.add_binary("x");
        let y = model.add_binary("y");
        model.add_constraint(LinearConstraint::equal(
            "exactly_one",
            LinExpr::sum([x, y]),
            1.0,
        ));
        model.set_objective(Sense::Maximize, LinExpr::sum([x, y]));

        let solution = GoodLpSolver::new()
            .solve(&model, &SolverConfig::default())
            .unwrap();

        assert!(solution.is_optimal());
        assert!((solution.objective_value() - 1.0).abs() < 1e-6);
    }
}
