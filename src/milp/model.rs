//! Solver-agnostic MILP description.
//!
//! A `MilpModel` is a structured collection of boolean decision variables,
//! labelled linear constraints, and a single linear objective. Constraint
//! generators emit into this description; nothing here touches a solving
//! engine, so constraint generation is testable on its own.

/// Handle to a decision variable within one `MilpModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position of this variable in the model's creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Constraint comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `expr <= rhs`
    LessEq,
    /// `expr >= rhs`
    GreaterEq,
    /// `expr == rhs`
    Equal,
}

/// A linear expression: a sum of `coefficient * variable` terms.
#[derive(Debug, Clone, Default)]
pub struct LinExpr {
    /// `(variable, coefficient)` pairs. Variables may repeat; terms add up.
    pub terms: Vec<(VarId, f64)>,
}

impl LinExpr {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-term expression.
    pub fn term(var: VarId, coefficient: f64) -> Self {
        Self {
            terms: vec![(var, coefficient)],
        }
    }

    /// Creates a unit-coefficient sum over the given variables.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, 1.0)).collect(),
        }
    }

    /// Appends a term.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    /// Whether the expression has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the expression against per-variable values
    /// (indexed by `VarId::index`).
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coefficient)| coefficient * values[var.index()])
            .sum()
    }
}

/// A labelled linear constraint.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Human-readable label identifying the constraint instance.
    pub label: String,
    /// Left-hand side.
    pub expr: LinExpr,
    /// Comparison operator.
    pub comparison: Comparison,
    /// Right-hand side constant.
    pub rhs: f64,
}

impl LinearConstraint {
    /// `expr <= rhs`
    pub fn less_eq(label: impl Into<String>, expr: LinExpr, rhs: f64) -> Self {
        Self {
            label: label.into(),
            expr,
            comparison: Comparison::LessEq,
            rhs,
        }
    }

    /// `expr >= rhs`
    pub fn greater_eq(label: impl Into<String>, expr: LinExpr, rhs: f64) -> Self {
        Self {
            label: label.into(),
            expr,
            comparison: Comparison::GreaterEq,
            rhs,
        }
    }

    /// `expr == rhs`
    pub fn equal(label: impl Into<String>, expr: LinExpr, rhs: f64) -> Self {
        Self {
            label: label.into(),
            expr,
            comparison: Comparison::Equal,
            rhs,
        }
    }

    /// Checks the constraint against per-variable values at a tolerance.
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.expr.evaluate(values);
        match self.comparison {
            Comparison::LessEq => lhs <= self.rhs + tolerance,
            Comparison::GreaterEq => lhs >= self.rhs - tolerance,
            Comparison::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// The single linear objective.
#[derive(Debug, Clone)]
pub struct Objective {
    /// Direction of optimization.
    pub sense: Sense,
    /// Objective expression.
    pub expr: LinExpr,
}

/// A complete mixed-integer program over boolean variables.
#[derive(Debug, Clone)]
pub struct MilpModel {
    name: String,
    variable_names: Vec<String>,
    constraints: Vec<LinearConstraint>,
    objective: Option<Objective>,
}

impl MilpModel {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variable_names: Vec::new(),
            constraints: Vec::new(),
            objective: None,
        }
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a named boolean decision variable.
    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        let id = VarId(self.variable_names.len());
        self.variable_names.push(name.into());
        id
    }

    /// Adds one constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Adds a batch of constraints (one generated group).
    pub fn add_constraints(&mut self, constraints: impl IntoIterator<Item = LinearConstraint>) {
        self.constraints.extend(constraints);
    }

    /// Sets the objective, replacing any previous one.
    pub fn set_objective(&mut self, sense: Sense, expr: LinExpr) {
        self.objective = Some(Objective { sense, expr });
    }

    /// The objective, if one has been set.
    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.variable_names.len()
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Name of a variable.
    pub fn variable_name(&self, var: VarId) -> &str {
        &self.variable_names[var.index()]
    }

    /// All variable names in creation order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variable_names.iter().map(String::as_str)
    }

    /// All constraints in insertion order.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }
}
