//! MILP formulation of the staffing problem.
//!
//! `StaffingMilpBuilder` translates a `ProblemData` into boolean decision
//! variables, one labelled constraint group per staffing rule, and a
//! profit-maximizing objective, then reads a solved model back into a
//! `StaffingPlan`.
//!
//! # Decision variables
//!
//! - `assign[e,j,d]` — employee e works job j on day d
//! - `qualify[e,j,q]` — employee e is credited on job j under qualification q
//! - `complete[j,d]` — job j finishes on day d
//! - `qualified_work[e,j,q,d]` — the product `qualify[e,j,q] AND
//!   assign[e,j,d]`, linearized with the standard three-constraint AND
//!   linking so the model stays linear throughout
//!
//! Every variable carries a structured `VarKey` alongside its handle;
//! decoding never parses variable names.
//!
//! # Completion semantics
//!
//! `complete[j,d] = 1` is *permitted* only when cumulative qualified work
//! through day d covers every qualification requirement and at least one
//! employee works j on d. Exactly one completion per job is forced, and the
//! profit objective (non-increasing in the completion day) selects the
//! day. Completion is therefore never triggered merely because finished
//! requirements stay finished on later days.

use tracing::debug;

use crate::error::StaffingError;
use crate::milp::{
    LinExpr, LinearConstraint, MilpModel, MilpSolver, Sense, SolverConfig, VarId,
};
use crate::models::ProblemData;
use crate::profit::profit_table;
use crate::solution::{read_binary, Completion, RoleAssignment, StaffingPlan, WorkAssignment};

/// Structured identity of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKey {
    /// `assign[e,j,d]`
    Assign {
        employee: usize,
        job: usize,
        day: usize,
    },
    /// `qualify[e,j,q]`
    Qualify {
        employee: usize,
        job: usize,
        qualification: usize,
    },
    /// `complete[j,d]`
    Complete { job: usize, day: usize },
    /// `qualify[e,j,q] AND assign[e,j,d]`
    QualifiedWork {
        employee: usize,
        job: usize,
        qualification: usize,
        day: usize,
    },
}

/// Builds the staffing MILP and interprets its solutions.
pub struct StaffingMilpBuilder<'a> {
    data: &'a ProblemData,
    model: MilpModel,
    keys: Vec<VarKey>,
    /// `[employee][job][day]`
    assign: Vec<Vec<Vec<VarId>>>,
    /// `[employee][job][qualification]`
    qualify: Vec<Vec<Vec<VarId>>>,
    /// `[job][day]`
    complete: Vec<Vec<VarId>>,
    /// `[employee][job][qualification][day]`
    qualified_work: Vec<Vec<Vec<Vec<VarId>>>>,
}

impl<'a> StaffingMilpBuilder<'a> {
    /// Creates the builder and all decision variables.
    pub fn new(data: &'a ProblemData) -> Self {
        let mut model = MilpModel::new("staffing");
        let mut keys = Vec::new();
        let staff = data.employee_count();
        let jobs = data.job_count();
        let quals = data.qualification_count();
        let horizon = data.horizon;

        let assign = (0..staff)
            .map(|e| {
                (0..jobs)
                    .map(|j| {
                        (0..horizon)
                            .map(|d| {
                                keys.push(VarKey::Assign {
                                    employee: e,
                                    job: j,
                                    day: d,
                                });
                                model.add_binary(format!("assign[{e},{j},{d}]"))
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();

        let qualify = (0..staff)
            .map(|e| {
                (0..jobs)
                    .map(|j| {
                        (0..quals)
                            .map(|q| {
                                keys.push(VarKey::Qualify {
                                    employee: e,
                                    job: j,
                                    qualification: q,
                                });
                                model.add_binary(format!("qualify[{e},{j},{q}]"))
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();

        let complete = (0..jobs)
            .map(|j| {
                (0..horizon)
                    .map(|d| {
                        keys.push(VarKey::Complete { job: j, day: d });
                        model.add_binary(format!("complete[{j},{d}]"))
                    })
                    .collect()
            })
            .collect();

        let qualified_work = (0..staff)
            .map(|e| {
                (0..jobs)
                    .map(|j| {
                        (0..quals)
                            .map(|q| {
                                (0..horizon)
                                    .map(|d| {
                                        keys.push(VarKey::QualifiedWork {
                                            employee: e,
                                            job: j,
                                            qualification: q,
                                            day: d,
                                        });
                                        model.add_binary(format!("qualified_work[{e},{j},{q},{d}]"))
                                    })
                                    .collect()
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();

        Self {
            data,
            model,
            keys,
            assign,
            qualify,
            complete,
            qualified_work,
        }
    }

    /// The structured key of a variable.
    pub fn key(&self, var: VarId) -> VarKey {
        self.keys[var.index()]
    }

    /// An employee may only be credited under a qualification it holds:
    /// `qualify[e,j,q] = 0` otherwise. The variable is forced rather than
    /// omitted to keep indexing dense.
    pub fn qualification_eligibility(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for (e, employee) in self.data.staff.iter().enumerate() {
            for j in 0..self.data.job_count() {
                for (q, label) in self.data.qualifications.iter().enumerate() {
                    if !employee.holds(label) {
                        out.push(LinearConstraint::equal(
                            format!("qualification_eligibility[{e},{j},{q}]"),
                            LinExpr::term(self.qualify[e][j][q], 1.0),
                            0.0,
                        ));
                    }
                }
            }
        }
        out
    }

    /// At most one qualification role per (employee, job):
    /// `sum_q qualify[e,j,q] <= 1`.
    pub fn single_qualification(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for e in 0..self.data.employee_count() {
            for j in 0..self.data.job_count() {
                out.push(LinearConstraint::less_eq(
                    format!("single_qualification[{e},{j}]"),
                    LinExpr::sum(self.qualify[e][j].iter().copied()),
                    1.0,
                ));
            }
        }
        out
    }

    /// At most one job per employee per day: `sum_j assign[e,j,d] <= 1`.
    pub fn one_job_per_day(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for e in 0..self.data.employee_count() {
            for d in 0..self.data.horizon {
                out.push(LinearConstraint::less_eq(
                    format!("one_job_per_day[{e},{d}]"),
                    LinExpr::sum((0..self.data.job_count()).map(|j| self.assign[e][j][d])),
                    1.0,
                ));
            }
        }
        out
    }

    /// No work on vacation days: `assign[e,j,d] = 0` for every vacation
    /// day d of employee e. Out-of-horizon vacation days (rejected by
    /// validation anyway) are skipped rather than indexed.
    pub fn vacation_exclusion(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for (e, employee) in self.data.staff.iter().enumerate() {
            for j in 0..self.data.job_count() {
                for &d in employee.vacations.iter().filter(|&&d| d < self.data.horizon) {
                    out.push(LinearConstraint::equal(
                        format!("vacation[{e},{j},{d}]"),
                        LinExpr::term(self.assign[e][j][d], 1.0),
                        0.0,
                    ));
                }
            }
        }
        out
    }

    /// Completion support. For each (job, day):
    /// - per required qualification q: cumulative qualified work through d
    ///   must reach the requirement whenever the job completes on d:
    ///   `sum_{e, d' <= d} qualified_work[e,j,q,d'] >= req * complete[j,d]`
    ///   (the workload cap bounds the cumulative sum above by `req`, so
    ///   this is an exact "requirement met" test);
    /// - someone must work the job on its completion day:
    ///   `sum_e assign[e,j,d] >= complete[j,d]`.
    pub fn completion_support(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for (j, job) in self.data.jobs.iter().enumerate() {
            for d in 0..self.data.horizon {
                for (q, label) in self.data.qualifications.iter().enumerate() {
                    let required = job.required_days(label);
                    if required == 0 {
                        continue;
                    }
                    let mut expr = LinExpr::new();
                    for e in 0..self.data.employee_count() {
                        for prior in 0..=d {
                            expr.add_term(self.qualified_work[e][j][q][prior], 1.0);
                        }
                    }
                    expr.add_term(self.complete[j][d], -f64::from(required));
                    out.push(LinearConstraint::greater_eq(
                        format!("completion_work[{j},{d},{q}]"),
                        expr,
                        0.0,
                    ));
                }

                let mut presence = LinExpr::sum(
                    (0..self.data.employee_count()).map(|e| self.assign[e][j][d]),
                );
                presence.add_term(self.complete[j][d], -1.0);
                out.push(LinearConstraint::greater_eq(
                    format!("completion_presence[{j},{d}]"),
                    presence,
                    0.0,
                ));
            }
        }
        out
    }

    /// Each job completes exactly once: `sum_d complete[j,d] = 1`.
    /// A job that cannot be scheduled within the horizon makes the model
    /// infeasible.
    pub fn single_completion(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for j in 0..self.data.job_count() {
            out.push(LinearConstraint::equal(
                format!("single_completion[{j}]"),
                LinExpr::sum(self.complete[j].iter().copied()),
                1.0,
            ));
        }
        out
    }

    /// A credited qualification role implies at least one day of work:
    /// `sum_d assign[e,j,d] >= qualify[e,j,q]`.
    pub fn no_idle_qualification(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for e in 0..self.data.employee_count() {
            for j in 0..self.data.job_count() {
                for q in 0..self.data.qualification_count() {
                    let mut expr = LinExpr::sum(self.assign[e][j].iter().copied());
                    expr.add_term(self.qualify[e][j][q], -1.0);
                    out.push(LinearConstraint::greater_eq(
                        format!("no_idle_qualification[{e},{j},{q}]"),
                        expr,
                        0.0,
                    ));
                }
            }
        }
        out
    }

    /// Qualified employee-days per (job, qualification) never exceed the
    /// requirement: `sum_{e,d} qualified_work[e,j,q,d] <= req`. With a
    /// zero requirement this pins the product variables to zero, which is
    /// the degenerate (vacuous) case for unreferenced qualifications.
    pub fn workload_cap(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for (j, job) in self.data.jobs.iter().enumerate() {
            for (q, label) in self.data.qualifications.iter().enumerate() {
                let mut expr = LinExpr::new();
                for e in 0..self.data.employee_count() {
                    for d in 0..self.data.horizon {
                        expr.add_term(self.qualified_work[e][j][q][d], 1.0);
                    }
                }
                out.push(LinearConstraint::less_eq(
                    format!("workload_cap[{j},{q}]"),
                    expr,
                    f64::from(job.required_days(label)),
                ));
            }
        }
        out
    }

    /// AND-linking for the product family:
    /// `qualified_work <= qualify`, `qualified_work <= assign`,
    /// `qualified_work >= qualify + assign - 1`.
    pub fn product_linking(&self) -> Vec<LinearConstraint> {
        let mut out = Vec::new();
        for e in 0..self.data.employee_count() {
            for j in 0..self.data.job_count() {
                for q in 0..self.data.qualification_count() {
                    for d in 0..self.data.horizon {
                        let w = self.qualified_work[e][j][q][d];
                        let y = self.qualify[e][j][q];
                        let a = self.assign[e][j][d];

                        let mut upper_y = LinExpr::term(w, 1.0);
                        upper_y.add_term(y, -1.0);
                        out.push(LinearConstraint::less_eq(
                            format!("and_link_qualify[{e},{j},{q},{d}]"),
                            upper_y,
                            0.0,
                        ));

                        let mut upper_a = LinExpr::term(w, 1.0);
                        upper_a.add_term(a, -1.0);
                        out.push(LinearConstraint::less_eq(
                            format!("and_link_assign[{e},{j},{q},{d}]"),
                            upper_a,
                            0.0,
                        ));

                        let mut lower = LinExpr::term(w, 1.0);
                        lower.add_term(y, -1.0);
                        lower.add_term(a, -1.0);
                        out.push(LinearConstraint::greater_eq(
                            format!("and_link_lower[{e},{j},{q},{d}]"),
                            lower,
                            -1.0,
                        ));
                    }
                }
            }
        }
        out
    }

    /// The profit objective: `sum_{j,d} profit(j,d) * complete[j,d]`.
    /// Independent of all constraint groups, so an alternate single
    /// linear objective can be swapped in without touching them.
    pub fn profit_objective(&self) -> LinExpr {
        let table = profit_table(self.data);
        let mut expr = LinExpr::new();
        for j in 0..self.data.job_count() {
            for d in 0..self.data.horizon {
                expr.add_term(self.complete[j][d], table[j][d] as f64);
            }
        }
        expr
    }

    /// Assembles the complete model: every constraint group plus the
    /// profit objective.
    pub fn build(&self) -> MilpModel {
        let mut model = self.model.clone();
        model.add_constraints(self.qualification_eligibility());
        model.add_constraints(self.single_qualification());
        model.add_constraints(self.one_job_per_day());
        model.add_constraints(self.vacation_exclusion());
        model.add_constraints(self.completion_support());
        model.add_constraints(self.single_completion());
        model.add_constraints(self.no_idle_qualification());
        model.add_constraints(self.workload_cap());
        model.add_constraints(self.product_linking());
        model.set_objective(Sense::Maximize, self.profit_objective());

        debug!(
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "built staffing model"
        );
        model
    }

    /// Builds the model, blocks on one optimize call, and interprets the
    /// result. Infeasible and unbounded outcomes yield a plan without
    /// assignments, not an error.
    pub fn solve<S: MilpSolver>(
        &self,
        solver: &S,
        config: &SolverConfig,
    ) -> Result<StaffingPlan, StaffingError> {
        let model = self.build();
        let solution = solver.solve(&model, config)?;
        if !solution.is_optimal() {
            return Ok(StaffingPlan::without_assignments(solution.status()));
        }
        self.decode(&model, &solution)
    }

    /// Walks every variable by its structured key and emits the
    /// domain-level facts for solved-true variables. Iteration follows
    /// variable-creation order, so output ordering is deterministic.
    fn decode(
        &self,
        model: &MilpModel,
        solution: &crate::milp::MilpSolution,
    ) -> Result<StaffingPlan, StaffingError> {
        let mut plan = StaffingPlan {
            status: solution.status(),
            objective_value: Some(solution.objective_value()),
            work: Vec::new(),
            roles: Vec::new(),
            completions: Vec::new(),
        };

        for (index, key) in self.keys.iter().enumerate() {
            let var = VarId(index);
            let raw = solution.value(var);
            if !read_binary(model.variable_name(var), raw)? {
                continue;
            }
            match *key {
                VarKey::Assign { employee, job, day } => plan.work.push(WorkAssignment {
                    employee: self.data.staff[employee].name.clone(),
                    job: self.data.jobs[job].name.clone(),
                    day,
                }),
                VarKey::Qualify {
                    employee,
                    job,
                    qualification,
                } => plan.roles.push(RoleAssignment {
                    employee: self.data.staff[employee].name.clone(),
                    job: self.data.jobs[job].name.clone(),
                    qualification: self.data.qualifications[qualification].clone(),
                }),
                VarKey::Complete { job, day } => plan.completions.push(Completion {
                    job: self.data.jobs[job].name.clone(),
                    day,
                }),
                // Linearization scaffolding, not a domain fact.
                VarKey::QualifiedWork { .. } => {}
            }
        }

        Ok(plan)
    }
}
