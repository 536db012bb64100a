//! Ligare is a solver for binary constraint satisfaction problems (CSPs).
//!
//! A problem is described by a list of variables, a finite domain of
//! candidate values per variable, and a list of edges between variables that
//! must take different values. The solver compiles the edges into explicit
//! allowed-value-pair tables, optionally reduces the domains to arc
//! consistency with AC-3, and then runs a chronological backtracking search
//! for a complete assignment. Counters and timings for both phases are kept
//! on the instance.
//!
//! # Core Concepts
//!
//! - **[`Csp`](solver::csp::Csp)**: a problem instance; owns the domains,
//!   the compiled constraint table, and the instrumentation ledger.
//! - **[`ConstraintTable`](solver::constraint::ConstraintTable)**: allowed
//!   value pairs per ordered variable pair, queryable under either
//!   orientation.
//! - **[`SolverStats`](solver::stats::SolverStats)**: node-visit and
//!   dead-end counters plus per-phase wall-clock timings.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here `x` can be `1` or `2`, `y` can only be `1`, and the two must differ,
//! so the solver has to assign `x = 2`.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use im::hashset;
//! use ligare::solver::csp::Csp;
//!
//! let domains = HashMap::from([("x", hashset![1, 2]), ("y", hashset![1])]);
//! let mut csp = Csp::new(vec!["x", "y"], domains, vec![("x", "y")]).unwrap();
//!
//! assert!(csp.run_arc_consistency());
//! let solution = csp.run_backtracking_search().unwrap().expect("satisfiable");
//! assert_eq!(solution[&"x"], 2);
//! assert_eq!(solution[&"y"], 1);
//! ```
//!
//! Unsatisfiability is an ordinary outcome, not an error: AC-3 returns
//! `false` when it empties a domain, and search returns `Ok(None)` when the
//! search space is exhausted. Errors are reserved for malformed problem
//! descriptions (see [`error::SolverError`]).
pub mod error;
pub mod problems;
pub mod solver;
