//! Problem frontends: builders that translate a concrete puzzle into a
//! [`Csp`](crate::solver::csp::Csp) instance plus renderers for the results.
//! Nothing in here is required by the solver itself.
pub mod sudoku;
