use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters and wall-clock timings recorded by the solving phases.
///
/// Owned by the CSP instance: [`run_arc_consistency`] writes the propagation
/// timing, [`run_backtracking_search`] writes the counters and the search
/// timing. Each field covers its own phase only; nothing is reset mid-phase.
///
/// [`run_arc_consistency`]: crate::solver::csp::Csp::run_arc_consistency
/// [`run_backtracking_search`]: crate::solver::csp::Csp::run_backtracking_search
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolverStats {
    /// Search nodes visited: one per entry into the recursive extend step,
    /// including the root call on the empty assignment.
    pub nodes_visited: u64,
    /// Call frames that exhausted every candidate value without completing.
    pub dead_ends: u64,
    /// Elapsed wall-clock time of the last arc-consistency run.
    pub propagation_time: Duration,
    /// Elapsed wall-clock time of the last backtracking search.
    pub search_time: Duration,
}

impl SolverStats {
    /// Combined elapsed time of both phases.
    pub fn total_time(&self) -> Duration {
        self.propagation_time + self.search_time
    }
}

pub fn render_stats_table(stats: &SolverStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    let millis = |duration: Duration| format!("{:.3}", duration.as_secs_f64() * 1000.0);

    table.add_row(Row::new(vec![
        Cell::new("Search nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Dead ends"),
        Cell::new(&stats.dead_ends.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("AC-3 time (ms)"),
        Cell::new(&millis(stats.propagation_time)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Search time (ms)"),
        Cell::new(&millis(stats.search_time)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Total time (ms)"),
        Cell::new(&millis(stats.total_time())),
    ]));

    table.to_string()
}
