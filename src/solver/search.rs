use std::time::Instant;

use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        csp::{Assignment, Csp},
        value::{DomainValue, VariableKey},
    },
};

impl<V: VariableKey, K: DomainValue> Csp<V, K> {
    /// Depth-first backtracking search over the current (possibly reduced)
    /// domains.
    ///
    /// Variables are assigned in list order and candidate values tried in
    /// domain order; the first complete assignment found is returned.
    /// `Ok(None)` means the search space was exhausted and no solution
    /// exists. Invoking search on a problem with no variables is a
    /// configuration error.
    ///
    /// The node-visit and dead-end counters are reset at the start of each
    /// search and can be read back from [`Csp::stats`].
    pub fn run_backtracking_search(&mut self) -> Result<Option<Assignment<V, K>>> {
        if self.variables.is_empty() {
            return Err(SolverError::EmptyProblem.into());
        }

        let started = Instant::now();
        self.stats.nodes_visited = 0;
        self.stats.dead_ends = 0;

        let mut assignment = Assignment::new();
        let found = self.backtrack(&mut assignment);
        self.stats.search_time = started.elapsed();

        if found {
            debug!(
                nodes = self.stats.nodes_visited,
                dead_ends = self.stats.dead_ends,
                "search found a complete assignment"
            );
            Ok(Some(assignment))
        } else {
            debug!(
                nodes = self.stats.nodes_visited,
                dead_ends = self.stats.dead_ends,
                "search space exhausted without a solution"
            );
            Ok(None)
        }
    }

    /// One search node: extend `assignment` by the next unassigned variable.
    /// On `false` the tentative binding has been fully undone.
    fn backtrack(&mut self, assignment: &mut Assignment<V, K>) -> bool {
        self.stats.nodes_visited += 1;

        if assignment.len() == self.variables.len() {
            return true;
        }

        // Static order: first unassigned variable in the original list.
        let var = self
            .variables
            .iter()
            .find(|v| !assignment.contains_key(*v))
            .cloned()
            .unwrap();

        let candidates = self.domains.get(&var).unwrap().clone();
        for value in candidates.iter() {
            if self.is_consistent(&var, value, assignment) {
                assignment.insert(var.clone(), value.clone());
                if self.backtrack(assignment) {
                    return true;
                }
                assignment.remove(&var);
            }
        }

        self.stats.dead_ends += 1;
        false
    }

    /// Whether `var = value` violates any constraint against the variables
    /// assigned so far, checking both orientations of each pair.
    fn is_consistent(&self, var: &V, value: &K, assignment: &Assignment<V, K>) -> bool {
        assignment
            .iter()
            .all(|(other, other_value)| self.constraints.allows(var, value, other, other_value))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use im::hashset;
    use proptest::prelude::*;

    use crate::solver::{
        constraint::all_different_edges,
        csp::{Assignment, Csp, Domains},
    };

    /// Checks a complete assignment against a list of must-differ edges.
    fn satisfies_must_differ(assignment: &Assignment<u8, u8>, edges: &[(u8, u8)]) -> bool {
        edges
            .iter()
            .all(|(a, b)| assignment.get(a) != assignment.get(b))
    }

    /// Exhaustive enumeration over the given domains, the ground truth the
    /// solver is compared against.
    fn exhaustive_has_solution(
        variables: &[u8],
        domains: &Domains<u8, u8>,
        edges: &[(u8, u8)],
        partial: &mut Assignment<u8, u8>,
    ) -> bool {
        if partial.len() == variables.len() {
            return true;
        }
        let var = variables[partial.len()];
        for value in domains.get(&var).unwrap().iter() {
            let consistent = partial.iter().all(|(other, other_value)| {
                let constrained = edges
                    .iter()
                    .any(|(a, b)| (*a == var && b == other) || (a == other && *b == var));
                !constrained || other_value != value
            });
            if consistent {
                partial.insert(var, *value);
                if exhaustive_has_solution(variables, domains, edges, partial) {
                    return true;
                }
                partial.remove(&var);
            }
        }
        false
    }

    #[test]
    fn two_variables_must_differ() {
        let domains = HashMap::from([("x", hashset![1, 2]), ("y", hashset![1, 2])]);
        let mut csp = Csp::new(vec!["x", "y"], domains, vec![("x", "y")]).unwrap();

        let solution = csp.run_backtracking_search().unwrap().unwrap();
        assert_eq!(solution.len(), 2);
        assert_ne!(solution[&"x"], solution[&"y"]);
    }

    #[test]
    fn three_pairwise_different_booleans_have_no_solution() {
        // AC-3 cannot detect this (every arc has support), so search has to.
        let domains = HashMap::from([
            ("a", hashset![1, 2]),
            ("b", hashset![1, 2]),
            ("c", hashset![1, 2]),
        ]);
        let mut csp = Csp::new(
            vec!["a", "b", "c"],
            domains,
            vec![("a", "b"), ("a", "c"), ("b", "c")],
        )
        .unwrap();

        assert!(csp.run_backtracking_search().unwrap().is_none());
        assert!(csp.stats().dead_ends >= 1);
    }

    #[test]
    fn search_works_without_prior_reduction() {
        let domains = HashMap::from([("x", hashset![7]), ("y", hashset![7, 8])]);
        let mut csp = Csp::new(vec!["x", "y"], domains, vec![("x", "y")]).unwrap();

        let solution = csp.run_backtracking_search().unwrap().unwrap();
        assert_eq!(solution[&"x"], 7);
        assert_eq!(solution[&"y"], 8);
    }

    #[test]
    fn trivial_instance_has_no_dead_ends() {
        let domains = HashMap::from([("only", hashset![1])]);
        let mut csp = Csp::new(vec!["only"], domains, vec![]).unwrap();

        let solution = csp.run_backtracking_search().unwrap().unwrap();
        assert_eq!(solution[&"only"], 1);
        assert_eq!(csp.stats().dead_ends, 0);
        assert!(csp.stats().nodes_visited >= 1);
    }

    #[test]
    fn node_count_covers_every_variable_on_success() {
        let domains = HashMap::from([
            ("a", hashset![1, 2, 3]),
            ("b", hashset![1, 2, 3]),
            ("c", hashset![1, 2, 3]),
        ]);
        let mut csp = Csp::new(
            vec!["a", "b", "c"],
            domains,
            vec![("a", "b"), ("a", "c"), ("b", "c")],
        )
        .unwrap();

        assert!(csp.run_backtracking_search().unwrap().is_some());
        assert!(csp.stats().nodes_visited >= 3);
    }

    #[test]
    fn failed_search_leaves_no_stale_bindings_behind() {
        let domains = HashMap::from([("a", hashset![1]), ("b", hashset![1])]);
        let mut csp = Csp::new(vec!["a", "b"], domains, vec![("a", "b")]).unwrap();

        assert!(csp.run_backtracking_search().unwrap().is_none());
        // The instance is still usable: a second search reaches the same verdict.
        assert!(csp.run_backtracking_search().unwrap().is_none());
    }

    /// Random small instances: up to 4 variables, domains drawn from {0..3},
    /// an arbitrary subset of the pairwise must-differ edges.
    fn instance_strategy() -> impl Strategy<Value = (Vec<u8>, Domains<u8, u8>, Vec<(u8, u8)>)> {
        (2..=4usize).prop_flat_map(|n| {
            let variables: Vec<u8> = (0..n as u8).collect();
            let all_edges = all_different_edges(&variables);
            let edge_count = all_edges.len();
            (
                Just(variables),
                proptest::collection::vec(proptest::collection::hash_set(0u8..4, 0..=3), n),
                proptest::sample::subsequence(all_edges, 0..=edge_count),
            )
                .prop_map(|(variables, raw_domains, edges)| {
                    let domains = variables
                        .iter()
                        .copied()
                        .zip(
                            raw_domains
                                .into_iter()
                                .map(|d| d.into_iter().collect::<im::HashSet<u8>>()),
                        )
                        .collect();
                    (variables, domains, edges)
                })
        })
    }

    proptest! {
        // Search is sound (returned assignments satisfy every edge) and
        // complete (it finds a solution exactly when exhaustive enumeration
        // does).
        #[test]
        fn search_agrees_with_exhaustive_enumeration(
            (variables, domains, edges) in instance_strategy()
        ) {
            let exhaustive = exhaustive_has_solution(
                &variables,
                &domains,
                &edges,
                &mut Assignment::new(),
            );

            let mut csp = Csp::new(variables.clone(), domains, edges.clone()).unwrap();
            let result = csp.run_backtracking_search().unwrap();

            prop_assert_eq!(result.is_some(), exhaustive);
            if let Some(solution) = result {
                prop_assert_eq!(solution.len(), variables.len());
                prop_assert!(satisfies_must_differ(&solution, &edges));
            }
        }

        // AC-3 never reports failure on a satisfiable instance, and a
        // subsequent search over the reduced domains agrees with enumeration
        // over the original ones.
        #[test]
        fn reduction_preserves_satisfiability(
            (variables, domains, edges) in instance_strategy()
        ) {
            let exhaustive = exhaustive_has_solution(
                &variables,
                &domains,
                &edges,
                &mut Assignment::new(),
            );

            let mut csp = Csp::new(variables, domains, edges).unwrap();
            if csp.run_arc_consistency() {
                let result = csp.run_backtracking_search().unwrap();
                prop_assert_eq!(result.is_some(), exhaustive);
            } else {
                prop_assert!(!exhaustive);
            }
        }
    }
}
