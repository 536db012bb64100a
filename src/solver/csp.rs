use std::collections::HashMap;

use im::HashSet;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::{BinaryRelation, ConstraintTable},
        stats::SolverStats,
        value::{DomainValue, VariableKey},
    },
};

/// The candidate values a single variable may still take.
pub type Domain<K> = HashSet<K>;
/// The current domain of every variable.
pub type Domains<V, K> = HashMap<V, Domain<K>>;
/// A (partial or complete) mapping of variables to chosen values.
pub type Assignment<V, K> = HashMap<V, K>;

/// A binary constraint satisfaction problem instance.
///
/// A `Csp` owns the problem definition (variables, domains, compiled
/// constraint table) together with all mutable solving state: the domains
/// shrink in place under [arc consistency](Csp::run_arc_consistency), and the
/// [`SolverStats`] ledger records counters and timings for both phases.
///
/// Variables are assigned in the order of the `variables` list and values in
/// the domain's iteration order; neither order is part of the contract beyond
/// being deterministic for a given instance.
#[derive(Debug, Clone)]
pub struct Csp<V: VariableKey, K: DomainValue> {
    pub(crate) variables: Vec<V>,
    pub(crate) domains: Domains<V, K>,
    pub(crate) constraints: ConstraintTable<V, K>,
    pub(crate) domains_after_reduction: Option<Domains<V, K>>,
    pub(crate) stats: SolverStats,
}

impl<V: VariableKey, K: DomainValue> Csp<V, K> {
    /// Constructs a CSP where every edge is a "must differ" constraint
    /// between the two variables it connects.
    ///
    /// Each edge is compiled, in edge order, to the set of cross-value pairs
    /// from the two endpoint domains that are not equal. Construction fails
    /// if a listed variable has no domain, or if an edge names an unknown
    /// variable or connects a variable to itself; these are caller errors,
    /// not solvable-problem conditions.
    pub fn new(variables: Vec<V>, domains: Domains<V, K>, edges: Vec<(V, V)>) -> Result<Self> {
        for var in &variables {
            if !domains.contains_key(var) {
                return Err(SolverError::MissingDomain(format!("{var:?}")).into());
            }
        }

        let mut constraints = ConstraintTable::new();
        for (left, right) in edges {
            if left == right {
                return Err(SolverError::SelfLoopEdge(format!("{left:?}")).into());
            }
            let Some(left_domain) = domains.get(&left) else {
                return Err(SolverError::UnknownVariable(format!("{left:?}")).into());
            };
            let Some(right_domain) = domains.get(&right) else {
                return Err(SolverError::UnknownVariable(format!("{right:?}")).into());
            };
            let relation = BinaryRelation::must_differ(left_domain, right_domain);
            constraints.insert(left, right, relation);
        }

        Ok(Self {
            variables,
            domains,
            constraints,
            domains_after_reduction: None,
            stats: SolverStats::default(),
        })
    }

    /// The variables of the problem, in assignment order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// The current domain of `var`: the initial domain until
    /// [`Csp::run_arc_consistency`] shrinks it.
    pub fn domain(&self, var: &V) -> Option<&Domain<K>> {
        self.domains.get(var)
    }

    /// The current domains of all variables.
    pub fn domains(&self) -> &Domains<V, K> {
        &self.domains
    }

    /// The frozen snapshot taken when arc consistency last succeeded, if it
    /// has run. Unlike [`Csp::domains`], this is not mutated by search.
    pub fn domains_after_reduction(&self) -> Option<&Domains<V, K>> {
        self.domains_after_reduction.as_ref()
    }

    /// The compiled binary constraint table.
    pub fn constraints(&self) -> &ConstraintTable<V, K> {
        &self.constraints
    }

    /// Counters and phase timings recorded so far.
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }
}
