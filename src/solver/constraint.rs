use std::collections::HashMap;

use im::HashSet;

use crate::solver::value::{DomainValue, VariableKey};

/// The compiled form of one binary constraint: the set of value pairs that
/// the two variables may jointly take.
///
/// Pairs are stored oriented as `(left value, right value)` for the variable
/// ordering under which the relation was inserted into the table. The table
/// is responsible for swapping arguments when a lookup arrives under the
/// opposite orientation.
#[derive(Debug, Clone)]
pub struct BinaryRelation<K: DomainValue> {
    allowed: HashSet<(K, K)>,
}

impl<K: DomainValue> BinaryRelation<K> {
    /// Compiles the relation from a predicate over the two variables' initial
    /// domains. Every cross pair satisfying the predicate is allowed.
    pub fn from_relation<F>(left: &HashSet<K>, right: &HashSet<K>, relation: F) -> Self
    where
        F: Fn(&K, &K) -> bool,
    {
        let mut allowed = HashSet::new();
        for a in left.iter() {
            for b in right.iter() {
                if relation(a, b) {
                    allowed.insert((a.clone(), b.clone()));
                }
            }
        }
        Self { allowed }
    }

    /// The "must differ" relation: every cross pair except equal values.
    pub fn must_differ(left: &HashSet<K>, right: &HashSet<K>) -> Self {
        Self::from_relation(left, right, |a, b| a != b)
    }

    pub fn allows(&self, left: &K, right: &K) -> bool {
        self.allowed.contains(&(left.clone(), right.clone()))
    }
}

/// Lookup table of binary constraints, keyed by an ordered variable pair.
///
/// Only the orientation under which a relation was inserted is stored, but
/// [`ConstraintTable::allows`] gives an equivalent verdict under either
/// orientation. The table is static once the CSP instance is constructed.
#[derive(Debug, Clone)]
pub struct ConstraintTable<V: VariableKey, K: DomainValue> {
    entries: HashMap<V, HashMap<V, BinaryRelation<K>>>,
    neighbours: HashMap<V, Vec<V>>,
}

impl<V: VariableKey, K: DomainValue> ConstraintTable<V, K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            neighbours: HashMap::new(),
        }
    }

    /// Stores `relation` under the ordered pair `(left, right)` and records
    /// the two variables as neighbours of each other.
    pub fn insert(&mut self, left: V, right: V, relation: BinaryRelation<K>) {
        let adjacent = self.constrains(&left, &right);
        self.entries
            .entry(left.clone())
            .or_default()
            .insert(right.clone(), relation);
        if !adjacent {
            self.neighbours
                .entry(left.clone())
                .or_default()
                .push(right.clone());
            self.neighbours.entry(right).or_default().push(left);
        }
    }

    /// Whether a constraint is stored between the two variables, under
    /// either orientation.
    pub fn constrains(&self, a: &V, b: &V) -> bool {
        self.relation(a, b).is_some() || self.relation(b, a).is_some()
    }

    /// The relation stored under exactly the ordered pair `(left, right)`,
    /// if any.
    pub fn relation(&self, left: &V, right: &V) -> Option<&BinaryRelation<K>> {
        self.entries.get(left).and_then(|row| row.get(right))
    }

    /// Checks `a = value_a, b = value_b` against whichever orientation(s) of
    /// the pair are stored, swapping arguments as needed. An unconstrained
    /// pair is vacuously allowed.
    pub fn allows(&self, a: &V, value_a: &K, b: &V, value_b: &K) -> bool {
        if let Some(relation) = self.relation(a, b) {
            if !relation.allows(value_a, value_b) {
                return false;
            }
        }
        if let Some(relation) = self.relation(b, a) {
            if !relation.allows(value_b, value_a) {
                return false;
            }
        }
        true
    }

    /// Every variable sharing a constraint with `var`, in insertion order.
    pub fn neighbours(&self, var: &V) -> &[V] {
        self.neighbours.get(var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Both directed arcs of every stored constraint: an entry under `(a, b)`
    /// yields the arcs `a -> b` and `b -> a`, each of which must be revised
    /// independently by AC-3.
    pub fn arcs(&self) -> Vec<(V, V)> {
        let mut arcs = Vec::new();
        for (left, row) in &self.entries {
            for right in row.keys() {
                arcs.push((left.clone(), right.clone()));
                arcs.push((right.clone(), left.clone()));
            }
        }
        arcs
    }
}

impl<V: VariableKey, K: DomainValue> Default for ConstraintTable<V, K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the C(k, 2) unordered edges connecting every distinct pair of the
/// given variables, used to express "all of these must differ" with binary
/// constraints only.
pub fn all_different_edges<V: VariableKey>(variables: &[V]) -> Vec<(V, V)> {
    let mut edges = Vec::new();
    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            edges.push((variables[i].clone(), variables[j].clone()));
        }
    }
    edges
}
