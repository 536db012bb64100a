use std::time::Instant;

use tracing::{debug, trace};

use crate::solver::{
    csp::Csp,
    value::{DomainValue, VariableKey},
    work_list::WorkList,
};

impl<V: VariableKey, K: DomainValue> Csp<V, K> {
    /// Reduces the domains in place to arc consistency with the AC-3
    /// algorithm.
    ///
    /// Returns `false` as soon as some domain becomes empty, proving the
    /// problem unsatisfiable. Returns `true` once the arc queue drains, at
    /// which point every remaining value has at least one supporting value in
    /// each neighbouring domain and a snapshot of the reduced domains is
    /// retained (see [`Csp::domains_after_reduction`]). A `true` result does
    /// not guarantee global satisfiability.
    pub fn run_arc_consistency(&mut self) -> bool {
        let started = Instant::now();

        // Seed the queue with both directed arcs of every stored constraint.
        let mut worklist = WorkList::new();
        for (xi, xj) in self.constraints.arcs() {
            worklist.push_back(xi, xj);
        }

        while let Some((xi, xj)) = worklist.pop_front() {
            if self.revise(&xi, &xj) {
                if self.domains.get(&xi).unwrap().is_empty() {
                    debug!(variable = ?xi, "domain emptied, problem is unsatisfiable");
                    self.stats.propagation_time = started.elapsed();
                    return false;
                }
                // Xi shrank, so arcs into Xi must be re-checked. The arc from
                // Xj was revised against the new domain already.
                for xk in self.constraints.neighbours(&xi) {
                    if xk != &xj {
                        worklist.push_back(xk.clone(), xi.clone());
                    }
                }
            }
        }

        debug!("arc consistency reached a fixed point");
        self.domains_after_reduction = Some(self.domains.clone());
        self.stats.propagation_time = started.elapsed();
        true
    }

    /// Removes every value in Xi's domain that has no supporting value in
    /// Xj's current domain. Returns whether anything was removed.
    fn revise(&mut self, xi: &V, xj: &V) -> bool {
        let xi_domain = self.domains.get(xi).unwrap().clone();
        let xj_domain = self.domains.get(xj).unwrap().clone();

        let mut revised = false;
        for x in xi_domain.iter() {
            let supported = xj_domain
                .iter()
                .any(|y| self.constraints.allows(xi, x, xj, y));
            if !supported {
                trace!(variable = ?xi, value = ?x, "removing unsupported value");
                self.domains.get_mut(xi).unwrap().remove(x);
                revised = true;
            }
        }
        revised
    }
}
