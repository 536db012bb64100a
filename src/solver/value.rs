/// The base trait for any value that can appear in a variable's domain.
///
/// This establishes the minimum requirements for a domain value: it must be
/// cloneable, debuggable, equatable, and hashable. This is a marker trait,
/// so any type that satisfies these bounds implements `DomainValue`.
pub trait DomainValue: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> DomainValue for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// The base trait for variable identifiers.
///
/// Variables are opaque to the solver; any hashable, cloneable identifier
/// works (string names, integers, coordinate structs, ...).
pub trait VariableKey: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> VariableKey for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
