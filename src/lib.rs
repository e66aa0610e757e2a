//! This crate provides the core logic for a vending-machine DFA engine.
//! It includes modules for building a linear-chain automaton that recognizes
//! a single binary sequence, deriving an equivalent regular expression by
//! state elimination, and looking up sequences in the fixed product catalog.

pub mod builder;
pub mod catalog;
pub mod deriver;
pub mod types;

/// Re-exports the `build` function from the builder module.
pub use builder::build;
/// Re-exports the catalog table, lookup function, and `Product` record.
pub use catalog::{lookup, Product, PRODUCTS};
/// Re-exports the derivation entry points and rule types from the deriver module.
pub use deriver::{derive, rules, Derivation, ProductionRule, Term};
/// Re-exports the automaton types and the shared error type.
pub use types::{Automaton, AutomatonError, State, Transition, ALPHABET};
