//! This module defines the core data structures and types used throughout the
//! vending-machine DFA engine: symbols, states, transitions, the automaton
//! descriptor, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The fixed input alphabet (Σ) accepted by the automaton builder.
pub const ALPHABET: [char; 2] = ['0', '1'];

/// A state identifier.
///
/// The builder names states by their distance from the start state:
/// `q0`, `q1`, `q2`, ... States are scoped to a single built automaton and
/// are never shared between automata.
pub type State = String;

/// A single entry of the transition function (δ): reading `symbol` while in
/// `from` moves the automaton to `to`.
///
/// The transition function is kept as an insertion-ordered list of entries.
/// Determinism is an invariant of construction, not of the container: at most
/// one entry exists per `(from, symbol)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The source state.
    pub from: State,
    /// The input symbol consumed by this transition.
    pub symbol: char,
    /// The destination state.
    pub to: State,
}

/// A deterministic finite automaton descriptor.
///
/// This is the full tuple (Q, Σ, δ, q0, F). Instances are created by
/// [`crate::builder::build`] and treated as immutable snapshots afterwards;
/// pairs `(from, symbol)` with no entry in `transitions` represent implicit
/// rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Automaton {
    /// All states (Q), in order of creation.
    pub states: Vec<State>,
    /// The input alphabet (Σ).
    pub alphabet: Vec<char>,
    /// The partial transition function (δ), in insertion order.
    pub transitions: Vec<Transition>,
    /// The start state (q0).
    pub start: State,
    /// The accepting states (F). The builder always produces a singleton.
    pub accepting: Vec<State>,
}

impl Automaton {
    /// Looks up the destination of the transition leaving `state` on `symbol`.
    ///
    /// # Returns
    ///
    /// * `Some(&State)` if δ is defined for the pair.
    /// * `None` otherwise, which callers must treat as rejection.
    pub fn step(&self, state: &str, symbol: char) -> Option<&State> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.symbol == symbol)
            .map(|t| &t.to)
    }

    /// Runs the automaton over `input` as a strict left-to-right walk from the
    /// start state.
    ///
    /// The input is accepted only if every symbol has a defined transition and
    /// the walk ends in an accepting state with no symbols left. For built
    /// automata this holds for exactly the one sequence the automaton was
    /// constructed from.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = &self.start;

        for symbol in input.chars() {
            match self.step(current, symbol) {
                Some(next) => current = next,
                None => return false,
            }
        }

        self.accepting.contains(current)
    }
}

impl fmt::Display for Automaton {
    /// Renders the descriptor as the human-readable summary shown by the
    /// presentation layer: Σ, Q, start, accepting, and one line per δ entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alphabet = self
            .alphabet
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "Alphabet (Σ): {}", alphabet)?;
        writeln!(f, "States (Q): {}", self.states.join(", "))?;
        writeln!(f, "Start state: {}", self.start)?;
        writeln!(f, "Accepting state(s): {}", self.accepting.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Transition function (δ):")?;
        for t in &self.transitions {
            writeln!(f, "  δ({}, {}) → {}", t.from, t.symbol, t.to)?;
        }

        Ok(())
    }
}

/// Represents the errors that can occur while building an automaton or
/// deriving its regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The input contained a symbol outside the alphabet.
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Its 0-indexed position in the input.
        position: usize,
    },
    /// The transition graph contains a cycle, so recursive expansion cannot
    /// terminate.
    #[error("Cyclic transition graph detected at state {0}")]
    CyclicAutomaton(State),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Automaton {
        Automaton {
            states: vec!["q0".to_string(), "q1".to_string(), "q2".to_string()],
            alphabet: ALPHABET.to_vec(),
            transitions: vec![
                Transition {
                    from: "q0".to_string(),
                    symbol: '0',
                    to: "q1".to_string(),
                },
                Transition {
                    from: "q1".to_string(),
                    symbol: '1',
                    to: "q2".to_string(),
                },
            ],
            start: "q0".to_string(),
            accepting: vec!["q2".to_string()],
        }
    }

    #[test]
    fn test_step_lookup() {
        let automaton = chain();

        assert_eq!(automaton.step("q0", '0'), Some(&"q1".to_string()));
        assert_eq!(automaton.step("q1", '1'), Some(&"q2".to_string()));
        // Undefined pairs are implicit rejection.
        assert_eq!(automaton.step("q0", '1'), None);
        assert_eq!(automaton.step("q2", '0'), None);
    }

    #[test]
    fn test_accepts_exact_walk() {
        let automaton = chain();

        assert!(automaton.accepts("01"));
        assert!(!automaton.accepts("0")); // prefix ends in non-accepting state
        assert!(!automaton.accepts("011")); // walks off the chain
        assert!(!automaton.accepts("10"));
        assert!(!automaton.accepts(""));
    }

    #[test]
    fn test_transition_serialization() {
        let transition = Transition {
            from: "q0".to_string(),
            symbol: '1',
            to: "q1".to_string(),
        };

        let json = serde_json::to_string(&transition).unwrap();
        let deserialized: Transition = serde_json::from_str(&json).unwrap();

        assert_eq!(transition, deserialized);
    }

    #[test]
    fn test_display_summary() {
        let rendered = chain().to_string();

        assert!(rendered.contains("Alphabet (Σ): 0, 1"));
        assert!(rendered.contains("States (Q): q0, q1, q2"));
        assert!(rendered.contains("Start state: q0"));
        assert!(rendered.contains("Accepting state(s): q2"));
        assert!(rendered.contains("δ(q0, 0) → q1"));
        assert!(rendered.contains("δ(q1, 1) → q2"));
    }

    #[test]
    fn test_error_display() {
        let error = AutomatonError::InvalidSymbol {
            symbol: '2',
            position: 2,
        };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Invalid symbol"));
        assert!(error_msg.contains('2'));

        let error = AutomatonError::CyclicAutomaton("q0".to_string());
        assert!(format!("{}", error).contains("q0"));
    }
}
