//! This module constructs the linear-chain DFA that recognizes exactly one
//! input sequence: one state per consumed prefix, one transition per symbol,
//! and the state reached after the final symbol as the sole accepting state.

use crate::types::{Automaton, AutomatonError, Transition, ALPHABET};

/// Builds the automaton that accepts exactly `input` and nothing else.
///
/// For an input of length `n` the result has `n + 1` states `q0..qn`, `n`
/// transitions forming a simple path, start state `q0`, and the singleton
/// accepting set `{qn}`. The empty input yields a single state that is both
/// start and accepting.
///
/// # Arguments
///
/// * `input` - The sequence of symbols over the alphabet `{0, 1}`.
///
/// # Returns
///
/// * `Ok(Automaton)` with a fresh descriptor owning all of its states.
/// * `Err(AutomatonError::InvalidSymbol)` on the first character outside the
///   alphabet, carrying the character and its position.
pub fn build(input: &str) -> Result<Automaton, AutomatonError> {
    let mut states = vec!["q0".to_string()];
    let mut transitions = Vec::new();
    let mut current = "q0".to_string();

    for (position, symbol) in input.chars().enumerate() {
        if !ALPHABET.contains(&symbol) {
            return Err(AutomatonError::InvalidSymbol { symbol, position });
        }

        let next = format!("q{}", position + 1);
        states.push(next.clone());
        transitions.push(Transition {
            from: current,
            symbol,
            to: next.clone(),
        });
        current = next;
    }

    Ok(Automaton {
        states,
        alphabet: ALPHABET.to_vec(),
        transitions,
        start: "q0".to_string(),
        accepting: vec![current],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_creates_simple_chain() {
        let automaton = build("01").unwrap();

        assert_eq!(automaton.states, vec!["q0", "q1", "q2"]);
        assert_eq!(automaton.alphabet, vec!['0', '1']);
        assert_eq!(automaton.start, "q0");
        assert_eq!(automaton.accepting, vec!["q2"]);

        assert_eq!(automaton.transitions.len(), 2);
        assert_eq!(
            automaton.transitions[0],
            Transition {
                from: "q0".to_string(),
                symbol: '0',
                to: "q1".to_string(),
            }
        );
        assert_eq!(
            automaton.transitions[1],
            Transition {
                from: "q1".to_string(),
                symbol: '1',
                to: "q2".to_string(),
            }
        );
    }

    #[test]
    fn test_build_state_and_transition_counts() {
        for input in ["0", "10", "101", "0110", "11111"] {
            let automaton = build(input).unwrap();

            assert_eq!(automaton.states.len(), input.len() + 1);
            assert_eq!(automaton.transitions.len(), input.len());
            assert_eq!(automaton.accepting.len(), 1);

            // Each transition advances the chain by exactly one state.
            for (i, t) in automaton.transitions.iter().enumerate() {
                assert_eq!(t.from, format!("q{}", i));
                assert_eq!(t.to, format!("q{}", i + 1));
            }
        }
    }

    #[test]
    fn test_build_empty_input() {
        let automaton = build("").unwrap();

        assert_eq!(automaton.states, vec!["q0"]);
        assert!(automaton.transitions.is_empty());
        assert_eq!(automaton.start, "q0");
        assert_eq!(automaton.accepting, vec!["q0"]);
        assert!(automaton.accepts(""));
        assert!(!automaton.accepts("0"));
    }

    #[test]
    fn test_build_rejects_invalid_symbol() {
        let result = build("102");

        assert_eq!(
            result,
            Err(AutomatonError::InvalidSymbol {
                symbol: '2',
                position: 2,
            })
        );

        // The first offending position is reported.
        assert_eq!(
            build("a01"),
            Err(AutomatonError::InvalidSymbol {
                symbol: 'a',
                position: 0,
            })
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = build("101").unwrap();
        let second = build("101").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_built_automaton_accepts_only_its_input() {
        let automaton = build("101").unwrap();

        assert!(automaton.accepts("101"));
        for other in ["", "1", "10", "1011", "100", "001", "111"] {
            assert!(!automaton.accepts(other), "accepted {:?}", other);
        }
    }
}
