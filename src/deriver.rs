//! This module derives a regular expression equivalent to an automaton by
//! state elimination: one production rule per state describing its outgoing
//! transitions, then recursive substitution of state references until only
//! literal symbols remain in the start state's expression.

use crate::types::{Automaton, AutomatonError, State, Transition};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One piece of a production rule: either a literal input symbol or a
/// reference to another state's rule.
///
/// Rules are kept structured until rendering; expansion substitutes state
/// references by walking terms, never by re-parsing formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A literal symbol from the alphabet.
    Symbol(char),
    /// A reference to the production rule of another state.
    State(State),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Symbol(symbol) => write!(f, "{}", symbol),
            Term::State(state) => write!(f, "{}", state),
        }
    }
}

/// The production rule of a single state.
///
/// Each outgoing transition contributes one alternative of the form
/// `symbol·destination`. A state with no outgoing transitions has no
/// alternatives and is rendered as the empty production `λ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionRule {
    /// The state the rule describes.
    pub state: State,
    /// The alternatives, one per outgoing transition, in insertion order.
    pub alternatives: Vec<Vec<Term>>,
}

impl fmt::Display for ProductionRule {
    /// Renders the rule as `<state> = <sym><dest> + <sym><dest> + ...`, or
    /// `<state> = λ` for a sink state.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.state)?;

        if self.alternatives.is_empty() {
            return write!(f, "λ");
        }

        let rendered = self
            .alternatives
            .iter()
            .map(|alternative| {
                alternative
                    .iter()
                    .map(|term| term.to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>();

        write!(f, "{}", rendered.join(" + "))
    }
}

/// The result of deriving a regular expression from an automaton.
///
/// Holds the phase-1 production rules and the phase-2 simplified expression
/// for the start state. `Display` renders the two-section report consumed by
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// The start state the expression was expanded from.
    pub start: State,
    /// The production rules, source states first in order of appearance,
    /// then λ rules for pure-destination states.
    pub rules: Vec<ProductionRule>,
    /// The fully expanded expression for the start state. Empty for the
    /// single-state automaton.
    pub expression: String,
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Regular expression step by step ===")?;
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        writeln!(f)?;
        writeln!(f, "=== Simplified regular expression ===")?;
        write!(f, "{} = {}", self.start, self.expression)
    }
}

/// Builds the production rules for a transition function (phase 1).
///
/// Every state that occurs as a source gets one rule with one alternative per
/// outgoing transition, in insertion order. States that occur only as a
/// destination get the empty rule `λ`; for built chain automata this is
/// exactly the accepting final state.
pub fn rules(transitions: &[Transition]) -> Vec<ProductionRule> {
    let mut order: Vec<State> = Vec::new();
    let mut alternatives: HashMap<State, Vec<Vec<Term>>> = HashMap::new();

    for transition in transitions {
        if !alternatives.contains_key(&transition.from) {
            order.push(transition.from.clone());
        }
        alternatives
            .entry(transition.from.clone())
            .or_default()
            .push(vec![
                Term::Symbol(transition.symbol),
                Term::State(transition.to.clone()),
            ]);
    }

    // Destinations that never occur as a source are sinks with the λ rule.
    for transition in transitions {
        if !alternatives.contains_key(&transition.to) {
            order.push(transition.to.clone());
            alternatives.insert(transition.to.clone(), Vec::new());
        }
    }

    order
        .into_iter()
        .map(|state| {
            let alternatives = alternatives.remove(&state).unwrap_or_default();
            ProductionRule {
                state,
                alternatives,
            }
        })
        .collect()
}

/// Derives the regular expression equivalent to `automaton` (phases 1 and 2).
///
/// # Returns
///
/// * `Ok(Derivation)` with the production rules and the simplified expression
///   for the start state.
/// * `Err(AutomatonError::CyclicAutomaton)` if the transition graph contains
///   a cycle reachable from the start state, which would make the expansion
///   non-terminating.
pub fn derive(automaton: &Automaton) -> Result<Derivation, AutomatonError> {
    let rules = rules(&automaton.transitions);
    let index: HashMap<&State, &ProductionRule> =
        rules.iter().map(|rule| (&rule.state, rule)).collect();

    let mut in_progress = HashSet::new();
    let expression = expand(&automaton.start, &index, &mut in_progress)?;

    Ok(Derivation {
        start: automaton.start.clone(),
        rules,
        expression,
    })
}

/// Recursively expands `state`'s rule into a closed-form expression.
///
/// State references are replaced by the expansion of the referenced rule;
/// the substituted text is parenthesized only when the referenced rule has
/// more than one alternative, so single-path chains expand to the bare input
/// sequence. A state with no rule, and the λ rule itself, expand to nothing.
///
/// `in_progress` carries the states currently being expanded; revisiting one
/// means the graph is cyclic and the expansion is aborted.
fn expand(
    state: &State,
    rules: &HashMap<&State, &ProductionRule>,
    in_progress: &mut HashSet<State>,
) -> Result<String, AutomatonError> {
    if !in_progress.insert(state.clone()) {
        return Err(AutomatonError::CyclicAutomaton(state.clone()));
    }

    let expression = match rules.get(state) {
        Some(rule) => {
            let mut expanded = Vec::new();

            for alternative in &rule.alternatives {
                let mut piece = String::new();
                for term in alternative {
                    match term {
                        Term::Symbol(symbol) => piece.push(*symbol),
                        Term::State(destination) => {
                            let branching = rules
                                .get(destination)
                                .is_some_and(|r| r.alternatives.len() > 1);
                            let inner = expand(destination, rules, in_progress)?;

                            if branching {
                                piece.push('(');
                                piece.push_str(&inner);
                                piece.push(')');
                            } else {
                                piece.push_str(&inner);
                            }
                        }
                    }
                }
                expanded.push(piece);
            }

            expanded.join(" + ")
        }
        // No rule at all, e.g. the start state of the empty automaton.
        None => String::new(),
    };

    in_progress.remove(state);
    Ok(expression)
}
