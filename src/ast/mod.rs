pub mod parse;

use crate::util::ListDisplay;
use std::fmt::Display;
use std::sync::Arc;

pub use parse::*;

pub type Symbol = symbol_table::GlobalSymbol;

/// A propositional formula.
///
/// Formulas are immutable and compare structurally, so they can be used
/// directly as keys in the proof indices.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Formula {
    Var(Symbol),
    Not(Arc<Formula>),
    And(Arc<Formula>, Arc<Formula>),
    Or(Arc<Formula>, Arc<Formula>),
    Implies(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    pub fn var(name: impl Into<Symbol>) -> Self {
        Formula::Var(name.into())
    }

    pub fn not(operand: Formula) -> Self {
        Formula::Not(Arc::new(operand))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Arc::new(left), Arc::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Arc::new(left), Arc::new(right))
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Arc::new(antecedent), Arc::new(consequent))
    }

    pub fn is_implication(&self) -> bool {
        matches!(self, Formula::Implies(..))
    }

    /// The left side of an implication.
    pub fn antecedent(&self) -> Option<&Formula> {
        match self {
            Formula::Implies(lhs, _) => Some(lhs),
            _ => None,
        }
    }

    /// The right side of an implication.
    pub fn consequent(&self) -> Option<&Formula> {
        match self {
            Formula::Implies(_, rhs) => Some(rhs),
            _ => None,
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Var(name) => Display::fmt(name, f),
            Formula::Not(operand) => write!(f, "!{operand}"),
            Formula::And(lhs, rhs) => write!(f, "({lhs} & {rhs})"),
            Formula::Or(lhs, rhs) => write!(f, "({lhs} | {rhs})"),
            Formula::Implies(lhs, rhs) => write!(f, "({lhs} -> {rhs})"),
        }
    }
}

/// The first line of a proof: the hypotheses and the theorem they entail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub hypotheses: Vec<Formula>,
    pub theorem: Formula,
}

impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|-{}",
            ListDisplay(&self.hypotheses, ","),
            self.theorem
        )
    }
}
