//! The axiom schemes of classical propositional calculus.
//!
//! A scheme is written as a [`Formula`] whose variables are metavariables.
//! A formula is an instance of a scheme when every metavariable can be
//! replaced by one sub-formula, the same one at every occurrence.

use crate::ast::{Formula, Symbol};
use crate::util::HashMap;

lazy_static::lazy_static! {
    static ref SCHEMES: Vec<Formula> = {
        let a = || Formula::var("A");
        let b = || Formula::var("B");
        let c = || Formula::var("C");
        let imp = Formula::implies;
        vec![
            // A -> B -> A
            imp(a(), imp(b(), a())),
            // (A -> B) -> (A -> B -> C) -> (A -> C)
            imp(
                imp(a(), b()),
                imp(imp(a(), imp(b(), c())), imp(a(), c())),
            ),
            // A -> B -> A & B
            imp(a(), imp(b(), Formula::and(a(), b()))),
            // A & B -> A
            imp(Formula::and(a(), b()), a()),
            // A & B -> B
            imp(Formula::and(a(), b()), b()),
            // A -> A | B
            imp(a(), Formula::or(a(), b())),
            // B -> A | B
            imp(b(), Formula::or(a(), b())),
            // (A -> C) -> (B -> C) -> (A | B -> C)
            imp(
                imp(a(), c()),
                imp(imp(b(), c()), imp(Formula::or(a(), b()), c())),
            ),
            // (A -> B) -> (A -> !B) -> !A
            imp(
                imp(a(), b()),
                imp(imp(a(), Formula::not(b())), Formula::not(a())),
            ),
            // !!A -> A
            imp(Formula::not(Formula::not(a())), a()),
        ]
    };
}

/// Number of axiom schemes.
pub fn scheme_count() -> usize {
    SCHEMES.len()
}

/// The scheme with the given 1-based number.
pub fn scheme(number: usize) -> Option<&'static Formula> {
    number.checked_sub(1).and_then(|i| SCHEMES.get(i))
}

/// Returns the 1-based number of the first axiom scheme `formula` is an
/// instance of.
pub fn match_axiom(formula: &Formula) -> Option<usize> {
    SCHEMES
        .iter()
        .position(|scheme| is_instance(scheme, formula))
        .map(|i| i + 1)
}

fn is_instance(scheme: &Formula, formula: &Formula) -> bool {
    let mut bindings = HashMap::default();
    bind(scheme, formula, &mut bindings)
}

fn bind<'a>(
    pattern: &Formula,
    formula: &'a Formula,
    bindings: &mut HashMap<Symbol, &'a Formula>,
) -> bool {
    match (pattern, formula) {
        (Formula::Var(meta), _) => match bindings.get(meta) {
            Some(bound) => *bound == formula,
            None => {
                bindings.insert(*meta, formula);
                true
            }
        },
        (Formula::Not(p), Formula::Not(f)) => bind(p, f, bindings),
        (Formula::And(pl, pr), Formula::And(fl, fr))
        | (Formula::Or(pl, pr), Formula::Or(fl, fr))
        | (Formula::Implies(pl, pr), Formula::Implies(fl, fr)) => {
            bind(pl, fl, bindings) && bind(pr, fr, bindings)
        }
        _ => false,
    }
}
