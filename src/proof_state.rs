//! Incremental bookkeeping of what a proof has established so far.

use crate::ast::Formula;
use crate::axioms::match_axiom;
use crate::util::{HashMap, HashSet, IndexMap, IndexSet};
use std::fmt::Display;

/// Why a formula may appear in a proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Justification {
    /// An instance of the axiom scheme with this 1-based number.
    Axiom(usize),
    /// The hypothesis with this 1-based position in the heading.
    Hypothesis(usize),
    /// Modus Ponens from `antecedent` and `antecedent -> formula`.
    ModusPonens {
        antecedent: Formula,
        implication: Formula,
    },
}

impl Display for Justification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Justification::Axiom(n) => write!(f, "axiom scheme {n}"),
            Justification::Hypothesis(n) => write!(f, "hypothesis {n}"),
            Justification::ModusPonens {
                antecedent,
                implication,
            } => write!(f, "modus ponens from {antecedent} and {implication}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvidenceId(pub(crate) usize);

/// The first derivation of a formula.
#[derive(Debug, Clone)]
pub struct Evidence {
    pub formula: Formula,
    pub justification: Justification,
    /// How many retained steps depend on this one.
    pub(crate) uses: usize,
    /// Position in the printed proof, assigned while reporting.
    pub(crate) line: Option<usize>,
}

impl Evidence {
    pub fn uses(&self) -> usize {
        self.uses
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

/// Everything one verification run knows about the proof it is reading.
///
/// Every formula in `proven` has exactly one [`Evidence`] in `records`,
/// reachable through `by_formula`. Only records created while logging is
/// enabled take part in the printed proof; they are listed in `log` in the
/// order they were first derived.
#[derive(Debug, Clone, Default)]
pub struct ProofState {
    hypotheses: Vec<Formula>,
    proven: HashSet<Formula>,
    /// Implications already proven, keyed by their consequent.
    modus_ponens: IndexMap<Formula, IndexSet<Formula>>,
    pub(crate) records: Vec<Evidence>,
    pub(crate) log: Vec<EvidenceId>,
    pub(crate) by_formula: HashMap<Formula, EvidenceId>,
}

impl ProofState {
    pub fn new(hypotheses: Vec<Formula>) -> Self {
        Self {
            hypotheses,
            ..Self::default()
        }
    }

    pub fn hypotheses(&self) -> &[Formula] {
        &self.hypotheses
    }

    pub fn is_proven(&self, formula: &Formula) -> bool {
        self.proven.contains(formula)
    }

    /// Justifies `formula` against the current state and, on success, records it.
    ///
    /// Axioms are tried first, then hypotheses, then Modus Ponens. A formula
    /// that was already proven is accepted again without creating a new record.
    /// When `log` is false a new record is still created, but it is left out of
    /// the evidence log and credits nothing it cites.
    pub fn try_derive(&mut self, formula: &Formula, log: bool) -> Option<Justification> {
        let justification = self.justify(formula)?;
        if self.insert(formula) {
            self.record(formula, justification.clone(), log);
        }
        Some(justification)
    }

    fn justify(&self, formula: &Formula) -> Option<Justification> {
        if let Some(scheme) = match_axiom(formula) {
            return Some(Justification::Axiom(scheme));
        }
        if let Some(i) = self.hypotheses.iter().position(|h| h == formula) {
            return Some(Justification::Hypothesis(i + 1));
        }
        self.find_modus_ponens(formula)
    }

    fn find_modus_ponens(&self, formula: &Formula) -> Option<Justification> {
        self.modus_ponens.get(formula)?.iter().find_map(|implication| {
            let antecedent = implication.antecedent()?;
            self.proven
                .contains(antecedent)
                .then(|| Justification::ModusPonens {
                    antecedent: antecedent.clone(),
                    implication: implication.clone(),
                })
        })
    }

    /// Returns true if `formula` was not proven before.
    fn insert(&mut self, formula: &Formula) -> bool {
        if let Formula::Implies(_, consequent) = formula {
            let consequent: &Formula = consequent;
            log::trace!("indexing {formula} under {consequent}");
            self.modus_ponens
                .entry(consequent.clone())
                .or_default()
                .insert(formula.clone());
        }
        self.proven.insert(formula.clone())
    }

    fn record(&mut self, formula: &Formula, justification: Justification, log: bool) {
        let id = EvidenceId(self.records.len());
        if log {
            if let Justification::ModusPonens {
                antecedent,
                implication,
            } = &justification
            {
                for cited in [antecedent, implication] {
                    let cited = self.by_formula[cited];
                    self.records[cited.0].uses += 1;
                }
            }
            self.log.push(id);
        }
        self.records.push(Evidence {
            formula: formula.clone(),
            justification,
            uses: 0,
            line: None,
        });
        self.by_formula.insert(formula.clone(), id);
    }

    /// Marks the most recently logged step as used, so the step that closes the
    /// proof is always kept.
    pub fn keep_last(&mut self) {
        if let Some(&id) = self.log.last() {
            self.records[id.0].uses += 1;
        }
    }

    pub fn evidence(&self, id: EvidenceId) -> &Evidence {
        &self.records[id.0]
    }

    /// The record of the first derivation of `formula`.
    pub fn evidence_for(&self, formula: &Formula) -> Option<&Evidence> {
        self.by_formula.get(formula).map(|&id| self.evidence(id))
    }

    /// The logged records in derivation order.
    pub fn logged(&self) -> impl Iterator<Item = &Evidence> + '_ {
        self.log.iter().map(|&id| self.evidence(id))
    }
}
