use crate::ast::Formula;
use crate::proof_state::{Justification, ProofState};
use std::fmt::Display;

pub const INCORRECT_PROOF: &str = "Proof is incorrect";

/// How a line of the printed proof is justified, in printed line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Citation {
    Axiom(usize),
    Hypothesis(usize),
    ModusPonens { implication: usize, antecedent: usize },
}

impl Display for Citation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Citation::Axiom(n) => write!(f, "Ax. sch. {n}"),
            Citation::Hypothesis(n) => write!(f, "Hypothesis {n}"),
            Citation::ModusPonens {
                implication,
                antecedent,
            } => write!(f, "M.P. {implication}, {antecedent}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofLine {
    pub number: usize,
    pub citation: Citation,
    pub formula: Formula,
}

impl Display for ProofLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}. {}] {}", self.number, self.citation, self.formula)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The minimal proof, in derivation order.
    Correct(Vec<ProofLine>),
    Incorrect,
}

/// The result of checking one proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The heading line exactly as it was read.
    pub heading: String,
    pub outcome: Outcome,
}

impl Report {
    pub fn incorrect(heading: String) -> Self {
        Self {
            heading,
            outcome: Outcome::Incorrect,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, Outcome::Correct(_))
    }

    /// The lines of the minimal proof, empty when the proof is incorrect.
    pub fn lines(&self) -> &[ProofLine] {
        match &self.outcome {
            Outcome::Correct(lines) => lines,
            Outcome::Incorrect => &[],
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Outcome::Correct(lines) => {
                write!(f, "{}", self.heading)?;
                for line in lines {
                    write!(f, "\n{line}")?;
                }
                Ok(())
            }
            Outcome::Incorrect => f.write_str(INCORRECT_PROOF),
        }
    }
}

impl ProofState {
    /// Numbers the steps that survived [`ProofState::minimize`] and rewrites
    /// Modus Ponens citations to those numbers.
    pub fn proof_lines(&mut self) -> Vec<ProofLine> {
        let mut lines = Vec::new();
        for i in 0..self.log.len() {
            let id = self.log[i];
            if self.records[id.0].uses == 0 {
                continue;
            }
            let number = lines.len() + 1;
            let evidence = &self.records[id.0];
            let citation = match &evidence.justification {
                Justification::Axiom(n) => Citation::Axiom(*n),
                Justification::Hypothesis(n) => Citation::Hypothesis(*n),
                Justification::ModusPonens {
                    antecedent,
                    implication,
                } => Citation::ModusPonens {
                    implication: self
                        .printed_line(implication)
                        .expect("a cited implication is printed before its consequent"),
                    antecedent: self
                        .printed_line(antecedent)
                        .expect("a cited antecedent is printed before its consequent"),
                },
            };
            lines.push(ProofLine {
                number,
                citation,
                formula: evidence.formula.clone(),
            });
            self.records[id.0].line = Some(number);
        }
        lines
    }

    /// The number `formula` was given in the printed proof, if it was printed.
    ///
    /// Premises of a kept step are logged and kept too, and are numbered
    /// before the step that cites them.
    fn printed_line(&self, formula: &Formula) -> Option<usize> {
        self.records[self.by_formula.get(formula)?.0].line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parse_formula;

    fn f(s: &str) -> Formula {
        parse_formula(None, 1, s).unwrap()
    }

    #[test]
    fn renumbers_after_dropping_steps() {
        let mut state = ProofState::new(vec![f("C"), f("A"), f("A->B")]);
        for line in ["C", "A", "A->B", "B"] {
            state.try_derive(&f(line), true).unwrap();
        }
        state.keep_last();
        state.minimize();
        let lines = state.proof_lines();
        let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "[1. Hypothesis 2] A",
                "[2. Hypothesis 3] (A -> B)",
                "[3. M.P. 2, 1] B",
            ]
        );
        assert_eq!(state.evidence_for(&f("C")).unwrap().line(), None);
        assert_eq!(state.evidence_for(&f("B")).unwrap().line(), Some(3));
        assert_eq!(state.printed_line(&f("A->B")), Some(2));
        assert_eq!(state.printed_line(&f("C")), None);
        assert_eq!(state.printed_line(&f("D")), None);
    }

    #[test]
    fn display_report() {
        let report = Report {
            heading: "|-A->B->A".to_string(),
            outcome: Outcome::Correct(vec![ProofLine {
                number: 1,
                citation: Citation::Axiom(1),
                formula: f("A->B->A"),
            }]),
        };
        assert!(report.is_correct());
        assert_eq!(report.to_string(), "|-A->B->A\n[1. Ax. sch. 1] (A -> (B -> A))");

        let report = Report {
            heading: "|-A".to_string(),
            outcome: Outcome::Incorrect,
        };
        assert!(!report.is_correct());
        assert!(report.lines().is_empty());
        assert_eq!(report.to_string(), INCORRECT_PROOF);
    }
}
