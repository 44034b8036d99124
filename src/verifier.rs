use crate::ast::{parse_formula, parse_heading, Formula};
use crate::proof_state::ProofState;
use crate::report::{Outcome, Report};
use crate::Error;
use std::io::BufRead;

/// Checks proofs written one formula per line under a `hypotheses|-theorem`
/// heading.
///
/// Every run gets its own [`ProofState`], so one checker can be reused for
/// any number of proofs.
#[derive(Debug, Clone, Default)]
pub struct ProofChecker {
    filename: Option<String>,
}

impl ProofChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the source in parse error messages.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }

    pub fn check_str(&self, input: &str) -> Result<Report, Error> {
        self.check(input.as_bytes())
    }

    /// Reads and checks one proof.
    ///
    /// Reading stops at the first line that cannot be justified. A missing or
    /// malformed line, the heading included, only makes the proof incorrect;
    /// the error is reserved for failures of the reader itself.
    pub fn check<R: BufRead>(&self, reader: R) -> Result<Report, Error> {
        let mut lines = reader.lines();
        let Some(heading) = lines.next().transpose()? else {
            log::warn!("missing heading line");
            return Ok(Report::incorrect(String::new()));
        };
        let parsed = match parse_heading(self.filename.clone(), &heading) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("{err}");
                return Ok(Report::incorrect(heading));
            }
        };
        log::info!(
            "checking proof of {} from {} hypotheses",
            parsed.theorem,
            parsed.hypotheses.len()
        );

        let mut run = Run {
            filename: self.filename.as_deref(),
            theorem: parsed.theorem,
            state: ProofState::new(parsed.hypotheses),
            phase: Phase::Searching,
            last: None,
        };
        let correct = run.consume(lines.enumerate().map(|(i, line)| (i + 2, line)))?;

        let outcome = if correct {
            let kept = run.state.minimize();
            log::info!("proof is correct, {kept} steps kept");
            Outcome::Correct(run.state.proof_lines())
        } else {
            log::info!("proof is incorrect");
            Outcome::Incorrect
        };
        Ok(Report { heading, outcome })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Steps are logged until the theorem is first reached.
    Searching,
    /// The theorem has been proven; the remaining lines must still be valid,
    /// but they are not logged.
    Continuation,
}

struct Run<'a> {
    filename: Option<&'a str>,
    theorem: Formula,
    state: ProofState,
    phase: Phase,
    /// The last formula read from the body.
    last: Option<Formula>,
}

impl Run<'_> {
    /// Consumes numbered body lines and returns whether the proof is correct.
    ///
    /// The proof is only accepted when its very last line is the theorem, even
    /// if the theorem was reached earlier.
    fn consume<I>(&mut self, lines: I) -> Result<bool, Error>
    where
        I: Iterator<Item = (usize, std::io::Result<String>)>,
    {
        let mut justified = true;
        for (number, line) in lines {
            let line = line?;
            if !self.step(number, &line) {
                justified = false;
                break;
            }
        }
        self.state.keep_last();
        Ok(justified && self.last.as_ref() == Some(&self.theorem))
    }

    fn step(&mut self, number: usize, line: &str) -> bool {
        let formula = match parse_formula(self.filename.map(str::to_string), number, line) {
            Ok(formula) => formula,
            Err(err) => {
                log::warn!("{err}");
                return false;
            }
        };
        let logging = self.phase == Phase::Searching;
        let Some(justification) = self.state.try_derive(&formula, logging) else {
            log::debug!("line {number}: {formula} is not justified");
            return false;
        };
        log::debug!("line {number}: {formula} by {justification}");
        if logging && formula == self.theorem {
            log::debug!("line {number}: theorem reached");
            self.phase = Phase::Continuation;
        }
        self.last = Some(formula);
        true
    }
}
