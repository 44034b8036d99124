//! # hilbert-check
//! hilbert-check verifies proofs written in a Hilbert-style propositional
//! calculus with the ten classical axiom schemes and Modus Ponens.
//!
//! A proof is a heading `H1,...,Hn|-T` followed by one formula per line.
//! Each line must be an axiom instance, one of the hypotheses, or follow by
//! Modus Ponens from two earlier lines, and the last line must be `T`.
//! For a correct proof the checker prints the smallest annotated sub-proof
//! that still reaches `T`:
//!
//! ```
//! use hilbert_check::ProofChecker;
//!
//! let report = ProofChecker::new()
//!     .check_str("A,A->B|-B\nA\nA->B\nB\n")
//!     .unwrap();
//! assert_eq!(
//!     report.to_string(),
//!     "A,A->B|-B\n[1. Hypothesis 1] A\n[2. Hypothesis 2] (A -> B)\n[3. M.P. 2, 1] B"
//! );
//! ```
pub mod ast;
pub mod axioms;
mod cli;
mod minimize;
pub mod proof_state;
mod report;
pub mod util;
mod verifier;

pub use ast::{Formula, Heading, ParseError, Span, Symbol};
#[cfg(feature = "bin")]
pub use cli::bin::*;
pub use proof_state::{Evidence, Justification, ProofState};
pub use report::{Citation, Outcome, ProofLine, Report, INCORRECT_PROOF};
pub use verifier::ProofChecker;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
    #[error("I/O error: {}: {1}", .0.display())]
    IoError(PathBuf, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_read_alike() {
        let stream = Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        let file = Error::IoError(
            PathBuf::from("proof.txt"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(stream.to_string(), "I/O error: eof");
        assert_eq!(file.to_string(), "I/O error: proof.txt: not found");
    }
}
