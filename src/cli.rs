use crate::*;
use std::io::{BufRead, Write};

#[cfg(feature = "bin")]
pub mod bin {
    use super::*;
    use clap::Parser;
    use std::fs::File;
    use std::io::{self, BufReader, BufWriter};
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(version = env!("FULL_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
    struct Args {
        /// The proof files to check. Reads one proof from standard input when empty
        inputs: Vec<PathBuf>,
        /// Writes the reports to this file instead of standard output
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    }

    /// Start the command-line interface of the proof checker.
    ///
    /// Prints one report per input, `Proof is incorrect` for anything that is
    /// not a valid proof. Exits with status 1 only if an input cannot be read
    /// or the reports cannot be written.
    pub fn cli() {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .format_timestamp(None)
            .format_target(false)
            .parse_default_env()
            .init();

        let args = Args::parse();
        log::debug!("hilbert-check {}", env!("FULL_VERSION"));
        if let Err(err) = run(&args) {
            log::error!("{err}");
            std::process::exit(1)
        }
    }

    fn run(args: &Args) -> Result<(), Error> {
        let mut output: Box<dyn Write> = match &args.output {
            Some(path) => {
                let file = File::create(path).map_err(|err| Error::IoError(path.clone(), err))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        if args.inputs.is_empty() {
            ProofChecker::new().check_with(io::stdin().lock(), &mut output)?;
        }
        for input in &args.inputs {
            let file = File::open(input).map_err(|err| Error::IoError(input.clone(), err))?;
            let correct = ProofChecker::with_filename(input.to_string_lossy())
                .check_with(BufReader::new(file), &mut output)?;
            log::debug!("{}: {}", input.display(), if correct { "ok" } else { "rejected" });
        }
        output.flush()?;
        Ok(())
    }
}

impl ProofChecker {
    /// Checks one proof read from `input` and writes its report to `output`.
    ///
    /// Returns whether the proof was correct.
    pub fn check_with<R, W>(&self, input: R, mut output: W) -> Result<bool, Error>
    where
        R: BufRead,
        W: Write,
    {
        let report = self.check(input)?;
        writeln!(output, "{report}")?;
        Ok(report.is_correct())
    }
}
