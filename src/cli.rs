//! Argument parsing, output formatting, and exit-code mapping.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::error::Result;
use crate::hash_file;
use crate::verify::{compare, validate_reference, Verdict};

/// Exit code for usage errors, unreadable files, and malformed references.
const FAILURE_CODE: u8 = 1;
/// Exit code for a verification that ran to completion and did not match.
const MISMATCH_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "filesum",
    version,
    about = "Compute and verify SHA-256 digests of files",
    after_help = "Exit codes: 0 success (including a verified match), \
                  1 usage or I/O error, 2 verification mismatch"
)]
pub struct Args {
    /// File to hash
    pub file: PathBuf,

    /// Reference digest to verify against (64 hex characters)
    pub reference: Option<String>,

    /// Also print the computed and reference digests in verify mode
    #[arg(short, long)]
    pub verbose: bool,
}

/// Terminal styling for verdict lines. Decided once at startup; piped
/// output and tests see plain text.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    color: bool,
}

impl OutputStyle {
    /// Color only when stdout is a terminal.
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    /// No styling.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn pass(self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn fail(self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// What a successful run did.
enum Outcome {
    Hashed,
    Verified(Verdict),
}

/// Parse the command line, execute, and map the outcome to an exit code.
pub fn run() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // clap sends --help and --version to stdout, usage errors to stderr
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(FAILURE_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&args, OutputStyle::detect()) {
        Ok(Outcome::Hashed) | Ok(Outcome::Verified(Verdict::Match)) => ExitCode::SUCCESS,
        Ok(Outcome::Verified(Verdict::Mismatch)) => ExitCode::from(MISMATCH_CODE),
        Err(err) => {
            eprintln!("filesum: {err}");
            ExitCode::from(FAILURE_CODE)
        }
    }
}

fn execute(args: &Args, style: OutputStyle) -> Result<Outcome> {
    match &args.reference {
        Some(reference) => verify_file(&args.file, reference, args.verbose, style),
        None => {
            let digest = hash_file(&args.file)?;
            println!("{} {}", hex::encode(digest), args.file.display());
            Ok(Outcome::Hashed)
        }
    }
}

/// Hash `file`, compare against `reference`, and print the verdict.
fn verify_file(file: &Path, reference: &str, verbose: bool, style: OutputStyle) -> Result<Outcome> {
    // a malformed reference is rejected before the file is touched
    validate_reference(reference)?;

    let computed = hex::encode(hash_file(file)?);
    let verdict = compare(&computed, reference)?;

    if verbose {
        println!("computed  {computed}");
        println!("reference {}", reference.to_ascii_lowercase());
    }
    match verdict {
        Verdict::Match => println!("{}: {}", file.display(), style.pass("OK")),
        Verdict::Mismatch => println!("{}: {}", file.display(), style.fail("FAILED")),
    }
    Ok(Outcome::Verified(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_adds_no_escape_codes() {
        let style = OutputStyle::plain();
        assert_eq!(style.pass("OK"), "OK");
        assert_eq!(style.fail("FAILED"), "FAILED");
    }

    #[test]
    fn args_parse_both_modes() {
        let hash = Args::try_parse_from(["filesum", "data.bin"]).unwrap();
        assert!(hash.reference.is_none());
        assert!(!hash.verbose);

        let reference = "0".repeat(64);
        let verify =
            Args::try_parse_from(["filesum", "data.bin", "-v", reference.as_str()]).unwrap();
        assert_eq!(verify.reference.as_deref(), Some(reference.as_str()));
        assert!(verify.verbose);
    }

    #[test]
    fn extra_positional_arguments_are_rejected() {
        assert!(Args::try_parse_from(["filesum", "a", "b", "c"]).is_err());
    }
}
