mod cli;
mod error;
mod output;

use crate::cli::Invocation;
use crate::error::CliError;
use crate::output::OutputTarget;
use randkey_entropy::EntropySource;
use randkey_generator::{GenerationOutcome, GenerationRequest, KeyGenerator};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries nothing but keys.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let invocation = match Invocation::parse() {
        Ok(invocation) => invocation,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_status(err.kind()));
        }
    };

    let mut stderr = io::stderr().lock();
    let result = run(invocation, &KeyGenerator::new(), io::stdout().lock(), &mut stderr);
    ExitCode::from(finish(result, &mut stderr))
}

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

/// Help and version requests succeed; every other usage error exits with 1
/// like the rest of the failures.
fn usage_status(kind: clap::error::ErrorKind) -> u8 {
    use clap::error::ErrorKind;

    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => SUCCESS,
        _ => FAILURE,
    }
}

fn run<E, O, W>(
    invocation: Invocation,
    generator: &KeyGenerator<E>,
    stdout: O,
    stderr: &mut W,
) -> Result<(), CliError>
where
    E: EntropySource,
    O: Write,
    W: Write,
{
    let registry = invocation.registry()?;
    let cli = invocation.cli;

    let request = GenerationRequest::builder()
        .registry(registry)
        .length(cli.length)
        .count(cli.count)
        .deterministic_seed_opt(cli.deterministic_seed)
        .mixing_seed_opt(cli.mixing_seed)
        .build();

    let outcome = generator.generate(request)?;
    info!(count = outcome.keys.len(), "generated keys");

    OutputTarget::new(cli.output, cli.force).write_keys(stdout, &outcome.keys)?;

    if cli.show_seed {
        report_seeds(stderr, &outcome).map_err(|source| CliError::Write {
            target: "stderr".to_string(),
            source,
        })?;
    }
    Ok(())
}

fn report_seeds<W: Write>(stderr: &mut W, outcome: &GenerationOutcome) -> io::Result<()> {
    if let Some(seed) = outcome.deterministic_seed_echo {
        writeln!(stderr, "deterministic seed: {seed}")?;
    }
    if let Some(seed) = outcome.mixing_seed_echo {
        writeln!(stderr, "mixing seed: {seed}")?;
    }
    Ok(())
}

/// Prints `error[<code>]: <message>` for a failed run and returns the exit
/// status.
fn finish<W: Write>(result: Result<(), CliError>, stderr: &mut W) -> u8 {
    match result {
        Ok(()) => SUCCESS,
        Err(err) => {
            debug!(code = err.code(), "key generation failed");
            let _ = writeln!(stderr, "error[{}]: {}", err.code(), err);
            FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkey_entropy::testing::ScriptedEntropy;

    struct Captured {
        result: Result<(), CliError>,
        stdout: String,
        stderr: String,
    }

    fn run_with(args: &[&str], entropy: ScriptedEntropy) -> Captured {
        let invocation =
            Invocation::parse_from(std::iter::once("randkey").chain(args.iter().copied()))
                .unwrap();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = run(
            invocation,
            &KeyGenerator::with_entropy(entropy),
            &mut stdout,
            &mut stderr,
        );
        Captured {
            result,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    #[test]
    fn both_seeds_fail_with_conflicting_seed() {
        let captured = run_with(&["-S", "1", "-s", "2"], ScriptedEntropy::from_words([0; 16]));

        let err = captured.result.unwrap_err();
        assert_eq!(err.code(), "conflicting_seed");
        assert!(captured.stdout.is_empty());
        assert!(captured.stderr.is_empty());
    }

    #[test]
    fn failure_is_reported_once_with_its_code() {
        let captured = run_with(&["-S", "1", "-s", "2"], ScriptedEntropy::unavailable());

        let mut stderr = Vec::new();
        let code = finish(captured.result, &mut stderr);

        assert_eq!(code, 1);
        let stderr = String::from_utf8(stderr).unwrap();
        assert!(stderr.starts_with("error[conflicting_seed]: "));
        assert_eq!(stderr.lines().count(), 1);
    }

    #[test]
    fn success_reports_nothing() {
        let mut stderr = Vec::new();
        assert_eq!(finish(Ok(()), &mut stderr), 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn entropy_failure_writes_no_keys() {
        let captured = run_with(&["--append", "abc", "-s", "1"], ScriptedEntropy::unavailable());

        assert_eq!(captured.result.unwrap_err().code(), "entropy_unavailable");
        assert!(captured.stdout.is_empty());
    }

    #[test]
    fn show_seed_goes_to_stderr_only() {
        let captured = run_with(
            &["--append", "abc", "-l", "3", "-s", "7", "--show-seed"],
            ScriptedEntropy::from_words([0; 3]),
        );

        captured.result.unwrap();
        // Zero draws leave only the tweak: (7 + position) mod 3.
        assert_eq!(captured.stdout, "bca\n");
        assert_eq!(captured.stderr, "mixing seed: 7\n");
    }

    #[test]
    fn seed_is_not_reported_without_flag() {
        let captured = run_with(
            &["--append", "abc", "-l", "3", "-s", "7"],
            ScriptedEntropy::from_words([0; 3]),
        );

        captured.result.unwrap();
        assert_eq!(captured.stdout, "bca\n");
        assert!(captured.stderr.is_empty());
    }

    #[test]
    fn show_seed_with_output_file_keeps_file_to_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let captured = run_with(
            &[
                "-S",
                "42",
                "--digits",
                "-l",
                "5",
                "-c",
                "2",
                "--show-seed",
                "-o",
                path.to_str().unwrap(),
            ],
            ScriptedEntropy::unavailable(),
        );

        captured.result.unwrap();
        assert!(captured.stdout.is_empty());
        assert_eq!(captured.stderr, "deterministic seed: 42\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "64021\n09481\n");
    }

    #[test]
    fn usage_errors_exit_with_failure() {
        let err = Invocation::parse_from(["randkey", "--length", "0"]).unwrap_err();
        assert_eq!(usage_status(err.kind()), FAILURE);

        let err = Invocation::parse_from(["randkey", "--no-such-flag"]).unwrap_err();
        assert_eq!(usage_status(err.kind()), FAILURE);
    }

    #[test]
    fn help_and_version_exit_successfully() {
        let err = Invocation::parse_from(["randkey", "--help"]).unwrap_err();
        assert_eq!(usage_status(err.kind()), SUCCESS);

        let err = Invocation::parse_from(["randkey", "--version"]).unwrap_err();
        assert_eq!(usage_status(err.kind()), SUCCESS);
    }
}
