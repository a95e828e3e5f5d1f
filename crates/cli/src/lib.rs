#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the osmium driver.
//! The crate is intentionally small: it recognises `--help`/`-h`,
//! `--version`/`-V`, `--verbosity`/`-v LEVEL`, and `--no-banner`, configures
//! and locks the process verbosity gate, and prints the startup banner
//! together with the run provenance block. The simulation engine proper
//! attaches behind this entry point and is out of scope here.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests drive it with `Vec<u8>` buffers instead of capturing the
//! process streams. Internally a [`clap`](https://docs.rs/clap/) command
//! definition performs a light-weight parse; the verbosity value is then
//! applied to a fresh [`VerbosityGate`], which is locked before any output is
//! produced so no later code path can change the level mid-run.
//!
//! # Invariants
//!
//! - [`run`] never panics; unexpected I/O failures surface as exit code 1.
//! - An unrecognised verbosity level is the only configuration error: it is
//!   reported on standard error with exit code 1, before any banner output.
//! - All console output, warnings included, goes to standard output.
//! - Provenance failures never fail the banner: an absent version-control
//!   record renders as a fixed notice, and missing host fields render blank.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["osmium", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - [`branding`] for the banner art and identity constants.
//! - [`provenance`] for the records rendered below the banner.
//! - `src/bin/osmium.rs` for the binary crate that wires [`run`] into `main`.

use std::cell::RefCell;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use clap::{Arg, ArgAction, Command};

use branding::{PROGRAM_NAME, SOURCE_URL, VERSION, banner};
use logging::{Console, Verbosity, VerbosityGate};
use provenance::{HostInfo, SystemCommandRunner, VcsInfo, identification_report};

/// Deterministic help text describing the CLI surface supported by this build.
const HELP_TEXT: &str = concat!(
    "osmium - console front-end for the osmium simulation driver\n",
    "\n",
    "Usage: osmium [-h] [-V] [-v LEVEL] [--no-banner]\n",
    "\n",
    "Prints the startup banner and run provenance block, then hands off to\n",
    "the simulation engine. The following options are recognised:\n",
    "  -h, --help             Show this help message and exit.\n",
    "  -V, --version          Output version information and exit.\n",
    "  -v, --verbosity LEVEL  Set console verbosity to one of quiet, low,\n",
    "                         medium, high, debug, or trace (default: low).\n",
    "      --no-banner        Suppress the startup banner and provenance block.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    no_banner: bool,
    verbosity: Option<String>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .value_name("LEVEL")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-banner")
                .long("no-banner")
                .action(ArgAction::SetTrue),
        )
}

fn parse_args<Args>(args: Args) -> Result<ParsedArgs, String>
where
    Args: IntoIterator,
    Args::Item: Into<OsString> + Clone,
{
    let matches = clap_command()
        .try_get_matches_from(args)
        .map_err(|err| err.to_string())?;
    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        no_banner: matches.get_flag("no-banner"),
        verbosity: matches.get_one::<String>("verbosity").cloned(),
    })
}

/// Runs the front-end with explicit argument and stream handles.
///
/// Returns the process exit code: `0` on success, `1` for argument or I/O
/// failures. The first argument is the program name, mirroring
/// `std::env::args_os`.
pub fn run<Args, Out, ErrOut>(args: Args, stdout: &mut Out, stderr: &mut ErrOut) -> i32
where
    Args: IntoIterator,
    Args::Item: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    let parsed = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            let _ = writeln!(stderr, "{message}");
            return 1;
        }
    };

    if parsed.show_help {
        let _ = stdout.write_all(HELP_TEXT.as_bytes());
        return 0;
    }

    if parsed.show_version {
        let _ = writeln!(stdout, "{PROGRAM_NAME} {VERSION}");
        let _ = writeln!(stdout, "{SOURCE_URL}");
        return 0;
    }

    let gate = Rc::new(RefCell::new(VerbosityGate::default()));
    if let Some(level) = &parsed.verbosity {
        if let Err(err) = gate.borrow_mut().set_level(level) {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {err}");
            return 1;
        }
    }
    gate.borrow_mut().lock();

    match emit_startup(stdout, &gate, parsed.no_banner) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Prints the banner, provenance block, and gated status line.
fn emit_startup<Out>(
    stdout: &mut Out,
    gate: &Rc<RefCell<VerbosityGate>>,
    no_banner: bool,
) -> io::Result<()>
where
    Out: Write,
{
    let mut console = Console::new(&mut *stdout, Rc::clone(gate));
    if !no_banner {
        console.info(&banner(), true)?;
        let vcs = VcsInfo::collect(&SystemCommandRunner, Path::new("."));
        let host = HostInfo::collect();
        console.info(&identification_report(vcs.as_ref(), &host), true)?;
    }
    let level = gate.borrow().level();
    console.info(
        &format!("# Verbosity locked at '{level}'."),
        gate.borrow().is_at_least(Verbosity::Medium),
    )?;
    console.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_captured(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(args.iter().copied(), &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).expect("utf-8 stdout"),
            String::from_utf8(stderr).expect("utf-8 stderr"),
        )
    }

    #[test]
    fn version_flag_prints_identity_and_exits_zero() {
        let (code, stdout, stderr) = run_captured(&["osmium", "--version"]);
        assert_eq!(code, 0);
        assert!(stdout.contains(PROGRAM_NAME));
        assert!(stdout.contains(VERSION));
        assert!(stdout.contains(SOURCE_URL));
        assert!(stderr.is_empty());
    }

    #[test]
    fn help_flag_prints_usage() {
        let (code, stdout, _) = run_captured(&["osmium", "-h"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("Usage: osmium"));
        assert!(stdout.contains("--verbosity"));
    }

    #[test]
    fn invalid_verbosity_level_fails_before_any_output() {
        let (code, stdout, stderr) = run_captured(&["osmium", "-v", "blaring"]);
        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        assert!(stderr.contains("invalid verbosity level"));
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        let (code, _, stderr) = run_captured(&["osmium", "--frobnicate"]);
        assert_eq!(code, 1);
        assert!(!stderr.is_empty());
    }

    #[test]
    fn default_run_prints_banner_and_provenance() {
        let (code, stdout, stderr) = run_captured(&["osmium"]);
        assert_eq!(code, 0);
        assert!(stdout.contains(PROGRAM_NAME));
        assert!(stdout.contains("# System information:"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn no_banner_at_default_level_is_silent() {
        let (code, stdout, stderr) = run_captured(&["osmium", "--no-banner"]);
        assert_eq!(code, 0);
        assert!(stdout.is_empty());
        assert!(stderr.is_empty());
    }

    #[test]
    fn medium_verbosity_emits_the_status_line() {
        let (code, stdout, _) = run_captured(&["osmium", "--no-banner", "-v", "medium"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("# Verbosity locked at 'medium'."));
    }

    #[test]
    fn parse_args_recognises_all_flags() {
        let parsed =
            parse_args(["osmium", "-v", "trace", "--no-banner"]).expect("valid arguments");
        assert!(!parsed.show_help);
        assert!(!parsed.show_version);
        assert!(parsed.no_banner);
        assert_eq!(parsed.verbosity.as_deref(), Some("trace"));
    }
}
