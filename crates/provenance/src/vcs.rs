//! crates/provenance/src/vcs.rs
//! Version-control metadata collected through external git invocations.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Error produced when an external command fails to yield usable output.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command could not be spawned or its output could not be read.
    #[error("failed to run {program}: {source}")]
    Io {
        /// The program that was invoked.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The command ran but exited with a non-zero status.
    #[error("{program} exited with {status}")]
    NonZeroExit {
        /// The program that was invoked.
        program: String,
        /// The reported exit status.
        status: ExitStatus,
    },
    /// The command produced output that was not valid UTF-8.
    #[error("{program} produced non-UTF-8 output")]
    InvalidUtf8 {
        /// The program that was invoked.
        program: String,
    },
}

/// Capability to run an external command and capture its standard output.
///
/// Production code uses [`SystemCommandRunner`]; tests substitute scripted
/// runners so provenance collection is exercised without spawning real
/// subprocesses.
pub trait CommandRunner {
    /// Runs `program` with `args`, returning trimmed stdout on success.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Io {
                program: program.to_owned(),
                source,
            })?;
        if !output.status.success() {
            return Err(CommandError::NonZeroExit {
                program: program.to_owned(),
                status: output.status,
            });
        }
        let stdout = String::from_utf8(output.stdout).map_err(|_| CommandError::InvalidUtf8 {
            program: program.to_owned(),
        })?;
        Ok(stdout.trim().to_owned())
    }
}

/// Version-control metadata identifying the exact source state of a run.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VcsInfo {
    /// Current branch name.
    pub branch: String,
    /// Latest commit hash.
    pub commit: String,
    /// URL of the `origin` remote.
    pub remote_url: String,
    /// Author of the latest commit.
    pub author: String,
    /// Date of the latest commit, formatted `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    /// Subject line of the latest commit.
    pub message: String,
}

impl VcsInfo {
    /// Collects the six version-control fields for `repo_dir`.
    ///
    /// Each field comes from an independent `git` invocation. The policy is
    /// all-or-nothing: if any invocation fails, the whole record is `None`
    /// rather than partially populated.
    #[must_use]
    pub fn collect(runner: &dyn CommandRunner, repo_dir: &Path) -> Option<Self> {
        let dir = repo_dir.to_str()?;
        Some(Self {
            branch: git(runner, dir, &["rev-parse", "--abbrev-ref", "HEAD"])?,
            commit: git(runner, dir, &["log", "-1", "--format=%H"])?,
            remote_url: git(runner, dir, &["config", "--get", "remote.origin.url"])?,
            author: git(runner, dir, &["log", "-1", "--format=%an"])?,
            date: git(
                runner,
                dir,
                &["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d %H:%M:%S"],
            )?,
            message: git(runner, dir, &["log", "-1", "--format=%s"])?,
        })
    }
}

fn git(runner: &dyn CommandRunner, dir: &str, args: &[&str]) -> Option<String> {
    let mut full: Vec<&str> = vec!["-C", dir];
    full.extend_from_slice(args);
    runner.run("git", &full).ok()
}
