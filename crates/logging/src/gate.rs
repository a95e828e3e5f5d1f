//! crates/logging/src/gate.rs
//! Ordered verbosity levels and the lockable gate storing the active one.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered verbosity levels controlling how much diagnostic output is emitted.
///
/// Levels carry an integer rank from 0 (`Quiet`) to 5 (`Trace`); a query for
/// a given level succeeds when the active rank is greater than or equal to
/// the queried rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Suppress everything except output that is always shown.
    Quiet,
    /// Essential progress output only.
    Low,
    /// Routine informational output.
    Medium,
    /// Detailed informational output.
    High,
    /// Diagnostic output intended for debugging sessions.
    Debug,
    /// Maximum output, including call stacks attached to warnings.
    Trace,
}

impl Verbosity {
    /// Every level in ascending rank order.
    pub const ALL: [Self; 6] = [
        Self::Quiet,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the integer rank backing this level.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Debug => 4,
            Self::Trace => 5,
        }
    }

    /// Returns the canonical lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`Verbosity`] from an unrecognised name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid verbosity level {0:?}; expected quiet, low, medium, high, debug, or trace")]
pub struct ParseVerbosityError(String);

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiet" => Ok(Self::Quiet),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(ParseVerbosityError(other.to_owned())),
        }
    }
}

/// Lockable holder for the active verbosity level.
///
/// The gate starts unlocked at [`Verbosity::Low`]. Startup code applies the
/// user's chosen level, then calls [`lock`](Self::lock); from that point on
/// every setter is a silent no-op, so the configuration parsed at startup
/// stays frozen for the lifetime of the run.
#[derive(Clone, Debug)]
pub struct VerbosityGate {
    level: Verbosity,
    locked: bool,
}

impl Default for VerbosityGate {
    fn default() -> Self {
        Self::new(Verbosity::Low)
    }
}

impl VerbosityGate {
    /// Creates an unlocked gate holding `level`.
    #[must_use]
    pub const fn new(level: Verbosity) -> Self {
        Self {
            level,
            locked: false,
        }
    }

    /// Returns the active level.
    #[must_use]
    pub const fn level(&self) -> Verbosity {
        self.level
    }

    /// Reports whether the gate has been locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Freezes the gate; subsequent setters become silent no-ops.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Stores `level` unless the gate is locked.
    pub fn set(&mut self, level: Verbosity) {
        if !self.locked {
            self.level = level;
        }
    }

    /// Parses `name` and stores the resulting level.
    ///
    /// A locked gate ignores the call entirely, valid name or not, and
    /// returns `Ok(())`. An unlocked gate surfaces [`ParseVerbosityError`]
    /// for unrecognised names and leaves the level unchanged.
    pub fn set_level(&mut self, name: &str) -> Result<(), ParseVerbosityError> {
        if self.locked {
            return Ok(());
        }
        self.level = name.parse()?;
        Ok(())
    }

    /// Returns true iff the active rank is at least `level`'s rank.
    #[must_use]
    pub fn is_at_least(&self, level: Verbosity) -> bool {
        self.level >= level
    }

    /// String-keyed variant of [`is_at_least`](Self::is_at_least).
    pub fn is_at_least_named(&self, name: &str) -> Result<bool, ParseVerbosityError> {
        Ok(self.is_at_least(name.parse()?))
    }
}
