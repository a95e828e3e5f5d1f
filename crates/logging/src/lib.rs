#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the console output primitives used across the osmium
//! workspace: a lockable [`VerbosityGate`] holding the active [`Verbosity`]
//! level, and a writer-generic [`Console`] sink exposing the `info` and
//! `warning` helpers that the rest of the driver calls ad hoc.
//!
//! # Design
//!
//! The gate is an explicit configuration object rather than a process-wide
//! singleton. It is constructed once at startup, configured from the command
//! line, locked, and then shared with every consumer through
//! `Rc<RefCell<VerbosityGate>>`. After locking, further `set_level` calls are
//! silent no-ops so late configuration paths cannot override the frozen
//! startup choice.
//!
//! [`Console`] wraps any [`io::Write`](std::io::Write) implementor, which
//! keeps production output on standard output while tests capture bytes in a
//! `Vec<u8>`. The helpers perform no verbosity gating themselves; the caller
//! passes the result of a gate query as the `show` argument.
//!
//! # Invariants
//!
//! - Once locked, no mutation path changes the gate's level, and none of them
//!   errors.
//! - An invalid level name passed to an unlocked gate leaves the level
//!   unchanged and surfaces [`ParseVerbosityError`], the only user-facing
//!   hard failure in this crate.
//! - Warnings carry the fixed [`WARNING_PREFIX`] marker; when the gate has
//!   [`Verbosity::Trace`] active, the captured call stack precedes the marker
//!   line.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use logging::{Console, Verbosity, VerbosityGate};
//!
//! let gate = Rc::new(RefCell::new(VerbosityGate::default()));
//! gate.borrow_mut().set_level("medium")?;
//! gate.borrow_mut().lock();
//!
//! let mut console = Console::new(Vec::new(), Rc::clone(&gate));
//! console.info("step 1", gate.borrow().is_at_least(Verbosity::Low))?;
//! console.warning("thermostat drift detected", true)?;
//!
//! let output = String::from_utf8(console.into_inner()).unwrap();
//! assert!(output.contains("step 1"));
//! assert!(output.contains(" !W! thermostat drift detected"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod console;
mod gate;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use console::{Console, WARNING_PREFIX};
pub use gate::{ParseVerbosityError, Verbosity, VerbosityGate};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{GateLayer, init_tracing};
