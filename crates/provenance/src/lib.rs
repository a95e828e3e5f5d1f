#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `provenance` gathers the metadata printed at startup so a run can later be
//! traced back to the exact source state and host that produced it: a
//! [`VcsInfo`] record describing the version-control checkout, and a
//! [`HostInfo`] record describing the executing machine and environment.
//! [`identification_report`] renders both into the comment-prefixed text
//! block shown under the startup banner.
//!
//! # Design
//!
//! Version-control queries run as external `git` invocations behind the
//! [`CommandRunner`] capability, so tests exercise collection with stub
//! runners instead of spawning subprocesses. Host queries sit behind the
//! analogous [`HostProbe`] trait.
//!
//! The two records deliberately follow different failure policies:
//!
//! - [`VcsInfo::collect`] is all-or-nothing. If any of its six queries fails
//!   the whole record is absent, and the report prints a fixed notice rather
//!   than partial data.
//! - [`HostInfo`] collection is per-field. A failed query defaults that field
//!   to an empty string or zero while the rest of the record is still
//!   populated.
//!
//! # Errors
//!
//! [`CommandError`] describes why an external invocation failed (spawn
//! failure, non-zero exit, or non-UTF-8 output). Collection helpers absorb
//! these into `Option`/defaults; nothing in this crate aborts the host
//! program.

mod host;
mod report;
mod vcs;

pub use host::{HostInfo, HostProbe, SystemProbe};
pub use report::{VCS_UNAVAILABLE_NOTICE, identification_report};
pub use vcs::{CommandError, CommandRunner, SystemCommandRunner, VcsInfo};
