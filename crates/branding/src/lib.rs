#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `branding` centralises the identity of the osmium driver: the program
//! name, version string, tagline, and source URL rendered by user-visible
//! banners and `--version` output. Keeping the constants in one leaf crate
//! means diagnostics, help text, and the startup banner can never drift
//! apart.
//!
//! # Invariants
//!
//! - [`VERSION`] always equals the workspace package version, so banners and
//!   `--version` output stay aligned with the released artefact.
//! - [`banner`] embeds [`VERSION`] and [`TAGLINE`]; it performs no I/O and
//!   cannot fail.

/// Canonical program name used in banners, help text, and diagnostics.
pub const PROGRAM_NAME: &str = "osmium";

/// Workspace version string rendered in banners and `--version` output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description printed beside the version in the banner.
pub const TAGLINE: &str = "An Atomistic Simulation Driver";

/// Canonical source repository URL.
pub const SOURCE_URL: &str = "https://github.com/osmium-md/osmium";

/// Renders the ASCII-art startup banner.
///
/// The art embeds the program name, [`VERSION`], and [`TAGLINE`]; callers
/// print it verbatim to standard output before the provenance block.
#[must_use]
pub fn banner() -> String {
    format!(
        r"
 ================================================================
    ___  ___ _ __ ___  (_)_   _ _ __ ___
   / _ \/ __| '_ ` _ \ | | | | | '_ ` _ \     -*-  {PROGRAM_NAME} v {VERSION}  -*-
  | (_) |__/ | | | | | | | |_| | | | | | |
   \___/|___/_| |_| |_|_|_|\__,_|_| |_| |_|   {TAGLINE}
 ================================================================
"
    )
}
