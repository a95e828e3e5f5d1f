//! crates/provenance/src/report.rs
//! Fixed-width, comment-prefixed identification block for startup output.

use std::fmt::Write as _;

use crate::host::HostInfo;
use crate::vcs::VcsInfo;

/// Notice printed when the version-control record could not be retrieved.
pub const VCS_UNAVAILABLE_NOTICE: &str = "# Unable to retrieve version control information.";

/// Renders the provenance records into the human-readable startup block.
///
/// Every line is prefixed with `#` so the block survives verbatim inside
/// output files that treat `#` as a comment leader. An absent
/// version-control record is reported with a fixed notice rather than
/// partial fields.
#[must_use]
pub fn identification_report(vcs: Option<&VcsInfo>, host: &HostInfo) -> String {
    let mut out = String::new();

    if let Some(vcs) = vcs {
        let _ = writeln!(out, "# Version control information:");
        let _ = writeln!(out, "#      Remote URL: {:<24}", vcs.remote_url);
        let _ = writeln!(out, "#          Branch: {:<24}", vcs.branch);
        let _ = writeln!(out, "#     Last Commit: {:<24}", vcs.commit);
        let _ = writeln!(out, "#   Commit Author: {:<24}", vcs.author);
        let _ = writeln!(out, "#  Commit Message: {:<24}", vcs.message);
        let _ = writeln!(out, "#     Commit Date: {:<24}", vcs.date);
    } else {
        let _ = writeln!(out, "{VCS_UNAVAILABLE_NOTICE}");
    }

    let _ = writeln!(out, "#");
    let _ = writeln!(out, "# System information:");
    let _ = writeln!(out, "#     Current Folder: {}", host.current_dir);
    let _ = writeln!(out, "#       Machine Name: {}", host.hostname);
    let _ = writeln!(out, "#               FQDN: {}", host.fqdn);
    let _ = writeln!(out, "#   Operating System: {}", host.os_name);
    let _ = writeln!(out, "#         OS Version: {}", host.os_version);
    let _ = writeln!(out, "#          Processor: {}", host.processor);
    let _ = writeln!(out, "#     Number of CPUs: {}", host.cpu_count);
    let _ = writeln!(out, "#          User Name: {}", host.user_name);

    out
}
