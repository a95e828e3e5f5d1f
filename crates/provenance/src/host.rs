//! crates/provenance/src/host.rs
//! Host and environment metadata with per-field failure tolerance.

use std::env;

/// Capability to query individual host facts.
///
/// Each method may fail independently by returning `None`;
/// [`HostInfo::from_probe`] substitutes an empty/zero default for that field
/// while still populating the rest of the record. Tests implement the trait
/// to fail a single query and observe the defaulting behaviour.
pub trait HostProbe {
    /// Current working directory.
    fn current_dir(&self) -> Option<String>;
    /// Short host name of the machine.
    fn hostname(&self) -> Option<String>;
    /// Fully qualified domain name of the machine.
    fn fqdn(&self) -> Option<String>;
    /// Operating system name.
    fn os_name(&self) -> Option<String>;
    /// Operating system release/version string.
    fn os_version(&self) -> Option<String>;
    /// Processor identifier.
    fn processor(&self) -> Option<String>;
    /// Number of logical CPUs available.
    fn cpu_count(&self) -> Option<usize>;
    /// Name of the user running the process.
    fn user_name(&self) -> Option<String>;
}

/// [`HostProbe`] backed by the platform APIs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn current_dir(&self) -> Option<String> {
        env::current_dir().ok().map(|p| p.display().to_string())
    }

    fn hostname(&self) -> Option<String> {
        hostname::get().ok()?.into_string().ok()
    }

    fn fqdn(&self) -> Option<String> {
        // Resolve the short name to an address, then reverse-resolve the
        // address to its canonical name.
        let name = self.hostname()?;
        let addr = dns_lookup::lookup_host(&name).ok()?.into_iter().next()?;
        dns_lookup::lookup_addr(&addr).ok()
    }

    fn os_name(&self) -> Option<String> {
        Some(env::consts::OS.to_owned())
    }

    #[cfg(unix)]
    fn os_version(&self) -> Option<String> {
        Some(rustix::system::uname().release().to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn os_version(&self) -> Option<String> {
        None
    }

    fn processor(&self) -> Option<String> {
        Some(env::consts::ARCH.to_owned())
    }

    fn cpu_count(&self) -> Option<usize> {
        Some(num_cpus::get())
    }

    #[cfg(unix)]
    fn user_name(&self) -> Option<String> {
        uzers::get_current_username()?.into_string().ok()
    }

    #[cfg(not(unix))]
    fn user_name(&self) -> Option<String> {
        env::var("USERNAME").ok()
    }
}

/// Metadata identifying the host machine and environment executing a run.
///
/// Unlike [`VcsInfo`](crate::VcsInfo), this record is always present;
/// individual fields default to empty/zero when their query fails.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostInfo {
    /// Current working directory.
    pub current_dir: String,
    /// Short host name.
    pub hostname: String,
    /// Fully qualified domain name.
    pub fqdn: String,
    /// Operating system name.
    pub os_name: String,
    /// Operating system release/version string.
    pub os_version: String,
    /// Processor identifier.
    pub processor: String,
    /// Number of logical CPUs.
    pub cpu_count: usize,
    /// Name of the user running the process.
    pub user_name: String,
}

impl HostInfo {
    /// Collects the record from the live platform APIs.
    #[must_use]
    pub fn collect() -> Self {
        Self::from_probe(&SystemProbe)
    }

    /// Collects the record from `probe`, defaulting each failed field.
    #[must_use]
    pub fn from_probe(probe: &dyn HostProbe) -> Self {
        Self {
            current_dir: probe.current_dir().unwrap_or_default(),
            hostname: probe.hostname().unwrap_or_default(),
            fqdn: probe.fqdn().unwrap_or_default(),
            os_name: probe.os_name().unwrap_or_default(),
            os_version: probe.os_version().unwrap_or_default(),
            processor: probe.processor().unwrap_or_default(),
            cpu_count: probe.cpu_count().unwrap_or_default(),
            user_name: probe.user_name().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe answering every query, with one optional field knocked out.
    struct FixtureProbe {
        fail: Option<&'static str>,
    }

    impl FixtureProbe {
        const fn ok() -> Self {
            Self { fail: None }
        }

        const fn without(field: &'static str) -> Self {
            Self { fail: Some(field) }
        }

        fn answer(&self, field: &'static str, value: &str) -> Option<String> {
            if self.fail == Some(field) {
                None
            } else {
                Some(value.to_owned())
            }
        }
    }

    impl HostProbe for FixtureProbe {
        fn current_dir(&self) -> Option<String> {
            self.answer("current_dir", "/scratch/run-42")
        }
        fn hostname(&self) -> Option<String> {
            self.answer("hostname", "node17")
        }
        fn fqdn(&self) -> Option<String> {
            self.answer("fqdn", "node17.cluster.example.org")
        }
        fn os_name(&self) -> Option<String> {
            self.answer("os_name", "linux")
        }
        fn os_version(&self) -> Option<String> {
            self.answer("os_version", "6.8.0")
        }
        fn processor(&self) -> Option<String> {
            self.answer("processor", "x86_64")
        }
        fn cpu_count(&self) -> Option<usize> {
            if self.fail == Some("cpu_count") {
                None
            } else {
                Some(64)
            }
        }
        fn user_name(&self) -> Option<String> {
            self.answer("user_name", "md-runner")
        }
    }

    #[test]
    fn every_field_populated_when_all_queries_succeed() {
        let info = HostInfo::from_probe(&FixtureProbe::ok());
        assert_eq!(info.current_dir, "/scratch/run-42");
        assert_eq!(info.hostname, "node17");
        assert_eq!(info.fqdn, "node17.cluster.example.org");
        assert_eq!(info.os_name, "linux");
        assert_eq!(info.os_version, "6.8.0");
        assert_eq!(info.processor, "x86_64");
        assert_eq!(info.cpu_count, 64);
        assert_eq!(info.user_name, "md-runner");
    }

    #[test]
    fn failed_hostname_defaults_only_that_field() {
        let info = HostInfo::from_probe(&FixtureProbe::without("hostname"));
        assert!(info.hostname.is_empty());
        assert_eq!(info.fqdn, "node17.cluster.example.org");
        assert_eq!(info.cpu_count, 64);
        assert_eq!(info.user_name, "md-runner");
    }

    #[test]
    fn failed_cpu_count_defaults_to_zero() {
        let info = HostInfo::from_probe(&FixtureProbe::without("cpu_count"));
        assert_eq!(info.cpu_count, 0);
        assert_eq!(info.hostname, "node17");
    }

    #[test]
    fn each_field_fails_independently() {
        let fields = [
            "current_dir",
            "hostname",
            "fqdn",
            "os_name",
            "os_version",
            "processor",
            "user_name",
        ];
        for field in fields {
            let info = HostInfo::from_probe(&FixtureProbe::without(field));
            let empty_count = [
                &info.current_dir,
                &info.hostname,
                &info.fqdn,
                &info.os_name,
                &info.os_version,
                &info.processor,
                &info.user_name,
            ]
            .iter()
            .filter(|s| s.is_empty())
            .count();
            assert_eq!(empty_count, 1, "exactly one field empty when {field} fails");
            assert_eq!(info.cpu_count, 64);
        }
    }

    #[test]
    fn live_probe_populates_stable_fields() {
        let info = HostInfo::collect();
        // Working directory, OS name, and CPU count come from infallible
        // queries in practice; hostname/FQDN may be empty in bare sandboxes.
        assert!(!info.current_dir.is_empty());
        assert!(!info.os_name.is_empty());
        assert!(info.cpu_count > 0);
    }
}
