//! Build metadata for the `version` command.
//!
//! `VSHARP_GIT_COMMIT`, `VSHARP_BUILD_TIME` and `VSHARP_RUSTC_VERSION`
//! are read from the environment at compile time.

use std::env::consts;
use std::fmt;

const UNKNOWN: &str = "unknown";

/// Version, commit, toolchain and platform of this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_time: &'static str,
    pub rustc: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl VersionInfo {
    /// Metadata baked into the current binary.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: or_unknown(option_env!("VSHARP_GIT_COMMIT")),
            build_time: or_unknown(option_env!("VSHARP_BUILD_TIME")),
            rustc: or_unknown(option_env!("VSHARP_RUSTC_VERSION")),
            os: consts::OS,
            arch: consts::ARCH,
        }
    }
}

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => UNKNOWN,
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VSharp Version: {}", self.version)?;
        writeln!(f, "Commit: {}", self.commit)?;
        writeln!(f, "Build Time: {}", self.build_time)?;
        writeln!(f, "Rust Version: {}", self.rustc)?;
        write!(f, "Platform: {}/{}", self.os, self.arch)
    }
}

/// Multi-line banner printed by `vsharp version`.
#[must_use]
pub fn full_version() -> String {
    VersionInfo::current().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_contains_fields() {
        let out = full_version();
        for field in [
            "Version:",
            "Commit:",
            "Build Time:",
            "Rust Version:",
            "Platform:",
        ] {
            assert!(out.contains(field), "missing {field:?} in:\n{out}");
        }
    }

    #[test]
    fn fields_are_never_empty() {
        let info = VersionInfo::current();
        assert!(!info.version.is_empty());
        assert!(!info.commit.is_empty());
        assert!(!info.build_time.is_empty());
        assert!(!info.rustc.is_empty());
        assert!(!info.os.is_empty());
        assert!(!info.arch.is_empty());
    }

    #[test]
    fn banner_layout() {
        let out = full_version();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("VSharp Version:"));
        assert!(lines[4].starts_with("Platform:"));
        assert_eq!(
            lines[4],
            format!("Platform: {}/{}", consts::OS, consts::ARCH)
        );
    }
}
