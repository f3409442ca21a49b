//! Version gating for feature availability.
//!
//! A [`VersionGate`] carries the version a caller requested (if any) and
//! answers whether a feature introduced at some baseline version is
//! available there. Pure comparison, no I/O.

use envcap_core::Support;
use semver::Version;

/// Comparator from a requested target version to feature availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGate {
    requested: Option<Version>,
}

impl VersionGate {
    /// Gate for a `major[.minor]` request.
    ///
    /// A `None` major means the caller supplied no version at all; a missing
    /// minor defaults to 0. Patch components are pinned to 0 since target
    /// identifiers never carry one.
    pub fn new(major: Option<u64>, minor: Option<u64>) -> Self {
        let requested = major.map(|major| Version::new(major, minor.unwrap_or(0), 0));
        Self { requested }
    }

    /// Whether a feature introduced at `major.minor` is available.
    ///
    /// `Unknown` when no version was requested: the version is not known, so
    /// availability cannot be asserted either way. Otherwise `Yes` iff the
    /// requested version is at least the baseline.
    pub fn available(&self, major: u64, minor: u64) -> Support {
        match &self.requested {
            Some(requested) => (*requested >= Version::new(major, minor, 0)).into(),
            None => Support::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_major_is_available() {
        let gate = VersionGate::new(Some(14), Some(5));
        assert_eq!(gate.available(12, 0), Support::Yes);
        assert_eq!(gate.available(13, 99), Support::Yes);
    }

    #[test]
    fn equal_major_compares_minor() {
        let gate = VersionGate::new(Some(10), Some(4));
        assert_eq!(gate.available(10, 4), Support::Yes);
        assert_eq!(gate.available(10, 5), Support::No);
        assert_eq!(gate.available(10, 0), Support::Yes);
    }

    #[test]
    fn lower_major_is_unavailable() {
        let gate = VersionGate::new(Some(10), Some(0));
        assert_eq!(gate.available(10, 4), Support::No);
        assert_eq!(gate.available(12, 17), Support::No);
    }

    #[test]
    fn missing_minor_defaults_to_zero() {
        let gate = VersionGate::new(Some(6), None);
        assert_eq!(gate.available(6, 0), Support::Yes);
        assert_eq!(gate.available(6, 1), Support::No);
    }

    #[test]
    fn no_version_yields_unknown_everywhere() {
        let gate = VersionGate::new(None, None);
        assert_eq!(gate.available(0, 0), Support::Unknown);
        assert_eq!(gate.available(12, 17), Support::Unknown);

        // A minor without a major is still "no version".
        let gate = VersionGate::new(None, Some(5));
        assert_eq!(gate.available(1, 0), Support::Unknown);
    }

    #[test]
    fn monotonic_in_requested_version() {
        // Once available at a baseline, raising the request keeps it available.
        let baselines = [(0, 36), (5, 0), (10, 4), (12, 17)];
        for (base_major, base_minor) in baselines {
            let mut previous = false;
            for requested in 0..20 {
                let gate = VersionGate::new(Some(requested), Some(0));
                let now = gate.available(base_major, base_minor) == Support::Yes;
                assert!(now || !previous, "availability flipped back off");
                previous = now;
            }
        }
    }
}
