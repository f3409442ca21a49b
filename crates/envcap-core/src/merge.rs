//! Merging capability profiles across several targets.
//!
//! Combines an ordered list of already-resolved profiles into one under a
//! three-valued policy. Flags stated by no input stay `Unknown` in the
//! output.

use crate::flags::CapabilityFlag;
use crate::profile::CapabilityProfile;
use crate::support::Support;

/// How stated values combine when several profiles are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// A flag holds unless a profile contradicts it: any explicit `No` wins,
    /// otherwise any `Yes` wins. This is the policy used when resolving
    /// several targets at once.
    All,
    /// A flag holds if any profile states it: any `Yes` wins, otherwise any
    /// explicit `No` wins.
    Any,
}

/// Merge `profiles` into a fresh profile under `policy`.
///
/// An empty input slice yields the all-`Unknown` profile.
pub fn merge(policy: MergePolicy, profiles: &[CapabilityProfile]) -> CapabilityProfile {
    let mut merged = CapabilityProfile::new();
    for flag in CapabilityFlag::ALL {
        let mut any_yes = false;
        let mut any_no = false;
        for profile in profiles {
            match profile.get(flag) {
                Support::Yes => any_yes = true,
                Support::No => any_no = true,
                Support::Unknown => {}
            }
        }
        let value = match policy {
            MergePolicy::All => {
                if any_no {
                    Support::No
                } else if any_yes {
                    Support::Yes
                } else {
                    Support::Unknown
                }
            }
            MergePolicy::Any => {
                if any_yes {
                    Support::Yes
                } else if any_no {
                    Support::No
                } else {
                    Support::Unknown
                }
            }
        };
        merged.set(flag, value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(entries: &[(CapabilityFlag, bool)]) -> CapabilityProfile {
        let mut profile = CapabilityProfile::new();
        for &(flag, value) in entries {
            profile.set(flag, value);
        }
        profile
    }

    const FLAG: CapabilityFlag = CapabilityFlag::Document;

    #[test]
    fn all_policy_agreement() {
        let merged = merge(
            MergePolicy::All,
            &[profile(&[(FLAG, true)]), profile(&[(FLAG, true)])],
        );
        assert_eq!(merged.get(FLAG), Support::Yes);
    }

    #[test]
    fn all_policy_explicit_no_wins() {
        let merged = merge(
            MergePolicy::All,
            &[profile(&[(FLAG, true)]), profile(&[(FLAG, false)])],
        );
        assert_eq!(merged.get(FLAG), Support::No);
    }

    // Intentionally preserved behavior, not a bug: under the `All` policy an
    // input with no opinion does NOT downgrade a `Yes`. "All" means "no
    // participant contradicts truth", not "all participants confirm truth".
    // A stricter three-valued AND would propagate `Unknown` here; this
    // implementation keeps the observed asymmetry.
    #[test]
    fn all_policy_unknown_does_not_downgrade_yes() {
        let merged = merge(
            MergePolicy::All,
            &[profile(&[(FLAG, true)]), CapabilityProfile::new()],
        );
        assert_eq!(merged.get(FLAG), Support::Yes);
    }

    #[test]
    fn any_policy_single_yes_wins() {
        let merged = merge(
            MergePolicy::Any,
            &[profile(&[(FLAG, false)]), profile(&[(FLAG, true)])],
        );
        assert_eq!(merged.get(FLAG), Support::Yes);
    }

    #[test]
    fn any_policy_defaults_to_no_when_stated() {
        let merged = merge(
            MergePolicy::Any,
            &[profile(&[(FLAG, false)]), CapabilityProfile::new()],
        );
        assert_eq!(merged.get(FLAG), Support::No);
    }

    #[test]
    fn unstated_flags_stay_unknown() {
        let merged = merge(
            MergePolicy::All,
            &[profile(&[(CapabilityFlag::Web, true)])],
        );
        assert_eq!(merged.get(CapabilityFlag::Node), Support::Unknown);

        let merged = merge(
            MergePolicy::Any,
            &[profile(&[(CapabilityFlag::Web, true)])],
        );
        assert_eq!(merged.get(CapabilityFlag::Node), Support::Unknown);
    }

    #[test]
    fn disjoint_sources_combine() {
        let merged = merge(
            MergePolicy::All,
            &[
                profile(&[(CapabilityFlag::Web, true)]),
                profile(&[(CapabilityFlag::Module, true)]),
            ],
        );
        assert_eq!(merged.get(CapabilityFlag::Web), Support::Yes);
        assert_eq!(merged.get(CapabilityFlag::Module), Support::Yes);
    }

    #[test]
    fn empty_input_is_vacuous() {
        assert!(merge(MergePolicy::All, &[]).is_vacuous());
        assert!(merge(MergePolicy::Any, &[]).is_vacuous());
    }
}
