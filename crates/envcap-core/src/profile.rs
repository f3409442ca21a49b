//! Capability profiles.
//!
//! A profile assigns a tri-state [`Support`] value to every capability flag.
//! Flags nobody stated an opinion on stay [`Support::Unknown`]; the tri-state
//! is the representation itself, so an absent opinion can never be mistaken
//! for an explicit `false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::flags::CapabilityFlag;
use crate::support::Support;

/// Tri-state capability assignment for one or more resolved targets.
///
/// Each resolution call produces a fresh profile owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityProfile {
    values: [Support; CapabilityFlag::ALL.len()],
}

impl CapabilityProfile {
    /// Profile with every flag `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `flag`.
    pub fn get(&self, flag: CapabilityFlag) -> Support {
        self.values[flag.index()]
    }

    /// State a value for `flag`. Accepts `bool` or [`Support`].
    pub fn set(&mut self, flag: CapabilityFlag, value: impl Into<Support>) {
        self.values[flag.index()] = value.into();
    }

    /// Flags with a stated (non-`Unknown`) value, in declaration order.
    pub fn stated(&self) -> impl Iterator<Item = (CapabilityFlag, bool)> + '_ {
        CapabilityFlag::ALL
            .iter()
            .filter_map(|&flag| self.get(flag).as_bool().map(|value| (flag, value)))
    }

    /// Whether no flag has a stated value.
    pub fn is_vacuous(&self) -> bool {
        self.stated().next().is_none()
    }
}

/// Serializes as a map of the stated flags only, e.g.
/// `{"web": true, "require": false}`. `Unknown` flags are absent.
impl Serialize for CapabilityProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stated: BTreeMap<CapabilityFlag, bool> = self.stated().collect();
        stated.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CapabilityProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stated = BTreeMap::<CapabilityFlag, bool>::deserialize(deserializer)?;
        let mut profile = CapabilityProfile::new();
        for (flag, value) in stated {
            profile.set(flag, value);
        }
        Ok(profile)
    }
}
