//! Target resolution entry points.

use envcap_core::{merge, CapabilityProfile, MergePolicy};

use crate::error::{Result, TargetError};
use crate::registry::registry;

/// Resolve a single target identifier into a capability profile.
///
/// Scans the registry in order and returns the first pattern's opinion.
/// Fails with [`TargetError::UnknownTarget`] when nothing matches.
pub fn resolve_target(target: &str) -> Result<CapabilityProfile> {
    for pattern in registry() {
        if let Some(profile) = pattern.apply(target) {
            return Ok(profile);
        }
    }
    Err(TargetError::UnknownTarget {
        target: target.to_string(),
        supported: registry()
            .iter()
            .map(|pattern| (pattern.name, pattern.description))
            .collect(),
    })
}

/// Resolve several target identifiers and merge them conjunctively.
///
/// The first unknown target aborts the whole call; there is no best-effort
/// merging of the targets that did resolve. An empty list yields the
/// all-`Unknown` profile.
pub fn resolve_targets<S: AsRef<str>>(targets: &[S]) -> Result<CapabilityProfile> {
    let profiles = targets
        .iter()
        .map(|target| resolve_target(target.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(merge(MergePolicy::All, &profiles))
}
