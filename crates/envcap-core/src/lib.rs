//! Capability data model for the envcap target resolver.
//!
//! Defines the fixed set of capability flags, the tri-state support value,
//! the per-target capability profile, and the algebra for merging profiles
//! when several targets are requested at once.

pub mod flags;
pub mod merge;
pub mod profile;
pub mod support;

pub use flags::{CapabilityFlag, FlagGroup};
pub use merge::{merge, MergePolicy};
pub use profile::CapabilityProfile;
pub use support::Support;
