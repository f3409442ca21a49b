//! Target identifier resolution for the envcap capability model.
//!
//! Matches target strings such as `node14.5`, `web`, `electron12-main`, or
//! `es2020` against an ordered pattern registry and produces
//! [`CapabilityProfile`](envcap_core::CapabilityProfile)s. Several targets
//! resolve to a single profile via the conjunctive merge policy.

pub mod error;
pub mod gate;
pub mod registry;
pub mod resolve;

pub use error::{Result, TargetError};
pub use gate::VersionGate;
pub use registry::{registry, TargetPattern};
pub use resolve::{resolve_target, resolve_targets};
