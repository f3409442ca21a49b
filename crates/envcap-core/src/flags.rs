//! The fixed set of capability flags.
//!
//! Flags are partitioned into three semantic groups: platform identity,
//! host API availability, and language-syntax availability. The partition
//! is a convention carried by [`CapabilityFlag::group`], not a structural
//! one. The set is closed; adding a flag is a code change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic group of a capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagGroup {
    /// Which runtime family the target is.
    Platform,
    /// Host-provided APIs and globals.
    HostApi,
    /// Language syntax the engine can parse.
    Syntax,
}

impl FlagGroup {
    /// Section title for listings.
    pub fn title(self) -> &'static str {
        match self {
            FlagGroup::Platform => "Platform",
            FlagGroup::HostApi => "Host APIs",
            FlagGroup::Syntax => "Syntax",
        }
    }
}

/// A named capability of a target environment.
///
/// The serialized form uses the canonical camelCase names
/// (`electronMain`, `importScriptsInWorker`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CapabilityFlag {
    // Platform identity
    Web,
    Node,
    Nwjs,
    ElectronMain,
    ElectronPreload,
    // Host APIs
    Require,
    Document,
    ImportScripts,
    ImportScriptsInWorker,
    FetchWasm,
    Global,
    // Language syntax
    GlobalThis,
    BigIntLiteral,
    Const,
    ArrowFunctions,
    ForOf,
    Destructuring,
    Import,
    Module,
}

impl CapabilityFlag {
    /// Every flag, in declaration order.
    pub const ALL: [CapabilityFlag; 19] = [
        CapabilityFlag::Web,
        CapabilityFlag::Node,
        CapabilityFlag::Nwjs,
        CapabilityFlag::ElectronMain,
        CapabilityFlag::ElectronPreload,
        CapabilityFlag::Require,
        CapabilityFlag::Document,
        CapabilityFlag::ImportScripts,
        CapabilityFlag::ImportScriptsInWorker,
        CapabilityFlag::FetchWasm,
        CapabilityFlag::Global,
        CapabilityFlag::GlobalThis,
        CapabilityFlag::BigIntLiteral,
        CapabilityFlag::Const,
        CapabilityFlag::ArrowFunctions,
        CapabilityFlag::ForOf,
        CapabilityFlag::Destructuring,
        CapabilityFlag::Import,
        CapabilityFlag::Module,
    ];

    /// Canonical camelCase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            CapabilityFlag::Web => "web",
            CapabilityFlag::Node => "node",
            CapabilityFlag::Nwjs => "nwjs",
            CapabilityFlag::ElectronMain => "electronMain",
            CapabilityFlag::ElectronPreload => "electronPreload",
            CapabilityFlag::Require => "require",
            CapabilityFlag::Document => "document",
            CapabilityFlag::ImportScripts => "importScripts",
            CapabilityFlag::ImportScriptsInWorker => "importScriptsInWorker",
            CapabilityFlag::FetchWasm => "fetchWasm",
            CapabilityFlag::Global => "global",
            CapabilityFlag::GlobalThis => "globalThis",
            CapabilityFlag::BigIntLiteral => "bigIntLiteral",
            CapabilityFlag::Const => "const",
            CapabilityFlag::ArrowFunctions => "arrowFunctions",
            CapabilityFlag::ForOf => "forOf",
            CapabilityFlag::Destructuring => "destructuring",
            CapabilityFlag::Import => "import",
            CapabilityFlag::Module => "module",
        }
    }

    /// Which semantic group the flag belongs to.
    pub fn group(self) -> FlagGroup {
        match self {
            CapabilityFlag::Web
            | CapabilityFlag::Node
            | CapabilityFlag::Nwjs
            | CapabilityFlag::ElectronMain
            | CapabilityFlag::ElectronPreload => FlagGroup::Platform,
            CapabilityFlag::Require
            | CapabilityFlag::Document
            | CapabilityFlag::ImportScripts
            | CapabilityFlag::ImportScriptsInWorker
            | CapabilityFlag::FetchWasm
            | CapabilityFlag::Global => FlagGroup::HostApi,
            CapabilityFlag::GlobalThis
            | CapabilityFlag::BigIntLiteral
            | CapabilityFlag::Const
            | CapabilityFlag::ArrowFunctions
            | CapabilityFlag::ForOf
            | CapabilityFlag::Destructuring
            | CapabilityFlag::Import
            | CapabilityFlag::Module => FlagGroup::Syntax,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CapabilityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
