//! The target pattern registry.
//!
//! An ordered, immutable catalogue of recognized target families. Each entry
//! pairs an anchored matcher over the whole input string with a resolver from
//! the captured version text to a capability profile. The list is built once
//! inside a `Lazy` static and only read afterwards; resolution scans it in
//! order and the first matching entry wins. Matchers are mutually exclusive
//! by construction, so order only decides which matcher fires, and listings
//! follow it.

use envcap_core::{CapabilityFlag, CapabilityProfile, FlagGroup};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::gate::VersionGate;

/// One recognized target family.
pub struct TargetPattern {
    /// Display name, with placeholders (e.g. `[async-]node[X[.Y]]`).
    pub name: &'static str,
    /// One-line description for listings and error messages.
    pub description: &'static str,
    matcher: Regex,
    resolver: fn(&Captures) -> Option<CapabilityProfile>,
}

impl TargetPattern {
    /// Run this pattern against a full target string.
    ///
    /// `None` when the matcher does not match or the resolver states no
    /// opinion; the caller then tries the next pattern.
    pub fn apply(&self, target: &str) -> Option<CapabilityProfile> {
        let captures = self.matcher.captures(target)?;
        (self.resolver)(&captures)
    }
}

static REGISTRY: Lazy<Vec<TargetPattern>> = Lazy::new(|| {
    vec![
        TargetPattern {
            name: "web",
            description: "Web browser page (DOM, fetch, workers).",
            matcher: Regex::new(r"^web$").unwrap(),
            resolver: |_| Some(browser_profile(false)),
        },
        TargetPattern {
            name: "webworker",
            description: "Web Worker, SharedWorker or Service Worker.",
            matcher: Regex::new(r"^webworker$").unwrap(),
            resolver: |_| Some(browser_profile(true)),
        },
        TargetPattern {
            name: "[async-]node[X[.Y]]",
            description: "Node.js in CommonJS or async-loading flavor; syntax gated on the version.",
            matcher: Regex::new(r"^(async-)?node((\d+)(?:\.(\d+))?)?$").unwrap(),
            resolver: |captures| {
                let gate = capture_gate(captures, 3);
                Some(node_profile(&gate, captures.get(1).is_some()))
            },
        },
        TargetPattern {
            name: "electron[X[.Y]]-main",
            description: "Electron main process; syntax gated on the Electron version.",
            matcher: Regex::new(r"^electron((\d+)(?:\.(\d+))?)?-main$").unwrap(),
            resolver: |captures| Some(electron_main_profile(&capture_gate(captures, 2))),
        },
        TargetPattern {
            name: "electron[X[.Y]]-preload",
            description: "Electron preload or renderer script; syntax gated on the Electron version.",
            matcher: Regex::new(r"^electron((\d+)(?:\.(\d+))?)?-(?:preload|renderer)$").unwrap(),
            resolver: |captures| Some(electron_preload_profile(&capture_gate(captures, 2))),
        },
        TargetPattern {
            name: "nwjs[X[.Y]]",
            description: "NW.js (also matches node-webkit); syntax gated on the NW.js version.",
            matcher: Regex::new(r"^(?:nwjs|node-webkit)((\d+)(?:\.(\d+))?)?$").unwrap(),
            resolver: |captures| Some(nwjs_profile(&capture_gate(captures, 2))),
        },
        TargetPattern {
            name: "esX",
            description: "EcmaScript edition or year (es5, es6, es2020, ...).",
            matcher: Regex::new(r"^es(\d+)$").unwrap(),
            resolver: |captures| {
                let version = captures.get(1)?.as_str().parse::<u64>().ok()?;
                Some(es_profile(version))
            },
        },
    ]
});

/// The process-wide pattern registry, in match order.
pub fn registry() -> &'static [TargetPattern] {
    &REGISTRY
}

/// Build a gate from the digit captures at `major_group` and the following
/// group. Digit runs too long for `u64` count as "no version supplied".
fn capture_gate(captures: &Captures, major_group: usize) -> VersionGate {
    let number = |group: usize| {
        captures
            .get(group)
            .and_then(|m| m.as_str().parse::<u64>().ok())
    };
    VersionGate::new(number(major_group), number(major_group + 1))
}

fn no_platform_except(profile: &mut CapabilityProfile, stated: &[CapabilityFlag]) {
    for flag in CapabilityFlag::ALL {
        if flag.group() == FlagGroup::Platform {
            profile.set(flag, stated.contains(&flag));
        }
    }
}

/// `web` and `webworker` targets. Browsers state no syntax flags: the
/// identifier names no engine version to gate on.
fn browser_profile(worker: bool) -> CapabilityProfile {
    let mut profile = CapabilityProfile::new();
    no_platform_except(&mut profile, &[CapabilityFlag::Web]);

    profile.set(CapabilityFlag::Document, !worker);
    profile.set(CapabilityFlag::ImportScripts, worker);
    profile.set(CapabilityFlag::ImportScriptsInWorker, true);
    profile.set(CapabilityFlag::FetchWasm, true);
    profile.set(CapabilityFlag::Require, false);
    profile.set(CapabilityFlag::Global, false);
    profile
}

fn node_profile(gate: &VersionGate, async_flavor: bool) -> CapabilityProfile {
    let mut profile = CapabilityProfile::new();
    no_platform_except(&mut profile, &[CapabilityFlag::Node]);

    // async-node loads chunks with promises, so synchronous require is out.
    profile.set(CapabilityFlag::Require, !async_flavor);
    profile.set(CapabilityFlag::Global, true);
    profile.set(CapabilityFlag::Document, false);
    profile.set(CapabilityFlag::ImportScripts, false);
    profile.set(CapabilityFlag::ImportScriptsInWorker, false);
    profile.set(CapabilityFlag::FetchWasm, false);

    profile.set(CapabilityFlag::GlobalThis, gate.available(12, 0));
    profile.set(CapabilityFlag::Const, gate.available(6, 0));
    profile.set(CapabilityFlag::ArrowFunctions, gate.available(6, 0));
    profile.set(CapabilityFlag::ForOf, gate.available(5, 0));
    profile.set(CapabilityFlag::Destructuring, gate.available(6, 0));
    profile.set(CapabilityFlag::BigIntLiteral, gate.available(10, 4));
    profile.set(CapabilityFlag::Import, gate.available(12, 17));
    profile.set(CapabilityFlag::Module, gate.available(12, 17));
    profile
}

fn electron_syntax(profile: &mut CapabilityProfile, gate: &VersionGate) {
    profile.set(CapabilityFlag::GlobalThis, gate.available(5, 0));
    profile.set(CapabilityFlag::Const, gate.available(1, 1));
    profile.set(CapabilityFlag::ArrowFunctions, gate.available(1, 1));
    profile.set(CapabilityFlag::ForOf, gate.available(0, 36));
    profile.set(CapabilityFlag::Destructuring, gate.available(1, 1));
    profile.set(CapabilityFlag::BigIntLiteral, gate.available(4, 0));
    profile.set(CapabilityFlag::Import, gate.available(11, 0));
    profile.set(CapabilityFlag::Module, gate.available(11, 0));
}

fn electron_main_profile(gate: &VersionGate) -> CapabilityProfile {
    let mut profile = CapabilityProfile::new();
    no_platform_except(
        &mut profile,
        &[CapabilityFlag::Node, CapabilityFlag::ElectronMain],
    );

    profile.set(CapabilityFlag::Require, true);
    profile.set(CapabilityFlag::Global, true);
    profile.set(CapabilityFlag::Document, false);
    profile.set(CapabilityFlag::ImportScripts, false);
    profile.set(CapabilityFlag::ImportScriptsInWorker, true);
    profile.set(CapabilityFlag::FetchWasm, false);

    electron_syntax(&mut profile, gate);
    profile
}

fn electron_preload_profile(gate: &VersionGate) -> CapabilityProfile {
    let mut profile = CapabilityProfile::new();
    no_platform_except(
        &mut profile,
        &[
            CapabilityFlag::Node,
            CapabilityFlag::Web,
            CapabilityFlag::ElectronPreload,
        ],
    );

    profile.set(CapabilityFlag::Require, true);
    profile.set(CapabilityFlag::Global, true);
    profile.set(CapabilityFlag::Document, true);
    profile.set(CapabilityFlag::ImportScripts, false);
    profile.set(CapabilityFlag::ImportScriptsInWorker, true);
    profile.set(CapabilityFlag::FetchWasm, true);

    electron_syntax(&mut profile, gate);
    profile
}

fn nwjs_profile(gate: &VersionGate) -> CapabilityProfile {
    let mut profile = CapabilityProfile::new();
    no_platform_except(
        &mut profile,
        &[
            CapabilityFlag::Node,
            CapabilityFlag::Web,
            CapabilityFlag::Nwjs,
        ],
    );

    profile.set(CapabilityFlag::Require, true);
    profile.set(CapabilityFlag::Global, true);
    profile.set(CapabilityFlag::Document, true);
    profile.set(CapabilityFlag::ImportScripts, false);
    profile.set(CapabilityFlag::ImportScriptsInWorker, true);
    profile.set(CapabilityFlag::FetchWasm, true);

    profile.set(CapabilityFlag::GlobalThis, gate.available(0, 43));
    profile.set(CapabilityFlag::Const, gate.available(0, 15));
    profile.set(CapabilityFlag::ArrowFunctions, gate.available(0, 15));
    profile.set(CapabilityFlag::ForOf, gate.available(0, 13));
    profile.set(CapabilityFlag::Destructuring, gate.available(0, 15));
    profile.set(CapabilityFlag::BigIntLiteral, gate.available(0, 32));
    profile.set(CapabilityFlag::Import, gate.available(0, 36));
    profile.set(CapabilityFlag::Module, gate.available(0, 36));
    profile
}

/// `esX` targets state syntax only; the identifier says nothing about the
/// host. One rule for every syntax flag: available from edition 6 on.
fn es_profile(version: u64) -> CapabilityProfile {
    // EcmaScript years (es2015 and up) normalize to edition numbers.
    let edition = if version > 1000 {
        version.saturating_sub(2009)
    } else {
        version
    };
    let supported = edition >= 6;

    let mut profile = CapabilityProfile::new();
    for flag in CapabilityFlag::ALL {
        if flag.group() == FlagGroup::Syntax {
            profile.set(flag, supported);
        }
    }
    profile
}
