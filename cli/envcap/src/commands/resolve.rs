//! `envcap resolve` — resolve targets into one capability profile.

use anyhow::{bail, Result};

use envcap_core::{CapabilityFlag, CapabilityProfile, FlagGroup};
use envcap_targets::resolve_targets;

use crate::manifest::EnvcapManifest;

pub fn run(targets: &[String], json: bool) -> Result<()> {
    let targets = effective_targets(targets)?;
    let profile = resolve_targets(&targets)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&targets, &profile);
    }
    Ok(())
}

/// Targets from the command line, or the manifest's `[build] targets` when
/// the command line names none.
fn effective_targets(cli_targets: &[String]) -> Result<Vec<String>> {
    if !cli_targets.is_empty() {
        return Ok(cli_targets.to_vec());
    }
    if let Some(manifest) = EnvcapManifest::find()? {
        if !manifest.targets().is_empty() {
            return Ok(manifest.targets().to_vec());
        }
    }
    bail!(
        "no targets given; pass them as arguments or list them under \
         [build] targets in envcap.toml"
    );
}

fn print_profile(targets: &[String], profile: &CapabilityProfile) {
    println!("=== {} ===", targets.join(", "));
    for group in [FlagGroup::Platform, FlagGroup::HostApi, FlagGroup::Syntax] {
        println!();
        println!("--- {} ---", group.title());
        for flag in CapabilityFlag::ALL {
            if flag.group() == group {
                println!("  {:<24} {}", flag.name(), profile.get(flag));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_targets() {
        assert!(run(&["web".to_string()], false).is_ok());
        assert!(run(&["node14.5".to_string(), "es2020".to_string()], true).is_ok());
    }

    #[test]
    fn unknown_target_is_an_error() {
        let error = run(&["bogus-target".to_string()], false).unwrap_err();
        assert!(error.to_string().contains("bogus-target"));
    }

    #[test]
    fn explicit_targets_win_over_manifest() {
        let targets = effective_targets(&["es6".to_string()]).unwrap();
        assert_eq!(targets, vec!["es6".to_string()]);
    }
}
