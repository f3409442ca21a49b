//! `envcap list` — supported target patterns.

use anyhow::Result;

use envcap_targets::registry;

pub fn run() -> Result<()> {
    println!("Supported targets:");
    println!();
    for pattern in registry() {
        println!("  {:<28} {}", pattern.name, pattern.description);
    }
    Ok(())
}
