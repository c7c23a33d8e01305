//! `penlint rules` - list available rules.

use miette::Result;
use penlint_core::rules::curated_rules;

pub fn run() -> Result<()> {
    for rule in curated_rules() {
        println!("{:<26} {}", rule.id(), rule.description());
    }
    Ok(())
}
