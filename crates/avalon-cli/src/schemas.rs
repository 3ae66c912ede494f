//! # Schemas Subcommand
//!
//! Lists the registered schema identifiers, one per line.

use clap::Args;

use avalon_schema::registry;

/// Arguments for the schemas subcommand.
#[derive(Args, Debug)]
pub struct SchemasArgs {}

/// Print every registered schema identifier to stdout.
pub fn run_schemas(_args: &SchemasArgs) -> anyhow::Result<u8> {
    for ruleset in registry::rulesets() {
        println!("{}", ruleset.id);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_exits_zero() {
        assert_eq!(run_schemas(&SchemasArgs {}).unwrap(), 0);
    }
}
