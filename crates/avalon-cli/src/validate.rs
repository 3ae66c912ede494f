//! # Validate Subcommand
//!
//! Checks JSON documents on disk against the ruleset named by each
//! document's own `schema` field. A file that cannot be read or parsed
//! is a hard error; a document that fails validation counts as a
//! failure but does not stop the run.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use avalon_schema::registry;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Paths to JSON documents to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report every violation per document instead of stopping at the
    /// first one.
    #[arg(long)]
    pub all_errors: bool,
}

/// Validate each file. Returns exit code 0 when every document passed,
/// 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<u8> {
    let mut passed = 0usize;
    let mut failed = 0usize;

    for path in &args.files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?;

        let ruleset = registry::ruleset_for_document(&document);

        if args.all_errors {
            let violations = ruleset.check(&document);
            if violations.is_empty() {
                passed += 1;
                tracing::info!(file = %path.display(), schema = ruleset.id, "valid");
            } else {
                failed += 1;
                tracing::error!(
                    file = %path.display(),
                    "invalid ({} violation(s)):\n{violations}",
                    violations.len()
                );
            }
        } else {
            match ruleset.validate(&document) {
                Ok(()) => {
                    passed += 1;
                    tracing::info!(file = %path.display(), schema = ruleset.id, "valid");
                }
                Err(e) => {
                    failed += 1;
                    tracing::error!(file = %path.display(), "invalid: {e}");
                }
            }
        }
    }

    tracing::info!("{} passed, {} failed", passed, failed);
    Ok(if failed == 0 { 0 } else { 1 })
}
