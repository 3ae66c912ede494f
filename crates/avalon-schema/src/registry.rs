//! # Schema Registry
//!
//! One ruleset per supported schema version, keyed by the versioned
//! discriminant a document carries in its own `schema` field. Adding a
//! future version (`avalon-core:asset-3.0`, ...) means registering a new
//! [`Ruleset`] here — the engine does not change.

use serde_json::Value;

use crate::asset::ASSET_2_0;
use crate::error::ValidationError;
use crate::rules::Ruleset;

static RULESETS: [&Ruleset; 1] = [&ASSET_2_0];

/// All registered rulesets, one per supported schema version.
pub fn rulesets() -> &'static [&'static Ruleset] {
    &RULESETS
}

/// Look up the ruleset for a schema identifier.
pub fn ruleset_for(id: &str) -> Option<&'static Ruleset> {
    rulesets().iter().copied().find(|ruleset| ruleset.id == id)
}

/// Select the ruleset a document should be checked against, based on the
/// document's own `schema` field.
///
/// Falls back to [`ASSET_2_0`] when the discriminant is absent, not a
/// string, or unknown — that ruleset's own checks then report the
/// missing field or the constant mismatch, so dispatch failures surface
/// through the ordinary error taxonomy.
pub fn ruleset_for_document(document: &Value) -> &'static Ruleset {
    document
        .get("schema")
        .and_then(Value::as_str)
        .and_then(ruleset_for)
        .unwrap_or(&ASSET_2_0)
}

/// Validate a document against the ruleset named by its own `schema`
/// field, stopping at the first violation.
pub fn validate(document: &Value) -> Result<(), ValidationError> {
    ruleset_for_document(document).validate(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ASSET_SCHEMA_ID;
    use serde_json::json;

    #[test]
    fn asset_ruleset_registered() {
        assert!(rulesets().iter().any(|r| r.id == ASSET_SCHEMA_ID));
        assert_eq!(ruleset_for(ASSET_SCHEMA_ID).unwrap().id, ASSET_SCHEMA_ID);
    }

    #[test]
    fn unknown_id_not_found() {
        assert!(ruleset_for("avalon-core:asset-9.9").is_none());
    }

    #[test]
    fn dispatch_selects_by_discriminant() {
        let document = json!({ "schema": ASSET_SCHEMA_ID });
        assert_eq!(ruleset_for_document(&document).id, ASSET_SCHEMA_ID);
    }

    #[test]
    fn dispatch_falls_back_for_missing_discriminant() {
        let document = json!({ "type": "asset" });
        let err = validate(&document).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "schema".to_string()
            }
        );
    }

    #[test]
    fn dispatch_falls_back_for_unknown_discriminant() {
        let document = json!({
            "schema": "avalon-core:asset-1.0",
            "type": "asset",
            "name": "Bruce",
            "silo": "assets",
            "data": {}
        });
        let err = validate(&document).unwrap_err();
        assert!(
            matches!(err, ValidationError::ConstMismatch { ref field, .. } if field == "schema"),
            "expected schema ConstMismatch, got: {err}"
        );
    }

    #[test]
    fn dispatch_validates_valid_document() {
        let document = json!({
            "schema": ASSET_SCHEMA_ID,
            "type": "asset",
            "name": "Bruce",
            "silo": "assets",
            "data": {}
        });
        validate(&document).unwrap();
    }
}
