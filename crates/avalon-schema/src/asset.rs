//! # Asset Schema — `avalon-core:asset-2.0`
//!
//! The asset is the unit of metadata this crate validates: a named,
//! siloed, loosely-typed document produced by an external pipeline and
//! handed to the validator once per check.
//!
//! ## Shape
//!
//! | field  | requirement                                        |
//! |--------|----------------------------------------------------|
//! | schema | `"avalon-core:asset-2.0"` exactly                  |
//! | type   | `"asset"` exactly                                  |
//! | name   | string over `[a-zA-Z0-9_.]*` (empty permitted)     |
//! | silo   | string, unconstrained content                      |
//! | data   | object, contents unchecked recursively             |
//! | parent | optional, any value — a weak back reference whose  |
//! |        | target's existence is never checked here           |
//!
//! Additional top-level keys are accepted without inspection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::rules::{CharClass, FieldRule, Ruleset, ValueKind};

/// The versioned schema discriminant. Producers must emit it verbatim;
/// consumers check it verbatim.
pub const ASSET_SCHEMA_ID: &str = "avalon-core:asset-2.0";

/// The fixed document type discriminant.
pub const ASSET_TYPE: &str = "asset";

/// Characters permitted in an asset name: ASCII letters, digits,
/// underscore, and dot.
pub const NAME_CLASS: CharClass = CharClass::new(true, "_.");

/// Declarative ruleset for asset-2.0 documents.
///
/// Rule declaration order fixes the deterministic error-reporting order:
/// `schema, type, name, silo, data`.
pub static ASSET_2_0: Ruleset = Ruleset {
    id: ASSET_SCHEMA_ID,
    rules: &[
        FieldRule {
            field: "schema",
            required: true,
            kind: None,
            const_value: Some(ASSET_SCHEMA_ID),
            pattern: None,
        },
        FieldRule {
            field: "type",
            required: true,
            kind: None,
            const_value: Some(ASSET_TYPE),
            pattern: None,
        },
        FieldRule {
            field: "name",
            required: true,
            kind: Some(ValueKind::String),
            const_value: None,
            pattern: Some(NAME_CLASS),
        },
        FieldRule {
            field: "silo",
            required: true,
            kind: Some(ValueKind::String),
            const_value: None,
            pattern: None,
        },
        FieldRule {
            field: "data",
            required: true,
            kind: Some(ValueKind::Object),
            const_value: None,
            pattern: None,
        },
    ],
};

/// Validate a candidate asset document against [`ASSET_2_0`], stopping at
/// the first violation.
pub fn validate_asset(document: &Value) -> Result<(), ValidationError> {
    ASSET_2_0.validate(document)
}

/// A typed asset envelope, constructible only from a document that has
/// passed [`validate_asset`].
///
/// Unrecognized top-level keys survive a round trip through the flattened
/// `extra` map — the schema is additive, and consumers must not drop
/// fields they do not understand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// The schema discriminant, always [`ASSET_SCHEMA_ID`].
    pub schema: String,
    /// The document type, always [`ASSET_TYPE`].
    pub r#type: String,
    /// Asset name over [`NAME_CLASS`].
    pub name: String,
    /// Grouping label; semantics beyond grouping are external.
    pub silo: String,
    /// Free-form nested metadata.
    pub data: Map<String, Value>,
    /// Weak reference to another document's identity. Never validated
    /// for existence, or for anything else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Value>,
    /// Unrecognized top-level fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    /// Validate `document` and deserialize it into a typed envelope.
    pub fn from_value(document: &Value) -> Result<Self, ValidationError> {
        ASSET_2_0.validate(document)?;
        // Validation guarantees the shape serde expects; the fallback
        // mirrors the root object check and is unreachable in practice.
        serde_json::from_value(document.clone()).map_err(|_| ValidationError::TypeMismatch {
            field: None,
            expected: ValueKind::Object,
            actual: ValueKind::of(document),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    /// Strategy for arbitrary JSON values, for populating `data`.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-zA-Z0-9_ .-]{0,30}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6).prop_map(|m| {
                    Value::Object(m.into_iter().collect())
                }),
            ]
        })
    }

    fn document_with_name(name: &str) -> Value {
        json!({
            "schema": ASSET_SCHEMA_ID,
            "type": ASSET_TYPE,
            "name": name,
            "silo": "assets",
            "data": {}
        })
    }

    proptest! {
        /// Names drawn entirely from the allowed class always validate.
        #[test]
        fn allowed_names_accepted(name in "[a-zA-Z0-9_.]{0,40}") {
            prop_assert!(validate_asset(&document_with_name(&name)).is_ok());
        }

        /// Any name containing a character outside the class fails with
        /// PatternMismatch on the name field.
        #[test]
        fn disallowed_names_rejected(
            prefix in "[a-zA-Z0-9_.]{0,10}",
            bad in prop::char::any().prop_filter(
                "outside the allowed class",
                |c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'),
            ),
            suffix in "[a-zA-Z0-9_.]{0,10}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            let err = validate_asset(&document_with_name(&name)).unwrap_err();
            prop_assert_eq!(
                err,
                ValidationError::PatternMismatch { field: "name".to_string() }
            );
        }

        /// The contents of `data` never affect the verdict, as long as it
        /// is an object.
        #[test]
        fn data_payload_is_opaque(
            payload in prop::collection::btree_map("[a-z]{1,8}", json_value(), 0..6)
        ) {
            let mut document = document_with_name("thing");
            document["data"] = Value::Object(payload.into_iter().collect());
            prop_assert!(validate_asset(&document).is_ok());
        }

        /// Same document, same verdict — no hidden state.
        #[test]
        fn validation_deterministic(
            name in "[a-zA-Z0-9_. -]{0,20}",
            silo in json_value(),
        ) {
            let mut document = document_with_name(&name);
            document["silo"] = silo;
            let first = validate_asset(&document);
            let second = validate_asset(&document);
            prop_assert_eq!(first, second);
        }
    }
}
