//! # Rule Model & Validation Engine
//!
//! A ruleset is declarative data — a list of [`FieldRule`]s — interpreted
//! by a generic engine. Supporting a new schema version means defining a
//! new [`Ruleset`] value, not new code paths.
//!
//! ## Determinism
//!
//! Error reporting order is fixed by rule declaration order: presence of
//! every required field is confirmed first, then values are checked, each
//! pass walking the rules in order. [`Ruleset::validate`] stops at the
//! first violation; [`Ruleset::check`] collects all of them in the same
//! order, so its first element always matches `validate`'s error.
//!
//! ## Purity
//!
//! The engine reads its input and returns a verdict. No I/O, no logging,
//! no mutation of the input, no shared state — concurrent callers need no
//! coordination.

use std::fmt;

use serde_json::Value;

use crate::error::{ValidationError, Violations};

/// The kind of a JSON value, used for type checks and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// An allowed-character class for pattern rules, expressed as data:
/// an ASCII-alphanumeric flag plus an explicit set of extra characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    /// Whether ASCII letters and digits are permitted.
    pub alphanumeric: bool,
    /// Additional permitted characters.
    pub extra: &'static str,
}

impl CharClass {
    pub const fn new(alphanumeric: bool, extra: &'static str) -> Self {
        Self {
            alphanumeric,
            extra,
        }
    }

    /// True if every character of `s` is drawn from this class.
    /// The empty string matches (zero repetitions are permitted).
    pub fn matches(&self, s: &str) -> bool {
        s.chars()
            .all(|c| (self.alphanumeric && c.is_ascii_alphanumeric()) || self.extra.contains(c))
    }
}

/// A single field constraint within a [`Ruleset`].
///
/// Checks on a present value run in a fixed order: constant, then kind,
/// then pattern. A constant rule subsumes the string check — a non-string
/// value of a constant field reports [`ValidationError::ConstMismatch`]
/// with the actual value rendered as JSON.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Top-level key this rule constrains.
    pub field: &'static str,
    /// Whether absence alone invalidates the document.
    pub required: bool,
    /// Required JSON kind, if any.
    pub kind: Option<ValueKind>,
    /// Required literal string value, if any.
    pub const_value: Option<&'static str>,
    /// Allowed-character class for string values, if any.
    pub pattern: Option<CharClass>,
}

impl FieldRule {
    /// Check a present value against this rule. Returns the first
    /// violation, or `None` if the value conforms.
    fn check_value(&self, value: &Value) -> Option<ValidationError> {
        if let Some(expected) = self.const_value {
            match value.as_str() {
                Some(actual) if actual == expected => {}
                _ => {
                    return Some(ValidationError::ConstMismatch {
                        field: self.field.to_string(),
                        expected: expected.to_string(),
                        actual: value.to_string(),
                    });
                }
            }
        }
        if let Some(expected) = self.kind {
            let actual = ValueKind::of(value);
            if actual != expected {
                return Some(ValidationError::TypeMismatch {
                    field: Some(self.field.to_string()),
                    expected,
                    actual,
                });
            }
        }
        if let Some(class) = self.pattern {
            if let Some(s) = value.as_str() {
                if !class.matches(s) {
                    return Some(ValidationError::PatternMismatch {
                        field: self.field.to_string(),
                    });
                }
            }
        }
        None
    }
}

/// A versioned validation ruleset: the schema identifier plus the rules
/// applied to documents carrying it. Rulesets are `'static` data; see
/// [`crate::asset::ASSET_2_0`] for the one shipped ruleset.
///
/// Rules constrain only the fields they name — additional top-level keys
/// are accepted without inspection (the schema is additive, not closed).
#[derive(Debug, Clone, Copy)]
pub struct Ruleset {
    /// The versioned schema discriminant, e.g. `"avalon-core:asset-2.0"`.
    pub id: &'static str,
    /// Field rules, in deterministic reporting order.
    pub rules: &'static [FieldRule],
}

impl Ruleset {
    /// Validate a document, stopping at the first violation.
    ///
    /// Returns `Ok(())` when the document conforms. The error identifies
    /// the offending field and the nature of the mismatch; see the module
    /// docs for the reporting order guarantee.
    pub fn validate(&self, document: &Value) -> Result<(), ValidationError> {
        let Some(object) = document.as_object() else {
            return Err(ValidationError::TypeMismatch {
                field: None,
                expected: ValueKind::Object,
                actual: ValueKind::of(document),
            });
        };

        for rule in self.rules {
            if rule.required && !object.contains_key(rule.field) {
                return Err(ValidationError::MissingField {
                    field: rule.field.to_string(),
                });
            }
        }

        for rule in self.rules {
            if let Some(value) = object.get(rule.field) {
                if let Some(violation) = rule.check_value(value) {
                    return Err(violation);
                }
            }
        }

        Ok(())
    }

    /// Collect every violation in the document, in the same deterministic
    /// order [`validate`](Self::validate) reports: the first element of a
    /// non-empty result always equals `validate`'s error.
    pub fn check(&self, document: &Value) -> Violations {
        let mut violations = Violations::default();

        let Some(object) = document.as_object() else {
            violations.push(ValidationError::TypeMismatch {
                field: None,
                expected: ValueKind::Object,
                actual: ValueKind::of(document),
            });
            return violations;
        };

        for rule in self.rules {
            if rule.required && !object.contains_key(rule.field) {
                violations.push(ValidationError::MissingField {
                    field: rule.field.to_string(),
                });
            }
        }

        for rule in self.rules {
            if let Some(value) = object.get(rule.field) {
                if let Some(violation) = rule.check_value(value) {
                    violations.push(violation);
                }
            }
        }

        violations
    }
}
