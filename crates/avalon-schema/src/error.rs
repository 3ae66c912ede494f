//! # Validation Errors
//!
//! Structured error taxonomy for document validation. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Every detected nonconformance is reported synchronously as a value —
//! never a silent pass, never a partial result. The library recovers
//! nothing internally: the caller decides whether a rejection is
//! user-visible or logged and discarded.

use std::fmt;

use thiserror::Error;

use crate::rules::ValueKind;

/// A single schema violation, identifying the offending field and the
/// nature of the mismatch.
///
/// `Clone` and `PartialEq` are derived so callers (and tests) can match
/// on exact error identity rather than display strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value exists but is not of the expected kind. `field` is `None`
    /// when the document root itself is not an object.
    #[error(
        "expected {expected} at {at}, found {actual}",
        at = .field.as_deref().map(|f| format!("field '{f}'")).unwrap_or_else(|| "document root".to_string())
    )]
    TypeMismatch {
        /// The offending field, or `None` for the document root.
        field: Option<String>,
        /// The kind the ruleset requires.
        expected: ValueKind,
        /// The kind actually found.
        actual: ValueKind,
    },

    /// A required field is absent from the document.
    #[error("missing required field '{field}'")]
    MissingField {
        /// The absent field.
        field: String,
    },

    /// A fixed-value field holds the wrong literal.
    #[error("field '{field}' must equal \"{expected}\", found {actual}")]
    ConstMismatch {
        /// The offending field.
        field: String,
        /// The required literal.
        expected: String,
        /// The actual value, rendered as JSON.
        actual: String,
    },

    /// A string value contains characters outside its allowed class.
    #[error("field '{field}' contains characters outside its allowed class")]
    PatternMismatch {
        /// The offending field.
        field: String,
    },
}

impl ValidationError {
    /// The offending field name, or `None` when the violation concerns
    /// the document root.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { field, .. } => field.as_deref(),
            Self::MissingField { field }
            | Self::ConstMismatch { field, .. }
            | Self::PatternMismatch { field } => Some(field),
        }
    }
}

/// An ordered collection of schema violations.
///
/// Produced by [`Ruleset::check`](crate::rules::Ruleset::check). The order
/// is deterministic: presence violations first, then value violations,
/// each in ruleset declaration order — so the first element always equals
/// the error [`Ruleset::validate`](crate::rules::Ruleset::validate) would
/// have returned for the same document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<ValidationError>,
}

impl Violations {
    pub(crate) fn push(&mut self, violation: ValidationError) {
        self.violations.push(violation);
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if the document had no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The first violation in reporting order, if any.
    pub fn first(&self) -> Option<&ValidationError> {
        self.violations.first()
    }

    /// Returns a slice of all violations.
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}
