//! # avalon-schema — Asset Document Conformance Checking
//!
//! Pure, stateless validation of Avalon pipeline documents against
//! declarative, versioned rulesets. The one ruleset shipped today is
//! [`asset::ASSET_2_0`] for documents carrying the discriminant
//! `"avalon-core:asset-2.0"`.
//!
//! ## Responsibilities
//!
//! - **Rule model:** a ruleset is data, not code — a list of
//!   [`FieldRule`]s (required/optional, expected kind, constant value,
//!   allowed-character class) interpreted by a generic engine. Future
//!   schema versions are new [`Ruleset`] values, registered in
//!   [`registry`].
//!
//! - **Validation:** [`Ruleset::validate`] stops at the first violation
//!   and reports it with a structured [`ValidationError`];
//!   [`Ruleset::check`] collects every violation in the same
//!   deterministic order.
//!
//! - **Typed envelope:** [`Asset`] deserializes a validated document
//!   into a typed struct, preserving unrecognized top-level fields.
//!
//! ## Design
//!
//! The validator is a pure function over its input: no I/O, no logging,
//! no mutation, no shared state. Concurrent callers need no
//! coordination, and validating the same document twice yields the same
//! verdict both times.

pub mod asset;
pub mod error;
pub mod registry;
pub mod rules;

// Re-export primary types for ergonomic imports.
pub use asset::{validate_asset, Asset, ASSET_2_0, ASSET_SCHEMA_ID, ASSET_TYPE, NAME_CLASS};
pub use error::{ValidationError, Violations};
pub use registry::{ruleset_for, ruleset_for_document, rulesets};
pub use rules::{CharClass, FieldRule, Ruleset, ValueKind};
