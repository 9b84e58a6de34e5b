//! Recursive rule-tree validation engine.
//!
//! Walks a declarative rule tree and a data tree in lock-step, dispatches to
//! per-type checkers, and aggregates every violation by dotted path instead
//! of stopping at the first. Supports a wildcard mode applying one shared
//! rule to every element of a sequence, and a discriminator-driven variant
//! mode selecting additional property rules from a sibling field's value.
//!
//! Malformed rules abort the whole call with a [`RuleError`]; data
//! violations land in the [`ErrorReport`] and validation continues with
//! sibling fields.

pub mod report;
pub mod validator;

pub use report::ErrorReport;
pub use validator::{Predicate, Validator};

// The error types callers match on.
pub use treeval_checks::CheckError;
pub use treeval_rules::{RuleError, TypeKind, WILDCARD};
