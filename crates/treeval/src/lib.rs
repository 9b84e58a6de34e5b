//! Declarative validation for tree-shaped data.
//!
//! treeval validates loosely-typed, tree-shaped data (maps, sequences,
//! scalars) against a declarative rule tree, producing either a pass verdict
//! or a complete, path-qualified report of every violation found — not just
//! the first. Use it to validate decoded request or config payloads before
//! application logic trusts them.
//!
//! # Crate Structure
//!
//! - [`rules`] — Rule-tree model: type whitelist, rule node views, constraints
//! - [`checks`] — Per-type leaf checkers and the checker registry
//! - [`engine`] — The recursive validation engine and its error report

/// Re-export rule-tree model types.
pub mod rules {
    pub use treeval_rules::*;
}

/// Re-export checker types.
pub mod checks {
    pub use treeval_checks::*;
}

/// Re-export engine types.
pub mod engine {
    pub use treeval_engine::*;
}

pub use treeval_engine::{ErrorReport, RuleError, Validator};
