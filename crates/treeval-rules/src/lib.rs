//! Declarative rule-tree model for tree-shaped data validation.
//!
//! A rule tree is a plain `serde_json` map from property name to rule node —
//! often decoded straight from configuration. Nodes are interpreted lazily
//! during traversal through the borrowed [`Rule`] view, so a defect anywhere
//! in the tree surfaces as a [`RuleError`] at validation time rather than a
//! recorded data failure.

pub mod constraints;
pub mod error;
pub mod kind;
pub mod rule;

pub use constraints::Constraints;
pub use error::{Result, RuleError};
pub use kind::TypeKind;
pub use rule::{Rule, VariantRules, WILDCARD};
