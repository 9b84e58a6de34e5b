use serde_json::Value;
use treeval_rules::Constraints;

use crate::checker::{base_failure, TypeChecker};
use crate::error::Result;

/// Checks strictly boolean values. No truthy coercion.
#[derive(Debug, Default)]
pub struct BooleanChecker;

impl TypeChecker for BooleanChecker {
    fn check(&self, constraints: &Constraints<'_>, value: &Value, label: &str) -> Result<()> {
        if value.is_boolean() {
            Ok(())
        } else {
            Err(base_failure(constraints, label, "must be a boolean"))
        }
    }
}
