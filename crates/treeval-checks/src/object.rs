use serde_json::Value;
use treeval_rules::Constraints;

use crate::checker::{base_failure, TypeChecker};
use crate::error::Result;

/// Checks associative values.
///
/// `Value::Object` is the single source of named properties: keyed mappings
/// and opaque named-field objects both decode to it.
#[derive(Debug, Default)]
pub struct ObjectChecker;

impl TypeChecker for ObjectChecker {
    fn check(&self, constraints: &Constraints<'_>, value: &Value, label: &str) -> Result<()> {
        if value.is_object() {
            Ok(())
        } else {
            Err(base_failure(constraints, label, "must be an object"))
        }
    }
}
