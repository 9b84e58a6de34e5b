use serde_json::Value;
use treeval_rules::Constraints;

use crate::checker::{base_failure, TypeChecker};
use crate::error::Result;

/// Checks sequence values.
///
/// `Value::Array` is sequential by construction, so the tagged data model
/// already rules out sparse or keyed collections presented as arrays.
#[derive(Debug, Default)]
pub struct ArrayChecker;

impl TypeChecker for ArrayChecker {
    fn check(&self, constraints: &Constraints<'_>, value: &Value, label: &str) -> Result<()> {
        if value.is_array() {
            Ok(())
        } else {
            Err(base_failure(constraints, label, "must be a sequential array"))
        }
    }
}
