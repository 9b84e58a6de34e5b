use serde_json::Value;
use treeval_rules::Constraints;

use crate::error::{CheckError, Result};

/// A per-type leaf checker.
///
/// Checkers are stateless. They validate one value against type-specific
/// constraints and raise a failure on violation; an empty constraint set
/// performs only the base type check.
pub trait TypeChecker: Send + Sync {
    fn check(&self, constraints: &Constraints<'_>, value: &Value, label: &str) -> Result<()>;
}

/// Render a data value for inclusion in a failure message. Strings appear
/// bare, everything else in its JSON form.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Base type-check failure, honoring a caller-supplied `message` override.
/// Occurrences of `{label}` in the override are substituted.
pub(crate) fn base_failure(
    constraints: &Constraints<'_>,
    label: &str,
    default: &str,
) -> CheckError {
    match constraints.message() {
        Some(template) => CheckError::Violation(template.replace("{label}", label)),
        None => CheckError::Violation(format!("{label} {default}")),
    }
}
