use serde_json::Value;
use treeval_rules::Constraints;

use crate::checker::{base_failure, TypeChecker};
use crate::error::{CheckError, Result};

/// Checks numeric values. The `integer` constraint pins the numeric subtype:
/// an exact integer representation when `true`, a fractional one when
/// `false`.
#[derive(Debug, Default)]
pub struct NumberChecker;

impl TypeChecker for NumberChecker {
    fn check(&self, constraints: &Constraints<'_>, value: &Value, label: &str) -> Result<()> {
        let Value::Number(number) = value else {
            return Err(base_failure(constraints, label, "must be a number"));
        };

        if let Some(want_integer) = constraints.integer_flag(label)? {
            let is_integer = number.is_i64() || number.is_u64();
            if want_integer && !is_integer {
                return Err(CheckError::violation(format!(
                    "{label} must be an integer"
                )));
            }
            if !want_integer && is_integer {
                return Err(CheckError::violation(format!(
                    "{label} must not be an integer"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(constraints: &Value, value: &Value) -> Result<()> {
        NumberChecker.check(
            &Constraints::new(constraints.as_object()),
            value,
            "Age",
        )
    }

    #[test]
    fn accepts_integers_and_floats_without_constraints() {
        assert!(check(&json!({}), &json!(42)).is_ok());
        assert!(check(&json!({}), &json!(0.5)).is_ok());
        assert!(check(&json!({}), &json!(-7)).is_ok());
    }

    #[test]
    fn rejects_non_numbers_including_numeric_strings() {
        for value in [json!("102"), json!(true), json!(null), json!([])] {
            let err = check(&json!({}), &value).unwrap_err();
            assert_eq!(err.to_string(), "Age must be a number");
        }
    }

    #[test]
    fn integer_true_rejects_fractions() {
        let constraints = json!({ "integer": true });
        assert!(check(&constraints, &json!(102)).is_ok());

        let err = check(&constraints, &json!(0.1)).unwrap_err();
        assert_eq!(err.to_string(), "Age must be an integer");
    }

    #[test]
    fn integer_false_rejects_exact_integers() {
        let constraints = json!({ "integer": false });
        assert!(check(&constraints, &json!(0.1)).is_ok());

        let err = check(&constraints, &json!(2)).unwrap_err();
        assert_eq!(err.to_string(), "Age must not be an integer");
    }
}
