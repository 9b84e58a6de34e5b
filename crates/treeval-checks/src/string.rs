use serde_json::Value;
use treeval_rules::{Constraints, RuleError};

use crate::checker::{base_failure, display_value, TypeChecker};
use crate::error::{CheckError, Result};

/// Checks textual values: base type plus the `length`, `enum` and `regex`
/// constraints.
#[derive(Debug, Default)]
pub struct StringChecker;

impl TypeChecker for StringChecker {
    fn check(&self, constraints: &Constraints<'_>, value: &Value, label: &str) -> Result<()> {
        let Some(text) = value.as_str() else {
            return Err(base_failure(constraints, label, "must be a string"));
        };

        if let Some((min, max)) = constraints.length_bounds(label)? {
            check_length(text, min, max, label)?;
        }
        if let Some(allowed) = constraints.allowed_values(label)? {
            check_membership(value, allowed, label)?;
        }
        if let Some(pattern) = constraints.pattern(label)? {
            check_pattern(text, pattern, label)?;
        }
        Ok(())
    }
}

// Lengths are counted in characters, not bytes.
fn check_length(text: &str, min: Option<u64>, max: Option<u64>, label: &str) -> Result<()> {
    let length = text.chars().count() as u64;
    if let Some(min) = min {
        if length < min {
            return Err(CheckError::violation(format!(
                "{label} must have a length of at least {min}"
            )));
        }
    }
    if let Some(max) = max {
        if length > max {
            return Err(CheckError::violation(format!(
                "{label} must have a length of at most {max}"
            )));
        }
    }
    Ok(())
}

// Strict membership: no coercion, `Value` equality.
fn check_membership(value: &Value, allowed: &[Value], label: &str) -> Result<()> {
    if allowed.iter().any(|candidate| candidate == value) {
        return Ok(());
    }
    let list = allowed
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(", ");
    Err(CheckError::violation(format!(
        "{} is not an allowed value for {label}. Allowed values are: {list}",
        display_value(value)
    )))
}

fn check_pattern(text: &str, pattern: &str, label: &str) -> Result<()> {
    let regex = regex::Regex::new(pattern).map_err(|err| RuleError::BadPattern {
        label: label.to_string(),
        reason: err.to_string(),
    })?;
    if regex.is_match(text) {
        return Ok(());
    }
    Err(CheckError::violation(format!(
        "{label} does not match the pattern: {pattern}"
    )))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(constraints: &Value, value: &Value) -> Result<()> {
        StringChecker.check(
            &Constraints::new(constraints.as_object()),
            value,
            "This value",
        )
    }

    #[test]
    fn accepts_a_plain_string_with_no_constraints() {
        assert!(check(&json!({}), &json!("hello")).is_ok());
    }

    #[test]
    fn rejects_non_strings() {
        for value in [json!(1), json!(true), json!(null), json!(["a"]), json!({})] {
            let err = check(&json!({}), &value).unwrap_err();
            assert_eq!(err.to_string(), "This value must be a string");
        }
    }

    #[test]
    fn message_override_replaces_base_wording() {
        let constraints = json!({ "message": "{label} should be text" });
        let err = check(&constraints, &json!(5)).unwrap_err();
        assert_eq!(err.to_string(), "This value should be text");
    }

    #[test]
    fn enforces_minimum_length() {
        let constraints = json!({ "length": [1, null] });
        let err = check(&constraints, &json!("")).unwrap_err();
        assert_eq!(err.to_string(), "This value must have a length of at least 1");
    }

    #[test]
    fn enforces_maximum_length() {
        let constraints = json!({ "length": [null, 3] });
        assert!(check(&constraints, &json!("abc")).is_ok());
        let err = check(&constraints, &json!("abcd")).unwrap_err();
        assert_eq!(err.to_string(), "This value must have a length of at most 3");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let constraints = json!({ "length": [null, 2] });
        assert!(check(&constraints, &json!("éé")).is_ok());
    }

    #[test]
    fn malformed_length_is_a_rule_error() {
        let constraints = json!({ "length": [1] });
        assert!(matches!(
            check(&constraints, &json!("x")),
            Err(CheckError::Rule(RuleError::BadConstraint { .. }))
        ));
    }

    #[test]
    fn enum_membership_is_strict() {
        let constraints = json!({ "enum": ["cat", "dog"] });
        assert!(check(&constraints, &json!("cat")).is_ok());

        let err = check(&constraints, &json!("mouse")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "mouse is not an allowed value for This value. Allowed values are: cat, dog"
        );
    }

    #[test]
    fn regex_match_passes_and_mismatch_fails() {
        let constraints = json!({ "regex": "^[a-z]+$" });
        assert!(check(&constraints, &json!("abc")).is_ok());

        let err = check(&constraints, &json!("abc1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "This value does not match the pattern: ^[a-z]+$"
        );
    }

    #[test]
    fn broken_regex_is_a_rule_error_not_a_violation() {
        let constraints = json!({ "regex": "([unclosed" });
        assert!(matches!(
            check(&constraints, &json!("abc")),
            Err(CheckError::Rule(RuleError::BadPattern { .. }))
        ));
    }
}
