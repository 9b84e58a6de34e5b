use serde_json::{Map, Value};

use crate::error::{Result, RuleError};

/// Borrowed view over a rule's `constraints` object.
///
/// Accessors validate the shape of each constraint entry as they read it;
/// a malformed entry is a [`RuleError`], never a data failure. An absent
/// constraints object behaves like an empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constraints<'a> {
    entries: Option<&'a Map<String, Value>>,
}

impl<'a> Constraints<'a> {
    pub fn new(entries: Option<&'a Map<String, Value>>) -> Self {
        Self { entries }
    }

    /// Whether any constraint entries are present.
    pub fn is_empty(&self) -> bool {
        self.entries.map_or(true, Map::is_empty)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries.and_then(|entries| entries.get(key))
    }

    /// `length: [min, max]` — exactly two members, each null or a
    /// non-negative integer.
    pub fn length_bounds(&self, label: &str) -> Result<Option<(Option<u64>, Option<u64>)>> {
        let Some(raw) = self.get("length") else {
            return Ok(None);
        };
        let members = raw
            .as_array()
            .ok_or_else(|| RuleError::bad_constraint("length", label, "expected an array"))?;
        if members.len() != 2 {
            return Err(RuleError::bad_constraint(
                "length",
                label,
                "needs exactly two members",
            ));
        }
        let min = length_bound(&members[0], label)?;
        let max = length_bound(&members[1], label)?;
        Ok(Some((min, max)))
    }

    /// `enum: [...]` — a non-empty array of allowed values.
    pub fn allowed_values(&self, label: &str) -> Result<Option<&'a [Value]>> {
        let Some(raw) = self.get("enum") else {
            return Ok(None);
        };
        let values = raw
            .as_array()
            .ok_or_else(|| RuleError::bad_constraint("enum", label, "expected an array"))?;
        if values.is_empty() {
            return Err(RuleError::bad_constraint(
                "enum",
                label,
                "needs at least one member",
            ));
        }
        Ok(Some(values.as_slice()))
    }

    /// `regex: "<pattern>"` — a non-empty pattern string. Compilation is the
    /// checker's concern.
    pub fn pattern(&self, label: &str) -> Result<Option<&'a str>> {
        let Some(raw) = self.get("regex") else {
            return Ok(None);
        };
        match raw.as_str() {
            Some("") | None => Err(RuleError::bad_constraint(
                "regex",
                label,
                "expected a non-empty string",
            )),
            Some(pattern) => Ok(Some(pattern)),
        }
    }

    /// `integer: bool` — whether the number must (or must not) be an exact
    /// integer.
    pub fn integer_flag(&self, label: &str) -> Result<Option<bool>> {
        let Some(raw) = self.get("integer") else {
            return Ok(None);
        };
        raw.as_bool()
            .map(Some)
            .ok_or_else(|| RuleError::bad_constraint("integer", label, "expected a boolean"))
    }

    /// `callback: "<name>"` — the name of a predicate registered on the
    /// engine.
    pub fn callback(&self, label: &str) -> Result<Option<&'a str>> {
        let Some(raw) = self.get("callback") else {
            return Ok(None);
        };
        raw.as_str()
            .map(Some)
            .ok_or_else(|| RuleError::bad_constraint("callback", label, "expected a string"))
    }

    /// Caller-supplied override for the base type-check failure wording.
    /// Occurrences of `{label}` are substituted by the checker.
    pub fn message(&self) -> Option<&'a str> {
        self.get("message").and_then(Value::as_str)
    }
}

fn length_bound(value: &Value, label: &str) -> Result<Option<u64>> {
    if value.is_null() {
        return Ok(None);
    }
    value.as_u64().map(Some).ok_or_else(|| {
        RuleError::bad_constraint(
            "length",
            label,
            "bounds must be null or non-negative integers",
        )
    })
}
