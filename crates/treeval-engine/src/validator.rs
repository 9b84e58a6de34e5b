use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use treeval_checks::{CheckError, CheckerRegistry};
use treeval_rules::{Rule, RuleError, TypeKind, VariantRules, WILDCARD};

use crate::report::ErrorReport;

/// A registered callback constraint: inspects a value (with its label) and
/// signals a data violation by returning the failure message.
pub type Predicate = Box<dyn Fn(&Value, &str) -> Result<(), String> + Send + Sync>;

/// The validation engine.
///
/// One `is_valid` call walks the rule tree and data tree in lock-step,
/// recording every data violation in a fresh [`ErrorReport`] threaded
/// explicitly through the recursion. The engine is re-entrant: nothing but
/// the most recent report persists between calls, and the checker registry
/// holds only stateless instances.
pub struct Validator {
    registry: CheckerRegistry,
    callbacks: HashMap<String, Predicate>,
    report: ErrorReport,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            registry: CheckerRegistry::new(),
            callbacks: HashMap::new(),
            report: ErrorReport::new(),
        }
    }

    /// Register a named predicate for `callback` constraints to refer to.
    pub fn register_callback(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&Value, &str) -> Result<(), String> + Send + Sync + 'static,
    ) {
        self.callbacks.insert(name.into(), Box::new(predicate));
    }

    /// Validate a data tree against a rule tree.
    ///
    /// Returns `Ok(true)` when the data satisfies every rule, `Ok(false)`
    /// when violations were recorded (readable via [`Validator::errors`]),
    /// and `Err` when the rule tree itself is defective — malformed rules
    /// never produce a verdict.
    pub fn is_valid(
        &mut self,
        rules: &Map<String, Value>,
        data: &Value,
    ) -> Result<bool, RuleError> {
        debug!(rules = rules.len(), "validating data tree");
        let mut report = ErrorReport::new();
        let outcome = self.validate_set(rules, data, "", &mut report);
        self.report = report;
        outcome?;
        Ok(!self.has_errors())
    }

    /// The report accumulated by the most recent [`Validator::is_valid`]
    /// call.
    pub fn errors(&self) -> &ErrorReport {
        &self.report
    }

    pub fn has_errors(&self) -> bool {
        !self.report.is_empty()
    }

    /// Contribute an additional violation using the same path convention.
    /// Meant for external collaborators layering their own checks on top of
    /// a validation pass.
    pub fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.report.add(path, message);
    }

    /// Validate every entry of one rule collection against `data`. Data
    /// violations are recorded under the entry's full path and the loop
    /// continues; rule defects abort immediately.
    fn validate_set(
        &self,
        rules: &Map<String, Value>,
        data: &Value,
        prefix: &str,
        report: &mut ErrorReport,
    ) -> Result<(), RuleError> {
        if rules.contains_key(WILDCARD) && rules.len() > 1 {
            return Err(RuleError::WildcardNotAlone);
        }

        for (key, raw) in rules {
            let rule = Rule::parse(key, raw)?;
            let path = join_path(prefix, key);
            trace!(path = %path, kind = %rule.kind(), "checking");
            match self.validate_entry(&rule, key, data, &path, report) {
                Ok(()) => {}
                Err(CheckError::Violation(message)) => report.add(&path, message),
                Err(CheckError::Rule(err)) => return Err(err),
            }
        }
        Ok(())
    }

    fn validate_entry(
        &self,
        rule: &Rule<'_>,
        key: &str,
        data: &Value,
        path: &str,
        report: &mut ErrorReport,
    ) -> Result<(), CheckError> {
        if key == WILDCARD {
            return self.validate_elements(rule, data);
        }
        match property(data, key) {
            None if rule.required() => Err(CheckError::violation(format!(
                "{} is required",
                rule.label()
            ))),
            // Absent and optional: vacuously valid.
            None => Ok(()),
            Some(value) => self.validate_item(rule, value, path, report),
        }
    }

    /// Check a single present value, then recurse into nested rules.
    fn validate_item(
        &self,
        rule: &Rule<'_>,
        value: &Value,
        path: &str,
        report: &mut ErrorReport,
    ) -> Result<(), CheckError> {
        self.registry
            .checker(rule.kind())
            .check(rule.constraints(), value, rule.label())?;
        self.apply_callback(rule, value)?;

        match rule.kind() {
            TypeKind::Object => {
                let clean_base = match rule.properties() {
                    Some(properties) => {
                        let before = report.message_count();
                        self.validate_set(properties, value, path, report)?;
                        report.message_count() == before
                    }
                    None => true,
                };
                if let Some(variants) = rule.variants() {
                    if clean_base {
                        self.validate_variants(rule, variants, value, path, report)?;
                    }
                }
            }
            TypeKind::Array => {
                if let Some(items) = rule.items() {
                    self.validate_set(items, value, path, report)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Wildcard mode: apply one shared rule to every element in order.
    ///
    /// Fail-fast by design, scoped to this one sequence: the first failing
    /// element aborts the loop and later elements are not checked. An empty
    /// sequence is vacuously valid.
    fn validate_elements(&self, rule: &Rule<'_>, data: &Value) -> Result<(), CheckError> {
        let Some(elements) = data.as_array() else {
            return Err(CheckError::violation(format!(
                "{} must be a sequential array",
                rule.label()
            )));
        };

        let checker = self.registry.checker(rule.kind());
        for (index, element) in elements.iter().enumerate() {
            let outcome = checker
                .check(rule.constraints(), element, rule.label())
                .and_then(|()| self.apply_callback(rule, element));
            match outcome {
                Ok(()) => {}
                Err(CheckError::Violation(message)) => {
                    return Err(CheckError::Violation(format!("Item[{index}]: {message}")));
                }
                Err(rule_err) => return Err(rule_err),
            }
        }
        Ok(())
    }

    /// Variant mode: once the base properties validated cleanly, the
    /// discriminator field's value selects an additional property fragment,
    /// validated merged with the base (fragment wins on key collision).
    fn validate_variants(
        &self,
        rule: &Rule<'_>,
        variants: &VariantRules<'_>,
        value: &Value,
        path: &str,
        report: &mut ErrorReport,
    ) -> Result<(), CheckError> {
        let Some(tag) = property(value, variants.discriminator()) else {
            // The base pass already reported the discriminator if required.
            return Ok(());
        };

        let fragment = tag.as_str().and_then(|tag| variants.fragment(tag));
        let Some(fragment) = fragment else {
            let allowed = variants.allowed().collect::<Vec<_>>().join(", ");
            return Err(CheckError::violation(format!(
                "{} is not an allowed discriminator value for {}. Allowed values are: {allowed}",
                display(tag),
                rule.label()
            )));
        };

        let mut merged = rule.properties().cloned().unwrap_or_default();
        for (name, child) in fragment {
            merged.insert(name.clone(), child.clone());
        }
        self.validate_set(&merged, value, path, report)?;
        Ok(())
    }

    fn apply_callback(&self, rule: &Rule<'_>, value: &Value) -> Result<(), CheckError> {
        let Some(name) = rule.constraints().callback(rule.label())? else {
            return Ok(());
        };
        let predicate = self
            .callbacks
            .get(name)
            .ok_or_else(|| RuleError::UnknownCallback(name.to_string()))?;
        predicate(value, rule.label()).map_err(CheckError::Violation)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a named property. Objects resolve by key; sequences resolve
/// numeric segments as zero-based indices (heterogeneous `items` rules).
/// Scalars have no properties.
fn property<'v>(data: &'v Value, key: &str) -> Option<&'v Value> {
    match data {
        Value::Object(map) => map.get(key),
        Value::Array(elements) => key.parse::<usize>().ok().and_then(|i| elements.get(i)),
        _ => None,
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
