use treeval_rules::{RuleError, TypeKind};

use crate::array::ArrayChecker;
use crate::boolean::BooleanChecker;
use crate::checker::TypeChecker;
use crate::number::NumberChecker;
use crate::object::ObjectChecker;
use crate::string::StringChecker;

/// Fixed mapping from the closed type whitelist to checker instances.
///
/// All five checkers are built once at construction and live for the
/// registry's lifetime. They carry no per-call state, so one registry can
/// serve any number of sequential validation calls.
#[derive(Debug, Default)]
pub struct CheckerRegistry {
    string: StringChecker,
    number: NumberChecker,
    boolean: BooleanChecker,
    object: ObjectChecker,
    array: ArrayChecker,
}

impl CheckerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a type name against the whitelist.
    ///
    /// Rule trees may originate from configuration data; rejecting unknown
    /// names here is what keeps them from reaching an arbitrary checker.
    pub fn get(&self, name: &str) -> Result<&dyn TypeChecker, RuleError> {
        Ok(self.checker(TypeKind::parse(name)?))
    }

    /// Look up the checker for an already-whitelisted kind.
    pub fn checker(&self, kind: TypeKind) -> &dyn TypeChecker {
        match kind {
            TypeKind::String => &self.string,
            TypeKind::Number => &self.number,
            TypeKind::Boolean => &self.boolean,
            TypeKind::Object => &self.object,
            TypeKind::Array => &self.array,
        }
    }
}
