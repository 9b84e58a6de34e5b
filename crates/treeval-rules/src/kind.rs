use std::fmt;

use crate::error::{Result, RuleError};

/// The closed set of rule types.
///
/// The whitelist exists so a rule tree originating from configuration data
/// can never cause resolution of an arbitrary, unintended checker by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl TypeKind {
    /// Every recognized type, in whitelist order.
    pub const ALL: [TypeKind; 5] = [
        TypeKind::String,
        TypeKind::Number,
        TypeKind::Boolean,
        TypeKind::Object,
        TypeKind::Array,
    ];

    /// Resolve a type name against the whitelist.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "string" => Ok(TypeKind::String),
            "number" => Ok(TypeKind::Number),
            "boolean" => Ok(TypeKind::Boolean),
            "object" => Ok(TypeKind::Object),
            "array" => Ok(TypeKind::Array),
            other => Err(RuleError::UnknownType(other.to_string())),
        }
    }

    /// The canonical name used in rule trees.
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Number => "number",
            TypeKind::Boolean => "boolean",
            TypeKind::Object => "object",
            TypeKind::Array => "array",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
