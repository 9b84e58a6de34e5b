use serde_json::{Map, Value};

use crate::constraints::Constraints;
use crate::error::{Result, RuleError};
use crate::kind::TypeKind;

/// Reserved rule-collection key applying one shared rule to every element of
/// a sequence.
pub const WILDCARD: &str = "*";

/// Default label substituted into failure messages when a rule has no `name`.
pub const DEFAULT_LABEL: &str = "This value";

/// Borrowed view over a single rule node.
///
/// Parsing checks everything the node itself can be checked for: the `type`
/// whitelist, the `required` flag on named rules, the shapes of `name`,
/// `constraints`, `properties`, `items` and `inheritance`, and that a
/// wildcard rule stays a leaf. Constraint *values* are validated later by the
/// checkers through [`Constraints`].
#[derive(Debug, Clone)]
pub struct Rule<'a> {
    kind: TypeKind,
    required: bool,
    label: Option<&'a str>,
    constraints: Constraints<'a>,
    properties: Option<&'a Map<String, Value>>,
    items: Option<&'a Map<String, Value>>,
    variants: Option<VariantRules<'a>>,
}

impl<'a> Rule<'a> {
    pub fn parse(key: &str, raw: &'a Value) -> Result<Self> {
        let node = raw
            .as_object()
            .ok_or_else(|| RuleError::malformed(key, "a rule must be an object"))?;

        let kind = match node.get("type") {
            None => return Err(RuleError::MissingType),
            Some(Value::String(name)) => TypeKind::parse(name)?,
            Some(_) => {
                return Err(RuleError::malformed(
                    key,
                    "the \"type\" property must be a string",
                ))
            }
        };

        let required = if key == WILDCARD {
            false
        } else {
            match node.get("required") {
                None => return Err(RuleError::MissingRequired(key.to_string())),
                Some(Value::Bool(required)) => *required,
                Some(_) => {
                    return Err(RuleError::malformed(
                        key,
                        "the \"required\" property must be a boolean",
                    ))
                }
            }
        };

        let label = match node.get("name") {
            None => None,
            Some(Value::String(name)) => Some(name.as_str()),
            Some(_) => {
                return Err(RuleError::malformed(
                    key,
                    "the \"name\" property must be a string",
                ))
            }
        };

        let constraints = match node.get("constraints") {
            None => Constraints::default(),
            Some(Value::Object(entries)) => Constraints::new(Some(entries)),
            Some(_) => {
                return Err(RuleError::malformed(
                    key,
                    "the \"constraints\" property must be an object",
                ))
            }
        };

        let properties = child_rules(node, "properties", key)?;
        let items = child_rules(node, "items", key)?;
        let variants = node
            .get("inheritance")
            .map(|raw| VariantRules::parse(key, raw))
            .transpose()?;

        if key == WILDCARD
            && (properties.is_some() || items.is_some() || variants.is_some())
        {
            return Err(RuleError::malformed(
                key,
                "a wildcard rule cannot carry nested rules",
            ));
        }

        Ok(Self {
            kind,
            required,
            label,
            constraints,
            properties,
            items,
            variants,
        })
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Human-readable label for failure messages.
    pub fn label(&self) -> &'a str {
        self.label.unwrap_or(DEFAULT_LABEL)
    }

    pub fn constraints(&self) -> &Constraints<'a> {
        &self.constraints
    }

    /// Child rules for `type = object` nodes.
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.properties
    }

    /// Child rules for `type = array` nodes.
    pub fn items(&self) -> Option<&'a Map<String, Value>> {
        self.items
    }

    /// Discriminator-driven variant property sets, if declared.
    pub fn variants(&self) -> Option<&VariantRules<'a>> {
        self.variants.as_ref()
    }
}

/// Discriminator-driven variant property sets ("inheritance").
///
/// After a node's base properties validate cleanly, the value of the
/// discriminator field selects one fragment of additional property rules to
/// merge in.
#[derive(Debug, Clone, Copy)]
pub struct VariantRules<'a> {
    discriminator: &'a str,
    properties: &'a Map<String, Value>,
}

impl<'a> VariantRules<'a> {
    fn parse(key: &str, raw: &'a Value) -> Result<Self> {
        let node = raw.as_object().ok_or_else(|| {
            RuleError::malformed(key, "the \"inheritance\" property must be an object")
        })?;
        let discriminator = node
            .get("discriminator")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RuleError::malformed(key, "inheritance needs a \"discriminator\" string")
            })?;
        let properties = node
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                RuleError::malformed(key, "inheritance needs a \"properties\" object")
            })?;
        for (variant, fragment) in properties {
            if !fragment.is_object() {
                return Err(RuleError::malformed(
                    key,
                    format!("inheritance variant \"{variant}\" must be an object"),
                ));
            }
        }
        Ok(Self {
            discriminator,
            properties,
        })
    }

    /// The sibling field whose value selects a variant.
    pub fn discriminator(&self) -> &'a str {
        self.discriminator
    }

    /// The variant fragment for a discriminator value, if one is declared.
    pub fn fragment(&self, tag: &str) -> Option<&'a Map<String, Value>> {
        self.properties.get(tag).and_then(Value::as_object)
    }

    /// Every declared discriminator value.
    pub fn allowed(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.properties.keys().map(String::as_str)
    }
}

fn child_rules<'a>(
    node: &'a Map<String, Value>,
    field: &'static str,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    match node.get(field) {
        None => Ok(None),
        Some(Value::Object(rules)) => Ok(Some(rules)),
        Some(_) => Err(RuleError::malformed(
            key,
            format!("the \"{field}\" property must be an object"),
        )),
    }
}
