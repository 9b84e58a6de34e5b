/// Defects in the rule tree itself.
///
/// These are programmer errors, distinct from data violations: they always
/// abort the whole validation call and are never written into the error
/// report.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A rule node has no `type` property.
    #[error("every rule must declare a \"type\" property")]
    MissingType,

    /// A named (non-wildcard) rule has no `required` property.
    #[error("named rule \"{0}\" must declare a \"required\" property")]
    MissingRequired(String),

    /// A wildcard rule shares its collection with other rules.
    #[error("a wildcard rule cannot share its collection with other rules")]
    WildcardNotAlone,

    /// The `type` property is not in the checker whitelist.
    #[error("\"{0}\" is not a valid rule type")]
    UnknownType(String),

    /// A rule node or one of its structural properties has the wrong shape.
    #[error("rule \"{key}\" is malformed: {reason}")]
    Malformed { key: String, reason: String },

    /// A constraint entry has the wrong shape.
    #[error("the \"{constraint}\" constraint of {label} is malformed: {reason}")]
    BadConstraint {
        constraint: &'static str,
        label: String,
        reason: String,
    },

    /// A `regex` constraint pattern failed to compile.
    #[error("the \"regex\" constraint of {label} does not compile: {reason}")]
    BadPattern { label: String, reason: String },

    /// A `callback` constraint names a predicate that was never registered.
    #[error("no callback named \"{0}\" is registered")]
    UnknownCallback(String),
}

impl RuleError {
    /// Shorthand for [`RuleError::Malformed`].
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`RuleError::BadConstraint`].
    pub fn bad_constraint(
        constraint: &'static str,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::BadConstraint {
            constraint,
            label: label.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;
