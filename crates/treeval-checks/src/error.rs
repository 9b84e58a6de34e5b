use treeval_rules::RuleError;

/// A failed check: either the data violates the rule, or the rule itself is
/// defective.
///
/// The two kinds are never conflated. Violations are recorded in the error
/// report and validation continues with sibling fields; rule errors abort
/// the whole call.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The rule tree is defective.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The data violates the rule.
    #[error("{0}")]
    Violation(String),
}

impl CheckError {
    /// Shorthand for a data violation.
    pub fn violation(message: impl Into<String>) -> Self {
        Self::Violation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
