//! Error types
//!
//! A failing rule produces exactly one shape of error: [`RuleError`], a
//! resolved human-readable message tagged with the code of the chain method
//! that produced the rule. Type mismatches, constraint violations and custom
//! predicate failures are not distinguished beyond that code.

use std::borrow::Cow;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A validation failure reported by a rule.
///
/// `Display` renders the message alone, so a rule's error compares and prints
/// exactly like the message it was given.
///
/// # Examples
///
/// ```rust,ignore
/// use ruler::foundation::RuleError;
///
/// let error = RuleError::new("min", "Too short");
/// assert_eq!(error.to_string(), "Too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RuleError {
    /// Name of the chain method that produced the failing rule.
    ///
    /// Examples: "string", "min", "email", "is"
    pub code: Cow<'static, str>,

    /// The resolved message.
    pub message: String,
}

impl RuleError {
    /// Creates a new rule error.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The resolved message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The producing chain method.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Result of running one rule.
pub type RuleResult = Result<(), RuleError>;

// ============================================================================
// BUILD ERRORS
// ============================================================================

/// Errors raised while building a chain, before any rule runs.
///
/// Only the fallible convenience constructors report these; the core chain
/// methods cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum RulerError {
    /// A pattern passed as source text did not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = RuleError::new("string", "Must be string");
        assert_eq!(error.to_string(), "Must be string");
        assert_eq!(error.code(), "string");
    }

    #[test]
    fn test_equality_covers_code_and_message() {
        assert_eq!(RuleError::new("min", "x"), RuleError::new("min", "x"));
        assert_ne!(RuleError::new("min", "x"), RuleError::new("max", "x"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = RulerError::InvalidPattern {
            pattern: "(".into(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern '('"));
    }
}
