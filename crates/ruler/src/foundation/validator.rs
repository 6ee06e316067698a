//! The wrapped validator handed to generators

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{RuleResult, Validate};
use crate::value::Value;

/// Boxed validator body.
pub type ValidatorFn = dyn Fn(&Value) -> RuleResult + Send + Sync;

/// A pure check from a candidate value to an optional [`RuleError`](crate::foundation::RuleError).
///
/// Cheap to clone; clones share the same body. The validators a chain hands
/// to its generator already apply the chain's transformer before checking.
#[derive(Clone)]
pub struct Validator {
    code: Cow<'static, str>,
    inner: Arc<ValidatorFn>,
}

impl Validator {
    /// Wraps a check function under the given rule code.
    pub fn new<F>(code: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&Value) -> RuleResult + Send + Sync + 'static,
    {
        Self {
            code: code.into(),
            inner: Arc::new(f),
        }
    }

    /// Name of the chain method that produced this validator.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Runs the check.
    #[inline]
    pub fn call(&self, value: &Value) -> RuleResult {
        (self.inner)(value)
    }
}

impl Validate for Validator {
    type Input = Value;

    fn validate(&self, input: &Value) -> RuleResult {
        self.call(input)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleError;

    #[test]
    fn test_call_and_clone_share_body() {
        let v = Validator::new("positive", |value: &Value| match value {
            Value::Number(n) if *n > 0.0 => Ok(()),
            _ => Err(RuleError::new("positive", "nope")),
        });
        let copy = v.clone();
        assert!(v.call(&Value::from(1)).is_ok());
        assert!(copy.validate(&Value::from(-1)).is_err());
        assert_eq!(copy.code(), "positive");
    }
}
