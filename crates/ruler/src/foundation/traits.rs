//! Core traits for running rules
//!
//! The chain itself never runs anything; these traits are the seam a
//! downstream runner uses to evaluate whatever the generator produced.

use crate::foundation::RuleResult;

// ============================================================================
// CORE VALIDATE TRAIT
// ============================================================================

/// Anything that can check an input and report a [`RuleError`](crate::foundation::RuleError).
///
/// Implemented by [`Validator`](crate::foundation::Validator) and by the
/// stock [`RuleDescriptor`](crate::factory::RuleDescriptor), so both
/// generator outputs can be run the same way.
///
/// # Examples
///
/// ```rust,ignore
/// use ruler::prelude::*;
///
/// let rules = rule_factory(identity).ruler().number("Must be number").done();
/// assert!(rules[0].validate(&Value::from(1)).is_ok());
/// assert!(!rules[0].is_valid(&Value::from("1")));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the rule passes
    /// * `Err(RuleError)` carrying the resolved message otherwise
    fn validate(&self, input: &Self::Input) -> RuleResult;

    /// Convenience wrapper that discards the error.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

/// Runs every rule in order and returns the first failure, if any.
///
/// # Examples
///
/// ```rust,ignore
/// let rules = ruler.string("Must be string").min(3, "Too short").done();
/// assert!(first_failure(&rules, &Value::from("ab")).is_some());
/// ```
pub fn first_failure<V>(rules: &[V], input: &V::Input) -> Option<crate::foundation::RuleError>
where
    V: Validate,
{
    rules.iter().find_map(|rule| rule.validate(input).err())
}
