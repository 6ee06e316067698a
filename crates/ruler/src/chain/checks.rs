//! The validation catalog
//!
//! Every check here appends exactly one rule through
//! [`ChainContext::push_rule`](crate::chain::ChainContext::push_rule). Scoped
//! checks consult the chain's type tag when the rule runs and pass outright
//! when the tag is outside their scope.

use regex::Regex;

use crate::chain::RuleChain;
use crate::chain::scope::SharedScope;
use crate::foundation::{Message, RuleError, RuleMessage, RulerError};
use crate::guards;
use crate::value::{Numeric, TypeTag, Value};

// ============================================================================
// HELPERS
// ============================================================================

/// Appends a rule that fails when `fails` holds for the transformed value.
///
/// `fallback` builds the default text, only on failure and only when the
/// caller gave no message.
fn push_check<C, F>(
    chain: &C,
    code: &'static str,
    message: RuleMessage<C::Params>,
    fallback: impl Fn() -> String + Send + Sync + 'static,
    fails: F,
) where
    C: RuleChain + ?Sized,
    F: Fn(&Value, &SharedScope) -> bool + Send + Sync + 'static,
{
    let (message, params) = message.into_parts();
    let scope = chain.context().scope().clone();

    chain.context().push_rule(
        code,
        move |value: &Value| {
            if fails(value, &scope) {
                let text = message.as_ref().map_or_else(&fallback, Message::resolve);
                Err(RuleError::new(code, text))
            } else {
                Ok(())
            }
        },
        params,
    );
}

/// Size-or-magnitude test shared by `min` and `max`.
///
/// Strings compare their length, numbers their value, arrays their element
/// count. A value of the wrong shape under a matching tag fails.
fn measure_violates(
    value: &Value,
    scope: &SharedScope,
    threshold: &Numeric,
    violates: fn(&Numeric, &Numeric) -> bool,
) -> bool {
    match scope.type_tag() {
        TypeTag::String => value.as_str().is_none_or(|s| {
            violates(&Numeric::from(scope.length_mode().measure(s)), threshold)
        }),
        TypeTag::Number | TypeTag::BigInt => numeric_violates(value, threshold, violates),
        TypeTag::Array => value
            .as_array()
            .is_none_or(|items| violates(&Numeric::from(items.len()), threshold)),
        _ => false,
    }
}

/// Numeric test shared by `gt`, `gte`, `lt` and `lte`.
fn numeric_violates(
    value: &Value,
    threshold: &Numeric,
    violates: fn(&Numeric, &Numeric) -> bool,
) -> bool {
    value
        .as_numeric()
        .is_none_or(|n| violates(&n, threshold))
}

/// String-only test: wrong shape fails, other tags pass.
fn string_violates(value: &Value, scope: &SharedScope, accepts: impl Fn(&str) -> bool) -> bool {
    scope.type_tag() == TypeTag::String && !value.as_str().is_some_and(accepts)
}

fn in_numeric_scope(scope: &SharedScope) -> bool {
    scope.type_tag().is_numeric()
}

// ============================================================================
// CHECKS
// ============================================================================

/// Validation methods available on every chain.
///
/// Each takes a message (`()` selects a default English message) and
/// returns the chain. Scoped checks only constrain values while the chain
/// is tagged with a type they understand; declare the type first.
///
/// # Examples
///
/// ```rust,ignore
/// let rules = ruler()
///     .string("Must be string")
///     .trim()
///     .min(3, "Too short")
///     .email("Invalid email")
///     .done();
/// ```
pub trait Checks: RuleChain {
    // ==================== Type-agnostic ====================

    /// Fails on empty values: `undefined`, `null`, `""`, `[]` and `{}`.
    fn required(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "required",
            message.into(),
            || "Value is required".into(),
            |value, _| guards::is_empty(value),
        );
        self
    }

    /// Fails when `predicate` returns false.
    fn is<F>(&self, predicate: F, message: impl Into<RuleMessage<Self::Params>>) -> &Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        push_check(
            self,
            "is",
            message.into(),
            || "Value is invalid".into(),
            move |value, _| !predicate(value),
        );
        self
    }

    /// Fails when `predicate` returns true.
    fn not<F>(&self, predicate: F, message: impl Into<RuleMessage<Self::Params>>) -> &Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        push_check(
            self,
            "not",
            message.into(),
            || "Value is invalid".into(),
            move |value, _| predicate(value),
        );
        self
    }

    // ==================== Size / magnitude ====================

    /// Lower bound on string length, number value or array length.
    fn min(&self, v: impl Into<Numeric>, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let v = v.into();
        let fallback = {
            let v = v.clone();
            move || format!("Must be at least {v}")
        };
        push_check(self, "min", message.into(), fallback, move |value, scope| {
            measure_violates(value, scope, &v, |x, v| x < v)
        });
        self
    }

    /// Upper bound on string length, number value or array length.
    fn max(&self, v: impl Into<Numeric>, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let v = v.into();
        let fallback = {
            let v = v.clone();
            move || format!("Must be at most {v}")
        };
        push_check(self, "max", message.into(), fallback, move |value, scope| {
            measure_violates(value, scope, &v, |x, v| x > v)
        });
        self
    }

    /// Exact string or array length.
    fn length(&self, v: usize, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "length",
            message.into(),
            move || format!("Must have length {v}"),
            move |value, scope| match scope.type_tag() {
                TypeTag::String => value
                    .as_str()
                    .is_none_or(|s| scope.length_mode().measure(s) != v),
                TypeTag::Array => value.as_array().is_none_or(|items| items.len() != v),
                _ => false,
            },
        );
        self
    }

    // ==================== Strings ====================

    /// String scope: fails unless the value looks like an email address.
    fn email(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "email",
            message.into(),
            || "Must be a valid email address".into(),
            |value, scope| string_violates(value, scope, guards::is_email),
        );
        self
    }

    /// String scope: fails unless `pattern` matches somewhere in the value.
    fn regex(&self, pattern: Regex, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let fallback = {
            let source = pattern.as_str().to_string();
            move || format!("Must match /{source}/")
        };
        push_check(self, "regex", message.into(), fallback, move |value, scope| {
            string_violates(value, scope, |s| pattern.is_match(s))
        });
        self
    }

    /// Compiles `pattern` and appends a [`regex`](Checks::regex) check.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidPattern`] if `pattern` does not compile;
    /// nothing is appended in that case.
    fn regex_str(
        &self,
        pattern: &str,
        message: impl Into<RuleMessage<Self::Params>>,
    ) -> Result<&Self, RulerError> {
        let compiled = Regex::new(pattern).map_err(|source| RulerError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.regex(compiled, message))
    }

    /// String scope: fails unless the value starts with `prefix`.
    fn starts_with(
        &self,
        prefix: impl Into<String>,
        message: impl Into<RuleMessage<Self::Params>>,
    ) -> &Self {
        let prefix = prefix.into();
        let fallback = {
            let prefix = prefix.clone();
            move || format!("Must start with {prefix:?}")
        };
        push_check(self, "startsWith", message.into(), fallback, move |value, scope| {
            string_violates(value, scope, |s| s.starts_with(prefix.as_str()))
        });
        self
    }

    /// String scope: fails unless the value ends with `suffix`.
    fn ends_with(
        &self,
        suffix: impl Into<String>,
        message: impl Into<RuleMessage<Self::Params>>,
    ) -> &Self {
        let suffix = suffix.into();
        let fallback = {
            let suffix = suffix.clone();
            move || format!("Must end with {suffix:?}")
        };
        push_check(self, "endsWith", message.into(), fallback, move |value, scope| {
            string_violates(value, scope, |s| s.ends_with(suffix.as_str()))
        });
        self
    }

    /// String scope: fails if uppercasing would change the value.
    fn uppercase(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "uppercase",
            message.into(),
            || "Must be uppercase".into(),
            |value, scope| string_violates(value, scope, |s| s == s.to_uppercase()),
        );
        self
    }

    /// String scope: fails if lowercasing would change the value.
    fn lowercase(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "lowercase",
            message.into(),
            || "Must be lowercase".into(),
            |value, scope| string_violates(value, scope, |s| s == s.to_lowercase()),
        );
        self
    }

    /// Substring test in string scope, membership test in array scope.
    ///
    /// In string scope a non-string `needle` never matches. Array membership
    /// treats NaN as equal to NaN.
    fn includes(
        &self,
        needle: impl Into<Value>,
        message: impl Into<RuleMessage<Self::Params>>,
    ) -> &Self {
        let needle = needle.into();
        let fallback = {
            let needle = needle.clone();
            move || format!("Must include {needle}")
        };
        push_check(self, "includes", message.into(), fallback, move |value, scope| {
            match scope.type_tag() {
                TypeTag::String => !value
                    .as_str()
                    .zip(needle.as_str())
                    .is_some_and(|(s, n)| s.contains(n)),
                TypeTag::Array => !value.as_array().is_some_and(|items| {
                    items
                        .iter()
                        .any(|item| guards::same_value_zero(item, &needle))
                }),
                _ => false,
            }
        });
        self
    }

    // ==================== Numbers ====================

    /// Numeric scope: fails unless the value is strictly greater than `v`.
    fn gt(&self, v: impl Into<Numeric>, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let v = v.into();
        let fallback = {
            let v = v.clone();
            move || format!("Must be greater than {v}")
        };
        push_check(self, "gt", message.into(), fallback, move |value, scope| {
            in_numeric_scope(scope) && numeric_violates(value, &v, |x, v| x <= v)
        });
        self
    }

    /// Numeric scope: fails unless the value is at least `v`.
    fn gte(&self, v: impl Into<Numeric>, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let v = v.into();
        let fallback = {
            let v = v.clone();
            move || format!("Must be greater than or equal to {v}")
        };
        push_check(self, "gte", message.into(), fallback, move |value, scope| {
            in_numeric_scope(scope) && numeric_violates(value, &v, |x, v| x < v)
        });
        self
    }

    /// Numeric scope: fails unless the value is strictly less than `v`.
    fn lt(&self, v: impl Into<Numeric>, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let v = v.into();
        let fallback = {
            let v = v.clone();
            move || format!("Must be less than {v}")
        };
        push_check(self, "lt", message.into(), fallback, move |value, scope| {
            in_numeric_scope(scope) && numeric_violates(value, &v, |x, v| x >= v)
        });
        self
    }

    /// Numeric scope: fails unless the value is at most `v`.
    fn lte(&self, v: impl Into<Numeric>, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        let v = v.into();
        let fallback = {
            let v = v.clone();
            move || format!("Must be less than or equal to {v}")
        };
        push_check(self, "lte", message.into(), fallback, move |value, scope| {
            in_numeric_scope(scope) && numeric_violates(value, &v, |x, v| x > v)
        });
        self
    }

    /// Numeric scope: fails on zero and negative values.
    fn positive(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "positive",
            message.into(),
            || "Must be positive".into(),
            |value, scope| {
                in_numeric_scope(scope)
                    && value.as_numeric().is_none_or(|n| {
                        matches!(
                            n.signum_ordering(),
                            Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
                        )
                    })
            },
        );
        self
    }

    /// Numeric scope: fails on zero and positive values.
    fn negative(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "negative",
            message.into(),
            || "Must be negative".into(),
            |value, scope| {
                in_numeric_scope(scope)
                    && value.as_numeric().is_none_or(|n| {
                        matches!(
                            n.signum_ordering(),
                            Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
                        )
                    })
            },
        );
        self
    }

    // ==================== Arrays ====================

    /// Array scope: fails if any two elements are structurally equal. NaN
    /// counts as equal to NaN.
    fn uniq(&self, message: impl Into<RuleMessage<Self::Params>>) -> &Self {
        push_check(
            self,
            "uniq",
            message.into(),
            || "Must not contain duplicates".into(),
            |value, scope| {
                scope.type_tag() == TypeTag::Array
                    && value.as_array().is_some_and(guards::has_duplicates)
            },
        );
        self
    }

    /// Array scope: fails if `eq` holds for any two elements.
    fn uniq_by<F>(&self, eq: F, message: impl Into<RuleMessage<Self::Params>>) -> &Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        push_check(
            self,
            "uniqBy",
            message.into(),
            || "Must not contain duplicates".into(),
            move |value, scope| {
                scope.type_tag() == TypeTag::Array
                    && value
                        .as_array()
                        .is_some_and(|items| guards::has_duplicates_by(items, |a, b| eq(a, b)))
            },
        );
        self
    }
}

impl<T: RuleChain> Checks for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::DeclareType;
    use crate::factory::identity;
    use crate::foundation::Validator;
    use crate::{RuleFactory, Ruler};
    use num_bigint::BigInt;
    use rstest::rstest;

    fn ruler() -> Ruler<Validator> {
        RuleFactory::new(identity).ruler()
    }

    fn passes(rule: &Validator, value: impl Into<Value>) -> bool {
        rule.call(&value.into()).is_ok()
    }

    #[rstest]
    #[case(Value::Null, false)]
    #[case(Value::Undefined, false)]
    #[case(Value::from(""), false)]
    #[case(Value::array(Vec::<Value>::new()), false)]
    #[case(Value::from(0), true)]
    #[case(Value::from(false), true)]
    #[case(Value::from("x"), true)]
    fn test_required(#[case] input: Value, #[case] ok: bool) {
        let rules = ruler().required("Required").done();
        assert_eq!(rules[0].call(&input).is_ok(), ok);
    }

    #[test]
    fn test_default_message_names_threshold() {
        let rules = ruler().string(()).min(3, ()).done();
        let error = rules[1].call(&Value::from("ab")).unwrap_err();
        assert_eq!(error.message, "Must be at least 3");
        assert_eq!(error.code, "min");
    }

    #[rstest]
    #[case::gt(ruler().number(()).gt(10, ()).done(), Value::from(3), "gt", "Must be greater than 10")]
    #[case::length(ruler().string(()).length(2, ()).done(), Value::from("abc"), "length", "Must have length 2")]
    #[case::starts_with(ruler().string(()).starts_with("ab", ()).done(), Value::from("x"), "startsWith", "Must start with \"ab\"")]
    #[case::includes(ruler().array(()).includes(7, ()).done(), Value::array([1]), "includes", "Must include 7")]
    fn test_default_message_on_failure(
        #[case] rules: Vec<Validator>,
        #[case] input: Value,
        #[case] code: &str,
        #[case] message: &str,
    ) {
        let error = rules[1].call(&input).unwrap_err();
        assert_eq!(error.code, code);
        assert_eq!(error.message, message);
        assert!(rules[1].call(&input).is_err());
    }

    #[test]
    fn test_min_max_per_scope() {
        let strings = ruler().string(()).min(2, "x").max(3, "y").done();
        assert!(!passes(&strings[1], "a"));
        assert!(passes(&strings[1], "ab"));
        assert!(!passes(&strings[2], "abcd"));
        assert!(!passes(&strings[1], 5));

        let numbers = ruler().number(()).min(2, "x").max(3.5, "y").done();
        assert!(!passes(&numbers[1], 1));
        assert!(passes(&numbers[1], 2));
        assert!(passes(&numbers[2], 3.5));
        assert!(!passes(&numbers[2], 4));
        assert!(!passes(&numbers[1], "10"));

        let arrays = ruler().array(()).min(2, "x").done();
        assert!(!passes(&arrays[1], Value::array([1])));
        assert!(passes(&arrays[1], Value::array([1, 2])));
    }

    #[test]
    fn test_min_outside_scope_passes() {
        let rules = ruler().boolean(()).min(2, "x").done();
        assert!(passes(&rules[1], Value::array([1])));
        assert!(passes(&rules[1], "a"));
    }

    #[test]
    fn test_bigint_thresholds_mix_with_floats() {
        let rules = ruler()
            .bigint(())
            .gt(BigInt::from(10), "gt")
            .lte(20, "lte")
            .done();
        assert!(passes(&rules[1], Value::bigint(11)));
        assert!(!passes(&rules[1], Value::bigint(10)));
        assert!(passes(&rules[1], 10.5));
        assert!(passes(&rules[2], Value::bigint(20)));
        assert!(!passes(&rules[2], Value::bigint(21)));
    }

    #[test]
    fn test_non_numeric_fails_numeric_checks() {
        let rules = ruler().number(()).gte(0, "x").positive("p").done();
        assert!(!passes(&rules[1], "1"));
        assert!(!passes(&rules[2], Value::Null));
    }

    #[rstest]
    #[case(1, true, false)]
    #[case(0, false, false)]
    #[case(-1, false, true)]
    fn test_sign_checks(#[case] input: i32, #[case] positive: bool, #[case] negative: bool) {
        let rules = ruler().number(()).positive("p").negative("n").done();
        assert_eq!(passes(&rules[1], input), positive);
        assert_eq!(passes(&rules[2], input), negative);
    }

    #[test]
    fn test_nan_is_unordered() {
        let rules = ruler().number(()).gt(0, "gt").lt(0, "lt").positive("p").done();
        for rule in &rules {
            assert!(passes(rule, f64::NAN));
        }
    }

    #[test]
    fn test_length_uses_configured_mode() {
        let rules = ruler().string(()).length(2, "x").done();
        assert!(passes(&rules[1], "né"));

        let utf16 = RuleFactory::new(identity::<()>)
            .with_config(crate::RulerConfig::utf16())
            .ruler();
        let rules = utf16.string(()).length(2, "x").done();
        assert!(passes(&rules[1], "😀"));
    }

    #[test]
    fn test_string_predicates() {
        let rules = ruler()
            .string(())
            .starts_with("ab", "s")
            .ends_with("yz", "e")
            .uppercase("u")
            .lowercase("l")
            .done();
        assert!(passes(&rules[1], "abc"));
        assert!(!passes(&rules[1], "bc"));
        assert!(passes(&rules[2], "xyz"));
        assert!(!passes(&rules[2], "xy"));
        assert!(passes(&rules[3], "ABC1"));
        assert!(!passes(&rules[3], "aBC"));
        assert!(passes(&rules[4], "abc1"));
        assert!(!passes(&rules[4], "Abc"));
    }

    #[test]
    fn test_includes_by_scope() {
        let strings = ruler().string(()).includes("lo", "x").done();
        assert!(passes(&strings[1], "hello"));
        assert!(!passes(&strings[1], "help"));

        let arrays = ruler().array(()).includes(2, "x").done();
        assert!(passes(&arrays[1], Value::array([1, 2])));
        assert!(!passes(&arrays[1], Value::array([1, 3])));
    }

    #[test]
    fn test_regex_str_rejects_bad_pattern() {
        let r = ruler();
        let error = r.string(()).regex_str("(", "x").unwrap_err();
        assert!(matches!(error, RulerError::InvalidPattern { .. }));
        assert_eq!(r.rules_len(), 1);

        let rules = r.regex_str(r"^\d+$", "digits").unwrap().done();
        assert!(passes(&rules[1], "123"));
        assert!(!passes(&rules[1], "12a"));
    }

    #[test]
    fn test_uniq_ignores_non_arrays() {
        let rules = ruler().array(()).uniq("dup").done();
        assert!(passes(&rules[1], "aa"));
        assert!(!passes(&rules[1], Value::array([1, 1])));
    }

    #[test]
    fn test_is_and_not() {
        let rules = ruler()
            .is(|v| v.as_str() == Some("a"), "is")
            .not(|v| v.as_str() == Some("a"), "not")
            .done();
        assert!(passes(&rules[0], "a"));
        assert!(!passes(&rules[0], "b"));
        assert!(!passes(&rules[1], "a"));
        assert!(passes(&rules[1], "b"));
    }
}
