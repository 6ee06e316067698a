//! Type guards and collection predicates consumed by the rule catalog
//!
//! Every function here is pure and total over [`Value`].

use std::sync::LazyLock;

use crate::value::Value;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^[a-z0-9_'+\-\\.]*[a-z0-9_+-]@([a-z0-9][a-z0-9\\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

#[inline]
#[must_use]
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

#[inline]
#[must_use]
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

#[inline]
#[must_use]
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

#[inline]
#[must_use]
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

#[inline]
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

#[inline]
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

#[inline]
#[must_use]
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// `undefined`, `null`, `""`, `[]` and `{}` are empty. `0` and `false` are not.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Structural equality under which NaN equals NaN, at any depth.
///
/// Membership and duplicate checks use this; `==` on [`Value`] keeps NaN
/// unequal to itself.
#[must_use]
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value_zero(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| same_value_zero(x, y)))
        }
        _ => a == b,
    }
}

/// Returns true if any two elements are equal under [`same_value_zero`].
#[must_use]
pub fn has_duplicates(values: &[Value]) -> bool {
    has_duplicates_by(values, same_value_zero)
}

/// Returns true if `eq` holds for any pair of distinct positions.
///
/// Compares every pair, so the cost is quadratic in `values.len()`. Values
/// are neither hashable nor totally ordered, which rules out a set.
pub fn has_duplicates_by<F>(values: &[Value], mut eq: F) -> bool
where
    F: FnMut(&Value, &Value) -> bool,
{
    values
        .iter()
        .enumerate()
        .any(|(i, a)| values[i + 1..].iter().any(|b| eq(a, b)))
}

/// Loose address check: no leading dot, no `..`, a local part, `@`, one or
/// more domain labels and an alphabetic TLD of two or more letters.
#[must_use]
pub fn is_email(input: &str) -> bool {
    !input.starts_with('.') && !input.contains("..") && EMAIL_REGEX.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, true)]
    #[case(Value::Null, true)]
    #[case(Value::from(""), true)]
    #[case(Value::array(Vec::<Value>::new()), true)]
    #[case(Value::object(Vec::<(String, Value)>::new()), true)]
    #[case(Value::from(0), false)]
    #[case(Value::from(false), false)]
    #[case(Value::from(" "), false)]
    #[case(Value::array([0]), false)]
    fn test_is_empty(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_empty(&value), expected);
    }

    #[test]
    fn test_has_duplicates() {
        assert!(has_duplicates(&[Value::from(1), Value::from(2), Value::from(2)]));
        assert!(!has_duplicates(&[Value::from(1), Value::from(2), Value::from(3)]));
        assert!(has_duplicates(&[
            Value::object([("id", 1)]),
            Value::object([("id", 1)]),
        ]));
        assert!(!has_duplicates(&[]));
    }

    #[test]
    fn test_nan_counts_as_duplicate() {
        assert!(has_duplicates(&[Value::from(f64::NAN), Value::from(f64::NAN)]));
        assert!(has_duplicates(&[
            Value::array([f64::NAN]),
            Value::array([f64::NAN]),
        ]));
        assert!(!has_duplicates(&[Value::from(f64::NAN), Value::from(0)]));
    }

    #[rstest]
    #[case(Value::from(f64::NAN), Value::from(f64::NAN), true)]
    #[case(Value::from(0.0), Value::from(-0.0), true)]
    #[case(Value::object([("a", f64::NAN)]), Value::object([("a", f64::NAN)]), true)]
    #[case(Value::from(1), Value::bigint(1), false)]
    #[case(Value::from(f64::NAN), Value::Null, false)]
    fn test_same_value_zero(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
        assert_eq!(same_value_zero(&a, &b), expected);
    }

    #[test]
    fn test_has_duplicates_by() {
        let items = [
            Value::object([("id", 1), ("n", 1)]),
            Value::object([("id", 2), ("n", 2)]),
            Value::object([("id", 1), ("n", 3)]),
        ];
        assert!(has_duplicates_by(&items, |a, b| a.get("id") == b.get("id")));
        assert!(!has_duplicates_by(&items, |a, b| a.get("n") == b.get("n")));
    }

    #[rstest]
    #[case("test@example.com", true)]
    #[case("First.Last+tag@sub.example.CO", true)]
    #[case("o'neil@example.org", true)]
    #[case("not-an-email", false)]
    #[case(".lead@example.com", false)]
    #[case("double..dot@example.com", false)]
    #[case("trailing.@example.com", false)]
    #[case("user@example.c", false)]
    #[case("user@-example.com", false)]
    #[case("@example.com", false)]
    fn test_is_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_email(input), expected);
    }
}
