//! Property-based tests for ruler.

use num_bigint::BigInt;
use proptest::prelude::*;
use ruler::prelude::*;

fn ruler() -> Ruler<Validator> {
    rule_factory(identity).ruler()
}

fn passes(rules: &[Validator], value: &Value) -> bool {
    rules[1].is_valid(value)
}

fn any_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::bigint(n)),
        ".{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4).prop_map(Value::object),
        ]
    })
}

// ============================================================================
// NUMERIC BOUNDARY LAWS: gt(v) fails iff x <= v, and so on
// ============================================================================

proptest! {
    #[test]
    fn number_boundary_laws(x in -1e6f64..1e6, v in -1e6f64..1e6) {
        let value = Value::from(x);
        let gt = ruler().number(()).gt(v, "x").done();
        let gte = ruler().number(()).gte(v, "x").done();
        let lt = ruler().number(()).lt(v, "x").done();
        let lte = ruler().number(()).lte(v, "x").done();

        prop_assert_eq!(!passes(&gt, &value), x <= v);
        prop_assert_eq!(!passes(&gte, &value), x < v);
        prop_assert_eq!(!passes(&lt, &value), x >= v);
        prop_assert_eq!(!passes(&lte, &value), x > v);
    }

    #[test]
    fn bigint_boundary_laws(x in any::<i64>(), v in any::<i64>()) {
        let value = Value::bigint(x);
        let threshold = BigInt::from(v);
        let gt = ruler().bigint(()).gt(threshold.clone(), "x").done();
        let gte = ruler().bigint(()).gte(threshold.clone(), "x").done();
        let lt = ruler().bigint(()).lt(threshold.clone(), "x").done();
        let lte = ruler().bigint(()).lte(threshold, "x").done();

        prop_assert_eq!(!passes(&gt, &value), x <= v);
        prop_assert_eq!(!passes(&gte, &value), x < v);
        prop_assert_eq!(!passes(&lt, &value), x >= v);
        prop_assert_eq!(!passes(&lte, &value), x > v);
    }

    #[test]
    fn mixed_representations_compare_by_value(x in -1_000_000i64..1_000_000, v in -1_000_000i64..1_000_000) {
        #[allow(clippy::cast_precision_loss)]
        let as_float = Value::from(x as f64);
        let rules = ruler().bigint(()).gte(BigInt::from(v), "x").done();
        prop_assert_eq!(passes(&rules, &as_float), x >= v);
    }
}

// ============================================================================
// CHAIN LAWS
// ============================================================================

proptest! {
    #[test]
    fn done_len_counts_rule_producing_calls(ops in prop::collection::vec(0u8..6, 0..24)) {
        let r = ruler();
        let mut expected = 0;
        for op in ops {
            match op {
                0 => { r.string(()); expected += 1; }
                1 => { r.min(1, ()); expected += 1; }
                2 => { r.required(()); expected += 1; }
                3 => { r.trim(); }
                4 => { r.to_upper_case(); }
                _ => { r.set_type(TypeTag::Array); }
            }
        }
        prop_assert_eq!(r.done().len(), expected);
    }

    #[test]
    fn declaration_without_message_never_fails(value in any_value()) {
        let r = ruler();
        r.string(()).number(()).array(()).boolean(()).object(());
        r.symbol(()).bigint(()).null(()).undefined(()).is_true(()).is_false(());
        for rule in r.done() {
            prop_assert!(rule.is_valid(&value));
        }
    }

    #[test]
    fn string_declaration_accepts_exactly_strings(value in any_value()) {
        let rules = ruler().string("Must be string").done();
        let result = rules[0].validate(&value);
        if value.as_str().is_some() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().message, "Must be string");
        }
    }

    #[test]
    fn evaluation_is_idempotent(value in any_value()) {
        let rules = ruler()
            .array(())
            .min(2, "x")
            .uniq("dup")
            .done();
        for rule in &rules {
            prop_assert_eq!(rule.validate(&value), rule.validate(&value));
        }
    }

    #[test]
    fn string_length_respects_chars(s in "\\PC{0,12}", n in 0usize..12) {
        let rules = ruler().string(()).min(n, "x").done();
        prop_assert_eq!(passes(&rules, &Value::from(s.as_str())), s.chars().count() >= n);
    }
}
