//! Coercion properties

use armdeploy::domain::entities::{ParameterType, ParameterValue};
use armdeploy::domain::services::{coerce, to_number};
use proptest::prelude::*;

fn any_type() -> impl Strategy<Value = ParameterType> {
    prop_oneof![
        Just(ParameterType::String),
        Just(ParameterType::Int),
        Just(ParameterType::Bool),
        "[a-z]{1,12}".prop_map(|s| ParameterType::from(s.as_str())),
    ]
}

proptest! {
    #[test]
    fn coerce_never_panics(raw in any::<String>(), declared in any_type()) {
        let _ = coerce(&raw, &declared);
    }

    #[test]
    fn strings_pass_through(raw in any::<String>()) {
        prop_assert_eq!(coerce(&raw, &ParameterType::String), ParameterValue::Text(raw));
    }

    #[test]
    fn integers_round_trip(n in -1_000_000_000i64..1_000_000_000i64, pad in " {0,3}") {
        let raw = format!("{pad}{n}{pad}");
        prop_assert_eq!(to_number(&raw), n as f64);
    }

    #[test]
    fn words_are_not_numbers(word in "[g-zG-Z]{1,10}") {
        prop_assert!(to_number(&word).is_nan());
    }

    #[test]
    fn bool_is_true_only_for_true(raw in "[a-zA-Z]{0,6}") {
        let expected = raw.eq_ignore_ascii_case("true");
        prop_assert_eq!(coerce(&raw, &ParameterType::Bool), ParameterValue::Bool(expected));
    }
}
