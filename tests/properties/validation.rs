//! Validation properties

use armdeploy::domain::entities::ParameterTemplateEntry;
use armdeploy::domain::services::{validate, NOT_A_NUMBER};
use proptest::prelude::*;

proptest! {
    #[test]
    fn min_length_boundary_is_exact(text in "\\PC{0,20}", min in 0usize..20) {
        let entry = ParameterTemplateEntry::new("string").with_length_range(Some(min), None);
        let message = validate(&text, &entry);

        if text.encode_utf16().count() < min {
            prop_assert_eq!(message, format!("The value doesn't meet requirement: minLength {}.", min));
        } else {
            prop_assert_eq!(message, "");
        }
    }

    #[test]
    fn max_length_boundary_is_exact(text in "\\PC{0,20}", max in 0usize..20) {
        let entry = ParameterTemplateEntry::new("string").with_length_range(None, Some(max));
        let passes = validate(&text, &entry).is_empty();
        prop_assert_eq!(passes, text.encode_utf16().count() <= max);
    }

    #[test]
    fn values_inside_range_pass(min in -100i64..100, span in 0i64..100, offset in 0i64..100) {
        let max = min + span;
        let value = min + offset.min(span);
        let entry = ParameterTemplateEntry::new("int")
            .with_value_range(Some(min as f64), Some(max as f64));

        prop_assert_eq!(validate(&value.to_string(), &entry), "");
    }

    #[test]
    fn values_outside_range_name_the_bound(min in -100i64..100, span in 0i64..100, gap in 1i64..50) {
        let max = min + span;
        let entry = ParameterTemplateEntry::new("int")
            .with_value_range(Some(min as f64), Some(max as f64));

        prop_assert_eq!(
            validate(&(min - gap).to_string(), &entry),
            format!("The value doesn't meet requirement: minValue {}.", min)
        );
        prop_assert_eq!(
            validate(&(max + gap).to_string(), &entry),
            format!("The value doesn't meet requirement: maxValue {}.", max)
        );
    }

    #[test]
    fn non_numeric_int_is_reported(word in "[g-zG-Z]{1,10}", bounded in any::<bool>()) {
        let mut entry = ParameterTemplateEntry::new("int");
        if bounded {
            entry = entry.with_value_range(Some(0.0), Some(10.0));
        }
        prop_assert_eq!(validate(&word, &entry), NOT_A_NUMBER);
    }

    #[test]
    fn bool_and_untyped_always_pass(raw in any::<String>(), declared in prop_oneof![Just("bool"), Just("securestring"), Just("object")]) {
        let entry = ParameterTemplateEntry::new(declared)
            .with_length_range(Some(5), Some(1))
            .with_value_range(Some(5.0), Some(1.0));
        prop_assert_eq!(validate(&raw, &entry), "");
    }
}
