//! Property-based tests for value classification and display.

use calc::lang::{is_register_token, parse_literal, to_register, Operator};
use calc::mach::{fmt_general, fmt_register, Operation, Val};
use proptest::prelude::*;

proptest! {
    #[test]
    fn literal_is_number_only_when_whole_string_parses(s in ".*") {
        match parse_literal(&s) {
            Val::Number(n) => {
                let parsed = s.parse::<f64>().ok();
                prop_assert!(parsed.is_some());
                prop_assert!(parsed.map_or(false, |p| p == n || (p.is_nan() && n.is_nan())));
            }
            Val::Text(t) => {
                let in_range = s.parse::<f64>().map_or(false, |p| p.is_finite() && p != 0.0);
                prop_assert!(!in_range);
                prop_assert_eq!(t, s);
            }
        }
    }

    #[test]
    fn register_classification_agrees(s in "\\PC{0,4}") {
        prop_assert_eq!(is_register_token(&s), to_register(&s).is_ok());
    }

    #[test]
    fn register_display_never_ends_in_zero_fraction(n in any::<f64>()) {
        let s = fmt_register(n);
        if s.contains('.') {
            prop_assert!(!s.ends_with('0'));
            prop_assert!(!s.ends_with('.'));
            prop_assert!(s.len() - s.find('.').unwrap_or(0) <= 4);
        }
    }

    #[test]
    fn general_display_parses_back_close(n in -1e12f64..1e12) {
        let s = fmt_general(n);
        let back: f64 = s.parse().unwrap_or(f64::NAN);
        prop_assert!((back - n).abs() <= n.abs() * 1e-5 + 1e-9, "{} -> {}", n, s);
    }

    #[test]
    fn repetition_length(count in -5i32..20, s in "[a-z]{0,5}") {
        let times = Val::Number(f64::from(count));
        let out = Operation::apply(Operator::Multiply, &times, &Val::Text(s.clone()))
            .unwrap_or_default();
        prop_assert_eq!(out.len(), s.len() * count.max(0) as usize);
    }
}
