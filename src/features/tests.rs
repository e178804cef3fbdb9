//! Tests for feature engineering

use super::alphabet::{count_foreign_symbols, AI_SYMBOLS, DEFAULT_SYMBOL_SCORE};
use super::calendar::{decompose, parse_time_check};
use super::scores::{max_score, min_score, parse_score_text, rank_symbols, symbol_scores};
use super::template::regno_category;
use super::{build_features, FeatureError, FeatureValue};
use crate::models::ScoreList;
use crate::test_support::sample_event;

// ============================================================================
// TEMPLATES
// ============================================================================

#[test]
fn test_private_car_template() {
    assert_eq!(regno_category("А123ВС77"), "private car");
    assert_eq!(regno_category("А123ВС777"), "private car");
}

#[test]
fn test_unknown_template() {
    assert_eq!(regno_category("ХХ999"), "unknown");
    assert_eq!(regno_category(""), "unknown");
    // Ё is outside А-Я
    assert_eq!(regno_category("Ё123ВС77"), "unknown");
    // trailing garbage breaks the full match
    assert_eq!(regno_category("А123ВС7777"), "unknown");
}

#[test]
fn test_moto_shape_never_reaches_army() {
    for regno in ["1234АВ77", "0000ХХ999", "9876МР01"] {
        assert_eq!(regno_category(regno), "lk_moto_tract", "{}", regno);
    }
}

#[test]
fn test_template_rule_table() {
    let cases = [
        ("АВ12345", " lk_taxi_r_pricep"),
        ("АВ123456", "lk_pricep_r_transit"),
        ("АВ1234567", "lk_pricep_r_transit"),
        ("А1234ВС", "some"),
        ("АВ123С77", "lk_transit"),
        ("ТАВ12345", "lk_export"),
        ("TАВ123456", "lk_export"),
        ("А123456", "lk_mvd_avto"),
        ("1234А77", "lk_mvd_moto"),
        ("123А77", "lk_mvd_pricep"),
        ("123CD456", "lk_diplomat"),
        ("123СD4567", "lk_diplomat"),
        ("123D456789", "lk_diplomat"),
        ("123T456", "lk_diplomat"),
    ];
    for (regno, expected) in cases {
        assert_eq!(regno_category(regno), expected, "{}", regno);
    }
}

#[test]
fn test_diplomat_extra_digit_limit() {
    assert_eq!(regno_category("123D4567890"), "unknown");
}

// ============================================================================
// SCORE LISTS
// ============================================================================

#[test]
fn test_parse_score_text() {
    assert_eq!(parse_score_text("[0.5, 0.25,1]"), vec![0.5, 0.25, 1.0]);
    assert_eq!(parse_score_text("0.5,0.75"), vec![0.5, 0.75]);
}

#[test]
fn test_malformed_score_text_degrades() {
    for raw in ["[]", "", "abc", "[ ]", "[0.5,]", "[", "0.1;0.2"] {
        assert_eq!(parse_score_text(raw), vec![0.0], "{:?}", raw);
    }
}

#[test]
fn test_score_list_representations() {
    let native: ScoreList = serde_json::from_value(serde_json::json!([0.9, 1])).unwrap();
    assert_eq!(native.values(), vec![0.9, 1.0]);

    let text: ScoreList = serde_json::from_value(serde_json::json!("[0.9, 0.1]")).unwrap();
    assert_eq!(text.values(), vec![0.9, 0.1]);

    let other: ScoreList = serde_json::from_value(serde_json::json!({"a": 1})).unwrap();
    assert_eq!(other.values(), vec![0.0]);
}

#[test]
fn test_score_aggregates() {
    let scores = [0.4, 0.9, 0.1];
    assert_eq!(max_score(&scores), 0.9);
    assert_eq!(min_score(&scores), 0.1);
    assert_eq!(max_score(&[]), 0.0);
    assert_eq!(min_score(&[]), 0.0);
    assert!(max_score(&[0.2, f64::NAN]).is_nan());
}

// ============================================================================
// SYMBOL SCORES
// ============================================================================

#[test]
fn test_rank_symbols_descending() {
    let ranked = rank_symbols("АВ12", &[0.1, 0.9, 0.5, 0.2]);
    let order: Vec<char> = ranked.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, vec!['В', '1', '2', 'А']);
    assert_eq!(ranked[3], ('А', 0.1));
}

#[test]
fn test_symbol_scores_defaults() {
    let scores = symbol_scores("АВ12", &[0.1, 0.9, 0.5, 0.2]);
    assert_eq!(scores.len(), AI_SYMBOLS.len());

    for &symbol in AI_SYMBOLS {
        let (_, score) = scores.iter().find(|(c, _)| *c == symbol).unwrap();
        if !"АВ12".contains(symbol) {
            assert_eq!(*score, DEFAULT_SYMBOL_SCORE, "{}", symbol);
        }
    }
}

#[test]
fn test_rank_symbols_truncates_to_shorter() {
    let ranked = rank_symbols("А123", &[0.5]);
    assert_eq!(ranked, vec![('А', 0.5)]);

    let ranked = rank_symbols("А1", &[0.5, 0.6, 0.7]);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_repeated_symbol_keeps_last_ranked_score() {
    let ranked = rank_symbols("А1А", &[0.9, 0.5, 0.3]);
    assert_eq!(ranked, vec![('А', 0.3), ('1', 0.5)]);
}

#[test]
fn test_foreign_symbol_count() {
    assert_eq!(count_foreign_symbols("А123ВС77"), 0);
    assert_eq!(count_foreign_symbols("ИQЖ"), 0);
    assert_eq!(count_foreign_symbols("А1!2"), 1);
    assert_eq!(count_foreign_symbols("ЁÄ a"), 4);
}

// ============================================================================
// CALENDAR
// ============================================================================

#[test]
fn test_calendar_fields() {
    let dt = parse_time_check("2024-03-15 14:30:00").unwrap();
    let fields = decompose(&dt);
    assert_eq!(fields.weekday, "Friday");
    assert_eq!(fields.month, "March");
    assert_eq!(fields.hour, 14);
}

#[test]
fn test_calendar_formats() {
    let with_offset = parse_time_check("2024-03-15T14:30:00+03:00").unwrap();
    assert_eq!(decompose(&with_offset).hour, 14);

    let fractional = parse_time_check("2024-03-15 23:59:59.123456").unwrap();
    assert_eq!(decompose(&fractional).hour, 23);

    let date_only = decompose(&parse_time_check("2023-12-31").unwrap());
    assert_eq!(date_only.weekday, "Sunday");
    assert_eq!(date_only.month, "December");
    assert_eq!(date_only.hour, 0);

    let slashed = decompose(&parse_time_check("03/15/2024 14:30").unwrap());
    assert_eq!(slashed.month, "March");
    assert_eq!(slashed.hour, 14);

    let dotted = decompose(&parse_time_check("15.03.2024 14:30").unwrap());
    assert_eq!(dotted.month, "March");
    assert_eq!(dotted.weekday, "Friday");

    let compact_offset = parse_time_check("2024-03-15T14:30:00.000+0300").unwrap();
    assert_eq!(decompose(&compact_offset).hour, 14);

    let spaced_offset = parse_time_check("2024-03-15 14:30:00+0300").unwrap();
    assert_eq!(decompose(&spaced_offset).hour, 14);
}

#[test]
fn test_dotted_dates_read_month_first() {
    let ambiguous = decompose(&parse_time_check("01.02.2024 10:00:00").unwrap());
    assert_eq!(ambiguous.month, "January");
    assert_eq!(ambiguous.weekday, "Tuesday");
    assert_eq!(ambiguous.hour, 10);

    // day above 12 falls back to day-first
    let unambiguous = decompose(&parse_time_check("15.03.2024 10:00:00").unwrap());
    assert_eq!(unambiguous.month, "March");
    assert_eq!(unambiguous.weekday, "Friday");

    let date_only = decompose(&parse_time_check("01.02.2024").unwrap());
    assert_eq!(date_only.month, "January");
}

#[test]
fn test_invalid_time_check() {
    assert!(matches!(
        parse_time_check("not a date"),
        Err(FeatureError::InvalidTimestamp(_))
    ));
    assert!(parse_time_check("2024-13-40 10:00:00").is_err());
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

#[test]
fn test_feature_vector_complete() {
    let event = sample_event("А123ВС77", "2024-03-15 14:30:00");
    let x = build_features(&event).unwrap();

    let named = [
        "direction", "recognition_accuracy", "afts_regno_ai_score",
        "max_sym_score", "min_sym_score", "max_len_score",
        "ai_len", "cam_len", "regno_recognize_text", "afts_regno_ai_text",
        "camera_type", "camera_class", "weekday", "month", "hour",
        "regno_template", "regno_template_ai", "foreign_sym",
    ];
    for name in named {
        assert!(x.contains(name), "missing {}", name);
    }
    for symbol in AI_SYMBOLS {
        assert!(x.contains(&symbol.to_string()), "missing symbol {}", symbol);
    }
    assert_eq!(x.len(), named.len() + AI_SYMBOLS.len());
}

#[test]
fn test_feature_vector_values() {
    let event = sample_event("А123ВС77", "2024-03-15 14:30:00");
    let x = build_features(&event).unwrap();

    assert_eq!(x.get("ai_len"), Some(&FeatureValue::Number(8.0)));
    assert_eq!(x.get("cam_len"), Some(&FeatureValue::Number(8.0)));
    assert_eq!(x.get("regno_recognize_text"), Some(&FeatureValue::from("А 1 2 3 В С 7 7")));
    assert_eq!(x.get("max_sym_score"), Some(&FeatureValue::Number(0.99)));
    assert_eq!(x.get("min_sym_score"), Some(&FeatureValue::Number(0.7)));
    assert_eq!(x.get("max_len_score"), Some(&FeatureValue::Number(0.95)));
    assert_eq!(x.get("regno_template"), Some(&FeatureValue::from("private car")));
    assert_eq!(x.get("weekday"), Some(&FeatureValue::from("Friday")));
    assert_eq!(x.get("hour"), Some(&FeatureValue::Number(14.0)));
    assert_eq!(x.get("foreign_sym"), Some(&FeatureValue::Number(0.0)));
    assert_eq!(x.get("А"), Some(&FeatureValue::Number(0.99)));
    // '7' appears twice; its lower-ranked score wins
    assert_eq!(x.get("7"), Some(&FeatureValue::Number(0.7)));
    assert_eq!(x.get("Х"), Some(&FeatureValue::Number(DEFAULT_SYMBOL_SCORE)));
}

#[test]
fn test_feature_vector_keeps_non_alphabet_symbols() {
    let mut event = sample_event("А123ВС77", "2024-03-15 14:30:00");
    event.afts_regno_ai = "Q1".to_string();
    event.afts_regno_ai_char_scores = ScoreList::Values(vec![0.4, 0.6]);
    let x = build_features(&event).unwrap();

    assert_eq!(x.get("Q"), Some(&FeatureValue::Number(0.4)));
    assert_eq!(x.get("1"), Some(&FeatureValue::Number(0.6)));
}

#[test]
fn test_malformed_scores_do_not_fail_build() {
    let mut event = sample_event("А123ВС77", "2024-03-15 14:30:00");
    event.afts_regno_ai_char_scores = ScoreList::Text("abc".to_string());
    event.afts_regno_ai_length_scores = ScoreList::Text(String::new());
    let x = build_features(&event).unwrap();

    assert_eq!(x.get("max_sym_score"), Some(&FeatureValue::Number(0.0)));
    assert_eq!(x.get("max_len_score"), Some(&FeatureValue::Number(0.0)));
    assert_eq!(x.get("А"), Some(&FeatureValue::Number(0.0)));
}

#[test]
fn test_bad_timestamp_fails_build() {
    let event = sample_event("А123ВС77", "yesterday");
    assert!(build_features(&event).is_err());
}
