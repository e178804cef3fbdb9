//! Template Classifier
//!
//! Maps a plate string to a coarse format category. Rules are evaluated
//! top to bottom and the first full match wins.
//!
//! NOTE: `lk_army` has the same shape as `lk_moto_tract` and can never be
//! reached. The model was trained with this ordering, keep it as is.

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_TEMPLATE: &str = "unknown";

/// (pattern, label) in evaluation order
const TEMPLATE_RULES: &[(&str, &str)] = &[
    (r"^[А-Я]\d{3}[А-Я]{2}\d{2}(|\d)$", "private car"),
    // leading space is part of the trained category value
    (r"^[А-Я]{2}\d{5}(|\d)$", " lk_taxi_r_pricep"),
    (r"^[А-Я]{2}\d{6}(|\d)$", "lk_pricep_r_transit"),
    (r"^\d{4}[А-Я]{2}\d{2}(|\d)$", "lk_moto_tract"),
    (r"^[А-Я]{1}\d{4}[А-Я]{2}$", "some"),
    (r"^[А-Я]{2}\d{3}[А-Я]\d{2}(|\d)$", "lk_transit"),
    (r"^(T|Т)[А-Я]{2}\d{5}(|\d)$", "lk_export"),
    (r"^[А-Я]\d{6}(|\d)$", "lk_mvd_avto"),
    (r"^\d{4}[А-Я]\d{2}(|\d)$", "lk_mvd_moto"),
    (r"^\d{3}[А-Я]\d{2}(|\d)$", "lk_mvd_pricep"),
    (r"^\d{3}(CD|СD|D|T|Т)\d{3}(|\d)(|\d)(|\d)$", "lk_diplomat"),
    (r"^\d{4}[А-Я]{2}\d{2}(|\d)$", "lk_army"),
];

static COMPILED_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    TEMPLATE_RULES
        .iter()
        .map(|(pattern, label)| {
            let re = Regex::new(pattern).expect("plate template pattern must compile");
            (re, *label)
        })
        .collect()
});

/// Classify a plate string into its template category
pub fn regno_category(regno: &str) -> &'static str {
    COMPILED_RULES
        .iter()
        .find(|(re, _)| re.is_match(regno))
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_TEMPLATE)
}

