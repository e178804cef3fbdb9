//! Confidence score lists and symbol/score alignment

use super::alphabet::{AI_SYMBOLS, DEFAULT_SYMBOL_SCORE};

/// Fallback for empty or malformed score lists
pub fn default_scores() -> Vec<f64> {
    vec![0.0]
}

/// Parse a serialized score list such as `"[0.98, 0.91, 0.99]"`.
///
/// Brackets are stripped only when both are present. Empty input or any
/// element that fails to parse yields `[0.0]`.
pub fn parse_score_text(text: &str) -> Vec<f64> {
    if text == "[]" {
        return default_scores();
    }

    let inner = if text.starts_with('[') && text.ends_with(']') && text.len() >= 2 {
        &text[1..text.len() - 1]
    } else {
        text
    };

    if inner.is_empty() {
        return default_scores();
    }

    inner
        .split(',')
        .map(|item| item.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|_| default_scores())
}

/// Largest score, NaN-propagating; 0 for an empty list
pub fn max_score(scores: &[f64]) -> f64 {
    fold_scores(scores, f64::max)
}

/// Smallest score, NaN-propagating; 0 for an empty list
pub fn min_score(scores: &[f64]) -> f64 {
    fold_scores(scores, f64::min)
}

fn fold_scores(scores: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    let Some((&first, rest)) = scores.split_first() else {
        return 0.0;
    };
    rest.iter().fold(first, |acc, &s| {
        if acc.is_nan() || s.is_nan() {
            f64::NAN
        } else {
            pick(acc, s)
        }
    })
}

/// Pair plate characters with their scores by position and rank them.
///
/// Pairing stops at the shorter of the two sequences. Pairs are sorted by
/// descending score (stable); a repeated character keeps the position of its
/// first ranked occurrence and the score of its last one.
pub fn rank_symbols(regno: &str, scores: &[f64]) -> Vec<(char, f64)> {
    let mut pairs: Vec<(char, f64)> = regno.chars().zip(scores.iter().copied()).collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranked: Vec<(char, f64)> = Vec::with_capacity(pairs.len());
    for (symbol, score) in pairs {
        match ranked.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = score,
            None => ranked.push((symbol, score)),
        }
    }
    ranked
}

/// Ranked symbol scores completed with every allowed symbol.
///
/// Allowed symbols not present on the plate get `DEFAULT_SYMBOL_SCORE`.
pub fn symbol_scores(regno: &str, scores: &[f64]) -> Vec<(char, f64)> {
    let mut ranked = rank_symbols(regno, scores);
    for &symbol in AI_SYMBOLS {
        if !ranked.iter().any(|(s, _)| *s == symbol) {
            ranked.push((symbol, DEFAULT_SYMBOL_SCORE));
        }
    }
    ranked
}
