//! Symbol Alphabets
//!
//! Static character sets used for symbol-score features and
//! foreign-symbol detection. Order of `AI_SYMBOLS` is the order in which
//! default symbol scores are appended to the feature vector.

/// Digits and Cyrillic letters permitted on plates (plus the diplomatic `D`)
pub const AI_SYMBOLS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'D',
    'А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х',
];

/// Cyrillic letters never issued on plates
pub const OLD_CYRILLIC_SYMBOLS: &[char] = &[
    'И', 'Й', 'Ц', 'Г', 'Ш', 'Щ', 'З', 'Ъ', 'Ф', 'Ы',
    'П', 'Л', 'Д', 'Ж', 'Э', 'Я', 'Ч', 'Ь', 'Б', 'Ю',
];

/// Latin letters without a Cyrillic look-alike
pub const LATIN_SYMBOLS: &[char] = &[
    'Q', 'W', 'R', 'Y', 'U', 'I', 'S', 'F', 'G', 'J', 'L', 'Z', 'V', 'N',
];

/// Default score for allowed symbols absent from the AI-corrected plate
pub const DEFAULT_SYMBOL_SCORE: f64 = 1.0;

pub fn is_allowed(c: char) -> bool {
    AI_SYMBOLS.contains(&c)
}

/// True if the character belongs to any of the three known alphabets
pub fn is_known(c: char) -> bool {
    is_allowed(c) || OLD_CYRILLIC_SYMBOLS.contains(&c) || LATIN_SYMBOLS.contains(&c)
}

/// Count characters outside allowed + old Cyrillic + Latin sets
pub fn count_foreign_symbols(regno: &str) -> usize {
    regno.chars().filter(|c| !is_known(*c)).count()
}
