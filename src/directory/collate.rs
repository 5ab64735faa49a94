//! Locale-aware ordering for display names.
//!
//! Names compare on three levels, the way the default `en` collation does for
//! Latin text: base letters first (accents and case ignored), then accents,
//! then case with lower case sorting before upper case.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: String,
    case: Vec<bool>,
}

pub fn collation_key(s: &str) -> CollationKey {
    let base = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    let accents = s.nfc().flat_map(char::to_lowercase).collect();
    let case = s.chars().map(char::is_uppercase).collect();
    CollationKey {
        base,
        accents,
        case,
    }
}
