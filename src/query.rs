//! Query normalization and language detection

use log::warn;

/// Thai administrative markers, checked in this order; the first match wins.
///
/// District ("อำเภอ", "อ."), subdistrict ("ตำบล", "ต."), province
/// ("จังหวัด", "จ.").
pub const ADMIN_PREFIXES: [&str; 6] = ["อำเภอ", "อ.", "ตำบล", "ต.", "จังหวัด", "จ."];

/// ก, the first assigned code point of the Thai block.
const THAI_START: char = '\u{0E01}';

/// ๛ (khomut), the last one. Thai digits ๐-๙ (U+0E50..U+0E59) sit inside.
const THAI_END: char = '\u{0E5B}';

/// Whether `c` is a Thai consonant, vowel, tone mark, symbol or digit
#[inline]
pub fn is_thai_char(c: char) -> bool {
    (THAI_START..=THAI_END).contains(&c)
}

/// Whether any character of `s` is Thai
///
/// ```rust
/// assert!(thaigeo::is_thai("อ.เมือง"));
/// assert!(thaigeo::is_thai("Soi ๑๒"));
/// assert!(!thaigeo::is_thai("Chiang Mai"));
/// ```
pub fn is_thai(s: &str) -> bool {
    s.chars().any(is_thai_char)
}

/// Trims surrounding whitespace.
pub fn normalize_query(raw: &str) -> &str {
    raw.trim()
}

/// All administrative prefixes `s` starts with, in checking order
pub fn matching_prefixes(s: &str) -> Vec<&'static str> {
    ADMIN_PREFIXES
        .iter()
        .copied()
        .filter(|p| s.starts_with(p))
        .collect()
}

/// Strips at most one administrative prefix from the start of `s`.
///
/// When more than one prefix applies the first in [`ADMIN_PREFIXES`] order is
/// used and the overlap is logged.
pub fn strip_admin_prefix(s: &str) -> &str {
    let candidates = matching_prefixes(s);
    match candidates.as_slice() {
        [] => s.trim(),
        [only] => s[only.len()..].trim(),
        [first, ..] => {
            warn!(
                "query {:?} starts with several administrative prefixes {:?}, stripping {:?}",
                s, candidates, first
            );
            s[first.len()..].trim()
        }
    }
}

/// Full normalization used by the hierarchy matcher:
/// trim, lower-case, strip one administrative prefix, trim again.
///
/// ```rust
/// assert_eq!(thaigeo::normalize_admin_query("  อ.เมือง "), "เมือง");
/// assert_eq!(thaigeo::normalize_admin_query("Chiang MAI"), "chiang mai");
/// ```
pub fn normalize_admin_query(raw: &str) -> String {
    let lowered = normalize_query(raw).to_lowercase();
    strip_admin_prefix(&lowered).to_string()
}
