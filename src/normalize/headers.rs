// src/normalize/headers.rs
use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid space-run regex"));

/// Quote/apostrophe variants the raw exports carry: curly quotes where the
/// bytes were UTF-8, and the replacement character left behind when the
/// Windows-1252 0x92 byte goes through lossy decoding.
const STRAY_QUOTE_CHARS: [char; 3] = ['\u{2019}', '\u{2018}', '\u{FFFD}'];

/// Uppercase, fold NBSP to a plain space, collapse space runs, trim.
///
/// Replacement characters fold to `?` first: the fee table's published
/// headers read `(IN ? CRORE)` where the rupee glyph failed to encode, and
/// the cleaned form has to match that text.
pub fn clean_spaced(raw: &str) -> String {
    let upper = raw
        .to_uppercase()
        .replace('\u{FFFD}', "?")
        .replace('\u{a0}', " ");
    MULTI_SPACE.replace_all(&upper, " ").trim().to_string()
}

/// Trim, uppercase, and replace spaces with underscores.
pub fn clean_underscored(raw: &str) -> String {
    raw.trim().to_uppercase().replace(' ', "_")
}

/// Strip the stray quote/apostrophe variants from a cleaned header.
pub fn strip_quote_artifacts(s: &str) -> String {
    s.chars().filter(|c| !STRAY_QUOTE_CHARS.contains(c)).collect()
}
