//! Keystroke formatting for monetary inputs.

use super::field::FieldName;

/// Currency glyph prefixed to monetary fields.
pub const CURRENCY_GLYPH: char = '¥';

/// Reformats raw input for `field`.
///
/// Monetary fields keep only ASCII digits and `.` and are re-prefixed with
/// [`CURRENCY_GLYPH`]; every other field passes through unchanged.
pub fn format(field: FieldName, raw: &str) -> String {
    if !field.is_monetary() {
        return raw.to_string();
    }
    let mut formatted = String::with_capacity(raw.len() + CURRENCY_GLYPH.len_utf8());
    formatted.push(CURRENCY_GLYPH);
    formatted.extend(raw.chars().filter(|ch| ch.is_ascii_digit() || *ch == '.'));
    formatted
}
