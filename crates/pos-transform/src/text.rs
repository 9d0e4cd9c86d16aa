//! Text utilities for product name normalization.

/// Title-cases a string on word boundaries.
///
/// An alphabetic character is uppercased when it starts a word and
/// lowercased otherwise; a word starts at the beginning of the string or
/// after any non-alphabetic character. Non-alphabetic characters pass
/// through unchanged.
///
/// # Example
/// ```
/// use pos_transform::text::title_case;
///
/// assert_eq!(title_case("iced flavoured latte"), "Iced Flavoured Latte");
/// assert_eq!(title_case("HOT CHOCOLATE"), "Hot Chocolate");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
