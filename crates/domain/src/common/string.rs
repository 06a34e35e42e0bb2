//! String formatting utilities for display values.

/// Upper-cases the first character of `value`, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use pokepedia_domain::common::capitalize;
///
/// assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
/// assert_eq!(capitalize("Mew"), "Mew");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a hyphenated API slug into capitalized words.
///
/// # Examples
///
/// ```
/// use pokepedia_domain::common::title_case_slug;
///
/// assert_eq!(title_case_slug("solar-power"), "Solar Power");
/// assert_eq!(title_case_slug("overgrow"), "Overgrow");
/// ```
pub fn title_case_slug(slug: &str) -> String {
    slug.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces line breaks and form feeds with spaces, collapses whitespace runs,
/// and trims the result.
///
/// Flavor text from the API is wrapped for the original game text boxes, so it
/// carries `\n` and `\u{000c}` in the middle of sentences.
///
/// # Examples
///
/// ```
/// use pokepedia_domain::common::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace(" A strange\nseed\u{000c}was  planted. "), "A strange seed was planted.");
/// ```
pub fn normalize_whitespace(value: &str) -> String {
    value
        .replace(['\n', '\u{000c}'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
