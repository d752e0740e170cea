//! Plain-text normalization of prompt text.

/// Join words with underscores.
///
/// Every run of whitespace other than a line break becomes a single `_`.
/// Leading and trailing underscores and whitespace are then removed. Line
/// breaks inside the text are kept, so split-mode output stays one tag per
/// line.
///
/// The transform is idempotent.
///
/// # Examples
///
/// ```
/// use promptag::underline;
///
/// assert_eq!(underline("  blue   sky, long hair "), "blue_sky,_long_hair");
/// assert_eq!(underline("a,\nb c"), "a,\nb_c");
/// ```
pub fn underline(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_whitespace() && c != '\n' {
            if !in_run {
                output.push('_');
                in_run = true;
            }
        } else {
            output.push(c);
            in_run = false;
        }
    }

    output
        .trim_matches(|c: char| c == '_' || c.is_whitespace())
        .to_string()
}
