const DISPLAY_WIDTH: usize = 33;

/// Escaped, clamped rendering of the remaining input for trace output, eg `|abc\n|`
pub fn formatter_str(c: &str) -> String {
    let s: String = c.chars().take(DISPLAY_WIDTH).collect();
    let s = s.escape_debug().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(DISPLAY_WIDTH).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}

/// The prefix of `input` that was consumed to leave `rest`.
///
/// `rest` must be a suffix of `input`, which every parser guarantees on success.
#[inline]
pub fn consumed<'a>(input: &'a str, rest: &'a str) -> &'a str {
    debug_assert!(input.ends_with(rest), "rest is not a suffix of the input");
    &input[..input.len() - rest.len()]
}

/// Splits off the first character, if any.
#[inline]
pub fn split_first_char(s: &str) -> Option<(char, &str, &str)> {
    let c = s.chars().next()?;
    let (head, tail) = s.split_at(c.len_utf8());
    Some((c, head, tail))
}
