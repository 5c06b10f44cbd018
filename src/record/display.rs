/// Separator between the last and first name in a display string.
pub const DISPLAY_SEPARATOR: &str = ", ";

/// Build the `"{last}, {first}"` display string from raw field values.
///
/// No trimming happens here: whitespace typed into either field is kept in the
/// stored value.
pub fn format_display(first: &str, last: &str) -> String {
    format!("{}{}{}", last, DISPLAY_SEPARATOR, first)
}

/// Split a display string into `(last, first)` on the first separator.
///
/// A display string without a separator is treated as a bare last name.
pub fn split_display(display: &str) -> (&str, &str) {
    match display.split_once(DISPLAY_SEPARATOR) {
        Some((last, first)) => (last, first),
        None => (display, ""),
    }
}
