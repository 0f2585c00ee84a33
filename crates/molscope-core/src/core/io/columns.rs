//! Column slicing for fixed-width records.
//!
//! Offsets are 0-based character positions with an exclusive end. Ranges that run
//! past the end of the line are clamped, so a short line yields a shorter (possibly
//! empty) field instead of an error.

pub(crate) fn column(line: &str, start: usize, end: usize) -> &str {
    if line.is_ascii() {
        let len = line.len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        return &line[start..end];
    }
    let byte_offset = |n: usize| {
        line.char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    };
    let start = byte_offset(start);
    let end = byte_offset(end).max(start);
    &line[start..end]
}

pub(crate) fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    column(line, start, end).trim()
}

pub(crate) fn rest_and_trim(line: &str, start: usize) -> &str {
    column(line, start, usize::MAX).trim()
}
