//! Filename sanitization for names taken from URLs.

use super::naming::STAMP_SUFFIX_LEN;

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Longest name we hand out, leaving room for a disambiguation stamp.
pub const MAX_NAME_LEN: usize = NAME_MAX - STAMP_SUFFIX_LEN;

/// Replaces characters that must not reach a filesystem path component.
///
/// - NUL, `\` and control characters become `_`
/// - Length is limited to [`MAX_NAME_LEN`] bytes, keeping the tail so the
///   extension survives and a later `_YYMMDD_HHMMSS` still fits in NAME_MAX
///
/// `/` never occurs: names are cut after the last separator before this runs.
pub fn sanitize_filename(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '\\' || c == '/' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if out.len() > MAX_NAME_LEN {
        let mut skip = out.len() - MAX_NAME_LEN;
        while skip < out.len() && !out.is_char_boundary(skip) {
            skip += 1;
        }
        out[skip..].to_string()
    } else {
        out
    }
}
