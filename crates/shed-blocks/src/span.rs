//! Line-oriented scan for managed-block spans.
//!
//! Deliberately not a pattern engine: marker recognition is exact
//! whole-line comparison, so comment prefixes carrying characters that a
//! pattern language would treat specially (`"`, `;`, `*`) need no
//! escaping and can never be misread.

use std::ops::Range;

/// Locate the first block span delimited by the given marker lines.
///
/// A marker counts only when it is the entire line. The returned byte
/// range runs from the start of the BEGIN line through the END line plus
/// the newline that follows it, when present. The first BEGIN line is
/// paired with the *nearest* following END line, so text between the
/// markers never extends the span past its own END or into a later
/// block.
///
/// Returns `None` when no complete span exists (no BEGIN, or a BEGIN
/// with no END after it).
///
/// # Example
/// ```
/// use shed_blocks::span::find_span;
///
/// let source = "keep\n# BEGIN:x\nbody\n# END:x\ntail\n";
/// let span = find_span(source, "# BEGIN:x", "# END:x").unwrap();
/// assert_eq!(&source[span], "# BEGIN:x\nbody\n# END:x\n");
/// ```
pub fn find_span(source: &str, begin_marker: &str, end_marker: &str) -> Option<Range<usize>> {
    let mut offset = 0;
    let mut begin_start: Option<usize> = None;

    for line in source.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let text = line.strip_suffix('\n').unwrap_or(line);

        match begin_start {
            None => {
                if text == begin_marker {
                    begin_start = Some(line_start);
                }
            }
            Some(start) => {
                if text == end_marker {
                    // offset already sits past the END line's newline
                    return Some(start..offset);
                }
            }
        }
    }

    None
}
