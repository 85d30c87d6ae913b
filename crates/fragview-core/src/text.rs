//! Preview text for the fragmented view.
//!
//! Pieces carry offsets into a synthetic coordinate space; these helpers build the matching
//! text so a host can render the fragmented view directly. All offsets and lengths are
//! character counts, consistent with the rest of the crate.

use crate::ranges::FragmentRange;

/// Width of the separator gap between consecutive ranges, in characters.
///
/// This is the amount the fragment base advances past a range's image:
/// `1 + additional_offset`.
pub fn gap_width(additional_offset: usize) -> usize {
    1 + additional_offset
}

/// Total length of the fragmented view in characters.
///
/// The sum of all range lengths plus one [`gap_width`] separator between each consecutive
/// pair. There is no trailing separator, so this equals the largest offset any piece can end
/// at.
pub fn fragment_len(ranges: &[FragmentRange], additional_offset: usize) -> usize {
    if ranges.is_empty() {
        return 0;
    }
    let content: usize = ranges.iter().map(|range| range.len()).sum();
    content + (ranges.len() - 1) * gap_width(additional_offset)
}

/// Build the text of the fragmented view.
///
/// The kept ranges' characters are joined by separator blocks of newlines,
/// [`gap_width`]`(additional_offset)` wide, so offsets produced by
/// [`translate`](crate::translate::translate) with the same `additional_offset` index directly
/// into the returned string (by character). Ranges extending past the end of `text` contribute
/// only the characters that exist.
pub fn fragment_text(text: &str, ranges: &[FragmentRange], additional_offset: usize) -> String {
    let separator = "\n".repeat(gap_width(additional_offset));
    let mut out = String::new();

    for (index, range) in ranges.iter().enumerate() {
        if index > 0 {
            out.push_str(&separator);
        }
        out.extend(text.chars().skip(range.start).take(range.len()));
    }

    out
}
