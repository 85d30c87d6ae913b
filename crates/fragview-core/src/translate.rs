//! The range-to-fragment remapper.
//!
//! [`translate`] is the construction pass of this crate: it walks an annotation stream and an
//! ordered range list with two independent cursors and produces the complete piece sequence in
//! fragmented coordinates, eagerly and exactly once.

use crate::pieces::Piece;
use crate::ranges::FragmentRange;
use crate::tokens::TokenSource;

/// Options that control how [`translate`] builds pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateOptions {
    /// Extra separator width added after each consumed range, on top of the fixed single unit.
    pub additional_offset: usize,
    /// Coalesce contiguous pieces whose token type and attributes are equal.
    pub merge_by_attributes: bool,
}

impl TranslateOptions {
    /// Set the extra separator width.
    pub fn with_additional_offset(mut self, additional_offset: usize) -> Self {
        self.additional_offset = additional_offset;
        self
    }

    /// Enable or disable attribute merging.
    pub fn with_merge_by_attributes(mut self, merge: bool) -> Self {
        self.merge_by_attributes = merge;
        self
    }
}

/// Re-express an annotation stream in the fragmented coordinate space of `ranges`.
///
/// `ranges` must be ordered by `start` and pairwise disjoint; this is not checked here, and the
/// result is unspecified for malformed input. Use
/// [`validate_ranges`](crate::ranges::validate_ranges) or
/// [`PieceStore::try_build`](crate::pieces::PieceStore::try_build) to fail fast instead.
///
/// Every annotation overlapping a kept range contributes its overlap, clamped to the range and
/// shifted by the running fragment base; annotations outside all ranges are skipped. Each
/// consumed range advances the base by `range.len() + 1 + additional_offset`, so consecutive
/// ranges stay separated by [`gap_width`](crate::text::gap_width) units that no piece covers.
/// An annotation spanning several ranges contributes to each of them. An annotation starting
/// exactly at a range's end contributes a zero-length piece at that boundary.
///
/// With `merge_by_attributes` set, a piece contiguous with (or overlapping) the previous one
/// and carrying the same token type and attributes extends the previous piece instead of being
/// appended. The separator gap breaks contiguity, so merging never crosses ranges.
///
/// Runs in O(annotations + ranges); empty inputs produce an empty sequence.
pub fn translate<S: TokenSource>(
    source: &mut S,
    ranges: &[FragmentRange],
    options: TranslateOptions,
) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut fragment_base = 0usize;
    let mut range_index = 0usize;

    while !source.at_end() && range_index < ranges.len() {
        let range = ranges[range_index];

        // This annotation ends at or before the range's start; it cannot contribute here.
        if range.start >= source.end() {
            source.advance();
            continue;
        }

        if range.end >= source.start() {
            let rel_start = source.start().saturating_sub(range.start);
            let rel_end = (source.end() - range.start).min(range.len());
            let frag_start = fragment_base + rel_start;
            let frag_end = fragment_base + rel_end;
            let token_type = source.token_type();

            if options.merge_by_attributes
                && let Some(last) = pieces.last_mut()
                && last.end >= frag_start
                && last.token_type == token_type
                && last.attributes == *source.attributes()
            {
                // Contiguous and identically tagged: extend the previous piece in place.
                last.end = frag_end;
            } else {
                pieces.push(Piece::new(
                    frag_start,
                    frag_end,
                    token_type,
                    source.attributes().clone(),
                ));
            }
        }

        // The annotation extends past this range: move to the next range without consuming
        // the annotation, so it can contribute there as well.
        if range.end < source.end() {
            fragment_base += range.len() + 1 + options.additional_offset;
            range_index += 1;
            continue;
        }

        source.advance();
    }

    pieces
}
