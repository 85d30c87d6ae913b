//! Piece storage and seekable cursors over the fragmented view.
//!
//! A [`PieceStore`] owns the immutable piece sequence produced by
//! [`translate`](crate::translate::translate) and hands out [`PieceCursor`]s: cheap value
//! cursors that seek by offset, move forward and backward with saturation, and never get
//! invalidated. A cursor is itself a [`TokenSource`], so a fragmented view can feed another
//! translation pass.

use std::sync::Arc;

use crate::ranges::{FragmentRange, RangeError, validate_ranges};
use crate::tokens::{StyleAttributes, TokenSource, TokenTypeId};
use crate::translate::{TranslateOptions, translate};

/// One annotated span of the fragmented coordinate space, as a half-open `[start, end)`
/// character range.
///
/// Zero-length pieces are legal; they arise when an annotation abuts a kept range's boundary
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Start offset in fragmented coordinates (inclusive).
    pub start: usize,
    /// End offset in fragmented coordinates (exclusive).
    pub end: usize,
    /// Lexical class of the originating annotation.
    pub token_type: TokenTypeId,
    /// Rendering attributes of the originating annotation.
    pub attributes: StyleAttributes,
}

impl Piece {
    /// Create a new piece.
    pub fn new(
        start: usize,
        end: usize,
        token_type: TokenTypeId,
        attributes: StyleAttributes,
    ) -> Self {
        Self {
            start,
            end,
            token_type,
            attributes,
        }
    }

    /// Length of the piece in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for a zero-length piece.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Cursor errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor sits outside the piece sequence (before the first piece or at the end).
    OutOfRange {
        /// Cursor position; `None` is the before-first sentinel.
        index: Option<usize>,
        /// Number of pieces in the owning store.
        len: usize,
    },
}

impl std::fmt::Display for CursorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorError::OutOfRange {
                index: Some(index),
                len,
            } => {
                write!(f, "cursor out of range: index {} of {} pieces", index, len)
            }
            CursorError::OutOfRange { index: None, len } => {
                write!(f, "cursor out of range: before the first of {} pieces", len)
            }
        }
    }
}

impl std::error::Error for CursorError {}

/// Floor search over a piece sequence ordered by `start`.
///
/// Returns the index of the piece with the greatest `start` not exceeding `offset`, or `None`
/// when `offset` precedes every piece (or `pieces` is empty).
pub fn floor_search(pieces: &[Piece], offset: usize) -> Option<usize> {
    match pieces.binary_search_by_key(&offset, |piece| piece.start) {
        Ok(index) => Some(index),
        Err(0) => None,
        Err(insert_pos) => Some(insert_pos - 1),
    }
}

/// The immutable piece sequence of one fragmented view.
///
/// The sequence is shared with every cursor through an `Arc`, so cursors stay valid for as
/// long as they live and may be created and discarded freely.
#[derive(Debug, Clone)]
pub struct PieceStore {
    pieces: Arc<[Piece]>,
}

impl PieceStore {
    /// Wrap an already-translated piece sequence.
    ///
    /// `pieces` must be ordered by `start`, as [`translate`] produces them.
    pub fn from_pieces(pieces: Vec<Piece>) -> Self {
        Self {
            pieces: pieces.into(),
        }
    }

    /// Translate `source` through `ranges` and store the result.
    ///
    /// Like [`translate`], this does not validate `ranges`; see [`PieceStore::try_build`].
    pub fn build<S: TokenSource>(
        source: &mut S,
        ranges: &[FragmentRange],
        options: TranslateOptions,
    ) -> Self {
        Self::from_pieces(translate(source, ranges, options))
    }

    /// Validate `ranges`, then translate `source` through them and store the result.
    pub fn try_build<S: TokenSource>(
        source: &mut S,
        ranges: &[FragmentRange],
        options: TranslateOptions,
    ) -> Result<Self, RangeError> {
        validate_ranges(ranges)?;
        Ok(Self::build(source, ranges, options))
    }

    /// The stored pieces, ordered by `start`.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of stored pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` when the store holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Position a cursor at the piece whose `start` is the greatest value not exceeding
    /// `offset`.
    ///
    /// When `offset` precedes every piece (or the store is empty), the cursor sits at the
    /// before-first sentinel: [`PieceCursor::at_end`] reports `true` there, and a subsequent
    /// [`PieceCursor::advance`] moves it onto the first piece.
    pub fn seek(&self, offset: usize) -> PieceCursor {
        PieceCursor {
            pieces: Arc::clone(&self.pieces),
            index: floor_search(&self.pieces, offset),
        }
    }

    /// A cursor positioned on the first piece (already at the end when the store is empty).
    pub fn cursor(&self) -> PieceCursor {
        PieceCursor {
            pieces: Arc::clone(&self.pieces),
            index: Some(0),
        }
    }
}

/// A saturating two-way cursor over a [`PieceStore`]'s sequence.
///
/// The position is either on a piece, at the before-first sentinel (`index() == None`), or at
/// the end (`index() == Some(len)`); [`PieceCursor::at_end`] reports `true` for both
/// sentinels. Movement saturates at the sentinels instead of wrapping or failing.
#[derive(Debug, Clone)]
pub struct PieceCursor {
    pieces: Arc<[Piece]>,
    index: Option<usize>,
}

impl PieceCursor {
    /// Returns `true` when the cursor is not on a piece.
    pub fn at_end(&self) -> bool {
        match self.index {
            Some(index) => index >= self.pieces.len(),
            None => true,
        }
    }

    /// Move one piece forward, saturating at the end position.
    ///
    /// From the before-first sentinel this lands on the first piece.
    pub fn advance(&mut self) {
        self.index = match self.index {
            None => Some(0),
            Some(index) if index < self.pieces.len() => Some(index + 1),
            Some(index) => Some(index),
        };
    }

    /// Move one piece backward, saturating at the before-first sentinel.
    pub fn retreat(&mut self) {
        self.index = match self.index {
            Some(index) if index > 0 => Some(index - 1),
            _ => None,
        };
    }

    /// The piece under the cursor, or [`CursorError::OutOfRange`] at either sentinel.
    pub fn current(&self) -> Result<&Piece, CursorError> {
        match self.index {
            Some(index) if index < self.pieces.len() => Ok(&self.pieces[index]),
            _ => Err(CursorError::OutOfRange {
                index: self.index,
                len: self.pieces.len(),
            }),
        }
    }

    /// Current position; `None` is the before-first sentinel, `Some(len)` the end.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The piece under the cursor, for [`TokenSource`] reads.
    ///
    /// Panics at either sentinel, like any concrete source read past its bounds.
    fn current_piece(&self) -> &Piece {
        match self.current() {
            Ok(piece) => piece,
            Err(_) => panic!("cursor read while not on a piece"),
        }
    }
}

impl TokenSource for PieceCursor {
    fn at_end(&self) -> bool {
        PieceCursor::at_end(self)
    }

    fn start(&self) -> usize {
        self.current_piece().start
    }

    fn end(&self) -> usize {
        self.current_piece().end
    }

    fn token_type(&self) -> TokenTypeId {
        self.current_piece().token_type
    }

    fn attributes(&self) -> &StyleAttributes {
        &self.current_piece().attributes
    }

    fn advance(&mut self) {
        PieceCursor::advance(self);
    }
}
