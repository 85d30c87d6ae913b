#![warn(missing_docs)]
//! Fragview Core - Fragment-Remapping Piece Table for Annotated Text
//!
//! # Overview
//!
//! `fragview-core` builds a seekable, annotated view over selected ranges of a document. Given
//! a stream of style/token annotations in the original document's coordinates and an ordered
//! list of disjoint ranges to keep, it concatenates the kept ranges into a synthetic
//! "fragmented" coordinate space (one separator unit between consecutive ranges) and
//! re-expresses every annotation there. The result is an immutable piece sequence with
//! random-access floor seeking and cheap forward/backward cursors, suitable for diff previews
//! and other collapsed renderings built once per query.
//!
//! # Core Features
//!
//! - **Linear translation**: one pass over annotations and ranges, O(annotations + ranges)
//! - **Attribute merging**: optional coalescing of contiguous, identically-tagged pieces
//! - **Floor seek**: binary search for the piece covering or preceding any offset
//! - **Cheap cursors**: an index plus a shared immutable sequence, never invalidated
//! - **Composability**: a cursor is itself an annotation source and can be translated again
//!
//! # Data Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  TokenSource (external lexer/highlighter)   │  ← Original coordinates
//! ├─────────────────────────────────────────────┤
//! │  translate (range remapping + merging)      │  ← One eager pass
//! ├─────────────────────────────────────────────┤
//! │  PieceStore (immutable piece sequence)      │  ← Fragmented coordinates
//! ├─────────────────────────────────────────────┤
//! │  PieceCursor (seek / advance / retreat)     │  ← Host queries
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use fragview_core::{
//!     FragmentRange, PieceStore, StyleAttributes, Token, TokenList, TokenTypeId,
//!     TranslateOptions,
//! };
//!
//! // Two annotations in original coordinates...
//! let mut source = TokenList::new(vec![
//!     Token::new(0, 5, TokenTypeId::new(1), StyleAttributes::single(10)),
//!     Token::new(5, 10, TokenTypeId::new(2), StyleAttributes::single(20)),
//! ]);
//!
//! // ...seen through two kept ranges.
//! let ranges = [FragmentRange::new(0, 3), FragmentRange::new(5, 8)];
//! let store = PieceStore::build(&mut source, &ranges, TranslateOptions::default());
//!
//! // The second range's image starts one separator unit past the first: 3 + 1 = 4.
//! let cursor = store.seek(4);
//! assert_eq!(cursor.current().unwrap().start, 4);
//! assert_eq!(cursor.current().unwrap().token_type, TokenTypeId::new(2));
//! ```
//!
//! # Module Description
//!
//! - [`tokens`] - annotation data model and the [`TokenSource`] contract
//! - [`ranges`] - kept ranges and their strict validation
//! - [`translate`](mod@translate) - the range-to-fragment remapping pass
//! - [`pieces`] - piece storage, floor search, and cursors
//! - [`text`] - fragmented preview text helpers
//!
//! # Coordinate Conventions
//!
//! All offsets are character offsets (Unicode scalar values), all intervals half-open
//! `[start, end)`. A fragmented offset falls either inside exactly one kept range's image or
//! in a separator gap that no piece covers; floor seeking resolves gap offsets to the piece on
//! their left.
//!
//! # Scope
//!
//! The crate is headless and single-shot: it holds no document and performs no lexing of its
//! own. Hosts rebuild the store when the underlying ranges or annotations change, the same way
//! they would rebuild a diff preview.

pub mod pieces;
pub mod ranges;
pub mod text;
pub mod tokens;
pub mod translate;

pub use pieces::{CursorError, Piece, PieceCursor, PieceStore, floor_search};
pub use ranges::{FragmentRange, RangeError, validate_ranges};
pub use text::{fragment_len, fragment_text, gap_width};
pub use tokens::{StyleAttributes, StyleId, Token, TokenList, TokenSource, TokenTypeId};
pub use translate::{TranslateOptions, translate};
