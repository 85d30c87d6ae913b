//! Randomized validation of floor seeking and cursor movement.
//!
//! Validation criteria:
//! 1. `floor_search` and `seek` agree with a linear-scan reference on random piece sequences.
//! 2. Cursor movement saturates at both sentinels and inverts away from them.
//! 3. A cursor is itself an annotation source: a fragmented view can be fragmented again.

use fragview_core::{
    FragmentRange, Piece, PieceStore, StyleAttributes, Token, TokenList, TokenTypeId,
    TranslateOptions, floor_search,
};
use rand::Rng;

fn random_pieces(rng: &mut impl Rng, count: usize) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(count);
    let mut start = 0usize;
    for i in 0..count {
        start += rng.gen_range(1..8);
        let len = rng.gen_range(0..5);
        pieces.push(Piece::new(
            start,
            start + len,
            TokenTypeId::new((i % 3) as u32),
            StyleAttributes::plain(),
        ));
        start += len;
    }
    pieces
}

fn reference_floor(pieces: &[Piece], offset: usize) -> Option<usize> {
    pieces.iter().rposition(|piece| piece.start <= offset)
}

#[test]
fn test_floor_search_matches_linear_reference() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let count = rng.gen_range(0..48);
        let pieces = random_pieces(&mut rng, count);
        let max_offset = pieces.last().map(|piece| piece.end + 4).unwrap_or(4);

        for offset in 0..=max_offset {
            assert_eq!(
                floor_search(&pieces, offset),
                reference_floor(&pieces, offset),
                "offset {} over {:?}",
                offset,
                pieces
            );
        }
    }
}

#[test]
fn test_seek_floor_property() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let count = rng.gen_range(1..32);
        let pieces = random_pieces(&mut rng, count);
        let store = PieceStore::from_pieces(pieces.clone());
        let max_offset = pieces.last().map(|piece| piece.end + 4).unwrap_or(4);

        for offset in 0..=max_offset {
            let cursor = store.seek(offset);
            let floor_start = pieces
                .iter()
                .filter(|piece| piece.start <= offset)
                .map(|piece| piece.start)
                .max();

            match floor_start {
                Some(floor_start) => {
                    assert_eq!(cursor.current().unwrap().start, floor_start);
                }
                None => {
                    assert!(cursor.at_end());
                    assert!(cursor.current().is_err());
                }
            }
        }
    }
}

#[test]
fn test_seek_is_idempotent() {
    let mut rng = rand::thread_rng();
    let pieces = random_pieces(&mut rng, 24);
    let store = PieceStore::from_pieces(pieces.clone());
    let max_offset = pieces.last().map(|piece| piece.end + 2).unwrap_or(2);

    for offset in 0..=max_offset {
        assert_eq!(store.seek(offset).index(), store.seek(offset).index());
    }
}

#[test]
fn test_advance_then_retreat_returns() {
    let mut rng = rand::thread_rng();
    let pieces = random_pieces(&mut rng, 16);
    let store = PieceStore::from_pieces(pieces);

    for start_index in 0..store.len() {
        let mut cursor = store.seek(store.pieces()[start_index].start);
        assert_eq!(cursor.index(), Some(start_index));

        cursor.advance();
        cursor.retreat();
        assert_eq!(cursor.index(), Some(start_index));

        cursor.retreat();
        cursor.advance();
        assert_eq!(cursor.index(), Some(start_index));
    }
}

#[test]
fn test_cursor_saturates_at_sentinels() {
    let store = PieceStore::from_pieces(vec![
        Piece::new(2, 4, TokenTypeId::TEXT, StyleAttributes::plain()),
        Piece::new(5, 9, TokenTypeId::TEXT, StyleAttributes::plain()),
    ]);

    // Offset 0 precedes every piece: before-first sentinel.
    let mut cursor = store.seek(0);
    assert!(cursor.at_end());
    cursor.retreat();
    cursor.retreat();
    assert_eq!(cursor.index(), None);

    cursor.advance();
    assert_eq!(cursor.index(), Some(0));

    for _ in 0..5 {
        cursor.advance();
    }
    assert!(cursor.at_end());
    assert_eq!(cursor.index(), Some(2));
}

#[test]
fn test_empty_store_always_at_end() {
    let store = PieceStore::from_pieces(Vec::new());

    for offset in [0usize, 1, 100] {
        let mut cursor = store.seek(offset);
        assert!(cursor.at_end());
        assert!(cursor.current().is_err());
        cursor.advance();
        assert!(cursor.at_end());
    }
}

#[test]
fn test_fragment_a_fragmented_view() {
    // First pass: keep [0,4) and [6,10) of the original, producing pieces in a fragmented
    // space of 4 + 1 + 4 units.
    let mut source = TokenList::new(vec![
        Token::new(0, 5, TokenTypeId::new(1), StyleAttributes::single(1)),
        Token::new(5, 10, TokenTypeId::new(2), StyleAttributes::single(2)),
    ]);
    let first = PieceStore::build(
        &mut source,
        &[FragmentRange::new(0, 4), FragmentRange::new(6, 10)],
        TranslateOptions::default(),
    );
    assert_eq!(
        first
            .pieces()
            .iter()
            .map(|piece| (piece.start, piece.end))
            .collect::<Vec<_>>(),
        vec![(0, 4), (5, 9)]
    );

    // Second pass: the cursor over the first store is itself an annotation source; keep
    // [2,7) of the fragmented space.
    let mut cursor = first.cursor();
    let second = PieceStore::build(
        &mut cursor,
        &[FragmentRange::new(2, 7)],
        TranslateOptions::default(),
    );

    assert_eq!(
        second
            .pieces()
            .iter()
            .map(|piece| (piece.start, piece.end, piece.token_type))
            .collect::<Vec<_>>(),
        vec![
            (0, 2, TokenTypeId::new(1)),
            (3, 5, TokenTypeId::new(2)),
        ]
    );
}
