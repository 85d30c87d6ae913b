//! Build a fragmented view over a hand-tokenized document and walk its pieces.
//!
//! Run with: cargo run --example fragment_pieces

use fragview_core::{
    FragmentRange, PieceStore, StyleAttributes, Token, TokenList, TokenTypeId, TranslateOptions,
    fragment_text,
};

const TYPE_KEYWORD: TokenTypeId = TokenTypeId::new(1);
const TYPE_IDENT: TokenTypeId = TokenTypeId::new(2);
const TYPE_NUMBER: TokenTypeId = TokenTypeId::new(3);

fn main() {
    let text = "let alpha = 1;\nlet beta = 22;\n";
    let tokens = vec![
        Token::new(0, 3, TYPE_KEYWORD, StyleAttributes::single(1)),
        Token::new(3, 4, TokenTypeId::TEXT, StyleAttributes::plain()),
        Token::new(4, 9, TYPE_IDENT, StyleAttributes::single(2)),
        Token::new(9, 12, TokenTypeId::TEXT, StyleAttributes::plain()),
        Token::new(12, 13, TYPE_NUMBER, StyleAttributes::single(3)),
        Token::new(13, 15, TokenTypeId::TEXT, StyleAttributes::plain()),
        Token::new(15, 18, TYPE_KEYWORD, StyleAttributes::single(1)),
        Token::new(18, 19, TokenTypeId::TEXT, StyleAttributes::plain()),
        Token::new(19, 23, TYPE_IDENT, StyleAttributes::single(2)),
        Token::new(23, 26, TokenTypeId::TEXT, StyleAttributes::plain()),
        Token::new(26, 28, TYPE_NUMBER, StyleAttributes::single(3)),
        Token::new(28, 30, TokenTypeId::TEXT, StyleAttributes::plain()),
    ];

    // Keep both assignments, dropping the `let ` prefixes.
    let ranges = [FragmentRange::new(4, 14), FragmentRange::new(19, 29)];
    let options = TranslateOptions::default();

    let mut source = TokenList::new(tokens);
    let store = PieceStore::build(&mut source, &ranges, options);

    println!("fragmented view:");
    println!("{}", fragment_text(text, &ranges, options.additional_offset));
    println!();

    println!("pieces:");
    let mut cursor = store.cursor();
    while !cursor.at_end() {
        if let Ok(piece) = cursor.current() {
            println!(
                "  [{:>2}, {:>2}) type={:?} styles={:?}",
                piece.start, piece.end, piece.token_type, piece.attributes.styles
            );
        }
        cursor.advance();
    }

    // Floor seek: which piece covers fragmented offset 13?
    let cursor = store.seek(13);
    if let Ok(piece) = cursor.current() {
        println!();
        println!(
            "offset 13 is covered by [{}, {}) type={:?}",
            piece.start, piece.end, piece.token_type
        );
    }
}
