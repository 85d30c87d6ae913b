//! Tokenize a JSON snippet, keep two ranges of it, and walk the fragmented pieces.
//!
//! Run with: cargo run --example json_fragments

use fragview_core::{FragmentRange, PieceStore, TranslateOptions, fragment_text};
use fragview_highlight_simple::{JsonTokenStyles, RegexTokenizer};

fn main() {
    let text = r#"{ "name": "fragview", "deps": 0, "stable": true }"#;

    let tokenizer = RegexTokenizer::json_default(JsonTokenStyles::default()).expect("grammar");
    let mut source = tokenizer.tokenize(text);

    // Keep the first pair (with its comma) and the last pair (with its closing space).
    let ranges = [FragmentRange::new(2, 21), FragmentRange::new(33, 48)];
    let options = TranslateOptions::default();
    let store = PieceStore::try_build(&mut source, &ranges, options).expect("ranges");

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

    // Floor seek: what covers fragmented offset 20, the start of the second fragment?
    let cursor = store.seek(20);
    if let Ok(piece) = cursor.current() {
        println!();
        println!(
            "offset 20 is covered by [{}, {}) type={:?}",
            piece.start, piece.end, piece.token_type
        );
    }
}
