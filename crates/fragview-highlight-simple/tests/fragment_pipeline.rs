//! End-to-end pipeline: tokenize, translate through kept ranges, seek.

use fragview_core::{
    FragmentRange, PieceStore, TokenTypeId, TranslateOptions, fragment_len, fragment_text,
};
use fragview_highlight_simple::{JsonTokenStyles, RegexTokenizer, TOKEN_NUMBER, TOKEN_STRING};

fn slice(preview: &str, start: usize, end: usize) -> String {
    preview.chars().skip(start).take(end - start).collect()
}

#[test]
fn test_json_fragment_pipeline() {
    let text = r#"{"name": "frag", "count": 42}"#;
    let tokenizer = RegexTokenizer::json_default(JsonTokenStyles::default()).unwrap();
    let mut source = tokenizer.tokenize(text);

    // Keep the first key/value pair and the bare number.
    let ranges = [FragmentRange::new(1, 15), FragmentRange::new(26, 28)];
    let store = PieceStore::try_build(&mut source, &ranges, TranslateOptions::default()).unwrap();

    let preview = fragment_text(text, &ranges, 0);
    assert_eq!(preview, "\"name\": \"frag\"\n42");
    assert_eq!(preview.chars().count(), fragment_len(&ranges, 0));

    for pair in store.pieces().windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }

    // The value string lands at fragmented offset 8.
    let cursor = store.seek(8);
    let piece = cursor.current().unwrap();
    assert_eq!(piece.token_type, TOKEN_STRING);
    assert_eq!((piece.start, piece.end), (8, 14));
    assert_eq!(slice(&preview, piece.start, piece.end), "\"frag\"");

    // Offset 16 sits inside the number after the separator gap.
    let cursor = store.seek(16);
    let piece = cursor.current().unwrap();
    assert_eq!(piece.token_type, TOKEN_NUMBER);
    assert_eq!((piece.start, piece.end), (15, 17));
    assert_eq!(slice(&preview, piece.start, piece.end), "42");

    // Walking forward from the start visits every piece in order.
    let mut cursor = store.cursor();
    let mut visited = 0;
    while !cursor.at_end() {
        visited += 1;
        cursor.advance();
    }
    assert_eq!(visited, store.len());
}

#[test]
fn test_pipeline_merges_identical_adjacent_tokens() {
    // Two empty strings back to back tokenize into adjacent, identically-tagged tokens.
    let text = "\"\"\"\"";
    let tokenizer = RegexTokenizer::json_default(JsonTokenStyles::default()).unwrap();

    let mut source = tokenizer.tokenize(text);
    let merged = PieceStore::build(
        &mut source,
        &[FragmentRange::new(0, 4)],
        TranslateOptions::default().with_merge_by_attributes(true),
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(
        (merged.pieces()[0].start, merged.pieces()[0].end),
        (0, 4)
    );
    assert_eq!(merged.pieces()[0].token_type, TOKEN_STRING);

    let mut source = tokenizer.tokenize(text);
    let unmerged = PieceStore::build(
        &mut source,
        &[FragmentRange::new(0, 4)],
        TranslateOptions::default(),
    );
    assert_eq!(unmerged.len(), 2);
}
