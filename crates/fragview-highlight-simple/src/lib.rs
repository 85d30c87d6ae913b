//! `fragview-highlight-simple` - Simple (regex-based) annotation sources for `fragview-core`.
//!
//! This crate is intended for lightweight formats (JSON/INI/etc.) where a full lexer or LSP
//! integration is unnecessary. [`RegexTokenizer::tokenize`] produces the contiguous, ordered
//! annotation stream that [`fragview_core::translate()`] consumes: rule matches claim their
//! spans (first match wins on overlap) and everything in between becomes plain text tokens.

use fragview_core::{StyleAttributes, StyleId, Token, TokenList, TokenTypeId};
use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from building a tokenizer grammar.
pub enum GrammarError {
    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// A rule pattern failed to compile.
    RegexCompile {
        /// The offending pattern.
        pattern: String,
        /// The error message reported by the regex engine.
        message: String,
    },
}

/// A single regex tokenization rule.
#[derive(Debug, Clone)]
pub struct TokenRule {
    regex: Regex,
    token_type: TokenTypeId,
    attributes: StyleAttributes,
    capture_group: Option<usize>,
}

impl TokenRule {
    /// Compile a rule from a pattern.
    ///
    /// Patterns are compiled in multi-line mode, so `^`/`$` anchor at line boundaries.
    pub fn new(
        pattern: &str,
        token_type: TokenTypeId,
        attributes: StyleAttributes,
    ) -> Result<Self, GrammarError> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|e| GrammarError::RegexCompile {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            regex,
            token_type,
            attributes,
            capture_group: None,
        })
    }

    /// Tokenize only a capture group of each match.
    ///
    /// Example (INI key):
    /// - pattern: `^[ \t]*([^=\s]+)[ \t]*=`
    /// - capture_group: `1` (the key)
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    pub fn token_type(&self) -> TokenTypeId {
        self.token_type
    }

    pub fn attributes(&self) -> &StyleAttributes {
        &self.attributes
    }
}

/// A simple regex-based tokenizer.
///
/// Designed for simple formats (JSON/INI/etc.). It is *not* intended to be a full lexer.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    rules: Vec<TokenRule>,
}

impl RegexTokenizer {
    pub fn new(rules: Vec<TokenRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// Run all rules over `text` and return a contiguous annotation stream (char offsets).
    ///
    /// Rules claim matches in rule order; a match overlapping an already-claimed span is
    /// dropped, so earlier rules win. Unclaimed stretches become
    /// [`TokenTypeId::TEXT`]/plain tokens, and the stream covers the whole text with no holes.
    pub fn tokenize(&self, text: &str) -> TokenList {
        let mut claimed: Vec<Token> = Vec::new();

        for rule in &self.rules {
            if let Some(group) = rule.capture_group {
                for caps in rule.regex.captures_iter(text) {
                    let Some(m) = caps.get(group) else {
                        continue;
                    };
                    claim_match(&mut claimed, text, m.start(), m.end(), rule);
                }
            } else {
                for m in rule.regex.find_iter(text) {
                    claim_match(&mut claimed, text, m.start(), m.end(), rule);
                }
            }
        }

        claimed.sort_by_key(|token| token.start);

        // Fill the stretches between claimed matches with plain text tokens.
        let char_count = text.chars().count();
        let mut tokens = Vec::with_capacity(claimed.len() * 2 + 1);
        let mut cursor = 0usize;
        for token in claimed {
            if cursor < token.start {
                tokens.push(Token::new(
                    cursor,
                    token.start,
                    TokenTypeId::TEXT,
                    StyleAttributes::plain(),
                ));
            }
            cursor = token.end;
            tokens.push(token);
        }
        if cursor < char_count {
            tokens.push(Token::new(
                cursor,
                char_count,
                TokenTypeId::TEXT,
                StyleAttributes::plain(),
            ));
        }

        TokenList::new(tokens)
    }

    /// A small default JSON grammar (strings, numbers, booleans, null).
    ///
    /// Note: a real lexer is preferred for code, but this is handy for simple formats.
    pub fn json_default(styles: JsonTokenStyles) -> Result<Self, GrammarError> {
        Ok(Self::new(vec![
            // JSON string (single-line, handles escapes)
            TokenRule::new(
                r#""(?:\\.|[^"\\])*""#,
                TOKEN_STRING,
                StyleAttributes::single(styles.string),
            )?,
            // JSON number
            TokenRule::new(
                r#"-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?"#,
                TOKEN_NUMBER,
                StyleAttributes::single(styles.number),
            )?,
            // JSON boolean / null
            TokenRule::new(
                r#"\b(?:true|false)\b"#,
                TOKEN_BOOLEAN,
                StyleAttributes::single(styles.boolean),
            )?,
            TokenRule::new(
                r#"\bnull\b"#,
                TOKEN_NULL,
                StyleAttributes::single(styles.null),
            )?,
        ]))
    }

    /// A small default INI grammar (section, key, comment).
    pub fn ini_default(styles: IniTokenStyles) -> Result<Self, GrammarError> {
        Ok(Self::new(vec![
            // Section header: [section]
            TokenRule::new(
                r#"^[ \t]*\[([^\]]+)\][ \t]*$"#,
                TOKEN_SECTION,
                StyleAttributes::single(styles.section),
            )?
            .with_capture_group(1),
            // Key: key = value
            TokenRule::new(
                r#"^[ \t]*([^=\s]+)[ \t]*="#,
                TOKEN_KEY,
                StyleAttributes::single(styles.key),
            )?
            .with_capture_group(1),
            // Comment: ;... or #...
            TokenRule::new(
                r#"^[ \t]*[;#].*$"#,
                TOKEN_COMMENT,
                StyleAttributes::single(styles.comment),
            )?,
        ]))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonTokenStyles {
    pub string: StyleId,
    pub number: StyleId,
    pub boolean: StyleId,
    pub null: StyleId,
}

impl Default for JsonTokenStyles {
    fn default() -> Self {
        Self {
            string: SIMPLE_STYLE_STRING,
            number: SIMPLE_STYLE_NUMBER,
            boolean: SIMPLE_STYLE_BOOLEAN,
            null: SIMPLE_STYLE_NULL,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IniTokenStyles {
    pub section: StyleId,
    pub key: StyleId,
    pub comment: StyleId,
}

impl Default for IniTokenStyles {
    fn default() -> Self {
        Self {
            section: SIMPLE_STYLE_SECTION,
            key: SIMPLE_STYLE_KEY,
            comment: SIMPLE_STYLE_COMMENT,
        }
    }
}

/// `TokenTypeId` constants produced by the default grammars.
pub const TOKEN_STRING: TokenTypeId = TokenTypeId::new(1);
pub const TOKEN_NUMBER: TokenTypeId = TokenTypeId::new(2);
pub const TOKEN_BOOLEAN: TokenTypeId = TokenTypeId::new(3);
pub const TOKEN_NULL: TokenTypeId = TokenTypeId::new(4);
pub const TOKEN_SECTION: TokenTypeId = TokenTypeId::new(5);
pub const TOKEN_KEY: TokenTypeId = TokenTypeId::new(6);
pub const TOKEN_COMMENT: TokenTypeId = TokenTypeId::new(7);

/// Default `StyleId` constants for `RegexTokenizer`-based grammars.
///
/// These are only identifiers. UI/theme layer is expected to map them to actual colors.
pub const SIMPLE_STYLE_STRING: StyleId = 0x0200_0001;
pub const SIMPLE_STYLE_NUMBER: StyleId = 0x0200_0002;
pub const SIMPLE_STYLE_BOOLEAN: StyleId = 0x0200_0003;
pub const SIMPLE_STYLE_NULL: StyleId = 0x0200_0004;
pub const SIMPLE_STYLE_SECTION: StyleId = 0x0200_0010;
pub const SIMPLE_STYLE_KEY: StyleId = 0x0200_0011;
pub const SIMPLE_STYLE_COMMENT: StyleId = 0x0200_0012;

fn claim_match(
    claimed: &mut Vec<Token>,
    text: &str,
    match_start_byte: usize,
    match_end_byte: usize,
    rule: &TokenRule,
) {
    let Some(token) = token_from_match(
        text,
        match_start_byte,
        match_end_byte,
        rule.token_type,
        &rule.attributes,
    ) else {
        return;
    };

    let overlaps = claimed
        .iter()
        .any(|other| other.start < token.end && token.start < other.end);
    if !overlaps {
        claimed.push(token);
    }
}

fn token_from_match(
    text: &str,
    match_start_byte: usize,
    match_end_byte: usize,
    token_type: TokenTypeId,
    attributes: &StyleAttributes,
) -> Option<Token> {
    if match_start_byte >= match_end_byte || match_end_byte > text.len() {
        return None;
    }

    let start = text[..match_start_byte].chars().count();
    let end = start + text[match_start_byte..match_end_byte].chars().count();
    if start >= end {
        return None;
    }

    Some(Token::new(start, end, token_type, attributes.clone()))
}
