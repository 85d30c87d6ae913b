//! Token data model and the token-source contract.
//!
//! A token is one styled annotation over the **original** document, expressed in character
//! offsets (Unicode scalar values). Tokens are produced by an external lexer/highlighter and
//! consumed through the [`TokenSource`] cursor trait; this crate never tokenizes anything
//! itself, it only remaps.

/// Style ID type
///
/// Style ids are opaque identifiers. The host theme layer is expected to map them to actual
/// colors/decorations.
pub type StyleId = u32;

/// Token type identifier
///
/// Identifies the lexical class of a token (keyword, string, comment, ...). Ids are opaque to
/// this crate; token producers define their own numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenTypeId(pub u32);

impl TokenTypeId {
    /// Plain text with no specific lexical class.
    pub const TEXT: Self = Self(0);

    /// Create a token type id from a raw numeric identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Style attributes carried by a token or piece.
///
/// Attributes are an ordered list of style ids (application order matters to the renderer), and
/// equality is positional. The merge rule of
/// [`translate`](crate::translate::translate) compares attribute values with `==`, so producers
/// that want merging to trigger must emit attribute lists in a consistent order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StyleAttributes {
    /// Style ids in application order.
    pub styles: Vec<StyleId>,
}

impl StyleAttributes {
    /// Create attributes from an explicit style list.
    pub fn new(styles: Vec<StyleId>) -> Self {
        Self { styles }
    }

    /// Create attributes carrying a single style id.
    pub fn single(style: StyleId) -> Self {
        Self {
            styles: vec![style],
        }
    }

    /// Attributes with no styles applied.
    pub const fn plain() -> Self {
        Self { styles: Vec::new() }
    }

    /// Returns `true` when no styles are applied.
    pub fn is_plain(&self) -> bool {
        self.styles.is_empty()
    }
}

/// One styled annotation over the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Start character offset in the original document (inclusive).
    pub start: usize,
    /// End character offset in the original document (exclusive). Well-formed producers emit
    /// `start < end`.
    pub end: usize,
    /// Lexical class of the token.
    pub token_type: TokenTypeId,
    /// Style attributes applied to the token.
    pub attributes: StyleAttributes,
}

impl Token {
    /// Create a new token.
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

    /// Length of the token in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for a zero-length token.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A forward cursor over an ordered token stream.
///
/// This is the seam between the remapping core and any concrete tokenizer: the core depends only
/// on this trait. Implementations yield tokens in non-decreasing `start` order over the original
/// document.
///
/// The accessors (`start`, `end`, `token_type`, `attributes`) read the *current* token and must
/// not be called while [`at_end`](TokenSource::at_end) is true; implementations are allowed to
/// panic on that contract violation.
pub trait TokenSource {
    /// Returns `true` once the cursor has moved past the last token.
    fn at_end(&self) -> bool;

    /// Start character offset of the current token (inclusive).
    fn start(&self) -> usize;

    /// End character offset of the current token (exclusive).
    fn end(&self) -> usize;

    /// Lexical class of the current token.
    fn token_type(&self) -> TokenTypeId;

    /// Style attributes of the current token.
    fn attributes(&self) -> &StyleAttributes;

    /// Move to the next token.
    fn advance(&mut self);
}

/// A [`TokenSource`] backed by an in-memory token vector.
///
/// Hosts that already hold a complete token list use this adapter directly; it is also the
/// natural test vehicle.
#[derive(Debug, Clone)]
pub struct TokenList {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenList {
    /// Create a source positioned at the first token.
    ///
    /// Tokens are expected in non-decreasing `start` order; this is not checked.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// All tokens, regardless of the cursor position.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Current cursor position (an index into [`tokens`](TokenList::tokens)).
    pub fn position(&self) -> usize {
        self.index
    }
}

impl TokenSource for TokenList {
    fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn start(&self) -> usize {
        self.tokens[self.index].start
    }

    fn end(&self) -> usize {
        self.tokens[self.index].end
    }

    fn token_type(&self) -> TokenTypeId {
        self.tokens[self.index].token_type
    }

    fn attributes(&self) -> &StyleAttributes {
        &self.tokens[self.index].attributes
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }
}
