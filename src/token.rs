//! Tagged tokens.
//!
//! A [`Token`] is only a `(Tag, Lexeme)` pair. Its position in the input is
//! implicit: the start offset of the Nth token is the sum of the lexeme lengths
//! of the tokens before it.
//!
//! ```text
//! input:   "if (x)"
//! tokens:  [WORD "if"] [WHITESPACE " "] [CHAR "("] [WORD "x"] [CHAR ")"]
//! offsets:  0           2                3           4          5
//! ```
//!
//! Because lexemes are exact substrings, a [`TokenSequence`] can always
//! rebuild the buffer it came from (see [`TokenSequence::text`]).

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Classification label attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Comment,
    String,
    Docstring,
    Hex,
    Operator,
    Decorator,
    Symbol,
    Ident,
    Word,
    Keyword,
    BlockStart,
    BlockEnd,
    ArgStart,
    ArgEnd,
    ArrayStart,
    ArrayEnd,
    End,
    Whitespace,
    Char,
}

impl Tag {
    /// Upper-case label used in output, e.g. `"BLOCKSTART"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Comment => "COMMENT",
            Tag::String => "STRING",
            Tag::Docstring => "DOCSTRING",
            Tag::Hex => "HEX",
            Tag::Operator => "OPERATOR",
            Tag::Decorator => "DECORATOR",
            Tag::Symbol => "SYMBOL",
            Tag::Ident => "IDENT",
            Tag::Word => "WORD",
            Tag::Keyword => "KEYWORD",
            Tag::BlockStart => "BLOCKSTART",
            Tag::BlockEnd => "BLOCKEND",
            Tag::ArgStart => "ARGSTART",
            Tag::ArgEnd => "ARGEND",
            Tag::ArrayStart => "ARRAYSTART",
            Tag::ArrayEnd => "ARRAYEND",
            Tag::End => "END",
            Tag::Whitespace => "WHITESPACE",
            Tag::Char => "CHAR",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One classified slice of the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: Tag,
    pub lexeme: String,
}

impl Token {
    pub fn new(tag: Tag, lexeme: impl Into<String>) -> Self {
        Token { tag, lexeme: lexeme.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.tag, self.lexeme)
    }
}

/// Ordered tokens produced by one classification pass.
///
/// Derefs to `[Token]`, so tags can be rewritten in place while the length and
/// order stay fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Create an empty sequence.
    pub fn empty() -> Self {
        TokenSequence { tokens: Vec::new() }
    }

    /// Concatenate every lexeme in order.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.tokens.iter().map(|t| t.lexeme.len()).sum());
        for token in &self.tokens {
            out.push_str(&token.lexeme);
        }
        out
    }

    /// Iterate `(start_offset, token)` pairs, deriving offsets from lexeme lengths.
    pub fn with_offsets(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens.iter().scan(0usize, |offset, token| {
            let start = *offset;
            *offset += token.lexeme.len();
            Some((start, token))
        })
    }

    /// Tags only, in order.
    pub fn tags(&self) -> Vec<Tag> {
        self.tokens.iter().map(|t| t.tag).collect()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenSequence {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl DerefMut for TokenSequence {
    fn deref_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence { tokens }
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenSequence { tokens: iter.into_iter().collect() }
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
