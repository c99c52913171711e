//! The scanning primitive.
//!
//! Walks a buffer with an ordered [`PatternTable`] and emits one [`Token`] per
//! match. At every cursor position the rules are tried in table order and the
//! first one that matches *at the cursor* wins; this is precedence-by-order,
//! not longest-match.
//!
//! ```text
//! cursor ─▶ "0xFFZZ rest"
//!            rule 0  HEX   ^(?i)0x[a-f0-9]+\b   ✗ (no word boundary after FF)
//!            rule 1  WS    ^\s+                 ✗
//!            rule 2  WORD  ^[\p{L}\p{N}_]+      ✓ "0xFFZZ"  → emit, advance 6
//! ```
//!
//! Scanning stops with [`ScanError::NoMatch`] when no rule matches at the
//! cursor. Tables built by [`DialectBuilder`](crate::DialectBuilder) always end
//! with the catch-all fallback, so that only happens for hand-built tables.
//!
//! All built-in patterns are `^`-anchored and compiled by the `regex` crate,
//! which guarantees linear-time matching.

use crate::{ScanError, Tag, Token, TokenSequence};
use regex::Regex;

/// A pattern anchored at the scan cursor, paired with the tag it assigns.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    tag: Tag,
}

impl PatternRule {
    /// `Regex` clones share the compiled program, so rules built from the same
    /// static pattern stay byte-identical across dialects.
    pub fn new(pattern: &Regex, tag: Tag) -> Self {
        PatternRule { pattern: pattern.clone(), tag }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Length of the match starting exactly at the beginning of `rest`, if any.
    ///
    /// Empty matches are rejected so the cursor always advances.
    fn match_len(&self, rest: &str) -> Option<usize> {
        let m = self.pattern.find(rest)?;
        (m.start() == 0 && m.end() > 0).then_some(m.end())
    }
}

/// Ordered rules; the first rule that matches at the cursor wins.
pub type PatternTable = Vec<PatternRule>;

/// What a classification request can hand to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Source text.
    Text(String),
    /// Raw bytes, which must be valid UTF-8.
    Bytes(Vec<u8>),
    /// A sequence that has already been scanned; passed through for re-tagging.
    Tokens(TokenSequence),
}

impl Input {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Text(_) => "text",
            Input::Bytes(_) => "bytes",
            Input::Tokens(_) => "tokens",
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Input::Bytes(value)
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl From<TokenSequence> for Input {
    fn from(value: TokenSequence) -> Self {
        Input::Tokens(value)
    }
}

/// Tokenize `input` with `table`.
pub fn scan(table: &[PatternRule], input: &str) -> Result<TokenSequence, ScanError> {
    let mut tokens = TokenSequence::empty();
    let mut cursor = 0;

    while cursor < input.len() {
        let rest = &input[cursor..];
        let hit = table.iter().find_map(|rule| rule.match_len(rest).map(|len| (rule.tag, len)));

        let Some((tag, len)) = hit else {
            return Err(ScanError::NoMatch { offset: cursor });
        };

        tokens.push(Token::new(tag, &rest[..len]));
        cursor += len;
    }

    tracing::debug!(tokens = tokens.len(), bytes = input.len(), "scan complete");
    Ok(tokens)
}

/// Tokenize any supported [`Input`] shape.
///
/// `Tokens` are returned untouched so the caller can re-run reclassification
/// over an existing sequence.
pub fn scan_input(table: &[PatternRule], input: Input) -> Result<TokenSequence, ScanError> {
    match input {
        Input::Text(text) => scan(table, &text),
        Input::Bytes(bytes) => {
            let text = std::str::from_utf8(&bytes).map_err(|err| ScanError::InvalidUtf8 { offset: err.valid_up_to() })?;
            scan(table, text)
        }
        Input::Tokens(tokens) => Ok(tokens),
    }
}
