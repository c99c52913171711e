//! Shared pattern fragments.
//!
//! Constructs that look the same in most dialects (comments, quoted strings,
//! hex literals, the usual operator soup) are defined once here. Every
//! [`Fragment`] resolves to a rule built from a single static `Regex`, so two
//! dialects that both use, say, [`Fragment::DoubleQuoted`] run exactly the same
//! compiled pattern.
//!
//! [`fallback`] is the generic tail appended to every table:
//!
//! ```text
//! WHITESPACE  ^\s+
//! WORD        ^[\p{L}\p{N}_]+
//! CHAR        ^(?s).            (always matches one character)
//! ```
//!
//! Because CHAR matches any single character, a table ending with the fallback
//! can tokenize every UTF-8 buffer.

use crate::{PatternRule, PatternTable};

/// Named, reusable pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// `0x1F`, case-insensitive, must end on a word boundary.
    HexNumber,
    /// `# to end of line`
    HashComment,
    /// `// to end of line`
    SlashComment,
    /// `/* ... */`, may span lines.
    BlockComment,
    /// `"..."` on one line, with backslash escapes.
    DoubleQuoted,
    /// `'...'` on one line, with backslash escapes.
    SingleQuoted,
    /// Assignment, comparison, arithmetic and bitwise operators, with their
    /// compound-assignment forms plus `++ -- && ||`.
    CommonOperators,
}

impl Fragment {
    pub const ALL: [Fragment; 7] = [
        Fragment::HexNumber,
        Fragment::HashComment,
        Fragment::SlashComment,
        Fragment::BlockComment,
        Fragment::DoubleQuoted,
        Fragment::SingleQuoted,
        Fragment::CommonOperators,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fragment::HexNumber => "hex",
            Fragment::HashComment => "hash comment",
            Fragment::SlashComment => "line comment",
            Fragment::BlockComment => "block comment",
            Fragment::DoubleQuoted => "double-quoted string",
            Fragment::SingleQuoted => "single-quoted string",
            Fragment::CommonOperators => "common operators",
        }
    }

    pub fn rule(self) -> PatternRule {
        match self {
            Fragment::HexNumber => pat!(r"^(?i)0x[a-f0-9]+\b", Hex),
            Fragment::HashComment => pat!(r"^#[^\n]*", Comment),
            Fragment::SlashComment => pat!(r"^//[^\n]*", Comment),
            Fragment::BlockComment => pat!(r"^/\*(?s:.*?)\*/", Comment),
            Fragment::DoubleQuoted => pat!(r#"^"(?:[^"\\\n]|\\.)*""#, String),
            Fragment::SingleQuoted => pat!(r"^'(?:[^'\\\n]|\\.)*'", String),
            // Longer forms first: alternation is leftmost-first, not longest.
            Fragment::CommonOperators => pat!(r"^(?:\+\+|--|&&|\|\||(?:<<|>>>?|[!|&<>^+\-=%/*])=?)", Operator),
        }
    }
}

/// Whitespace, bare symbolic words, then any single character.
pub fn fallback() -> PatternTable {
    vec![pat!(r"^\s+", Whitespace), pat!(r"^[\p{L}\p{N}_]+", Word), pat!(r"^(?s).", Char)]
}
