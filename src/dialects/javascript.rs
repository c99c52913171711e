use crate::fragments::Fragment;
use crate::{Dialect, Punctuation};

pub const NAME: &str = "Javascript";

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "let",
    "new", "null", "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void",
    "while", "with", "yield",
];

pub fn dialect() -> Dialect {
    Dialect::builder(NAME)
        .extension("js")
        .fragment(Fragment::SlashComment)
        .fragment(Fragment::BlockComment)
        .fragment(Fragment::DoubleQuoted)
        .fragment(Fragment::SingleQuoted)
        // Template literals may span lines.
        .pattern(pat!(r"^`(?:[^`\\]|\\(?s:.))*`", String))
        .fragment(Fragment::HexNumber)
        // ~, ===, !==, =>, ...
        .pattern(pat!(r"^(?:~|[=!]==|=>|\.{3}|\.)", Operator))
        .fragment(Fragment::CommonOperators)
        .punctuation(Punctuation::BLOCKS | Punctuation::ARGS | Punctuation::ARRAYS | Punctuation::STATEMENT_END)
        .keywords(KEYWORDS)
        .build()
}
