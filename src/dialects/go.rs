use crate::fragments::Fragment;
use crate::{Dialect, Punctuation};

pub const NAME: &str = "Go";

const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go(to)?",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

pub fn dialect() -> Dialect {
    Dialect::builder(NAME)
        .extension("go")
        .fragment(Fragment::SlashComment)
        .fragment(Fragment::BlockComment)
        .fragment(Fragment::DoubleQuoted)
        // Rune literals share the single-quoted form.
        .fragment(Fragment::SingleQuoted)
        // Raw strings.
        .pattern(pat!(r"^`[^`]*`", String))
        .fragment(Fragment::HexNumber)
        // <-, :=, :, ..., .
        .pattern(pat!(r"^(?:<-|:=?|\.{3}|\.)", Operator))
        // &&, &^, &^=, &=
        .pattern(pat!(r"^(?:&&|&\^?=?)", Operator))
        .fragment(Fragment::CommonOperators)
        .punctuation(Punctuation::BLOCKS | Punctuation::ARGS)
        .keywords(KEYWORDS)
        .build()
}
