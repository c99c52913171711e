use crate::fragments::Fragment;
use crate::{Dialect, Punctuation};

pub const NAME: &str = "Java";

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "extends", "false", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "null", "package", "private",
    "protected", "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw(s)?", "transient", "true", "try", "void", "volatile", "while",
];

pub fn dialect() -> Dialect {
    Dialect::builder(NAME)
        .extension("java")
        .fragment(Fragment::SlashComment)
        .fragment(Fragment::BlockComment)
        .fragment(Fragment::DoubleQuoted)
        // char literals
        .fragment(Fragment::SingleQuoted)
        .fragment(Fragment::HexNumber)
        // Annotations
        .pattern(pat!(r"^@[\p{L}_][\p{L}\p{N}_.]*", Decorator))
        // ~, ?:, ->, ::, .
        .pattern(pat!(r"^(?:~|\?:|->|::|\.)", Operator))
        .fragment(Fragment::CommonOperators)
        .punctuation(Punctuation::BLOCKS | Punctuation::ARGS | Punctuation::STATEMENT_END)
        .keywords(KEYWORDS)
        .build()
}
