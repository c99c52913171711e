use crate::fragments::Fragment;
use crate::Dialect;

pub const NAME: &str = "Python";

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "(el)?if", "else", "except", "finally", "for", "from", "global", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Python gives no structural meaning to braces or parentheses that the
/// highlighter cares about; indentation is not tracked.
pub fn dialect() -> Dialect {
    Dialect::builder(NAME)
        .extension("py")
        .fragment(Fragment::HashComment)
        // Triple-quoted strings must be tried before the one-line forms.
        .pattern(pat!(r#"^"""(?s:.*?)""""#, Docstring))
        .pattern(pat!(r"^'''(?s:.*?)'''", Docstring))
        .fragment(Fragment::DoubleQuoted)
        .fragment(Fragment::SingleQuoted)
        .fragment(Fragment::HexNumber)
        .pattern(pat!(r"^@[\p{L}_][\p{L}\p{N}_.]*", Decorator))
        // **, //, **=, //=
        .pattern(pat!(r"^(?:\*\*|//)=?", Operator))
        .fragment(Fragment::CommonOperators)
        .keywords(KEYWORDS)
        .build()
}
