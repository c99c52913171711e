use crate::fragments::Fragment;
use crate::{Dialect, Punctuation};

pub const NAME: &str = "Ruby";

const KEYWORDS: &[&str] = &[
    "BEGIN",
    "END",
    "alias",
    "and",
    "begin",
    "break",
    "case",
    "class",
    "def",
    "defined",
    "do",
    "els(e|if)",
    "end",
    "ensure",
    "false",
    "for",
    "if",
    "in",
    "module",
    "next",
    "nil",
    "not",
    "or",
    "redo",
    "rescue",
    "retry",
    "return",
    "self",
    "super",
    "then",
    "true",
    "undef",
    "unless",
    "until",
    "when",
    "while",
    "yield",
    "__(FILE|LINE|ENCODING|method)__",
];

pub fn dialect() -> Dialect {
    Dialect::builder(NAME)
        .extension("rb")
        .fragment(Fragment::HashComment)
        .fragment(Fragment::DoubleQuoted)
        .fragment(Fragment::SingleQuoted)
        .fragment(Fragment::HexNumber)
        // ::, .., ..., ., <=>, ===, =~, =>, !~
        .pattern(pat!(r"^(?:::|\.{2,3}|\.|<=>|===|=~|=>|!~)", Operator))
        // :symbol, after `::` so scope resolution is not mistaken for one.
        .pattern(pat!(r"^:[\p{L}_][\p{L}\p{N}_]*[?!=]?", Symbol))
        // Restricted globals: $DEBUG, $stdout, $1, $-w, $!, $0 ...
        .pattern(pat!(
            r"^\$(?:(?:DEBUG|defout|FILENAME|F|LOAD_PATH|SAFE|stdin|stdout|stderr|VERBOSE|[1-9][0-9]*)\b|-[0adFiIlp]\b|[!@/\\,;.<>0$?:&`'+_~*])",
            Ident
        ))
        .fragment(Fragment::CommonOperators)
        .punctuation(Punctuation::BLOCKS | Punctuation::ARGS | Punctuation::ARRAYS)
        .keywords(KEYWORDS)
        .build()
}
