#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`PatternRule`](crate::PatternRule) from an anchored regex literal
/// and a [`Tag`](crate::Tag) variant name.
///
/// ```text
/// pat!(r"^(~|={3}|\.)", Operator)
/// ```
#[macro_export]
macro_rules! pat {
    ($pat:literal, $tag:ident) => {
        $crate::PatternRule::new($crate::regex!($pat), $crate::Tag::$tag)
    };
}

/// Build a [`RewriteRule`](crate::RewriteRule): `rewrite!(Char "{" => BlockStart)`.
#[macro_export]
macro_rules! rewrite {
    ($from:ident $lexeme:literal => $to:ident) => {
        $crate::RewriteRule::new($crate::Tag::$from, $lexeme, $crate::Tag::$to)
    };
}
