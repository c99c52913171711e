//! Sessions: dialect binding plus the live token sequence.
//!
//! ```text
//!            parse([name, data])            parse([name', data])
//! Unbound ─────────────────────────▶ Bound(D) ─────────────────────▶ Bound(D')
//! (plaintext)                          │  ▲
//!                                      └──┘ parse([data]) / parse([])
//! ```
//!
//! A request is processed as:
//!
//! ```text
//! resolve dialect ─▶ scan (dialect patterns) ─▶ reclassify (dialect rewrites) ─▶ commit
//! ```
//!
//! Nothing is committed until every step has succeeded, so a failed request
//! leaves the session exactly as it was.

use crate::reclassify::reclassify;
use crate::scanner::{Input, scan_input};
use crate::{Dialect, LexError, Registry, Result, TokenSequence};
use once_cell::sync::Lazy;
use std::path::Path;

static PLAINTEXT: Lazy<Dialect> = Lazy::new(Dialect::plaintext);

/// Classifies input against a shared [`Registry`].
///
/// A session is cheap to create and is not meant to be shared: give each
/// thread its own session over the same registry.
#[derive(Debug, Clone)]
pub struct Session<'r> {
    registry: &'r Registry,
    bound: Option<&'r Dialect>,
    tokens: TokenSequence,
}

impl<'r> Session<'r> {
    /// An unbound session: plaintext dialect, no tokens.
    pub fn new(registry: &'r Registry) -> Self {
        Session { registry, bound: None, tokens: TokenSequence::empty() }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// The dialect requests are currently classified with.
    pub fn dialect(&self) -> &Dialect {
        self.bound.unwrap_or(&*PLAINTEXT)
    }

    /// Name of the current dialect (`"plaintext"` while unbound).
    pub fn language(&self) -> &str {
        self.dialect().name()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// The sequence produced by the last successful request.
    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn into_tokens(self) -> TokenSequence {
        self.tokens
    }

    /// Classify according to the shape of `args`:
    ///
    /// - `[]`: re-run the current dialect's rewrite rules over the live
    ///   sequence; fails with [`LexError::NoInput`] when it is empty.
    /// - `[data]`: scan `data` with the current dialect.
    /// - `[name, data, ..]`: bind `name` (case-insensitive) and scan `data`
    ///   with it. `name` must be [`Input::Text`]; anything after `data` is
    ///   ignored.
    pub fn parse(&mut self, args: Vec<Input>) -> Result<&TokenSequence> {
        let mut args = args.into_iter();

        let (bound, data) = match (args.next(), args.next()) {
            (None, _) => {
                if self.tokens.is_empty() {
                    return Err(LexError::NoInput);
                }
                (self.bound, Input::Tokens(self.tokens.clone()))
            }
            (Some(data), None) => (self.bound, data),
            (Some(Input::Text(name)), Some(data)) => (Some(self.lookup(&name)?), data),
            (Some(other), Some(_)) => return Err(LexError::MalformedRequest { found: other.kind() }),
        };

        self.run(bound, data)
    }

    /// Bind `dialect` and classify `text`.
    pub fn parse_as(&mut self, dialect: &str, text: &str) -> Result<&TokenSequence> {
        self.parse(vec![Input::from(dialect), Input::from(text)])
    }

    /// Classify `text` with the current dialect.
    pub fn parse_text(&mut self, text: &str) -> Result<&TokenSequence> {
        self.parse(vec![Input::from(text)])
    }

    /// Re-apply the current dialect's rewrite rules to the live sequence.
    pub fn retag(&mut self) -> Result<&TokenSequence> {
        self.parse(Vec::new())
    }

    /// Read `path` and classify it with the dialect its extension resolves to.
    ///
    /// Files whose extension no dialect claims are classified as plaintext,
    /// which also unbinds the session.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<&TokenSequence> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| LexError::io(path, err))?;
        let bound = self.registry.resolve_path(path);

        tracing::debug!(path = %path.display(), dialect = bound.map_or("plaintext", Dialect::name), "read file");
        self.run(bound, Input::Bytes(bytes))
    }

    fn lookup(&self, name: &str) -> Result<&'r Dialect> {
        self.registry.get(name).ok_or_else(|| LexError::UnknownDialect(name.to_string()))
    }

    fn run(&mut self, bound: Option<&'r Dialect>, data: Input) -> Result<&TokenSequence> {
        let dialect = bound.unwrap_or(&*PLAINTEXT);
        let shape = data.kind();

        let mut tokens = scan_input(dialect.patterns(), data)?;
        let retagged = reclassify(dialect.rewrites(), &mut tokens);

        tracing::debug!(dialect = dialect.name(), input = shape, tokens = tokens.len(), retagged, "classified");

        self.bound = bound;
        self.tokens = tokens;
        Ok(&self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScanError, Tag, Token};
    use pretty_assertions::assert_eq;

    #[test]
    fn new_session_is_unbound_plaintext() {
        let registry = Registry::standard();
        let session = Session::new(&registry);

        assert!(!session.is_bound());
        assert_eq!(session.language(), "plaintext");
        assert!(session.tokens().is_empty());
    }

    #[test]
    fn data_only_request_keeps_plaintext() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        let tokens = session.parse_text("{ if }").unwrap();
        assert_eq!(tokens.tags(), vec![Tag::Char, Tag::Whitespace, Tag::Word, Tag::Whitespace, Tag::Char]);
        assert_eq!(session.language(), "plaintext");
    }

    #[test]
    fn named_request_binds_case_insensitively() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        session.parse_as("JAVA", "{").unwrap();
        assert_eq!(session.language(), "Java");
        assert_eq!(session.tokens().tags(), vec![Tag::BlockStart]);

        // The binding sticks for data-only requests.
        session.parse_text(";").unwrap();
        assert_eq!(session.tokens().tags(), vec![Tag::End]);
    }

    #[test]
    fn new_data_replaces_the_sequence() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        session.parse_text("one two").unwrap();
        session.parse_text("x").unwrap();
        assert_eq!(session.tokens().clone().into_vec(), vec![Token::new(Tag::Word, "x")]);
    }

    #[test]
    fn empty_request_without_tokens_fails_and_changes_nothing() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        assert!(matches!(session.parse(Vec::new()), Err(LexError::NoInput)));
        assert!(!session.is_bound());
        assert!(session.tokens().is_empty());
    }

    #[test]
    fn empty_request_retags_live_tokens_with_current_dialect() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        session.parse_text("(x)").unwrap();
        assert_eq!(session.tokens().tags(), vec![Tag::Char, Tag::Word, Tag::Char]);

        session.parse(vec![Input::from("Go"), Input::Tokens(session.tokens().clone())]).unwrap();
        assert_eq!(session.tokens().tags(), vec![Tag::ArgStart, Tag::Word, Tag::ArgEnd]);

        let again = session.retag().unwrap().clone();
        assert_eq!(again.tags(), vec![Tag::ArgStart, Tag::Word, Tag::ArgEnd]);
        assert_eq!(again.text(), "(x)");
    }

    #[test]
    fn non_text_dialect_name_is_malformed() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);
        session.parse_as("Ruby", "[1]").unwrap();
        let before = session.tokens().clone();

        let err = session.parse(vec![Input::Bytes(vec![1, 2, 3, 4, 5]), Input::from("Test")]).unwrap_err();
        assert!(matches!(err, LexError::MalformedRequest { found: "bytes" }));
        assert_eq!(session.language(), "Ruby");
        assert_eq!(session.tokens(), &before);
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        let err = session.parse_as("Brainfudge", "+").unwrap_err();
        assert!(matches!(err, LexError::UnknownDialect(ref name) if name == "Brainfudge"));
        assert!(!session.is_bound());
    }

    #[test]
    fn scan_failures_propagate_and_keep_state() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);
        session.parse_as("Python", "pass").unwrap();

        let err = session.parse(vec![Input::Bytes(vec![0xff, 0xfe])]).unwrap_err();
        assert!(matches!(err, LexError::Scan(ScanError::InvalidUtf8 { offset: 0 })));
        assert_eq!(session.language(), "Python");
        assert_eq!(session.tokens().tags(), vec![Tag::Keyword]);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let registry = Registry::standard();
        let mut session = Session::new(&registry);

        session.parse(vec![Input::from("Go"), Input::from("func"), Input::from("ignored")]).unwrap();
        assert_eq!(session.tokens().clone().into_vec(), vec![Token::new(Tag::Keyword, "func")]);
    }
}
