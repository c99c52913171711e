//! Multi-dialect source tokenizer.
//!
//! Classification runs in two passes over a complete, in-memory buffer:
//!
//! ```text
//! input ─▶ scan(dialect.patterns) ─▶ raw tokens ─▶ reclassify(dialect.rewrites) ─▶ tagged tokens
//!          first matching rule wins                 CHAR "{" → BLOCKSTART, WORD "if" → KEYWORD, ...
//! ```
//!
//! Both passes are lossless: concatenating the lexemes of the output always
//! gives back the input, and reclassification only ever changes tags.
//!
//! # Example
//! ```
//! use dialex::{Registry, Session, Tag};
//!
//! let registry = Registry::standard();
//! let mut session = Session::new(&registry);
//!
//! let tokens = session.parse_as("Javascript", "if (x) {}").unwrap();
//! assert_eq!(tokens[0].tag, Tag::Keyword);
//! assert_eq!(tokens.text(), "if (x) {}");
//! ```

extern crate self as dialex;

#[macro_use]
mod macros;

pub mod dialect;
pub mod dialects;
mod error;
pub mod fragments;
pub mod reclassify;
pub mod registry;
pub mod scanner;
mod session;
mod token;

pub use dialect::{Dialect, DialectBuilder, Punctuation, RewriteRule};
pub use error::{LexError, Result, ScanError};
pub use fragments::Fragment;
pub use registry::Registry;
pub use scanner::{Input, PatternRule, PatternTable};
pub use session::Session;
pub use token::{Tag, Token, TokenSequence};

/// Classify `text` as `dialect` with the built-in registry.
///
/// Shorthand for a one-off [`Session`] over [`registry::builtin`].
pub fn classify(dialect: &str, text: &str) -> Result<TokenSequence> {
    let mut session = Session::new(registry::builtin());
    session.parse_as(dialect, text)?;
    Ok(session.into_tokens())
}
