//! Dialect definitions.
//!
//! A [`Dialect`] is everything needed to classify one source language:
//!
//! ```text
//! Dialect
//!  ├─ name            "Javascript"
//!  ├─ extensions      {"js"}
//!  ├─ patterns        [dialect rules ..] ++ [shared fragments ..] ++ fallback
//!  └─ rewrites        [structural punctuation ..] ++ [keywords ..]
//! ```
//!
//! Dialects are assembled with [`DialectBuilder`] and never mutated once
//! built. Aliases ([`Dialect::alias`]) are new values composed from a base
//! dialect plus extra rewrite rules; the base is left untouched.
//!
//! ## Keywords
//!
//! Keywords are recognized after scanning, by rewrite rules that retag a
//! `WORD` token whose lexeme equals the keyword. Scanning never needs to know
//! about keywords, and general identifiers and keywords stay two separate,
//! ordered concerns.
//!
//! Keyword lists accept a compact alternation shorthand which is expanded
//! into exact lexemes when the dialect is built (see [`expand_shorthand`]):
//!
//! ```text
//! "std(in|out|err)"  -> stdin, stdout, stderr
//! "(el)?if"          -> elif, if
//! ```

use crate::fragments::{Fragment, fallback};
use crate::{PatternRule, PatternTable, Tag};

/// Retag a token whose tag and lexeme both match exactly.
///
/// Only the tag is ever replaced; the lexeme is left as scanned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RewriteRule {
    pub match_tag: Tag,
    pub match_lexeme: String,
    pub replacement: Tag,
}

impl RewriteRule {
    pub fn new(match_tag: Tag, match_lexeme: impl Into<String>, replacement: Tag) -> Self {
        RewriteRule { match_tag, match_lexeme: match_lexeme.into(), replacement }
    }

    pub fn matches(&self, tag: Tag, lexeme: &str) -> bool {
        self.match_tag == tag && self.match_lexeme == lexeme
    }
}

bitflags::bitflags! {
    /// Punctuation a dialect's grammar gives structural meaning to.
    ///
    /// Each flag contributes `CHAR` → structural-tag rewrite rules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Punctuation: u8 {
        /// `{` `}` → BLOCKSTART / BLOCKEND
        const BLOCKS        = 1 << 0;
        /// `(` `)` → ARGSTART / ARGEND
        const ARGS          = 1 << 1;
        /// `[` `]` → ARRAYSTART / ARRAYEND
        const ARRAYS        = 1 << 2;
        /// `;` → END
        const STATEMENT_END = 1 << 3;
    }
}

/// Structural rewrite rules for `punctuation`, in a fixed order:
/// blocks, arguments, arrays, statement end.
pub fn structural_rules(punctuation: Punctuation) -> Vec<RewriteRule> {
    let mut rules = Vec::new();

    if punctuation.contains(Punctuation::BLOCKS) {
        rules.push(rewrite!(Char "{" => BlockStart));
        rules.push(rewrite!(Char "}" => BlockEnd));
    }
    if punctuation.contains(Punctuation::ARGS) {
        rules.push(rewrite!(Char "(" => ArgStart));
        rules.push(rewrite!(Char ")" => ArgEnd));
    }
    if punctuation.contains(Punctuation::ARRAYS) {
        rules.push(rewrite!(Char "[" => ArrayStart));
        rules.push(rewrite!(Char "]" => ArrayEnd));
    }
    if punctuation.contains(Punctuation::STATEMENT_END) {
        rules.push(rewrite!(Char ";" => End));
    }

    rules
}

/// One rule per expanded word, retagging `from` tokens with that lexeme to `to`.
pub fn retag_words(words: &[&str], from: Tag, to: Tag) -> Vec<RewriteRule> {
    words
        .iter()
        .flat_map(|word| expand_shorthand(word))
        .map(|lexeme| RewriteRule::new(from, lexeme, to))
        .collect()
}

/// Keyword rules: `WORD` → `KEYWORD` for every expanded entry of `words`.
pub fn keyword_rules(words: &[&str]) -> Vec<RewriteRule> {
    retag_words(words, Tag::Word, Tag::Keyword)
}

/// Expand `(a|b)` groups, optionally followed by `?`, into every literal they
/// stand for, in left-to-right choice order.
///
/// Only flat groups are understood; an unbalanced `(` is kept literally.
pub fn expand_shorthand(shorthand: &str) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut rest = shorthand;

    while !rest.is_empty() {
        let Some(open) = rest.find('(') else {
            out.iter_mut().for_each(|o| o.push_str(rest));
            break;
        };
        let Some(close) = rest[open..].find(')').map(|rel| open + rel) else {
            out.iter_mut().for_each(|o| o.push_str(rest));
            break;
        };

        let prefix = &rest[..open];
        out.iter_mut().for_each(|o| o.push_str(prefix));

        let mut choices: Vec<&str> = rest[open + 1..close].split('|').collect();
        rest = &rest[close + 1..];
        if let Some(after) = rest.strip_prefix('?') {
            choices.push("");
            rest = after;
        }

        out = out.iter().flat_map(|o| choices.iter().map(move |c| format!("{o}{c}"))).collect();
    }

    out
}

/// A named source-language profile.
#[derive(Debug, Clone)]
pub struct Dialect {
    name: String,
    extensions: Vec<String>,
    patterns: PatternTable,
    rewrites: Vec<RewriteRule>,
}

impl Dialect {
    pub fn builder(name: impl Into<String>) -> DialectBuilder {
        DialectBuilder::new(name)
    }

    /// The unbound default: fallback patterns only, no rewrite rules.
    pub fn plaintext() -> Self {
        Dialect { name: "plaintext".to_string(), extensions: Vec::new(), patterns: fallback(), rewrites: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased file extensions claimed by this dialect.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    pub fn rewrites(&self) -> &[RewriteRule] {
        &self.rewrites
    }

    /// Case-insensitive extension check (`ext` without the dot).
    pub fn claims_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// A copy of this dialect under `name`, with `extra` rewrite rules placed
    /// ahead of the base rules.
    pub fn alias(&self, name: impl Into<String>, extra: Vec<RewriteRule>) -> Dialect {
        let mut rewrites = extra;
        rewrites.extend(self.rewrites.iter().cloned());

        Dialect { name: name.into(), extensions: self.extensions.clone(), patterns: self.patterns.clone(), rewrites }
    }
}

/// Assembles a [`Dialect`] in precedence order.
///
/// Pattern rules and fragments keep the order they are added in, and the
/// shared fallback is always appended last. Rewrite rules come out as the
/// structural punctuation rules followed by the keyword rules.
#[derive(Debug)]
pub struct DialectBuilder {
    name: String,
    extensions: Vec<String>,
    patterns: PatternTable,
    punctuation: Punctuation,
    keywords: Vec<RewriteRule>,
}

impl DialectBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        DialectBuilder {
            name: name.into(),
            extensions: Vec::new(),
            patterns: Vec::new(),
            punctuation: Punctuation::empty(),
            keywords: Vec::new(),
        }
    }

    pub fn extension(mut self, ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        if !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }
        self
    }

    pub fn pattern(mut self, rule: PatternRule) -> Self {
        self.patterns.push(rule);
        self
    }

    pub fn fragment(mut self, fragment: Fragment) -> Self {
        self.patterns.push(fragment.rule());
        self
    }

    pub fn punctuation(mut self, punctuation: Punctuation) -> Self {
        self.punctuation |= punctuation;
        self
    }

    pub fn keywords(mut self, words: &[&str]) -> Self {
        self.keywords.extend(keyword_rules(words));
        self
    }

    pub fn build(self) -> Dialect {
        let mut patterns = self.patterns;
        patterns.extend(fallback());

        let mut rewrites = structural_rules(self.punctuation);
        rewrites.extend(self.keywords);

        Dialect { name: self.name, extensions: self.extensions, patterns, rewrites }
    }
}
