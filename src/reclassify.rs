//! Post-scan token reclassification.
//!
//! Rewrite rules run one at a time over the whole sequence:
//!
//! ```text
//! for rule in rules:            (rule order)
//!     for token in tokens:      (token order)
//!         if token.tag == rule.match_tag && token.lexeme == rule.match_lexeme:
//!             token.tag = rule.replacement
//! ```
//!
//! A later rule sees the tags written by earlier rules, so a chain such as
//! `CHAR "{" → BLOCKSTART` followed by `BLOCKSTART "{" → X` retags `{` twice.
//! Only tags change: length, order and lexemes are never touched, and a rule
//! that matches nothing is simply a no-op.

use crate::{RewriteRule, Token};

/// Apply `rules` in order to `tokens`, in place.
///
/// Returns the total number of retags performed.
pub fn reclassify(rules: &[RewriteRule], tokens: &mut [Token]) -> usize {
    let mut total = 0;

    for rule in rules {
        let mut hits = 0;
        for token in tokens.iter_mut().filter(|t| rule.matches(t.tag, &t.lexeme)) {
            token.tag = rule.replacement;
            hits += 1;
        }

        if hits > 0 {
            tracing::trace!(from = %rule.match_tag, lexeme = %rule.match_lexeme, to = %rule.replacement, hits, "retag");
        }
        total += hits;
    }

    total
}
