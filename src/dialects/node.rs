use crate::dialect::retag_words;
use crate::{Dialect, Tag};

pub const NAME: &str = "Node";

/// Globals the Node runtime injects into every module.
const GLOBALS: &[&str] = &[
    "require",
    "module",
    "exports",
    "process",
    "global",
    "Buffer",
    "__dirname",
    "__filename",
    "set(Immediate|Interval|Timeout)",
    "clear(Immediate|Interval|Timeout)",
];

/// `javascript` under the Node name, with the runtime globals retagged to
/// `IDENT` before any of the Javascript rules run.
pub fn dialect(javascript: &Dialect) -> Dialect {
    javascript.alias(NAME, retag_words(GLOBALS, Tag::Word, Tag::Ident))
}
