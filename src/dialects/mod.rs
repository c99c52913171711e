//! Built-in dialects.
//!
//! Each file defines one language as a [`Dialect`] built from shared
//! fragments plus its own rules. Pattern precedence inside a dialect is the
//! order of the builder calls; read them top to bottom as "tried first" to
//! "tried last", with the shared fallback implied at the end.
//!
//! `Node` is not a separate language: it is the Javascript dialect under a
//! second name, with extra rules for the runtime's global identifiers.

use crate::Dialect;

pub mod go;
pub mod java;
pub mod javascript;
pub mod node;
pub mod python;
pub mod ruby;

#[cfg(test)]
mod tests;

/// Every built-in dialect, aliases included.
pub fn all() -> Vec<Dialect> {
    let javascript = javascript::dialect();
    let node = node::dialect(&javascript);

    vec![javascript, node, go::dialect(), python::dialect(), java::dialect(), ruby::dialect()]
}
