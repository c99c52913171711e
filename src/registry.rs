//! The dialect registry.
//!
//! A [`Registry`] is built once and is read-only afterwards, so one registry
//! can back any number of [`Session`](crate::Session)s, including sessions on
//! different threads.
//!
//! Dialects are stored by canonical name in a `BTreeMap`. Iteration order is
//! therefore ascending byte order of the name, and that order is also the
//! tie-break for file extensions claimed by several dialects:
//!
//! ```text
//! "app.js"  ─▶ ext "js" ─▶ claimants [Javascript, Node] ─▶ Javascript
//! "notes"   ─▶ no ext   ─▶ None (caller falls back to plaintext)
//! ```

use crate::Dialect;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::Path;

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::standard);

/// Process-wide registry of the built-in dialects, built on first use.
pub fn builtin() -> &'static Registry {
    &BUILTIN
}

/// Name-keyed, immutable collection of dialects.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    dialects: BTreeMap<String, Dialect>,
}

impl Registry {
    /// All built-in dialects.
    pub fn standard() -> Self {
        Self::from_dialects(crate::dialects::all())
    }

    /// Build from explicit dialects. A later dialect replaces an earlier one
    /// with the same name.
    pub fn from_dialects(dialects: impl IntoIterator<Item = Dialect>) -> Self {
        let dialects = dialects.into_iter().map(|d| (d.name().to_string(), d)).collect();
        Registry { dialects }
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }

    /// Canonical names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dialects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dialect> {
        self.dialects.values()
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Dialect> {
        if let Some(dialect) = self.dialects.get(name) {
            return Some(dialect);
        }
        self.dialects.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, d)| d)
    }

    /// Every dialect claiming `ext`, in ascending name order.
    pub fn claimants(&self, ext: &str) -> Vec<&Dialect> {
        self.dialects.values().filter(|d| d.claims_extension(ext)).collect()
    }

    /// The dialect for `ext`: the first claimant in ascending name order.
    pub fn resolve_extension(&self, ext: &str) -> Option<&Dialect> {
        let claimants = self.claimants(ext);
        let chosen = claimants.first().copied();

        tracing::debug!(
            ext,
            claimants = ?claimants.iter().map(|d| d.name()).collect::<Vec<_>>(),
            chosen = chosen.map(Dialect::name),
            "resolve extension"
        );
        chosen
    }

    /// The dialect for a file path, by its extension.
    pub fn resolve_path(&self, path: &Path) -> Option<&Dialect> {
        extension_of(path).and_then(|ext| self.resolve_extension(&ext))
    }
}

/// Lower-cased text after the last `.` of the file name, if there is one.
///
/// A leading dot counts: `.bashrc` has the extension `bashrc`.
pub fn extension_of(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let (_, ext) = file_name.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}
