// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory catalog of translation entries.
//!
//! A [`Catalog`] holds the entries extracted from one uploaded catalog
//! file, in order of first appearance. Lookup by `msgid` is constant
//! time; iteration follows the source order. Catalogs are produced by
//! [`crate::parser::parse`] and swapped out wholesale on the next
//! upload, never patched incrementally.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single `msgid`/`msgstr` pair from a translation catalog.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Source string, the natural key within a catalog.
    pub msgid: String,
    /// Translated string. Empty means untranslated.
    pub msgstr: String,
}

impl TranslationEntry {
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        TranslationEntry {
            msgid: msgid.into(),
            msgstr: msgstr.into(),
        }
    }

    /// Whether this entry carries a translation.
    ///
    /// A translation consisting only of whitespace counts as
    /// untranslated.
    pub fn is_translated(&self) -> bool {
        !self.msgstr.trim().is_empty()
    }
}

/// Ordered collection of translation entries for one catalog file.
///
/// `msgid` values are unique within a catalog. Serialization goes
/// through the plain entry sequence; the lookup index is rebuilt on
/// deserialization.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TranslationEntry>", into = "Vec<TranslationEntry>")]
pub struct Catalog {
    entries: Vec<TranslationEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Append `entry`, or update the existing entry with the same
    /// `msgid` in place.
    ///
    /// An update keeps the position of the first occurrence and takes
    /// the `msgstr` of the last one.
    pub fn append_or_update(&mut self, entry: TranslationEntry) {
        match self.index.get(&entry.msgid) {
            Some(&position) => self.entries[position].msgstr = entry.msgstr,
            None => {
                self.index.insert(entry.msgid.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up an entry by its `msgid`.
    pub fn get(&self, msgid: &str) -> Option<&TranslationEntry> {
        self.index.get(msgid).map(|&position| &self.entries[position])
    }

    /// Iterate over the entries in source order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &TranslationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Swap the entire content for `new`.
    ///
    /// The old entries are discarded in one step, so a caller can never
    /// observe a catalog that is partially old and partially new.
    pub fn replace(&mut self, new: Catalog) {
        *self = new;
    }

    /// Render the catalog back to `msgid`/`msgstr` pair text.
    ///
    /// This is the inverse of [`crate::parser::parse`] for the entries
    /// that parser can produce. Literals are written as-is; no escaping
    /// is applied.
    pub fn to_po_string(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "msgid \"{}\"\nmsgstr \"{}\"\n\n",
                entry.msgid, entry.msgstr
            ));
        }
        out
    }
}

impl From<Vec<TranslationEntry>> for Catalog {
    fn from(entries: Vec<TranslationEntry>) -> Self {
        let mut catalog = Catalog::new();
        for entry in entries {
            catalog.append_or_update(entry);
        }
        catalog
    }
}

impl From<Catalog> for Vec<TranslationEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl FromIterator<TranslationEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = TranslationEntry>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            catalog.append_or_update(entry);
        }
        catalog
    }
}
