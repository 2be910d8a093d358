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

//! Lenient extraction of `msgid`/`msgstr` pairs from catalog text.
//!
//! The parser scans for two-line units of the form
//!
//! ```text
//! msgid "<literal>"
//! msgstr "<literal>"
//! ```
//!
//! and emits one entry per unit, in input order. Everything else —
//! comments, plural forms, `msgctxt` lines, multi-line strings — is
//! skipped without complaint: parsing never fails, it extracts whatever
//! well-formed pairs exist. Empty input yields an empty catalog.
//!
//! Escape sequences inside the literals are not decoded; the text
//! between the outermost quotes is taken verbatim. This is a deliberate
//! simplification of the catalog format, not a correctness bug.

use crate::catalog::{Catalog, TranslationEntry};
use regex::Regex;
use std::sync::OnceLock;

/// Extract all well-formed `msgid`/`msgstr` pairs from `content`.
///
/// A later pair reusing an already-seen `msgid` updates that entry in
/// place: the entry keeps the position of its first occurrence and the
/// `msgstr` of its last. The header entry with an empty `msgid` is
/// extracted like any other entry.
///
/// # Examples
///
/// ```
/// use po_workbench::parser::parse;
///
/// let catalog = parse("msgid \"Hello\"\nmsgstr \"Bonjour\"\n");
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get("Hello").unwrap().msgstr, "Bonjour");
/// ```
pub fn parse(content: &str) -> Catalog {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"(?m)^msgid "(?<msgid>.*)"\r?\nmsgstr "(?<msgstr>.*)"\r?$"#)
            .expect("well-formed regex")
    });

    let mut catalog = Catalog::new();
    for captures in re.captures_iter(content) {
        catalog.append_or_update(TranslationEntry::new(
            &captures["msgid"],
            &captures["msgstr"],
        ));
    }
    catalog
}
