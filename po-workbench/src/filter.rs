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

//! Status and search filtering of catalog entries.
//!
//! A filter request combines a translation-status predicate with an
//! optional case-insensitive search term. Both are applied in a single
//! pass over the catalog, preserving source order. Filtering never
//! mutates the catalog, so concurrent requests over the same catalog
//! are independent.

use crate::catalog::{Catalog, TranslationEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum accepted length of a search term, in characters.
pub const MAX_SEARCH_LEN: usize = 255;

/// Field-level rejection of a filter request.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("search value must be at most {MAX_SEARCH_LEN} characters, got {0}")]
    SearchTooLong(usize),
    #[error("unknown status filter {0:?}, expected all, translated or untranslated")]
    UnknownStatus(String),
}

/// Translation-status predicate of a filter request.
///
/// `Translated` and `Untranslated` partition a catalog exactly: every
/// entry matches one of the two, and none matches both.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Translated,
    Untranslated,
}

impl StatusFilter {
    fn accepts(self, entry: &TranslationEntry) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Translated => entry.is_translated(),
            StatusFilter::Untranslated => !entry.is_translated(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "translated" => Ok(StatusFilter::Translated),
            "untranslated" => Ok(StatusFilter::Untranslated),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Translated => f.write_str("translated"),
            StatusFilter::Untranslated => f.write_str("untranslated"),
        }
    }
}

/// What to keep when narrowing a catalog view.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    /// Case-insensitive substring to look for in `msgid` or `msgstr`.
    /// Empty means no search restriction.
    pub search: String,
}

impl FilterCriteria {
    /// Build a validated filter request.
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Result<Self, ValidationError> {
        let criteria = FilterCriteria {
            status,
            search: search.into(),
        };
        criteria.validate()?;
        Ok(criteria)
    }

    /// Check the request against the limits callers must respect.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let length = self.search.chars().count();
        if length > MAX_SEARCH_LEN {
            return Err(ValidationError::SearchTooLong(length));
        }
        Ok(())
    }
}

/// Narrow `catalog` down to the entries matching `criteria`.
///
/// The result preserves catalog order. The status predicate and the
/// search predicate are independent, so they are fused into one pass.
pub fn apply<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a TranslationEntry> {
    let needle = criteria.search.to_lowercase();
    catalog
        .entries()
        .filter(|entry| {
            criteria.status.accepts(entry)
                && (needle.is_empty()
                    || entry.msgid.to_lowercase().contains(&needle)
                    || entry.msgstr.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_catalog(entries: &[(&str, &str)]) -> Catalog {
        entries
            .iter()
            .map(|&(msgid, msgstr)| TranslationEntry::new(msgid, msgstr))
            .collect()
    }

    fn msgids(entries: &[&TranslationEntry]) -> Vec<String> {
        entries.iter().map(|entry| entry.msgid.clone()).collect()
    }

    #[test]
    fn test_all_passes_everything_in_order() {
        let catalog = create_catalog(&[("c", "3"), ("a", ""), ("b", "2")]);
        let entries = apply(&catalog, &FilterCriteria::default());
        assert_eq!(msgids(&entries), &["c", "a", "b"]);
    }

    #[test]
    fn test_status_partitions_catalog() {
        let catalog = create_catalog(&[
            ("Hello", "Bonjour"),
            ("Bye", ""),
            ("Blank", "   "),
            ("Yes", "Oui"),
        ]);
        let translated = apply(
            &catalog,
            &FilterCriteria::new(StatusFilter::Translated, "").unwrap(),
        );
        let untranslated = apply(
            &catalog,
            &FilterCriteria::new(StatusFilter::Untranslated, "").unwrap(),
        );

        assert_eq!(msgids(&translated), &["Hello", "Yes"]);
        assert_eq!(msgids(&untranslated), &["Bye", "Blank"]);
        assert_eq!(translated.len() + untranslated.len(), catalog.len());
        assert!(translated.iter().all(|entry| !untranslated.contains(entry)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = create_catalog(&[("hello world", ""), ("other", "")]);
        let entries = apply(
            &catalog,
            &FilterCriteria::new(StatusFilter::All, "HELLO").unwrap(),
        );
        assert_eq!(msgids(&entries), &["hello world"]);
    }

    #[test]
    fn test_search_matches_msgstr_too() {
        let catalog = create_catalog(&[("Hello", "Bonjour"), ("Bye", "Au revoir")]);
        let entries = apply(
            &catalog,
            &FilterCriteria::new(StatusFilter::All, "REVOIR").unwrap(),
        );
        assert_eq!(msgids(&entries), &["Bye"]);
    }

    #[test]
    fn test_status_and_search_compose() {
        let catalog = create_catalog(&[
            ("Hello", "Bonjour"),
            ("Hell", ""),
            ("Bye", "Au revoir"),
        ]);
        let entries = apply(
            &catalog,
            &FilterCriteria::new(StatusFilter::Untranslated, "hell").unwrap(),
        );
        assert_eq!(msgids(&entries), &["Hell"]);
    }

    #[test]
    fn test_search_length_limit() {
        assert_eq!(
            FilterCriteria::new(StatusFilter::All, "x".repeat(256)),
            Err(ValidationError::SearchTooLong(256))
        );
        assert!(FilterCriteria::new(StatusFilter::All, "x".repeat(255)).is_ok());
    }

    #[test]
    fn test_search_length_counts_characters_not_bytes() {
        assert!(FilterCriteria::new(StatusFilter::All, "é".repeat(255)).is_ok());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("translated".parse(), Ok(StatusFilter::Translated));
        assert_eq!(
            "bogus".parse::<StatusFilter>(),
            Err(ValidationError::UnknownStatus("bogus".to_string()))
        );
    }
}
