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

use po_workbench::Catalog;
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};
use tera::Value;

/// Counts of translation message statuses.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatalogStats {
    pub name: String,
    pub translated_count: u32,
    pub untranslated_count: u32,
}

impl CatalogStats {
    /// Returns the total number of messages.
    pub fn total(&self) -> u32 {
        self.translated_count + self.untranslated_count
    }

    /// Converts the stats to a map of values to be used in context for a Tera template.
    pub fn to_context(&self) -> BTreeMap<String, Value> {
        let mut context: BTreeMap<String, Value> = BTreeMap::new();
        context.insert("name".to_string(), self.name.as_str().into());
        context.insert("translated_count".to_string(), self.translated_count.into());
        context.insert(
            "untranslated_count".to_string(),
            self.untranslated_count.into(),
        );
        context.insert(
            "translated_percent".to_string(),
            percent(self.translated_count, self.total()).into(),
        );
        context.insert(
            "untranslated_percent".to_string(),
            percent(self.untranslated_count, self.total()).into(),
        );
        context.insert("total".to_string(), self.total().into());
        context
    }

    /// Returns counts of message statuses in the given catalog.
    pub fn for_catalog(name: &str, catalog: &Catalog) -> Self {
        let mut stats = Self {
            name: name.to_string(),
            ..Self::default()
        };
        for entry in catalog.entries() {
            if entry.is_translated() {
                stats.translated_count += 1;
            } else {
                stats.untranslated_count += 1;
            }
        }
        stats
    }
}

fn percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(count) / f64::from(total)
}

impl Display for CatalogStats {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} translated",
            self.name,
            self.translated_count,
            self.total(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use po_workbench::parser;
    use pretty_assertions::assert_eq;

    const CONTENT: &str = "msgid \"Hello\"\n\
                           msgstr \"Bonjour\"\n\
                           msgid \"Bye\"\n\
                           msgstr \"\"\n\
                           msgid \"Yes\"\n\
                           msgstr \"Oui\"\n\
                           msgid \"No\"\n\
                           msgstr \"\"\n";

    #[test]
    fn test_for_catalog_counts_statuses() {
        let stats = CatalogStats::for_catalog("fr", &parser::parse(CONTENT));
        assert_eq!(
            stats,
            CatalogStats {
                name: "fr".to_string(),
                translated_count: 2,
                untranslated_count: 2,
            }
        );
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_to_context_percentages() {
        let stats = CatalogStats {
            name: "fr".to_string(),
            translated_count: 3,
            untranslated_count: 1,
        };
        let context = stats.to_context();
        assert_eq!(context["translated_percent"], Value::from(75.0));
        assert_eq!(context["untranslated_percent"], Value::from(25.0));
        assert_eq!(context["total"], Value::from(4));
    }

    #[test]
    fn test_empty_catalog_has_no_nan_percentages() {
        let stats = CatalogStats::for_catalog("empty", &Catalog::new());
        assert_eq!(stats.to_context()["translated_percent"], Value::from(0.0));
    }

    #[test]
    fn test_display() {
        let stats = CatalogStats {
            name: "fr".to_string(),
            translated_count: 2,
            untranslated_count: 2,
        };
        assert_eq!(stats.to_string(), "fr: 2 / 4 translated");
    }
}
