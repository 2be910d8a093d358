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

//! Upload/filter session driving the catalog pipeline.
//!
//! The editing flow is a two-step wizard: upload a catalog first, then
//! filter and page through it. [`Workbench`] owns that state machine
//! and the preferences persisted between requests, while the pipeline
//! itself stays stateless — each [`Workbench::view`] re-runs filter and
//! pagination against the currently stored catalog. The store is passed
//! in explicitly; nothing is fetched from a global registry.

use crate::catalog::{Catalog, TranslationEntry};
use crate::filter::{FilterCriteria, StatusFilter, ValidationError};
use crate::pager::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use crate::store::KeyValueStore;
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Storage key for the last-parsed catalog.
const CATALOG_KEY: &str = "po_workbench.catalog";
/// Storage key for the persisted filter preferences.
const PREFS_KEY: &str = "po_workbench.prefs";
/// Tag carried by every value the workbench stores, so a shared backend
/// can invalidate the whole session at once.
const STORE_TAG: &str = "po_workbench";

/// Failure of a session operation.
///
/// An empty store is not an error; see [`Workbench::view`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("malformed stored value under {key:?}: {source}")]
    Store {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the two-step wizard currently stands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// No catalog stored yet; only an upload is meaningful.
    AwaitingUpload,
    /// A catalog is stored; filtering and paging operate on it.
    Ready,
}

/// Filter and paging preferences persisted between requests.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilterPrefs {
    pub status: StatusFilter,
    pub search: String,
    pub page_size: NonZeroUsize,
}

impl Default for FilterPrefs {
    fn default() -> Self {
        FilterPrefs {
            status: StatusFilter::All,
            search: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterPrefs {
    /// The filter request these preferences describe.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            status: self.status,
            search: self.search.clone(),
        }
    }
}

/// One editing session over a key/value store.
pub struct Workbench<S> {
    store: S,
}

impl<S: KeyValueStore> Workbench<S> {
    pub fn new(store: S) -> Self {
        Workbench { store }
    }

    pub fn state(&self) -> SessionState {
        if self.store.get(CATALOG_KEY).is_some() {
            SessionState::Ready
        } else {
            SessionState::AwaitingUpload
        }
    }

    /// Parse `content` and replace the stored catalog with the result.
    ///
    /// The previous catalog is discarded wholesale; there is no merge.
    /// Returns the number of entries extracted.
    pub fn upload(&mut self, content: &str) -> Result<usize, SessionError> {
        let catalog = crate::parser::parse(content);
        let count = catalog.len();
        self.put(CATALOG_KEY, &catalog)?;
        info!("stored catalog with {count} entries");
        Ok(count)
    }

    /// Run the filter → paginate pipeline against the stored catalog.
    ///
    /// With no catalog stored this returns an empty page with
    /// `total_count` 0 rather than an error. Invalid criteria are
    /// rejected with a field-level [`ValidationError`].
    pub fn view(
        &self,
        criteria: &FilterCriteria,
        request: &PageRequest,
    ) -> Result<Page<TranslationEntry>, SessionError> {
        criteria.validate()?;
        let Some(catalog) = self.load::<Catalog>(CATALOG_KEY)? else {
            return Ok(Page::empty());
        };
        Ok(crate::select_page(&catalog, criteria, request)?)
    }

    /// The stored catalog, if one has been uploaded.
    pub fn catalog(&self) -> Result<Option<Catalog>, SessionError> {
        self.load(CATALOG_KEY)
    }

    /// The persisted preferences, falling back to the defaults.
    pub fn load_prefs(&self) -> Result<FilterPrefs, SessionError> {
        Ok(self.load(PREFS_KEY)?.unwrap_or_default())
    }

    pub fn save_prefs(&mut self, prefs: &FilterPrefs) -> Result<(), SessionError> {
        self.put(PREFS_KEY, prefs)
    }

    /// Forget the stored catalog and preferences, returning the session
    /// to [`SessionState::AwaitingUpload`].
    pub fn reset(&mut self) {
        self.store.delete(CATALOG_KEY);
        self.store.delete(PREFS_KEY);
    }

    fn load<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, SessionError> {
        let Some(bytes) = self.store.get(key) else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| SessionError::Store { key, source })
    }

    fn put<T: Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), SessionError> {
        let bytes =
            serde_json::to_vec(value).map_err(|source| SessionError::Store { key, source })?;
        self.store.set(key, bytes, None, &[STORE_TAG]);
        Ok(())
    }
}
