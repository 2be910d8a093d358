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

//! Upload, filter and paginate Gettext translation catalogs.
//!
//! The crate implements the processing pipeline behind a catalog
//! editor: [`parser::parse`] turns raw catalog text into an ordered
//! [`Catalog`], [`filter::apply`] narrows it by translation status and
//! search term, and [`pager::paginate`] slices the result into pages.
//! All three are pure functions over their inputs; [`session`] adds the
//! upload/filter wizard and preference persistence around them, backed
//! by a caller-supplied [`store::KeyValueStore`].
//!
//! # Examples
//!
//! ```
//! use po_workbench::{parser, select_page, FilterCriteria, PageRequest, StatusFilter};
//!
//! let catalog = parser::parse(
//!     "msgid \"Hello\"\n\
//!      msgstr \"Bonjour\"\n\
//!      msgid \"Bye\"\n\
//!      msgstr \"\"\n",
//! );
//! let criteria = FilterCriteria::new(StatusFilter::Untranslated, "").unwrap();
//! let page = select_page(&catalog, &criteria, &PageRequest::default()).unwrap();
//!
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0].msgid, "Bye");
//! ```

pub mod catalog;
pub mod filter;
pub mod pager;
pub mod parser;
pub mod session;
pub mod store;

pub use catalog::{Catalog, TranslationEntry};
pub use filter::{FilterCriteria, StatusFilter, ValidationError, MAX_SEARCH_LEN};
pub use pager::{Page, PageRequest, DEFAULT_PAGE_SIZE, PAGE_SIZES};

/// Run the filter → paginate pipeline over `catalog` in one call.
///
/// This is the single entry point callers should use to render a page:
/// it validates `criteria`, filters in catalog order and clips or
/// clamps the page window per [`pager::paginate`]. The catalog is not
/// mutated, so concurrent calls over the same catalog are independent.
pub fn select_page(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    request: &PageRequest,
) -> Result<Page<TranslationEntry>, ValidationError> {
    criteria.validate()?;
    let matches = filter::apply(catalog, criteria);
    let page = pager::paginate(&matches, request);
    Ok(Page {
        items: page.items.into_iter().cloned().collect(),
        index: page.index,
        total_count: page.total_count,
        total_pages: page.total_pages,
    })
}
