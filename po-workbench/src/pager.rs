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

//! Fixed-size pagination windows over filtered entry sequences.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Page sizes offered by the filter controls. The paginator itself
/// accepts any positive size.
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 50, 100];

/// Page size used when no preference has been stored.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(PAGE_SIZES[0]) {
    Some(size) => size,
    None => unreachable!(),
};

/// Zero-based request for one page of a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub index: usize,
    pub size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(index: usize, size: NonZeroUsize) -> Self {
        PageRequest { index, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a sequence plus the metadata needed to render pager
/// links.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Entries within the page window.
    pub items: Vec<T>,
    /// Zero-based index of the page actually returned. A request past
    /// the end is clamped, so this can be lower than the requested
    /// index.
    pub index: usize,
    /// Length of the whole sequence.
    pub total_count: usize,
    /// Total page count, at least 1 even for an empty sequence.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// An empty first page, returned when there is nothing to paginate.
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            index: 0,
            total_count: 0,
            total_pages: 1,
        }
    }
}

/// Slice `items` into the page window described by `request`.
///
/// A request past the last page is clamped to the last valid page
/// rather than returning an empty window, so paging never fails.
pub fn paginate<T: Clone>(items: &[T], request: &PageRequest) -> Page<T> {
    let size = request.size.get();
    let total_count = items.len();
    let total_pages = total_count.div_ceil(size).max(1);
    let index = request.index.min(total_pages - 1);
    let start = index * size;
    let end = (start + size).min(total_count);
    Page {
        items: items[start..end].to_vec(),
        index,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(index: usize, size: usize) -> PageRequest {
        PageRequest::new(index, NonZeroUsize::new(size).unwrap())
    }

    #[test]
    fn test_pagination_arithmetic() {
        let items: Vec<usize> = (0..25).collect();
        let pages: Vec<Page<usize>> = (0..3)
            .map(|index| paginate(&items, &request(index, 10)))
            .collect();

        assert_eq!(
            pages.iter().map(|page| page.items.len()).collect::<Vec<_>>(),
            &[10, 10, 5]
        );
        assert!(pages.iter().all(|page| page.total_pages == 3));
        assert_eq!(pages[2].items, (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_exact_multiple_has_no_ragged_page() {
        let items: Vec<usize> = (0..20).collect();
        let page = paginate(&items, &request(1, 10));
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn test_out_of_range_index_clamps_to_last_page() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, &request(99, 10));
        assert_eq!(page.index, 2);
        assert_eq!(page.items, (20..25).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_sequence_still_has_one_page() {
        let page = paginate(&[] as &[usize], &request(0, 10));
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_out_of_range_index_on_empty_sequence() {
        let page = paginate(&[] as &[usize], &request(7, 10));
        assert_eq!(page.index, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_size_one() {
        let items = ["a", "b"];
        let page = paginate(&items, &request(0, 1));
        assert_eq!(page.items, &["a"]);
        assert_eq!(page.total_pages, 2);
    }
}
