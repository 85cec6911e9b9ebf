use alloc::vec::Vec;

use crate::geometry::{self, GridDimensions};
use crate::{LayoutConfig, PageKey, PageOrder, PageRange, Placement};

/// Page metadata tracked by the engine. The content behind `key` belongs to the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<K = PageKey> {
    pub key: K,
    /// 1-based position; reassigned only by a relayout.
    pub index: usize,
    /// Stand-in for content that has not been loaded yet.
    pub is_placeholder: bool,
    pub placement: Placement,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PageLayout {
    grid: GridDimensions,
    ordering: PageOrder,
    page_height_percent: f32,
    page_width_percent: f32,
}

impl PageLayout {
    fn from_config(config: &LayoutConfig, grid: GridDimensions) -> Self {
        Self {
            grid,
            ordering: config.ordering,
            page_height_percent: config.page_height_percent,
            page_width_percent: config.page_width_percent,
        }
    }

    fn place(&self, index: usize) -> Placement {
        geometry::placement_of(
            index,
            self.grid,
            self.ordering,
            self.page_height_percent,
            self.page_width_percent,
        )
    }
}

/// The ordered page sequence owned by [`crate::Pagify`].
#[derive(Clone, Debug)]
pub struct PageSet<K = PageKey> {
    pages: Vec<Page<K>>,
    layout: PageLayout,
}

impl<K> PageSet<K> {
    pub(crate) fn new(config: &LayoutConfig, grid: GridDimensions) -> Self {
        Self {
            pages: Vec::new(),
            layout: PageLayout::from_config(config, grid),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page by 1-based index.
    pub fn get(&self, index: usize) -> Option<&Page<K>> {
        index.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Page<K>> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[Page<K>] {
        &self.pages
    }

    /// Pages inside `range`, clipped to the pages that exist.
    pub fn slice(&self, range: PageRange) -> &[Page<K>] {
        if range.is_empty() || range.first > self.pages.len() {
            return &[];
        }
        let start = range.first.saturating_sub(1);
        let end = range.last.min(self.pages.len());
        &self.pages[start..end]
    }

    pub fn placeholder_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_placeholder).count()
    }

    /// Appends a page and returns its 1-based index.
    pub(crate) fn push(&mut self, key: K, is_placeholder: bool) -> usize {
        let index = self.pages.len() + 1;
        let placement = self.layout.place(index);
        self.pages.push(Page {
            key,
            index,
            is_placeholder,
            placement,
        });
        index
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Page<K>> {
        if index == 0 || index > self.pages.len() {
            return None;
        }
        let removed = self.pages.remove(index - 1);
        self.relayout_from(index - 1);
        Some(removed)
    }

    pub(crate) fn resolve_placeholder(&mut self, index: usize, key: K) -> bool {
        let Some(page) = index.checked_sub(1).and_then(|i| self.pages.get_mut(i)) else {
            return false;
        };
        page.key = key;
        page.is_placeholder = false;
        true
    }

    pub(crate) fn set_layout(&mut self, config: &LayoutConfig, grid: GridDimensions) {
        self.layout = PageLayout::from_config(config, grid);
        self.relayout_from(0);
    }

    fn relayout_from(&mut self, start: usize) {
        let layout = self.layout;
        for (i, page) in self.pages.iter_mut().enumerate().skip(start) {
            page.index = i + 1;
            page.placement = layout.place(page.index);
        }
    }
}

impl<K: PartialEq> PageSet<K> {
    /// 1-based index of the first page with `key`.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.pages.iter().position(|p| &p.key == key).map(|i| i + 1)
    }
}

impl<'a, K> IntoIterator for &'a PageSet<K> {
    type Item = &'a Page<K>;
    type IntoIter = core::slice::Iter<'a, Page<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Append-only access to the page set, handed to a [`crate::PageLoader`].
pub struct PageSink<'a, K = PageKey> {
    pages: &'a mut PageSet<K>,
    added: usize,
}

impl<'a, K> PageSink<'a, K> {
    pub(crate) fn new(pages: &'a mut PageSet<K>) -> Self {
        Self { pages, added: 0 }
    }

    /// Appends a loaded page and returns its 1-based index.
    pub fn push_page(&mut self, key: K) -> usize {
        self.added += 1;
        self.pages.push(key, false)
    }

    /// Appends a placeholder and returns its 1-based index. Resolve it later with
    /// [`crate::Pagify::resolve_placeholder`].
    pub fn push_placeholder(&mut self, key: K) -> usize {
        self.added += 1;
        self.pages.push(key, true)
    }

    /// Total pages, including the ones added through this sink.
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Pages added through this sink so far.
    pub fn added(&self) -> usize {
        self.added
    }
}
