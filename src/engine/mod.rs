//! Document engine abstraction layer.
//!
//! Provides a trait-based read interface over an already-open document
//! handle, isolating the concrete engine from the serialization logic.
//! The engine's own lifecycle — initialization, authorization, teardown —
//! stays entirely on the caller's side; these traits assume a live handle
//! and never outlive it.
//!
//! Acquisition is fallible by design: a page or layout map the engine
//! cannot produce is reported as `None`, and the exporter treats that
//! subtree as empty rather than as an error.

mod mem;

pub use mem::{MemDocument, MemPage};

use std::fmt;

use crate::model::{Annotation, Element, Rotation};

/// An acquired page, released when dropped.
pub type PageRef<'a> = Box<dyn PageSource + 'a>;

/// Read access to an open document.
pub trait DocumentSource {
    /// Identifier of the document source, typically the input file name.
    fn name(&self) -> Option<&str>;

    /// Total number of pages, independent of whether each one can be
    /// acquired.
    fn page_count(&self) -> u32;

    /// Acquire the page at the given zero-based index. `None` means the
    /// page is unavailable; callers skip it and move on.
    fn acquire_page(&self, index: u32) -> Option<PageRef<'_>>;
}

/// Read access to one acquired page.
pub trait PageSource {
    /// 1-based page number.
    fn number(&self) -> u32;

    /// Page rotation.
    fn rotation(&self) -> Rotation;

    /// Acquire the page's layout map. `None` means the engine could not
    /// produce one; the page then contributes no elements.
    fn acquire_layout_map(&self) -> Option<LayoutMap<'_>>;

    /// Annotations attached to the page. Independent of the layout map.
    fn annotations(&self) -> &[Annotation] {
        &[]
    }
}

impl<P: PageSource + ?Sized> PageSource for &P {
    fn number(&self) -> u32 {
        (**self).number()
    }

    fn rotation(&self) -> Rotation {
        (**self).rotation()
    }

    fn acquire_layout_map(&self) -> Option<LayoutMap<'_>> {
        (**self).acquire_layout_map()
    }

    fn annotations(&self) -> &[Annotation] {
        (**self).annotations()
    }
}

/// A scoped view of a page's layout map.
///
/// Engines that pair map acquisition with an explicit release register the
/// release hook here; it runs exactly once when the guard drops, on every
/// exit path. Engines with plain borrowed data use [`LayoutMap::new`] and
/// the drop is free.
pub struct LayoutMap<'a> {
    roots: &'a [Element],
    release: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> LayoutMap<'a> {
    /// Wrap a borrowed element forest with no release hook.
    pub fn new(roots: &'a [Element]) -> Self {
        Self {
            roots,
            release: None,
        }
    }

    /// Wrap a borrowed element forest with a release hook that runs when
    /// the map is dropped.
    pub fn with_release(roots: &'a [Element], release: impl FnOnce() + 'a) -> Self {
        Self {
            roots,
            release: Some(Box::new(release)),
        }
    }

    /// The root elements of the page, in engine order.
    pub fn roots(&self) -> &[Element] {
        self.roots
    }
}

impl fmt::Debug for LayoutMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutMap")
            .field("roots", &self.roots.len())
            .field("released_on_drop", &self.release.is_some())
            .finish()
    }
}

impl Drop for LayoutMap<'_> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_layout_map_releases_once() {
        let released = Cell::new(0);
        let roots: Vec<Element> = Vec::new();
        {
            let map = LayoutMap::with_release(&roots, || released.set(released.get() + 1));
            assert_eq!(map.roots().len(), 0);
            assert_eq!(released.get(), 0);
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_layout_map_without_hook() {
        let roots: Vec<Element> = Vec::new();
        let map = LayoutMap::new(&roots);
        drop(map);
    }
}
