//! Page and document walking.

use log::debug;

use super::element::serialize_element;
use super::{project, ExportOptions};
use crate::engine::{DocumentSource, PageSource};
use crate::json::Node;

/// Serialize one page: number and rotation, then the layout forest, then
/// annotations.
///
/// When the engine cannot produce a layout map the page keeps its number
/// and rotation and contributes no elements; the walk continues. The map
/// is released when its guard drops, on every path out of this function.
pub fn serialize_page(page: &dyn PageSource, options: &ExportOptions) -> Node {
    let mut node = Node::new();
    node.put("number", page.number());
    node.put("rotate", page.rotation().degrees());

    match page.acquire_layout_map() {
        Some(map) => {
            for element in map.roots() {
                node.add_child("element", serialize_element(element));
            }
        }
        None => {
            debug!("page {}: no layout map, emitting empty page", page.number());
        }
    }

    if options.annotations {
        for annot in page.annotations() {
            node.add_child("annot", project::annotation(annot));
        }
    }

    node
}

/// Serialize a whole document under a top-level `document` key.
///
/// `num_pages` is the engine's total; pages that cannot be acquired are
/// skipped and do not appear as `page` entries, but still count toward
/// the total.
pub fn serialize_document(source: &dyn DocumentSource, options: &ExportOptions) -> Node {
    let mut doc = Node::new();
    doc.put("name", source.name().unwrap_or_default());
    let num_pages = source.page_count();
    doc.put("num_pages", num_pages);

    for index in 0..num_pages {
        let Some(page) = source.acquire_page(index) else {
            debug!("page index {index}: unavailable, skipping");
            continue;
        };
        doc.add_child("page", serialize_page(page.as_ref(), options));
    }

    let mut root = Node::new();
    root.add_child("document", doc);
    root
}
