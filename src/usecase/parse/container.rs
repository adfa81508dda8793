//! Link-container lookup for a heading-bearing entry marker.
//!
//! Bookmark exports are inconsistent about where a folder's `<DL>` ends up
//! relative to its `<DT>`, so the lookup is an explicit ordered strategy:
//!
//! 1. [`ContainerSource::Nested`]: a `<dl>` that is a direct child of the entry
//!    marker. This is where lenient (browser-style) parsing puts it.
//! 2. [`ContainerSource::DescribedSibling`]: a `<dd>` right after the entry
//!    marker that directly holds a `<dl>`. Folders exported with a
//!    description (`<DD>text`) close the `<dt>` early and the list lands
//!    inside the `<dd>`.
//! 3. [`ContainerSource::NextSibling`]: the first `<dl>` among the entry
//!    marker's following siblings, for trees where the `<dt>` was closed
//!    before the list started. The scan stops at the next `<dt>`, whose
//!    list belongs to that entry.
//!
//! The first source that yields a container wins.

use crate::domain::markup::{Handle, MarkupTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSource {
    Nested,
    NextSibling,
    DescribedSibling,
}

impl ContainerSource {
    pub const LOOKUP_ORDER: [ContainerSource; 3] = [
        ContainerSource::Nested,
        ContainerSource::DescribedSibling,
        ContainerSource::NextSibling,
    ];

    fn locate(self, tree: &MarkupTree, entry: Handle) -> Option<Handle> {
        match self {
            ContainerSource::Nested => tree.first_child_element(entry, "dl"),
            ContainerSource::NextSibling => tree
                .following_sibling_elements(entry)
                .into_iter()
                .take_while(|&s| !tree.is_element(s, "dt"))
                .find(|&s| tree.is_element(s, "dl")),
            ContainerSource::DescribedSibling => tree
                .following_sibling_elements(entry)
                .first()
                .copied()
                .filter(|&s| tree.is_element(s, "dd"))
                .and_then(|dd| tree.first_child_element(dd, "dl")),
        }
    }
}

/// Resolves the link container of `entry` and reports which rule found it.
pub fn locate_container(tree: &MarkupTree, entry: Handle) -> Option<(Handle, ContainerSource)> {
    ContainerSource::LOOKUP_ORDER
        .iter()
        .find_map(|&source| source.locate(tree, entry).map(|dl| (dl, source)))
}
