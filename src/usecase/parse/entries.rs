use crate::domain::markup::{Handle, MarkupTree};
use crate::domain::model::Link;

/// Entry markers whose nearest `<dl>` ancestor is exactly `container`.
///
/// Entries of nested sub-folders sit under a deeper `<dl>` and are excluded.
pub fn direct_entry_markers(tree: &MarkupTree, container: Handle) -> Vec<Handle> {
    tree.descendants(container)
        .into_iter()
        .filter(|&h| tree.is_element(h, "dt") && tree.nearest_ancestor(h, "dl") == Some(container))
        .collect()
}

/// The entry's first immediate `<a>` child. Anchors deeper in the entry are
/// never considered.
pub fn first_anchor(tree: &MarkupTree, entry: Handle) -> Option<Handle> {
    tree.first_child_element(entry, "a")
}

/// Builds a [`Link`] from an anchor; `None` when it has no usable `href`.
/// A usable `href` is stored verbatim, surrounding whitespace included.
pub fn extract_link(tree: &MarkupTree, anchor: Handle) -> Option<Link> {
    let href = tree.attr(anchor, "href");
    let url = href.filter(|u| !u.trim().is_empty())?;
    let title = Link::resolve_title(&tree.text_content(anchor), href);

    Some(Link {
        title,
        url: url.to_string(),
        icon: tree.attr(anchor, "icon").unwrap_or_default().to_string(),
        added_at: tree.attr(anchor, "add_date").unwrap_or_default().to_string(),
    })
}
