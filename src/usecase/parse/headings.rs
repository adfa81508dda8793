use crate::domain::markup::{Handle, MarkupTree};

/// An entry marker (`<dt>`) that names a folder through a direct `<h3>` child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMarker {
    pub entry: Handle,
    pub heading: Handle,
}

/// Every heading-bearing entry marker in the document, in document order.
pub fn heading_markers(tree: &MarkupTree) -> Vec<HeadingMarker> {
    tree.descendants(tree.root())
        .into_iter()
        .filter(|&h| tree.is_element(h, "dt"))
        .filter_map(|entry| {
            tree.first_child_element(entry, "h3")
                .map(|heading| HeadingMarker { entry, heading })
        })
        .collect()
}

/// Trimmed heading text; `None` when nothing but whitespace remains.
pub fn category_name(tree: &MarkupTree, heading: Handle) -> Option<String> {
    let text = tree.text_content(heading);
    let name = text.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_h3_children_mark_a_category() {
        let mut tree = MarkupTree::new();
        let root = tree.root();
        let dl = tree.push_element(root, "dl", &[]);

        let folder = tree.push_element(dl, "dt", &[]);
        let h3 = tree.push_element(folder, "h3", &[]);
        tree.push_text(h3, " Work  Stuff ");

        // h3 wrapped in another element is not a direct child.
        let wrapped = tree.push_element(dl, "dt", &[]);
        let span = tree.push_element(wrapped, "span", &[]);
        tree.push_element(span, "h3", &[]);

        let link = tree.push_element(dl, "dt", &[]);
        tree.push_element(link, "a", &[("href", "https://example.com")]);

        let markers = heading_markers(&tree);
        assert_eq!(
            markers,
            vec![HeadingMarker {
                entry: folder,
                heading: h3
            }]
        );
        assert_eq!(
            category_name(&tree, h3).as_deref(),
            Some("Work  Stuff")
        );
    }

    #[test]
    fn whitespace_only_heading_has_no_name() {
        let mut tree = MarkupTree::new();
        let root = tree.root();
        let dt = tree.push_element(root, "dt", &[]);
        let h3 = tree.push_element(dt, "h3", &[]);
        tree.push_text(h3, " \n\t ");
        assert_eq!(category_name(&tree, h3), None);
    }
}
