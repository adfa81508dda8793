use crate::domain::error::ParseError;
use crate::domain::markup::{Handle, MarkupTree, NodeKind};
use crate::domain::traits::MarkupTokenizer;
use scraper::{Html, Node};

/// Browser-grade lenient tokenizer (html5ever via `scraper`).
///
/// HTML5 tree construction closes an open `<dt>` at the next `<dt>`/`<dd>`,
/// closes `<p>` before block elements and keeps a folder's `<dl>` inside the
/// `<dt>` that introduced it, which is exactly the shape the bookmark parser
/// expects.
pub struct Html5Tokenizer;

impl MarkupTokenizer for Html5Tokenizer {
    fn tokenize(&self, text: &str) -> Result<MarkupTree, ParseError> {
        if let Some(offset) = text.find('\0') {
            return Err(ParseError::MalformedInput {
                reason: format!("NUL byte at offset {offset}; input looks binary"),
            });
        }

        let document = Html::parse_document(text);
        let mut tree = MarkupTree::new();
        tree.recoveries = document.errors.len();

        // Iterative copy (no recursion). Children are appended in document
        // order before their own subtrees are expanded.
        let mut stack = vec![(document.tree.root(), tree.root())];
        while let Some((node, handle)) = stack.pop() {
            let mut expanded: Vec<_> = Vec::new();
            for child in node.children() {
                let kind = match child.value() {
                    Node::Element(el) => NodeKind::Element {
                        name: el.name().to_ascii_lowercase(),
                        attrs: el
                            .attrs()
                            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                            .collect(),
                    },
                    Node::Text(t) => {
                        let content: &str = t;
                        NodeKind::Text(content.to_string())
                    }
                    // Doctype, comments and processing instructions carry no bookmarks.
                    _ => continue,
                };
                let child_handle: Handle = tree.push(handle, kind);
                expanded.push((child, child_handle));
            }
            stack.extend(expanded.into_iter().rev());
        }

        Ok(tree)
    }
}
