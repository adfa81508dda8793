//! Arena-backed markup tree.
//!
//! Tokenizers produce this tree; everything downstream walks it through
//! [`Handle`]s. Traversals are iterative (explicit stacks, no recursion) so
//! deeply nested exports cannot overflow the call stack.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    /// Tag and attribute names are lower-case.
    Element {
        name: String,
        attrs: BTreeMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    pub kind: NodeKind,
    pub children: Vec<Handle>,
}

#[derive(Debug, Clone)]
pub struct MarkupTree {
    pub nodes: Vec<MarkupNode>,
    pub parent: Vec<Option<Handle>>,
    /// Parse errors the tokenizer recovered from (unclosed tags and the like).
    pub recoveries: usize,
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![MarkupNode {
                kind: NodeKind::Document,
                children: Vec::new(),
            }],
            parent: vec![None],
            recoveries: 0,
        }
    }

    pub fn root(&self) -> Handle {
        Handle(0)
    }

    /// Appends `kind` as the last child of `parent`.
    pub fn push(&mut self, parent: Handle, kind: NodeKind) -> Handle {
        let handle = Handle(self.nodes.len());
        self.nodes.push(MarkupNode {
            kind,
            children: Vec::new(),
        });
        self.parent.push(Some(parent));
        self.nodes[parent.0].children.push(handle);
        handle
    }

    pub fn push_element(&mut self, parent: Handle, name: &str, attrs: &[(&str, &str)]) -> Handle {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), (*v).to_string()))
            .collect();
        self.push(
            parent,
            NodeKind::Element {
                name: name.to_ascii_lowercase(),
                attrs,
            },
        )
    }

    pub fn push_text(&mut self, parent: Handle, text: &str) -> Handle {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    pub fn children(&self, h: Handle) -> &[Handle] {
        &self.nodes[h.0].children
    }

    pub fn element_name(&self, h: Handle) -> Option<&str> {
        match &self.nodes[h.0].kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_element(&self, h: Handle, name: &str) -> bool {
        self.element_name(h) == Some(name)
    }

    pub fn attr(&self, h: Handle, key: &str) -> Option<&str> {
        match &self.nodes[h.0].kind {
            NodeKind::Element { attrs, .. } => attrs.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// First immediate child element named `name`.
    pub fn first_child_element(&self, h: Handle, name: &str) -> Option<Handle> {
        self.children(h)
            .iter()
            .copied()
            .find(|&c| self.is_element(c, name))
    }

    /// Element siblings after `h`, in document order.
    pub fn following_sibling_elements(&self, h: Handle) -> Vec<Handle> {
        let Some(parent) = self.parent[h.0] else {
            return Vec::new();
        };
        let siblings = self.children(parent);
        let Some(pos) = siblings.iter().position(|&s| s == h) else {
            return Vec::new();
        };
        siblings[pos + 1..]
            .iter()
            .copied()
            .filter(|&s| self.element_name(s).is_some())
            .collect()
    }

    /// Closest proper ancestor element named `name`.
    pub fn nearest_ancestor(&self, h: Handle, name: &str) -> Option<Handle> {
        let mut cur = self.parent[h.0];
        while let Some(p) = cur {
            if self.is_element(p, name) {
                return Some(p);
            }
            cur = self.parent[p.0];
        }
        None
    }

    /// Proper descendants of `h` in document (pre-)order.
    pub fn descendants(&self, h: Handle) -> Vec<Handle> {
        let mut out = Vec::new();
        let mut stack: Vec<Handle> = self.children(h).iter().rev().copied().collect();
        while let Some(cur) = stack.pop() {
            out.push(cur);
            for ch in self.children(cur).iter().rev() {
                stack.push(*ch);
            }
        }
        out
    }

    /// Concatenated text of every text node under `h`, untrimmed.
    pub fn text_content(&self, h: Handle) -> String {
        let mut out = String::new();
        if let NodeKind::Text(t) = &self.nodes[h.0].kind {
            out.push_str(t);
        }
        for d in self.descendants(h) {
            if let NodeKind::Text(t) = &self.nodes[d.0].kind {
                out.push_str(t);
            }
        }
        out
    }
}
