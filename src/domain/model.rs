use serde::{Deserialize, Serialize};

/// Title used when an anchor has neither visible text nor a target.
pub const UNTITLED_LINK: &str = "未命名链接";

/// One bookmark entry.
///
/// Serialized field names are the ones the generated page script reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    /// Raw `ADD_DATE` token, passed through untouched.
    #[serde(rename = "date", default)]
    pub added_at: String,
}

impl Link {
    /// Visible text first, then the link target, then [`UNTITLED_LINK`].
    pub fn resolve_title(text: &str, href: Option<&str>) -> String {
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
        match href {
            Some(href) if !href.is_empty() => href.to_string(),
            _ => UNTITLED_LINK.to_string(),
        }
    }
}

/// One top-level grouping of links, named after a bookmark folder heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: String,
    pub links: Vec<Link>,
}

impl Category {
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

pub fn total_links(categories: &[Category]) -> usize {
    categories.iter().map(Category::link_count).sum()
}
