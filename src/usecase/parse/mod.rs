//! Netscape bookmark markup -> ordered categories of links.
//!
//! Every `<dt>` with a direct `<h3>` child becomes a candidate category, in
//! document order, so nested folders are flattened into one level. Each
//! category only receives the links that are direct entries of its own list.

mod container;
mod entries;
mod headings;

pub use container::{locate_container, ContainerSource};
pub use entries::{direct_entry_markers, extract_link, first_anchor};
pub use headings::{category_name, heading_markers, HeadingMarker};

use crate::domain::error::ParseError;
use crate::domain::markup::MarkupTree;
use crate::domain::model::Category;
use crate::domain::rename::RenameTable;
use crate::domain::traits::MarkupTokenizer;
use crate::usecase::stats::ParseStats;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBookmarks {
    pub categories: Vec<Category>,
    pub stats: ParseStats,
}

pub fn parse_bookmarks(
    text: &str,
    tokenizer: &dyn MarkupTokenizer,
    renames: &RenameTable,
) -> Result<ParsedBookmarks, ParseError> {
    let tree = tokenizer.tokenize(text)?;
    Ok(collect_categories(&tree, renames))
}

pub fn collect_categories(tree: &MarkupTree, renames: &RenameTable) -> ParsedBookmarks {
    let mut stats = ParseStats {
        markup_recoveries: tree.recoveries,
        ..ParseStats::default()
    };
    let mut categories = Vec::new();

    for marker in heading_markers(tree) {
        stats.headings_seen += 1;

        let Some(name) = category_name(tree, marker.heading) else {
            stats.empty_headings += 1;
            continue;
        };
        let name = match renames.rename(&name) {
            Some(replacement) => {
                stats.renamed += 1;
                replacement.to_string()
            }
            None => name,
        };

        let Some((container, source)) = locate_container(tree, marker.entry) else {
            stats.without_container += 1;
            continue;
        };
        stats.record_container(source);

        let mut links = Vec::new();
        for entry in direct_entry_markers(tree, container) {
            stats.entry_markers_seen += 1;
            let Some(anchor) = first_anchor(tree, entry) else {
                continue;
            };
            stats.links_seen += 1;
            match extract_link(tree, anchor) {
                Some(link) => links.push(link),
                None => stats.links_without_url += 1,
            }
        }

        if links.is_empty() {
            stats.empty_categories += 1;
            continue;
        }
        categories.push(Category { name, links });
    }

    ParsedBookmarks { categories, stats }
}
