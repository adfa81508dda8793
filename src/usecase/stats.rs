use crate::usecase::parse::ContainerSource;
use serde::Serialize;

/// Counters gathered while turning one markup tree into categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub headings_seen: usize,
    pub empty_headings: usize,
    pub renamed: usize,
    pub without_container: usize,
    pub nested_containers: usize,
    pub sibling_containers: usize,
    pub described_containers: usize,
    pub entry_markers_seen: usize,
    pub links_seen: usize,
    pub links_without_url: usize,
    pub empty_categories: usize,
    pub markup_recoveries: usize,
}

impl ParseStats {
    pub fn record_container(&mut self, source: ContainerSource) {
        match source {
            ContainerSource::Nested => self.nested_containers += 1,
            ContainerSource::NextSibling => self.sibling_containers += 1,
            ContainerSource::DescribedSibling => self.described_containers += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub candidates: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    /// File names (not paths) of every page written, in processing order.
    pub generated: Vec<String>,
}
