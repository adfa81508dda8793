/// Heading Chrome/Edge give the toolbar folder in exports.
pub const BOOKMARKS_BAR: &str = "Bookmarks bar";
pub const BOOKMARKS_BAR_LABEL: &str = "常用收藏";

/// Exact-match category renames, applied to trimmed heading text.
///
/// Rules are checked in insertion order; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTable {
    rules: Vec<(String, String)>,
}

impl RenameTable {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, match_name: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.rules.push((match_name.into(), replacement.into()));
        self
    }

    pub fn rename(&self, name: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(from, _)| from == name)
            .map(|(_, to)| to.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RenameTable {
    fn default() -> Self {
        Self::empty().with_rule(BOOKMARKS_BAR, BOOKMARKS_BAR_LABEL)
    }
}
