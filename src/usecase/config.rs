use crate::domain::rename::RenameTable;
use std::path::{Path, PathBuf};

/// Environment variable selecting how progress events are printed.
pub const EVENTS_ENV_VAR: &str = "BOOKMARK_NAV_EVENTS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventMode {
    /// Progress lines and a final summary on stdout.
    #[default]
    Human,
    /// One JSON object per event on stdout.
    Ndjson,
}

impl EventMode {
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "human" | "" => Some(Self::Human),
            "ndjson" | "json" => Some(Self::Ndjson),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Markup extension (without the dot) that marks a conversion candidate.
    pub extension: String,
    /// Appended to the input stem to name the generated page.
    pub output_suffix: String,
    /// File names ending with this are editor/browser temporaries.
    pub temp_marker: String,
    /// Stems starting with this belong to the default landing page.
    pub reserved_prefix: String,
    pub renames: RenameTable,
    pub event_mode: EventMode,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            extension: "html".to_string(),
            output_suffix: "_nav.html".to_string(),
            temp_marker: ".tmp.html".to_string(),
            reserved_prefix: "my_nav_page".to_string(),
            renames: RenameTable::default(),
            event_mode: EventMode::default(),
        }
    }
}

impl ConvertConfig {
    /// Applies an `EVENTS_ENV_VAR` value; unknown values keep the current mode.
    pub fn with_event_mode_override(mut self, value: Option<&str>) -> Self {
        if let Some(mode) = value.and_then(EventMode::from_env_value) {
            self.event_mode = mode;
        }
        self
    }

    pub fn is_candidate(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            return false;
        };
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };

        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
            && !file_name.ends_with(&self.output_suffix)
            && !file_name.ends_with(&self.temp_marker)
            && !stem.starts_with(&self.reserved_prefix)
    }

    /// `<dir>/<stem><output_suffix>` for an input path.
    pub fn output_path_for(&self, input: &Path) -> Option<PathBuf> {
        let stem = input.file_stem().and_then(|s| s.to_str())?;
        Some(input.with_file_name(format!("{stem}{}", self.output_suffix)))
    }
}
