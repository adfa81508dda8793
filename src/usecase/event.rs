use crate::usecase::stats::{BatchStats, ParseStats};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    ScanStarted {
        dir: String,
    },

    CandidatesFound {
        count: usize,
    },

    FileStarted {
        file: String,
    },

    FileConverted {
        file: String,
        output: String,
        categories: usize,
        links: usize,
        parse: ParseStats,
    },

    /// Not an error: the file parsed but there was nothing to emit.
    FileSkipped {
        file: String,
        reason: String,
    },

    FileFailed {
        file: String,
        error: String,
    },

    Finished {
        stats: BatchStats,
    },
}
