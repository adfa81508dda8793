use crate::usecase::config::EventMode;
use crate::usecase::event::AppEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    serde_json::to_value(ev).unwrap_or_else(|e| serde_json::json!({"type":"unserializable","error":e.to_string()}))
}

/// Human-readable lines for one event; empty when the event is silent.
pub fn render_human(ev: &AppEvent) -> Vec<String> {
    match ev {
        AppEvent::ScanStarted { .. } => Vec::new(),
        AppEvent::CandidatesFound { count: 0 } => {
            vec!["No bookmark HTML files to convert were found in this directory.".to_string()]
        }
        AppEvent::CandidatesFound { .. } => Vec::new(),
        AppEvent::FileStarted { file } => vec![format!("Processing {file} ...")],
        AppEvent::FileConverted {
            output,
            categories,
            links,
            parse,
            ..
        } => {
            let mut lines = vec![format!(
                "Converted: open {output} to browse {categories} categories / {links} links."
            )];
            if parse.links_without_url > 0 || parse.empty_categories > 0 {
                lines.push(format!(
                    "  dropped {} links without a URL and {} empty folders",
                    parse.links_without_url, parse.empty_categories
                ));
            }
            lines
        }
        AppEvent::FileSkipped { file, reason } => {
            vec![format!("Warning: {file}: {reason}; skipped.")]
        }
        AppEvent::FileFailed { file, error } => vec![format!("Error: {file}: {error}")],
        AppEvent::Finished { stats } => {
            if stats.generated.is_empty() {
                vec![
                    "No files were generated; check that the source HTML is a Netscape bookmark export."
                        .to_string(),
                ]
            } else {
                let mut lines = vec![String::new(), "Generated files:".to_string()];
                lines.extend(stats.generated.iter().map(|name| format!(" - {name}")));
                lines
            }
        }
    }
}

pub fn spawn_event_printer(mut rx: mpsc::Receiver<AppEvent>, mode: EventMode) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            match mode {
                // NDJSON to stdout.
                EventMode::Ndjson => println!("{}", app_event_to_json(&ev)),
                EventMode::Human => {
                    for line in render_human(&ev) {
                        println!("{line}");
                    }
                }
            }
        }
    })
}
