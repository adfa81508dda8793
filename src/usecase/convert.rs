use crate::domain::error::ParseError;
use crate::domain::model::total_links;
use crate::domain::traits::{MarkupTokenizer, PageEmitter};
use crate::infrastructure::file_io::{is_same_file, read_markup, write_page};
use crate::usecase::config::ConvertConfig;
use crate::usecase::event::AppEvent;
use crate::usecase::parse::parse_bookmarks;
use crate::usecase::stats::{BatchStats, ParseStats};
use crate::usecase::validate::validate_categories;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("bookmark file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Parsed fine, nothing to emit. Reported as a warning.
    #[error("no bookmarks parsed from {}", .0.display())]
    Empty(PathBuf),

    #[error("bookmark data failed validation: {0:#}")]
    Invalid(anyhow::Error),

    #[error("rendering page: {0:#}")]
    Render(anyhow::Error),

    #[error("cannot derive an output file name for {}", .0.display())]
    NoOutputName(PathBuf),

    #[error("refusing to overwrite input file {}", .0.display())]
    WouldOverwriteInput(PathBuf),

    #[error("writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    pub fn is_warning(&self) -> bool {
        matches!(self, ConvertError::Empty(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub categories: usize,
    pub links: usize,
    pub parse_stats: ParseStats,
}

/// Read -> parse -> validate -> emit -> write for one bookmark export.
pub async fn convert_file(
    input: &Path,
    tokenizer: &dyn MarkupTokenizer,
    emitter: &dyn PageEmitter,
    config: &ConvertConfig,
) -> Result<ConvertOutcome, ConvertError> {
    let output = config
        .output_path_for(input)
        .ok_or_else(|| ConvertError::NoOutputName(input.to_path_buf()))?;
    if is_same_file(input, &output) {
        return Err(ConvertError::WouldOverwriteInput(input.to_path_buf()));
    }

    let text = read_markup(input).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::NotFound(input.to_path_buf())
        } else {
            ConvertError::Read {
                path: input.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed = parse_bookmarks(&text, tokenizer, &config.renames)?;
    if parsed.categories.is_empty() {
        return Err(ConvertError::Empty(input.to_path_buf()));
    }

    validate_categories(&parsed.categories).map_err(ConvertError::Invalid)?;
    let page = emitter
        .emit(&parsed.categories)
        .map_err(ConvertError::Render)?;

    write_page(&output, &page)
        .await
        .map_err(|source| ConvertError::Write {
            path: output.clone(),
            source,
        })?;

    Ok(ConvertOutcome {
        input: input.to_path_buf(),
        output,
        categories: parsed.categories.len(),
        links: total_links(&parsed.categories),
        parse_stats: parsed.stats,
    })
}

/// Converts each candidate in order. Per-file failures are reported through
/// `sink` and counted; they never stop the batch.
pub async fn convert_batch(
    candidates: &[PathBuf],
    tokenizer: &dyn MarkupTokenizer,
    emitter: &dyn PageEmitter,
    config: &ConvertConfig,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> BatchStats {
    let mut stats = BatchStats {
        candidates: candidates.len(),
        ..BatchStats::default()
    };

    for input in candidates {
        let file = display_name(input);
        emit(&sink, AppEvent::FileStarted { file: file.clone() }).await;

        match convert_file(input, tokenizer, emitter, config).await {
            Ok(outcome) => {
                let output = display_name(&outcome.output);
                stats.converted += 1;
                stats.generated.push(output.clone());
                emit(
                    &sink,
                    AppEvent::FileConverted {
                        file,
                        output,
                        categories: outcome.categories,
                        links: outcome.links,
                        parse: outcome.parse_stats,
                    },
                )
                .await;
            }
            Err(e) if e.is_warning() => {
                stats.skipped += 1;
                emit(
                    &sink,
                    AppEvent::FileSkipped {
                        file,
                        reason: e.to_string(),
                    },
                )
                .await;
            }
            Err(e) => {
                stats.failed += 1;
                emit(
                    &sink,
                    AppEvent::FileFailed {
                        file,
                        error: e.to_string(),
                    },
                )
                .await;
            }
        }
    }

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    stats
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markup::MarkupTree;
    use crate::domain::model::Category;
    use anyhow::{anyhow, Result};
    use tempfile::tempdir;

    /// Builds one "Dev" folder with a single link, whatever the input.
    struct FixedTokenizer;

    impl MarkupTokenizer for FixedTokenizer {
        fn tokenize(&self, text: &str) -> Result<MarkupTree, ParseError> {
            let mut tree = MarkupTree::new();
            if text.contains("EMPTY") {
                return Ok(tree);
            }
            let root = tree.root();
            let dt = tree.push_element(root, "dt", &[]);
            let h3 = tree.push_element(dt, "h3", &[]);
            tree.push_text(h3, "Dev");
            let dl = tree.push_element(dt, "dl", &[]);
            let link = tree.push_element(dl, "dt", &[]);
            let a = tree.push_element(link, "a", &[("href", "https://docs.rs")]);
            tree.push_text(a, "Docs");
            Ok(tree)
        }
    }

    struct CountingEmitter;

    impl PageEmitter for CountingEmitter {
        fn emit(&self, categories: &[Category]) -> Result<String> {
            Ok(format!("categories={}", categories.len()))
        }
    }

    struct FailingEmitter;

    impl PageEmitter for FailingEmitter {
        fn emit(&self, _categories: &[Category]) -> Result<String> {
            Err(anyhow!("template exploded"))
        }
    }

    #[tokio::test]
    async fn convert_file_writes_sibling_output() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("export.html");
        std::fs::write(&input, "<DL>").expect("write");

        let outcome = convert_file(
            &input,
            &FixedTokenizer,
            &CountingEmitter,
            &ConvertConfig::default(),
        )
        .await
        .expect("convert");

        assert_eq!(outcome.output, dir.path().join("export_nav.html"));
        assert_eq!(outcome.categories, 1);
        assert_eq!(outcome.links, 1);
        assert_eq!(
            std::fs::read_to_string(&outcome.output).expect("read"),
            "categories=1"
        );
        assert_eq!(std::fs::read_to_string(&input).expect("read"), "<DL>");
    }

    #[tokio::test]
    async fn convert_file_classifies_failures() {
        let dir = tempdir().expect("tempdir");
        let config = ConvertConfig::default();

        let missing = dir.path().join("missing.html");
        let err = convert_file(&missing, &FixedTokenizer, &CountingEmitter, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(_)));
        assert!(!err.is_warning());

        let empty = dir.path().join("empty.html");
        std::fs::write(&empty, "EMPTY").expect("write");
        let err = convert_file(&empty, &FixedTokenizer, &CountingEmitter, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::Empty(_)));
        assert!(err.is_warning());
        assert!(!dir.path().join("empty_nav.html").exists());

        let ok = dir.path().join("ok.html");
        std::fs::write(&ok, "x").expect("write");
        let err = convert_file(&ok, &FixedTokenizer, &FailingEmitter, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::Render(_)));
        assert!(err.to_string().contains("template exploded"));
    }

    #[tokio::test]
    async fn convert_file_refuses_when_output_is_input() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("self.html");
        std::fs::write(&input, "x").expect("write");

        let config = ConvertConfig {
            output_suffix: ".html".to_string(),
            ..ConvertConfig::default()
        };
        let err = convert_file(&input, &FixedTokenizer, &CountingEmitter, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::WouldOverwriteInput(_)));
        assert_eq!(std::fs::read_to_string(&input).expect("read"), "x");
    }

    #[tokio::test]
    async fn write_failure_fails_one_file_and_the_batch_moves_on() {
        let dir = tempdir().expect("tempdir");
        let blocked = dir.path().join("a.html");
        let fine = dir.path().join("b.html");
        std::fs::write(&blocked, "x").expect("write");
        std::fs::write(&fine, "x").expect("write");
        // Output name taken by a directory.
        std::fs::create_dir(dir.path().join("a_nav.html")).expect("mkdir");

        let config = ConvertConfig::default();
        let err = convert_file(&blocked, &FixedTokenizer, &CountingEmitter, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
        assert!(!err.is_warning());
        assert!(err.to_string().starts_with("writing "));

        let stats = convert_batch(
            &[blocked, fine],
            &FixedTokenizer,
            &CountingEmitter,
            &config,
            None,
        )
        .await;
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.converted, 1);
        assert_eq!(stats.generated, vec!["b_nav.html".to_string()]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("b_nav.html")).expect("read"),
            "categories=1"
        );
    }

    #[tokio::test]
    async fn convert_batch_continues_past_failures_and_reports_events() {
        let dir = tempdir().expect("tempdir");
        let good = dir.path().join("a.html");
        let empty = dir.path().join("b.html");
        let gone = dir.path().join("c.html");
        std::fs::write(&good, "x").expect("write");
        std::fs::write(&empty, "EMPTY").expect("write");

        let (tx, mut rx) = mpsc::channel::<AppEvent>(32);
        let stats = convert_batch(
            &[good, empty, gone],
            &FixedTokenizer,
            &CountingEmitter,
            &ConvertConfig::default(),
            Some(tx),
        )
        .await;

        assert_eq!(stats.candidates, 3);
        assert_eq!(stats.converted, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.generated, vec!["a_nav.html".to_string()]);

        let mut events = Vec::new();
        while let Some(ev) = rx.recv().await {
            events.push(ev);
        }
        assert_eq!(events.len(), 7);
        assert!(matches!(events[1], AppEvent::FileConverted { .. }));
        assert!(matches!(events[3], AppEvent::FileSkipped { .. }));
        assert!(matches!(events[5], AppEvent::FileFailed { .. }));
        assert_eq!(events[6], AppEvent::Finished { stats });
    }
}
