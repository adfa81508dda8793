use crate::infrastructure::event_printer::spawn_event_printer;
use crate::infrastructure::file_io::discover_candidates;
use crate::infrastructure::html5_tokenizer::Html5Tokenizer;
use crate::infrastructure::nav_page::NavPageEmitter;
use crate::usecase::config::{ConvertConfig, EVENTS_ENV_VAR};
use crate::usecase::convert::convert_batch;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::BatchStats;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::Path;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let dir = env::current_dir().context("resolving working directory")?;
    let config = ConvertConfig::default()
        .with_event_mode_override(env::var(EVENTS_ENV_VAR).ok().as_deref());
    run_with_args(&args, &dir, &config).await.map(|_| ())
}

/// Converts every candidate in `dir`. Only a failure to list `dir` is an
/// error; per-file problems are printed and counted.
pub async fn run_with_args(args: &[String], dir: &Path, config: &ConvertConfig) -> Result<BatchStats> {
    match Cli::parse(args)? {
        Cli::Convert => {}
    }

    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = spawn_event_printer(rx, config.event_mode);

    let _ = tx
        .send(AppEvent::ScanStarted {
            dir: dir.display().to_string(),
        })
        .await;

    let candidates = match discover_candidates(dir, config).await {
        Ok(candidates) => candidates,
        Err(e) => {
            drop(tx);
            printer.await.ok();
            return Err(e);
        }
    };

    let _ = tx
        .send(AppEvent::CandidatesFound {
            count: candidates.len(),
        })
        .await;

    let stats = if candidates.is_empty() {
        drop(tx);
        BatchStats::default()
    } else {
        convert_batch(&candidates, &Html5Tokenizer, &NavPageEmitter, config, Some(tx)).await
    };

    printer.await.ok();
    Ok(stats)
}

#[derive(Debug, PartialEq, Eq)]
enum Cli {
    Convert,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin>
        match args.get(1).map(String::as_str) {
            None => Ok(Cli::Convert),
            Some("-h" | "--help") => Err(anyhow!(usage())),
            Some(other) => Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
        }
    }
}

fn usage() -> &'static str {
    "Usage:\n  netscape-bookmark-nav\n\nConverts every Netscape bookmark export (*.html) in the current directory into\n<name>_nav.html, a single-file page with search. Files ending in _nav.html or\n.tmp.html and files starting with my_nav_page are skipped.\n\nEvents:\n  Set BOOKMARK_NAV_EVENTS=ndjson to print progress as NDJSON instead of text."
}
