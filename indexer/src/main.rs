use anyhow::{Context, Result};
use clap::Parser;
use search_core::Index;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a static full-text search index from a tree of HTML files", long_about = None)]
struct Cli {
    /// Root directory with HTML documents
    #[arg(short, long)]
    dir: String,
    /// Output file
    #[arg(short, long, default_value = "search-index.json")]
    out: String,
    /// JavaScript variable to assign the index object to
    #[arg(long)]
    var: Option<String>,
    /// Weight multiplier for words in document titles
    #[arg(long, default_value_t = search_core::index::DEFAULT_TITLE_WEIGHT)]
    title_weight: u32,
    /// Also index URL path components, spreading this weight budget
    /// across them (10 when the flag is given without a value)
    #[arg(long, num_args = 0..=1, default_missing_value = "10")]
    url_weight: Option<u32>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let mut index = Index::new();
    index.html_title_weight = args.title_weight;
    index.url_weight = args.url_weight;

    let started = Instant::now();
    let dir = Path::new(&args.dir);
    let mut indexed = 0usize;
    for entry in walk_html_tree(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_html(entry.path()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");
        let url = clean_doc_url(&rel);
        let f = File::open(entry.path())
            .with_context(|| format!("opening {}", entry.path().display()))?;
        index
            .add_html(&url, f)
            .with_context(|| format!("indexing {}", entry.path().display()))?;
        tracing::info!(%url, "indexed");
        indexed += 1;
    }

    if indexed == 0 {
        tracing::warn!("no documents indexed");
        return Ok(());
    }

    let f = File::create(&args.out).with_context(|| format!("creating {}", args.out))?;
    let mut out = BufWriter::new(f);
    if let Some(var) = &args.var {
        write!(out, "{var} = ")?;
    }
    index.write_json(&mut out)?;
    out.flush()?;

    tracing::info!(
        docs = indexed,
        elapsed = ?started.elapsed(),
        output = %args.out,
        "index build complete"
    );
    Ok(())
}

// Document ids are assigned in visit order, so the walk sorts each
// directory's entries by name; raw readdir order varies across
// filesystems and would make the artifact differ between runs.
fn walk_html_tree(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir).sort_by_file_name().into_iter()
}

fn is_html(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("html" | "htm"))
}

/// Derive a document URL from a root-relative file path: drop an
/// `index.html`/`index.htm` basename and guarantee a leading slash.
fn clean_doc_url(rel: &str) -> String {
    let mut s = rel;
    for name in ["index.html", "index.htm"] {
        if let Some(prefix) = s.strip_suffix(name) {
            if prefix.is_empty() || prefix.ends_with('/') {
                s = prefix;
                break;
            }
        }
    }
    if s.starts_with('/') {
        s.to_string()
    } else {
        format!("/{s}")
    }
}
