use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use bibrank::{load_corpus, Engine, EngineBuilder, EngineConfig, SearchHit};

mod cli;
use cli::display::{self, field, heading, paint, truncate, Style};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so search output stays pipeable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "bibrank=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.engine_config()?;
    let path = cli.corpus_path().to_path_buf();
    let engine = build_engine(&path, config)?;

    match cli.command {
        Commands::Search { query, format, .. } => run_search(&engine, &query, format),
        Commands::Repl { .. } => run_repl(&engine),
        Commands::Inspect { terms, .. } => {
            run_inspect(&engine, &path, terms);
            Ok(())
        }
    }
}

fn build_engine(path: &Path, config: EngineConfig) -> Result<Engine> {
    let text =
        load_corpus(path).with_context(|| format!("cannot index {}", path.display()))?;
    let builder = EngineBuilder::new(config)?;

    let spinner = start_spinner(path);
    let started = Instant::now();
    let engine = builder.build(&text);
    finish_spinner(spinner);

    debug!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "index built"
    );
    if engine.sample().is_empty() {
        warn!(path = %path.display(), "no complete records found; every query will be empty");
    }
    Ok(engine)
}

#[cfg(feature = "parallel")]
fn start_spinner(path: &Path) -> Option<indicatif::ProgressBar> {
    if !atty::is(atty::Stream::Stderr) {
        return None;
    }
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_message(format!("Indexing {}", path.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(pb)
}

#[cfg(feature = "parallel")]
fn finish_spinner(spinner: Option<indicatif::ProgressBar>) {
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
}

#[cfg(not(feature = "parallel"))]
fn start_spinner(_path: &Path) {}

#[cfg(not(feature = "parallel"))]
fn finish_spinner(_spinner: ()) {}

fn run_search(engine: &Engine, query: &str, format: OutputFormat) -> Result<()> {
    let hits = engine.query(query);
    match format {
        OutputFormat::Text => display::print_results(query, &hits),
        OutputFormat::Json => print_json(query, &hits)?,
    }
    Ok(())
}

fn print_json(query: &str, hits: &[SearchHit<'_>]) -> Result<()> {
    let out = serde_json::json!({
        "query": query,
        "results": hits,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Prompt, rank, print, repeat. Ctrl-C or Ctrl-D ends the session.
fn run_repl(engine: &Engine) -> Result<()> {
    let mut rl = DefaultEditor::new().context("cannot start line editor")?;

    println!("{} papers indexed.", engine.sample().len());
    println!("Enter your query. To exit, press Ctrl-C.");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(query);
                let hits = engine.query(query);
                display::print_results(query, &hits);
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => return Err(e).context("failed to read query"),
        }
    }
    Ok(())
}

fn run_inspect(engine: &Engine, path: &Path, terms: usize) {
    let config = engine.config();
    let index = engine.index();

    heading("CORPUS");
    field("File", path.display());
    if let Some(stats) = engine.parse_stats() {
        field("Entry blocks", stats.blocks);
        field("Without abstract", stats.without_abstract);
        field("Missing fields", stats.incomplete);
    }
    field("Records", engine.corpus_len());

    heading("SAMPLE");
    field("Requested", config.sample_size);
    field("Indexed", engine.sample().len());
    field("Seed", config.seed);

    heading("VOCABULARY");
    field("Terms", index.vocabulary().len());
    let nnz: usize = index.rows().iter().map(|r| r.nnz()).sum();
    field("Non-zero weights", nnz);
    for (term, idf) in index.top_idf_terms(terms) {
        let term = format!("{:<24}", truncate(term, 24));
        println!("    {} idf {:.4}", paint(Style::Prompt, &term), idf);
    }

    heading("QUERY");
    field("Top k", config.top_k);
    field("Minimum score", config.min_score);
    println!();
}
