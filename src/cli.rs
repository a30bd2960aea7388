use crate::{
    classifier::{build_request, ChapterClassifier},
    completion::HttpCompletion,
    config::Config,
    engine::LopdfEngine,
    index::load_index,
    page_range::PageRange,
    report::IndexSummary,
    splitter,
    util::{ensure_parent, now_rfc3339},
};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "chapter-router")]
#[command(about = "Route questions to book chapters via an LLM and slice page ranges out of PDFs")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./chapter-router.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask which chapter of the book a question belongs to.
    Ask {
        question: Option<String>,
        /// Index PDF; defaults to paths.index_pdf.
        #[arg(long)]
        index: Option<PathBuf>,
        /// Print the completion request instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Copy an inclusive 1-based page range into a new PDF.
    Split {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, conflicts_with = "pages")]
        start: Option<u32>,
        #[arg(long, conflicts_with = "pages")]
        end: Option<u32>,
        /// Range as N-M, e.g. 419-479.
        #[arg(long)]
        pages: Option<PageRange>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the extracted index text.
    Index {
        #[arg(long)]
        index: Option<PathBuf>,
        /// Print page and character counts as JSON instead of the text.
        #[arg(long)]
        summary: bool,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;
    let _guard = init_logging(&args, &cfg)?;

    match &args.cmd {
        Command::Ask {
            question,
            index,
            dry_run,
        } => ask(&cfg, question.as_deref(), index.as_deref(), *dry_run),
        Command::Split {
            input,
            start,
            end,
            pages,
            output,
        } => {
            let range = pages.unwrap_or_else(|| {
                PageRange::new(
                    start.unwrap_or(cfg.split.start_page),
                    end.unwrap_or(cfg.split.end_page),
                )
            });
            split(&cfg, input.as_deref(), range, output.as_deref())
        }
        Command::Index { index, summary } => show_index(&cfg, index.as_deref(), *summary),
    }
}

fn resolve_config(user: Option<&Path>) -> Result<Config> {
    if let Some(p) = user {
        return Config::load(p);
    }
    let default = PathBuf::from("chapter-router.toml");
    if default.exists() {
        Config::load(&default)
    } else {
        Ok(Config::default())
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries command output, so logs go to stderr.
    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if cfg.logging.write_to_file && !cfg.logging.file_path.is_empty() {
        let path = Path::new(&cfg.logging.file_path);
        ensure_parent(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn load_env_file(cfg: &Config) {
    if cfg.paths.env_file.is_empty() {
        return;
    }
    let path = Path::new(&cfg.paths.env_file);
    if !path.exists() {
        debug!("no env file at {}", path.display());
        return;
    }
    if let Err(err) = dotenvy::from_path(path) {
        warn!("ignoring env file {}: {err}", path.display());
    }
}

fn index_path(cfg: &Config, user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let exe = std::env::current_exe().with_context(|| "locating the running binary")?;
    let base = exe
        .parent()
        .ok_or_else(|| anyhow!("binary has no parent directory: {}", exe.display()))?;
    Ok(cfg.paths.index_pdf_path(base))
}

fn ask(cfg: &Config, question: Option<&str>, index: Option<&Path>, dry_run: bool) -> Result<()> {
    let path = index_path(cfg, index)?;
    let engine = LopdfEngine::new();
    let index = load_index(&engine, &path)
        .with_context(|| format!("loading index: {}", path.display()))?;
    let question = question.unwrap_or(cfg.ask.question.as_str());

    if dry_run {
        let req = build_request(cfg, &index, question);
        println!("{}", serde_json::to_string_pretty(&req)?);
        return Ok(());
    }

    load_env_file(cfg);
    let client = HttpCompletion::new(cfg).with_context(|| "creating completion client")?;
    info!("asking {} with model {}", client.endpoint(), cfg.llm.model);

    let classifier = ChapterClassifier::new(cfg, client, index);
    let answer = classifier
        .classify(question)
        .with_context(|| "classifying question")?;
    println!("{answer}");
    Ok(())
}

fn split(cfg: &Config, input: Option<&Path>, range: PageRange, output: Option<&Path>) -> Result<()> {
    let input = input
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.split.input_pdf));
    let output = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.split.output_pdf));

    let engine = LopdfEngine::new();
    let outcome = splitter::split_pdf(&engine, &input, range, &output)
        .with_context(|| format!("splitting pages {range} of {}", input.display()))?;

    if cfg.global.print_summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "outcome": outcome,
                "finished": now_rfc3339(),
                "status": "ok"
            }))?
        );
    }
    Ok(())
}

fn show_index(cfg: &Config, index: Option<&Path>, summary: bool) -> Result<()> {
    let path = index_path(cfg, index)?;
    let engine = LopdfEngine::new();
    let index = load_index(&engine, &path)
        .with_context(|| format!("loading index: {}", path.display()))?;

    if summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&IndexSummary::from(&index))?
        );
    } else {
        println!("{}", index.text);
    }
    Ok(())
}
