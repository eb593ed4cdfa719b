use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use wordz::config::Config;
use wordz::{DocumentText, GeminiSource, TruncationMarker, View};

#[derive(Parser)]
#[command(name = "wordz", about = "Patent Wordz: keywords and compact prior-art search queries")]
struct Cli {
    /// Write debug logs to /tmp/wordz-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/wordz/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compact a keyword and its synonyms into one boolean-OR query.
    Query {
        /// Truncation marker appended to shared stems (`+` or `*`).
        #[arg(short, long, default_value = "+")]
        marker: TruncationMarker,
        /// Keyword followed by its synonyms. Everything after the first
        /// term is taken as a term, even if it starts with `-`.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },
    /// Extract keywords from patent text with Gemini and build queries.
    Analyze {
        /// Output view: cards, orbit, google or json.
        #[arg(long)]
        view: Option<View>,
        /// Plain-text patent file; reads stdin when omitted or `-`.
        file: Option<PathBuf>,
    },
    /// Build queries from a saved keyword response (`{"keywords": [...]}`).
    Build {
        /// Output view: cards, orbit, google or json.
        #[arg(long)]
        view: Option<View>,
        keywords: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/wordz-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("wordz debug log started, tail -f /tmp/wordz-debug.log");
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Query { marker, terms } => {
            println!("{}", wordz::compact_query(&terms, marker));
        }
        Command::Analyze { view, file } => {
            let document = read_document(file.as_deref())?;
            let source = GeminiSource::from_config(&config.extractor)
                .map_err(|e| anyhow::anyhow!("An error occurred: {e}"))?;
            tracing::debug!(model = source.model(), "keyword source ready");
            let runtime = tokio::runtime::Runtime::new()?;
            let results = runtime
                .block_on(wordz::analyze(&source, &document, config.queries.markers()))
                .map_err(|e| anyhow::anyhow!("An error occurred: {e}"))?;
            emit(&wordz::render(&results, view.unwrap_or(config.output.view))?);
        }
        Command::Build { view, keywords } => {
            let json = std::fs::read_to_string(&keywords)
                .with_context(|| format!("reading {}", keywords.display()))?;
            let parsed = wordz::parse_keywords(&json)
                .map_err(|e| anyhow::anyhow!("An error occurred: {e}"))?;
            let results = wordz::build_results(parsed, config.queries.markers());
            emit(&wordz::render(&results, view.unwrap_or(config.output.view))?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default config");
            Config::defaults()
        })),
    }
}

fn read_document(path: Option<&Path>) -> anyhow::Result<DocumentText> {
    let document = match path {
        Some(path) if path != Path::new("-") => DocumentText::from_path(path),
        _ => DocumentText::from_reader(std::io::stdin().lock()),
    };
    document.map_err(|e| anyhow::anyhow!("{e}"))
}

fn emit(out: &str) {
    if out.is_empty() || out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}
