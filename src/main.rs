use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mindmap::adapters::{JsonAdapter, OutlineAdapter};
use mindmap::commands::{self, ViewOptions, Watcher};
use mindmap::config::AppConfig;
use mindmap::error::AppError;
use mindmap::llm::OllamaClient;
use mindmap::session::EditorSession;

#[derive(Parser, Debug)]
#[command(name = "mindmap", about = "Markdown heading outline to mind-map editor core")]
struct Cli {
    /// Ollama model used by `enhance`.
    #[arg(long, global = true, env = "MINDMAP_MODEL")]
    model: Option<String>,

    #[arg(long, global = true, env = "MINDMAP_OLLAMA_URL")]
    ollama_url: Option<String>,

    /// Quiet period before edited text is re-laid out.
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene snapshot as JSON.
    Render(ViewArgs),
    /// Print the visible forest as an indented outline.
    Outline(ViewArgs),
    /// Restructure a document with the AI collaborator.
    Enhance {
        file: PathBuf,
        /// Save the result back to FILE instead of only printing it.
        #[arg(long, default_value_t = false)]
        write: bool,
    },
    /// Re-render FILE whenever it changes, until Ctrl-C.
    Watch {
        file: PathBuf,
        #[arg(long, default_value_t = 250)]
        poll_ms: u64,
        /// Emit JSON frames instead of outlines.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Markdown file; the built-in tutorial when omitted.
    file: Option<PathBuf>,

    #[arg(long)]
    search: Option<String>,

    /// Collapse nodes with this title. Repeatable.
    #[arg(long)]
    collapse: Vec<String>,

    #[arg(long, default_value_t = false)]
    snap: bool,
}

impl ViewArgs {
    fn split(self) -> (Option<PathBuf>, ViewOptions) {
        let options = ViewOptions { search: self.search, collapse: self.collapse, snap: self.snap };
        (self.file, options)
    }
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, ".env could not be loaded");
        }
    }

    if let Err(e) = run(Cli::parse()).await {
        error!(error = %e, "mindmap failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let overrides = [
        ("MINDMAP_MODEL", cli.model),
        ("MINDMAP_OLLAMA_URL", cli.ollama_url),
        ("MINDMAP_DEBOUNCE_MS", cli.debounce_ms.map(|ms| ms.to_string())),
    ];
    let config = AppConfig::from_env(&overrides)?;

    let client = OllamaClient::new(&config.llm)?;
    info!(model = %config.llm.model, url = %config.llm.base_url, "configuration loaded");
    let mut session = EditorSession::new(&config, Arc::new(client));

    match cli.command {
        Command::Render(view) => {
            let (file, options) = view.split();
            commands::prepare(&mut session, file.as_deref(), &options)?;
            println!("{}", commands::render_json(&session)?);
        }
        Command::Outline(view) => {
            let (file, options) = view.split();
            commands::prepare(&mut session, file.as_deref(), &options)?;
            print!("{}", commands::render_outline(&session));
        }
        Command::Enhance { file, write } => {
            let text = commands::enhance(&mut session, &file, write).await?;
            println!("{text}");
        }
        Command::Watch { file, poll_ms, json } => {
            let interval = Duration::from_millis(poll_ms.max(1));
            if json {
                let watcher = Watcher::new(session, file, JsonAdapter::new(false))?;
                watcher
                    .run(interval, |adapter| {
                        if let Some(frame) = adapter.last() {
                            println!("{frame}");
                        }
                    })
                    .await?;
            } else {
                let watcher = Watcher::new(session, file, OutlineAdapter::new())?;
                watcher.run(interval, |adapter| println!("{}", adapter.text())).await?;
            }
        }
    }
    Ok(())
}
