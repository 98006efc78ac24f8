mod repl;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use p2o_core::client::{PostmanClient, Transformer};
use p2o_core::config::{self, CONFIG_FILE_NAME, Config};
use p2o_core::error::TransformError;
use p2o_core::extract::COLLECTION_URL_EXAMPLE;
use p2o_core::session::{Session, Tab};
use p2o_core::{analyze, export};

use repl::Command;

#[derive(Parser)]
#[command(
    name = "p2o",
    about = "Convert Postman Collections into OpenAPI specifications",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a shared collection and show the result
    Convert {
        /// Collection API URL, e.g. https://api.postman.com/collections/<id>
        url: String,

        /// Tab to display (overview, endpoints, models, raw)
        #[arg(short, long)]
        tab: Option<Tab>,

        /// Write the specification as JSON into DIR (default from config)
        #[arg(long, value_name = "DIR", num_args = 0..=1, require_equals = true)]
        download: Option<Option<PathBuf>>,

        /// Copy the specification to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Interactive session: submit URLs, switch tabs, export
    Session,

    /// Show a previously exported specification
    Inspect {
        /// Path to the exported JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Tab to display (overview, endpoints, models, raw)
        #[arg(short, long, default_value = "overview")]
        tab: Tab,
    },

    /// Initialize a new p2o configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            url,
            tab,
            download,
            copy,
        } => cmd_convert(url, tab, download, copy).await,

        Commands::Session => cmd_session().await,

        Commands::Inspect { input, tab } => cmd_inspect(input, tab),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "p2o", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn load_config() -> Result<Config> {
    Ok(config::resolve(Path::new(CONFIG_FILE_NAME))?)
}

/// Run one submission through the session: validate, transform, apply.
async fn run_submission(session: &mut Session, input: &str, cfg: &Config) {
    let Ok(submission) = session.begin_submit(input, cfg.api_key()) else {
        return;
    };

    eprintln!("Converting collection {}...", submission.id);
    let result = match PostmanClient::from_config(cfg) {
        Ok(client) => client.transform(&submission.id).await,
        Err(e) => Err(e),
    };
    session.complete(submission, result);
}

fn print_summary(session: &Session) {
    if let Some(doc) = session.document() {
        eprintln!(
            "Generated OpenAPI {} spec: {} ({} endpoints)",
            doc.openapi().unwrap_or("?"),
            doc.title().unwrap_or("untitled"),
            analyze::endpoints(doc).len()
        );
    }
}

fn download(session: &Session, dir: &Path) -> Result<()> {
    let path = session.download(dir)?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

fn copy(session: &Session) -> Result<()> {
    if session.copy_to_clipboard()? {
        eprintln!("  copied to clipboard");
    } else {
        eprintln!("  warning: could not copy to clipboard (set RUST_LOG=warn for details)");
    }
    Ok(())
}

async fn cmd_convert(
    url: String,
    tab: Option<Tab>,
    download_dir: Option<Option<PathBuf>>,
    copy_json: bool,
) -> Result<()> {
    let cfg = load_config()?;
    let mut session = Session::new();

    run_submission(&mut session, &url, &cfg).await;
    if let Some(error) = session.error() {
        anyhow::bail!("{error}");
    }
    print_summary(&session);

    session.select_tab(tab.unwrap_or(cfg.default_tab));
    println!("{}", p2o_render::render_session(&session)?);

    if let Some(dir) = download_dir {
        let dir = dir.unwrap_or_else(|| PathBuf::from(&cfg.download_dir));
        download(&session, &dir)?;
    }
    if copy_json {
        copy(&session)?;
    }
    Ok(())
}

async fn cmd_session() -> Result<()> {
    let cfg = load_config()?;
    if cfg.api_key().is_none() {
        eprintln!("{}", TransformError::MissingApiKey);
    }
    eprintln!("{}\nExample: {COLLECTION_URL_EXAMPLE}\n", repl::HELP);

    let mut session = Session::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"p2o> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match repl::parse_command(&line) {
            Command::Quit => break,
            Command::Help => {
                eprintln!("{}", repl::HELP);
                continue;
            }
            Command::Unknown(msg) => {
                eprintln!("{msg}");
                continue;
            }
            Command::Tab(tab) => session.select_tab(tab),
            Command::Download(dir) => {
                let dir = dir.unwrap_or_else(|| PathBuf::from(&cfg.download_dir));
                if let Err(e) = download(&session, &dir) {
                    eprintln!("{e:#}");
                }
                continue;
            }
            Command::Copy => {
                if let Err(e) = copy(&session) {
                    eprintln!("{e:#}");
                }
                continue;
            }
            Command::Submit(url) => {
                run_submission(&mut session, &url, &cfg).await;
                print_summary(&session);
            }
        }

        if let Some(doc) = session.document().filter(|_| session.error().is_none()) {
            println!("{}", p2o_render::render_tab_bar(doc, session.tab()));
        }
        println!("{}", p2o_render::render_session(&session)?);
    }
    Ok(())
}

fn cmd_inspect(input: PathBuf, tab: Tab) -> Result<()> {
    let doc = export::load(&input)?;
    eprintln!(
        "Loaded {} ({})",
        input.display(),
        export::download_file_name(&doc)
    );
    println!("{}", p2o_render::render_tab_bar(&doc, tab));
    println!("{}", p2o_render::render_tab(&doc, tab)?);
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
