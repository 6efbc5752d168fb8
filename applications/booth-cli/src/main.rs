/// Booth - listening room queue on the command line
use booth_cli::{commands, BoothConfig, Session};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "booth")]
#[command(about = "Queue shows from the Booth archive", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BOOTH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shows in the archive
    Archive {
        /// Only highlighted shows
        #[arg(long)]
        bangers: bool,
        /// Match against id, series or title
        filter: Option<String>,
    },
    /// Print the queue
    Show,
    /// Queue shows (re-adding moves a show to the end)
    Add {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Remove a show from the queue
    Remove { id: String },
    /// Move a show one place toward the head
    Up { id: String },
    /// Move a show one place toward the end
    Down { id: String },
    /// Shuffle the whole queue
    Shuffle,
    /// Empty the queue
    Clear,
    /// Print the queue as import text
    Export,
    /// Replace the queue from import text
    Import {
        /// File to read; `-` or nothing reads stdin
        file: Option<PathBuf>,
    },
    /// The current show finished playing
    Ended,
    /// Stay open and print the queue whenever another context changes it
    Watch,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = BoothConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let mut session = Session::open(config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Archive { bangers, filter } => {
            commands::archive(&session, bangers, filter.as_deref(), &mut out)?;
        }
        Commands::Show => commands::show(&session, &mut out)?,
        Commands::Add { ids } => commands::add(&mut session, &ids, &mut out)?,
        Commands::Remove { id } => commands::remove(&mut session, &id, &mut out)?,
        Commands::Up { id } => commands::move_up(&mut session, &id, &mut out)?,
        Commands::Down { id } => commands::move_down(&mut session, &id, &mut out)?,
        Commands::Shuffle => commands::shuffle(&mut session, &mut out)?,
        Commands::Clear => commands::clear(&mut session, &mut out)?,
        Commands::Export => commands::export(&session, &mut out)?,
        Commands::Import { file } => {
            let text = read_import(file)?;
            commands::import(&mut session, &text, &mut out)?;
        }
        Commands::Ended => commands::ended(&mut session, &mut out)?,
        Commands::Watch => {
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl-C: {}", e);
                }
            };
            commands::watch(&mut session, &mut out, shutdown).await?;
        }
    }

    Ok(())
}

fn read_import(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
