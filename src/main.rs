//! CLI for the doodle board: serve the web app, or generate doodles directly.

use clap::{Args, Parser, Subcommand};
use doodleboard::board::{Board, DoodleClient, HttpDoodleClient, LocalDoodleClient};
use doodleboard::server::{self, AppState};
use doodleboard::{DoodleProvider, DoodleRequest, OpenAiDoodleProvider};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;

#[derive(Parser)]
#[command(name = "doodleboard")]
#[command(about = "Crazy 8s doodle board: playful SVG workshop doodles via the OpenAI API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the doodle board web server
    Serve(ServeArgs),

    /// Generate a single doodle and save it as an SVG file
    Doodle(DoodleArgs),

    /// Generate one doodle per title, strictly in sequence, into a directory
    Board(BoardArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Port to listen on (default: the PORT env var, then 3000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Args)]
struct DoodleArgs {
    /// The trend or concept to illustrate
    prompt: String,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct BoardArgs {
    /// One trend title per tile
    #[arg(required = true)]
    titles: Vec<String>,

    /// Directory the generated doodles are written into
    #[arg(short, long)]
    output: PathBuf,

    /// Base URL of a running doodle server; omit to call the API in-process
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doodleboard=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => run_server(args).await?,
        Commands::Doodle(args) => generate_doodle(args).await?,
        Commands::Board(args) => generate_board(args).await?,
    }

    Ok(())
}

fn port_from_env() -> Option<u16> {
    std::env::var("PORT").ok().and_then(|value| value.parse().ok())
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let port = args.port.or_else(port_from_env).unwrap_or(DEFAULT_PORT);
    server::serve(AppState::from_env(), port).await?;
    Ok(())
}

async fn generate_doodle(args: DoodleArgs) -> anyhow::Result<()> {
    let provider = OpenAiDoodleProvider::builder().build()?;
    let request = DoodleRequest::new(&args.prompt);

    let doodle = provider.generate(&request).await?;
    doodle.save(&args.output)?;

    println!(
        "Generated doodle: {} ({} bytes) via {}",
        args.output.display(),
        doodle.size(),
        provider.name()
    );
    if let Some(duration) = doodle.metadata.duration_ms {
        println!("Duration: {}ms", duration);
    }

    Ok(())
}

async fn generate_board(args: BoardArgs) -> anyhow::Result<()> {
    let client: Box<dyn DoodleClient> = match &args.server {
        Some(base_url) => Box::new(HttpDoodleClient::new(base_url)),
        None => {
            let provider = OpenAiDoodleProvider::builder().build()?;
            Box::new(LocalDoodleClient::new(Arc::new(provider)))
        }
    };

    std::fs::create_dir_all(&args.output)?;

    let mut board = Board::from_titles(args.titles.iter().cloned());
    board.generate_all(client.as_ref()).await;

    for tile in &board.tiles {
        match tile.download(&args.output)? {
            Some(path) => println!("  #{} {}: {}", tile.index + 1, tile.title, path.display()),
            None => println!(
                "  #{} {}: {}",
                tile.index + 1,
                tile.title,
                tile.status.message()
            ),
        }
    }
    println!("{}", board.status.message());

    Ok(())
}
