use std::io;

use clap::Parser;
use quiz_cli::client::{RankingClient, DEFAULT_API_URL};
use quiz_cli::{play, Pacing};
use quiz_core::GameSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aventura")]
#[command(about = "Aventura Matemática: ten arithmetic questions, three stars to earn")]
struct Args {
    /// Ranking backend base URL
    #[arg(long, env = "AVENTURA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Seed the problem generator for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses between screens
    #[arg(long)]
    fast: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let client = match RankingClient::new(&args.api_url) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "could not build HTTP client");
            std::process::exit(1);
        }
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = GameSession::new(rng);
    let pacing = if args.fast { Pacing::Fast } else { Pacing::Real };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Err(e) = play(&mut session, &client, &mut input, &mut out, pacing).await {
        error!(error = %e, "game aborted");
        std::process::exit(1);
    }
}
