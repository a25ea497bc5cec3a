mod config;
mod run;

use clap::Parser;

#[derive(Parser)]
#[command(name = "reviewer-karma")]
#[command(about = "Track reviewer engagement and generate a karma-based leaderboard")]
#[command(after_help = "\
Environment variables:
  GITHUB_TOKEN                GitHub token for API access (required)
  GITHUB_REPOSITORY           Repository name, owner/repo form (required)
  REVIEW_POINT                Points for reviews (default: 1)
  POSITIVE_EMOJI_POINT        Points for positive emojis (default: 2)
  CONSTRUCTIVE_COMMENT_POINT  Points for constructive comments (default: 1)
  INCREMENTAL_UPDATE          Process only new pull requests (default: false)")]
struct Cli {}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let _cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run::run(&config).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
