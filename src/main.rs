use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use photosynth_bot::core::BotConfig;
use photosynth_bot::policy::GreedyPolicy;
use photosynth_bot::protocol;

#[derive(Parser)]
#[command(name = "photosynth-bot")]
#[command(about = "Plays one side of the hex-grid tree game over stdin/stdout")]
#[command(version)]
struct Cli {
    /// Optional TOML file overriding heuristic weights and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter for stderr output (e.g. "debug", "photosynth_bot=trace")
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    // stdout belongs to the referee; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> photosynth_bot::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            BotConfig::from_file(path)?
        }
        None => BotConfig::default(),
    };

    let policy = GreedyPolicy::new(config);
    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout());
    protocol::run(stdin.lock(), stdout, &policy)?;
    Ok(())
}
