use anyhow::Result;
use clap::Parser;
use snake_arcade::game::GameConfig;
use snake_arcade::modes::HumanMode;
use tracing::info;

#[derive(Parser)]
#[command(name = "snake-arcade")]
#[command(version, about = "Snake arcade game: WASD or arrows to steer, space to start, Q to quit")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = GameConfig::default();
    info!(?config, "Starting snake");

    let mut human_mode = HumanMode::new(config);
    human_mode.run()?;

    info!("Goodbye");
    Ok(())
}

/// Logs go to stderr; the game owns stdout.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
