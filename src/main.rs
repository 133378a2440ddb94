use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keypad::config::{self, Config};
use keypad::{calculator, ui};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keypad", version, about = "A small desktop calculator")]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Press buttons without opening a window and print the display
    Press {
        /// Button labels, e.g. `7 + 3 =`. ASCII `- * x /` are accepted for
        /// the operator symbols.
        #[arg(required = true, allow_hyphen_values = true)]
        labels: Vec<String>,
    },
    /// Print the default config file location
    ConfigPath,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::ConfigPath) => {
            let path = config::default_config_path()
                .context("Could not determine the user config directory")?;
            println!("{}", path.display());
        }
        Some(Command::Press { labels }) => {
            let config = load_config(cli.config)?;
            let state = calculator::press_labels(&labels).context("Invalid button sequence")?;
            println!(
                "{}",
                calculator::render_display(state.display(), &config.display)
            );
        }
        None => {
            let config = load_config(cli.config)?;
            tracing::info!("Starting calculator");
            ui::run(config);
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    Config::load(path.as_deref()).context("Failed to load config")
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "keypad=debug" } else { "keypad=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
