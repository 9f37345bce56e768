//! coverplan - income protection calculator and quote request TUI
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use coverplan_app::config::{self, Settings, SinkKind};
use coverplan_app::ConfiguredSink;
use coverplan_core::prelude::*;

/// coverplan - estimate how much income protection you need
#[derive(Parser, Debug, Default)]
#[command(name = "coverplan")]
#[command(about = "Income protection calculator and quote request TUI", long_about = None)]
struct Args {
    /// Config file (defaults to .coverplan/config.toml in the current directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial monthly income/expenses in RM
    #[arg(long, value_name = "RM")]
    monthly: Option<u64>,

    /// Initial protection duration in years
    #[arg(long, value_name = "N")]
    years: Option<u32>,

    /// Deliver quote requests to this webhook URL
    #[arg(long, value_name = "URL")]
    webhook: Option<String>,

    /// Write a default .coverplan/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

/// Command-line values take precedence over the config file
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(monthly) = args.monthly {
        settings.calculator.initial_monthly_amount = monthly;
    }
    if let Some(years) = args.years {
        settings.calculator.initial_years = years;
    }
    if let Some(url) = &args.webhook {
        settings.sink.kind = SinkKind::Webhook;
        settings.sink.webhook_url = url.clone();
    }
}

fn load_settings(args: &Args, project_dir: &std::path::Path) -> Settings {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_file(path),
        None => config::load_settings(project_dir),
    };
    apply_overrides(&mut settings, args);
    settings
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        let path = config::init_config_dir(&project_dir)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    coverplan_core::logging::init()?;

    let settings = load_settings(&args, &project_dir);
    if let Err(e) = settings.validate() {
        warn!("Invalid configuration: {}", e);
    }

    let sink = Arc::new(ConfiguredSink::from_settings_or_simulated(&settings.sink));

    let result = coverplan_tui::run(settings, sink).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("coverplan exiting");
    result
}
