//! Reddit Lens - a terminal client for Reddit analysis
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use rlens_app::config::{self, Settings};
use rlens_core::{DisplayMode, PanelId};

/// Reddit Lens - a terminal client for Reddit analysis
#[derive(Parser, Debug)]
#[command(name = "rlens", version)]
#[command(about = "A terminal client for Reddit analysis", long_about = None)]
struct Args {
    /// Path to config.toml (default: <config_dir>/reddit-lens/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Base address of the analysis service
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Start in light mode
    #[arg(long, conflicts_with = "dark")]
    light: bool,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Panel to open on startup, or "landing"
    #[arg(long, value_name = "PANEL")]
    panel: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one analysis and print the result
    Query {
        /// Panel id, e.g. toxicity-score
        panel: PanelId,

        /// Inputs as FIELD=VALUE, e.g. username=spez
        #[arg(value_name = "FIELD=VALUE", value_parser = query::parse_field)]
        fields: Vec<(String, String)>,

        /// Print the normalized result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List panels with their endpoints and inputs
    Panels,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write the default config file (never overwrites)
    Init,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    fn settings(&self) -> rlens_core::Result<Settings> {
        let mut settings = match self.config_path() {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        };
        config::apply_env_overrides(&mut settings);

        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if self.light {
            settings.ui.display_mode = DisplayMode::Light;
        } else if self.dark {
            settings.ui.display_mode = DisplayMode::Dark;
        }
        if let Some(start) = &self.panel {
            settings.ui.start_panel = config::parse_start_panel(start)?;
        }
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    rlens_core::logging::init()?;
    let settings = args.settings()?;

    match &args.command {
        None => rlens_tui::run(settings).await?,

        Some(Command::Query {
            panel,
            fields,
            json,
        }) => {
            let mut engine = rlens_app::Engine::connect(settings)?;
            let outcome = query::run_query(&mut engine, *panel, fields).await;
            engine.shutdown().await;

            match outcome.and_then(|result| query::format_result(&result, *json)) {
                Ok(output) => println!("{output}"),
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
        }

        Some(Command::Panels) => print!("{}", query::panel_listing()),

        Some(Command::Config {
            action: ConfigAction::Init,
        }) => {
            let Some(path) = args.config_path() else {
                eprintln!("❌ No config directory on this platform; pass --config <PATH>");
                std::process::exit(1);
            };
            if let Err(e) = config::init_config_file(&path) {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
            eprintln!("✅ Wrote {}", path.display());
        }
    }

    Ok(())
}
