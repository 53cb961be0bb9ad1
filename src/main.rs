use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use savey::cli::{
    error_hint, handle_site_command, handle_verify_command, with_login, Credentials, SiteCommand,
};
use savey::config::{SaveyPaths, Settings};
use savey::session::Client;
use savey::{SaveyError, SaveyResult};

#[derive(Parser)]
#[command(
    name = "savey",
    version,
    about = "Read accounts, categories and transactions from Savey.co",
    long_about = "savey logs in to Savey.co, reads your accounts, categories and \
                  transactions from the site's pages, and prints or exports them. \
                  Every command uses a fresh session and logs out when done."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Savey.co username
    #[arg(short, long, env = "SAVEY_USERNAME", global = true)]
    username: Option<String>,

    /// Savey.co password (prompted when absent)
    #[arg(long, env = "SAVEY_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Site(SiteCommand),

    /// Check a JSON export file without contacting the site
    Verify {
        /// Path of the JSON export
        file: PathBuf,
    },

    /// Show configuration
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("savey={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = SaveyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("savey-cli Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created, using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Base URL:       {}", settings.base_url);
            println!("  User agent:     {}", settings.user_agent);
            println!("  Timeout:        {}s", settings.timeout_secs);
            println!(
                "  Username:       {}",
                settings.username.as_deref().unwrap_or("(not set)")
            );
            println!("  Default format: {:?}", settings.default_format);
            return Ok(());
        }
        Some(Commands::Verify { file }) => {
            return report(handle_verify_command(&file, &mut std::io::stdout().lock()));
        }
        Some(Commands::Site(command)) => command,
        None => {
            println!("savey - Savey.co scraper");
            println!();
            println!("Run 'savey --help' for usage information.");
            return Ok(());
        }
    };

    let credentials = Credentials::resolve(cli.username, cli.password, &settings)?;
    let mut client = Client::new(&settings)?;

    let result = with_login(&mut client, &credentials, |client| {
        handle_site_command(
            client,
            command,
            &credentials.username,
            settings.default_format,
            &mut std::io::stdout().lock(),
        )
    });

    report(result)
}

/// Turn a command result into the process result, printing a hint on failure
fn report(result: SaveyResult<()>) -> Result<()> {
    result.map_err(|err: SaveyError| {
        if let Some(hint) = error_hint(&err) {
            eprintln!("hint: {}", hint);
        }
        err.into()
    })
}
