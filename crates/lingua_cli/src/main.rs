//! Lingua CLI
//!
//! Commands:
//! - `lingua label <code>`: label for one language code
//! - `lingua list <codes>...`: collation-sorted labels with their codes
//! - `lingua details <codes>...`: each language named in itself
//! - `lingua same <code>`: whether a code matches the current language
//! - `lingua resolve [code]`: show how a code resolves

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lingua_locale::{LocaleConfig, LocaleManager, ResolvedLocale};

#[derive(Parser)]
#[command(name = "lingua")]
#[command(author, version, about = "Resolve language codes and print localized language labels")]
struct Cli {
    /// Path to a lingua.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the default locale (e.g. `en_us`)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display label of a language code
    Label {
        code: String,

        /// Language the label is written in (defaults to the current locale)
        #[arg(short, long)]
        display: Option<String>,
    },

    /// Print labels sorted for a viewer, one `label<TAB>code` per line
    List {
        #[arg(required = true)]
        codes: Vec<String>,

        /// Locale used for both label text and sort order
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Print each language's name in that language
    Details {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Print whether a code names the current language
    Same { code: String },

    /// Show the language and region a code resolves to
    Resolve { code: Option<String> },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<LocaleConfig> {
    let mut config = match &cli.config {
        Some(path) => LocaleConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => LocaleConfig::default(),
    };
    if let Some(locale) = &cli.locale {
        config.default_locale = locale.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let manager = LocaleManager::from_config(&config).context("Failed to set up locales")?;
    debug!(locale = %manager.current_locale(), "lingua started");

    let viewer = |code: &Option<String>| -> ResolvedLocale { manager.resolve(code.as_deref()) };

    match &cli.command {
        Commands::Label { code, display } => {
            println!("{}", manager.language_label(code, &viewer(display)));
        }

        Commands::List { codes, sort } => {
            let sort_locale = viewer(sort);
            if let Some(list) = manager.sorted_labels(codes.as_slice(), &sort_locale) {
                for (label, code) in list.iter() {
                    println!("{label}\t{code}");
                }
            }
        }

        Commands::Details { codes } => {
            for detail in manager.detail_labels(codes.as_slice()).unwrap_or_default() {
                println!("{detail}");
            }
        }

        Commands::Same { code } => {
            println!("{}", manager.is_same_language(code));
        }

        Commands::Resolve { code } => {
            let loc = manager.resolve(code.as_deref());
            println!("language: {}", loc.language());
            println!("region:   {}", loc.region());
            println!("tag:      {}", loc.to_tag());
        }
    }

    Ok(())
}
