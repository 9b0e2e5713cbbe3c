// SPDX-License-Identifier: PMPL-1.0-or-later

//! phrasebook: inspect and query localization dictionaries
//!
//! Thin command-line front end over the library, for checking a game's
//! dictionary during development and in CI.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use phrasebook::coverage::coverage_report;
use phrasebook::locale::{is_valid_iso639_1, language_name, native_name};
use phrasebook::report::{write_report, CoverageFormatter, ReportOutputFormat};
use phrasebook::{FsAssets, Locale, LocalizationStore, StoreConfig, TracingSink};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "phrasebook")]
#[command(version)]
#[command(about = "Query and check JSON localization dictionaries")]
#[command(long_about = None)]
struct Cli {
    /// Asset root the dictionary path is resolved against
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Store config file (json/yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a key, filling placeholders with PARAMS
    Get {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(value_name = "PARAMS")]
        params: Vec<String>,

        /// Requested locale, e.g. es_MX
        #[arg(short, long)]
        locale: Option<String>,

        /// Fail instead of printing the key when it has no text
        #[arg(long)]
        strict: bool,
    },

    /// List the locales the dictionary defines
    Locales,

    /// Report keys missing from each locale
    Check {
        /// Locale whose keys every other locale should have
        #[arg(long)]
        reference: Option<String>,

        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file format (default: from the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    let assets = FsAssets::new(&cli.root);

    match cli.command {
        Commands::Get {
            key,
            params,
            locale,
            strict,
        } => {
            let requested = locale.map(Locale::from);
            let store = LocalizationStore::open_with_config(
                &assets,
                requested.as_ref(),
                config,
                Arc::new(TracingSink),
            )?;
            if strict && !store.contains_key(&key) {
                return Err(anyhow!(
                    "'{}' has no text for locale {} in {}",
                    key,
                    store.locale(),
                    assets.root().join(&store.config().dictionary_path).display()
                ));
            }
            println!("{}", store.get_with(&key, &params));
        }

        Commands::Locales => {
            let store = LocalizationStore::open_with_config(
                &assets,
                None,
                config,
                Arc::new(TracingSink),
            )?;
            let default = &store.config().default_locale;
            for code in store.available_locales() {
                let label = describe(code);
                let marker = if code == default.language() {
                    " (default)".dimmed().to_string()
                } else {
                    String::new()
                };
                println!("{:8} {}{}", code.bold(), label, marker);
            }
        }

        Commands::Check {
            reference,
            output,
            format,
        } => {
            let store = LocalizationStore::open_with_config(
                &assets,
                None,
                config,
                Arc::new(TracingSink),
            )?;
            let reference = reference.unwrap_or_else(|| store.config().default_locale.to_string());
            let report = coverage_report(store.dictionary(), &reference, &store.config().placeholder);

            println!(
                "Dictionary: {}",
                assets.root().join(&store.config().dictionary_path).display()
            );
            CoverageFormatter::new().print(&report);

            if let Some(output_path) = output {
                let format = format.unwrap_or_else(|| ReportOutputFormat::for_path(&output_path));
                write_report(&report, &output_path, format)?;
                println!("Report saved to: {}", output_path.display());
            }

            if !report.is_complete() {
                return Err(anyhow!(
                    "{} locale(s) incomplete",
                    report.incomplete().count()
                ));
            }
        }
    }

    Ok(())
}

fn describe(code: &str) -> String {
    let locale = Locale::new(code);
    let base = locale.base_language().unwrap_or(code);
    match (language_name(base), native_name(base)) {
        (Some(english), Some(native)) if english != native => format!("{} / {}", english, native),
        (Some(english), _) => english.to_string(),
        _ if !is_valid_iso639_1(base) => "not an ISO 639-1 language".yellow().to_string(),
        _ => String::new(),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
