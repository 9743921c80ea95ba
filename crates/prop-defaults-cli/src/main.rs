//! `prop-defaults` CLI: print the literal field defaults of exported
//! TypeScript classes as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Locate the source of a built file and print its defaults
//! prop-defaults dist/lib/Widget.js
//!
//! # Read source files directly
//! prop-defaults --source src/Widget.ts src/Button.ts
//!
//! # Different layout, compact output, debug logging on stderr
//! prop-defaults --source-dir source --extension mts --compact -v build/model.mjs
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use indexmap::IndexMap;
use prop_defaults::{DefaultsExtractor, DefaultsMap, ExtractConfig};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "prop-defaults",
    version,
    about = "Extract literal class-field defaults from TypeScript sources"
)]
struct Cli {
    /// Artifacts (or, with --source, source files) to read
    #[arg(required = true, value_name = "ARTIFACT")]
    inputs: Vec<PathBuf>,

    /// Treat the inputs as source files instead of locating their sources
    #[arg(long)]
    source: bool,

    /// Source directory next to the artifact directory
    #[arg(long, value_name = "DIR", default_value = prop_defaults::config::DEFAULT_SOURCE_DIR)]
    source_dir: String,

    /// Extension of the source files to look for
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Fail on any syntax error instead of extracting what survives
    #[arg(long)]
    strict_syntax: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ExtractConfig {
        let config = ExtractConfig::new()
            .with_source_dir(self.source_dir.as_str())
            .with_strict_syntax(self.strict_syntax);
        match &self.extension {
            Some(extension) => config.with_source_extension(extension.as_str()),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("prop-defaults v{} starting", prop_defaults::VERSION);
    debug!("Arguments: {:?}", cli);

    let extractor = DefaultsExtractor::with_config(cli.config());

    let json = if let [input] = cli.inputs.as_slice() {
        let defaults = defaults_for(&extractor, input, cli.source)?;
        to_json(&defaults, cli.compact)?
    } else {
        let mut all: IndexMap<String, DefaultsMap> = IndexMap::new();
        for input in &cli.inputs {
            let defaults = defaults_for(&extractor, input, cli.source)?;
            all.insert(input.display().to_string(), defaults);
        }
        to_json(&all, cli.compact)?
    };

    println!("{}", json);
    Ok(())
}

fn defaults_for(extractor: &DefaultsExtractor, input: &Path, is_source: bool) -> Result<DefaultsMap> {
    if is_source {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read file: {}", input.display()))?;
        extractor
            .extract(&text, &input.to_string_lossy())
            .with_context(|| format!("Failed to extract defaults from {}", input.display()))
    } else {
        extractor
            .from_artifact(input)
            .with_context(|| format!("Failed to extract defaults for {}", input.display()))
    }
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize defaults")
}

/// Install a stderr subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
