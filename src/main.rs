//! Binary entrypoint for xmlback.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use xmlback::config::Settings;
use xmlback::output::Destination;

/// Write a GNOME slideshow background for a directory of images.
#[derive(Debug, Parser)]
#[command(name = "xmlback", version, about)]
struct Cli {
    /// Directory containing .jpg and .png images
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Output file, or - for standard output
    #[arg(default_value = "-")]
    output: Destination,

    /// Seconds per image, cross-fade included [default: 900]
    duration: Option<u64>,

    /// Seconds per cross-fade [default: 2]
    transition: Option<u64>,

    /// Optional YAML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_yaml_file(path)?,
            None => Settings::default(),
        };
        if let Some(secs) = self.duration {
            settings.duration = Duration::from_secs(secs);
        }
        if let Some(secs) = self.transition {
            settings.transition = Duration::from_secs(secs);
        }
        settings.validated().context("validating settings")
    }
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(format!("xmlback={level}").parse()?);
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let settings = cli.settings()?;
    let mut rng = xmlback::shuffle_rng(&settings);
    let bg = xmlback::build_background(&cli.directory, &settings, &mut rng)
        .with_context(|| format!("building background from {}", cli.directory.display()))?;
    xmlback::write_background(&bg, &cli.output)
        .with_context(|| format!("writing background to {}", cli.output))?;
    Ok(())
}
