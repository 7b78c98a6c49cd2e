mod dataset;
mod pipeline;

use clap::{ArgGroup, Parser, ValueEnum};
use findstore_core::DistanceUnit;
use findstore_geocode::GoogleGeocoder;
use tracing_subscriber::EnvFilter;

use crate::dataset::DatasetSource;
use crate::pipeline::{find_nearest_store, render, starting_location};

#[derive(Debug, Parser)]
#[command(name = "find-store")]
#[command(about = "Find the store closest to an address or zip code")]
#[command(group(ArgGroup::new("start").args(["address", "zip"]).multiple(false)))]
struct Cli {
    /// Street address to search from
    #[arg(long)]
    address: Option<String>,

    /// Zip code to search from
    #[arg(long)]
    zip: Option<String>,

    /// Distance units
    #[arg(long, value_enum, default_value_t = Units::Mi)]
    units: Units,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Units {
    Mi,
    Km,
}

impl From<Units> for DistanceUnit {
    fn from(units: Units) -> Self {
        match units {
            Units::Mi => DistanceUnit::Miles,
            Units::Km => DistanceUnit::Kilometers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let location = starting_location(cli.address.as_deref(), cli.zip.as_deref())?;

    let config = findstore_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    let geocoder = GoogleGeocoder::from_config(&config)?;
    let source = DatasetSource::from_config(&config);

    let result = find_nearest_store(&geocoder, location, || source.load()).await?;
    println!("{}", render(&result, cli.units.into(), cli.output)?);

    Ok(())
}

#[cfg(test)]
mod tests;
