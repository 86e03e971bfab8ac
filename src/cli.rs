use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use drivehire_boundary as json;
use drivehire_core::{
    address_cache::AddressCache,
    entities::{LocationRecord, MapPoint, ServiceZone},
    usecases::{self, AddressDisplay, AddressResolver},
};
use serde::Serialize;

use crate::{config::Config, gateways};

const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(version, about = "Administrative tooling of the drivehire console")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the postal address of a position
    Resolve {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Show the addresses of location records (JSON array)
    Display {
        /// Never append the city to stored addresses
        #[arg(long)]
        no_city: bool,
        /// Input file or `-` for stdin
        file: PathBuf,
    },
    /// Convert a drawn path (JSON array of `{lat, lng}`) into a GeoJSON service zone
    Zone {
        name: String,
        /// Input file or `-` for stdin
        file: PathBuf,
        /// Check whether a position lies inside of the zone
        #[arg(
            long,
            num_args = 2,
            value_names = ["LAT", "LNG"],
            allow_negative_numbers = true
        )]
        probe: Option<Vec<f64>>,
    },
}

#[derive(Debug, Serialize)]
struct DisplayedLocation {
    initial: String,
    address: String,
    resolved: bool,
}

pub async fn run(command: Command, cfg: Config) -> Result<()> {
    match command {
        Command::Resolve { lat, lng } => {
            let resolver = address_resolver(&cfg)?;
            match resolver.resolve(Some(lat), Some(lng)).await {
                Some(address) => println!("{address}"),
                None => bail!("No address found for ({lat},{lng})"),
            }
        }
        Command::Display { no_city, file } => {
            let records: Vec<json::LocationRecord> = serde_json::from_str(&read_input(&file)?)?;
            let locations = records.into_iter().map(LocationRecord::from).collect();
            let append_city = cfg.display.append_city && !no_city;
            let resolver = Arc::new(address_resolver(&cfg)?);
            let displayed = display_locations(resolver, locations, append_city).await?;
            println!("{}", serde_json::to_string_pretty(&displayed)?);
        }
        Command::Zone { name, file, probe } => {
            let path: Vec<json::LatLng> = serde_json::from_str(&read_input(&file)?)?;
            let zone = ServiceZone::try_new(name, path.into_iter().map(MapPoint::from).collect())?;
            if let Some(probe) = probe {
                let &[lat, lng] = probe.as_slice() else {
                    bail!("Expected a latitude and a longitude");
                };
                let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid position ({lat},{lng})"))?;
                let inside = if zone.contains(pos) { "inside" } else { "outside" };
                log::info!("({pos}) is {inside} of zone '{}'", zone.name());
            }
            let zone = json::ServiceZone::from(zone);
            println!("{}", serde_json::to_string_pretty(&zone)?);
        }
    }
    Ok(())
}

fn address_resolver(cfg: &Config) -> Result<AddressResolver<gateways::GeoCodingGw>> {
    let gw = gateways::geocoding_gateway(&cfg.geocoding)?;
    Ok(AddressResolver::new(gw, Arc::new(AddressCache::new())))
}

async fn display_locations(
    resolver: Arc<AddressResolver<gateways::GeoCodingGw>>,
    locations: Vec<LocationRecord>,
    append_city: bool,
) -> Result<Vec<DisplayedLocation>> {
    let mut initial_texts = Vec::with_capacity(locations.len());
    let mut displays = Vec::with_capacity(locations.len());
    let mut tasks = Vec::new();
    for location in &locations {
        let display = Arc::new(AddressDisplay::new());
        if let Some(pending) = display.show(location, append_city) {
            let resolver = Arc::clone(&resolver);
            let display = Arc::clone(&display);
            tasks.push(tokio::spawn(async move {
                usecases::upgrade_address(&resolver, &display, pending).await
            }));
        }
        initial_texts.push(display.text());
        displays.push(display);
    }
    let task_count = tasks.len();
    let mut resolved_count = 0;
    for task in tasks {
        if task.await? {
            resolved_count += 1;
        }
    }
    log::info!(
        "Resolved {resolved_count} of {task_count} addresses ({} cached)",
        resolver.cache().len()
    );
    let displayed = initial_texts
        .into_iter()
        .zip(displays)
        .map(|(initial, display)| DisplayedLocation {
            initial,
            address: display.text(),
            resolved: display.state() == usecases::DisplayState::Resolved,
        })
        .collect();
    Ok(displayed)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
