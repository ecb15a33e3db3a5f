#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the traffic infringement heatmap processor.
//!
//! Converts a CSV of infringement counts per district into a `GeoJSON`
//! point collection and a heatmap CSV for the web client, then copies both
//! into the client's data directory unless `--no-copy` is given.
//!
//! Progress is logged at `info` level by default; set `RUST_LOG` to change
//! it.

mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use infringement_map_generate::paths;

use crate::pipeline::ProcessOptions;

#[derive(Debug, Parser)]
#[command(
    name = "process_infringements",
    about = "Process traffic infringement data into heatmap GeoJSON and CSV"
)]
struct Cli {
    /// Input CSV file path [default: data/trafficinfringementsissued.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for processed files [default: data/output]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not copy output to the client data directory
    #[arg(long)]
    no_copy: bool,

    /// Client data directory to copy output into [default: client/data]
    #[arg(long, conflicts_with = "no_copy")]
    client_dir: Option<PathBuf>,
}

impl Cli {
    fn into_options(self) -> ProcessOptions {
        ProcessOptions {
            input: self.input.unwrap_or_else(paths::default_input_path),
            output_dir: self.output.unwrap_or_else(paths::default_output_dir),
            client_dir: if self.no_copy {
                None
            } else {
                Some(self.client_dir.unwrap_or_else(paths::client_data_dir))
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .try_init()
        .ok();

    let options = Cli::parse().into_options();
    let report = pipeline::run(&options)?;

    println!(
        "Geocoded {} of {} records into {} locations",
        report.geocode.geocoded, report.records_loaded, report.locations
    );
    println!("GeoJSON: {}", report.outputs.geojson.display());
    println!("CSV:     {}", report.outputs.csv.display());
    if let Some(copies) = &report.client_copies {
        println!("Client:  {}", copies.geojson.display());
        println!("         {}", copies.csv.display());
    }

    Ok(())
}
