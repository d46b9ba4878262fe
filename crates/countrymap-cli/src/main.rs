//! countrymap: command-line front-end for countrymap-core
//!
//! The same continent → country → neighbour flow as the web form, one
//! submission per invocation.
//!
//! Usage examples
//! --------------
//!
//! - Dataset summary and selector values
//!   $ countrymap stats
//!   $ countrymap continents
//!   $ countrymap countries "South America"
//!
//! - Details and neighbours (name is case-insensitive)
//!   $ countrymap lookup Europe france
//!   $ countrymap lookup Europe france --neighbor Germany
//!
//! - Download and map
//!   $ countrymap export Europe france --neighbor Belgium --out exports/
//!   $ countrymap map Europe france --out france.html
//!
//! Data source
//! -----------
//!
//! By default the bundled Natural Earth table is loaded (through its binary
//! cache). `--dataset <path>` points to any GeoJSON FeatureCollection with
//! `name` and `continent` properties; `countrymap fetch` downloads the full
//! upstream layer. Details come from REST Countries (`--api-url`).
mod args;
mod logging;

use crate::args::{CliArgs, Commands, Query};
use anyhow::Context;
use clap::Parser;
use countrymap_core::prelude::*;
use std::fs;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init("warn");

    #[cfg(feature = "builder")]
    if let Commands::Fetch { url, out } = &args.command {
        let out = out.clone().unwrap_or_else(CountryTable::default_dataset_path);
        let stats = countrymap_core::loader::builder::fetch_dataset(url, &out)
            .with_context(|| format!("fetching {url}"))?;
        println!(
            "Wrote {} ({} countries, {} continents)",
            out.display(),
            stats.countries,
            stats.continents
        );
        return Ok(());
    }

    // Load table (custom path, or the process-wide bundled one)
    let owned;
    let table: &CountryTable = match &args.dataset {
        Some(path) => {
            owned = CountryTable::load_cached(path)
                .with_context(|| format!("loading dataset {}", path.display()))?;
            &owned
        }
        None => CountryTable::shared().context("loading bundled dataset")?,
    };

    match &args.command {
        Commands::Stats => {
            let stats = table.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Continents: {}", stats.continents);
        }

        Commands::Continents => {
            for continent in table.continents() {
                println!("{continent}");
            }
        }

        Commands::Countries { continent } => {
            let rows = table.in_continent(continent);
            if rows.is_empty() {
                eprintln!("No countries in continent: {continent}");
            }
            for c in rows {
                println!("{} ({})", c.name(), c.iso_a3().unwrap_or("-"));
            }
        }

        Commands::Lookup { query } => {
            if let Some(rendered) = run_query(&args, table, query)? {
                print_rendered(&rendered);
            }
        }

        Commands::Export { query, out } => {
            if let Some(rendered) = run_query(&args, table, query)? {
                let path = rendered
                    .export
                    .write_to(out)
                    .with_context(|| format!("writing export into {}", out.display()))?;
                println!("Wrote {}", path.display());
            }
        }

        Commands::Map { query, out } => {
            if let Some(rendered) = run_query(&args, table, query)? {
                let html = rendered
                    .map
                    .to_leaflet_html(rendered.country.name(), &rendered.feature_collection());
                match out {
                    Some(path) => {
                        fs::write(path, html)
                            .with_context(|| format!("writing {}", path.display()))?;
                        println!("Wrote {}", path.display());
                    }
                    None => print!("{html}"),
                }
            }
        }

        #[cfg(feature = "builder")]
        Commands::Fetch { .. } => {}
    }

    Ok(())
}

/// Submit one query; prints the "no results" outcomes and returns the
/// rendered result otherwise.
fn run_query(args: &CliArgs, table: &CountryTable, query: &Query) -> anyhow::Result<Option<Rendered>> {
    let client = match args.timeout {
        Some(secs) => ReqwestClient::with_timeout(Duration::from_secs(secs))?,
        None => ReqwestClient::new()?,
    };
    let api = RestCountries::new(client, &args.api_url)?;
    let form = CountryForm::new(table, &api);

    let mut selection = Selection::new(&query.continent, &query.name);
    if let Some(n) = &query.neighbor {
        selection = selection.with_neighbor(n);
    }

    match form.submit(&selection)? {
        FormOutcome::Idle { continent } => {
            eprintln!("Enter a country name to search in {continent}.");
            Ok(None)
        }
        FormOutcome::NoResult { message, .. } => {
            println!("{message}");
            Ok(None)
        }
        FormOutcome::Rendered(rendered) => {
            if let (Some(wanted), None) = (&selection.neighbor, &rendered.neighbor) {
                eprintln!("{wanted} is not a neighbor of {}", rendered.country.name());
            }
            Ok(Some(*rendered))
        }
    }
}

fn print_rendered(rendered: &Rendered) {
    println!("{}", rendered.success_line());
    match &rendered.details {
        DetailsLookup::Found(d) => {
            println!("Name: {}", d.name);
            println!("Capital: {}", d.capital);
            println!("Population: {}", d.population);
            println!("Region: {}", d.region);
            println!("Subregion: {}", d.subregion);
            println!("Languages: {}", d.languages.join(", "));
            println!("Currencies: {}", d.currencies.join(", "));
            if !d.neighbors.is_empty() {
                println!("Neighbors: {}", d.neighbors.join(", "));
            }
        }
        DetailsLookup::NotFound(message) => println!("{message}"),
    }
    println!("{}", rendered.neighbor_line());
    println!(
        "Map: centre {:.4}, {:.4} at zoom {}",
        rendered.map.center.lat, rendered.map.center.lon, rendered.map.zoom
    );
    println!("Download: {}", rendered.export.file_name);
}
