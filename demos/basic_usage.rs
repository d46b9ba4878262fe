//! Basic usage example for countrymap
//!
//! This example demonstrates how to:
//! - Load the bundled country table
//! - Filter by continent and by (case-insensitive) name
//! - Frame a map and build the GeoJSON download
//! - Run a full form submission against REST Countries

use countrymap_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrymap Basic Usage Example ===\n");

    println!("Loading country table...");
    let table = CountryTable::shared()?;
    println!("✓ {} countries loaded\n", table.len());

    // Example 1: Continent selector
    println!("--- Example 1: Continents ---");
    for continent in table.continents() {
        println!("{continent}: {} countries", table.in_continent(continent).len());
    }
    println!();

    // Example 2: Name filter ignores case, but not the continent
    println!("--- Example 2: Select a country ---");
    for (continent, name) in [("Europe", "FRANCE"), ("Asia", "France"), ("Africa", "côte d'ivoire")] {
        match table.select_country(continent, name) {
            Some(c) => println!("{continent} / {name:?} -> {} ({})", c.name(), c.iso_a3().unwrap_or("-")),
            None => println!("{continent} / {name:?} -> {NO_RESULTS_MESSAGE}"),
        }
    }
    println!();

    // Example 3: Map view and download for a country and its neighbour
    println!("--- Example 3: Map and export ---");
    if let (Some(france), Some(belgium)) = (table.find_by_name("France"), table.find_by_name("Belgium")) {
        let rows = [france, belgium];
        if let Some(view) = MapView::for_records(&rows) {
            println!("Centre: {:.3}, {:.3} (zoom {})", view.center.lat, view.center.lon, view.zoom);
        }
        if let Some(export) = GeoJsonExport::from_records(&rows) {
            println!("Download: {} ({} bytes, {GEOJSON_MIME})", export.file_name, export.body.len());
        }
    }
    println!();

    // Example 4: Full submission (needs network access)
    println!("--- Example 4: Form submission ---");
    let api = RestCountries::new(ReqwestClient::new()?, DEFAULT_BASE_URL)?;
    let form = CountryForm::new(table, &api);
    let selection = Selection::new("Europe", "germany").with_neighbor("Poland");
    match form.submit(&selection) {
        Ok(FormOutcome::Rendered(r)) => {
            println!("{}", r.success_line());
            if let Some(d) = r.details.details() {
                println!("Capital: {}, neighbors: {}", d.capital, d.neighbors.join(", "));
            }
            println!("{}", r.neighbor_line());
        }
        Ok(other) => println!("Nothing rendered for {}", other.continent()),
        Err(e) => println!("REST Countries unavailable: {e}"),
    }

    Ok(())
}
