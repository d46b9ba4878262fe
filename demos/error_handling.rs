//! Error handling example for countrymap
//!
//! "No results" and "no details" are values; unreadable data, unreachable
//! APIs and malformed payloads are errors.

use countrymap_core::prelude::*;

/// Answers every request with the same status.
struct FixedStatus(u16);

impl HttpClient for FixedStatus {
    fn get(&self, _url: &str) -> Result<HttpResponse> {
        Ok(HttpResponse::new(self.0, "{}"))
    }
}

/// Fails every request like a dead network.
struct Offline;

impl HttpClient for Offline {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        Err(GeoError::Http(format!("network unreachable: {url}")))
    }
}

fn main() -> Result<()> {
    println!("=== countrymap Error Handling Example ===\n");

    // Example 1: Dataset errors
    println!("--- Example 1: Loading datasets ---");
    match CountryTable::load_from_path("does/not/exist.geojson") {
        Ok(t) => println!("  unexpected: {} countries", t.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    match CountryTable::from_geojson_str(r#"{"type": "Point", "coordinates": [0, 0]}"#) {
        Ok(t) => println!("  unexpected: {} countries", t.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let table = CountryTable::shared()?;

    // Example 2: No match is an outcome, not an error
    println!("--- Example 2: No results ---");
    let api = RestCountries::new(FixedStatus(404), DEFAULT_BASE_URL)?;
    let form = CountryForm::new(table, &api);
    match form.submit(&Selection::new("Europe", "Atlantis"))? {
        FormOutcome::NoResult { message, .. } => println!("  {message}"),
        other => println!("  unexpected: {other:?}"),
    }

    // Example 3: API knows nothing about the country
    if let Some(r) = form.submit(&Selection::new("Europe", "France"))?.rendered() {
        if let DetailsLookup::NotFound(message) = &r.details {
            println!("  {message}");
        }
        println!("  map and download still available: {}", r.export.file_name);
    }
    println!();

    // Example 4: Transport failures abort the submission
    println!("--- Example 4: Unreachable API ---");
    let offline = RestCountries::new(Offline, DEFAULT_BASE_URL)?;
    match CountryForm::new(table, &offline).submit(&Selection::new("Europe", "France")) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!("  neighbour code lookups degrade instead: {}", offline.country_name("DEU"));
    println!();

    // Example 5: Configuration errors
    println!("--- Example 5: Bad API base URL ---");
    if let Err(e) = RestCountries::new(Offline, "mailto:someone") {
        println!("  ✗ {e}");
    }

    Ok(())
}
