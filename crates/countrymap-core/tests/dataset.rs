use countrymap_core::prelude::*;
use std::fs;

#[test]
fn bundled_dataset_loads() {
    let table = CountryTable::load_from_path(CountryTable::default_dataset_path()).unwrap();
    let stats = table.stats();
    assert!(stats.countries > 20);
    assert_eq!(stats.continents, table.continents().len());
    assert!(table.countries().iter().all(|c| c.centroid().is_some()));
    assert!(table.countries().iter().all(|c| c.iso_a3().is_some()));
}

#[test]
fn bundled_dataset_is_flagged_as_partial() {
    let table = CountryTable::load_from_path(CountryTable::default_dataset_path()).unwrap();
    assert!(table.is_partial_layer());
    assert!(table.find_by_name("Nigeria").is_none());
}

#[test]
fn bundled_dataset_covers_every_inhabited_continent() {
    let table = CountryTable::load_from_path(CountryTable::default_dataset_path()).unwrap();
    let continents = table.continents();
    for expected in [
        "Africa",
        "Asia",
        "Europe",
        "North America",
        "Oceania",
        "South America",
    ] {
        assert!(continents.contains(&expected), "missing {expected}");
    }
}

#[test]
fn multipart_countries_keep_every_part() {
    let table = CountryTable::load_from_path(CountryTable::default_dataset_path()).unwrap();
    let france = table.find_by_name("france").unwrap();
    assert_eq!(france.geometry().0.len(), 2);
    let belgium = table.find_by_name("Belgium").unwrap();
    assert_eq!(belgium.geometry().0.len(), 1);
}

#[test]
fn accented_names_match_with_and_without_accents() {
    let table = CountryTable::load_from_path(CountryTable::default_dataset_path()).unwrap();
    let exact = table.select_country("Africa", "côte d'ivoire").unwrap();
    assert_eq!(exact.name(), "Côte d'Ivoire");
    // the form filter is a plain case-insensitive match
    assert!(table.select_country("Africa", "Cote d'Ivoire").is_none());
    // neighbour lookup also folds accents
    assert_eq!(table.find_by_name("Cote d'Ivoire"), Some(exact));
}

#[test]
fn cache_is_written_next_to_a_copied_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("countries.geojson");
    fs::copy(CountryTable::default_dataset_path(), &source).unwrap();

    let fresh = CountryTable::load_cached(&source).unwrap();
    assert!(dir.path().join("countries.geojson.bin").exists());

    let cached = CountryTable::load_cached(&source).unwrap();
    assert_eq!(fresh.countries(), cached.countries());
}

#[test]
fn shared_table_is_loaded_once() {
    let a = CountryTable::shared().unwrap();
    let b = CountryTable::shared().unwrap();
    assert!(std::ptr::eq(a, b));
}
