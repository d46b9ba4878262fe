// crates/countrymap-core/src/loader/cache.rs

//! Binary (bincode) cache of a parsed dataset.
//!
//! Parsing the GeoJSON source is the slow part of a cold start; the cache
//! stores the parsed table next to the source as `<file>.bin` and is reused
//! while it is newer than the source.

use super::common_io;
use crate::error::Result;
use crate::model::CountryTable;
use bincode::Options;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CACHE_SUFFIX: &str = "bin";

/// Refuse to allocate more than this while decoding a cache file.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

fn cache_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
}

impl CountryTable {
    /// **Smart Load:** Checks cache, loads binary or parses the source.
    ///
    /// Writing the cache is best-effort; a read-only data directory only
    /// costs the re-parse on the next start.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX)?;

        // 1. Check Cache
        if is_cache_fresh(path, &cache_path) {
            match fs::read(&cache_path).map(|bytes| cache_options().deserialize::<CountryTable>(&bytes)) {
                Ok(Ok(table)) if !table.is_empty() => {
                    debug!(cache = %cache_path.display(), "using binary dataset cache");
                    return Ok(table);
                }
                _ => debug!(cache = %cache_path.display(), "binary cache unusable, rebuilding"),
            }
        }

        // 2. Parse
        let table = Self::load_from_path(path)?;

        // 3. Cache
        if let Err(e) = table.save_cache(&cache_path) {
            debug!(cache = %cache_path.display(), error = %e, "could not write dataset cache");
        }

        Ok(table)
    }

    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = cache_options().serialize(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Tiny","continent":"Europe"},
         "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}}
    ]}"#;

    #[test]
    fn first_load_writes_cache_and_second_load_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tiny.geojson");
        fs::write(&source, TINY).unwrap();

        let first = CountryTable::load_cached(&source).unwrap();
        let cache = dir.path().join("tiny.geojson.bin");
        assert!(cache.exists());
        assert!(is_cache_fresh(&source, &cache));

        let second = CountryTable::load_cached(&source).unwrap();
        assert_eq!(first.countries, second.countries);
    }

    #[test]
    fn corrupt_cache_falls_back_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tiny.geojson");
        fs::write(&source, TINY).unwrap();
        fs::write(dir.path().join("tiny.geojson.bin"), b"not bincode").unwrap();

        let table = CountryTable::load_cached(&source).unwrap();
        assert_eq!(table.len(), 1);
    }
}
