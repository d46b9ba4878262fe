// crates/countrymap-core/src/loader/builder.rs
#![cfg(feature = "builder")]

//! Dataset tooling: download the full Natural Earth country file.
//!
//! The repository ships a trimmed dataset; `fetch_dataset` replaces it with
//! the complete 1:110m admin-0 layer (about 177 countries).

use super::common_io;
use crate::common::DatasetStats;
use crate::error::{GeoError, Result};
use crate::model::CountryTable;
use crate::traits::CountrySearch;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip for `*.gz` targets, plain text otherwise.
    pub fn for_path(path: &Path) -> Self {
        if common_io::is_gzip(path) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

/// Download a GeoJSON country dataset and store it at `out_path`.
///
/// The payload is parsed before anything is written, so a broken download
/// never replaces a working dataset.
pub fn fetch_dataset(url: &str, out_path: &Path) -> Result<DatasetStats> {
    info!(%url, out = %out_path.display(), "downloading country dataset");

    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeoError::Http(format!("HTTP {status} from {url}")));
    }
    let body = response.text()?;

    let table = CountryTable::from_geojson_str(&body)?;
    let stats = table.stats();

    write_dataset(out_path, body.as_bytes(), CompressionMode::for_path(out_path))?;
    info!(
        countries = stats.countries,
        continents = stats.continents,
        "dataset written"
    );
    Ok(stats)
}

fn write_dataset(path: &Path, bytes: &[u8], compression: CompressionMode) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encoder.write_all(bytes)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GeoError::Config(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            writer.write_all(bytes)?;
            writer.flush()?;
        }
    }
    Ok(())
}
