// crates/countrymap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! GeoJSON parser in [`crate::model::convert`].
//!
//! The bundled dataset is loaded once per process and kept in a read-only
//! singleton; see [`CountryTable::shared`].

use crate::error::{GeoError, Result};
use crate::model::convert::table_from_geojson;
use crate::model::CountryTable;
use geojson::GeoJson;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[cfg(feature = "builder")]
pub mod builder;
mod cache;
pub(crate) mod common_io;

static TABLE_CACHE: OnceCell<CountryTable> = OnceCell::new();

/// Upstream source of the bundled dataset (Natural Earth 1:110m admin-0 countries).
pub const NATURAL_EARTH_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

/// The Natural Earth 1:110m layer has 177 rows; fewer means a subset.
const FULL_LAYER_MIN_ROWS: usize = 100;

impl CountryTable {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "naturalearth_lowres.geojson"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    pub fn get_3rd_party_data_url() -> &'static str {
        NATURAL_EARTH_URL
    }

    /// Borrow the process-wide table built from the bundled dataset.
    ///
    /// The first call reads the dataset (through the binary cache when it
    /// is fresh); every later call returns the same table. There is no
    /// invalidation: the source is static.
    pub fn shared() -> Result<&'static CountryTable> {
        TABLE_CACHE.get_or_try_init(|| {
            let path = Self::default_dataset_path();
            let table = Self::load_cached(&path)?;
            info!(
                path = %path.display(),
                countries = table.len(),
                "country table loaded"
            );
            if table.is_partial_layer() {
                warn!(
                    countries = table.len(),
                    "bundled dataset is a partial subset; run `countrymap fetch` for every country"
                );
            }
            Ok(table)
        })
    }

    /// Fewer rows than the upstream Natural Earth layer: many countries
    /// will answer "No results found".
    pub fn is_partial_layer(&self) -> bool {
        self.len() < FULL_LAYER_MIN_ROWS
    }

    /// Owned copy of the memoized bundled table.
    pub fn load() -> Result<Self> {
        Self::shared().cloned()
    }

    /// Parse a GeoJSON dataset from disk, bypassing every cache.
    ///
    /// `.gz` files are decompressed when the `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_geojson_str(&text)
    }

    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let doc: GeoJson = text.parse()?;
        let table = table_from_geojson(doc)?;
        if table.is_empty() {
            return Err(GeoError::InvalidData("dataset contains no countries".into()));
        }
        Ok(table)
    }
}
