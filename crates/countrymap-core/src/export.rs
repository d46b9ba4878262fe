// crates/countrymap-core/src/export.rs

//! GeoJSON download of the rows shown on the map.

use crate::error::{GeoError, Result};
use crate::model::convert::feature_collection;
use crate::model::CountryRecord;
use deunicode::deunicode;
use std::fs;
use std::path::{Path, PathBuf};

pub const GEOJSON_MIME: &str = "application/json";

/// A ready-to-download GeoJSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoJsonExport {
    /// `{first row's name}.geojson`
    pub file_name: String,
    /// FeatureCollection text, one feature per row in the given order.
    pub body: String,
}

impl GeoJsonExport {
    /// `None` when there is nothing to export.
    pub fn from_records(records: &[&CountryRecord]) -> Option<Self> {
        let first = records.first()?;
        let body = feature_collection(records.iter().copied()).to_string();
        Some(Self {
            file_name: format!("{}.geojson", first.name()),
            body,
        })
    }

    /// [`Self::file_name`] transliterated to ASCII, for clients that ignore
    /// the UTF-8 `filename*` parameter.
    pub fn ascii_file_name(&self) -> String {
        deunicode(&self.file_name).replace(['"', '\\'], "_")
    }

    /// Write the document into `dir` under [`Self::file_name`].
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        if self.file_name.contains(['/', '\\']) {
            return Err(GeoError::InvalidData(format!(
                "refusing to write {:?}: name contains a path separator",
                self.file_name
            )));
        }
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body)?;
        Ok(path)
    }
}
