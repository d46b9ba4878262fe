// crates/countrymap-core/src/model/mod.rs
use geo::{Centroid, MultiPolygon, Point};
use serde::{Deserialize, Serialize};

pub mod convert;

/// One row of the bundled country dataset.
///
/// Immutable once loaded; shared read-only by every request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub continent: String,
    pub iso_a3: Option<String>,
    pub pop_est: Option<f64>,
    /// Country outline. Single polygons are stored as one-element multipolygons.
    pub geometry: MultiPolygon<f64>,
}

impl CountryRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }

    /// ISO 3166-1 alpha-3 code, if the dataset carries a usable one.
    ///
    /// Natural Earth marks unknown codes with `-99`; those come back as `None`.
    pub fn iso_a3(&self) -> Option<&str> {
        self.iso_a3.as_deref().filter(|code| *code != "-99")
    }

    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    /// Area-weighted centroid of the outline (x = longitude, y = latitude).
    pub fn centroid(&self) -> Option<Point<f64>> {
        self.geometry.centroid()
    }
}

/// The full country table, in dataset order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryTable {
    pub(crate) countries: Vec<CountryRecord>,
}

impl CountryTable {
    pub fn new(countries: Vec<CountryRecord>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
