// crates/countrymap-core/src/form.rs

//! The form handler: one submission in, one outcome out.
//!
//! ```text
//! Selection ─▶ filter (continent, name) ─▶ REST details ─▶ neighbour pick
//!                    │ no match                                  │
//!                    ▼                                           ▼
//!              NoResult                     map rows ─▶ MapView + GeoJsonExport
//! ```

use crate::error::{GeoError, Result};
use crate::export::GeoJsonExport;
use crate::map::MapView;
use crate::model::{CountryRecord, CountryTable};
use crate::restcountries::{DetailsLookup, HttpClient, RestCountries};
use crate::selection::{Selection, NO_NEIGHBOR};
use crate::traits::CountrySearch;
use tracing::{debug, info};

pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// What the front-end should display for a submission.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    /// Nothing typed yet: only the selectors are shown.
    Idle { continent: String },
    /// The typed name matched no row of the chosen continent. No map, no
    /// download.
    NoResult { continent: String, message: String },
    Rendered(Box<Rendered>),
}

impl FormOutcome {
    pub fn continent(&self) -> &str {
        match self {
            FormOutcome::Idle { continent } | FormOutcome::NoResult { continent, .. } => continent,
            FormOutcome::Rendered(r) => &r.continent,
        }
    }

    pub fn rendered(&self) -> Option<&Rendered> {
        match self {
            FormOutcome::Rendered(r) => Some(r),
            _ => None,
        }
    }
}

/// A successful submission: details, neighbour selector, map and download.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub continent: String,
    /// The name exactly as the user typed it.
    pub typed_name: String,
    pub country: CountryRecord,
    pub details: DetailsLookup,
    /// Neighbour selector entries: [`NO_NEIGHBOR`] followed by the resolved
    /// neighbour names. Empty when the country has no neighbours.
    pub neighbor_options: Vec<String>,
    /// The chosen neighbour. It is drawn only when the dataset has an
    /// outline with that name (a neighbour shown as "Unknown" never has one).
    pub neighbor: Option<String>,
    /// Rows on the map and in the export: the country, then the neighbour.
    pub map_rows: Vec<CountryRecord>,
    pub map: MapView,
    pub export: GeoJsonExport,
}

impl Rendered {
    pub fn success_line(&self) -> String {
        format!("Selected country: {}", self.typed_name)
    }

    /// The status line under the details.
    pub fn neighbor_line(&self) -> String {
        match (&self.neighbor, self.neighbor_options.is_empty()) {
            (Some(n), _) => format!("Neighbor: {n}"),
            (None, true) => "No neighbors found.".to_string(),
            (None, false) => "No neighbors selected.".to_string(),
        }
    }

    pub fn feature_collection(&self) -> geojson::FeatureCollection {
        crate::model::convert::feature_collection(&self.map_rows)
    }
}

/// Runs submissions against one table and one API client.
pub struct CountryForm<'a, C> {
    table: &'a CountryTable,
    api: &'a RestCountries<C>,
}

impl<'a, C: HttpClient> CountryForm<'a, C> {
    pub fn new(table: &'a CountryTable, api: &'a RestCountries<C>) -> Self {
        Self { table, api }
    }

    pub fn table(&self) -> &'a CountryTable {
        self.table
    }

    /// Continent selector entries.
    pub fn continents(&self) -> Vec<&'a str> {
        self.table.continents()
    }

    /// Handle one submission.
    ///
    /// Remote "not found" is part of the outcome; transport failures and
    /// malformed API payloads are errors and abort this submission only.
    pub fn submit(&self, selection: &Selection) -> Result<FormOutcome> {
        let continent = self.resolve_continent(selection)?;

        if selection.country.is_empty() {
            return Ok(FormOutcome::Idle { continent });
        }

        let Some(country) = self.table.select_country(&continent, &selection.country) else {
            debug!(%continent, name = %selection.country, "no matching country");
            return Ok(FormOutcome::NoResult {
                continent,
                message: NO_RESULTS_MESSAGE.to_string(),
            });
        };
        info!(country = country.name(), %continent, "country selected");

        let details = self.api.country_details(&selection.country)?;

        let neighbor_options = match details.neighbors() {
            [] => Vec::new(),
            names => std::iter::once(NO_NEIGHBOR.to_string())
                .chain(names.iter().cloned())
                .collect(),
        };

        let chosen = selection.neighbor_in(&neighbor_options);
        let neighbor_row = chosen.and_then(|name| self.table.find_by_name(name));
        if let (Some(name), None) = (chosen, neighbor_row) {
            debug!(neighbor = name, "neighbour has no outline in the dataset");
        }

        let neighbor = chosen.map(str::to_string);

        let mut rows: Vec<&CountryRecord> = vec![country];
        rows.extend(neighbor_row);

        let map = MapView::for_records(&rows).ok_or_else(|| {
            GeoError::InvalidData(format!("{}: outline has no centroid", country.name()))
        })?;
        let export = GeoJsonExport::from_records(&rows)
            .ok_or_else(|| GeoError::InvalidData("nothing to export".into()))?;

        Ok(FormOutcome::Rendered(Box::new(Rendered {
            continent,
            typed_name: selection.country.clone(),
            country: country.clone(),
            details,
            neighbor_options,
            neighbor,
            map_rows: rows.into_iter().cloned().collect(),
            map,
            export,
        })))
    }

    fn resolve_continent(&self, selection: &Selection) -> Result<String> {
        match &selection.continent {
            Some(c) => Ok(c.clone()),
            None => self
                .table
                .continents()
                .first()
                .map(|c| c.to_string())
                .ok_or_else(|| GeoError::InvalidData("dataset has no continents".into())),
        }
    }
}
