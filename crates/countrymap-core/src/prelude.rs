//! countrymap prelude: bring common types and traits into scope for demos
//! and front-ends.

#![allow(unused_imports)]

pub use crate::common::DatasetStats;
pub use crate::error::{GeoError, Result};
pub use crate::export::{GeoJsonExport, GEOJSON_MIME};
pub use crate::form::{CountryForm, FormOutcome, Rendered, NO_RESULTS_MESSAGE};
pub use crate::map::{HighlightStyle, LatLon, MapView, DEFAULT_ZOOM};
pub use crate::model::{CountryRecord, CountryTable};
#[cfg(feature = "http")]
pub use crate::restcountries::ReqwestClient;
pub use crate::restcountries::{
    CountryDetails, DetailsLookup, HttpClient, HttpResponse, RestCountries, DEFAULT_BASE_URL,
    NOT_FOUND_MESSAGE, UNKNOWN_NEIGHBOR,
};
pub use crate::selection::{Selection, NO_NEIGHBOR};
pub use crate::text::{equals_case_folded, equals_folded, fold_key};
pub use crate::traits::{CountrySearch, NameMatch};
