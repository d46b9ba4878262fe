// crates/countrymap-core/src/lib.rs

//! # countrymap-core
//!
//! Core of the country explorer: a bundled Natural Earth country table, a
//! continent/name filter, a REST Countries client, a Leaflet map view and a
//! GeoJSON export. [`form::CountryForm`] chains them into the single
//! request/response pipeline used by the CLI and the web form.
//!
//! ```no_run
//! use countrymap_core::prelude::*;
//!
//! let table = CountryTable::shared()?;
//! let api = RestCountries::new(ReqwestClient::new()?, DEFAULT_BASE_URL)?;
//! let form = CountryForm::new(table, &api);
//!
//! let outcome = form.submit(&Selection::new("Europe", "france"))?;
//! if let FormOutcome::Rendered(rendered) = outcome {
//!     println!("{}", rendered.export.file_name);
//! }
//! # Ok::<(), countrymap_core::GeoError>(())
//! ```

pub mod common;
pub mod error;
pub mod export;
pub mod form;
pub mod loader; // The public loader
pub mod map;
pub mod model;
pub mod prelude;
pub mod restcountries;
pub mod search;
pub mod selection;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{GeoError, Result};
pub use crate::model::{CountryRecord, CountryTable};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{CountrySearch, NameMatch};
