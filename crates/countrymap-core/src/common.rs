// crates/countrymap-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the loaded country table.
///
/// Returned by [`crate::CountrySearch::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub continents: usize,
}
