// crates/countrymap-core/src/selection.rs

//! Per-session form state: continent, typed country name, chosen neighbour.

use crate::text::equals_case_folded;
use serde::{Deserialize, Serialize};

/// Neighbour selector entry meaning "no neighbour".
pub const NO_NEIGHBOR: &str = "None";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// `None` selects the first continent of the table.
    pub continent: Option<String>,
    /// Country name as typed, with surrounding whitespace dropped so that a
    /// stray space does not turn a match into "No results found".
    pub country: String,
    pub neighbor: Option<String>,
}

impl Selection {
    pub fn new(continent: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            continent: Some(continent.into()),
            country: country.into().trim().to_string(),
            neighbor: None,
        }
    }

    /// Choose a neighbour; [`NO_NEIGHBOR`] and blank values clear it.
    pub fn with_neighbor(mut self, neighbor: impl Into<String>) -> Self {
        self.neighbor = normalize_neighbor(neighbor.into());
        self
    }

    /// Apply the user's next submission on top of this one.
    ///
    /// Upstream changes reset everything downstream: a new continent clears
    /// the country and the neighbour, a new country clears the neighbour.
    pub fn advance(&self, next: Selection) -> Selection {
        if next.continent != self.continent {
            return Selection {
                continent: next.continent,
                country: String::new(),
                neighbor: None,
            };
        }
        if !equals_case_folded(&next.country, &self.country) {
            return Selection {
                neighbor: None,
                ..next
            };
        }
        next
    }

    /// The chosen neighbour if it is one of `options`, ignoring stale picks.
    pub fn neighbor_in<'a>(&self, options: &'a [String]) -> Option<&'a str> {
        let wanted = self.neighbor.as_deref()?;
        options
            .iter()
            .map(String::as_str)
            .find(|opt| *opt != NO_NEIGHBOR && *opt == wanted)
    }
}

fn normalize_neighbor(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NO_NEIGHBOR {
        None
    } else {
        Some(trimmed.to_string())
    }
}
