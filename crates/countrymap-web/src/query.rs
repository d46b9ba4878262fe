//! Query-string form state.
//!
//! The page is a plain GET form. Besides the visible fields it round-trips
//! the previous continent and country in hidden fields so that a change
//! upstream can reset the fields below it.

use countrymap_core::prelude::*;
use serde::Deserialize;
use url::form_urlencoded;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormQuery {
    pub continent: Option<String>,
    #[serde(default)]
    pub country: String,
    pub neighbor: Option<String>,
    pub prev_continent: Option<String>,
    pub prev_country: Option<String>,
}

impl FormQuery {
    /// The selection this request asks for, after applying the reset rules
    /// against the previous request's state.
    pub fn selection(&self) -> Selection {
        let mut next = Selection {
            continent: non_empty(&self.continent),
            ..Selection::default()
        };
        next.country = self.country.trim().to_string();
        if let Some(n) = &self.neighbor {
            next = next.with_neighbor(n);
        }

        match non_empty(&self.prev_continent) {
            Some(prev_continent) => {
                let prev = Selection {
                    continent: Some(prev_continent),
                    country: self.prev_country.as_deref().unwrap_or("").trim().to_string(),
                    neighbor: None,
                };
                prev.advance(next)
            }
            None => next,
        }
    }
}

/// `continent=..&country=..[&neighbor=..]` reproducing a rendered result,
/// for the download and full-page map links.
pub fn result_query(rendered: &Rendered) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("continent", &rendered.continent)
        .append_pair("country", &rendered.typed_name);
    if let Some(n) = &rendered.neighbor {
        query.append_pair("neighbor", n);
    }
    query.finish()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
