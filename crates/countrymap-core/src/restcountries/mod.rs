// crates/countrymap-core/src/restcountries/mod.rs

//! # REST Countries client
//!
//! Fetches country metadata from the REST Countries v2 API:
//!
//! - `GET {base}/v2/name/{name}` → array; the first element is the match.
//! - `GET {base}/v2/alpha/{code}` → object with a `name`, used once per
//!   bordering country to turn ISO codes into display names.
//!
//! Neighbour codes are resolved one after another, in the order the API
//! lists them. There is no retry and no batching.

mod http;
mod raw;

pub use self::http::{HttpClient, HttpResponse};
#[cfg(feature = "http")]
pub use self::http::ReqwestClient;

use self::raw::{AlphaRaw, CountryRaw};
use crate::error::{GeoError, Result};
use crate::text::capitalize;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Display name for a neighbour code whose lookup failed.
pub const UNKNOWN_NEIGHBOR: &str = "Unknown";

/// Shown instead of details when the name lookup is rejected by the API.
pub const NOT_FOUND_MESSAGE: &str = "Sorry, no details found for this country, please try again..";

/// Country metadata as displayed to the user.
///
/// Created fresh per lookup and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetails {
    pub name: String,
    pub capital: String,
    pub population: u64,
    pub region: String,
    pub subregion: String,
    pub languages: Vec<String>,
    pub currencies: Vec<String>,
    /// Display names of bordering countries, in `borders` order.
    pub neighbors: Vec<String>,
}

/// Outcome of a details lookup that reached the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailsLookup {
    Found(CountryDetails),
    /// The API answered with a non-success status (or an empty result);
    /// carries the message to show in place of the details.
    NotFound(String),
}

impl DetailsLookup {
    pub fn details(&self) -> Option<&CountryDetails> {
        match self {
            DetailsLookup::Found(d) => Some(d),
            DetailsLookup::NotFound(_) => None,
        }
    }

    pub fn neighbors(&self) -> &[String] {
        self.details().map(|d| d.neighbors.as_slice()).unwrap_or(&[])
    }
}

/// REST Countries client over any [`HttpClient`].
#[derive(Debug, Clone)]
pub struct RestCountries<C> {
    client: C,
    base_url: Url,
}

impl<C: HttpClient> RestCountries<C> {
    /// `base_url` is the API host, e.g. [`DEFAULT_BASE_URL`]; the `/v2/...`
    /// paths are appended to it.
    pub fn new(client: C, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GeoError::Config(format!("invalid API base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GeoError::Config(format!(
                "API base URL {base_url} cannot carry a path"
            )));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Look up a country by (typed) name.
    ///
    /// A non-success status becomes [`DetailsLookup::NotFound`] with
    /// [`NOT_FOUND_MESSAGE`]. Transport failures and malformed payloads
    /// are errors.
    pub fn country_details(&self, name: &str) -> Result<DetailsLookup> {
        let url = self.endpoint("name", name)?;
        debug!(%url, "fetching country details");

        let response = self.client.get(url.as_str())?;
        if !response.is_success() {
            debug!(status = response.status, country = name, "no details found");
            return Ok(DetailsLookup::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        let matches: Vec<serde_json::Value> = serde_json::from_slice(&response.body)?;
        let Some(first) = matches.into_iter().next() else {
            return Ok(DetailsLookup::NotFound(NOT_FOUND_MESSAGE.to_string()));
        };
        let raw: CountryRaw = serde_json::from_value(first)?;

        let neighbors = self.resolve_neighbors(&raw.borders);

        Ok(DetailsLookup::Found(CountryDetails {
            name: capitalize(&raw.name),
            capital: raw.capital,
            population: raw.population,
            region: raw.region,
            subregion: raw.subregion,
            languages: raw.languages.into_iter().map(|l| l.name).collect(),
            currencies: raw.currencies.into_iter().map(|c| c.name).collect(),
            neighbors,
        }))
    }

    /// Display name for an ISO code, or [`UNKNOWN_NEIGHBOR`] when the lookup
    /// fails for any reason.
    pub fn country_name(&self, code: &str) -> String {
        match self.try_country_name(code) {
            Ok(name) => name,
            Err(e) => {
                warn!(code, error = %e, "neighbour lookup failed");
                UNKNOWN_NEIGHBOR.to_string()
            }
        }
    }

    /// Resolve every code in order, one request at a time.
    pub fn resolve_neighbors(&self, codes: &[String]) -> Vec<String> {
        codes.iter().map(|code| self.country_name(code)).collect()
    }

    fn try_country_name(&self, code: &str) -> Result<String> {
        let url = self.endpoint("alpha", code)?;
        debug!(%url, "resolving neighbour code");

        let response = self.client.get(url.as_str())?;
        if !response.is_success() {
            return Err(GeoError::NotFound(format!(
                "HTTP {} for country code {code}",
                response.status
            )));
        }
        let raw: AlphaRaw = serde_json::from_slice(&response.body)?;
        Ok(raw.name)
    }

    /// `{base}/v2/{kind}/{value}` with `value` percent-encoded as one segment.
    fn endpoint(&self, kind: &str, value: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GeoError::Config(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v2", kind, value]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct StubClient {
        routes: HashMap<String, HttpResponse>,
        calls: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn route(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert(url.to_string(), HttpResponse::new(status, body));
            self
        }
    }

    impl HttpClient for StubClient {
        fn get(&self, url: &str) -> Result<HttpResponse> {
            self.calls.lock().unwrap().push(url.to_string());
            self.routes
                .get(url)
                .cloned()
                .ok_or_else(|| GeoError::Http(format!("connection refused: {url}")))
        }
    }

    const BASE: &str = "http://api.test";

    #[test]
    fn endpoint_encodes_the_value_as_one_segment() {
        let api = RestCountries::new(StubClient::default(), "http://api.test/").unwrap();
        let url = api.endpoint("name", "United States of America").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.test/v2/name/United%20States%20of%20America"
        );
        let url = api.endpoint("name", "a/b").unwrap();
        assert_eq!(url.as_str(), "http://api.test/v2/name/a%2Fb");
    }

    #[test]
    fn non_success_status_is_not_found_message() {
        let stub = StubClient::default().route("http://api.test/v2/name/atlantis", 404, "{}");
        let api = RestCountries::new(stub, BASE).unwrap();
        let lookup = api.country_details("atlantis").unwrap();
        assert_eq!(lookup, DetailsLookup::NotFound(NOT_FOUND_MESSAGE.into()));
    }

    #[test]
    fn transport_failure_is_an_error() {
        let api = RestCountries::new(StubClient::default(), BASE).unwrap();
        assert!(matches!(api.country_details("france"), Err(GeoError::Http(_))));
    }

    #[test]
    fn failed_code_lookup_is_unknown() {
        let stub = StubClient::default().route("http://api.test/v2/alpha/XXX", 400, "");
        let api = RestCountries::new(stub, BASE).unwrap();
        assert_eq!(api.country_name("XXX"), UNKNOWN_NEIGHBOR);
        // no route at all: transport error, same result
        assert_eq!(api.country_name("YYY"), UNKNOWN_NEIGHBOR);
    }

    #[test]
    fn malformed_payload_propagates() {
        let stub = StubClient::default().route(
            "http://api.test/v2/name/france",
            200,
            r#"[{"name":"France"}]"#,
        );
        let api = RestCountries::new(stub, BASE).unwrap();
        assert!(matches!(api.country_details("france"), Err(GeoError::Json(_))));
    }

    #[test]
    fn empty_result_array_is_not_found() {
        let stub = StubClient::default().route("http://api.test/v2/name/france", 200, "[]");
        let api = RestCountries::new(stub, BASE).unwrap();
        assert!(matches!(
            api.country_details("france").unwrap(),
            DetailsLookup::NotFound(_)
        ));
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let err = RestCountries::new(StubClient::default(), "not a url").unwrap_err();
        assert!(matches!(err, GeoError::Config(_)));
    }
}
