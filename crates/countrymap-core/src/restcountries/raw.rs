//! Payload shapes of the REST Countries v2 API.
//!
//! Only the fields we display are modelled. Required fields are required on
//! purpose: a payload without them is malformed and aborts the lookup.

use serde::Deserialize;

/// First element of `GET /v2/name/{name}`.
#[derive(Debug, Deserialize)]
pub(crate) struct CountryRaw {
    pub name: String,
    pub capital: String,
    pub population: u64,
    pub region: String,
    pub subregion: String,
    /// Island states have no `borders` key at all.
    #[serde(default)]
    pub borders: Vec<String>,
    pub languages: Vec<NamedRaw>,
    pub currencies: Vec<NamedRaw>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedRaw {
    pub name: String,
}

/// `GET /v2/alpha/{code}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AlphaRaw {
    pub name: String,
}
