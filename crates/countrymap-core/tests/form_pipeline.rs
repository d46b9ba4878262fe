//! End-to-end submissions against the bundled dataset with a scripted
//! REST Countries backend.

use countrymap_core::prelude::*;
use geojson::{FeatureCollection, GeoJson};
use std::collections::HashMap;
use std::sync::Mutex;

const BASE: &str = "http://mock.test";

const FRANCE: &str = r#"[{
    "name": "FRANCE",
    "capital": "Paris",
    "population": 67059887,
    "region": "Europe",
    "subregion": "Western Europe",
    "borders": ["DEU", "BEL"],
    "languages": [{"name": "French"}],
    "currencies": [{"name": "Euro"}]
}]"#;

const JAPAN: &str = r#"[{
    "name": "Japan",
    "capital": "Tokyo",
    "population": 126264931,
    "region": "Asia",
    "subregion": "Eastern Asia",
    "languages": [{"name": "Japanese"}],
    "currencies": [{"name": "Japanese yen"}]
}]"#;

/// Routes are matched case-insensitively; unrouted URLs fail like a refused
/// connection. Every request is recorded.
#[derive(Default)]
struct MockApi {
    routes: HashMap<String, HttpResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        let url = format!("{BASE}{path}").to_lowercase();
        self.routes.insert(url, HttpResponse::new(status, body));
        self
    }

    fn europe() -> Self {
        Self::default()
            .route("/v2/name/france", 200, FRANCE)
            .route("/v2/alpha/DEU", 200, r#"{"name": "Germany"}"#)
            .route("/v2/alpha/BEL", 200, r#"{"name": "Belgium"}"#)
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpClient for MockApi {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        self.routes
            .get(&url.to_lowercase())
            .cloned()
            .ok_or_else(|| GeoError::Http(format!("connection refused: {url}")))
    }
}

fn table() -> CountryTable {
    CountryTable::load_from_path(CountryTable::default_dataset_path()).unwrap()
}

fn submit(api: &MockApi, selection: Selection) -> FormOutcome {
    let table = table();
    let rest = RestCountries::new(api, BASE).unwrap();
    CountryForm::new(&table, &rest).submit(&selection).unwrap()
}

fn export_names(rendered: &Rendered) -> Vec<String> {
    let doc: GeoJson = rendered.export.body.parse().unwrap();
    FeatureCollection::try_from(doc)
        .unwrap()
        .features
        .iter()
        .map(|f| f.property("name").and_then(|v| v.as_str()).unwrap().to_string())
        .collect()
}

#[test]
fn continent_filter_returns_only_that_continent() {
    let table = table();
    for continent in table.continents() {
        let rows = table.in_continent(continent);
        assert!(!rows.is_empty(), "{continent} has no rows");
        assert!(rows.iter().all(|r| r.continent() == continent));
    }
}

#[test]
fn name_match_ignores_case() {
    let table = table();
    let lower = table.select_country("Europe", "france").unwrap();
    let upper = table.select_country("Europe", "FRANCE").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.name(), "France");
}

#[test]
fn country_in_another_continent_is_no_result() {
    let api = MockApi::europe();
    let outcome = submit(&api, Selection::new("Asia", "France"));
    match outcome {
        FormOutcome::NoResult { continent, message } => {
            assert_eq!(continent, "Asia");
            assert_eq!(message, NO_RESULTS_MESSAGE);
        }
        other => panic!("expected NoResult, got {other:?}"),
    }
    assert!(api.calls().is_empty(), "no lookup without a match");
}

#[test]
fn no_match_has_no_map_and_no_download() {
    let api = MockApi::europe();
    let outcome = submit(&api, Selection::new("Europe", "Atlantis"));
    assert!(outcome.rendered().is_none());
    assert!(matches!(outcome, FormOutcome::NoResult { .. }));
}

#[test]
fn empty_name_is_idle_on_first_continent() {
    let api = MockApi::europe();
    let selection = Selection {
        continent: None,
        ..Selection::default()
    };
    let outcome = submit(&api, selection);
    let first = table().continents()[0].to_string();
    assert!(matches!(outcome, FormOutcome::Idle { .. }));
    assert_eq!(outcome.continent(), first);
    assert!(api.calls().is_empty());
}

#[test]
fn neighbours_resolve_in_border_order() {
    let api = MockApi::europe();
    let outcome = submit(&api, Selection::new("Europe", "france"));
    let rendered = outcome.rendered().unwrap();

    let details = rendered.details.details().unwrap();
    assert_eq!(details.name, "France");
    assert_eq!(details.capital, "Paris");
    assert_eq!(details.languages, ["French"]);
    assert_eq!(details.currencies, ["Euro"]);
    assert_eq!(details.neighbors, ["Germany", "Belgium"]);
    assert_eq!(rendered.neighbor_options, [NO_NEIGHBOR, "Germany", "Belgium"]);

    assert_eq!(
        api.calls(),
        [
            "http://mock.test/v2/name/france",
            "http://mock.test/v2/alpha/DEU",
            "http://mock.test/v2/alpha/BEL",
        ]
    );
    assert_eq!(rendered.success_line(), "Selected country: france");
    assert_eq!(rendered.neighbor_line(), "No neighbors selected.");
}

#[test]
fn failed_neighbour_lookup_shows_unknown() {
    let api = MockApi::default()
        .route("/v2/name/france", 200, FRANCE)
        .route("/v2/alpha/DEU", 200, r#"{"name": "Germany"}"#)
        .route("/v2/alpha/BEL", 404, r#"{"status": 404}"#);
    let outcome = submit(&api, Selection::new("Europe", "France"));
    let rendered = outcome.rendered().unwrap();
    assert_eq!(rendered.details.neighbors(), ["Germany", UNKNOWN_NEIGHBOR]);
}

#[test]
fn unknown_neighbour_is_listed_but_not_drawn() {
    let api = MockApi::default()
        .route("/v2/name/france", 200, FRANCE)
        .route("/v2/alpha/DEU", 200, r#"{"name": "Germany"}"#);
    let selection = Selection::new("Europe", "France").with_neighbor(UNKNOWN_NEIGHBOR);
    let rendered = submit(&api, selection).rendered().cloned().unwrap();
    assert_eq!(rendered.neighbor.as_deref(), Some(UNKNOWN_NEIGHBOR));
    assert_eq!(rendered.neighbor_line(), "Neighbor: Unknown");
    assert_eq!(export_names(&rendered), ["France"]);
}

#[test]
fn selected_neighbour_joins_map_and_export() {
    let api = MockApi::europe();
    let selection = Selection::new("Europe", "FRANCE").with_neighbor("Belgium");
    let rendered = submit(&api, selection).rendered().cloned().unwrap();

    assert_eq!(rendered.neighbor_line(), "Neighbor: Belgium");
    assert_eq!(rendered.map_rows.len(), 2);
    assert_eq!(export_names(&rendered), ["France", "Belgium"]);
    assert_eq!(rendered.export.file_name, "France.geojson");

    let france = rendered.map_rows[0].centroid().unwrap();
    let belgium = rendered.map_rows[1].centroid().unwrap();
    assert!((rendered.map.center.lon - (france.x() + belgium.x()) / 2.0).abs() < 1e-9);
    assert!((rendered.map.center.lat - (france.y() + belgium.y()) / 2.0).abs() < 1e-9);
    assert_eq!(rendered.map.zoom, DEFAULT_ZOOM);
}

#[test]
fn country_without_export_neighbour_exports_one_feature() {
    let api = MockApi::europe();
    let rendered = submit(&api, Selection::new("Europe", "France"))
        .rendered()
        .cloned()
        .unwrap();
    assert_eq!(export_names(&rendered), ["France"]);
    assert_eq!(rendered.export.file_name, "France.geojson");
}

#[test]
fn island_state_has_no_neighbours() {
    let api = MockApi::default().route("/v2/name/japan", 200, JAPAN);
    let rendered = submit(&api, Selection::new("Asia", "Japan"))
        .rendered()
        .cloned()
        .unwrap();
    assert!(rendered.neighbor_options.is_empty());
    assert_eq!(rendered.neighbor_line(), "No neighbors found.");
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn details_not_found_still_renders_the_country() {
    let api = MockApi::default().route("/v2/name/france", 404, r#"{"status": 404}"#);
    let rendered = submit(&api, Selection::new("Europe", "France"))
        .rendered()
        .cloned()
        .unwrap();
    assert_eq!(
        rendered.details,
        DetailsLookup::NotFound(NOT_FOUND_MESSAGE.to_string())
    );
    assert!(rendered.neighbor_options.is_empty());
    assert_eq!(export_names(&rendered), ["France"]);
}

#[test]
fn transport_failure_aborts_the_submission() {
    let table = table();
    let api = MockApi::default();
    let rest = RestCountries::new(&api, BASE).unwrap();
    let err = CountryForm::new(&table, &rest)
        .submit(&Selection::new("Europe", "France"))
        .unwrap_err();
    assert!(matches!(err, GeoError::Http(_)));
}

#[test]
fn changing_country_drops_the_neighbour() {
    let api = MockApi::europe().route("/v2/name/spain", 404, "");
    let first = Selection::new("Europe", "France").with_neighbor("Belgium");
    let next = first.advance(Selection::new("Europe", "Spain").with_neighbor("Belgium"));
    assert_eq!(next.neighbor, None);

    let rendered = submit(&api, next).rendered().cloned().unwrap();
    assert_eq!(rendered.country.name(), "Spain");
    assert_eq!(rendered.map_rows.len(), 1);
}

#[test]
fn neighbour_that_does_not_border_is_dropped() {
    let api = MockApi::europe();
    let selection = Selection::new("Europe", "France").with_neighbor("Poland");
    let rendered = submit(&api, selection).rendered().cloned().unwrap();
    assert_eq!(rendered.neighbor, None);
    assert_eq!(rendered.neighbor_line(), "No neighbors selected.");
    assert_eq!(rendered.map_rows.len(), 1);
    assert_eq!(export_names(&rendered), ["France"]);
}
