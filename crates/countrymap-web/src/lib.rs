//! # countrymap-web
//!
//! HTML front-end for `countrymap-core`: the continent selector, the country
//! text box, details from REST Countries, the neighbour selector, a Leaflet
//! map and a GeoJSON download, all on one GET form.
//!
//! | Route       | Response                                                   |
//! |-------------|------------------------------------------------------------|
//! | `/`         | form page with the current outcome                         |
//! | `/download` | `{Country}.geojson` as an attachment, 404 when no result   |
//! | `/map`      | standalone Leaflet page, 404 when no result                |
//!
//! Every route takes the same query string (`continent`, `country`,
//! `neighbor`). Submissions run on the blocking pool: the REST client is
//! synchronous.

mod page;
mod query;

pub use crate::query::FormQuery;

use actix_web::http::header::{
    self, Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{web, HttpResponse};
use countrymap_core::prelude::*;
use tracing::{debug, error};

/// Shared, read-only state of every handler.
///
/// The table is borrowed for the life of the process: either the
/// [`CountryTable::shared`] singleton or a table loaded once at startup.
pub struct AppState<C> {
    pub table: &'static CountryTable,
    pub api: RestCountries<C>,
}

impl<C: HttpClient> AppState<C> {
    pub fn new(table: &'static CountryTable, api: RestCountries<C>) -> Self {
        Self { table, api }
    }
}

/// Register the routes. `C` is the HTTP client behind [`AppState::api`].
pub fn configure<C: HttpClient + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index::<C>))
        .route("/download", web::get().to(download::<C>))
        .route("/map", web::get().to(map_page::<C>));
}

async fn submit<C: HttpClient + 'static>(
    state: web::Data<AppState<C>>,
    selection: Selection,
) -> anyhow::Result<FormOutcome> {
    let outcome = web::block(move || CountryForm::new(state.table, &state.api).submit(&selection))
        .await
        .map_err(|e| anyhow::anyhow!("submission was cancelled: {e}"))??;
    Ok(outcome)
}

async fn index<C: HttpClient + 'static>(
    state: web::Data<AppState<C>>,
    query: web::Query<FormQuery>,
) -> HttpResponse {
    let selection = query.selection();
    let continents = state.table.continents();
    let fallback = selection
        .continent
        .clone()
        .or_else(|| continents.first().map(|c| c.to_string()))
        .unwrap_or_default();

    match submit(state, selection.clone()).await {
        Ok(outcome) => {
            let html = page::render(
                &continents,
                outcome.continent(),
                &selection,
                page::Body::Outcome(&outcome),
            );
            HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(html)
        }
        Err(e) => {
            error!(error = %e, country = %selection.country, "submission failed");
            let html = page::render(
                &continents,
                &fallback,
                &selection,
                page::Body::Error(&format!("Could not fetch country details: {e}")),
            );
            HttpResponse::BadGateway()
                .content_type(header::ContentType::html())
                .body(html)
        }
    }
}

async fn download<C: HttpClient + 'static>(
    state: web::Data<AppState<C>>,
    query: web::Query<FormQuery>,
) -> HttpResponse {
    match submit(state, query.selection()).await {
        Ok(FormOutcome::Rendered(r)) => {
            debug!(file = %r.export.file_name, "serving export");
            HttpResponse::Ok()
                .content_type(GEOJSON_MIME)
                .insert_header(attachment(&r.export))
                .body(r.export.body)
        }
        Ok(_) => not_found(),
        Err(e) => bad_gateway(e),
    }
}

async fn map_page<C: HttpClient + 'static>(
    state: web::Data<AppState<C>>,
    query: web::Query<FormQuery>,
) -> HttpResponse {
    match submit(state, query.selection()).await {
        Ok(FormOutcome::Rendered(r)) => {
            let html = r.map.to_leaflet_html(r.country.name(), &r.feature_collection());
            HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(html)
        }
        Ok(_) => not_found(),
        Err(e) => bad_gateway(e),
    }
}

/// `attachment; filename="…"`, plus a UTF-8 `filename*` (RFC 6266) when the
/// country name is not plain ASCII.
fn attachment(export: &GeoJsonExport) -> ContentDisposition {
    let mut parameters = vec![DispositionParam::Filename(export.ascii_file_name())];
    if !export.file_name.is_ascii() {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".into()),
            language_tag: None,
            value: export.file_name.clone().into_bytes(),
        }));
    }
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(header::ContentType::plaintext())
        .body(NO_RESULTS_MESSAGE)
}

fn bad_gateway(e: anyhow::Error) -> HttpResponse {
    error!(error = %e, "submission failed");
    HttpResponse::BadGateway()
        .content_type(header::ContentType::plaintext())
        .body(e.to_string())
}
