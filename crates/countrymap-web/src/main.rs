//! countrymap-web: serves the country explorer form.
//!
//!   $ countrymap-web --bind 0.0.0.0:8080
//!   $ RUST_LOG=countrymap_core=debug countrymap-web
mod logging;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use countrymap_core::prelude::*;
use countrymap_web::{configure, AppState};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "countrymap-web", version, about = "Web form for exploring countries by continent")]
struct Args {
    /// Address to listen on
    #[arg(short = 'b', long = "bind", env = "COUNTRYMAP_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// GeoJSON dataset to use instead of the bundled one (a coarse
    /// 31-country subset; `countrymap fetch` downloads the full Natural Earth layer)
    #[arg(short = 'd', long = "dataset", env = "COUNTRYMAP_DATASET")]
    dataset: Option<PathBuf>,

    /// REST Countries base URL
    #[arg(long = "api-url", env = "COUNTRYMAP_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (default: the HTTP client's own)
    #[arg(long = "timeout")]
    timeout: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init("info");

    // Either way the table lives until the process exits.
    let table: &'static CountryTable = match &args.dataset {
        Some(path) => Box::leak(Box::new(
            CountryTable::load_cached(path)
                .with_context(|| format!("loading dataset {}", path.display()))?,
        )),
        None => CountryTable::shared().context("loading bundled dataset")?,
    };
    info!(countries = table.len(), "dataset ready");

    // The blocking client owns a runtime of its own: build it (and drop it)
    // outside of actix's.
    let client = match args.timeout {
        Some(secs) => ReqwestClient::with_timeout(Duration::from_secs(secs))?,
        None => ReqwestClient::new()?,
    };
    let api = RestCountries::new(client, &args.api_url)?;
    let state = web::Data::new(AppState::new(table, api));

    info!(bind = %args.bind, api = %state.api.base_url(), "starting server");
    let server_state = state.clone();
    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            App::new()
                .app_data(server_state.clone())
                .configure(configure::<ReqwestClient>)
        })
        .bind(args.bind.as_str())
        .with_context(|| format!("binding {}", args.bind))?
        .run()
        .await
        .context("HTTP server error")
    })?;

    drop(state);
    Ok(())
}
