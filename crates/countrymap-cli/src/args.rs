use clap::{Args, Parser, Subcommand};
use countrymap_core::restcountries::DEFAULT_BASE_URL;
use std::path::PathBuf;

/// CLI arguments for countrymap
#[derive(Debug, Parser)]
#[command(
    name = "countrymap",
    version,
    about = "Explore countries by continent: details from REST Countries, GeoJSON exports and Leaflet maps"
)]
pub struct CliArgs {
    /// GeoJSON dataset to use instead of the bundled one (a coarse
    /// 31-country subset; `countrymap fetch` downloads the full Natural Earth layer)
    #[arg(short = 'd', long = "dataset", env = "COUNTRYMAP_DATASET", global = true)]
    pub dataset: Option<PathBuf>,

    /// REST Countries base URL
    #[arg(long = "api-url", env = "COUNTRYMAP_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds (default: the HTTP client's own)
    #[arg(long = "timeout", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// One form submission: continent, typed name and optional neighbour.
#[derive(Debug, Args)]
pub struct Query {
    /// Continent exactly as listed by `continents` (e.g. "South America")
    pub continent: String,

    /// Country name, matched case-insensitively
    pub name: String,

    /// Neighbour to draw alongside the country
    #[arg(short = 'n', long = "neighbor")]
    pub neighbor: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the continents, in dataset order
    Continents,

    /// List the countries of a continent
    Countries {
        /// Continent name (exact)
        continent: String,
    },

    /// Look up a country: details, neighbours and the map centre
    Lookup {
        #[command(flatten)]
        query: Query,
    },

    /// Write the selected rows as `<Country>.geojson`
    Export {
        #[command(flatten)]
        query: Query,

        /// Output directory
        #[arg(short = 'o', long = "out", default_value = ".")]
        out: PathBuf,
    },

    /// Render the selected rows as a standalone Leaflet page
    Map {
        #[command(flatten)]
        query: Query,

        /// Output file (default: stdout)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },

    /// Download the full Natural Earth countries dataset
    #[cfg(feature = "builder")]
    Fetch {
        /// Source URL
        #[arg(long = "url", default_value = countrymap_core::loader::NATURAL_EARTH_URL)]
        url: String,

        /// Target path; `.gz` targets are gzip-compressed (default: the bundled dataset path)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },
}
