// crates/countrymap-core/src/map.rs

//! Map view for the selected country (and neighbour).
//!
//! The view is a Leaflet map: fixed zoom, constant highlight style, centred
//! on the mean of the rows' centroids. That mean is not the centroid of the
//! union, which is good enough to frame one or two adjacent countries.

use crate::model::CountryRecord;
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ZOOM: u8 = 4;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Leaflet path style applied to every drawn row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightStyle {
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            fill_color: "#FFFF00".into(),
            fill_opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    pub style: HighlightStyle,
}

impl MapView {
    /// Frame the given rows.
    ///
    /// Returns `None` when no row has a centroid (no rows, or only empty
    /// outlines).
    pub fn for_records(records: &[&CountryRecord]) -> Option<Self> {
        let centroids: Vec<_> = records.iter().filter_map(|r| r.centroid()).collect();
        if centroids.is_empty() {
            return None;
        }
        let n = centroids.len() as f64;
        let lat = centroids.iter().map(|p| p.y()).sum::<f64>() / n;
        let lon = centroids.iter().map(|p| p.x()).sum::<f64>() / n;

        Some(Self {
            center: LatLon { lat, lon },
            zoom: DEFAULT_ZOOM,
            style: HighlightStyle::default(),
        })
    }

    /// `<div>` + `<script>` drawing `collection` into an element with id
    /// `element_id`. The page must already include Leaflet.
    pub fn leaflet_snippet(&self, element_id: &str, collection: &FeatureCollection) -> String {
        let style = serde_json::to_string(&self.style).unwrap_or_else(|_| "{}".into());
        // `</` would end the script block early
        let data = collection.to_string().replace("</", "<\\/");
        format!(
            r#"<div id="{id}" style="height: 480px;"></div>
<script>
  (function () {{
    var map = L.map("{id}").setView([{lat}, {lon}], {zoom});
    L.tileLayer("{tiles}", {{ maxZoom: 18, attribution: "{attribution}" }}).addTo(map);
    var style = {style};
    L.geoJSON({data}, {{ style: function () {{ return style; }} }}).addTo(map);
  }})();
</script>"#,
            id = element_id,
            lat = self.center.lat,
            lon = self.center.lon,
            zoom = self.zoom,
            tiles = TILE_URL,
            attribution = TILE_ATTRIBUTION,
            style = style,
            data = data,
        )
    }

    /// Leaflet `<head>` includes for pages embedding [`Self::leaflet_snippet`].
    pub fn leaflet_head() -> String {
        format!(
            r#"<link rel="stylesheet" href="{LEAFLET_CSS}" />
<script src="{LEAFLET_JS}"></script>"#
        )
    }

    /// Self-contained HTML page showing the map.
    pub fn to_leaflet_html(&self, title: &str, collection: &FeatureCollection) -> String {
        format!(
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>{title}</title>
{head}
</head>
<body>
{map}
</body>
</html>
"#,
            title = crate::text::escape_html(title),
            head = Self::leaflet_head(),
            map = self.leaflet_snippet("map", collection),
        )
    }
}
