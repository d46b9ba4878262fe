// crates/countrymap-core/src/model/convert.rs

//! GeoJSON <-> domain conversion.

use super::{CountryRecord, CountryTable};
use crate::error::{GeoError, Result};
use geo::{MultiPolygon, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

/// Build a table from any parsed GeoJSON document.
///
/// Accepts a `FeatureCollection` (the normal case) or a lone `Feature`.
pub fn table_from_geojson(doc: GeoJson) -> Result<CountryTable> {
    let features = match doc {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => {
            return Err(GeoError::InvalidData(
                "expected a FeatureCollection, found a bare geometry".into(),
            ))
        }
    };

    let countries = features
        .into_iter()
        .enumerate()
        .map(|(idx, feature)| record_from_feature(idx, feature))
        .collect::<Result<Vec<_>>>()?;

    Ok(CountryTable::new(countries))
}

/// Convert one dataset feature into a [`CountryRecord`].
///
/// Property keys are matched case-insensitively, so both the geopandas
/// "lowres" layout (`name`, `continent`) and the raw Natural Earth layout
/// (`NAME`, `CONTINENT`) load.
pub fn record_from_feature(idx: usize, feature: Feature) -> Result<CountryRecord> {
    let props = feature.properties.as_ref();

    let name = string_prop(props, "name")
        .ok_or_else(|| GeoError::InvalidData(format!("feature #{idx} has no name")))?;
    let continent = string_prop(props, "continent")
        .ok_or_else(|| GeoError::InvalidData(format!("{name}: missing continent")))?;
    let iso_a3 = string_prop(props, "iso_a3");
    let pop_est = prop(props, "pop_est").and_then(|v| match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    });

    let geometry = feature
        .geometry
        .ok_or_else(|| GeoError::InvalidData(format!("{name}: missing geometry")))?;

    let geometry = match geometry.value {
        value @ Value::Polygon(_) => MultiPolygon::new(vec![Polygon::<f64>::try_from(value)?]),
        value @ Value::MultiPolygon(_) => MultiPolygon::<f64>::try_from(value)?,
        _ => {
            return Err(GeoError::InvalidData(format!(
                "{name}: geometry is not a (multi)polygon"
            )))
        }
    };

    Ok(CountryRecord {
        name,
        continent,
        iso_a3,
        pop_est,
        geometry,
    })
}

impl CountryRecord {
    /// GeoJSON feature carrying the outline and the descriptive properties.
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("name".into(), JsonValue::from(self.name.as_str()));
        properties.insert("continent".into(), JsonValue::from(self.continent.as_str()));
        if let Some(iso) = self.iso_a3() {
            properties.insert("iso_a3".into(), JsonValue::from(iso));
        }
        if let Some(pop) = self.pop_est {
            properties.insert("pop_est".into(), JsonValue::from(pop));
        }

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&self.geometry))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Collect records into a FeatureCollection, preserving order.
pub fn feature_collection<'a, I>(records: I) -> FeatureCollection
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    FeatureCollection {
        bbox: None,
        features: records.into_iter().map(CountryRecord::to_feature).collect(),
        foreign_members: None,
    }
}

fn prop<'a>(props: Option<&'a JsonObject>, key: &str) -> Option<&'a JsonValue> {
    let props = props?;
    props.get(key).or_else(|| {
        props
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn string_prop(props: Option<&JsonObject>, key: &str) -> Option<String> {
    prop(props, key)
        .and_then(JsonValue::as_str)
        .map(str::to_owned)
        .filter(|s| !s.is_empty())
}
