//! Location Models
//!
//! GeoJSON data structures matching the remote location store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Record identifier as assigned by the backend. Some deployments serve
/// numeric ids, others strings; both compare and display as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Text(String),
    Number(i64),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => formatter.write_str(id),
            Self::Number(id) => write!(formatter, "{id}"),
        }
    }
}

/// Point geometry. GeoJSON coordinate order: `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProperties {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One stored location (GeoJSON Feature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFeature {
    /// Absent until the store has assigned one; never sent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    #[serde(rename = "type", default = "feature_type")]
    pub feature_type: String,
    pub properties: LocationProperties,
    pub geometry: PointGeometry,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl LocationFeature {
    /// Build an unsaved feature from form values. Coordinates arrive as
    /// latitude/longitude and are stored GeoJSON-style, longitude first.
    pub fn new(name: &str, description: &str, lat: f64, lon: f64) -> Self {
        Self {
            id: None,
            feature_type: feature_type(),
            properties: LocationProperties {
                name: name.to_string(),
                description: description.to_string(),
            },
            geometry: PointGeometry {
                geometry_type: "Point".to_string(),
                coordinates: [lon, lat],
            },
        }
    }

    pub fn lon(&self) -> f64 {
        self.geometry.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.geometry.coordinates[1]
    }

    /// Stable key for keyed list rendering.
    pub fn row_key(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("{}@{},{}", self.properties.name, self.lon(), self.lat()),
        }
    }
}

/// The store's answer to a load: everything it currently holds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<LocationFeature>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_feature() -> LocationFeature {
        LocationFeature::new("A", "B", 20.0, 10.0)
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let json = serde_json::to_string(&make_feature()).expect("serialize");
        let back: LocationFeature = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, make_feature());
        assert_eq!(back.properties.name, "A");
        assert_eq!(back.properties.description, "B");
        assert_eq!(back.lat(), 20.0);
        assert_eq!(back.lon(), 10.0);
    }

    #[test]
    fn test_coordinates_keep_geojson_order() {
        let json = serde_json::to_value(&make_feature()).expect("serialize");
        let coordinates = json["geometry"]["coordinates"]
            .as_array()
            .expect("coordinate array");
        // Longitude first, latitude second.
        assert_eq!(coordinates[0].as_f64(), Some(10.0));
        assert_eq!(coordinates[1].as_f64(), Some(20.0));
    }

    #[test]
    fn test_unsaved_feature_serializes_without_id() {
        let json = serde_json::to_value(&make_feature()).expect("serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["type"].as_str(), Some("Feature"));
        assert_eq!(json["geometry"]["type"].as_str(), Some("Point"));
    }

    #[test]
    fn test_id_accepts_string_and_number() {
        let text: FeatureId = serde_json::from_str("\"42\"").expect("string id");
        let number: FeatureId = serde_json::from_str("42").expect("numeric id");
        assert_eq!(text, FeatureId::Text("42".to_string()));
        assert_eq!(number, FeatureId::Number(42));
        assert_eq!(text.to_string(), number.to_string());
    }

    #[test]
    fn test_empty_collection_has_no_records() {
        let payload = r#"{"type":"FeatureCollection","features":[]}"#;
        let collection: FeatureCollection = serde_json::from_str(payload).expect("deserialize");
        assert!(collection.features.is_empty());

        let bare: FeatureCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection"}"#).expect("deserialize");
        assert!(bare.features.is_empty());
    }

    #[test]
    fn test_collection_parses_store_payload() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "id": "42",
                "type": "Feature",
                "properties": {"name": "Park", "description": "Green"},
                "geometry": {"type": "Point", "coordinates": [107.6, -6.9]}
            }]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(payload).expect("deserialize");
        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(feature.id, Some(FeatureId::Text("42".to_string())));
        assert_eq!(feature.properties.name, "Park");
        assert_eq!(feature.lat(), -6.9);
        assert_eq!(feature.lon(), 107.6);
    }
}
