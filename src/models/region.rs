use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// One region entry from the comparedgeo widget data.
///
/// `interest_by_region` returns the decoded response as-is; this type is a
/// typed view over the entries under `default.geoMapData` for callers that
/// want one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestByRegionData {
    pub geo_code: String,
    pub geo_name: String,
    #[serde(default)]
    pub value: Vec<f64>,
    #[serde(default)]
    pub formatted_value: Vec<String>,
    #[serde(default)]
    pub max_value_index: i64,
    #[serde(default)]
    pub has_data: Vec<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl InterestByRegionData {
    /// Pull the `default.geoMapData` entries out of a raw comparedgeo
    /// response.
    pub fn from_response(response: &Value) -> Result<Vec<Self>, ParseError> {
        let entries = response
            .pointer("/default/geoMapData")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ParseError::unexpected_structure("missing default.geoMapData array")
            })?;

        entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()).map_err(ParseError::Json))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn geo_map_data_deserializes() {
        let response = json!({
            "default": {
                "geoMapData": [
                    {
                        "geoCode": "US-NY",
                        "geoName": "New York",
                        "value": [100],
                        "formattedValue": ["100"],
                        "maxValueIndex": 0,
                        "hasData": [true],
                        "coordinates": {"lat": 43.0, "lng": -75.0}
                    },
                    {
                        "geoCode": "US-CA",
                        "geoName": "California",
                        "value": [87],
                        "formattedValue": ["87"],
                        "maxValueIndex": 0,
                        "hasData": [true]
                    }
                ]
            }
        });

        let regions = InterestByRegionData::from_response(&response).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].geo_code, "US-NY");
        assert!(regions[0].coordinates.is_some());
        assert!(regions[1].coordinates.is_none());
        assert_eq!(regions[1].value, vec![87.0]);
    }

    #[test]
    fn missing_geo_map_data_is_an_error() {
        let err = InterestByRegionData::from_response(&json!({"default": {}})).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedStructure(_)));
    }
}
