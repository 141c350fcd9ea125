use serde::{Deserialize, Serialize};

/// Body of a `POST /api/location` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub iata: String,
}

/// Country resolved for one IATA code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_resolved_country() {
        let info: LocationInfo = serde_json::from_str(r#"{"country":"United Kingdom"}"#).unwrap();
        assert_eq!(info.country, "United Kingdom");
    }

    #[test]
    fn location_query_keeps_the_wire_field_name() {
        let query = LocationQuery {
            iata: "LHR".to_string(),
        };

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({ "iata": "LHR" }));
    }
}
