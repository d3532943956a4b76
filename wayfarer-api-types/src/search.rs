use serde::{Deserialize, Serialize};

/// Body of `POST /api/search`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchQuery {
    pub query: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns the query with surrounding whitespace stripped, or `None` when
    /// nothing is left. A blank query must never reach the search service.
    pub fn normalized(&self) -> Option<SearchQuery> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SearchQuery::new(trimmed))
        }
    }
}

/// Response of `POST /api/search`.
///
/// A failed search carries only `success`, `error` and the echoed `query`, so
/// every collection field defaults to empty.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_found: usize,
    #[serde(default)]
    pub results: Vec<Place>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A point of interest returned by search. `score` is the backend's relevance
/// fraction in `[0, 1]`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Place {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub score: f64,
}

/// A relationship edge from a search hit to another named entity.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Connection {
    #[serde(default)]
    pub from: String,
    pub to: String,
    #[serde(rename = "type", default)]
    pub connection_type: String,
    pub relationship: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_and_rejects_blank() {
        assert_eq!(
            SearchQuery::new("  beaches near Da Nang \n").normalized(),
            Some(SearchQuery::new("beaches near Da Nang"))
        );
        assert_eq!(SearchQuery::new("").normalized(), None);
        assert_eq!(SearchQuery::new(" \t \n").normalized(), None);
    }

    #[test]
    fn success_body_parses() {
        let body = r#"{
            "success": true,
            "query": "beaches",
            "total_found": 1,
            "results": [{
                "id": "place_7",
                "name": "My Khe Beach",
                "type": "Beach",
                "location": "Da Nang",
                "tags": ["swimming", "sunrise"],
                "score": 0.874
            }],
            "connections": [{
                "from": "place_7",
                "to": "Da Nang",
                "type": "City",
                "relationship": "Located_In"
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.total_found, 1);
        assert_eq!(response.results[0].place_type, "Beach");
        assert_eq!(response.results[0].tags.len(), 2);
        assert_eq!(response.connections[0].relationship, "Located_In");
        assert_eq!(response.error, None);
    }

    #[test]
    fn failure_body_parses_without_collections() {
        let body = r#"{"success": false, "error": "index unavailable", "query": "hue"}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("index unavailable"));
        assert!(response.results.is_empty());
        assert!(response.connections.is_empty());
        assert_eq!(response.total_found, 0);
    }

    #[test]
    fn place_without_tags_parses_as_empty() {
        let body = r#"{"name": "Imperial City", "type": "Attraction", "score": 0.5}"#;
        let place: Place = serde_json::from_str(body).unwrap();
        assert!(place.tags.is_empty());
        assert!(place.id.is_empty());
        assert!(place.location.is_empty());
    }

    #[test]
    fn type_field_round_trips_under_wire_name() {
        let place = Place {
            id: "p1".to_string(),
            name: "Hanoi".to_string(),
            place_type: "City".to_string(),
            location: "Vietnam".to_string(),
            tags: vec![],
            score: 1.0,
        };
        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["type"], "City");
        assert!(json.get("place_type").is_none());
        let back: Place = serde_json::from_value(json).unwrap();
        assert_eq!(back, place);
    }
}
