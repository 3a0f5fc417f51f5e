//! OpenSearch index configuration and mappings.
//!
//! This module defines the settings and mappings used when the status index
//! has to be created.

use serde_json::{json, Value};

/// Default name of the status index.
pub const DEFAULT_INDEX_NAME: &str = "monitoring-status";

/// Get the index settings and mappings for the status index.
///
/// Identity and state fields are `keyword` so dashboards can filter and
/// aggregate on exact values; timestamps are `date`. User records share the
/// index and only add `product`, `data` and `timestamp`.
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "monitored_instance": { "type": "keyword" },
                "sensu_client": { "type": "keyword" },
                "incident_timestamp": { "type": "date" },
                "check_name": { "type": "keyword" },
                "check_state": { "type": "keyword" },
                "sensu_env": { "type": "keyword" },
                "tags": { "type": "keyword" },
                "instance_address": { "type": "keyword" },
                "check_state_duration": { "type": "keyword" },
                "product": { "type": "keyword" },
                "data": { "type": "text" },
                "timestamp": { "type": "date" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_settings_structure() {
        let settings = get_index_settings();

        assert!(settings["settings"]["number_of_shards"].is_number());
        assert!(settings["settings"]["number_of_replicas"].is_number());

        let properties = &settings["mappings"]["properties"];
        for field in [
            "monitored_instance",
            "sensu_client",
            "check_name",
            "check_state",
            "sensu_env",
            "tags",
        ] {
            assert_eq!(properties[field]["type"], "keyword", "field {}", field);
        }
        assert_eq!(properties["incident_timestamp"]["type"], "date");
        assert_eq!(properties["timestamp"]["type"], "date");
    }

    #[test]
    fn test_index_name() {
        assert_eq!(DEFAULT_INDEX_NAME, "monitoring-status");
    }
}
