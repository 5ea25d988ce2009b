//! Record flattening and dotted-path extraction for API payloads.

use serde_json::{Map, Value};

/// Joins a parent prefix and a child key into a camel case column name.
///
/// # Arguments
/// * `parent` - The flattened prefix accumulated so far (e.g. "iceRink")
/// * `key` - The nested key to append (e.g. "id")
///
/// # Returns
/// * `String` - The joined name (e.g. "iceRinkId")
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::processors::camel_join;
///
/// assert_eq!(camel_join("iceRink", "id"), "iceRinkId");
/// assert_eq!(camel_join("country", "name"), "countryName");
/// ```
pub fn camel_join(parent: &str, key: &str) -> String {
    let mut joined = String::with_capacity(parent.len() + key.len());
    joined.push_str(parent);
    let mut chars = key.chars();
    if let Some(first) = chars.next() {
        joined.extend(first.to_uppercase());
        joined.push_str(chars.as_str());
    }
    joined
}

/// Recursively flattens nested objects into a single-level record.
///
/// Nested object keys are joined with [`camel_join`] so that repeated key
/// names cannot collide in the output (`iceRink.id` becomes `iceRinkId`,
/// distinct from the record's own `id`). Arrays and scalars are carried over
/// unchanged.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::processors::flatten_record;
/// use serde_json::json;
///
/// let record = json!({
///     "id": 12345,
///     "iceRink": { "id": 7, "name": "Nokia Arena" }
/// });
/// let flat = flatten_record(record.as_object().unwrap());
/// assert_eq!(flat["id"], json!(12345));
/// assert_eq!(flat["iceRinkId"], json!(7));
/// assert_eq!(flat["iceRinkName"], json!("Nokia Arena"));
/// ```
pub fn flatten_record(record: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into("", record, &mut flat);
    flat
}

fn flatten_into(prefix: &str, record: &Map<String, Value>, out: &mut Map<String, Value>) {
    for (key, value) in record {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            camel_join(prefix, key)
        };
        match value {
            Value::Object(nested) => flatten_into(&name, nested, out),
            other => {
                out.insert(name, other.clone());
            }
        }
    }
}

/// Looks up a dotted path such as `team.id` inside a record.
///
/// Returns `Value::Null` when any step of the path is missing or the
/// intermediate value is not an object, so projections stay total over
/// partial payloads.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::processors::extract_path;
/// use serde_json::{Value, json};
///
/// let record = json!({ "team": { "id": "oulun-karpat", "name": "Kärpät" } });
/// assert_eq!(extract_path(&record, "team.id"), json!("oulun-karpat"));
/// assert_eq!(extract_path(&record, "team.city"), Value::Null);
/// assert_eq!(extract_path(&record, "coach.name"), Value::Null);
/// ```
pub fn extract_path(record: &Value, path: &str) -> Value {
    let mut current = record;
    for step in path.split('.') {
        match current.get(step) {
            Some(next) => current = next,
            None => return Value::Null,
        }
    }
    current.clone()
}

/// Strips the `:{season}` suffix from composite team id strings.
///
/// Game payloads encode team ids as `"{teamId}:{season}"`. Non-string values
/// pass through unchanged.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::processors::strip_id_suffix;
/// use serde_json::{Value, json};
///
/// assert_eq!(strip_id_suffix(&json!("tappara:2024")), json!("tappara"));
/// assert_eq!(strip_id_suffix(&json!("tappara")), json!("tappara"));
/// assert_eq!(strip_id_suffix(&Value::Null), Value::Null);
/// ```
pub fn strip_id_suffix(value: &Value) -> Value {
    match value {
        Value::String(s) => match s.split_once(':') {
            Some((id, _)) => Value::String(id.to_string()),
            None => value.clone(),
        },
        other => other.clone(),
    }
}

/// Applies [`strip_id_suffix`] to the named keys of a flat record.
pub fn strip_composite_ids(record: &mut Map<String, Value>, keys: &[&str]) {
    for key in keys {
        if let Some(value) = record.get_mut(*key) {
            *value = strip_id_suffix(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_join_basic() {
        assert_eq!(camel_join("homeTeam", "goals"), "homeTeamGoals");
        assert_eq!(camel_join("period", "period"), "periodPeriod");
    }

    #[test]
    fn test_camel_join_empty_key() {
        assert_eq!(camel_join("prefix", ""), "prefix");
    }

    #[test]
    fn test_flatten_record_keeps_scalars_and_arrays() {
        let record = json!({
            "id": 1,
            "started": true,
            "goalTypes": ["YV", "TM"],
            "spectators": null
        });
        let flat = flatten_record(record.as_object().unwrap());
        assert_eq!(flat["id"], json!(1));
        assert_eq!(flat["started"], json!(true));
        assert_eq!(flat["goalTypes"], json!(["YV", "TM"]));
        assert_eq!(flat["spectators"], Value::Null);
    }

    #[test]
    fn test_flatten_record_avoids_nested_key_collisions() {
        // A nested "id" must not clobber the record's own "id".
        let record = json!({
            "id": 12345,
            "iceRink": { "id": 7, "city": "Tampere" }
        });
        let flat = flatten_record(record.as_object().unwrap());
        assert_eq!(flat["id"], json!(12345));
        assert_eq!(flat["iceRinkId"], json!(7));
        assert_eq!(flat["iceRinkCity"], json!("Tampere"));
    }

    #[test]
    fn test_flatten_record_recurses_multiple_levels() {
        let record = json!({
            "birthLocality": {
                "name": "Turku",
                "country": { "name": "Finland", "code": "FI" }
            }
        });
        let flat = flatten_record(record.as_object().unwrap());
        assert_eq!(flat["birthLocalityName"], json!("Turku"));
        assert_eq!(flat["birthLocalityCountryName"], json!("Finland"));
        assert_eq!(flat["birthLocalityCountryCode"], json!("FI"));
    }

    #[test]
    fn test_extract_path_single_step() {
        let record = json!({ "playerId": 555 });
        assert_eq!(extract_path(&record, "playerId"), json!(555));
    }

    #[test]
    fn test_extract_path_nested() {
        let record = json!({ "team": { "id": "hifk", "name": "HIFK" } });
        assert_eq!(extract_path(&record, "team.id"), json!("hifk"));
        assert_eq!(extract_path(&record, "team.name"), json!("HIFK"));
    }

    #[test]
    fn test_extract_path_missing_step_is_null() {
        let record = json!({ "team": { "id": "hifk" } });
        assert_eq!(extract_path(&record, "team.city"), Value::Null);
        assert_eq!(extract_path(&record, "club.id"), Value::Null);
    }

    #[test]
    fn test_extract_path_through_non_object_is_null() {
        let record = json!({ "team": "hifk" });
        assert_eq!(extract_path(&record, "team.id"), Value::Null);
    }

    #[test]
    fn test_strip_id_suffix_variants() {
        assert_eq!(strip_id_suffix(&json!("hifk:2025")), json!("hifk"));
        assert_eq!(strip_id_suffix(&json!("168761288:2024")), json!("168761288"));
        assert_eq!(strip_id_suffix(&json!("jyp")), json!("jyp"));
        assert_eq!(strip_id_suffix(&json!(42)), json!(42));
        assert_eq!(strip_id_suffix(&Value::Null), Value::Null);
    }

    #[test]
    fn test_strip_composite_ids_touches_only_named_keys() {
        let record = json!({
            "homeTeamId": "hifk:2025",
            "awayTeamId": "tps:2025",
            "serie": "runkosarja:ignored"
        });
        let mut map = record.as_object().unwrap().clone();
        strip_composite_ids(&mut map, &["homeTeamId", "awayTeamId"]);
        assert_eq!(map["homeTeamId"], json!("hifk"));
        assert_eq!(map["awayTeamId"], json!("tps"));
        assert_eq!(map["serie"], json!("runkosarja:ignored"));
    }
}
