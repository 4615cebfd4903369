use rand::{distributions::Alphanumeric, Rng};
use serde_json::{Map, Value};

use crate::domain::place::{
    Place, PlaceFields, DEFAULT_CATEGORY, DEFAULT_NAME, FALLBACK_INFO_URL,
};

/// One loosely typed record as returned by the collection endpoint.
pub type RawRecord = Map<String, Value>;

/// Maps a raw response element to a place entity. Validation failures are
/// absorbed: a malformed record yields a placeholder instead of an error, so
/// one bad record never aborts the whole listing.
pub fn place_from_record(record: &Value) -> Place {
    let Some(fields) = record.as_object().map(resolve_fields) else {
        tracing::warn!("Non-object entry in places response, substituting placeholder");
        return Place::placeholder(generate_id());
    };

    match Place::new(fields) {
        Ok(place) => place,
        Err(e) => {
            tracing::warn!("Invalid place record ({}), substituting placeholder", e);
            Place::placeholder(generate_id())
        }
    }
}

fn resolve_fields(record: &RawRecord) -> PlaceFields {
    PlaceFields {
        id: resolve_id(record),
        name: present(record, "name")
            .cloned()
            .unwrap_or_else(|| Value::String(DEFAULT_NAME.to_string())),
        category: present(record, "category")
            .cloned()
            .unwrap_or_else(|| Value::String(DEFAULT_CATEGORY.to_string())),
        distance: present(record, "distance")
            .cloned()
            .unwrap_or_else(|| Value::from(0)),
        info_url: present(record, "infoUrl")
            .or_else(|| present(record, "info_url"))
            .cloned()
            .unwrap_or_else(|| Value::String(FALLBACK_INFO_URL.to_string())),
        image: present(record, "image")
            .or_else(|| present(record, "imageUrl"))
            .cloned()
            .unwrap_or(Value::Null),
    }
}

// Alternate field names: first non-empty wins.
fn resolve_id(record: &RawRecord) -> String {
    for key in ["id", "_id"] {
        if let Some(value) = present(record, key) {
            return match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
    }
    generate_id()
}

fn present<'a>(record: &'a RawRecord, key: &str) -> Option<&'a Value> {
    record
        .get(key)
        .filter(|value| !value.is_null())
        .filter(|value| value.as_str().map_or(true, |s| !s.is_empty()))
}

/// Random 9-character token for records that ship without any identifier.
fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}
