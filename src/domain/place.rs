use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::utils::error::{PlacesError, Result};

pub const DEFAULT_NAME: &str = "Unknown Place";
pub const DEFAULT_CATEGORY: &str = "tourism";
pub const FALLBACK_INFO_URL: &str = "https://wikipedia.org";

/// Loosely typed field values for one place, as resolved from a raw API
/// record. `id` is always resolved by the caller (generated when the source
/// record has none); the remaining fields keep whatever shape the API sent.
#[derive(Debug, Clone, Default)]
pub struct PlaceFields {
    pub id: String,
    pub name: Value,
    pub category: Value,
    pub distance: Value,
    pub info_url: Value,
    pub image: Value,
}

/// A touristic destination. Immutable after construction: every instance
/// satisfies the field constraints checked in [`Place::new`] for its whole
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    id: String,
    name: String,
    category: String,
    distance: f64,
    info_url: String,
    image: Option<String>,
}

impl Place {
    /// Builds a validated place. Fails atomically: either every field passes
    /// validation or no place is constructed.
    ///
    /// - `name` must be a non-empty string after trimming.
    /// - `category` falls back to `"tourism"` when absent or not a string.
    /// - `distance` must coerce to a finite non-negative number; numeric
    ///   strings such as `"150"` are accepted.
    /// - `info_url` must parse as a well-formed URL and is stored unchanged.
    /// - `image` is stored when the value is a string, never validated.
    pub fn new(fields: PlaceFields) -> Result<Self> {
        Ok(Self {
            id: fields.id,
            name: validate_name(&fields.name)?,
            category: normalize_category(&fields.category),
            distance: validate_distance(&fields.distance)?,
            info_url: validate_info_url(&fields.info_url)?,
            image: fields.image.as_str().map(str::to_owned),
        })
    }

    /// Fully default entity substituted for source records that fail
    /// validation, so one bad record never aborts a whole listing.
    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            name: DEFAULT_NAME.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            distance: 0.0,
            info_url: FALLBACK_INFO_URL.to_string(),
            image: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn info_url(&self) -> &str {
        &self.info_url
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Distance for display: whole meters below 1 km, otherwise kilometers
    /// with one decimal place.
    pub fn formatted_distance(&self) -> String {
        if self.distance < 1000.0 {
            format!("{} m", self.distance.round())
        } else {
            format!("{:.1} km", self.distance / 1000.0)
        }
    }

    /// Human-readable label for the stored category. Unrecognized categories
    /// display as "Tourism".
    pub fn category_display(&self) -> &'static str {
        match self.category.as_str() {
            "tourism" => "Tourism",
            "natural" => "Natural",
            "historic" => "Historic",
            "cultural" => "Cultural",
            "entertainment" => "Entertainment",
            "sport" => "Sport",
            "religion" => "Religion",
            _ => "Tourism",
        }
    }

    pub fn has_image(&self) -> bool {
        self.image
            .as_deref()
            .is_some_and(|image| !image.trim().is_empty())
    }

    /// Snapshot of all stored fields for handing to a UI layer.
    pub fn to_plain_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("id".to_string(), Value::String(self.id.clone()));
        record.insert("name".to_string(), Value::String(self.name.clone()));
        record.insert("category".to_string(), Value::String(self.category.clone()));
        record.insert("distance".to_string(), Value::from(self.distance));
        record.insert("infoUrl".to_string(), Value::String(self.info_url.clone()));
        record.insert(
            "image".to_string(),
            self.image.clone().map_or(Value::Null, Value::String),
        );
        record
    }
}

fn validate_name(value: &Value) -> Result<String> {
    let name = value.as_str().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(PlacesError::Validation {
            field: "name",
            reason: "place name is required and must be a non-empty string".to_string(),
        });
    }
    Ok(name.to_string())
}

fn normalize_category(value: &Value) -> String {
    match value.as_str() {
        Some(category) if !category.is_empty() => category.trim().to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

fn validate_distance(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(distance) if distance.is_finite() && distance >= 0.0 => Ok(distance),
        _ => Err(PlacesError::Validation {
            field: "distance",
            reason: "distance must be a valid non-negative number".to_string(),
        }),
    }
}

fn validate_info_url(value: &Value) -> Result<String> {
    let raw = value.as_str().ok_or_else(|| PlacesError::Validation {
        field: "infoUrl",
        reason: "info URL is required".to_string(),
    })?;
    Url::parse(raw).map_err(|e| PlacesError::Validation {
        field: "infoUrl",
        reason: format!("invalid URL format: {}", e),
    })?;
    Ok(raw.to_string())
}
