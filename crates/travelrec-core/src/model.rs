// crates/travelrec-core/src/model.rs

use crate::common::CatalogStats;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single destination entry: a city, a temple, or a beach.
///
/// All fields degrade to the empty string when the source document omits
/// them or carries a wrong-typed value. Parsing never fails on a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Place {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(rename = "imageUrl", default, deserialize_with = "string_or_empty")]
    pub image_url: String,
}

/// A country holding its cities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub cities: Vec<Place>,
}

/// Top-level catalog document: countries with cities, temples, beaches.
///
/// Immutable once fetched; the search engine derives [`Item`] views from it
/// on every call instead of mutating it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub countries: Vec<Country>,
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub temples: Vec<Place>,
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub beaches: Vec<Place>,
}

impl Catalog {
    /// Parse a catalog from a JSON body.
    ///
    /// Fails only when the body is not valid JSON at all. A valid document
    /// of the wrong shape (wrong-typed collections, missing fields, even a
    /// non-object root) coerces to empty collections instead of erroring.
    pub fn from_json(body: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(body)?;
        Ok(serde_json::from_value(doc).unwrap_or_default())
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
            temples: self.temples.len(),
            beaches: self.beaches.len(),
        }
    }
}

/// Display category of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Country,
    Temple,
    Beach,
    /// Fallback label for entries from an unrecognized collection key.
    Place,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Country => "Country",
            Category::Temple => "Temple",
            Category::Beach => "Beach",
            Category::Place => "Place",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform record derived from any catalog entry for search and display.
///
/// `country` is non-empty only for items derived from a city. Items are
/// recomputed from the catalog on every search call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub category: Category,
    pub country: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

// -----------------------------------------------------------------------------
// Lenient field coercion
// -----------------------------------------------------------------------------

/// Accept any JSON value where a string is expected; non-strings become "".
fn string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Accept any JSON value where an array is expected; non-arrays become an
/// empty vector, and elements of the wrong shape fall back to their default.
fn seq_or_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let v = Value::deserialize(deserializer)?;
    match v {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .map(|e| serde_json::from_value(e).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
