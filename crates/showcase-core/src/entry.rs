use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Products,
    PastWork,
}

impl Collection {
    pub fn all() -> &'static [Collection] {
        &[Collection::Products, Collection::PastWork]
    }

    /// Name of the backing document inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Products => "products.json",
            Collection::PastWork => "past_work.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::PastWork => "past_work",
        }
    }

    /// Singular, lower-case noun used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Products => "product",
            Collection::PastWork => "past work project",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive name equality used for the uniqueness key.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Accepts RFC 3339 as well as offset-less ISO 8601 timestamps (read as UTC),
/// which is what hand-edited or older documents tend to contain.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A record stored in one of the catalog collections.
pub trait Entry: Serialize + DeserializeOwned + Clone + Send + 'static {
    /// User-supplied fields, before the service stamps provenance.
    type Draft: Draft;

    const COLLECTION: Collection;

    fn name(&self) -> &str;

    fn stamp(draft: Self::Draft, added_by: &str, added_at: DateTime<Utc>) -> Self;
}

pub trait Draft {
    fn name(&self) -> &str;

    fn name_mut(&mut self) -> &mut String;

    /// Required URL fields as `(field, value)` pairs.
    fn urls(&self) -> Vec<(&'static str, &str)>;
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub link: String,
    pub video: String,
    pub added_by: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub link: String,
    pub video: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, link: impl Into<String>, video: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            video: video.into(),
        }
    }
}

impl Draft for NewProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn urls(&self) -> Vec<(&'static str, &str)> {
        vec![("link", &self.link), ("video", &self.video)]
    }
}

impl Entry for Product {
    type Draft = NewProduct;

    const COLLECTION: Collection = Collection::Products;

    fn name(&self) -> &str {
        &self.name
    }

    fn stamp(draft: NewProduct, added_by: &str, added_at: DateTime<Utc>) -> Self {
        Self {
            name: draft.name,
            link: draft.link,
            video: draft.video,
            added_by: added_by.to_string(),
            added_at,
        }
    }
}

// ---------------------------------------------------------------------------
// PastWorkItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastWorkItem {
    pub name: String,
    pub video: String,
    pub added_by: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPastWork {
    pub name: String,
    pub video: String,
}

impl NewPastWork {
    pub fn new(name: impl Into<String>, video: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video: video.into(),
        }
    }
}

impl Draft for NewPastWork {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn urls(&self) -> Vec<(&'static str, &str)> {
        vec![("video", &self.video)]
    }
}

impl Entry for PastWorkItem {
    type Draft = NewPastWork;

    const COLLECTION: Collection = Collection::PastWork;

    fn name(&self) -> &str {
        &self.name
    }

    fn stamp(draft: NewPastWork, added_by: &str, added_at: DateTime<Utc>) -> Self {
        Self {
            name: draft.name,
            video: draft.video,
            added_by: added_by.to_string(),
            added_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
