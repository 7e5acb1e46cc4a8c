//! The item record and the typed request bodies that create and change it.

use crate::{Error, Result};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use std::{fmt, str};

/// Prefix of identifiers generated on create.
pub const GENERATED_ID_PREFIX: &str = "item_";

// ISO-8601 without an offset, as older records carry it; read as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A UTC instant with microsecond precision.
///
/// Rendered as fixed-width RFC 3339 (`2024-01-01T12:00:00.000000Z`), so the
/// string order of two timestamps is their chronological order. Parsing also
/// accepts any RFC 3339 offset and offset-less ISO-8601, which is taken as UTC;
/// either way the value is re-rendered in the fixed-width form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap an instant, truncating it to microseconds.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant.trunc_subsecs(6))
    }

    /// The wrapped instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl str::FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let instant = match DateTime::parse_from_rfc3339(s) {
            Ok(instant) => instant.with_timezone(&Utc),
            Err(error) => NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
                .map_err(|_| error)?
                .and_utc(),
        };
        Ok(Self::new(instant))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The persisted record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, immutable identifier; the table's partition key.
    pub id: String,
    /// Required, never empty.
    pub title: String,
    /// Free text, empty by default.
    #[serde(default)]
    pub description: String,
    /// Completion flag, `false` by default.
    #[serde(default)]
    pub completed: bool,
    /// Set once on create.
    pub created_at: Timestamp,
    /// Set on create and refreshed by every update.
    pub updated_at: Timestamp,
}

impl Item {
    /// Identifier derived from the creation time.
    ///
    /// Two items created within the same microsecond get the same identifier.
    pub fn generate_id(now: Timestamp) -> String {
        format!("{GENERATED_ID_PREFIX}{}", now.to_string().replace(':', "-"))
    }

    /// Sort newest first by `created_at`.
    pub fn sort_newest_first(items: &mut [Self]) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateItemRequest {
    /// Caller-chosen identifier; generated when absent or empty.
    pub id: Option<String>,
    /// Required.
    pub title: Option<String>,
    /// Defaults to empty.
    pub description: Option<String>,
    /// Defaults to `false`.
    pub completed: Option<bool>,
}

impl CreateItemRequest {
    /// Build the item to persist, stamping both timestamps with `now`.
    pub fn into_item(self, now: Timestamp) -> Result<Item> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .ok_or_else(|| Error::Validation("field \"title\" is required".to_string()))?;
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Item::generate_id(now));
        Ok(Item {
            id,
            title,
            description: self.description.unwrap_or_default(),
            completed: self.completed.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Body of an update request: the fields to replace, all optional.
///
/// A field that is absent or `null` is left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPatch {
    /// New title; must not be empty when given.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// Reject a patch that would leave the item without a title.
    pub fn validate(&self) -> Result<()> {
        match self.title.as_deref() {
            Some("") => Err(Error::Validation(
                "field \"title\" must not be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Attribute assignments for this patch: `updated_at` first, then each
    /// given field in declaration order.
    pub fn assignments(&self, updated_at: Timestamp) -> IndexMap<String, Value> {
        let mut set = IndexMap::from([(
            "updated_at".to_string(),
            Value::String(updated_at.to_string()),
        )]);
        if let Some(title) = &self.title {
            set.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(description) = &self.description {
            set.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(completed) = self.completed {
            set.insert("completed".to_string(), Value::Bool(completed));
        }
        set
    }

    /// Apply the patch to an item in place.
    pub fn apply(&self, item: &mut Item, updated_at: Timestamp) {
        if let Some(title) = &self.title {
            item.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            item.description.clone_from(description);
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
        item.updated_at = updated_at;
    }
}
