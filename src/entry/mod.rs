//! Journal entry data model.
//!
//! An [`Entry`] is one journal record for a calendar day. Its `fields` map is an
//! open string-to-string mapping on the wire; [`FieldId`] names the keys the
//! journal recognises so callers can address them without string typos.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a recognised entry field.
///
/// The wire representation is the upper-case name returned by [`FieldId::as_str`].
///
/// # Examples
///
/// ```
/// use days::entry::FieldId;
///
/// assert_eq!(FieldId::MoodText.as_str(), "MOOD_TXT");
/// assert_eq!("WORKING".parse::<FieldId>().unwrap(), FieldId::Working);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PositionLon,
    PositionLat,
    PositionName,
    Rating,
    General,
    Working,
    Mood,
    MoodText,
    Lunch,
    Dinner,
    Tv,
    Sleep,
    SleepText,
}

impl FieldId {
    /// Every field identifier, in the order the journal form presents them.
    pub const ALL: [FieldId; 13] = [
        FieldId::PositionLon,
        FieldId::PositionLat,
        FieldId::PositionName,
        FieldId::Rating,
        FieldId::General,
        FieldId::Working,
        FieldId::Mood,
        FieldId::MoodText,
        FieldId::Lunch,
        FieldId::Dinner,
        FieldId::Tv,
        FieldId::Sleep,
        FieldId::SleepText,
    ];

    /// Returns the key used for this field in an entry's `fields` map.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::PositionLon => "POSITION_LON",
            FieldId::PositionLat => "POSITION_LAT",
            FieldId::PositionName => "POSITION_NAME",
            FieldId::Rating => "RATING",
            FieldId::General => "GENERAL",
            FieldId::Working => "WORKING",
            FieldId::Mood => "MOOD",
            FieldId::MoodText => "MOOD_TXT",
            FieldId::Lunch => "LUNCH",
            FieldId::Dinner => "DINNER",
            FieldId::Tv => "TV",
            FieldId::Sleep => "SLEEP",
            FieldId::SleepText => "SLEEP_TXT",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldId(pub String);

impl fmt::Display for UnknownFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field identifier '{}'", self.0)
    }
}

impl std::error::Error for UnknownFieldId {}

impl FromStr for FieldId {
    type Err = UnknownFieldId;

    /// Parses a wire name. Lower-case names are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldId(s.to_string()))
    }
}

/// One journal entry for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar date in `YYYY-MM-DD` form; the entry's unique key.
    pub date: String,
    /// ISO-8601 timestamp of the last write.
    pub timestamp: String,
    /// Field values keyed by field identifier.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: HashMap<String, String>,
}

impl Entry {
    /// Creates an empty entry for `date`, stamped with the current UTC time.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            fields: HashMap::new(),
        }
    }

    /// Returns the value stored for `id`, if any.
    pub fn field(&self, id: FieldId) -> Option<&str> {
        self.fields.get(id.as_str()).map(String::as_str)
    }

    /// Stores `value` under `id`, replacing any previous value.
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields.insert(id.as_str().to_string(), value.into());
    }
}

/// Per-day summary returned by the month summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySummary {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Value of the entry's `WORKING` field; empty when unset.
    #[serde(default)]
    pub working: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<HashMap<String, String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
