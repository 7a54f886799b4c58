use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A single movie from the dataset.
///
/// Only the fields the API filters on are typed. The full source object is
/// kept alongside so that responses reproduce every field exactly as loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct MovieRecord {
    genre: String,
    country: String,
    avg_vote: f64,
    source: Map<String, Value>,
}

/// Reason a source object could not become a [`MovieRecord`]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    Missing(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("field `avg_vote` must be a number, got {0}")]
    InvalidAvgVote(Value),
}

impl MovieRecord {
    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn avg_vote(&self) -> f64 {
        self.avg_vote
    }

    /// Looks up any field of the source object, typed or not
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.source.get(name)
    }
}

fn string_field(source: &Map<String, Value>, name: &'static str) -> Result<String, RecordError> {
    match source.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RecordError::NotAString(name)),
        None => Err(RecordError::Missing(name)),
    }
}

impl TryFrom<Map<String, Value>> for MovieRecord {
    type Error = RecordError;

    fn try_from(source: Map<String, Value>) -> Result<Self, Self::Error> {
        let genre = string_field(&source, "genre")?;
        let country = string_field(&source, "country")?;

        let raw_vote = source
            .get("avg_vote")
            .ok_or(RecordError::Missing("avg_vote"))?;
        // Some exports store the rating as a string
        let avg_vote = match raw_vote {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
        .ok_or_else(|| RecordError::InvalidAvgVote(raw_vote.clone()))?;

        Ok(Self {
            genre,
            country,
            avg_vote,
            source,
        })
    }
}

impl Serialize for MovieRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source.serialize(serializer)
    }
}
