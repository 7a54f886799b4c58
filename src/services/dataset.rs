use std::path::{Path, PathBuf};

use crate::models::MovieRecord;

/// Movie collection bundled into the binary
const EMBEDDED_MOVIES: &str = include_str!("../../data/movies-data-small.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The read-only, ordered movie collection served by the API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    movies: Vec<MovieRecord>,
}

impl Dataset {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// Parses a JSON array of movie objects
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let movies: Vec<MovieRecord> = serde_json::from_str(json)?;
        Ok(Self::new(movies))
    }

    /// Loads the collection that ships with the binary
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json_str(EMBEDDED_MOVIES)
    }

    /// Loads a collection from a JSON file on disk
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads from `path` when given, otherwise the embedded collection
    pub fn load(path: Option<&Path>) -> Result<Self, DatasetError> {
        let dataset = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::embedded()?,
        };

        tracing::info!(
            movies = dataset.len(),
            source = %path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
            "Movie dataset loaded"
        );

        Ok(dataset)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
