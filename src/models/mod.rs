use serde::Deserialize;

pub mod movie;

pub use movie::MovieRecord;

/// Raw query parameters of `GET /movie`, exactly as the client sent them
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MovieQuery {
    pub genre: Option<String>,
    pub country: Option<String>,
    pub avg_vote: Option<String>,
}

/// Validated filter criteria.
///
/// Every present field has passed validation: genre and country hold the
/// canonical allow-list spelling, `min_avg_vote` lies within `[1, 10]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovieFilter {
    pub genre: Option<&'static str>,
    pub country: Option<&'static str>,
    pub min_avg_vote: Option<f64>,
}

impl MovieFilter {
    /// True when no criteria are set and the full collection should be returned
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.country.is_none() && self.min_avg_vote.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_query_deserializes_partial_params() {
        let query: MovieQuery = serde_json::from_str(r#"{"genre": "comedy"}"#).unwrap();
        assert_eq!(query.genre.as_deref(), Some("comedy"));
        assert_eq!(query.country, None);
        assert_eq!(query.avg_vote, None);
    }

    #[test]
    fn test_filter_is_empty() {
        assert!(MovieFilter::default().is_empty());
        let filter = MovieFilter {
            min_avg_vote: Some(7.0),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
