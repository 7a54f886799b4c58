use crate::models::{MovieFilter, MovieQuery};

use super::allow_list::{COUNTRIES, GENRES};

pub const MIN_AVG_VOTE: f64 = 1.0;
pub const MAX_AVG_VOTE: f64 = 10.0;

/// A query value outside the accepted domain.
///
/// The display text is the guidance returned to the client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Genre must be one of: {}", GENRES.describe())]
    Genre(String),

    #[error("Country must be one of: {}", COUNTRIES.describe())]
    Country(String),

    #[error("Average vote must be a number between 1 and 10")]
    AvgVote(String),
}

impl ValidationError {
    /// Name of the offending query parameter
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Genre(_) => "genre",
            ValidationError::Country(_) => "country",
            ValidationError::AvgVote(_) => "avg_vote",
        }
    }

    /// The rejected value as supplied by the client
    pub fn value(&self) -> &str {
        match self {
            ValidationError::Genre(v) | ValidationError::Country(v) | ValidationError::AvgVote(v) => v,
        }
    }
}

/// Treats missing and blank parameters alike
fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_avg_vote(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| (MIN_AVG_VOTE..=MAX_AVG_VOTE).contains(v))
}

fn check(query: &MovieQuery) -> Result<MovieFilter, ValidationError> {
    let genre = present(&query.genre)
        .map(|raw| GENRES.lookup(raw).ok_or_else(|| ValidationError::Genre(raw.to_string())))
        .transpose()?;

    let country = present(&query.country)
        .map(|raw| {
            COUNTRIES
                .lookup(raw)
                .ok_or_else(|| ValidationError::Country(raw.to_string()))
        })
        .transpose()?;

    let min_avg_vote = present(&query.avg_vote)
        .map(|raw| parse_avg_vote(raw).ok_or_else(|| ValidationError::AvgVote(raw.to_string())))
        .transpose()?;

    Ok(MovieFilter {
        genre,
        country,
        min_avg_vote,
    })
}

/// Validates raw query parameters in the order genre, country, avg_vote.
///
/// The first invalid parameter is reported and the rest are not examined.
pub fn validate(query: &MovieQuery) -> Result<MovieFilter, ValidationError> {
    check(query).inspect_err(|e| {
        tracing::error!(field = e.field(), value = %e.value(), "Invalid query parameter");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn query(genre: Option<&str>, country: Option<&str>, avg_vote: Option<&str>) -> MovieQuery {
        MovieQuery {
            genre: genre.map(String::from),
            country: country.map(String::from),
            avg_vote: avg_vote.map(String::from),
        }
    }

    #[test]
    fn test_no_params_yields_empty_filter() {
        let filter = validate(&MovieQuery::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_blank_params_are_ignored() {
        let filter = validate(&query(Some(""), Some("   "), Some(""))).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_valid_params_are_canonicalized() {
        let filter = validate(&query(Some("comedy"), Some(" JAPAN "), Some("7.5"))).unwrap();
        assert_eq!(filter.genre, Some("Comedy"));
        assert_eq!(filter.country, Some("Japan"));
        assert_eq!(filter.min_avg_vote, Some(7.5));
    }

    #[test]
    fn test_invalid_genre() {
        let err = validate(&query(Some("sciencefiction"), None, None)).unwrap_err();
        assert_eq!(err, ValidationError::Genre("sciencefiction".to_string()));
        assert_eq!(err.field(), "genre");
        assert!(err.to_string().starts_with("Genre must be one of: Animation, Drama"));
    }

    #[test]
    fn test_invalid_country() {
        let err = validate(&query(None, Some("Atlantis"), None)).unwrap_err();
        assert_eq!(err.field(), "country");
        assert_eq!(err.value(), "Atlantis");
        assert!(err.to_string().contains("Japan"));
    }

    #[test]
    fn test_avg_vote_bounds() {
        assert_eq!(validate(&query(None, None, Some("1"))).unwrap().min_avg_vote, Some(1.0));
        assert_eq!(validate(&query(None, None, Some("10"))).unwrap().min_avg_vote, Some(10.0));

        for bad in ["0.99", "10.01", "11", "-3", "abc", "NaN", "inf", "7,5"] {
            let err = validate(&query(None, None, Some(bad))).unwrap_err();
            assert_eq!(err, ValidationError::AvgVote(bad.to_string()), "accepted {bad}");
        }
    }

    #[test]
    fn test_avg_vote_message_states_range() {
        let err = validate(&query(None, None, Some("11"))).unwrap_err();
        assert_eq!(err.to_string(), "Average vote must be a number between 1 and 10");
    }

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn validate_with_logs(query: &MovieQuery) -> (Result<MovieFilter, ValidationError>, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || validate(query));
        (result, logs.contents())
    }

    #[test]
    fn test_rejection_is_logged_with_field_and_value() {
        let (result, logs) = validate_with_logs(&query(Some("sciencefiction"), None, None));

        assert!(result.is_err());
        let line = logs
            .lines()
            .find(|line| line.contains("Invalid query parameter"))
            .expect("no log line for the rejected parameter");
        assert!(line.contains("ERROR"), "{line}");
        assert!(line.contains(r#"field="genre""#), "{line}");
        assert!(line.contains("value=sciencefiction"), "{line}");
    }

    #[test]
    fn test_valid_query_logs_nothing_at_error() {
        let (result, logs) = validate_with_logs(&query(Some("drama"), Some("italy"), Some("7")));

        assert!(result.is_ok());
        assert!(!logs.contains("ERROR"), "{logs}");
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate(&query(Some("nope"), Some("nowhere"), Some("99"))).unwrap_err();
        assert_eq!(err.field(), "genre");

        let err = validate(&query(Some("drama"), Some("nowhere"), Some("99"))).unwrap_err();
        assert_eq!(err.field(), "country");

        let err = validate(&query(Some("drama"), Some("italy"), Some("99"))).unwrap_err();
        assert_eq!(err.field(), "avg_vote");
    }
}
