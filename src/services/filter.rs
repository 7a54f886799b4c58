use crate::models::{MovieFilter, MovieRecord};

/// Outcome of running a [`MovieFilter`] over the collection
#[derive(Debug, PartialEq)]
pub enum FilterOutcome<'a> {
    /// No criteria were given; the whole collection applies
    Unfiltered(&'a [MovieRecord]),
    /// At least one record survived every criterion, in collection order
    Matches(Vec<&'a MovieRecord>),
    /// Criteria were given and nothing survived
    NoMatches,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Narrows the collection by each present criterion in turn:
/// genre, then country, then minimum average vote.
///
/// Each step only looks at what the previous one kept.
pub fn apply<'a>(movies: &'a [MovieRecord], filter: &MovieFilter) -> FilterOutcome<'a> {
    if filter.is_empty() {
        return FilterOutcome::Unfiltered(movies);
    }

    let mut working: Vec<&MovieRecord> = movies.iter().collect();

    if let Some(genre) = filter.genre {
        working.retain(|movie| contains_ignore_case(movie.genre(), genre));
    }

    if let Some(country) = filter.country {
        working.retain(|movie| contains_ignore_case(movie.country(), country));
    }

    if let Some(min_avg_vote) = filter.min_avg_vote {
        working.retain(|movie| movie.avg_vote() >= min_avg_vote);
    }

    tracing::debug!(
        candidates = movies.len(),
        matched = working.len(),
        "Filtered movies"
    );

    if working.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Matches(working)
    }
}
