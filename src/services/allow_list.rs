use std::collections::HashMap;
use std::sync::OnceLock;

/// A fixed set of accepted values for one query parameter.
///
/// Lookups are exact matches after case normalization, so `"war"` is
/// accepted while `"wa"` or `"warfare"` are not.
pub struct AllowList {
    values: &'static [&'static str],
    index: OnceLock<HashMap<String, &'static str>>,
}

impl AllowList {
    pub const fn new(values: &'static [&'static str]) -> Self {
        Self {
            values,
            index: OnceLock::new(),
        }
    }

    /// Returns the canonical spelling of `candidate` if it is in the list
    pub fn lookup(&self, candidate: &str) -> Option<&'static str> {
        self.index
            .get_or_init(|| {
                self.values
                    .iter()
                    .map(|value| (value.to_lowercase(), *value))
                    .collect()
            })
            .get(&candidate.to_lowercase())
            .copied()
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// Comma separated list used in client-facing messages
    pub fn describe(&self) -> String {
        self.values.join(", ")
    }
}

pub static GENRES: AllowList = AllowList::new(&[
    "Animation",
    "Drama",
    "Romantic",
    "Comedy",
    "Crime",
    "Thriller",
    "Adventure",
    "Documentary",
    "Horror",
    "Action",
    "Western",
    "Spy",
    "Final Embrace",
    "History",
    "Biography",
    "Musical",
    "Fantasy",
    "War",
    "Grotesque",
]);

pub static COUNTRIES: AllowList = AllowList::new(&[
    "United States",
    "Italy",
    "France",
    "Great Britain",
    "Germany",
    "Japan",
    "Canada",
    "Spain",
    "China",
    "Hong Kong",
    "Australia",
    "Israel",
    "India",
    "Mexico",
    "Brazil",
    "Sweden",
    "Denmark",
    "South Korea",
    "Russia",
    "Argentina",
    "Ireland",
    "Belgium",
    "Netherlands",
    "New Zealand",
    "Austria",
    "Switzerland",
    "Poland",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(GENRES.lookup("comedy"), Some("Comedy"));
        assert_eq!(GENRES.lookup("FINAL EMBRACE"), Some("Final Embrace"));
        assert_eq!(COUNTRIES.lookup("hong kong"), Some("Hong Kong"));
    }

    #[test]
    fn test_lookup_rejects_partial_matches() {
        assert_eq!(GENRES.lookup("war"), Some("War"));
        assert_eq!(GENRES.lookup("wa"), None);
        assert_eq!(GENRES.lookup("warfare"), None);
        assert_eq!(GENRES.lookup("Drama,Romantic"), None);
        assert_eq!(COUNTRIES.lookup("United"), None);
        assert_eq!(COUNTRIES.lookup(""), None);
    }

    #[test]
    fn test_describe_lists_every_value() {
        let description = GENRES.describe();
        for genre in GENRES.values() {
            assert!(description.contains(genre));
        }
        assert!(description.starts_with("Animation, Drama"));
    }
}
