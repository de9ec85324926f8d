//! Fuzzy name matching for preferred-POI resolution.
//!
//! Similarity is normalised Levenshtein on lowercased input, scaled to a
//! 0–100 range. Any implementation meeting that contract would do; `strsim`
//! is the one the rest of the stack already uses.

/// Similarity between two names on a 0–100 scale.
///
/// Comparison is case-insensitive. Identical strings score 100; strings
/// with nothing in common score near 0.
///
/// # Examples
/// ```
/// use wayfare_scorer::name_similarity;
///
/// assert_eq!(name_similarity("Kek Lok Si Temple", "kek lok si temple"), 100.0);
/// assert!(name_similarity("Genting Highlands", "Genting Highland") > 90.0);
/// assert!(name_similarity("Genting Highlands", "zoo") < 20.0);
/// ```
#[must_use]
pub fn name_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

/// Highest similarity between `name` and any of the requested names.
///
/// Returns 0 when `requests` is empty.
pub(crate) fn best_match(name: &str, requests: &[String]) -> f64 {
    requests
        .iter()
        .map(|request| name_similarity(name, request))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn best_match_over_empty_requests_is_zero() {
        assert_eq!(best_match("Penang Hill", &[]), 0.0);
    }

    #[rstest]
    fn best_match_picks_the_closest_request() {
        let requests = vec!["Batu Caves".to_owned(), "Penang Hill".to_owned()];
        let score = best_match("penang hill", &requests);
        assert_eq!(score, 100.0);
    }

    #[rstest]
    #[case("Cameron Highlands", "Cameron Highlands Tea Estate")]
    fn partial_names_score_between_extremes(#[case] a: &str, #[case] b: &str) {
        let score = name_similarity(a, b);
        assert!(score > 40.0 && score < 100.0, "got {score}");
    }
}
