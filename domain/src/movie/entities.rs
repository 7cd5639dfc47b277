//! Movie record entity.

use serde::{Deserialize, Serialize};

/// A movie as reported by the metadata provider.
///
/// Identity is the provider-assigned `id`; the record is never mutated by
/// this crate. All non-identity fields carry explicit defaults so that
/// sparse provider payloads deserialize without hidden null handling:
/// `vote_average` and `popularity` default to 0.0, `release_date` and
/// `overview` to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
}

impl MovieRecord {
    /// Release year: the first four characters of the release date, or
    /// `None` when the date is absent or shorter.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.get(..4).filter(|y| !y.is_empty())
    }
}

/// Filter and order a similar-movies listing for recommendation.
///
/// Keeps records with `vote_average >= min_score` and sorts by
/// `popularity` descending. Provider ordering is otherwise discarded.
pub fn rank_similar(movies: Vec<MovieRecord>, min_score: f64) -> Vec<MovieRecord> {
    let mut kept: Vec<MovieRecord> = movies
        .into_iter()
        .filter(|m| m.vote_average >= min_score)
        .collect();
    kept.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str, vote_average: f64, popularity: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            vote_average,
            release_date: String::new(),
            overview: String::new(),
            popularity,
        }
    }

    #[test]
    fn test_release_year() {
        let mut m = movie(27205, "Inception", 8.8, 30.0);
        m.release_date = "2010-07-16".to_string();
        assert_eq!(m.release_year(), Some("2010"));
    }

    #[test]
    fn test_release_year_empty_date() {
        let m = movie(1, "Mystery", 5.0, 1.0);
        assert_eq!(m.release_year(), None);
    }

    #[test]
    fn test_sparse_payload_gets_defaults() {
        let m: MovieRecord = serde_json::from_str(r#"{"id": 7, "title": "Bare"}"#).unwrap();
        assert_eq!(m.vote_average, 0.0);
        assert_eq!(m.release_date, "");
        assert_eq!(m.overview, "");
        assert_eq!(m.popularity, 0.0);
    }

    #[test]
    fn test_rank_similar_filters_and_sorts() {
        let ranked = rank_similar(
            vec![
                movie(1, "Low Score", 6.9, 99.0),
                movie(2, "Niche Gem", 8.1, 5.0),
                movie(3, "Blockbuster", 7.4, 80.0),
            ],
            7.0,
        );
        let titles: Vec<&str> = ranked.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Blockbuster", "Niche Gem"]);
    }

    #[test]
    fn test_rank_similar_keeps_exact_threshold() {
        let ranked = rank_similar(vec![movie(1, "Edge", 7.0, 1.0)], 7.0);
        assert_eq!(ranked.len(), 1);
    }
}
