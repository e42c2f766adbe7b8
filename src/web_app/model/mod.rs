// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON exchanged with the recommendation service
// and are passed unchanged through the server functions to the browser.

use serde::{Deserialize, Serialize};

/// Number of results requested from `/recommend`
pub const SEARCH_LIMIT: u32 = 10;

/// Characters of overview shown on a card before it is cut off
pub const OVERVIEW_PREVIEW_CHARS: usize = 150;

/// Shown in the detail modal when the backend sends no release date
pub const RELEASE_DATE_PLACEHOLDER: &str = "N/A";

/// One movie record returned by the recommendation service
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieResult {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: String,
    /// Similarity in [0, 1]; only sent by search and related lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl MovieResult {
    /// Release date for display, falling back to a placeholder
    pub fn release_date_label(&self) -> &str {
        match self.release_date.as_deref() {
            Some(date) if !date.trim().is_empty() => date,
            _ => RELEASE_DATE_PLACEHOLDER,
        }
    }

    /// Overview cut to the card preview length
    pub fn overview_preview(&self) -> String {
        truncate_chars(&self.overview, OVERVIEW_PREVIEW_CHARS)
    }

    /// `7.3/10` style rating used in the detail modal
    pub fn rating_label(&self) -> Option<String> {
        self.vote_average.map(|v| format!("{}/10", v))
    }

    /// `Match: 87%` style label used in the detail modal
    pub fn match_label(&self) -> Option<String> {
        self.score.map(|s| format!("Match: {}", percent_label(s)))
    }
}

/// Body of `POST /recommend`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub query: String,
    pub limit: u32,
}

/// Response of `POST /recommend`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub results: Vec<MovieResult>,
    #[serde(default)]
    pub explanation: String,
}

/// Body of `POST /similar`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarRequest {
    pub title: String,
}

/// Response of `POST /similar`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarResponse {
    #[serde(default)]
    pub searched_for: String,
    #[serde(default)]
    pub searched_plot: String,
    #[serde(default)]
    pub results: Vec<MovieResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl SimilarResponse {
    /// Whether the backend flagged the lookup as failed.
    ///
    /// The flag is loosely typed upstream (`true`, a message string, ...),
    /// so any truthy JSON value counts.
    pub fn has_error(&self) -> bool {
        match &self.error {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }

    /// Human readable reason for a flagged lookup, if the backend sent one
    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ if self.has_error() => Some(format!("no match for '{}'", self.searched_for)),
            _ => None,
        }
    }

    pub fn source_movie(&self) -> SourceMovie {
        SourceMovie {
            title: self.searched_for.clone(),
            overview: self.searched_plot.clone(),
        }
    }
}

/// Response of `GET /trending`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub results: Vec<MovieResult>,
}

/// The movie a related lookup resolved the user's title to
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMovie {
    pub title: String,
    pub overview: String,
}

/// Badge decoration a page puts on its result cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeKind {
    /// `87%` from the similarity score
    #[default]
    Score,
    /// `87% Match` from the similarity score
    Match,
    /// `7.5 ★` from the vote average
    Rating,
}

impl BadgeKind {
    /// Badge text for a movie, or `None` when the value it needs is missing
    pub fn label(&self, movie: &MovieResult) -> Option<String> {
        match self {
            BadgeKind::Score => movie.score.map(percent_label),
            BadgeKind::Match => movie.score.map(|s| format!("{} Match", percent_label(s))),
            BadgeKind::Rating => movie.vote_average.map(rating_label),
        }
    }
}

impl std::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeKind::Score => write!(f, "Score"),
            BadgeKind::Match => write!(f, "Match"),
            BadgeKind::Rating => write!(f, "Rating"),
        }
    }
}

/// `round(score * 100)` followed by `%`
pub fn percent_label(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// Vote average to one decimal followed by a star
pub fn rating_label(vote_average: f64) -> String {
    format!("{:.1} ★", vote_average)
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", text[..byte_idx].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie(score: Option<f64>, vote_average: Option<f64>) -> MovieResult {
        MovieResult {
            title: "Inside Man".to_string(),
            overview: "A bank heist unfolds.".to_string(),
            poster_path: "https://image.tmdb.org/t/p/w500/inside.jpg".to_string(),
            score,
            vote_average,
            release_date: None,
        }
    }

    #[test]
    fn test_badge_kind_default() {
        assert_eq!(BadgeKind::default(), BadgeKind::Score);
    }

    #[test]
    fn test_badge_kind_display() {
        assert_eq!(BadgeKind::Score.to_string(), "Score");
        assert_eq!(BadgeKind::Match.to_string(), "Match");
        assert_eq!(BadgeKind::Rating.to_string(), "Rating");
    }

    #[test]
    fn test_percent_label_rounds_to_nearest() {
        assert_eq!(percent_label(0.87), "87%");
        assert_eq!(percent_label(0.875), "88%");
        assert_eq!(percent_label(0.874), "87%");
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(1.0), "100%");
    }

    #[test]
    fn test_rating_label_one_decimal() {
        assert_eq!(rating_label(7.24), "7.2 ★");
        assert_eq!(rating_label(8.0), "8.0 ★");
        assert_eq!(rating_label(6.66), "6.7 ★");
    }

    #[test]
    fn test_badge_labels_per_kind() {
        let m = movie(Some(0.87), Some(7.6));
        assert_eq!(BadgeKind::Score.label(&m).as_deref(), Some("87%"));
        assert_eq!(BadgeKind::Match.label(&m).as_deref(), Some("87% Match"));
        assert_eq!(BadgeKind::Rating.label(&m).as_deref(), Some("7.6 ★"));
    }

    #[test]
    fn test_badge_omitted_when_value_missing() {
        let m = movie(None, None);
        assert!(BadgeKind::Score.label(&m).is_none());
        assert!(BadgeKind::Match.label(&m).is_none());
        assert!(BadgeKind::Rating.label(&m).is_none());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_chars("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        // Cutting must land on a char boundary
        let text = "é".repeat(12);
        let cut = truncate_chars(&text, 10);
        assert_eq!(cut, format!("{}...", "é".repeat(10)));
    }

    #[test]
    fn test_release_date_label_placeholder() {
        let mut m = movie(None, None);
        assert_eq!(m.release_date_label(), "N/A");
        m.release_date = Some("  ".to_string());
        assert_eq!(m.release_date_label(), "N/A");
        m.release_date = Some("2006-03-24".to_string());
        assert_eq!(m.release_date_label(), "2006-03-24");
    }

    #[test]
    fn test_modal_labels() {
        let m = movie(Some(0.913), Some(7.6));
        assert_eq!(m.rating_label().as_deref(), Some("7.6/10"));
        assert_eq!(m.match_label().as_deref(), Some("Match: 91%"));
        assert!(movie(None, None).match_label().is_none());
    }

    #[test]
    fn test_movie_result_minimal_json() {
        let m: MovieResult = serde_json::from_value(json!({ "title": "Heat" })).unwrap();
        assert_eq!(m.title, "Heat");
        assert_eq!(m.overview, "");
        assert_eq!(m.poster_path, "");
        assert!(m.score.is_none());
        assert!(m.vote_average.is_none());
        assert!(m.release_date.is_none());
    }

    #[test]
    fn test_recommend_request_body_shape() {
        let body = serde_json::to_value(RecommendRequest {
            query: "heist thriller".to_string(),
            limit: SEARCH_LIMIT,
        })
        .unwrap();
        assert_eq!(body, json!({ "query": "heist thriller", "limit": 10 }));
    }

    #[test]
    fn test_similar_request_body_shape() {
        let body = serde_json::to_value(SimilarRequest {
            title: "Interstellar".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "title": "Interstellar" }));
    }

    #[test]
    fn test_similar_response_error_truthiness() {
        let cases = [
            (json!({ "error": true }), true),
            (json!({ "error": false }), false),
            (json!({ "error": null }), false),
            (json!({ "error": "Movie not in database" }), true),
            (json!({ "error": "" }), false),
            (json!({ "error": 0 }), false),
            (json!({ "error": 1 }), true),
            (json!({ "error": {} }), true),
            (json!({}), false),
        ];

        for (value, expected) in cases {
            let resp: SimilarResponse = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(resp.has_error(), expected, "error flag for {}", value);
        }
    }

    #[test]
    fn test_similar_error_message() {
        let resp: SimilarResponse =
            serde_json::from_value(json!({ "error": "Movie not in database" })).unwrap();
        assert_eq!(resp.error_message().as_deref(), Some("Movie not in database"));

        let resp: SimilarResponse =
            serde_json::from_value(json!({ "error": true, "searched_for": "Interstellar" })).unwrap();
        assert_eq!(resp.error_message().as_deref(), Some("no match for 'Interstellar'"));

        let resp = SimilarResponse::default();
        assert!(resp.error_message().is_none());
    }

    #[test]
    fn test_similar_source_movie() {
        let resp: SimilarResponse = serde_json::from_value(json!({
            "searched_for": "Interstellar",
            "searched_plot": "Explorers travel through a wormhole.",
            "results": []
        }))
        .unwrap();
        let source = resp.source_movie();
        assert_eq!(source.title, "Interstellar");
        assert_eq!(source.overview, "Explorers travel through a wormhole.");
    }
}
