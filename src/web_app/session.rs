// web_app/session.rs - Per-page request/response state
//
// Each page owns one of these sessions. A submit is split in two halves so
// the page can await the network in between:
//
//   begin(input)            -> validates input, clears old results, issues a token
//   complete(token, result) -> applies the response if the token is still current
//
// Tokens increase monotonically per session. A response carrying an older
// token belongs to a superseded submit and is dropped.

use crate::web_app::error::FetchError;
use crate::web_app::model::*;

/// Alert shown when search or related lookups cannot reach the backend
pub const BACKEND_OFFLINE_ALERT: &str = "Backend is offline!";

/// Alert shown when the backend does not know the requested title
pub const MOVIE_NOT_FOUND_ALERT: &str = "Movie not found!";

/// Identifies one submit within a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct TokenCounter {
    latest: u64,
}

impl TokenCounter {
    fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// What `complete` did with a response
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Results were replaced from the response
    Applied,
    /// A newer submit is in flight; nothing changed
    Stale,
    /// The request failed; results stay empty
    Failed {
        /// What went wrong, for the console
        error: FetchError,
        /// Message to surface to the user, if this page alerts at all
        alert: Option<&'static str>,
    },
}

impl Completion {
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            Completion::Failed { alert, .. } => *alert,
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Completion::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Trim user input, returning `None` when nothing is left
fn normalized_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// State of the Search and Home pages
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<MovieResult>,
    pub explanation: String,
    pub loading: bool,
    /// Set once the first submit went out
    pub searched: bool,
    tokens: TokenCounter,
}

impl SearchSession {
    /// Start a submit; `None` for blank input, in which case nothing changes
    pub fn begin(&mut self, input: &str) -> Option<RequestToken> {
        let query = normalized_input(input)?;

        self.query = query;
        self.results.clear();
        self.explanation.clear();
        self.loading = true;
        self.searched = true;

        Some(self.tokens.issue())
    }

    /// Body for the request the last `begin` started
    pub fn request(&self) -> RecommendRequest {
        RecommendRequest {
            query: self.query.clone(),
            limit: SEARCH_LIMIT,
        }
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<RecommendResponse, FetchError>,
    ) -> Completion {
        if !self.tokens.is_current(token) {
            tracing::debug!("Dropping stale search response (token {})", token.value());
            return Completion::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(response) => {
                self.results = response.results;
                self.explanation = response.explanation;
                Completion::Applied
            }
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", self.query, e);
                self.results.clear();
                self.explanation.clear();
                Completion::Failed {
                    error: e,
                    alert: Some(BACKEND_OFFLINE_ALERT),
                }
            }
        }
    }
}

/// State of the Related page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelatedSession {
    pub input_title: String,
    pub source_movie: Option<SourceMovie>,
    pub results: Vec<MovieResult>,
    pub loading: bool,
    tokens: TokenCounter,
}

impl RelatedSession {
    /// Start a lookup; `None` for blank input, in which case nothing changes
    pub fn begin(&mut self, input: &str) -> Option<RequestToken> {
        let title = normalized_input(input)?;

        self.input_title = title;
        self.source_movie = None;
        self.results.clear();
        self.loading = true;

        Some(self.tokens.issue())
    }

    pub fn request(&self) -> SimilarRequest {
        SimilarRequest {
            title: self.input_title.clone(),
        }
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<SimilarResponse, FetchError>,
    ) -> Completion {
        if !self.tokens.is_current(token) {
            tracing::debug!("Dropping stale related response (token {})", token.value());
            return Completion::Stale;
        }

        self.loading = false;

        let outcome = outcome.and_then(|response| match response.error_message() {
            Some(reason) => Err(FetchError::NotFound(reason)),
            None => Ok(response),
        });

        match outcome {
            Ok(response) => {
                self.source_movie = Some(response.source_movie());
                self.results = response.results;
                Completion::Applied
            }
            Err(e) => {
                tracing::error!("Related lookup for '{}' failed: {}", self.input_title, e);
                self.source_movie = None;
                self.results.clear();
                let alert = match e {
                    FetchError::NotFound(_) => MOVIE_NOT_FOUND_ALERT,
                    _ => BACKEND_OFFLINE_ALERT,
                };
                Completion::Failed {
                    error: e,
                    alert: Some(alert),
                }
            }
        }
    }
}

/// State of the Trending page; loads once and never alerts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendingSession {
    pub results: Vec<MovieResult>,
    tokens: TokenCounter,
}

impl TrendingSession {
    pub fn begin(&mut self) -> RequestToken {
        self.results.clear();
        self.tokens.issue()
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<TrendingResponse, FetchError>,
    ) -> Completion {
        if !self.tokens.is_current(token) {
            return Completion::Stale;
        }

        match outcome {
            Ok(response) => {
                self.results = response.results;
                Completion::Applied
            }
            Err(e) => {
                tracing::error!("Error fetching trending: {}", e);
                self.results.clear();
                Completion::Failed { error: e, alert: None }
            }
        }
    }
}

/// Where a click or key press inside the detail overlay landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Backdrop,
    Content,
    CloseButton,
    EscapeKey,
}

/// The movie whose detail overlay is open, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selected: Option<MovieResult>,
}

impl Selection {
    pub fn select(&mut self, movie: MovieResult) {
        self.selected = Some(movie);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&MovieResult> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Route an overlay event; returns whether the overlay closed.
    /// Clicks on the content panel never dismiss.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::Content => false,
            ModalEvent::Backdrop | ModalEvent::CloseButton | ModalEvent::EscapeKey => {
                let was_open = self.is_open();
                self.clear();
                was_open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, score: f64) -> MovieResult {
        MovieResult {
            title: title.to_string(),
            overview: format!("{} overview", title),
            poster_path: format!("https://image.tmdb.org/t/p/w500/{}.jpg", title),
            score: Some(score),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        for input in ["", " ", "\t\n", "   "] {
            let mut session = SearchSession::default();
            assert!(session.begin(input).is_none(), "input {:?}", input);
            assert_eq!(session, SearchSession::default());

            let mut related = RelatedSession::default();
            assert!(related.begin(input).is_none(), "input {:?}", input);
            assert_eq!(related, RelatedSession::default());
        }
    }

    #[test]
    fn test_blank_input_keeps_previous_results() {
        let mut session = SearchSession::default();
        let token = session.begin("space opera").unwrap();
        session.complete(
            token,
            Ok(RecommendResponse {
                results: vec![movie("Dune", 0.9)],
                explanation: "Sand".to_string(),
            }),
        );
        let before = session.clone();

        assert!(session.begin("  ").is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_begin_clears_and_sets_loading() {
        let mut session = SearchSession::default();
        let first = session.begin("heist").unwrap();
        session.complete(
            first,
            Ok(RecommendResponse {
                results: vec![movie("Heat", 0.8)],
                explanation: "Crime".to_string(),
            }),
        );

        session.begin("  cyberpunk detective ").unwrap();
        assert!(session.loading);
        assert!(session.searched);
        assert!(session.results.is_empty());
        assert!(session.explanation.is_empty());
        assert_eq!(session.query, "cyberpunk detective");
        assert_eq!(session.request().query, "cyberpunk detective");
        assert_eq!(session.request().limit, SEARCH_LIMIT);
    }

    #[test]
    fn test_tokens_increase() {
        let mut session = SearchSession::default();
        let a = session.begin("a").unwrap();
        let b = session.begin("b").unwrap();
        assert!(b > a);
        assert_eq!(b.value(), a.value() + 1);
    }

    #[test]
    fn test_search_failure_alerts_and_clears_loading() {
        let mut session = SearchSession::default();
        let token = session.begin("heist").unwrap();
        let completion = session.complete(token, Err(FetchError::Transport("refused".into())));

        assert_eq!(completion.alert(), Some(BACKEND_OFFLINE_ALERT));
        assert!(!session.loading);
        assert!(session.results.is_empty());
        assert!(session.explanation.is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut session = SearchSession::default();
        let old = session.begin("old").unwrap();
        let new = session.begin("new").unwrap();

        let stale = session.complete(
            old,
            Ok(RecommendResponse {
                results: vec![movie("Old", 0.5)],
                explanation: "old".to_string(),
            }),
        );
        assert_eq!(stale, Completion::Stale);
        assert!(session.loading, "newer request still in flight");
        assert!(session.results.is_empty());

        let applied = session.complete(
            new,
            Ok(RecommendResponse {
                results: vec![movie("New", 0.7)],
                explanation: "new".to_string(),
            }),
        );
        assert_eq!(applied, Completion::Applied);
        assert!(!session.loading);
        assert_eq!(session.results[0].title, "New");
    }

    #[test]
    fn test_stale_failure_does_not_alert() {
        let mut session = RelatedSession::default();
        let old = session.begin("Alien").unwrap();
        let _new = session.begin("Aliens").unwrap();
        let completion = session.complete(old, Err(FetchError::Status(500)));
        assert_eq!(completion, Completion::Stale);
        assert_eq!(completion.alert(), None);
    }

    #[test]
    fn test_related_error_flag_alerts_not_found() {
        let mut session = RelatedSession::default();
        let token = session.begin("Interstellar").unwrap();
        let response = SimilarResponse {
            error: Some(serde_json::Value::Bool(true)),
            ..Default::default()
        };
        let completion = session.complete(token, Ok(response));

        assert_eq!(completion.alert(), Some(MOVIE_NOT_FOUND_ALERT));
        assert!(session.source_movie.is_none());
        assert!(session.results.is_empty());
        assert!(!session.loading);
    }

    #[test]
    fn test_related_transport_error_alerts_offline() {
        let mut session = RelatedSession::default();
        let token = session.begin("Interstellar").unwrap();
        let completion = session.complete(token, Err(FetchError::Transport("reset".into())));
        assert_eq!(completion.alert(), Some(BACKEND_OFFLINE_ALERT));
    }

    #[test]
    fn test_related_success_sets_source() {
        let mut session = RelatedSession::default();
        let token = session.begin("Interstellar").unwrap();
        assert_eq!(session.request().title, "Interstellar");

        let completion = session.complete(
            token,
            Ok(SimilarResponse {
                searched_for: "Interstellar".to_string(),
                searched_plot: "Wormhole.".to_string(),
                results: vec![movie("Gravity", 0.81), movie("Ad Astra", 0.79)],
                error: None,
            }),
        );

        assert_eq!(completion, Completion::Applied);
        let source = session.source_movie.as_ref().unwrap();
        assert_eq!(source.title, "Interstellar");
        assert_eq!(source.overview, "Wormhole.");
        let titles: Vec<_> = session.results.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Gravity", "Ad Astra"]);
    }

    #[test]
    fn test_trending_failure_is_silent() {
        let mut session = TrendingSession::default();
        let token = session.begin();
        let completion = session.complete(token, Err(FetchError::Decode("eof".into())));
        assert_eq!(
            completion,
            Completion::Failed {
                error: FetchError::Decode("eof".into()),
                alert: None,
            }
        );
        assert!(session.results.is_empty());
    }

    #[test]
    fn test_selection_modal_events() {
        let m = movie("Inside Man", 0.87);
        let mut selection = Selection::default();
        assert!(!selection.is_open());

        selection.select(m.clone());
        assert_eq!(selection.selected(), Some(&m));

        assert!(!selection.handle(ModalEvent::Content));
        assert_eq!(selection.selected(), Some(&m));

        assert!(selection.handle(ModalEvent::Backdrop));
        assert!(selection.selected().is_none());

        // Dismissing a closed overlay reports nothing closed
        assert!(!selection.handle(ModalEvent::Backdrop));
    }

    #[test]
    fn test_selection_close_button_and_escape() {
        let mut selection = Selection::default();
        for event in [ModalEvent::CloseButton, ModalEvent::EscapeKey] {
            selection.select(movie("Heat", 0.5));
            assert!(selection.handle(event));
            assert!(!selection.is_open());
        }
    }

    #[test]
    fn test_selecting_replaces_previous() {
        let mut selection = Selection::default();
        selection.select(movie("Heat", 0.5));
        selection.select(movie("Ronin", 0.6));
        assert_eq!(selection.selected().unwrap().title, "Ronin");
    }
}
