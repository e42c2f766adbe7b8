// web_app/pages/mod.rs - Page components module
//
// Each page is a thin controller: it owns its session signal, calls one
// server function and hands the results to the shared movie components.
// - HomePage: hero plus the description search
// - SearchPage: description search (`/recommend`)
// - TrendingPage: trending list loaded on mount (`/trending`)
// - RelatedPage: lookup by title (`/similar`)

pub mod home;
pub mod related;
pub mod search;
pub mod trending;

// Re-export page components
pub use home::HomePage;
pub use related::RelatedPage;
pub use search::{SearchPage, SearchPanel};
pub use trending::TrendingPage;

use crate::web_app::session::Completion;

/// Console line for a failed request, `None` unless `completion` failed
fn failure_line(page: &str, completion: &Completion) -> Option<String> {
    completion
        .error()
        .map(|e| format!("{} request failed: {}", page, e))
}

/// Log a failed request to the console and alert when the page asks for it
pub(crate) fn report(page: &str, completion: &Completion) {
    if let Some(line) = failure_line(page, completion) {
        leptos::logging::error!("{}", line);
    }
    if let Some(message) = completion.alert() {
        show_alert(message);
    }
}

/// Tell the user a request failed
fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = leptos::prelude::window().alert_with_message(message) {
            leptos::logging::error!("Could not show alert: {:?}", e);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    leptos::logging::warn!("{}", message);
}
