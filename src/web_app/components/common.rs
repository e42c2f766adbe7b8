// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::session::ModalEvent;

/// Loading spinner component
#[component]
pub fn Loading(
    /// Message shown below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-slate-700 border-t-indigo-400"></div>
            <span class="mt-4 text-slate-400 font-medium animate-pulse">{message}</span>
        </div>
    }
}

fn insight_box_class(accent: &str) -> String {
    format!("ai-box bg-slate-800/70 rounded-xl p-6 mb-8 border-l-4 {}", accent)
}

/// Highlighted text box above the results
///
/// Used for the search explanation and for the movie a related lookup
/// was based on.
#[component]
pub fn InsightBox(
    icon: &'static str,
    #[prop(into)]
    heading: String,
    #[prop(into)]
    body: String,
    /// Tailwind border colour of the left accent
    #[prop(default = "border-indigo-400")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=insight_box_class(accent)>
            <div class="flex items-center gap-2 mb-2 font-semibold text-slate-100">
                <span>{icon}</span>
                <span>{heading}</span>
            </div>
            <p class="text-slate-300 leading-relaxed">{body}</p>
        </div>
    }
}

/// Map a key press inside the overlay to a modal event
fn modal_event_for_key(key: &str) -> Option<ModalEvent> {
    (key == "Escape").then_some(ModalEvent::EscapeKey)
}

/// Modal wrapper component
///
/// Every dismiss-related interaction is reported through `on_event`; the
/// caller decides what closes. Clicks inside the panel stop propagating so
/// the backdrop never sees them.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Receives backdrop, content, close-button and Escape events
    on_event: Callback<ModalEvent>,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if let Some(event) = modal_event_for_key(&ev.key()) {
            on_event.run(event);
        }
    };

    // Key events only reach the overlay while it has focus
    let overlay = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = overlay.get() {
            if let Err(e) = el.focus() {
                leptos::logging::warn!("Could not focus modal: {:?}", e);
            }
        }
    });

    view! {
        <div
            node_ref=overlay
            class="modal-overlay fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6 bg-black/70 backdrop-blur-sm"
            tabindex="-1"
            on:keydown=handle_keydown
            on:click=move |_| on_event.run(ModalEvent::Backdrop)
        >
            <div
                class="modal-content relative bg-slate-900 text-slate-100 rounded-2xl shadow-2xl w-full max-w-4xl max-h-[90vh] overflow-y-auto"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_event.run(ModalEvent::Content);
                }
            >
                <button
                    class="modal-close absolute top-3 right-4 text-3xl text-slate-400 hover:text-white transition-colors"
                    title="Close"
                    on:click=move |_| on_event.run(ModalEvent::CloseButton)
                >
                    "×"
                </button>
                {children()}
            </div>
        </div>
    }
}
