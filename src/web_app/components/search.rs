// web_app/components/search.rs - Search input component
//
// Shared by the description search (Home, Search) and the title lookup
// (Related). Pressing Enter submits through the form.

use leptos::prelude::*;

fn button_text(loading: bool, label: &'static str, loading_label: &'static str) -> &'static str {
    if loading {
        loading_label
    } else {
        label
    }
}

/// Text input with a submit button that is disabled while loading
#[component]
pub fn SearchBar(
    /// Current input text
    value: RwSignal<String>,
    /// Whether a request is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Callback when the user submits
    on_submit: Callback<()>,
    #[prop(default = "Search...")]
    placeholder: &'static str,
    #[prop(default = "Search")]
    button_label: &'static str,
    #[prop(default = "Searching...")]
    loading_label: &'static str,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit class="search-container w-full flex gap-4 mb-10">
            <input
                type="text"
                placeholder=placeholder
                class="flex-1 px-5 py-3 bg-slate-800 text-slate-100 border-2 border-slate-700 rounded-xl \
                       focus:border-indigo-400 outline-none text-lg transition-all"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="submit"
                disabled=move || loading.get()
                class="px-8 py-3 bg-indigo-600 text-white rounded-xl font-semibold shadow-md \
                       hover:bg-indigo-500 transition-all disabled:bg-slate-600 disabled:cursor-not-allowed"
            >
                {move || button_text(loading.get(), button_label, loading_label)}
            </button>
        </form>
    }
}
