use leptos::prelude::*;

use crate::global_state::search::use_search_state;

/// Example queries under the search box, the kind of question the travel
/// graph answers well.
const SUGGESTIONS: [&str; 5] = [
    "Best beaches in Vietnam",
    "Where to eat in Hanoi",
    "Cultural sites in Ho Chi Minh City",
    "Adventure activities in Sapa",
    "Temples around Hue",
];

#[component]
pub fn Suggestions() -> impl IntoView {
    let search = use_search_state();
    view! {
        <div class="suggestions">
            {SUGGESTIONS
                .into_iter()
                .map(|suggestion| {
                    view! {
                        <button
                            class="suggestion"
                            on:click=move |_| search.submit_suggestion(suggestion)
                        >
                            {suggestion}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
