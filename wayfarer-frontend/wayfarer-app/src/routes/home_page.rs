use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loading::LoadingPanel;
use crate::components::results::ResultsPanel;
use crate::components::search_box::SearchBox;
use crate::components::suggestions::Suggestions;
use crate::global_state::search::{use_search_state, SearchPhase};

#[component]
pub fn HomePage() -> impl IntoView {
    let search = use_search_state();

    view! {
        <Title text="Wayfarer - Travel Search" />
        <div class="container">
            <header class="hero">
                <h1 class="hero-title">"Wayfarer"</h1>
                <p class="hero-subtitle">
                    "Ask anything about places to stay, eat and explore"
                </p>
            </header>
            <section class="search-section">
                <SearchBox />
                <Suggestions />
            </section>
            {move || match search.phase.get() {
                SearchPhase::Idle => ().into_any(),
                SearchPhase::Loading => view! { <LoadingPanel /> }.into_any(),
                SearchPhase::Loaded(response) => view! { <ResultsPanel response /> }.into_any(),
            }}
        </div>
    }
}
