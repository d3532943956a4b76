use leptos::prelude::*;

use crate::components::skeleton::CardSkeleton;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="lds-ellipsis"><div></div><div></div><div></div><div></div></div> }
}

/// Shown in place of the results section while a search is in flight.
#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="loading-section">
            <Loading />
            <p class="loading-text">"Searching places and connections..."</p>
            <div class="results-grid">
                <CardSkeleton />
                <CardSkeleton />
                <CardSkeleton />
            </div>
        </div>
    }
}
