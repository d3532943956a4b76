use leptos::prelude::*;

#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="result-card skeleton">
            <div class="skeleton-line skeleton-wide"></div>
            <div class="skeleton-line skeleton-narrow"></div>
            <div class="skeleton-bar"></div>
            <div class="sr-only">"Loading"</div>
        </div>
    }
}
