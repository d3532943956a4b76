use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found - Wayfarer" />
        <div class="container not-found">
            <h1 class="hero-title">"404"</h1>
            <p class="hero-subtitle">"This path leads nowhere on the map."</p>
            <A href="/" attr:class="suggestion">
                "Back to search"
            </A>
        </div>
    }
}
