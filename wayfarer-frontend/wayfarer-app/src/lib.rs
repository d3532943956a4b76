pub(crate) mod api;
pub(crate) mod components;
pub(crate) mod error;
pub mod global_state;
pub mod routes;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::modal::ErrorModal;
use crate::global_state::search::provide_search_state;
use crate::routes::{home_page::HomePage, not_found::NotFound};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_search_state();

    // One-shot stats probe; diagnostic only and must never block the UI.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_stats().await {
                Ok(stats) if stats.success => {
                    log::info!("search index stats: {:?}", stats.stats)
                }
                Ok(stats) => log::error!("stats endpoint unhealthy: {:?}", stats.error),
                Err(err) => log::error!("failed to load stats: {err}"),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wayfarer.css" />
        <Title text="Wayfarer - Travel Search" />
        <Meta
            name="description"
            content="Semantic travel search over places and their connections."
        />
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
        <ErrorModal />
    }
}
