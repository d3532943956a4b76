pub(crate) mod api;
pub(crate) mod error;
pub(crate) mod gateway;
pub(crate) mod state;

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::services::ServeDir;
use tracing::info;
use wayfarer_app::{shell, App};

use crate::config::Config;
use self::gateway::SearchGateway;
use self::state::WebState;

async fn render_site(State(state): State<WebState>, req: Request<Body>) -> Response {
    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
    handler(req).await.into_response()
}

pub(crate) async fn start(config: Config) -> Result<()> {
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let site_root = &leptos_options.site_root;
    let pkg_dir = &leptos_options.site_pkg_dir;

    // The filesystem path of the JS/WASM bundle generated by cargo-leptos
    let bundle_filepath = format!("{site_root}/{pkg_dir}");
    info!("serving bundle from {bundle_filepath}");

    let gateway = SearchGateway::new(&config)?;
    let state = WebState {
        gateway,
        leptos_options: leptos_options.clone(),
    };

    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/api/search", post(api::search))
        .route("/api/stats", get(api::stats))
        .route("/api/health", get(api::health))
        .nest_service("/pkg", ServeDir::new(&bundle_filepath))
        .leptos_routes_with_handler(routes, render_site)
        .fallback(render_site)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
