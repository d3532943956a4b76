use axum::extract::FromRef;
use leptos::config::LeptosOptions;

use super::gateway::SearchGateway;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) gateway: SearchGateway,
    pub(crate) leptos_options: LeptosOptions,
}

impl FromRef<WebState> for SearchGateway {
    fn from_ref(input: &WebState) -> Self {
        input.gateway.clone()
    }
}

impl FromRef<WebState> for LeptosOptions {
    fn from_ref(input: &WebState) -> Self {
        input.leptos_options.clone()
    }
}
