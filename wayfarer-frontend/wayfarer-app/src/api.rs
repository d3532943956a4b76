use crate::error::AppResult;
use serde::{de::DeserializeOwned, Serialize};
use wayfarer_api_types::{
    search::{SearchQuery, SearchResponse},
    stats::StatsResponse,
};

/// Upper bound on any call to the gateway. The search service adds its own
/// artificial latency for the loading effect, so leave it generous.
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub(crate) async fn search(query: &str) -> AppResult<SearchResponse> {
    post_api("/api/search", &SearchQuery::new(query)).await
}

pub(crate) async fn get_stats() -> AppResult<StatsResponse> {
    fetch_api("/api/stats").await
}

#[cfg(not(feature = "ssr"))]
fn abort_on_cleanup() -> Option<web_sys::AbortSignal> {
    let abort_controller = web_sys::AbortController::new().ok();
    let abort_signal = abort_controller.as_ref().map(|a| a.signal());
    // abort in-flight requests if the component is disposed,
    // i.e. if we've navigated away from this page
    leptos::prelude::on_cleanup(move || {
        if let Some(abort_controller) = abort_controller {
            abort_controller.abort()
        }
    });
    abort_signal
}

#[cfg(not(feature = "ssr"))]
async fn send_with_timeout(
    request: gloo_net::http::Request,
) -> AppResult<gloo_net::http::Response> {
    use crate::error::AppError;
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let timeout = TimeoutFuture::new((REQUEST_TIMEOUT_SECS * 1000) as u32);
    match select(Box::pin(request.send()), Box::pin(timeout)).await {
        Either::Left((response, _)) => Ok(response?),
        Either::Right(((), _)) => Err(AppError::Timeout),
    }
}

#[cfg(not(feature = "ssr"))]
async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let abort_signal = abort_on_cleanup();
    let request = gloo_net::http::Request::get(path)
        .abort_signal(abort_signal.as_ref())
        .build()?;
    Ok(send_with_timeout(request).await?.json().await?)
}

#[cfg(not(feature = "ssr"))]
async fn post_api<B, T>(path: &str, body: &B) -> AppResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let abort_signal = abort_on_cleanup();
    let request = gloo_net::http::Request::post(path)
        .abort_signal(abort_signal.as_ref())
        .json(body)?;
    Ok(send_with_timeout(request).await?.json().await?)
}

#[cfg(feature = "ssr")]
fn http_client() -> AppResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

#[cfg(feature = "ssr")]
fn absolute(path: &str) -> String {
    // When rendering on the server there is no page origin to resolve
    // against, so requests loop back to our own gateway.
    let base = std::env::var("WAYFARER_HTTP_BASE")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    format!("{base}{path}")
}

#[cfg(feature = "ssr")]
async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let client = http_client()?;
    Ok(client.get(absolute(path)).send().await?.json().await?)
}

#[cfg(feature = "ssr")]
async fn post_api<B, T>(path: &str, body: &B) -> AppResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let client = http_client()?;
    Ok(client
        .post(absolute(path))
        .json(body)
        .send()
        .await?
        .json()
        .await?)
}
