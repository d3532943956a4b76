use icondata as i;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;
use wayfarer_api_types::search::{Connection, Place, SearchResponse};

use crate::components::connection_card::ConnectionCard;
use crate::components::place_card::PlaceCard;

#[cfg(feature = "hydrate")]
fn scroll_to(el: &web_sys::HtmlDivElement) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to(_el: &web_sys::HtmlDivElement) {}

#[component]
pub fn ResultsPanel(response: SearchResponse) -> impl IntoView {
    let panel = NodeRef::<Div>::new();
    // bring fresh results into view once they mount
    Effect::new(move |_| {
        if let Some(el) = panel.get() {
            scroll_to(&el);
        }
    });

    let SearchResponse {
        query,
        total_found,
        results,
        connections,
        ..
    } = response;

    view! {
        <div class="results-section" node_ref=panel>
            <div class="results-header">
                <h2 class="results-title">{format!("Results for \"{query}\"")}</h2>
                <span class="results-stats">{format!("{total_found} places found")}</span>
            </div>
            <ResultsGrid results />
            <ConnectionsPanel connections />
        </div>
    }
}

#[component]
pub fn ResultsGrid(results: Vec<Place>) -> impl IntoView {
    view! {
        <div class="results-grid">
            <For
                each=move || results.clone()
                key=|place| format!("{}-{}", place.id, place.name)
                children=move |place| view! { <PlaceCard place /> }
            />
        </div>
    }
}

/// Hidden entirely when the response has no graph edges.
#[component]
pub fn ConnectionsPanel(connections: Vec<Connection>) -> impl IntoView {
    (!connections.is_empty()).then(|| {
        view! {
            <div class="connections-section">
                <h3 class="connections-title">
                    <Icon icon=i::FaLinkSolid />
                    "Connected places"
                </h3>
                <div class="connections-grid">
                    {connections
                        .into_iter()
                        .map(|connection| view! { <ConnectionCard connection /> })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str) -> Place {
        Place {
            id: name.to_string(),
            name: name.to_string(),
            place_type: "City".to_string(),
            location: "Vietnam".to_string(),
            tags: vec![],
            score: 0.5,
        }
    }

    fn connection(to: &str) -> Connection {
        Connection {
            from: "p1".to_string(),
            to: to.to_string(),
            connection_type: "City".to_string(),
            relationship: "Near".to_string(),
        }
    }

    #[test]
    fn one_card_per_result_in_server_order() {
        let owner = Owner::new();
        owner.set();
        let results = vec![place("Hanoi"), place("Hue"), place("Da Nang")];
        let html = view! { <ResultsGrid results /> }.to_html();
        assert_eq!(html.matches("result-card").count(), 3);
        let hanoi = html.find("Hanoi").unwrap();
        let hue = html.find("Hue").unwrap();
        let da_nang = html.find("Da Nang").unwrap();
        assert!(hanoi < hue && hue < da_nang);
    }

    #[test]
    fn empty_connections_hide_the_panel() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <ConnectionsPanel connections=vec![] /> }.to_html();
        assert!(!html.contains("connections-section"));
    }

    #[test]
    fn connections_render_one_card_each() {
        let owner = Owner::new();
        owner.set();
        let connections = vec![connection("Hoi An"), connection("Hue")];
        let html = view! { <ConnectionsPanel connections /> }.to_html();
        assert!(html.contains("connections-section"));
        assert_eq!(html.matches("connection-card").count(), 2);
    }
}
