use icondata as i;
use leptos::{html::Input, prelude::*};
use leptos_icons::Icon;
use web_sys::KeyboardEvent;

use crate::global_state::search::use_search_state;

#[component]
pub fn SearchBox() -> impl IntoView {
    let search = use_search_state();
    let text_input = NodeRef::<Input>::new();

    let keydown = move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            search.submit();
        }
    };

    view! {
        <div class="search-bar">
            <div class="search-input-wrap">
                <span class="search-hint-icon">
                    <Icon icon=i::AiSearchOutlined />
                </span>
                <input
                    node_ref=text_input
                    type="text"
                    class="search-input"
                    placeholder="Ask about places to stay, eat and explore..."
                    prop:value=search.input
                    on:input=move |ev| search.input.set(event_target_value(&ev))
                    on:keydown=keydown
                />
            </div>
            <button
                class="search-submit"
                aria-label="Search"
                disabled=move || search.is_loading()
                on:click=move |_| search.submit()
            >
                <Show
                    when=move || search.is_loading()
                    fallback=|| view! { <Icon icon=i::FaPaperPlaneSolid /> }
                >
                    <span class="spin">
                        <Icon icon=i::FaSpinnerSolid />
                    </span>
                </Show>
            </button>
        </div>
    }
}
