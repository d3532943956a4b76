use icondata as i;
use leptos::portal::Portal;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::global_state::search::use_search_state;

/// Error dialog over the whole page. Dismisses from the close button or a
/// click on the backdrop; clicks inside the panel stay put.
#[component]
pub fn ErrorModal() -> impl IntoView {
    let search = use_search_state();
    view! {
        <Show when=move || search.error.get().is_some()>
            <Portal>
                <div class="modal-backdrop" on:click=move |_| search.dismiss_error()>
                    <div
                        class="modal-panel"
                        on:click=move |e| {
                            e.stop_propagation();
                        }
                    >
                        <div class="modal-header">
                            <h3 class="modal-title">"Oops!"</h3>
                            <button
                                class="modal-close"
                                aria-label="Close"
                                on:click=move |_| search.dismiss_error()
                            >
                                <Icon icon=i::CgClose width="1.5em" height="1.5em" />
                            </button>
                        </div>
                        <p class="modal-message">
                            {move || search.error.get().unwrap_or_default()}
                        </p>
                    </div>
                </div>
            </Portal>
        </Show>
    }
    .into_any()
}
