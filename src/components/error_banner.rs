//! Error Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Last failed operation, until dismissed or the next successful fetch
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.list().read().error.is_some()>
            <div class="alert alert-danger d-flex justify-content-between align-items-center" role="alert">
                <span>{move || store.list().read().error.clone().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Dismiss"
                    on:click=move |_| {
                        store.list().write().dismiss_error();
                    }
                ></button>
            </div>
        </Show>
    }
}
