//! Realtime Items App
//!
//! Item table with create/edit dialogs and pagination.

use leptos::prelude::*;
use reactive_stores::Store;
use realtime_items_core::database::Backend;
use realtime_items_core::ItemService;

use crate::commands;
use crate::components::{ErrorBanner, ItemModal, ItemTable, PaginationBar};
use crate::context::AppContext;
use crate::models::{ItemForm, Modal};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App(service: ItemService<Backend>) -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let ctx = AppContext::new(signal(0u32), service);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Only the page window drives fetching, not the rows it produces
    let window = Memo::new(move |_| store.list().read().pagination.window());

    // Load the page when the window or trigger changes
    Effect::new(move |_| {
        let window = window.get();
        let trigger = ctx.reload_trigger.get();
        log::debug!("Loading items for {:?}, trigger={}", window, trigger);
        commands::refresh(ctx, store);
    });

    let pagination = move || store.list().read().pagination;

    view! {
        <div class="container my-4">
            <h1>"Realtime Database & Leptos"</h1>
            <h2 class="h5 text-muted mb-4">"CRUD and Pagination"</h2>

            <ErrorBanner />

            <div class="card">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <span>"Items"</span>
                    <button
                        type="button"
                        class="btn btn-primary btn-sm"
                        on:click=move |_| commands::open_create(store)
                    >
                        "Create"
                    </button>
                </div>
                <div class="card-body">
                    <ItemTable />
                    <PaginationBar
                        items_per_page=Signal::derive(move || pagination().items_per_page())
                        total_items=Signal::derive(move || pagination().total_items())
                        current_page=Signal::derive(move || pagination().current_page())
                        on_page_change=move |index: usize| {
                            store.list().write().go_to_page(index);
                        }
                        on_per_page_change=move |per_page: usize| {
                            store.list().write().set_items_per_page(per_page);
                        }
                    />
                </div>
            </div>

            {move || match store.modal().get() {
                Modal::Closed => ().into_any(),
                Modal::Create => view! {
                    <ItemModal
                        title="Create Item"
                        submit_label="Create"
                        initial=ItemForm::blank()
                        on_submit=move |form: ItemForm| commands::create_item(ctx, store, form)
                        on_close=move |_: ()| commands::close_modal(store)
                    />
                }
                .into_any(),
                Modal::Edit => {
                    let selected = store.list().read_untracked().selected_item.clone();
                    match selected {
                        Some(row) => view! {
                            <ItemModal
                                title="Edit Item"
                                submit_label="Save"
                                initial=ItemForm::from_row(&row)
                                on_submit=move |form: ItemForm| commands::save_selected_item(ctx, store, form)
                                on_close=move |_: ()| commands::close_modal(store)
                            />
                        }
                        .into_any(),
                        None => {
                            log::warn!("Edit dialog opened with no item selected");
                            ().into_any()
                        }
                    }
                }
            }}
        </div>
    }
}
