//! Item Table Component
//!
//! Current page of items with inline edit and delete actions.

use leptos::prelude::*;
use realtime_items_core::domain::ITEM_COLUMNS;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_app_store();

    let no_data = move || {
        let list = store.list().read();
        !list.loading && list.is_empty()
    };

    view! {
        <Show when=move || store.list().read().loading>
            <div class="loading text-muted mb-2">"Loading..."</div>
        </Show>
        <table class="table table-striped">
            <thead>
                <tr>
                    {ITEM_COLUMNS.iter().map(|column| view! { <th scope="col">{*column}</th> }).collect_view()}
                    <th scope="col">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.list().read().items.clone()
                    key=|row| row.clone()
                    children=move |row| view! { <ItemTableRow row=row /> }
                />
            </tbody>
        </table>
        <Show when=no_data>
            <p class="text-center text-muted">"No data found"</p>
        </Show>
    }
}

#[component]
fn ItemTableRow(row: ItemRow) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let cells: Vec<String> = row.cells().iter().map(|cell| cell.to_string()).collect();
    let id = row.id.clone();

    view! {
        <tr>
            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            <td class="text-nowrap">
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary me-2"
                    on:click=move |_| commands::open_edit(store, row.clone())
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="btn btn-sm btn-outline-danger"
                    on_confirm=move |_: ()| commands::delete_item(ctx, store, id.clone())
                />
            </td>
        </tr>
    }
}
