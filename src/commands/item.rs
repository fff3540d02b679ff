//! Item Commands
//!
//! Create, edit and delete go to the store first; the table only changes
//! once the follow-up fetch lands. Failures end up in the error banner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::{ItemForm, ItemRow, Modal};
use crate::store::{AppStateStoreFields, AppStore};

/// Fetch the current page. A newer refresh supersedes this one.
pub fn refresh(ctx: AppContext, store: AppStore) {
    let request = store.list().write().begin_fetch();
    let service = ctx.service();
    spawn_local(async move {
        let result = service.fetch_page(request.window).await;
        if let Ok(page) = &result {
            log::debug!("Loaded {} of {} items", page.items.len(), page.total_items);
        }
        if !store.list().write().finish_fetch(request.ticket, result) {
            log::debug!("Dropped stale page for {:?}", request.ticket);
        }
    });
}

/// Create an item, close the dialog and reload
pub fn create_item(ctx: AppContext, store: AppStore, form: ItemForm) {
    let service = ctx.service();
    spawn_local(async move {
        match service.create(form).await {
            Ok(_) => {
                *store.modal().write() = Modal::Closed;
                ctx.reload();
            }
            Err(e) => store.list().write().report_error(&e),
        }
    });
}

/// Save the edit dialog over the selected item and reload
pub fn save_selected_item(ctx: AppContext, store: AppStore, form: ItemForm) {
    let Some(selected) = store.list().read_untracked().selected_item.clone() else {
        log::warn!("Save requested with no item selected");
        return;
    };
    let service = ctx.service();
    spawn_local(async move {
        match service.edit_row(&selected, form).await {
            Ok(()) => {
                store.list().write().clear_selection();
                *store.modal().write() = Modal::Closed;
                ctx.reload();
            }
            Err(e) => store.list().write().report_error(&e),
        }
    });
}

/// Delete an item (already confirmed by the user) and reload
pub fn delete_item(ctx: AppContext, store: AppStore, id: String) {
    let service = ctx.service();
    spawn_local(async move {
        if let Err(e) = service.delete(&id).await {
            store.list().write().report_error(&e);
        }
        // Reload either way; a failed delete may still have gone through
        ctx.reload();
    });
}

/// Open the edit dialog for a row
pub fn open_edit(store: AppStore, row: ItemRow) {
    store.list().write().select(row);
    *store.modal().write() = Modal::Edit;
}

/// Open the create dialog with a blank form
pub fn open_create(store: AppStore) {
    *store.modal().write() = Modal::Create;
}

/// Close whichever dialog is open
pub fn close_modal(store: AppStore) {
    store.list().write().clear_selection();
    *store.modal().write() = Modal::Closed;
}
