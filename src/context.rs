//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use realtime_items_core::database::Backend;
use realtime_items_core::ItemService;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the current page - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the current page - write
    set_reload_trigger: WriteSignal<u32>,
    /// Item operations against the configured store
    service: StoredValue<ItemService<Backend>, LocalStorage>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        service: ItemService<Backend>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            service: StoredValue::new_local(service),
        }
    }

    /// Trigger a reload of the current page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Handle to the item service (cheap clone)
    pub fn service(&self) -> ItemService<Backend> {
        self.service.get_value()
    }
}
