//! Pagination Bar Component
//!
//! Page buttons plus a per-page selector. Holds no state of its own.

use leptos::prelude::*;
use realtime_items_core::{page_count, PER_PAGE_OPTIONS};

/// One button per page (`ceil(total / per_page)`), none when empty
#[component]
pub fn PaginationBar(
    items_per_page: Signal<usize>,
    total_items: Signal<usize>,
    /// One-based
    current_page: Signal<usize>,
    /// Receives the zero-based index of the clicked page
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(into)] on_per_page_change: Callback<usize>,
) -> impl IntoView {
    let page_buttons = move || {
        let pages = page_count(total_items.get(), items_per_page.get());
        let current = current_page.get();
        (0..pages)
            .map(|index| {
                let class = if index + 1 == current { "page-item active" } else { "page-item" };
                view! {
                    <li class=class>
                        <button type="button" class="page-link" on:click=move |_| on_page_change.run(index)>
                            {index + 1}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="d-flex justify-content-between align-items-center">
            <nav aria-label="Item pages">
                <ul class="pagination mb-0">{page_buttons}</ul>
            </nav>
            <div class="d-flex align-items-center">
                <label class="me-2" for="items-per-page">"Items per page"</label>
                <select
                    id="items-per-page"
                    class="form-select form-select-sm w-auto"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<usize>() {
                            Ok(per_page) => on_per_page_change.run(per_page),
                            Err(e) => log::warn!("Ignoring page size: {}", e),
                        }
                    }
                >
                    {PER_PAGE_OPTIONS
                        .iter()
                        .map(|&per_page| {
                            view! {
                                <option
                                    value=per_page.to_string()
                                    selected=move || items_per_page.get() == per_page
                                >
                                    {per_page}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
