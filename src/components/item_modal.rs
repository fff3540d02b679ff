//! Item Modal Component
//!
//! Create and edit dialog. The caller decides what a submit does; a failed
//! submit keeps the dialog open and shows the error inside it.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::ErrorBanner;
use crate::models::ItemForm;

/// Modal form with `name` and `description` fields
#[component]
pub fn ItemModal(
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    /// Values the inputs start with
    initial: ItemForm,
    #[prop(into)] on_submit: Callback<ItemForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(initial.name);
    let (description, set_description) = signal(initial.description);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(ItemForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
        });
    };

    view! {
        <div class="modal d-block" tabindex="-1" role="dialog">
            <div class="modal-dialog" role="document">
                <div class="modal-content">
                    <form on:submit=submit>
                        <div class="modal-header">
                            <h5 class="modal-title">{title}</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| on_close.run(())
                            ></button>
                        </div>
                        <div class="modal-body">
                            // The page banner sits under the backdrop
                            <ErrorBanner />
                            <div class="mb-3">
                                <label class="form-label" for="item-name">"Item Name"</label>
                                <input
                                    id="item-name"
                                    class="form-control"
                                    type="text"
                                    placeholder="Enter item name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="item-description">"Item Description"</label>
                                <input
                                    id="item-description"
                                    class="form-control"
                                    type="text"
                                    placeholder="Enter item description"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || name.get().trim().is_empty()
                            >
                                {submit_label}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
        <div class="modal-backdrop show"></div>
    }
}
