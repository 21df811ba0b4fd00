//! Edit Order Overlay
//!
//! Edits title, table, and column of an existing order, or deletes it.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Column;
use crate::store::{store_delete_order, store_edit_order};

#[component]
pub fn EditOrderOverlay() -> impl IntoView {
    let ctx = use_app_context();
    let title_ref = NodeRef::<html::Input>::new();

    // Focus the title once the dialog is visible
    Effect::new(move |_| {
        if ctx.edit_overlay.get().is_open() {
            request_animation_frame(move || {
                if let Some(input) = title_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ctx.edit_form.get_untracked();
        match store_edit_order(&ctx.store, &form) {
            Ok(id) => {
                log::info!("[BOARD] Updated order {}", id);
                ctx.close_edit();
            }
            Err(e) => log::debug!("[BOARD] Edit ignored: {}", e),
        }
    };

    let on_delete = move |_| {
        let form = ctx.edit_form.get_untracked();
        match store_delete_order(&ctx.store, &form) {
            Ok(order) => {
                log::info!("[BOARD] Deleted order {}", order.id);
                ctx.close_edit();
            }
            Err(e) => log::debug!("[BOARD] Delete ignored: {}", e),
        }
    };

    view! {
        <dialog class="overlay" open=move || ctx.edit_overlay.get().is_open()>
            <form class="overlay-form" on:submit=on_submit>
                <h2>"Edit order"</h2>
                <input type="hidden" name="id" prop:value=move || ctx.edit_form.with(|f| f.id.clone()) />
                <label>
                    "Title"
                    <input
                        type="text"
                        name="title"
                        node_ref=title_ref
                        prop:value=move || ctx.edit_form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_form.update(|f| f.title = value);
                        }
                    />
                </label>
                <label>
                    "Table"
                    <input
                        type="text"
                        name="table"
                        prop:value=move || ctx.edit_form.with(|f| f.table.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_form.update(|f| f.table = value);
                        }
                    />
                </label>
                <label>
                    "Status"
                    <select
                        name="column"
                        prop:value=move || ctx.edit_form.with(|f| f.column.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_form.update(|f| f.column = value);
                        }
                    >
                        {Column::ALL
                            .into_iter()
                            .map(|column| view! { <option value=column.as_str()>{column.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="overlay-actions">
                    <button type="button" class="delete-btn" on:click=on_delete>"Delete"</button>
                    <button type="button" on:click=move |_| ctx.close_edit()>"Cancel"</button>
                    <button type="submit">"Save"</button>
                </div>
            </form>
        </dialog>
    }
}
