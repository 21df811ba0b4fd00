//! Add Order Overlay
//!
//! Form for new orders. New orders always start in the "ordered" column.

use leptos::html;
use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::store::store_add_order;

/// Open or close the add overlay; focus returns to the trigger on close
pub fn toggle_add_overlay(ctx: AppContext, trigger: NodeRef<html::Button>) {
    if !ctx.toggle_add().is_open() {
        if let Some(button) = trigger.get_untracked() {
            let _ = button.focus();
        }
    }
}

#[component]
pub fn AddOrderOverlay(trigger: NodeRef<html::Button>) -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ctx.add_form.get_untracked();
        match store_add_order(&ctx.store, &form) {
            Ok(id) => {
                log::info!("[BOARD] Added order {}", id);
                toggle_add_overlay(ctx, trigger);
            }
            Err(e) => log::debug!("[BOARD] Add ignored: {}", e),
        }
    };

    view! {
        <dialog class="overlay" open=move || ctx.add_overlay.get().is_open()>
            <form class="overlay-form" on:submit=on_submit>
                <h2>"Add order"</h2>
                <label>
                    "Title"
                    <input
                        type="text"
                        name="title"
                        prop:value=move || ctx.add_form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.add_form.update(|f| f.title = value);
                        }
                    />
                </label>
                <label>
                    "Table"
                    <input
                        type="text"
                        name="table"
                        prop:value=move || ctx.add_form.with(|f| f.table.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.add_form.update(|f| f.table = value);
                        }
                    />
                </label>
                <div class="overlay-actions">
                    <button type="button" on:click=move |_| toggle_add_overlay(ctx, trigger)>
                        "Cancel"
                    </button>
                    <button type="submit">"Add"</button>
                </div>
            </form>
        </dialog>
    }
}
