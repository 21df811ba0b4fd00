//! Help Overlay

use leptos::html;
use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};

/// Open or close the help overlay; focus returns to the trigger on close
pub fn toggle_help_overlay(ctx: AppContext, trigger: NodeRef<html::Button>) {
    if !ctx.toggle_help().is_open() {
        if let Some(button) = trigger.get_untracked() {
            let _ = button.focus();
        }
    }
}

#[component]
pub fn HelpOverlay(trigger: NodeRef<html::Button>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <dialog class="overlay" open=move || ctx.help_overlay.get().is_open()>
            <div class="overlay-form">
                <h2>"Help"</h2>
                <p>"Add an order with the + button. New orders start in Ordered."</p>
                <p>"Drag an order onto another column to change its status."</p>
                <p>"Click an order to edit or delete it."</p>
                <div class="overlay-actions">
                    <button type="button" on:click=move |_| toggle_help_overlay(ctx, trigger)>
                        "Close"
                    </button>
                </div>
            </div>
        </dialog>
    }
}
