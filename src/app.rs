//! Order Board App
//!
//! Header, three-column board, and the add/edit/help overlays.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    toggle_add_overlay, toggle_help_overlay, AddOrderOverlay, BoardGrid, EditOrderOverlay,
    HelpOverlay,
};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::store::{store_total, BoardState};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let title = config.title.clone();

    // Data first, then the context the components bind to
    let store = Store::new(BoardState::new());
    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    let add_button = NodeRef::<html::Button>::new();
    let help_button = NodeRef::<html::Button>::new();

    log::info!("[APP] Board ready: {}", title);

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>{title}</h1>
                <div class="board-actions">
                    <button
                        class="add-btn"
                        node_ref=add_button
                        on:click=move |_| toggle_add_overlay(ctx, add_button)
                    >
                        "+ Add order"
                    </button>
                    <button
                        class="help-btn"
                        node_ref=help_button
                        on:click=move |_| toggle_help_overlay(ctx, help_button)
                    >
                        "?"
                    </button>
                </div>
            </header>

            <BoardGrid />

            <p class="order-count">{move || format!("{} orders", store_total(&ctx.store))}</p>

            <AddOrderOverlay trigger=add_button />
            <EditOrderOverlay />
            <HelpOverlay trigger=help_button />
        </div>
    }
}
