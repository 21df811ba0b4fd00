//! Board Grid Component
//!
//! The three order columns with drag-and-drop wiring.
//! Clicking a card opens the edit overlay.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::*;

use crate::components::OrderCard;
use crate::context::use_app_context;
use crate::models::Column;
use crate::store::{
    store_count, store_drag_end, store_drag_over, store_drag_over_area, store_drag_start,
    store_move_order, store_open_edit, store_orders_in,
};

/// Attribute marking a drop area
const AREA_ATTR: &str = "data-area";

/// `data-id` of the closest `.order` ancestor of the event target
fn closest_order_id(ev: &web_sys::Event) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let order = target.closest(".order").ok()??;
    order.get_attribute(DATA_ID_ATTR)
}

/// One column: a drop area wrapping the order list
#[component]
fn ColumnArea(column: Column) -> impl IntoView {
    let ctx = use_app_context();

    let on_dragstart = make_on_dragstart(move |raw_id: String| {
        match store_drag_start(&ctx.store, &raw_id) {
            Ok(id) => log::debug!("[DND] Drag start: order={}", id),
            Err(e) => log::debug!("[DND] Drag start ignored: {}", e),
        }
    });

    let on_dragover = make_on_dragover(AREA_ATTR, move |area: String| {
        if !store_drag_over_area(&ctx.store, &area) {
            log::debug!("[DND] Unknown area: {}", area);
        }
    });

    let on_drop = make_on_drop(AREA_ATTR, move |raw_id: String, area: String| {
        if ctx.commit_on_drop() {
            match store_move_order(&ctx.store, &raw_id, &area) {
                Ok(from) => log::info!("[DND] Drop: order={}, {} -> {}", raw_id, from, area),
                Err(e) => log::debug!("[DND] Drop ignored: {}", e),
            }
        }
        // The source card may be re-rendered before dragend reaches it
        store_drag_end(&ctx.store);
    });

    let on_dragend = make_on_dragend(move || {
        store_drag_end(&ctx.store);
        log::debug!("[DND] Drag end");
    });

    let is_over = move || store_drag_over(&ctx.store) == Some(column);

    view! {
        <section
            class=move || if is_over() { "column over" } else { "column" }
            data-area=column.as_str()
            on:dragover=on_dragover
            on:drop=on_drop
        >
            <h2 class="column-header">
                {column.label()}
                <span class="column-count">{move || store_count(&ctx.store, column)}</span>
            </h2>
            <div
                class="column-orders"
                data-column=column.as_str()
                on:dragstart=on_dragstart
                on:dragend=on_dragend
            >
                <For
                    each=move || store_orders_in(&ctx.store, column)
                    key=|order| (order.id, order.title.clone(), order.table.clone())
                    children=move |order| view! { <OrderCard order=order /> }
                />
            </div>
        </section>
    }
}

/// Board grid with all columns
#[component]
pub fn BoardGrid() -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(raw_id) = closest_order_id(&ev) else { return };
        match store_open_edit(&ctx.store, &raw_id) {
            Ok(form) => ctx.open_edit(form),
            Err(e) => log::debug!("[BOARD] Edit ignored: {}", e),
        }
    };

    view! {
        <div class="grid" on:click=on_click>
            {Column::ALL.into_iter().map(|column| view! { <ColumnArea column=column /> }).collect_view()}
        </div>
    }
}
