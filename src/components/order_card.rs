//! Order Card Component
//!
//! One draggable order in a column.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Order;
use crate::store::store_drag_source;

/// A single order card. Drag events are handled by the enclosing column.
#[component]
pub fn OrderCard(order: Order) -> impl IntoView {
    let ctx = use_app_context();
    let id = order.id;
    let is_source = move || store_drag_source(&ctx.store) == Some(id);

    view! {
        <div
            class=move || if is_source() { "order dragging" } else { "order" }
            draggable="true"
            data-id=id.to_string()
        >
            <span class="order-title">{order.title}</span>
            <span class="order-table">"Table " {order.table}</span>
        </div>
    }
}
