//! Board State Store
//!
//! Uses Leptos reactive_stores so columns re-render when the board changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::error::{BoardError, BoardResult};
use crate::forms::{AddOrderForm, EditOrderForm};
use crate::models::{Column, DraggingState, DraggingUpdate, Order, OrderId};

/// Board orders plus the current drag gesture
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All orders
    pub board: Board,
    /// Drag gesture in progress
    pub dragging: DraggingState,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Reads
// ========================

/// Orders rendered in one column
pub fn store_orders_in(store: &BoardStore, column: Column) -> Vec<Order> {
    store.board().read().in_column(column).cloned().collect()
}

pub fn store_count(store: &BoardStore, column: Column) -> usize {
    store.board().read().count(column)
}

pub fn store_total(store: &BoardStore) -> usize {
    store.board().read().len()
}

/// Column currently hovered by a drag
pub fn store_drag_over(store: &BoardStore) -> Option<Column> {
    store.dragging().read().over
}

pub fn store_drag_source(store: &BoardStore) -> Option<OrderId> {
    store.dragging().read().source
}

pub fn store_open_edit(store: &BoardStore, raw_id: &str) -> BoardResult<EditOrderForm> {
    EditOrderForm::open(&store.board().read_untracked(), raw_id)
}

// ========================
// Writes
// ========================

pub fn store_add_order(store: &BoardStore, form: &AddOrderForm) -> BoardResult<OrderId> {
    form.submit(&mut store.board().write())
}

pub fn store_edit_order(store: &BoardStore, form: &EditOrderForm) -> BoardResult<OrderId> {
    form.submit(&mut store.board().write())
}

pub fn store_delete_order(store: &BoardStore, form: &EditOrderForm) -> BoardResult<Order> {
    form.delete(&mut store.board().write())
}

/// Move an order to the column it was dropped on
pub fn store_move_order(store: &BoardStore, raw_id: &str, area: &str) -> BoardResult<Column> {
    let id = raw_id.parse::<OrderId>()?;
    let column = area.parse::<Column>()?;
    store.board().write().move_to(id, column)
}

/// Record the drag source. Unknown ids are ignored.
pub fn store_drag_start(store: &BoardStore, raw_id: &str) -> BoardResult<OrderId> {
    let id = raw_id.parse::<OrderId>()?;
    let column = store
        .board()
        .read_untracked()
        .get(id)
        .map(|o| o.column)
        .ok_or(BoardError::NotFound(id))?;
    store.dragging().write().merge(DraggingUpdate::started(id, column));
    Ok(id)
}

/// Returns `false` when the area did not name a column
pub fn store_drag_over_area(store: &BoardStore, area: &str) -> bool {
    // Skip the write when nothing changes; dragover fires continuously.
    let column = area.parse::<Column>().ok();
    if column.is_some() && column == store.dragging().read_untracked().over {
        return true;
    }
    store.dragging().write().apply_over(Some(area))
}

pub fn store_drag_end(store: &BoardStore) {
    store.dragging().write().merge(DraggingUpdate::ended());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(test: impl FnOnce(BoardStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(BoardState::new())));
    }

    fn add(store: &BoardStore, title: &str, table: &str) -> OrderId {
        let form = AddOrderForm {
            title: title.to_string(),
            table: table.to_string(),
        };
        store_add_order(store, &form).unwrap()
    }

    #[test]
    fn test_drag_start_unknown_id_keeps_source_empty() {
        with_store(|store| {
            add(&store, "Burger", "5");
            assert_eq!(
                store_drag_start(&store, "99"),
                Err(BoardError::NotFound(OrderId(99)))
            );
            assert!(matches!(
                store_drag_start(&store, "x"),
                Err(BoardError::InvalidId(_))
            ));
            assert_eq!(store.dragging().get_untracked(), DraggingState::default());
        });
    }

    #[test]
    fn test_drag_start_records_source_column() {
        with_store(|store| {
            let id = add(&store, "Burger", "5");
            assert_eq!(store_drag_start(&store, &id.to_string()), Ok(id));
            let dragging = store.dragging().get_untracked();
            assert_eq!(dragging.source, Some(id));
            assert_eq!(dragging.source_column, Some(Column::Ordered));
        });
    }

    #[test]
    fn test_drag_over_unknown_area_keeps_over() {
        with_store(|store| {
            assert!(store_drag_over_area(&store, "ready"));
            assert!(!store_drag_over_area(&store, "kitchen"));
            assert_eq!(store.dragging().get_untracked().over, Some(Column::Ready));
        });
    }

    #[test]
    fn test_drag_over_same_area_is_accepted() {
        with_store(|store| {
            assert!(store_drag_over_area(&store, "in-progress"));
            assert!(store_drag_over_area(&store, "in-progress"));
            assert_eq!(store_drag_over(&store), Some(Column::InProgress));

            store_drag_end(&store);
            assert_eq!(store.dragging().get_untracked(), DraggingState::default());
        });
    }

    #[test]
    fn test_move_order_bad_input_leaves_board() {
        with_store(|store| {
            let id = add(&store, "Burger", "5");
            assert!(matches!(
                store_move_order(&store, "abc", "ready"),
                Err(BoardError::InvalidId(_))
            ));
            assert!(matches!(
                store_move_order(&store, &id.to_string(), "kitchen"),
                Err(BoardError::UnknownColumn(_))
            ));
            assert_eq!(
                store_move_order(&store, "42", "ready"),
                Err(BoardError::NotFound(OrderId(42)))
            );
            assert_eq!(store_orders_in(&store, Column::Ordered).len(), 1);
            assert_eq!(store_count(&store, Column::Ready), 0);
        });
    }

    #[test]
    fn test_move_order_to_dropped_column() {
        with_store(|store| {
            let id = add(&store, "Burger", "5");
            assert_eq!(
                store_move_order(&store, &id.to_string(), "ready"),
                Ok(Column::Ordered)
            );
            assert_eq!(store_orders_in(&store, Column::Ready)[0].id, id);
            assert_eq!(store_total(&store), 1);
        });
    }
}
