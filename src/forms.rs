//! Overlay Forms
//!
//! Field values behind the add and edit overlays, and the submit rules
//! that turn them into board mutations.

use crate::board::Board;
use crate::error::{BoardError, BoardResult};
use crate::models::{Column, Order, OrderChanges, OrderFields, OrderId};

/// Add overlay fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddOrderForm {
    pub title: String,
    pub table: String,
}

impl AddOrderForm {
    pub fn clear(&mut self) {
        self.title.clear();
        self.table.clear();
    }

    /// Trimmed fields for a new order. The column is always `Ordered`.
    pub fn fields(&self) -> BoardResult<OrderFields> {
        let title = self.title.trim();
        let table = self.table.trim();
        if title.is_empty() {
            return Err(BoardError::BlankField("title"));
        }
        if table.is_empty() {
            return Err(BoardError::BlankField("table"));
        }
        Ok(OrderFields {
            title: title.to_string(),
            table: table.to_string(),
            column: Some(Column::Ordered),
        })
    }

    /// Create the order on the board
    pub fn submit(&self, board: &mut Board) -> BoardResult<OrderId> {
        let fields = self.fields()?;
        Ok(board.add(fields))
    }
}

/// Edit overlay fields. `id` mirrors the hidden input, `column` the select.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditOrderForm {
    pub id: String,
    pub title: String,
    pub table: String,
    pub column: String,
}

impl EditOrderForm {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            title: order.title.clone(),
            table: order.table.clone(),
            column: order.column.as_str().to_string(),
        }
    }

    /// Populate from the board entry for a raw `data-id` value
    pub fn open(board: &Board, raw_id: &str) -> BoardResult<Self> {
        let id = raw_id.parse::<OrderId>()?;
        board.get(id).map(Self::from_order).ok_or(BoardError::NotFound(id))
    }

    pub fn order_id(&self) -> BoardResult<OrderId> {
        self.id.parse()
    }

    /// Overwrite the order named by the hidden id. Title and table are
    /// trimmed but may be left empty.
    pub fn submit(&self, board: &mut Board) -> BoardResult<OrderId> {
        let id = self.order_id()?;
        if !board.contains(id) {
            return Err(BoardError::NotFound(id));
        }
        let changes = OrderChanges {
            title: self.title.trim().to_string(),
            table: self.table.trim().to_string(),
            column: self.column.parse()?,
        };
        board.update(id, changes)?;
        Ok(id)
    }

    /// Remove the order named by the hidden id
    pub fn delete(&self, board: &mut Board) -> BoardResult<Order> {
        board.remove(self.order_id()?)
    }
}
