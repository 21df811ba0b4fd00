//! Order Board
//!
//! In-memory order records keyed by id. Insertion order is kept so each
//! column lists its orders in the order they arrived there.

use crate::error::{BoardError, BoardResult};
use crate::models::{Column, Order, OrderChanges, OrderFields, OrderId};

#[derive(Debug, Clone, Default)]
pub struct Board {
    orders: Vec<Order>,
    next_id: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an order record with a fresh id. The board is not changed
    /// beyond advancing the id counter.
    pub fn create_order_data(&mut self, fields: OrderFields) -> Order {
        Order {
            id: self.next_free_id(),
            title: fields.title,
            table: fields.table,
            column: fields.column.unwrap_or_default(),
        }
    }

    /// Insert at the end of its column, replacing any record with the same id
    pub fn insert(&mut self, order: Order) {
        self.orders.retain(|o| o.id != order.id);
        self.orders.push(order);
    }

    /// Create and insert in one step
    pub fn add(&mut self, fields: OrderFields) -> OrderId {
        let order = self.create_order_data(fields);
        let id = order.id;
        self.insert(order);
        id
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.get(id).is_some()
    }

    /// Overwrite an order's fields. A column change moves the order to the
    /// end of the new column.
    pub fn update(&mut self, id: OrderId, changes: OrderChanges) -> BoardResult<&Order> {
        let index = self.position(id)?;
        let moved = self.orders[index].column != changes.column;
        {
            let order = &mut self.orders[index];
            order.title = changes.title;
            order.table = changes.table;
            order.column = changes.column;
        }
        let index = if moved { self.rehome(index) } else { index };
        Ok(&self.orders[index])
    }

    /// Move an order to `column`, appending it there.
    /// Returns the column it came from.
    pub fn move_to(&mut self, id: OrderId, column: Column) -> BoardResult<Column> {
        let index = self.position(id)?;
        let previous = self.orders[index].column;
        if previous != column {
            self.orders[index].column = column;
            self.rehome(index);
        }
        Ok(previous)
    }

    pub fn remove(&mut self, id: OrderId) -> BoardResult<Order> {
        let index = self.position(id)?;
        Ok(self.orders.remove(index))
    }

    /// Orders in a column, in arrival order
    pub fn in_column(&self, column: Column) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().filter(move |o| o.column == column)
    }

    pub fn count(&self, column: Column) -> usize {
        self.in_column(column).count()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn position(&self, id: OrderId) -> BoardResult<usize> {
        self.orders
            .iter()
            .position(|o| o.id == id)
            .ok_or(BoardError::NotFound(id))
    }

    /// Next counter value not held by a live order. Wraps past `u32::MAX`
    /// and skips 0.
    fn next_free_id(&mut self) -> OrderId {
        loop {
            self.next_id = self.next_id.wrapping_add(1);
            let id = OrderId(self.next_id);
            if self.next_id != 0 && !self.contains(id) {
                return id;
            }
        }
    }

    fn rehome(&mut self, index: usize) -> usize {
        let order = self.orders.remove(index);
        self.orders.push(order);
        self.orders.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, table: &str) -> OrderFields {
        OrderFields {
            title: title.to_string(),
            table: table.to_string(),
            column: None,
        }
    }

    fn ids(board: &Board, column: Column) -> Vec<OrderId> {
        board.in_column(column).map(|o| o.id).collect()
    }

    #[test]
    fn test_create_order_defaults() {
        let mut board = Board::new();
        let a = board.create_order_data(fields("Burger", "5"));
        let b = board.create_order_data(fields("Fries", "5"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.column, Column::Ordered);
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let mut board = Board::new();
        let id = board.add(fields("Burger", "5"));
        let order = board.get(id).unwrap();
        assert_eq!(order.title, "Burger");
        assert_eq!(order.table, "5");
        assert_eq!(board.count(Column::Ordered), 1);
    }

    #[test]
    fn test_move_appends_to_target_column() {
        let mut board = Board::new();
        let a = board.add(fields("A", "1"));
        let b = board.add(fields("B", "2"));
        let c = board.add(fields("C", "3"));
        board.move_to(b, Column::Ready).unwrap();
        board.move_to(a, Column::Ready).unwrap();

        assert_eq!(ids(&board, Column::Ordered), vec![c]);
        assert_eq!(ids(&board, Column::Ready), vec![b, a]);
    }

    #[test]
    fn test_move_to_same_column_keeps_position() {
        let mut board = Board::new();
        let a = board.add(fields("A", "1"));
        let b = board.add(fields("B", "2"));
        assert_eq!(board.move_to(a, Column::Ordered), Ok(Column::Ordered));
        assert_eq!(ids(&board, Column::Ordered), vec![a, b]);
    }

    #[test]
    fn test_update_with_column_change_rehomes() {
        let mut board = Board::new();
        let a = board.add(fields("A", "1"));
        let b = board.add(fields("B", "2"));
        board.move_to(b, Column::InProgress).unwrap();

        let changes = OrderChanges {
            title: "A".to_string(),
            table: "4".to_string(),
            column: Column::InProgress,
        };
        let updated = board.update(a, changes).unwrap();
        assert_eq!(updated.table, "4");
        assert_eq!(ids(&board, Column::InProgress), vec![b, a]);
        assert_eq!(board.count(Column::Ordered), 0);
    }

    #[test]
    fn test_missing_ids() {
        let mut board = Board::new();
        let id = board.add(fields("A", "1"));
        assert!(board.remove(id).is_ok());
        assert_eq!(board.remove(id), Err(BoardError::NotFound(id)));
        assert_eq!(board.move_to(id, Column::Ready), Err(BoardError::NotFound(id)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_id_counter_wraps_past_live_orders() {
        let mut board = Board::new();
        let first = board.add(fields("A", "1"));
        assert_eq!(first, OrderId(1));

        board.next_id = u32::MAX - 1;
        assert_eq!(board.add(fields("B", "2")), OrderId(u32::MAX));
        // 0 is skipped and 1 is still on the board
        assert_eq!(board.add(fields("C", "3")), OrderId(2));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut board = Board::new();
        let a = board.add(fields("A", "1"));
        board.remove(a).unwrap();
        let b = board.add(fields("B", "2"));
        assert_ne!(a, b);
    }
}
