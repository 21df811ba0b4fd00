//! UI Components
//!
//! Board columns, order cards, and overlays.

mod add_order_overlay;
mod board_grid;
mod edit_order_overlay;
mod help_overlay;
mod order_card;

pub use add_order_overlay::{toggle_add_overlay, AddOrderOverlay};
pub use board_grid::BoardGrid;
pub use edit_order_overlay::EditOrderOverlay;
pub use help_overlay::{toggle_help_overlay, HelpOverlay};
pub use order_card::OrderCard;
