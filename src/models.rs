//! Board Models
//!
//! Orders, columns, and the transient dragging record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Workflow stage an order sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    #[default]
    Ordered,
    InProgress,
    Ready,
}

impl Column {
    /// Display order, left to right
    pub const ALL: [Column; 3] = [Column::Ordered, Column::InProgress, Column::Ready];

    /// Name used in `data-area` and the edit form select
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::InProgress => "in-progress",
            Column::Ready => "ready",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::InProgress => "In progress",
            Column::Ready => "Ready",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordered" => Ok(Column::Ordered),
            "in-progress" => Ok(Column::InProgress),
            "ready" => Ok(Column::Ready),
            other => Err(BoardError::UnknownColumn(other.to_string())),
        }
    }
}

/// Opaque order identifier, rendered into `data-id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(OrderId)
            .map_err(|_| BoardError::InvalidId(s.to_string()))
    }
}

/// A single customer ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
}

/// Fields accepted when creating an order; `column` defaults to `Ordered`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFields {
    pub title: String,
    pub table: String,
    pub column: Option<Column>,
}

/// Replacement values written by the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct OrderChanges {
    pub title: String,
    pub table: String,
    pub column: Column,
}

/// Transient record of the drag gesture in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraggingState {
    pub source: Option<OrderId>,
    pub source_column: Option<Column>,
    pub over: Option<Column>,
}

/// Partial update for [`DraggingState`]. `None` leaves a field untouched;
/// `Some(None)` clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DraggingUpdate {
    pub source: Option<Option<OrderId>>,
    pub source_column: Option<Option<Column>>,
    pub over: Option<Option<Column>>,
}

impl DraggingUpdate {
    pub fn over(column: Option<Column>) -> Self {
        Self { over: Some(column), ..Default::default() }
    }

    pub fn started(id: OrderId, column: Column) -> Self {
        Self {
            source: Some(Some(id)),
            source_column: Some(Some(column)),
            ..Default::default()
        }
    }

    /// Everything cleared
    pub fn ended() -> Self {
        Self {
            source: Some(None),
            source_column: Some(None),
            over: Some(None),
        }
    }
}

impl DraggingState {
    /// Merge a partial update into the record
    pub fn merge(&mut self, update: DraggingUpdate) {
        if let Some(source) = update.source {
            self.source = source;
        }
        if let Some(source_column) = update.source_column {
            self.source_column = source_column;
        }
        if let Some(over) = update.over {
            self.over = over;
        }
    }

    /// Apply a resolved drag-over area.
    ///
    /// Returns `false` and leaves the record alone when no area was found
    /// or the area is not a known column.
    pub fn apply_over(&mut self, area: Option<&str>) -> bool {
        let Some(column) = area.and_then(|a| a.parse::<Column>().ok()) else {
            return false;
        };
        self.merge(DraggingUpdate::over(Some(column)));
        true
    }
}
