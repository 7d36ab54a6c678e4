//! # Kanban Core
//!
//! Board state and drag-and-drop reconciliation for kanban boards.
//!
//! The board store owns columns, their ordered cards and the column order,
//! and exposes copy-on-write operations that never fail. The drag tracker
//! turns pointer events into at most one store operation per drop. Neither
//! depends on a rendering toolkit.

pub mod domain;
pub mod drag;
pub mod error;
pub mod kanban;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, CardSeed, ColumnSeed},
    card::{Card, CardId},
    column::{Column, ColumnId},
    reorder::Side,
};
pub use drag::{
    Bounds, ColumnHighlight, DragEvent, DragSession, DragTracker, HoverTarget, HoverZone, Point,
};
pub use error::{KanbanError, Result};
pub use kanban::{Action, Kanban};
