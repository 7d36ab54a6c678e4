use crate::{
    domain::{CardId, ColumnId},
    drag::state::{Bounds, Point},
};
use serde::{Deserialize, Serialize};

/// Pointer events reported by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DragEvent {
    StartCardDrag {
        card_id: CardId,
        column_id: ColumnId,
    },
    StartColumnDrag {
        column_id: ColumnId,
    },
    /// Pointer over a card; the element geometry picks the side
    HoverCard {
        card_id: CardId,
        column_id: ColumnId,
        pointer_y: f64,
        element_top: f64,
        element_height: f64,
    },
    HoverEmptyArea {
        column_id: ColumnId,
    },
    HoverColumn {
        column_id: ColumnId,
    },
    /// Pointer left an element whose bounding box is `bounds`
    PointerLeft {
        pointer: Point,
        bounds: Bounds,
    },
    DropOnCard {
        card_id: CardId,
        column_id: ColumnId,
    },
    DropOnColumn {
        column_id: ColumnId,
    },
    DropOnEmptyArea {
        column_id: ColumnId,
    },
    /// Gesture finished without a drop
    DragEnded,
}
