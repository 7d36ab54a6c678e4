use crate::domain::{CardId, ColumnId, Side};
use serde::{Deserialize, Serialize};

/// What is being dragged. At most one session is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum DragSession {
    Card {
        card_id: CardId,
        source_column_id: ColumnId,
    },
    Column {
        column_id: ColumnId,
    },
}

impl DragSession {
    /// Whether deleting this column invalidates the session
    pub fn references_column(&self, id: &ColumnId) -> bool {
        match self {
            Self::Card {
                source_column_id, ..
            } => source_column_id == id,
            Self::Column { column_id } => column_id == id,
        }
    }

    pub fn references_card(&self, id: &CardId) -> bool {
        matches!(self, Self::Card { card_id, .. } if card_id == id)
    }
}

/// The part of a column the pointer is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HoverZone {
    /// A specific card, with the edge the dragged card would land on
    Card { card_id: CardId, side: Side },
    /// The empty strip below the last card
    EmptyArea,
    /// The column body as a whole
    Column,
}

/// Where the dragged item would land if dropped now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverTarget {
    pub column_id: ColumnId,
    pub zone: HoverZone,
}

impl HoverTarget {
    pub fn card(column_id: ColumnId, card_id: CardId, side: Side) -> Self {
        Self {
            column_id,
            zone: HoverZone::Card { card_id, side },
        }
    }

    pub fn empty_area(column_id: ColumnId) -> Self {
        Self {
            column_id,
            zone: HoverZone::EmptyArea,
        }
    }

    pub fn column(column_id: ColumnId) -> Self {
        Self {
            column_id,
            zone: HoverZone::Column,
        }
    }

    pub fn is_empty_area_of(&self, column_id: &ColumnId) -> bool {
        &self.column_id == column_id && self.zone == HoverZone::EmptyArea
    }
}

/// A pointer position in the rendering surface's coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}
