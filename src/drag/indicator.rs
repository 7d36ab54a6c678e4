//! Read-only queries the rendering layer uses to place drop indicators and
//! highlight the dragged item.

use crate::{
    domain::{CardId, ColumnId, Side},
    drag::{
        state::{DragSession, HoverZone},
        tracker::DragTracker,
    },
};
use serde::{Deserialize, Serialize};

/// How a column under the pointer should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnHighlight {
    /// A card would be dropped into this column
    CardDrop,
    /// A column would be dropped onto this column's slot
    ColumnDrop,
}

impl DragTracker {
    /// Side of the card where the drop line is drawn, if any
    pub fn card_indicator(&self, card_id: &CardId) -> Option<Side> {
        if !matches!(self.session(), Some(DragSession::Card { .. })) {
            return None;
        }
        match &self.hover()?.zone {
            HoverZone::Card {
                card_id: hovered,
                side,
            } if hovered == card_id => Some(*side),
            _ => None,
        }
    }

    pub fn shows_empty_area_indicator(&self, column_id: &ColumnId) -> bool {
        matches!(self.session(), Some(DragSession::Card { .. }))
            && self
                .hover()
                .is_some_and(|hover| hover.is_empty_area_of(column_id))
    }

    pub fn column_highlight(&self, column_id: &ColumnId) -> Option<ColumnHighlight> {
        let hover = self.hover()?;
        if &hover.column_id != column_id {
            return None;
        }
        match self.session()? {
            DragSession::Card { .. } => Some(ColumnHighlight::CardDrop),
            DragSession::Column { .. } => Some(ColumnHighlight::ColumnDrop),
        }
    }

    pub fn is_dragging_card(&self, card_id: &CardId) -> bool {
        self.session()
            .is_some_and(|session| session.references_card(card_id))
    }

    pub fn is_dragging_column(&self, column_id: &ColumnId) -> bool {
        matches!(self.session(), Some(DragSession::Column { column_id: dragged }) if dragged == column_id)
    }
}
