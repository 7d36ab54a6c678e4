use crate::{
    domain::{Board, CardId, ColumnId, Side},
    drag::{
        event::DragEvent,
        state::{DragSession, HoverTarget, HoverZone},
    },
};
use tracing::{debug, trace};

/// Transient drag-and-drop state: the active session and the current hover
/// target. Completed drops are turned into a single store operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTracker {
    session: Option<DragSession>,
    hover: Option<HoverTarget>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn hover(&self) -> Option<&HoverTarget> {
        self.hover.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Drops the session and hover target unconditionally
    pub fn cancel(&mut self) {
        if self.session.is_some() {
            debug!("Drag cancelled");
        }
        self.session = None;
        self.hover = None;
    }

    /// Drops any session or hover target that points into a deleted column
    pub fn forget_column(&mut self, column_id: &ColumnId) {
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.references_column(column_id))
        {
            debug!(column = %column_id, "Dragged column deleted, cancelling drag");
            self.cancel();
        } else if self
            .hover
            .as_ref()
            .is_some_and(|h| &h.column_id == column_id)
        {
            self.hover = None;
        }
    }

    /// Drops any session or hover target that points at a deleted card
    pub fn forget_card(&mut self, card_id: &CardId) {
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.references_card(card_id))
        {
            debug!(card = %card_id, "Dragged card deleted, cancelling drag");
            self.cancel();
        } else if matches!(
            self.hover,
            Some(HoverTarget { zone: HoverZone::Card { card_id: ref hovered, .. }, .. }) if hovered == card_id
        ) {
            self.hover = None;
        }
    }

    /// Applies one pointer event.
    ///
    /// Returns the updated board when the event resolved into a store
    /// operation, `None` when the board is untouched. Every drop ends the
    /// session, whether or not it moved anything.
    pub fn dispatch(&mut self, board: &Board, event: DragEvent) -> Option<Board> {
        match event {
            DragEvent::StartCardDrag { card_id, column_id } => {
                debug!(card = %card_id, column = %column_id, "Card drag started");
                self.hover = None;
                self.session = Some(DragSession::Card {
                    card_id,
                    source_column_id: column_id,
                });
                None
            }
            DragEvent::StartColumnDrag { column_id } => {
                debug!(column = %column_id, "Column drag started");
                self.hover = None;
                self.session = Some(DragSession::Column { column_id });
                None
            }
            DragEvent::HoverCard {
                card_id,
                column_id,
                pointer_y,
                element_top,
                element_height,
            } => {
                if self.is_dragging_a_card() {
                    let side = Side::from_pointer(pointer_y, element_top, element_height);
                    self.set_hover(HoverTarget::card(column_id, card_id, side));
                }
                None
            }
            DragEvent::HoverEmptyArea { column_id } => {
                if self.is_dragging_a_card() {
                    self.set_hover(HoverTarget::empty_area(column_id));
                }
                None
            }
            DragEvent::HoverColumn { column_id } => {
                if self.session.is_some() {
                    self.set_hover(HoverTarget::column(column_id));
                }
                None
            }
            DragEvent::PointerLeft { pointer, bounds } => {
                if self.hover.is_some() && !bounds.contains(pointer) {
                    trace!("Pointer left hover target");
                    self.hover = None;
                }
                None
            }
            DragEvent::DropOnCard { card_id, column_id } => {
                self.drop_on_card(board, &card_id, &column_id)
            }
            DragEvent::DropOnColumn { column_id } => self.drop_on_column(board, &column_id),
            DragEvent::DropOnEmptyArea { column_id } => self.drop_on_empty_area(board, &column_id),
            DragEvent::DragEnded => {
                self.cancel();
                None
            }
        }
    }

    fn is_dragging_a_card(&self) -> bool {
        matches!(self.session, Some(DragSession::Card { .. }))
    }

    fn set_hover(&mut self, target: HoverTarget) {
        trace!(column = %target.column_id, zone = ?target.zone, "Hover target updated");
        self.hover = Some(target);
    }

    /// Ends the session, handing back what was dragged and hovered
    fn finish(&mut self) -> (Option<DragSession>, Option<HoverTarget>) {
        (self.session.take(), self.hover.take())
    }

    fn drop_on_card(
        &mut self,
        board: &Board,
        target_card_id: &CardId,
        target_column_id: &ColumnId,
    ) -> Option<Board> {
        let (session, hover) = self.finish();

        let Some(DragSession::Card {
            card_id,
            source_column_id,
        }) = session
        else {
            debug!(card = %target_card_id, "Drop on card without a card drag, ignored");
            return None;
        };
        let side = match hover {
            Some(HoverTarget {
                zone: HoverZone::Card { card_id: hovered, side },
                ..
            }) if &hovered == target_card_id => side,
            _ => {
                debug!(card = %target_card_id, "Drop on card that is not the hover target, ignored");
                return None;
            }
        };
        if &card_id == target_card_id {
            debug!(card = %card_id, "Card dropped on itself");
            return None;
        }

        Some(board.move_card(
            &card_id,
            &source_column_id,
            target_column_id,
            target_card_id,
            side,
        ))
    }

    fn drop_on_column(&mut self, board: &Board, target_column_id: &ColumnId) -> Option<Board> {
        let (session, hover) = self.finish();

        match session? {
            DragSession::Card {
                card_id,
                source_column_id,
            } => {
                let onto_own_tail = hover
                    .as_ref()
                    .is_some_and(|h| h.is_empty_area_of(target_column_id));
                if &source_column_id != target_column_id || onto_own_tail {
                    Some(board.move_card_to_column_end(
                        &card_id,
                        &source_column_id,
                        target_column_id,
                    ))
                } else {
                    None
                }
            }
            DragSession::Column { column_id } => {
                if &column_id != target_column_id {
                    Some(board.move_column(&column_id, target_column_id))
                } else {
                    None
                }
            }
        }
    }

    fn drop_on_empty_area(&mut self, board: &Board, column_id: &ColumnId) -> Option<Board> {
        let (session, _) = self.finish();

        match session? {
            DragSession::Card {
                card_id,
                source_column_id,
            } => Some(board.move_card_to_column_end(&card_id, &source_column_id, column_id)),
            DragSession::Column { .. } => {
                debug!(column = %column_id, "Column dropped on empty card area, ignored");
                None
            }
        }
    }
}
