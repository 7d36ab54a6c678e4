use crate::{
    domain::{Board, BoardConfig, CardId, ColumnId},
    drag::{DragEvent, DragTracker},
    error::Result,
};

/// Everything the rendering layer can ask of the board
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddColumn {
        title: String,
    },
    DeleteColumn {
        column_id: ColumnId,
    },
    AddCard {
        column_id: ColumnId,
        title: String,
        description: Option<String>,
    },
    DeleteCard {
        column_id: ColumnId,
        card_id: CardId,
    },
    Drag(DragEvent),
}

impl From<DragEvent> for Action {
    fn from(event: DragEvent) -> Self {
        Self::Drag(event)
    }
}

/// Single owner of the board and the drag state. Each dispatched action runs
/// to completion and replaces the board wholesale.
#[derive(Debug, Clone)]
pub struct Kanban {
    board: Board,
    tracker: DragTracker,
}

impl Kanban {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            tracker: DragTracker::new(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Ok(Self::new(Board::from_config(config)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        match action.into() {
            Action::AddColumn { title } => {
                self.board = self.board.add_column(&title);
            }
            Action::DeleteColumn { column_id } => {
                self.board = self.board.delete_column(&column_id);
                self.tracker.forget_column(&column_id);
            }
            Action::AddCard {
                column_id,
                title,
                description,
            } => {
                self.board = self
                    .board
                    .add_card(&column_id, &title, description.as_deref());
            }
            Action::DeleteCard { column_id, card_id } => {
                self.board = self.board.delete_card(&column_id, &card_id);
                self.tracker.forget_card(&card_id);
            }
            Action::Drag(event) => {
                if let Some(board) = self.tracker.dispatch(&self.board, event) {
                    self.board = board;
                }
            }
        }
    }
}

impl Default for Kanban {
    fn default() -> Self {
        // The built-in seed is static and always valid
        let board = Board::from_config(&BoardConfig::default()).unwrap_or_default();
        Self::new(board)
    }
}
