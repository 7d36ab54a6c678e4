use crate::{
    domain::{
        card::{Card, CardId},
        column::{Column, ColumnId},
    },
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};
use tracing::debug;

/// Seed entry for a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSeed {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CardSeed {
    fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Seed entry for a column, cards listed in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<CardSeed>,
}

/// Initial board contents, supplied once when the board is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnSeed>,
}

impl BoardConfig {
    /// Parses a seed document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban Board".to_string(),
            columns: vec![
                ColumnSeed {
                    id: "todo".to_string(),
                    title: "To Do".to_string(),
                    cards: vec![
                        CardSeed::new(
                            "1",
                            "Design system review",
                            "Review and update the design system components",
                        ),
                        CardSeed::new("2", "API integration", "Integrate user authentication API"),
                        CardSeed::new(
                            "3",
                            "User testing",
                            "Conduct usability testing for the new features",
                        ),
                    ],
                },
                ColumnSeed {
                    id: "in-progress".to_string(),
                    title: "In Progress".to_string(),
                    cards: vec![
                        CardSeed::new(
                            "4",
                            "Database optimization",
                            "Optimize database queries for better performance",
                        ),
                        CardSeed::new(
                            "5",
                            "Mobile responsiveness",
                            "Make the app fully responsive for mobile devices",
                        ),
                    ],
                },
                ColumnSeed {
                    id: "review".to_string(),
                    title: "Code Review".to_string(),
                    cards: vec![CardSeed::new(
                        "6",
                        "Pull request #123",
                        "Review authentication implementation",
                    )],
                },
                ColumnSeed {
                    id: "done".to_string(),
                    title: "Done".to_string(),
                    cards: vec![
                        CardSeed::new("7", "Setup project", "Initial project setup and configuration"),
                        CardSeed::new("8", "Create mockups", "Design mockups for the main dashboard"),
                    ],
                },
            ],
        }
    }
}

/// Kanban board state
///
/// `column_order` is always a permutation of the keys of `columns`. Every
/// operation returns a new board and leaves `self` untouched; columns an
/// operation does not touch are shared with the returned board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub(crate) columns: HashMap<ColumnId, Arc<Column>>,
    pub(crate) column_order: Vec<ColumnId>,
}

impl Board {
    /// Builds a board from its parts, rejecting anything that breaks the
    /// column order invariant or reuses an id
    pub fn from_parts(columns: Vec<Column>, column_order: Vec<ColumnId>) -> Result<Self> {
        let mut map = HashMap::with_capacity(columns.len());
        for column in columns {
            let id = column.id.clone();
            if map.insert(id.clone(), Arc::new(column)).is_some() {
                return Err(KanbanError::DuplicateColumnId(id.to_string()));
            }
        }

        let board = Self {
            columns: map,
            column_order,
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Builds and validates a board from seed configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let mut columns = Vec::with_capacity(config.columns.len());
        let mut order = Vec::with_capacity(config.columns.len());

        for seed in &config.columns {
            if seed.title.trim().is_empty() {
                return Err(KanbanError::EmptyTitle(format!("column {}", seed.id)));
            }

            let mut cards = Vec::with_capacity(seed.cards.len());
            for card in &seed.cards {
                if card.title.trim().is_empty() {
                    return Err(KanbanError::EmptyTitle(format!("card {}", card.id)));
                }
                cards.push(Card::new(
                    CardId::from(card.id.as_str()),
                    &card.title,
                    card.description.as_deref(),
                ));
            }

            let id = ColumnId::from(seed.id.as_str());
            order.push(id.clone());
            columns.push(Column::new(id, &seed.title).with_cards(cards));
        }

        debug!(board = %config.name, columns = order.len(), "Seeding board");
        Self::from_parts(columns, order)
    }

    /// Parses and validates a board value
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(json)?;
        board.check_invariants()?;
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the column order is a permutation of the stored columns
    /// and that no card id appears twice
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.column_order.len());
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(KanbanError::UnknownColumnInOrder(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(KanbanError::DuplicateColumnInOrder(id.to_string()));
            }
        }

        let mut cards = HashSet::new();
        for (key, column) in &self.columns {
            if !seen.contains(key) {
                return Err(KanbanError::ColumnNotOrdered(key.to_string()));
            }
            if key != &column.id {
                return Err(KanbanError::ColumnKeyMismatch {
                    key: key.to_string(),
                    id: column.id.to_string(),
                });
            }
            for card in &column.cards {
                if !cards.insert(&card.id) {
                    return Err(KanbanError::DuplicateCardId(card.id.to_string()));
                }
            }
        }

        Ok(())
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(Arc::as_ref)
    }

    /// Shared handle to a column, for callers that compare identity
    pub fn column_arc(&self, id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.get(id)
    }

    /// Columns in display order
    pub fn columns_in_order(&self) -> impl Iterator<Item = &Column> + '_ {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id).map(Arc::as_ref))
    }

    /// Finds a card anywhere on the board along with the column holding it
    pub fn find_card(&self, card_id: &CardId) -> Option<(&Column, &Card)> {
        self.columns_in_order()
            .find_map(|column| column.card(card_id).map(|card| (column, card)))
    }

    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    pub fn card_count(&self) -> usize {
        self.columns.values().map(|column| column.len()).sum()
    }

    /// Appends an empty column; blank titles are ignored
    pub fn add_column(&self, title: &str) -> Board {
        if title.trim().is_empty() {
            debug!("Ignoring column with empty title");
            return self.clone();
        }

        let id = ColumnId::generate();
        debug!(column = %id, "Adding column");

        let mut board = self.clone();
        board
            .columns
            .insert(id.clone(), Arc::new(Column::new(id.clone(), title)));
        board.column_order.push(id);
        board
    }

    /// Removes a column and every card in it
    pub fn delete_column(&self, column_id: &ColumnId) -> Board {
        if !self.columns.contains_key(column_id) {
            debug!(column = %column_id, "Column not found, nothing to delete");
            return self.clone();
        }

        debug!(column = %column_id, "Deleting column");
        let mut board = self.clone();
        board.columns.remove(column_id);
        board.column_order.retain(|id| id != column_id);
        board
    }

    /// Appends a new card to the end of a column; blank titles are ignored
    pub fn add_card(&self, column_id: &ColumnId, title: &str, description: Option<&str>) -> Board {
        if title.trim().is_empty() {
            debug!(column = %column_id, "Ignoring card with empty title");
            return self.clone();
        }
        let Some(column) = self.columns.get(column_id) else {
            debug!(column = %column_id, "Column not found, card not added");
            return self.clone();
        };

        let card = Card::new(CardId::generate(), title, description);
        debug!(column = %column_id, card = %card.id, "Adding card");

        let mut updated = Column::clone(column);
        updated.cards.push(card);
        self.with_column(updated)
    }

    /// Removes a card from a column
    pub fn delete_card(&self, column_id: &ColumnId, card_id: &CardId) -> Board {
        let Some(column) = self.columns.get(column_id) else {
            debug!(column = %column_id, "Column not found, nothing to delete");
            return self.clone();
        };
        if column.position_of(card_id).is_none() {
            debug!(column = %column_id, card = %card_id, "Card not found, nothing to delete");
            return self.clone();
        }

        debug!(column = %column_id, card = %card_id, "Deleting card");
        let mut updated = Column::clone(column);
        updated.cards.retain(|card| &card.id != card_id);
        self.with_column(updated)
    }

    /// Returns a copy of the board with one column replaced
    pub(crate) fn with_column(&self, column: Column) -> Board {
        let mut board = self.clone();
        board.columns.insert(column.id.clone(), Arc::new(column));
        board
    }
}
