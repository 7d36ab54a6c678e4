use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Column order references unknown column: {0}")]
    UnknownColumnInOrder(String),

    #[error("Column missing from column order: {0}")]
    ColumnNotOrdered(String),

    #[error("Column appears more than once in column order: {0}")]
    DuplicateColumnInOrder(String),

    #[error("Column stored under key {key} has id {id}")]
    ColumnKeyMismatch { key: String, id: String },

    #[error("Duplicate column ID: {0}")]
    DuplicateColumnId(String),

    #[error("Duplicate card ID: {0}")]
    DuplicateCardId(String),

    #[error("Empty title for {0}")]
    EmptyTitle(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
