pub mod board;
pub mod card;
pub mod column;
pub mod reorder;

pub use board::{Board, BoardConfig, CardSeed, ColumnSeed};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use reorder::Side;
