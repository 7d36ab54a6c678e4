//! Card and column reordering.
//!
//! Every move is total: unknown ids turn the move into a no-op rather than
//! an error, so stale drop events can never corrupt the board.

use crate::domain::{
    board::Board,
    card::CardId,
    column::{Column, ColumnId},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which edge of the target card the dragged card lands next to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Before,
    After,
}

impl Side {
    /// `Before` when the pointer is above the element's vertical midpoint
    pub fn from_pointer(pointer_y: f64, element_top: f64, element_height: f64) -> Self {
        let midpoint = element_top + element_height / 2.0;
        if pointer_y < midpoint {
            Self::Before
        } else {
            Self::After
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

impl Board {
    /// Moves a card next to another card, within one column or across two.
    ///
    /// Indices are taken from the sequences as they were before the move.
    /// Inside one column the target index is shifted left by one when the
    /// dragged card sat before it, then right by one for `Side::After`, and
    /// finally clamped to the shortened sequence. When `target_card_id` is
    /// not in the target column the card is appended to its end.
    pub fn move_card(
        &self,
        card_id: &CardId,
        source_column_id: &ColumnId,
        target_column_id: &ColumnId,
        target_card_id: &CardId,
        side: Side,
    ) -> Board {
        let Some(source) = self.columns.get(source_column_id) else {
            debug!(column = %source_column_id, "Source column not found, move ignored");
            return self.clone();
        };
        let Some(source_idx) = source.position_of(card_id) else {
            debug!(card = %card_id, column = %source_column_id, "Card not in source column, move ignored");
            return self.clone();
        };

        if source_column_id == target_column_id {
            let Some(target_idx) = source.position_of(target_card_id) else {
                debug!(card = %card_id, target = %target_card_id, "Target card not found, moving to end");
                return self.move_card_to_column_end(card_id, source_column_id, target_column_id);
            };
            if source_idx == target_idx {
                return self.clone();
            }

            let mut cards = source.cards.clone();
            let card = cards.remove(source_idx);

            let mut insert_idx = target_idx;
            if source_idx < target_idx {
                insert_idx -= 1;
            }
            if side == Side::After {
                insert_idx += 1;
            }
            let insert_idx = insert_idx.min(cards.len());
            cards.insert(insert_idx, card);

            debug!(card = %card_id, column = %source_column_id, from = source_idx, to = insert_idx, "Reordering card");
            return self.with_column(Column {
                cards,
                ..Column::clone(source)
            });
        }

        let Some(target) = self.columns.get(target_column_id) else {
            debug!(column = %target_column_id, "Target column not found, move ignored");
            return self.clone();
        };
        let Some(target_idx) = target.position_of(target_card_id) else {
            debug!(card = %card_id, target = %target_card_id, "Target card not found, moving to end");
            return self.move_card_to_column_end(card_id, source_column_id, target_column_id);
        };

        let insert_idx = match side {
            Side::Before => target_idx,
            Side::After => target_idx + 1,
        };

        let mut source_cards = source.cards.clone();
        let card = source_cards.remove(source_idx);
        let mut target_cards = target.cards.clone();
        target_cards.insert(insert_idx, card);

        debug!(
            card = %card_id,
            from = %source_column_id,
            to = %target_column_id,
            index = insert_idx,
            "Moving card between columns"
        );
        self.with_column(Column {
            cards: source_cards,
            ..Column::clone(source)
        })
        .with_column(Column {
            cards: target_cards,
            ..Column::clone(target)
        })
    }

    /// Moves a card to the last position of a column, which may be its own
    pub fn move_card_to_column_end(
        &self,
        card_id: &CardId,
        source_column_id: &ColumnId,
        target_column_id: &ColumnId,
    ) -> Board {
        let Some(source) = self.columns.get(source_column_id) else {
            debug!(column = %source_column_id, "Source column not found, move ignored");
            return self.clone();
        };
        let Some(source_idx) = source.position_of(card_id) else {
            debug!(card = %card_id, column = %source_column_id, "Card not in source column, move ignored");
            return self.clone();
        };

        if source_column_id == target_column_id {
            if source_idx + 1 == source.len() {
                return self.clone();
            }

            let mut cards = source.cards.clone();
            let card = cards.remove(source_idx);
            cards.push(card);

            debug!(card = %card_id, column = %source_column_id, "Moving card to end of its column");
            return self.with_column(Column {
                cards,
                ..Column::clone(source)
            });
        }

        let Some(target) = self.columns.get(target_column_id) else {
            debug!(column = %target_column_id, "Target column not found, move ignored");
            return self.clone();
        };

        let mut source_cards = source.cards.clone();
        let card = source_cards.remove(source_idx);
        let mut target_cards = target.cards.clone();
        target_cards.push(card);

        debug!(card = %card_id, from = %source_column_id, to = %target_column_id, "Moving card to end of column");
        self.with_column(Column {
            cards: source_cards,
            ..Column::clone(source)
        })
        .with_column(Column {
            cards: target_cards,
            ..Column::clone(target)
        })
    }

    /// Moves a column into the slot the target column occupies.
    ///
    /// The target index is read before the source is removed and is not
    /// adjusted afterwards, so a column moved rightwards ends up after the
    /// target: `[A, B, C, D]` with B onto D gives `[A, C, D, B]`.
    pub fn move_column(&self, source_column_id: &ColumnId, target_column_id: &ColumnId) -> Board {
        if source_column_id == target_column_id {
            return self.clone();
        }

        let position = |id: &ColumnId| self.column_order.iter().position(|c| c == id);
        let (Some(source_idx), Some(target_idx)) =
            (position(source_column_id), position(target_column_id))
        else {
            debug!(source = %source_column_id, target = %target_column_id, "Column not found, move ignored");
            return self.clone();
        };

        let mut board = self.clone();
        let id = board.column_order.remove(source_idx);
        board.column_order.insert(target_idx, id);

        debug!(column = %source_column_id, from = source_idx, to = target_idx, "Moving column");
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;
    use std::sync::Arc;

    fn column(id: &str, cards: &str) -> Column {
        Column::new(ColumnId::from(id), id).with_cards(
            cards
                .split_whitespace()
                .map(|c| Card::new(CardId::from(c), c, None))
                .collect(),
        )
    }

    /// Columns given as `(id, "space separated card ids")`
    fn board(columns: &[(&str, &str)]) -> Board {
        let order = columns.iter().map(|(id, _)| ColumnId::from(*id)).collect();
        let columns = columns.iter().map(|(id, cards)| column(id, cards)).collect();
        Board::from_parts(columns, order).unwrap()
    }

    fn cards(board: &Board, column: &str) -> Vec<String> {
        board
            .column(&ColumnId::from(column))
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    fn order(board: &Board) -> Vec<&str> {
        board.column_order().iter().map(|id| id.as_str()).collect()
    }

    fn col(id: &str) -> ColumnId {
        ColumnId::from(id)
    }

    fn card(id: &str) -> CardId {
        CardId::from(id)
    }

    #[test]
    fn test_side_from_pointer() {
        assert_eq!(Side::from_pointer(10.0, 0.0, 40.0), Side::Before);
        assert_eq!(Side::from_pointer(20.0, 0.0, 40.0), Side::After);
        assert_eq!(Side::from_pointer(35.0, 0.0, 40.0), Side::After);
        assert_eq!(Side::from_pointer(119.0, 100.0, 40.0), Side::Before);
    }

    #[test]
    fn test_move_first_card_after_second() {
        let b = board(&[("A", "a b c d")]);
        let b = b.move_card(&card("a"), &col("A"), &col("A"), &card("b"), Side::After);
        assert_eq!(cards(&b, "A"), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_move_last_card_before_first() {
        let b = board(&[("A", "a b c d")]);
        let b = b.move_card(&card("d"), &col("A"), &col("A"), &card("a"), Side::Before);
        assert_eq!(cards(&b, "A"), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_move_down_before_target_lands_above_it() {
        let b = board(&[("A", "a b c d")]);
        let b = b.move_card(&card("a"), &col("A"), &col("A"), &card("c"), Side::Before);
        assert_eq!(cards(&b, "A"), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_move_after_last_card() {
        let b = board(&[("A", "a b c d")]);
        let b = b.move_card(&card("b"), &col("A"), &col("A"), &card("d"), Side::After);
        assert_eq!(cards(&b, "A"), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_move_onto_adjacent_card_that_keeps_position() {
        let b = board(&[("A", "a b c")]);
        let moved = b.move_card(&card("b"), &col("A"), &col("A"), &card("a"), Side::After);
        assert_eq!(moved, b);
    }

    #[test]
    fn test_drop_on_self_is_noop_by_value() {
        let b = board(&[("A", "x y"), ("B", "p")]);

        for side in [Side::Before, Side::After] {
            let moved = b.move_card(&card("x"), &col("A"), &col("A"), &card("x"), side);
            assert_eq!(moved, b);
        }
    }

    #[test]
    fn test_move_between_columns_before_target() {
        let b = board(&[("A", "x y"), ("B", "p q")]);
        let b = b.move_card(&card("x"), &col("A"), &col("B"), &card("q"), Side::Before);

        assert_eq!(cards(&b, "A"), vec!["y"]);
        assert_eq!(cards(&b, "B"), vec!["p", "x", "q"]);
    }

    #[test]
    fn test_move_between_columns_after_target() {
        let b = board(&[("A", "x y"), ("B", "p q")]);
        let b = b.move_card(&card("y"), &col("A"), &col("B"), &card("q"), Side::After);

        assert_eq!(cards(&b, "A"), vec!["x"]);
        assert_eq!(cards(&b, "B"), vec!["p", "q", "y"]);
    }

    #[test]
    fn test_move_leaves_untouched_columns_shared() {
        let b = board(&[("A", "x y"), ("B", "p"), ("C", "z")]);
        let moved = b.move_card(&card("x"), &col("A"), &col("B"), &card("p"), Side::Before);

        assert!(Arc::ptr_eq(
            b.column_arc(&col("C")).unwrap(),
            moved.column_arc(&col("C")).unwrap()
        ));
        assert!(!Arc::ptr_eq(
            b.column_arc(&col("A")).unwrap(),
            moved.column_arc(&col("A")).unwrap()
        ));
    }

    #[test]
    fn test_move_to_missing_target_card_appends() {
        let b = board(&[("A", "x y"), ("B", "p q")]);

        let across = b.move_card(&card("x"), &col("A"), &col("B"), &card("ghost"), Side::Before);
        assert_eq!(cards(&across, "A"), vec!["y"]);
        assert_eq!(cards(&across, "B"), vec!["p", "q", "x"]);

        let within = b.move_card(&card("x"), &col("A"), &col("A"), &card("ghost"), Side::After);
        assert_eq!(cards(&within, "A"), vec!["y", "x"]);
    }

    #[test]
    fn test_move_with_unknown_ids_is_noop() {
        let b = board(&[("A", "x"), ("B", "p")]);

        assert_eq!(
            b.move_card(&card("ghost"), &col("A"), &col("B"), &card("p"), Side::Before),
            b
        );
        assert_eq!(
            b.move_card(&card("x"), &col("Z"), &col("B"), &card("p"), Side::Before),
            b
        );
        assert_eq!(
            b.move_card(&card("x"), &col("A"), &col("Z"), &card("p"), Side::Before),
            b
        );
        assert_eq!(b.move_card_to_column_end(&card("x"), &col("A"), &col("Z")), b);
        assert_eq!(b.move_card_to_column_end(&card("p"), &col("A"), &col("B")), b);
    }

    #[test]
    fn test_move_card_to_other_column_end() {
        let b = board(&[("A", "x y"), ("B", "p q")]);
        let b = b.move_card_to_column_end(&card("x"), &col("A"), &col("B"));

        assert_eq!(cards(&b, "A"), vec!["y"]);
        assert_eq!(cards(&b, "B"), vec!["p", "q", "x"]);
    }

    #[test]
    fn test_move_card_to_column_end_round_trip() {
        let b = board(&[("A", "x y"), ("B", "p")]);
        let there = b.move_card_to_column_end(&card("x"), &col("A"), &col("B"));
        let back = there.move_card_to_column_end(&card("x"), &col("B"), &col("A"));

        assert_eq!(cards(&back, "A"), vec!["y", "x"]);
        assert_eq!(cards(&back, "B"), vec!["p"]);
    }

    #[test]
    fn test_move_card_to_own_column_end() {
        let b = board(&[("A", "x y z")]);

        let moved = b.move_card_to_column_end(&card("x"), &col("A"), &col("A"));
        assert_eq!(cards(&moved, "A"), vec!["y", "z", "x"]);

        let unchanged = b.move_card_to_column_end(&card("z"), &col("A"), &col("A"));
        assert_eq!(unchanged, b);
    }

    #[test]
    fn test_move_column_rightwards_uses_original_index() {
        let b = board(&[("A", ""), ("B", ""), ("C", ""), ("D", "")]);
        let b = b.move_column(&col("B"), &col("D"));
        assert_eq!(order(&b), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_move_column_leftwards() {
        let b = board(&[("A", ""), ("B", ""), ("C", ""), ("D", "")]);
        let b = b.move_column(&col("D"), &col("B"));
        assert_eq!(order(&b), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_move_column_to_adjacent_slot() {
        let b = board(&[("A", ""), ("B", ""), ("C", "")]);
        assert_eq!(order(&b.move_column(&col("A"), &col("B"))), vec!["B", "A", "C"]);
        assert_eq!(order(&b.move_column(&col("C"), &col("B"))), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_move_column_noops() {
        let b = board(&[("A", "x"), ("B", "")]);

        assert_eq!(b.move_column(&col("A"), &col("A")), b);
        assert_eq!(b.move_column(&col("A"), &col("Z")), b);
        assert_eq!(b.move_column(&col("Z"), &col("A")), b);
    }

    #[test]
    fn test_moves_preserve_invariants() {
        let b = board(&[("A", "a b"), ("B", "c"), ("C", "")]);
        let b = b
            .move_card(&card("a"), &col("A"), &col("B"), &card("c"), Side::After)
            .move_card_to_column_end(&card("b"), &col("A"), &col("C"))
            .move_column(&col("C"), &col("A"));

        assert!(b.check_invariants().is_ok());
        assert_eq!(b.card_count(), 3);
        assert_eq!(order(&b), vec!["C", "A", "B"]);
    }
}
