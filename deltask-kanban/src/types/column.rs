//! Column: an ordered lane within a board, owning cards.

use serde::{Deserialize, Serialize};

use super::ids::{BoardId, ColumnId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub board: BoardId,
    /// Position index among the board's columns. Siblings sort ascending;
    /// gaps and (transiently, under racing writers) duplicates are tolerated.
    pub order: i64,
}

impl Column {
    pub fn new(title: impl Into<String>, board: BoardId, order: i64) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            board,
            order,
        }
    }
}

/// Partial update for a column: title and/or order. Reordering a whole board
/// is a batch of these, one per affected column, last write wins per item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnPatch {
    pub title: Option<String>,
    pub order: Option<i64>,
}

impl ColumnPatch {
    pub fn apply(&self, column: &mut Column) {
        if let Some(title) = &self.title {
            column.title = title.clone();
        }
        if let Some(order) = self.order {
            column.order = order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut column = Column::new("Todo", BoardId::from("b1"), 0);

        ColumnPatch {
            order: Some(3),
            ..ColumnPatch::default()
        }
        .apply(&mut column);

        assert_eq!(column.title, "Todo");
        assert_eq!(column.order, 3);
    }
}
