//! Card: a unit of work within a column, carrying task metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BoardId, CardId, ColumnId, UserId};

/// One entry in a card's checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub title: String,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub column: ColumnId,
    /// Denormalized copy of the owning column's board. Never an independent
    /// source of truth: cross-column moves must keep it equal to the board of
    /// `column`.
    pub board: BoardId,
    /// Position index among the column's cards. Siblings sort ascending.
    pub order: i64,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
    pub checklist: Vec<ChecklistItem>,
}

impl Card {
    pub fn new(title: impl Into<String>, column: ColumnId, board: BoardId, order: i64) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: String::new(),
            column,
            board,
            order,
            tags: Vec::new(),
            due_date: None,
            assigned_to: None,
            checklist: Vec::new(),
        }
    }
}

/// Partial update for a card.
///
/// `due_date` and `assigned_to` are doubly optional: `None` = don't change,
/// `Some(None)` = clear, `Some(Some(x))` = set. `column` and `board` are set
/// together by the move path so the denormalized back-reference stays in
/// sync; they are never patched independently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column: Option<ColumnId>,
    pub board: Option<BoardId>,
    pub order: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub assigned_to: Option<Option<UserId>>,
    pub checklist: Option<Vec<ChecklistItem>>,
}

impl CardPatch {
    pub fn apply(&self, card: &mut Card) {
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(column) = &self.column {
            card.column = column.clone();
        }
        if let Some(board) = &self.board {
            card.board = board.clone();
        }
        if let Some(order) = self.order {
            card.order = order;
        }
        if let Some(tags) = &self.tags {
            card.tags = tags.clone();
        }
        if let Some(due_date) = &self.due_date {
            card.due_date = *due_date;
        }
        if let Some(assigned_to) = &self.assigned_to {
            card.assigned_to = assigned_to.clone();
        }
        if let Some(checklist) = &self.checklist {
            card.checklist = checklist.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults() {
        let card = Card::new("Fix login", ColumnId::from("c1"), BoardId::from("b1"), 0);
        assert!(card.description.is_empty());
        assert!(card.tags.is_empty());
        assert!(card.due_date.is_none());
        assert!(card.assigned_to.is_none());
        assert!(card.checklist.is_empty());
    }

    #[test]
    fn test_patch_clears_doubly_optional_fields() {
        let mut card = Card::new("Fix login", ColumnId::from("c1"), BoardId::from("b1"), 0);
        card.assigned_to = Some(UserId::from("u1"));
        card.due_date = Some(Utc::now());

        CardPatch {
            assigned_to: Some(None),
            due_date: Some(None),
            ..CardPatch::default()
        }
        .apply(&mut card);

        assert!(card.assigned_to.is_none());
        assert!(card.due_date.is_none());
    }

    #[test]
    fn test_patch_replaces_checklist() {
        let mut card = Card::new("Fix login", ColumnId::from("c1"), BoardId::from("b1"), 0);

        CardPatch {
            checklist: Some(vec![ChecklistItem::new("write test")]),
            ..CardPatch::default()
        }
        .apply(&mut card);

        assert_eq!(card.checklist.len(), 1);
        assert!(!card.checklist[0].checked);
    }
}
