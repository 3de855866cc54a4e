//! CreateCard command

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::ordering;
use crate::types::{Card, ChecklistItem, ColumnId, UserId};
use async_trait::async_trait;

/// Create a card in a column (workspace members only). The card inherits the
/// column's board; without an explicit order it appends after the column's
/// existing cards.
#[derive(Debug, Deserialize)]
pub struct CreateCard {
    pub column: ColumnId,
    /// The card title (required, non-blank)
    pub title: String,
    pub description: Option<String>,
    /// Explicit position; append-at-end when absent
    pub order: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<UserId>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    pub caller: UserId,
}

impl CreateCard {
    pub fn new(
        column: impl Into<ColumnId>,
        title: impl Into<String>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            description: None,
            order: None,
            tags: Vec::new(),
            due_date: None,
            assigned_to: None,
            checklist: Vec::new(),
            caller: caller.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_assigned_to(mut self, assignee: impl Into<UserId>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for CreateCard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if self.title.trim().is_empty() {
            return Err(DeltaskError::missing_field("title"));
        }

        let column = ctx.column(&self.column).await?;
        let workspace = access::workspace_of_column(ctx, &column).await?;
        access::require_member(&workspace, &self.caller, "create card")?;

        let siblings = ctx.store().cards_in_column(&column.id).await?;
        let order = ordering::placement(self.order, siblings.iter().map(|c| c.order));

        let mut card = Card::new(self.title.clone(), column.id, column.board, order);
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        card.tags = self.tags.clone();
        card.due_date = self.due_date;
        card.assigned_to = self.assigned_to.clone();
        card.checklist = self.checklist.clone();

        ctx.store().insert_card(card.clone()).await?;

        Ok(serde_json::to_value(&card)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::column::CreateColumn;
    use crate::workspace::CreateWorkspace;

    async fn setup() -> (DeltaskContext, String, String) {
        let ctx = DeltaskContext::in_memory();
        let ws = CreateWorkspace::new("Team", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let board = CreateBoard::new(ws["id"].as_str().unwrap(), "Sprint", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let board_id = board["id"].as_str().unwrap().to_string();
        let col = CreateColumn::new(board_id.as_str(), "Todo", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        (ctx, board_id, col["id"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_card_inherits_board_and_appends() {
        let (ctx, board_id, col_id) = setup().await;

        let first = CreateCard::new(col_id.as_str(), "Fix login", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(first["board"], board_id.as_str());
        assert_eq!(first["order"], 0);

        let second = CreateCard::new(col_id.as_str(), "Write docs", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(second["order"], 1);
    }

    #[tokio::test]
    async fn test_metadata_fields() {
        let (ctx, _board_id, col_id) = setup().await;

        let result = CreateCard::new(col_id.as_str(), "Fix login", "alice")
            .with_description("500 on bad password")
            .with_tags(vec!["bug".into(), "auth".into()])
            .with_assigned_to("bob")
            .with_checklist(vec![ChecklistItem::new("reproduce")])
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["description"], "500 on bad password");
        assert_eq!(result["tags"], serde_json::json!(["bug", "auth"]));
        assert_eq!(result["assigned_to"], "bob");
        assert_eq!(result["checklist"][0]["checked"], false);
    }

    #[tokio::test]
    async fn test_missing_column_is_not_found() {
        let ctx = DeltaskContext::in_memory();

        let result = CreateCard::new("missing", "X", "alice").execute(&ctx).await;
        assert!(matches!(result, Err(DeltaskError::ColumnNotFound { .. })));
    }

    #[tokio::test]
    async fn test_non_member_forbidden() {
        let (ctx, _board_id, col_id) = setup().await;

        let result = CreateCard::new(col_id.as_str(), "X", "mallory")
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(DeltaskError::Forbidden { .. })));
    }
}
