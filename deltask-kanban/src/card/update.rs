//! UpdateCard command

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::card::mv;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{CardId, CardPatch, ChecklistItem, ColumnId, UserId};
use async_trait::async_trait;

/// Update any combination of a card's fields. Absent fields are left alone;
/// `due_date` and `assigned_to` can additionally be cleared by passing
/// `Some(None)`.
///
/// Setting `column` makes this a move: the card is re-parented, its board
/// reference follows the destination column, and the order is the explicit
/// one if given, otherwise appended after the destination's cards.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCard {
    pub id: CardId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub column: Option<ColumnId>,
    pub order: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub assigned_to: Option<Option<UserId>>,
    pub checklist: Option<Vec<ChecklistItem>>,
    pub caller: UserId,
}

impl UpdateCard {
    pub fn new(id: impl Into<CardId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_assigned_to(mut self, assigned_to: Option<UserId>) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = Some(checklist);
        self
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for UpdateCard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(DeltaskError::invalid_value("title", "must not be blank"));
            }
        }

        let card = ctx.card(&self.id).await?;
        let workspace = access::workspace_of_card(ctx, &card).await?;
        access::require_member(&workspace, &self.caller, "update card")?;

        let mut patch = CardPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            order: self.order,
            tags: self.tags.clone(),
            due_date: self.due_date,
            assigned_to: self.assigned_to.clone(),
            checklist: self.checklist.clone(),
            ..CardPatch::default()
        };

        if let Some(dest) = &self.column {
            let (column, order) =
                mv::destination(ctx, &card, dest, self.order, &self.caller).await?;
            patch.column = Some(column.id);
            patch.board = Some(column.board);
            patch.order = Some(order);
        }

        let updated = ctx
            .store()
            .update_card(&self.id, patch)
            .await?
            .ok_or_else(|| DeltaskError::CardNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::card::CreateCard;
    use crate::column::CreateColumn;
    use crate::workspace::{AddMember, CreateWorkspace};

    async fn setup() -> (DeltaskContext, String, String) {
        let ctx = DeltaskContext::in_memory();
        let ws = CreateWorkspace::new("Team", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let ws_id = ws["id"].as_str().unwrap().to_string();
        let board = CreateBoard::new(ws_id.as_str(), "Sprint", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let column = CreateColumn::new(board["id"].as_str().unwrap(), "Todo", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        (ctx, ws_id, column["id"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_update_title_and_tags() {
        let (ctx, _ws, column) = setup().await;
        let card = CreateCard::new(column.as_str(), "Fix login", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let updated = UpdateCard::new(card["id"].as_str().unwrap(), "alice")
            .with_title("Fix login page")
            .with_tags(vec!["bug".to_string()])
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(updated["title"], "Fix login page");
        assert_eq!(updated["tags"][0], "bug");
        // untouched fields survive
        assert_eq!(updated["order"], 0);
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let (ctx, _ws, column) = setup().await;
        let card = CreateCard::new(column.as_str(), "Fix login", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let result = UpdateCard::new(card["id"].as_str().unwrap(), "alice")
            .with_title("   ")
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(DeltaskError::InvalidValue { .. })));
    }

    #[tokio::test]
    async fn test_clear_assignment() {
        let (ctx, _ws, column) = setup().await;
        let card = CreateCard::new(column.as_str(), "Fix login", "alice")
            .with_assigned_to(UserId::from("alice"))
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(card["assigned_to"], "alice");

        let updated = UpdateCard::new(card["id"].as_str().unwrap(), "alice")
            .with_assigned_to(None)
            .execute(&ctx)
            .await
            .unwrap();
        assert!(updated.get("assigned_to").is_none());
    }

    #[tokio::test]
    async fn test_update_with_column_moves_and_appends() {
        let (ctx, ws, column) = setup().await;
        let board = CreateBoard::new(ws.as_str(), "Second", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let doing = CreateColumn::new(board["id"].as_str().unwrap(), "Doing", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        CreateCard::new(doing["id"].as_str().unwrap(), "already here", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let card = CreateCard::new(column.as_str(), "Mover", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let updated = UpdateCard::new(card["id"].as_str().unwrap(), "alice")
            .with_column(doing["id"].as_str().unwrap())
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(updated["column"], doing["id"].as_str().unwrap());
        assert_eq!(updated["order"], 1);
    }

    #[tokio::test]
    async fn test_non_member_forbidden() {
        let (ctx, ws, column) = setup().await;
        AddMember::new(ws.as_str(), "bob", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let card = CreateCard::new(column.as_str(), "Fix login", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        // member may edit
        UpdateCard::new(card["id"].as_str().unwrap(), "bob")
            .with_description("details")
            .execute(&ctx)
            .await
            .unwrap();

        // outsider may not
        let result = UpdateCard::new(card["id"].as_str().unwrap(), "mallory")
            .with_description("graffiti")
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(DeltaskError::Forbidden { .. })));
    }
}
