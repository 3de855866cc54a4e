//! UpdateColumn command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{ColumnId, ColumnPatch, UserId};
use async_trait::async_trait;

/// Update a column's title and/or order (workspace members only).
///
/// Reordering a board is a batch of these, one per affected column, each
/// carrying that column's target order. Last write wins per column.
#[derive(Debug, Deserialize)]
pub struct UpdateColumn {
    pub id: ColumnId,
    pub title: Option<String>,
    pub order: Option<i64>,
    pub caller: UserId,
}

impl UpdateColumn {
    pub fn new(id: impl Into<ColumnId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            order: None,
            caller: caller.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for UpdateColumn {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(DeltaskError::missing_field("title"));
            }
        }

        let column = ctx.column(&self.id).await?;
        let workspace = access::workspace_of_column(ctx, &column).await?;
        access::require_member(&workspace, &self.caller, "update column")?;

        let patch = ColumnPatch {
            title: self.title.clone(),
            order: self.order,
        };
        let updated = ctx
            .store()
            .update_column(&self.id, patch)
            .await?
            .ok_or_else(|| DeltaskError::ColumnNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::column::{CreateColumn, ListColumns};
    use crate::workspace::CreateWorkspace;

    async fn setup() -> (DeltaskContext, String) {
        let ctx = DeltaskContext::in_memory();
        let ws = CreateWorkspace::new("Team", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let board = CreateBoard::new(ws["id"].as_str().unwrap(), "Sprint", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        (ctx, board["id"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_rename_keeps_order() {
        let (ctx, board_id) = setup().await;
        let col = CreateColumn::new(board_id.as_str(), "Todo", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let result = UpdateColumn::new(col["id"].as_str().unwrap(), "alice")
            .with_title("Backlog")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["title"], "Backlog");
        assert_eq!(result["order"], 0);
    }

    #[tokio::test]
    async fn test_swap_two_columns() {
        let (ctx, board_id) = setup().await;
        let todo = CreateColumn::new(board_id.as_str(), "Todo", "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let doing = CreateColumn::new(board_id.as_str(), "Doing", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        // Two per-item overwrites: Doing -> 0, Todo -> 1
        UpdateColumn::new(doing["id"].as_str().unwrap(), "alice")
            .with_order(0)
            .execute(&ctx)
            .await
            .unwrap();
        UpdateColumn::new(todo["id"].as_str().unwrap(), "alice")
            .with_order(1)
            .execute(&ctx)
            .await
            .unwrap();

        let result = ListColumns::new(board_id.as_str(), "alice")
            .execute(&ctx)
            .await
            .unwrap();
        let titles: Vec<&str> = result
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Doing", "Todo"]);
    }

    #[tokio::test]
    async fn test_non_member_forbidden() {
        let (ctx, board_id) = setup().await;
        let col = CreateColumn::new(board_id.as_str(), "Todo", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let result = UpdateColumn::new(col["id"].as_str().unwrap(), "mallory")
            .with_order(1)
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(DeltaskError::Forbidden { .. })));
    }
}
