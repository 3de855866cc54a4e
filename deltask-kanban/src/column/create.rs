//! CreateColumn command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::ordering;
use crate::types::{BoardId, Column, UserId};
use async_trait::async_trait;

/// Create a column in a board (workspace members only). Without an explicit
/// order the column appends after the board's existing columns.
#[derive(Debug, Deserialize)]
pub struct CreateColumn {
    pub board: BoardId,
    /// The column title (required, non-blank)
    pub title: String,
    /// Explicit position; append-at-end when absent
    pub order: Option<i64>,
    pub caller: UserId,
}

impl CreateColumn {
    pub fn new(
        board: impl Into<BoardId>,
        title: impl Into<String>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            board: board.into(),
            title: title.into(),
            order: None,
            caller: caller.into(),
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for CreateColumn {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if self.title.trim().is_empty() {
            return Err(DeltaskError::missing_field("title"));
        }

        let board = ctx.board(&self.board).await?;
        let workspace = access::workspace_of_board(ctx, &board).await?;
        access::require_member(&workspace, &self.caller, "create column")?;

        let siblings = ctx.store().columns_in_board(&board.id).await?;
        let order = ordering::placement(self.order, siblings.iter().map(|c| c.order));

        let column = Column::new(self.title.clone(), board.id, order);
        ctx.store().insert_column(column.clone()).await?;

        Ok(serde_json::to_value(&column)?)
    }
}
