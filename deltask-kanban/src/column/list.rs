//! ListColumns command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{BoardId, UserId};
use async_trait::async_trait;

/// List a board's columns, sorted ascending by order (members only)
#[derive(Debug, Deserialize)]
pub struct ListColumns {
    pub board: BoardId,
    pub caller: UserId,
}

impl ListColumns {
    pub fn new(board: impl Into<BoardId>, caller: impl Into<UserId>) -> Self {
        Self {
            board: board.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for ListColumns {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let board = ctx.board(&self.board).await?;
        let workspace = access::workspace_of_board(ctx, &board).await?;
        access::require_member(&workspace, &self.caller, "list columns")?;

        let columns = ctx.store().columns_in_board(&board.id).await?;
        Ok(serde_json::to_value(&columns)?)
    }
}
