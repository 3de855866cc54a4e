//! GetBoard command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{BoardId, UserId};
use async_trait::async_trait;

/// Fetch a board by id (members of the owning workspace only)
#[derive(Debug, Deserialize)]
pub struct GetBoard {
    pub id: BoardId,
    pub caller: UserId,
}

impl GetBoard {
    pub fn new(id: impl Into<BoardId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for GetBoard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let board = ctx.board(&self.id).await?;
        let workspace = access::workspace_of_board(ctx, &board).await?;
        access::require_member(&workspace, &self.caller, "read board")?;

        Ok(serde_json::to_value(&board)?)
    }
}
