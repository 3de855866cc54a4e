//! ListCards command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{ColumnId, UserId};
use async_trait::async_trait;

/// List a column's cards, sorted ascending by order (members only)
#[derive(Debug, Deserialize)]
pub struct ListCards {
    pub column: ColumnId,
    pub caller: UserId,
}

impl ListCards {
    pub fn new(column: impl Into<ColumnId>, caller: impl Into<UserId>) -> Self {
        Self {
            column: column.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for ListCards {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let column = ctx.column(&self.column).await?;
        let workspace = access::workspace_of_column(ctx, &column).await?;
        access::require_member(&workspace, &self.caller, "list cards")?;

        let cards = ctx.store().cards_in_column(&column.id).await?;
        Ok(serde_json::to_value(&cards)?)
    }
}
