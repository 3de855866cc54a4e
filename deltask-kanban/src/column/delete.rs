//! DeleteColumn command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{ColumnId, UserId};
use async_trait::async_trait;

/// Delete a column (workspace members only).
///
/// Cards in the column are not deleted; remaining sibling columns keep their
/// orders, gaps included.
#[derive(Debug, Deserialize)]
pub struct DeleteColumn {
    pub id: ColumnId,
    pub caller: UserId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for DeleteColumn {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let column = ctx.column(&self.id).await?;
        let workspace = access::workspace_of_column(ctx, &column).await?;
        access::require_member(&workspace, &self.caller, "delete column")?;

        ctx.store().delete_column(&self.id).await?;

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string()
        }))
    }
}
