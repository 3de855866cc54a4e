//! DeleteCard command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{CardId, UserId};
use async_trait::async_trait;

/// Delete a card. Any member of the governing workspace may do this.
#[derive(Debug, Deserialize)]
pub struct DeleteCard {
    pub id: CardId,
    pub caller: UserId,
}

impl DeleteCard {
    pub fn new(id: impl Into<CardId>, caller: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for DeleteCard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let card = ctx.card(&self.id).await?;
        let workspace = access::workspace_of_card(ctx, &card).await?;
        access::require_member(&workspace, &self.caller, "delete card")?;

        ctx.store().delete_card(&self.id).await?;

        Ok(json!({"deleted": true, "id": self.id}))
    }
}
