//! ListWorkspaces command

use serde::Deserialize;
use serde_json::Value;

use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::UserId;
use async_trait::async_trait;

/// List the workspaces a user belongs to
#[derive(Debug, Deserialize)]
pub struct ListWorkspaces {
    /// The member whose workspaces to list
    pub member: UserId,
}

impl ListWorkspaces {
    pub fn new(member: impl Into<UserId>) -> Self {
        Self {
            member: member.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for ListWorkspaces {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let workspaces = ctx.store().workspaces_for_member(&self.member).await?;
        Ok(serde_json::to_value(&workspaces)?)
    }
}
