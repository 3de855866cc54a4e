//! CreateWorkspace command

use serde::Deserialize;
use serde_json::Value;

use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::{UserId, Workspace};
use async_trait::async_trait;

/// Create a new workspace owned by the caller
#[derive(Debug, Deserialize)]
pub struct CreateWorkspace {
    /// The workspace name (required, non-blank)
    pub name: String,
    /// The owner; becomes the sole initial member
    pub owner: UserId,
}

impl CreateWorkspace {
    pub fn new(name: impl Into<String>, owner: impl Into<UserId>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for CreateWorkspace {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        if self.name.trim().is_empty() {
            return Err(DeltaskError::missing_field("name"));
        }

        let workspace = Workspace::new(self.name.clone(), self.owner.clone());
        ctx.store().insert_workspace(workspace.clone()).await?;

        Ok(serde_json::to_value(&workspace)?)
    }
}
