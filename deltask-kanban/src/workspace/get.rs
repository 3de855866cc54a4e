//! GetWorkspace command

use serde::Deserialize;
use serde_json::Value;

use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::types::WorkspaceId;
use async_trait::async_trait;

/// Fetch a workspace by id.
///
/// Carries no caller: the reference behavior performs no membership check on
/// a direct workspace read.
#[derive(Debug, Deserialize)]
pub struct GetWorkspace {
    pub id: WorkspaceId,
}

impl GetWorkspace {
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<DeltaskContext, DeltaskError> for GetWorkspace {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let workspace = ctx.workspace(&self.id).await?;
        Ok(serde_json::to_value(&workspace)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::CreateWorkspace;

    #[tokio::test]
    async fn test_get_workspace() {
        let ctx = DeltaskContext::in_memory();
        let created = CreateWorkspace::new("Platform", "alice")
            .execute(&ctx)
            .await
            .unwrap();

        let result = GetWorkspace::new(created["id"].as_str().unwrap())
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["name"], "Platform");
    }

    #[tokio::test]
    async fn test_get_missing_workspace() {
        let ctx = DeltaskContext::in_memory();

        let result = GetWorkspace::new("missing").execute(&ctx).await;
        assert!(matches!(result, Err(DeltaskError::WorkspaceNotFound { .. })));
    }
}
