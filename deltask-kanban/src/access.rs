//! Access evaluation: who may act on what.
//!
//! Every decision resolves against the governing workspace's member set, so
//! evaluating access for a board, column, or card means climbing the
//! containment chain to its workspace first. A broken link in the chain is a
//! NotFound, never a Forbidden - the two carry different remediation for the
//! caller.
//!
//! The rules, per entity level:
//! - workspace: rename, delete, and membership changes are owner-only;
//! - board: read and create take membership; rename takes the creator;
//!   delete takes the creator or the workspace owner;
//! - column and card: read, create, update, and delete all take membership.
//!   The creator restriction exists only at the board level.

use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::types::{Board, Card, Column, UserId, Workspace};

/// A user's standing in a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceRole {
    Owner,
    Member,
    None,
}

/// Resolve `user`'s role in `workspace`.
pub fn role_in(workspace: &Workspace, user: &UserId) -> WorkspaceRole {
    if workspace.is_owner(user) {
        WorkspaceRole::Owner
    } else if workspace.is_member(user) {
        WorkspaceRole::Member
    } else {
        WorkspaceRole::None
    }
}

/// Require membership (owner counts). `action` names the refused operation in
/// the Forbidden error.
pub fn require_member(workspace: &Workspace, user: &UserId, action: &str) -> Result<()> {
    match role_in(workspace, user) {
        WorkspaceRole::Owner | WorkspaceRole::Member => Ok(()),
        WorkspaceRole::None => Err(DeltaskError::forbidden(action)),
    }
}

/// Require ownership.
pub fn require_owner(workspace: &Workspace, user: &UserId, action: &str) -> Result<()> {
    match role_in(workspace, user) {
        WorkspaceRole::Owner => Ok(()),
        _ => Err(DeltaskError::forbidden(action)),
    }
}

/// The workspace governing a board.
pub async fn workspace_of_board(ctx: &DeltaskContext, board: &Board) -> Result<Workspace> {
    ctx.workspace(&board.workspace).await
}

/// The workspace governing a column: column -> board -> workspace.
pub async fn workspace_of_column(ctx: &DeltaskContext, column: &Column) -> Result<Workspace> {
    let board = ctx.board(&column.board).await?;
    workspace_of_board(ctx, &board).await
}

/// The workspace governing a card, via its denormalized board reference.
pub async fn workspace_of_card(ctx: &DeltaskContext, card: &Card) -> Result<Workspace> {
    let board = ctx.board(&card.board).await?;
    workspace_of_board(ctx, &board).await
}
