//! MoveCard command

use serde::Deserialize;
use serde_json::Value;

use crate::access;
use crate::context::DeltaskContext;
use crate::error::{DeltaskError, Result};
use crate::execute::Execute;
use crate::ordering;
use crate::types::{Card, CardId, CardPatch, Column, ColumnId, UserId};
use async_trait::async_trait;

/// Resolve a card's destination for a move: validates the destination column,
/// requires the caller's membership in its governing workspace, and computes
/// the order (explicit, or appended after the destination's cards). The
/// moving card is excluded from the sibling scan so a move within its own
/// column still lands at the end.
pub(super) async fn destination(
    ctx: &DeltaskContext,
    card: &Card,
    dest: &ColumnId,
    requested_order: Option<i64>,
    caller: &UserId,
) -> Result<(Column, i64)> {
    let column = ctx.column(dest).await?;
    let workspace = access::workspace_of_column(ctx, &column).await?;
    access::require_member(&workspace, caller, "move card")?;

    let siblings = ctx.store().cards_in_column(&column.id).await?;
    let order = ordering::placement(
        requested_order,
        siblings
            .iter()
            .filter(|c| c.id != card.id)
            .map(|c| c.order),
    );
    Ok((column, order))
}

/// Move a card to another column, in one logical operation: re-parent it,
/// re-point its denormalized board reference at the destination column's
/// board, and place it at the requested position (or the end). Cards left in
/// the source column keep their orders; gaps are fine.
///
/// Requires membership in both the card's and the destination's governing
/// workspaces.
#[derive(Debug, Deserialize)]
pub struct MoveCard {
    pub id: CardId,
    /// The destination column
    pub column: ColumnId,
    /// Position among the destination's cards; append-at-end when absent
    pub order: Option<i64>,
    pub caller: UserId,
}

impl MoveCard {
    pub fn new(
        id: impl Into<CardId>,
        column: impl Into<ColumnId>,
        caller: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
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
impl Execute<DeltaskContext, DeltaskError> for MoveCard {
    async fn execute(&self, ctx: &DeltaskContext) -> Result<Value> {
        let card = ctx.card(&self.id).await?;
        let workspace = access::workspace_of_card(ctx, &card).await?;
        access::require_member(&workspace, &self.caller, "move card")?;

        let (column, order) = destination(ctx, &card, &self.column, self.order, &self.caller).await?;

        let patch = CardPatch {
            column: Some(column.id),
            board: Some(column.board),
            order: Some(order),
            ..CardPatch::default()
        };
        let updated = ctx
            .store()
            .update_card(&self.id, patch)
            .await?
            .ok_or_else(|| DeltaskError::CardNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::to_value(&updated)?)
    }
}
