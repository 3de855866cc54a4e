//! Position-index maintenance for sibling sequences.
//!
//! Columns under a board and cards under a column carry an integer `order`;
//! listings sort ascending by it. The scheme is append-at-end on insert and
//! per-item overwrite on reorder:
//!
//! - insertion without an explicit order appends (max + 1, or 0 when the
//!   sibling set is empty) and never renumbers existing siblings;
//! - an explicit reorder is a batch of per-sibling order overwrites, last
//!   write wins per item, no cross-entity transaction. Racing writers can
//!   transiently produce duplicate or inverted values; only relative order
//!   matters and reapplying the same target order is a no-op, so idempotent
//!   retries are safe;
//! - removal leaves gaps. Gaps are permitted and never compacted.

/// Order value that appends after the given sibling orders: one past the
/// maximum, or 0 when there are no siblings.
pub fn append_order<I>(sibling_orders: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    sibling_orders
        .into_iter()
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}

/// The effective order for a new or moved item: the explicit request if one
/// was given, otherwise append-at-end.
pub fn placement<I>(requested: Option<i64>, sibling_orders: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    requested.unwrap_or_else(|| append_order(sibling_orders))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_on_empty_is_zero() {
        assert_eq!(append_order([]), 0);
    }

    #[test]
    fn test_append_is_max_plus_one() {
        assert_eq!(append_order([0, 1, 2]), 3);
        // Gaps don't matter, only the maximum does
        assert_eq!(append_order([0, 7]), 8);
        // Orders are signed
        assert_eq!(append_order([-5, -2]), -1);
    }

    #[test]
    fn test_placement_prefers_explicit_order() {
        assert_eq!(placement(Some(1), [0, 1, 2]), 1);
        assert_eq!(placement(None, [0, 1, 2]), 3);
        assert_eq!(placement(None, []), 0);
    }
}
