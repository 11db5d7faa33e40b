//! Linkable-unit capacity arithmetic.
//!
//! The backend computes the maximum number of a (structure, area) unit type
//! sellable for a floor unit across the whole tower; this module derives the
//! remaining headroom against the in-progress draft. Add and remove both go
//! through [`apply_assignment_delta`] so the arithmetic cannot drift apart.

use crate::error::{DraftError, Result};

/// Derived capacity counters for the active (structure, area) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkableCapacity {
    total: u32,
    remaining: u32,
}

impl LinkableCapacity {
    /// Fresh capacity with nothing consumed.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    /// Capacity with some units already consumed by existing assignments.
    pub fn with_consumed(total: u32, consumed: u32) -> Self {
        Self {
            total,
            remaining: total.saturating_sub(consumed),
        }
    }

    /// The fail-closed capacity used when the backend fetch failed: `0/0`
    /// blocks every further addition.
    pub fn exhausted() -> Self {
        Self::new(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Apply a quantity change for the active pair and return the new capacity.
///
/// `quantity_delta` is per floor: positive for additions, negative for
/// removals and downward upserts. Rejects any result that would drive the
/// remaining count negative, leaving the input untouched; refunds clamp at
/// the fetched total.
pub fn apply_assignment_delta(
    capacity: LinkableCapacity,
    quantity_delta: i64,
    total_floors: u32,
) -> Result<LinkableCapacity> {
    let unit_delta = quantity_delta * i64::from(total_floors);
    let remaining = i64::from(capacity.remaining) - unit_delta;
    if remaining < 0 {
        return Err(DraftError::CapacityExceeded {
            requested: u32::try_from(unit_delta).unwrap_or(u32::MAX),
            remaining: capacity.remaining,
        });
    }
    let remaining = u32::try_from(remaining)
        .unwrap_or(capacity.total)
        .min(capacity.total);
    Ok(LinkableCapacity {
        total: capacity.total,
        remaining,
    })
}
