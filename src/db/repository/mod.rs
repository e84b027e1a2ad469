//! Repository layer: entity-scoped database operations over a borrowed
//! `Connection`.

mod awareness_alert;
mod symptom_query;

pub use awareness_alert::*;
pub use symptom_query::*;

/// Rows returned by list queries when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Upper bound on rows returned by a single list query.
pub const MAX_LIST_LIMIT: u32 = 1000;

pub(crate) fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LIST_LIMIT)
}
