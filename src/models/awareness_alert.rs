use serde::Serialize;

use crate::triage::language::Localized;

/// An awareness alert about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAwarenessAlert {
    pub event: String,
    pub messages: Localized<String>,
}

/// A stored awareness alert. `messages` always carries `en`, `hi` and `bn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwarenessAlert {
    pub id: i64,
    pub event: String,
    pub messages: Localized<String>,
    pub created_at: String,
}
