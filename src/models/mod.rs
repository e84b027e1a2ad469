//! Persisted records of the audit log.

pub mod awareness_alert;
pub mod symptom_query;

pub use awareness_alert::*;
pub use symptom_query::*;
