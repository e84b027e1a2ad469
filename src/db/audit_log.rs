//! Audit log of symptom checks and awareness alerts.
//!
//! Handlers talk to the [`AuditLog`] trait so the HTTP layer can be tested
//! against an in-memory database or a failing double. The SQLite
//! implementation serialises access to a single connection.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use super::repository::{
    get_awareness_alert, get_symptom_query, insert_awareness_alert, insert_symptom_query,
    list_awareness_alerts, list_symptom_queries,
};
use super::sqlite::{open_database, open_memory_database};
use super::DatabaseError;
use crate::models::{AwarenessAlert, NewAwarenessAlert, NewSymptomQuery, SymptomQuery};

/// Append-only store of triage runs and generated alerts.
pub trait AuditLog: Send + Sync {
    fn save_query(&self, query: &NewSymptomQuery) -> Result<i64, DatabaseError>;
    fn find_query(&self, id: i64) -> Result<Option<SymptomQuery>, DatabaseError>;
    fn list_queries(&self, limit: u32) -> Result<Vec<SymptomQuery>, DatabaseError>;

    fn save_alert(&self, alert: &NewAwarenessAlert) -> Result<i64, DatabaseError>;
    fn find_alert(&self, id: i64) -> Result<Option<AwarenessAlert>, DatabaseError>;
    fn list_alerts(&self, limit: u32) -> Result<Vec<AwarenessAlert>, DatabaseError>;
}

pub struct SqliteAuditLog {
    conn: Mutex<Connection>,
}

impl SqliteAuditLog {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (or create) the database file and run migrations.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::new(open_database(path)?))
    }

    pub fn in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::new(open_memory_database()?))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, DatabaseError> {
        self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)
    }
}

impl AuditLog for SqliteAuditLog {
    fn save_query(&self, query: &NewSymptomQuery) -> Result<i64, DatabaseError> {
        insert_symptom_query(&*self.conn()?, query)
    }

    fn find_query(&self, id: i64) -> Result<Option<SymptomQuery>, DatabaseError> {
        get_symptom_query(&*self.conn()?, id)
    }

    fn list_queries(&self, limit: u32) -> Result<Vec<SymptomQuery>, DatabaseError> {
        list_symptom_queries(&*self.conn()?, limit)
    }

    fn save_alert(&self, alert: &NewAwarenessAlert) -> Result<i64, DatabaseError> {
        insert_awareness_alert(&*self.conn()?, alert)
    }

    fn find_alert(&self, id: i64) -> Result<Option<AwarenessAlert>, DatabaseError> {
        get_awareness_alert(&*self.conn()?, id)
    }

    fn list_alerts(&self, limit: u32) -> Result<Vec<AwarenessAlert>, DatabaseError> {
        list_awareness_alerts(&*self.conn()?, limit)
    }
}
