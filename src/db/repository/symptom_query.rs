use rusqlite::{params, Connection, OptionalExtension, Row};

use super::clamp_limit;
use crate::db::DatabaseError;
use crate::models::{NewSymptomQuery, QueryClassification, SymptomQuery};

const SELECT_COLUMNS: &str = "SELECT id, user_lang, original_text, english_text, classification,
     advice, confidence, created_at FROM symptom_queries";

/// Insert a symptom query and return its row id.
pub fn insert_symptom_query(
    conn: &Connection,
    query: &NewSymptomQuery,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO symptom_queries (user_lang, original_text, english_text, classification, advice, confidence)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            query.user_lang,
            query.original_text,
            query.english_text,
            serde_json::to_string(&query.classification)?,
            serde_json::to_string(&query.advice)?,
            query.confidence,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_symptom_query(conn: &Connection, id: i64) -> Result<Option<SymptomQuery>, DatabaseError> {
    let raw = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            read_row,
        )
        .optional()?;
    raw.map(SymptomQueryRow::into_query).transpose()
}

/// Most recent symptom queries first.
pub fn list_symptom_queries(conn: &Connection, limit: u32) -> Result<Vec<SymptomQuery>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?1"
    ))?;
    let rows = stmt
        .query_map(params![clamp_limit(limit)], read_row)?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(SymptomQueryRow::into_query).collect()
}

struct SymptomQueryRow {
    id: i64,
    user_lang: String,
    original_text: String,
    english_text: Option<String>,
    classification: Option<String>,
    advice: Option<String>,
    confidence: Option<f64>,
    created_at: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<SymptomQueryRow> {
    Ok(SymptomQueryRow {
        id: row.get(0)?,
        user_lang: row.get(1)?,
        original_text: row.get(2)?,
        english_text: row.get(3)?,
        classification: row.get(4)?,
        advice: row.get(5)?,
        confidence: row.get(6)?,
        created_at: row.get(7)?,
    })
}

impl SymptomQueryRow {
    fn into_query(self) -> Result<SymptomQuery, DatabaseError> {
        let classification = self
            .classification
            .as_deref()
            .map(serde_json::from_str::<QueryClassification>)
            .transpose()?;
        let advice = match self.advice.as_deref() {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };
        Ok(SymptomQuery {
            id: self.id,
            user_lang: self.user_lang,
            original_text: self.original_text,
            english_text: self.english_text,
            classification,
            advice,
            confidence: self.confidence,
            created_at: self.created_at,
        })
    }
}
