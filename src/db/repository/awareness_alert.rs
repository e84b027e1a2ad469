use rusqlite::{params, Connection, OptionalExtension};

use super::clamp_limit;
use crate::db::DatabaseError;
use crate::models::{AwarenessAlert, NewAwarenessAlert};

/// Insert an awareness alert and return its row id.
pub fn insert_awareness_alert(
    conn: &Connection,
    alert: &NewAwarenessAlert,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO awareness_alerts (event, messages) VALUES (?1, ?2)",
        params![alert.event, serde_json::to_string(&alert.messages)?],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_awareness_alert(
    conn: &Connection,
    id: i64,
) -> Result<Option<AwarenessAlert>, DatabaseError> {
    let raw = conn
        .query_row(
            "SELECT id, event, messages, created_at FROM awareness_alerts WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;
    raw.map(alert_from_row).transpose()
}

/// Most recent awareness alerts first.
pub fn list_awareness_alerts(
    conn: &Connection,
    limit: u32,
) -> Result<Vec<AwarenessAlert>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, event, messages, created_at FROM awareness_alerts
         ORDER BY created_at DESC, id DESC LIMIT ?1",
    )?;
    let rows = stmt
        .query_map(params![clamp_limit(limit)], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(alert_from_row).collect()
}

fn alert_from_row(
    (id, event, messages, created_at): (i64, String, String, String),
) -> Result<AwarenessAlert, DatabaseError> {
    Ok(AwarenessAlert {
        id,
        event,
        messages: serde_json::from_str(&messages)?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awareness::awareness_messages;
    use crate::db::sqlite::open_memory_database;

    fn alert(event: &str) -> NewAwarenessAlert {
        NewAwarenessAlert {
            event: event.to_string(),
            messages: awareness_messages(event),
        }
    }

    #[test]
    fn insert_and_get() {
        let conn = open_memory_database().unwrap();
        let id = insert_awareness_alert(&conn, &alert("Dengue outbreak")).unwrap();

        let stored = get_awareness_alert(&conn, id).unwrap().unwrap();
        assert_eq!(stored.event, "Dengue outbreak");
        assert_eq!(stored.messages.bn, "স্বাস্থ্য সচেতনতা: Dengue outbreak");
        assert_eq!(stored.messages.en, "Health awareness: Dengue outbreak");
    }

    #[test]
    fn get_missing_returns_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_awareness_alert(&conn, 7).unwrap().is_none());
    }

    #[test]
    fn list_newest_first() {
        let conn = open_memory_database().unwrap();
        insert_awareness_alert(&conn, &alert("Flu")).unwrap();
        insert_awareness_alert(&conn, &alert("Heatwave")).unwrap();

        let alerts = list_awareness_alerts(&conn, 10).unwrap();
        let events: Vec<_> = alerts.iter().map(|a| a.event.as_str()).collect();
        assert_eq!(events, vec!["Heatwave", "Flu"]);
    }

    #[test]
    fn messages_missing_a_language_are_rejected_on_read() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO awareness_alerts (event, messages) VALUES ('Flu', '{\"en\":\"x\"}')",
            [],
        )
        .unwrap();
        let err = list_awareness_alerts(&conn, 10).unwrap_err();
        assert!(matches!(err, DatabaseError::Serialization(_)));
    }
}
