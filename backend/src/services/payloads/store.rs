//! Owner-scoped persistence for saved payloads.
//!
//! Every operation takes the resolved owner id explicitly and goes straight
//! to SQLite; nothing is cached. Records are immutable once written.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use common::model::customization::Customization;
use common::model::payload::{FieldSet, SavedPayload};
use rusqlite::{params, Connection};
use uuid::Uuid;

/// History reads are capped: clients always get at most this many records,
/// newest first.
pub const HISTORY_LIMIT: u32 = 50;

/// Inserts one saved payload owned by `owner_id` and returns its new id.
pub fn insert(
    conn: &Connection,
    owner_id: &str,
    payload: &FieldSet,
    content: &str,
    customization: Option<&Customization>,
) -> Result<String, ApiError> {
    let id = Uuid::new_v4().to_string();
    let fields_json =
        serde_json::to_string(&payload.fields).map_err(|e| ApiError::Storage(e.to_string()))?;
    let customization_json = customization
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    conn.execute(
        "INSERT INTO payloads (id, owner_id, kind, content, title, fields, customization, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            owner_id,
            payload.kind,
            content,
            payload.title,
            fields_json,
            customization_json,
            Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| ApiError::Storage(e.to_string()))?;

    Ok(id)
}

/// Returns the owner's saved payloads in descending creation order, capped
/// at `limit`.
pub fn list_latest(
    conn: &Connection,
    owner_id: &str,
    limit: u32,
) -> Result<Vec<SavedPayload>, ApiError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, owner_id, kind, content, title, fields, customization, created_at
             FROM payloads
             WHERE owner_id = ?1
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?2",
        )
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    let rows = stmt
        .query_map(params![owner_id, limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, Option<String>>(6)?,
                row.get::<_, String>(7)?,
            ))
        })
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    let mut payloads = Vec::new();
    for row in rows {
        let (id, owner_id, kind, content, title, fields, customization, created_at) =
            row.map_err(|e| ApiError::Storage(e.to_string()))?;
        payloads.push(SavedPayload {
            id,
            owner_id,
            kind,
            content,
            title,
            fields: parse_json_column(fields.as_deref())?,
            customization: parse_json_column(customization.as_deref())?,
            created_at: parse_created_at(&created_at)?,
        });
    }
    Ok(payloads)
}

/// Deletes a payload only if it exists and belongs to `owner_id`. A missing
/// record and someone else's record are indistinguishable to the caller.
pub fn delete_by_id(conn: &Connection, id: &str, owner_id: &str) -> Result<(), ApiError> {
    let affected = conn
        .execute(
            "DELETE FROM payloads WHERE id = ?1 AND owner_id = ?2",
            params![id, owner_id],
        )
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }
    Ok(())
}

fn parse_json_column<T: serde::de::DeserializeOwned>(
    column: Option<&str>,
) -> Result<Option<T>, ApiError> {
    column
        .map(|json| serde_json::from_str(json))
        .transpose()
        .map_err(|e| ApiError::Storage(e.to_string()))
}

fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApiError::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use common::model::payload::PayloadFields;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn
    }

    fn sample(kind: &str, value: &str, title: Option<&str>) -> FieldSet {
        FieldSet {
            kind: kind.to_string(),
            fields: PayloadFields {
                value: Some(value.to_string()),
                ..Default::default()
            },
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn insert_then_list_returns_newest_first() {
        let conn = test_conn();
        for value in ["first", "second", "third"] {
            insert(&conn, "owner-a", &sample("text", value, None), value, None).unwrap();
        }

        let history = list_latest(&conn, "owner-a", HISTORY_LIMIT).unwrap();
        let contents: Vec<&str> = history.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, ["third", "second", "first"]);
    }

    #[test]
    fn list_caps_at_limit() {
        let conn = test_conn();
        for i in 0..5 {
            let value = format!("v{}", i);
            insert(&conn, "owner-a", &sample("text", &value, None), &value, None).unwrap();
        }
        assert_eq!(list_latest(&conn, "owner-a", 3).unwrap().len(), 3);
    }

    #[test]
    fn list_is_owner_scoped() {
        let conn = test_conn();
        insert(&conn, "owner-a", &sample("text", "mine", None), "mine", None).unwrap();
        insert(&conn, "owner-b", &sample("text", "theirs", None), "theirs", None).unwrap();

        let history = list_latest(&conn, "owner-a", HISTORY_LIMIT).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].content, "mine");
        assert_eq!(history[0].owner_id, "owner-a");
    }

    #[test]
    fn delete_requires_matching_owner() {
        let conn = test_conn();
        let id = insert(&conn, "owner-a", &sample("text", "keep", None), "keep", None).unwrap();

        assert!(matches!(
            delete_by_id(&conn, &id, "owner-b"),
            Err(ApiError::NotFoundOrForbidden)
        ));
        // Still there for its real owner.
        assert_eq!(list_latest(&conn, "owner-a", HISTORY_LIMIT).unwrap().len(), 1);

        delete_by_id(&conn, &id, "owner-a").unwrap();
        assert!(list_latest(&conn, "owner-a", HISTORY_LIMIT).unwrap().is_empty());
    }

    #[test]
    fn delete_of_missing_record_is_not_found() {
        let conn = test_conn();
        assert!(matches!(
            delete_by_id(&conn, "no-such-id", "owner-a"),
            Err(ApiError::NotFoundOrForbidden)
        ));
    }

    #[test]
    fn fields_and_customization_round_trip() {
        let conn = test_conn();
        let payload = sample("url", "https://example.com", Some("Example"));
        let customization = Customization {
            size: Some(400),
            color: Some("112233".into()),
            ..Default::default()
        };
        insert(
            &conn,
            "owner-a",
            &payload,
            "https://example.com",
            Some(&customization),
        )
        .unwrap();

        let history = list_latest(&conn, "owner-a", HISTORY_LIMIT).unwrap();
        let saved = &history[0];
        assert_eq!(saved.kind, "url");
        assert_eq!(saved.title.as_deref(), Some("Example"));
        let fields = saved.fields.as_ref().unwrap();
        assert_eq!(fields.value.as_deref(), Some("https://example.com"));
        let customization = saved.customization.as_ref().unwrap();
        assert_eq!(customization.size, Some(400));
        assert_eq!(customization.color.as_deref(), Some("112233"));
    }
}
