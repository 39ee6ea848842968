use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use crate::grading::{
    Acknowledgement, FetchError, Participant, ParticipantSink, ParticipantSource, SaveError,
};

/// Participant rows of one training in the workspace database.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
    training_id: &'a str,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection, training_id: &'a str) -> Self {
        Self { conn, training_id }
    }
}

impl ParticipantSource for SqliteStore<'_> {
    fn fetch(&self, parent_id: &str) -> Result<Vec<Participant>, FetchError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, status, gpa, passed
             FROM participants
             WHERE training_id = ?
             ORDER BY sort_order, rowid",
        )?;
        let rows = stmt
            .query_map([parent_id], |row| {
                Ok(Participant {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    status: row.get(3)?,
                    gpa: row.get(4)?,
                    passed: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl ParticipantSink for SqliteStore<'_> {
    fn save(&mut self, serialized_participants: &str) -> Result<Acknowledgement, SaveError> {
        let rows: Vec<Participant> = serde_json::from_str(serialized_participants)?;

        // Rolled back on drop unless every row lands.
        let tx = self.conn.unchecked_transaction()?;
        for (i, p) in rows.iter().enumerate() {
            let owner: Option<String> = tx
                .query_row(
                    "SELECT training_id FROM participants WHERE id = ?",
                    [&p.id],
                    |r| r.get(0),
                )
                .optional()?;
            if let Some(owner) = owner {
                if owner != self.training_id {
                    return Err(SaveError::Conflict {
                        id: p.id.clone(),
                        owner,
                    });
                }
            }

            tx.execute(
                "INSERT INTO participants(id, training_id, name, email, status, gpa, passed, sort_order, updated_at)
                 VALUES(?, ?, ?, ?, ?, ?, ?, ?, strftime('%Y-%m-%dT%H:%M:%SZ','now'))
                 ON CONFLICT(id) DO UPDATE SET
                   name = excluded.name,
                   email = excluded.email,
                   status = excluded.status,
                   gpa = excluded.gpa,
                   passed = excluded.passed,
                   sort_order = excluded.sort_order,
                   updated_at = excluded.updated_at",
                (
                    &p.id,
                    self.training_id,
                    &p.name,
                    &p.email,
                    &p.status,
                    p.gpa,
                    p.passed,
                    i as i64,
                ),
            )?;
        }
        tx.commit()?;

        info!(training_id = %self.training_id, rows = rows.len(), "participant list written");
        Ok(Acknowledgement {
            saved: rows.len(),
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}
