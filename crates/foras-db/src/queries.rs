use crate::Database;
use crate::models::{MessageRow, OpportunityRow, ReplyRow};
use anyhow::Result;
use rusqlite::Connection;
use tracing::warn;

impl Database {
    // -- Opportunities --

    pub fn insert_opportunity(&self, row: &OpportunityRow) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO opportunities
                     (id, title, organization, location, kind, description,
                      deadline, tags, salary, posted_at, contact_email, contact_phone)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                rusqlite::params![
                    row.id,
                    row.title,
                    row.organization,
                    row.location,
                    row.kind,
                    row.description,
                    row.deadline,
                    row.tags,
                    row.salary,
                    row.posted_at,
                    row.contact_email,
                    row.contact_phone,
                ],
            )?;
            Ok(())
        })
    }

    /// All listings, newest-first (prepend-on-insert ordering).
    pub fn list_opportunities(&self) -> Result<Vec<OpportunityRow>> {
        self.with_conn(query_opportunities)
    }

    pub fn get_opportunity_title(&self, id: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT title FROM opportunities WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()
        })
    }

    // -- Messages --

    pub fn insert_message(&self, row: &MessageRow) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO messages
                     (id, opportunity_id, opportunity_title, sender_name,
                      sender_email, content, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    row.id,
                    row.opportunity_id,
                    row.opportunity_title,
                    row.sender_name,
                    row.sender_email,
                    row.content,
                    row.created_at,
                ],
            )?;
            Ok(())
        })
    }

    /// All inquiries, newest-first. The local store is a single-user
    /// device store, so there is no identity scoping here.
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }

    /// Append one reply. Returns false (and inserts nothing) when no
    /// message matches — the caller treats that as a silent no-op.
    pub fn insert_reply(&self, row: &ReplyRow) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let exists: Option<String> = conn
                .query_row(
                    "SELECT id FROM messages WHERE id = ?1",
                    [&row.message_id],
                    |r| r.get(0),
                )
                .optional()?;

            if exists.is_none() {
                warn!("Reply to unknown message {} ignored", row.message_id);
                return Ok(false);
            }

            conn.execute(
                "INSERT INTO replies (id, message_id, content, is_from_owner, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    row.id,
                    row.message_id,
                    row.content,
                    row.is_from_owner,
                    row.created_at,
                ],
            )?;
            Ok(true)
        })
    }

    /// Batch-fetch replies for a set of message IDs, in append order.
    pub fn get_replies_for_messages(&self, message_ids: &[String]) -> Result<Vec<ReplyRow>> {
        if message_ids.is_empty() {
            return Ok(vec![]);
        }

        self.with_conn(|conn| {
            let placeholders: Vec<String> = (1..=message_ids.len()).map(|i| format!("?{}", i)).collect();
            let sql = format!(
                "SELECT id, message_id, content, is_from_owner, created_at
                 FROM replies
                 WHERE message_id IN ({})
                 ORDER BY created_at ASC, rowid ASC",
                placeholders.join(", ")
            );

            let mut stmt = conn.prepare(&sql)?;
            let params: Vec<&dyn rusqlite::types::ToSql> = message_ids
                .iter()
                .map(|id| id as &dyn rusqlite::types::ToSql)
                .collect();

            let rows = stmt
                .query_map(params.as_slice(), |row| {
                    Ok(ReplyRow {
                        id: row.get(0)?,
                        message_id: row.get(1)?,
                        content: row.get(2)?,
                        is_from_owner: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

fn query_opportunities(conn: &Connection) -> Result<Vec<OpportunityRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, organization, location, kind, description,
                deadline, tags, salary, posted_at, contact_email, contact_phone
         FROM opportunities
         ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(OpportunityRow {
                id: row.get(0)?,
                title: row.get(1)?,
                organization: row.get(2)?,
                location: row.get(3)?,
                kind: row.get(4)?,
                description: row.get(5)?,
                deadline: row.get(6)?,
                tags: row.get(7)?,
                salary: row.get(8)?,
                posted_at: row.get(9)?,
                contact_email: row.get(10)?,
                contact_phone: row.get(11)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, opportunity_id, opportunity_title, sender_name,
                sender_email, content, created_at
         FROM messages
         ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                opportunity_id: row.get(1)?,
                opportunity_title: row.get(2)?,
                sender_name: row.get(3)?,
                sender_email: row.get(4)?,
                content: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
