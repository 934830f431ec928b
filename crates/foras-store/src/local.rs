use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{error, warn};
use uuid::Uuid;

use foras_db::Database;
use foras_db::models::{MessageRow, OpportunityRow, ReplyRow};
use foras_types::api::{NewMessage, NewOpportunity};
use foras_types::models::{Message, Opportunity, OpportunityType, Reply};

use crate::adapter::StoreAdapter;
use crate::error::StoreError;

/// Local device store backed by SQLite. Single-user: message visibility
/// is not scoped and writes are not identity-gated.
pub struct LocalStore {
    db: Arc<Database>,
}

impl LocalStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Run a blocking rusqlite call off the async runtime.
    async fn run_blocking<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                StoreError::unavailable(e)
            })?
            .map_err(StoreError::unavailable)
    }
}

#[async_trait]
impl StoreAdapter for LocalStore {
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, StoreError> {
        let rows = self.run_blocking(|db| db.list_opportunities()).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                match decode_opportunity(row) {
                    Ok(opp) => Some(opp),
                    Err(e) => {
                        warn!("Skipping corrupt listing '{}': {}", id, e);
                        None
                    }
                }
            })
            .collect())
    }

    async fn create_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, StoreError> {
        let id = Uuid::new_v4();
        let posted_at = Utc::now().date_naive();

        let row = OpportunityRow {
            id: id.to_string(),
            title: new.title.clone(),
            organization: new.organization.clone(),
            location: new.location.clone(),
            kind: new.kind.as_str().to_string(),
            description: new.description.clone(),
            deadline: new.deadline.format("%Y-%m-%d").to_string(),
            tags: serde_json::to_string(&new.tags).map_err(StoreError::unavailable)?,
            salary: new.salary.clone(),
            posted_at: posted_at.format("%Y-%m-%d").to_string(),
            contact_email: new.contact_email.clone(),
            contact_phone: new.contact_phone.clone(),
        };

        self.run_blocking(move |db| db.insert_opportunity(&row)).await?;

        Ok(Opportunity {
            id,
            title: new.title,
            organization: new.organization,
            location: new.location,
            kind: new.kind,
            description: new.description,
            deadline: new.deadline,
            tags: new.tags,
            salary: new.salary,
            posted_at,
            contact_email: new.contact_email,
            contact_phone: new.contact_phone,
        })
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let (rows, reply_rows) = self
            .run_blocking(|db| {
                let rows = db.list_messages()?;
                let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
                let replies = db.get_replies_for_messages(&ids)?;
                Ok((rows, replies))
            })
            .await?;

        // Group replies by message id, keeping append order.
        let mut by_message: HashMap<String, Vec<Reply>> = HashMap::new();
        for row in reply_rows {
            let message_id = row.message_id.clone();
            match decode_reply(row) {
                Ok(reply) => by_message.entry(message_id).or_default().push(reply),
                Err(e) => warn!("Skipping corrupt reply on message '{}': {}", message_id, e),
            }
        }

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                let replies = by_message.remove(&id).unwrap_or_default();
                match decode_message(row, replies) {
                    Ok(msg) => Some(msg),
                    Err(e) => {
                        warn!("Skipping corrupt message '{}': {}", id, e);
                        None
                    }
                }
            })
            .collect())
    }

    async fn send_message(&self, new: NewMessage) -> Result<(), StoreError> {
        let row_id = Uuid::new_v4().to_string();
        let opportunity_id = new.opportunity_id.to_string();
        let created_at = Utc::now().to_rfc3339();

        self.run_blocking(move |db| {
            // Denormalize the title at send time; a dangling reference
            // yields an empty title rather than an error.
            let title = db.get_opportunity_title(&opportunity_id)?.unwrap_or_default();

            db.insert_message(&MessageRow {
                id: row_id,
                opportunity_id,
                opportunity_title: title,
                sender_name: new.sender_name,
                sender_email: new.sender_email,
                content: new.content,
                created_at,
            })
        })
        .await
    }

    async fn reply_to_message(&self, message_id: Uuid, content: &str) -> Result<(), StoreError> {
        let row = ReplyRow {
            id: Uuid::new_v4().to_string(),
            message_id: message_id.to_string(),
            content: content.to_string(),
            is_from_owner: true,
            created_at: Utc::now().to_rfc3339(),
        };

        // A missing message is a silent no-op; the db layer logs it.
        self.run_blocking(move |db| db.insert_reply(&row)).await?;
        Ok(())
    }
}

fn decode_opportunity(row: OpportunityRow) -> anyhow::Result<Opportunity> {
    let tags: Vec<String> = serde_json::from_str(&row.tags).unwrap_or_else(|e| {
        warn!("Corrupt tags on listing '{}': {}", row.id, e);
        vec![]
    });

    Ok(Opportunity {
        id: row.id.parse()?,
        title: row.title,
        organization: row.organization,
        location: row.location,
        kind: row.kind.parse::<OpportunityType>().map_err(anyhow::Error::msg)?,
        description: row.description,
        deadline: parse_date(&row.deadline)?,
        tags,
        salary: row.salary,
        posted_at: parse_date(&row.posted_at)?,
        contact_email: row.contact_email,
        contact_phone: row.contact_phone,
    })
}

fn decode_message(row: MessageRow, replies: Vec<Reply>) -> anyhow::Result<Message> {
    Ok(Message {
        id: row.id.parse()?,
        opportunity_id: row.opportunity_id.parse()?,
        opportunity_title: row.opportunity_title,
        sender_name: row.sender_name,
        sender_email: row.sender_email,
        content: row.content,
        timestamp: parse_timestamp(&row.created_at)?,
        replies,
    })
}

fn decode_reply(row: ReplyRow) -> anyhow::Result<Reply> {
    Ok(Reply {
        id: row.id.parse()?,
        content: row.content,
        timestamp: parse_timestamp(&row.created_at)?,
        is_from_owner: row.is_from_owner,
    })
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<Utc>> {
    value.parse::<DateTime<Utc>>().or_else(|_| {
        // SQLite column defaults are "YYYY-MM-DD HH:MM:SS" without
        // timezone. Parse as naive UTC and convert.
        chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
            .map(|ndt| ndt.and_utc())
            .map_err(Into::into)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_parses_rfc3339_and_sqlite_default_forms() {
        let rfc = parse_timestamp("2026-02-01T10:00:00+00:00").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2026-02-01T10:00:00+00:00");

        let naive = parse_timestamp("2026-02-01 10:00:00").unwrap();
        assert_eq!(naive, rfc);

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn corrupt_tags_degrade_to_empty() {
        let row = OpportunityRow {
            id: Uuid::new_v4().to_string(),
            title: "t".into(),
            organization: "o".into(),
            location: "l".into(),
            kind: "JOB".into(),
            description: String::new(),
            deadline: "2026-12-31".into(),
            tags: "not json".into(),
            salary: None,
            posted_at: "2026-01-01".into(),
            contact_email: "e".into(),
            contact_phone: "p".into(),
        };

        let opp = decode_opportunity(row).unwrap();
        assert!(opp.tags.is_empty());
    }
}
