use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foras_types::api::NewOpportunity;
use foras_types::models::{Message, Opportunity, OpportunityType, Reply};

/// Wire row for the hosted `opportunities` table. Carries one column
/// the domain model does not: `owner_id`, the poster's identity, which
/// scopes inbox queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub description: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub salary: Option<String>,
    pub posted_at: NaiveDate,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

impl OpportunityRecord {
    pub fn from_new(new: &NewOpportunity, id: Uuid, posted_at: NaiveDate, owner_id: Uuid) -> Self {
        Self {
            id,
            title: new.title.clone(),
            organization: new.organization.clone(),
            location: new.location.clone(),
            kind: new.kind,
            description: new.description.clone(),
            deadline: new.deadline,
            tags: new.tags.clone(),
            salary: new.salary.clone(),
            posted_at,
            contact_email: new.contact_email.clone(),
            contact_phone: new.contact_phone.clone(),
            owner_id: Some(owner_id),
        }
    }
}

impl From<OpportunityRecord> for Opportunity {
    fn from(record: OpportunityRecord) -> Self {
        Opportunity {
            id: record.id,
            title: record.title,
            organization: record.organization,
            location: record.location,
            kind: record.kind,
            description: record.description,
            deadline: record.deadline,
            tags: record.tags,
            salary: record.salary,
            posted_at: record.posted_at,
            contact_email: record.contact_email,
            contact_phone: record.contact_phone,
        }
    }
}

/// Wire row for the hosted `messages` table. Replies live in a JSON
/// array column, appended read-modify-write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    #[serde(default)]
    pub opportunity_title: String,
    pub sender_name: String,
    pub sender_email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message {
            id: record.id,
            opportunity_id: record.opportunity_id,
            opportunity_title: record.opportunity_title,
            sender_name: record.sender_name,
            sender_email: record.sender_email,
            content: record.content,
            timestamp: record.created_at,
            replies: record.replies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunity_record_decodes_service_rows() {
        let json = r#"{
            "id": "0b9fcb60-9f5b-4a3e-97f0-0f6e5f7c8a21",
            "title": "Backend Engineer",
            "organization": "Acme Corp",
            "location": "الرياض",
            "type": "JOB",
            "description": "Run the backend",
            "deadline": "2026-12-31",
            "tags": ["JOB", "الرياض"],
            "salary": null,
            "posted_at": "2026-08-01",
            "contact_email": "hr@acme.test",
            "contact_phone": "+96650000000",
            "owner_id": "b4b2bb3e-54a5-4b1f-8cb7-9f3f6a3a1d55"
        }"#;

        let record: OpportunityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, OpportunityType::Job);
        assert!(record.owner_id.is_some());

        let opp: Opportunity = record.into();
        assert_eq!(opp.title, "Backend Engineer");
        assert_eq!(opp.tags.len(), 2);
    }

    #[test]
    fn message_record_defaults_missing_replies_to_empty() {
        let json = r#"{
            "id": "8f2a4cf9-41d4-4a3e-b21f-97a9f3b6a001",
            "opportunity_id": "0b9fcb60-9f5b-4a3e-97f0-0f6e5f7c8a21",
            "sender_name": "Sara",
            "sender_email": "s@x.com",
            "content": "Interested",
            "created_at": "2026-08-01T10:00:00Z"
        }"#;

        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert!(record.replies.is_empty());
        assert_eq!(record.opportunity_title, "");

        let msg: Message = record.into();
        assert!(msg.replies.is_empty());
    }
}
