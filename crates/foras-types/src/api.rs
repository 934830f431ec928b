use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chrono::NaiveDate;

use crate::models::OpportunityType;

/// Input for the adapter's create operation — everything except the
/// store-assigned `id` and `posted_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOpportunity {
    pub title: String,
    pub organization: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub description: String,
    pub deadline: NaiveDate,
    pub tags: Vec<String>,
    pub salary: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
}

impl NewOpportunity {
    /// Default tag list when the poster supplies none: the category's
    /// wire label followed by the location.
    pub fn default_tags(&self) -> Vec<String> {
        vec![self.kind.as_str().to_string(), self.location.clone()]
    }
}

/// Input for the adapter's send-message operation. The opportunity title
/// is denormalized by the adapter, not supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub opportunity_id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub content: String,
}

/// Current signed-in identity, supplied by an external collaborator.
/// Consumed by the remote adapter to scope message visibility and to
/// gate write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}
