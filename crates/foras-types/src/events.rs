use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which durable collection an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Opportunities,
    Messages,
}

/// Events emitted by the application store. Reads that degrade to an
/// empty collection surface here so the failure is not invisible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StoreEvent {
    /// A new listing was persisted
    OpportunityCreated { id: Uuid, title: String },

    /// A contact inquiry was persisted
    MessageSent { opportunity_id: Uuid },

    /// An owner reply was appended to a message
    ReplyAdded { message_id: Uuid },

    /// A read operation failed and was served as an empty collection
    ReadFailed { collection: Collection, detail: String },
}
