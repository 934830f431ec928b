use async_trait::async_trait;
use uuid::Uuid;

use foras_types::api::{NewMessage, NewOpportunity};
use foras_types::models::{Message, Opportunity};

use crate::error::StoreError;

/// The persistence boundary. Two interchangeable variants exist — the
/// local SQLite store ([`crate::LocalStore`]) and the hosted remote
/// service — and the application store depends only on this capability
/// set, never on storage mechanics.
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    /// All known listings, newest-first.
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, StoreError>;

    /// Assigns `id` and `posted_at`, persists, and returns the record.
    async fn create_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, StoreError>;

    /// Messages visible to the current actor. The remote variant scopes
    /// by the signed-in identity; the local variant returns the whole
    /// device store.
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError>;

    /// Appends a message with empty replies. The referenced opportunity
    /// is not required to exist — dangling ids are tolerated and the
    /// denormalized title falls back to empty.
    async fn send_message(&self, new: NewMessage) -> Result<(), StoreError>;

    /// Appends one owner reply with a fresh timestamp. Silently
    /// succeeds when no message matches.
    async fn reply_to_message(&self, message_id: Uuid, content: &str) -> Result<(), StoreError>;
}
