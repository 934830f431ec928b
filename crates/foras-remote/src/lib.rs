//! Remote-service variant of the persistence adapter.
//!
//! Talks to a hosted PostgREST-style backend: two tables
//! (`opportunities`, `messages`) under `/rest/v1/`, authenticated with
//! an `apikey` header plus a bearer token. Interchangeable with the
//! local SQLite variant behind [`foras_store::StoreAdapter`].

pub mod records;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::RequestBuilder;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use foras_store::{StoreAdapter, StoreError};
use foras_types::api::{Identity, NewMessage, NewOpportunity};
use foras_types::events::Collection;
use foras_types::models::{Message, Opportunity, Reply};

use crate::records::{MessageRecord, OpportunityRecord};

pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    identity: Option<Identity>,
    access_token: Option<String>,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            identity: None,
            access_token: None,
        }
    }

    /// Attach the signed-in identity and its access token. Without an
    /// identity, writes are rejected and the inbox reads empty.
    pub fn with_identity(mut self, identity: Identity, access_token: impl Into<String>) -> Self {
        self.identity = Some(identity);
        self.access_token = Some(access_token.into());
        self
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        req.header("apikey", &self.api_key).bearer_auth(bearer)
    }

    fn require_identity(&self) -> Result<&Identity, StoreError> {
        self.identity.as_ref().ok_or(StoreError::Unauthenticated)
    }

    async fn fetch_rows<T: serde::de::DeserializeOwned>(
        &self,
        req: RequestBuilder,
        collection: Collection,
    ) -> Result<Vec<T>, StoreError> {
        let resp = self.authed(req).send().await.map_err(StoreError::unavailable)?;
        let resp = check_status(resp).await?;
        resp.json().await.map_err(|e| StoreError::Corrupt {
            collection,
            detail: e.to_string(),
        })
    }

    /// Title and poster of the referenced opportunity, if it exists.
    /// Dangling references resolve to an empty title and no owner.
    async fn resolve_opportunity(&self, id: Uuid) -> Result<(String, Option<Uuid>), StoreError> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            title: String,
            #[serde(default)]
            owner_id: Option<Uuid>,
        }

        let req = self
            .http
            .get(self.rest_url("opportunities"))
            .query(&[("id", format!("eq.{}", id).as_str()), ("select", "title,owner_id")]);

        let rows: Vec<Row> = self.fetch_rows(req, Collection::Opportunities).await?;
        Ok(rows
            .into_iter()
            .next()
            .map(|row| (row.title, row.owner_id))
            .unwrap_or_default())
    }
}

#[async_trait]
impl StoreAdapter for RemoteStore {
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, StoreError> {
        let req = self
            .http
            .get(self.rest_url("opportunities"))
            .query(&[("select", "*"), ("order", "posted_at.desc,created_at.desc")]);

        let rows: Vec<OpportunityRecord> = self.fetch_rows(req, Collection::Opportunities).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, StoreError> {
        let identity = self.require_identity()?;

        let record = OpportunityRecord::from_new(
            &new,
            Uuid::new_v4(),
            Utc::now().date_naive(),
            identity.user_id,
        );

        let resp = self
            .authed(self.http.post(self.rest_url("opportunities")))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        check_status(resp).await?;

        Ok(record.into())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let Some(identity) = self.identity.as_ref() else {
            debug!("No signed-in identity; inbox reads empty");
            return Ok(vec![]);
        };

        let req = self.http.get(self.rest_url("messages")).query(&[
            ("owner_id", format!("eq.{}", identity.user_id).as_str()),
            ("select", "*"),
            ("order", "created_at.desc"),
        ]);

        let rows: Vec<MessageRecord> = self.fetch_rows(req, Collection::Messages).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn send_message(&self, new: NewMessage) -> Result<(), StoreError> {
        self.require_identity()?;

        let (title, owner_id) = self.resolve_opportunity(new.opportunity_id).await?;

        let record = MessageRecord {
            id: Uuid::new_v4(),
            opportunity_id: new.opportunity_id,
            opportunity_title: title,
            sender_name: new.sender_name,
            sender_email: new.sender_email,
            content: new.content,
            created_at: Utc::now(),
            replies: vec![],
            owner_id,
        };

        let resp = self
            .authed(self.http.post(self.rest_url("messages")))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        check_status(resp).await?;

        Ok(())
    }

    async fn reply_to_message(&self, message_id: Uuid, content: &str) -> Result<(), StoreError> {
        self.require_identity()?;

        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            replies: Vec<Reply>,
        }

        let req = self
            .http
            .get(self.rest_url("messages"))
            .query(&[("id", format!("eq.{}", message_id).as_str()), ("select", "replies")]);

        let rows: Vec<Row> = self.fetch_rows(req, Collection::Messages).await?;
        let Some(row) = rows.into_iter().next() else {
            debug!("Reply to unknown message {} ignored", message_id);
            return Ok(());
        };

        // Read-modify-write on the replies column. Two concurrent
        // replies to the same message race last-write-wins; the hosted
        // backend has no atomic list-append for JSON columns yet.
        let mut replies = row.replies;
        replies.push(Reply {
            id: Uuid::new_v4(),
            content: content.to_string(),
            timestamp: Utc::now(),
            is_from_owner: true,
        });

        let resp = self
            .authed(self.http.patch(self.rest_url("messages")))
            .query(&[("id", format!("eq.{}", message_id).as_str())])
            .json(&serde_json::json!({ "replies": replies }))
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        check_status(resp).await?;

        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Unavailable {
        detail: format!("HTTP {}: {}", status, body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use foras_types::models::OpportunityType;

    fn anonymous_store() -> RemoteStore {
        // The gate fires before any request, so the URL is never hit.
        RemoteStore::new("http://unreachable.invalid", "anon-key")
    }

    fn new_opportunity() -> NewOpportunity {
        NewOpportunity {
            title: "Backend Engineer".to_string(),
            organization: "Acme".to_string(),
            location: "الرياض".to_string(),
            kind: OpportunityType::Job,
            description: String::new(),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            tags: vec![],
            salary: None,
            contact_email: "hr@acme.test".to_string(),
            contact_phone: "+96650000000".to_string(),
        }
    }

    #[tokio::test]
    async fn writes_without_identity_are_rejected_before_any_io() {
        let store = anonymous_store();

        let err = store.create_opportunity(new_opportunity()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthenticated));

        let err = store
            .send_message(NewMessage {
                opportunity_id: Uuid::new_v4(),
                sender_name: "Sara".to_string(),
                sender_email: "s@x.com".to_string(),
                content: "hi".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unauthenticated));

        let err = store.reply_to_message(Uuid::new_v4(), "hi").await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthenticated));
    }

    #[tokio::test]
    async fn inbox_without_identity_reads_empty() {
        let store = anonymous_store();
        let messages = store.list_messages().await.unwrap();
        assert!(messages.is_empty());
    }
}
