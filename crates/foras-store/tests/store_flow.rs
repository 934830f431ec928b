use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use foras_db::Database;
use foras_store::{AppStore, LocalStore, StoreAdapter, StoreError};
use foras_types::api::{NewMessage, NewOpportunity};
use foras_types::events::{Collection, StoreEvent};
use foras_types::models::{Direction, Language, Message, Opportunity, OpportunityType};

fn local_store() -> AppStore {
    let db = Database::open_in_memory().expect("in-memory db");
    AppStore::new(Arc::new(LocalStore::new(Arc::new(db))))
}

fn new_opportunity(title: &str, organization: &str) -> NewOpportunity {
    NewOpportunity {
        title: title.to_string(),
        organization: organization.to_string(),
        location: "الرياض".to_string(),
        kind: OpportunityType::Job,
        description: "Build and run backend services".to_string(),
        deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        tags: vec!["JOB".to_string(), "الرياض".to_string()],
        salary: Some("negotiable".to_string()),
        contact_email: "hr@acme.test".to_string(),
        contact_phone: "+96650000000".to_string(),
    }
}

#[tokio::test]
async fn posted_opportunity_appears_after_refresh() {
    let store = local_store();
    store.refresh().await;
    assert!(store.opportunities().await.is_empty());

    store
        .add_opportunity(new_opportunity("Backend Engineer", "Acme"))
        .await
        .expect("create succeeds");

    let opps = store.opportunities().await;
    assert_eq!(opps.len(), 1);
    assert_eq!(opps[0].title, "Backend Engineer");
}

#[tokio::test]
async fn ids_are_unique_and_posted_at_is_non_decreasing() {
    let store = local_store();
    store.refresh().await;

    let first = store.add_opportunity(new_opportunity("One", "Org")).await.unwrap();
    let second = store.add_opportunity(new_opportunity("Two", "Org")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(second.posted_at >= first.posted_at);

    // Newest-first listing.
    let opps = store.opportunities().await;
    assert_eq!(opps[0].title, "Two");
    assert_eq!(opps[1].title, "One");
}

#[tokio::test]
async fn contact_then_reply_flow() {
    let store = local_store();
    store.refresh().await;

    let opp = store
        .add_opportunity(new_opportunity("Backend Engineer", "Acme"))
        .await
        .unwrap();

    store
        .send_message(NewMessage {
            opportunity_id: opp.id,
            sender_name: "Sara".to_string(),
            sender_email: "s@x.com".to_string(),
            content: "Interested".to_string(),
        })
        .await
        .unwrap();

    let messages = store.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].opportunity_title, "Backend Engineer");
    assert!(messages[0].replies.is_empty());

    store
        .reply_to_message(messages[0].id, "Thanks, let's talk")
        .await
        .unwrap();

    let messages = store.messages().await;
    assert_eq!(messages[0].replies.len(), 1);
    assert!(messages[0].replies[0].is_from_owner);
    assert_eq!(messages[0].replies[0].content, "Thanks, let's talk");
}

#[tokio::test]
async fn dangling_opportunity_reference_is_tolerated() {
    let store = local_store();
    store.refresh().await;

    store
        .send_message(NewMessage {
            opportunity_id: Uuid::new_v4(),
            sender_name: "Sara".to_string(),
            sender_email: "s@x.com".to_string(),
            content: "Is this still open?".to_string(),
        })
        .await
        .expect("dangling reference accepted");

    let messages = store.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].opportunity_title, "");
}

#[tokio::test]
async fn reply_to_unknown_message_silently_succeeds() {
    let store = local_store();
    store.refresh().await;

    store
        .reply_to_message(Uuid::new_v4(), "anyone there?")
        .await
        .expect("no-op reply succeeds");

    assert!(store.messages().await.is_empty());
}

struct UnavailableAdapter;

#[async_trait]
impl StoreAdapter for UnavailableAdapter {
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, StoreError> {
        Err(StoreError::unavailable("backend down"))
    }

    async fn create_opportunity(&self, _new: NewOpportunity) -> Result<Opportunity, StoreError> {
        Err(StoreError::unavailable("backend down"))
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        Err(StoreError::unavailable("backend down"))
    }

    async fn send_message(&self, _new: NewMessage) -> Result<(), StoreError> {
        Err(StoreError::unavailable("backend down"))
    }

    async fn reply_to_message(&self, _message_id: Uuid, _content: &str) -> Result<(), StoreError> {
        Err(StoreError::unavailable("backend down"))
    }
}

#[tokio::test]
async fn failed_reads_degrade_to_empty_and_surface_on_the_event_channel() {
    let store = AppStore::new(Arc::new(UnavailableAdapter));
    let mut events = store.subscribe();

    store.refresh().await;

    assert!(store.opportunities().await.is_empty());
    assert!(store.messages().await.is_empty());

    let first = events.try_recv().expect("opportunities failure event");
    let second = events.try_recv().expect("messages failure event");
    match first {
        StoreEvent::ReadFailed { collection, .. } => assert_eq!(collection, Collection::Opportunities),
        other => panic!("unexpected event: {:?}", other),
    }
    match second {
        StoreEvent::ReadFailed { collection, .. } => assert_eq!(collection, Collection::Messages),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn failed_write_leaves_cache_untouched_and_propagates() {
    let store = AppStore::new(Arc::new(UnavailableAdapter));

    let err = store
        .add_opportunity(new_opportunity("Doomed", "Org"))
        .await
        .expect_err("create fails");
    assert!(matches!(err, StoreError::Unavailable { .. }));
    assert!(store.opportunities().await.is_empty());
}

#[tokio::test]
async fn translation_falls_back_to_the_key_and_follows_the_toggle() {
    let store = local_store();

    assert_eq!(store.language(), Language::Ar);
    assert_eq!(store.direction(), Direction::Rtl);
    assert_eq!(store.translate("navExplore"), "استكشف");
    assert_eq!(store.translate("unknownKey"), "unknownKey");

    let toggled = store.toggle_language();
    assert_eq!(toggled, Language::En);
    assert_eq!(store.direction(), Direction::Ltr);
    assert_eq!(store.translate("navExplore"), "Explore");
    assert_eq!(store.type_label(OpportunityType::Scholarship), "Scholarship");
}
