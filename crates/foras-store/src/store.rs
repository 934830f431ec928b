use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use tracing::warn;
use uuid::Uuid;

use foras_types::api::{NewMessage, NewOpportunity};
use foras_types::events::{Collection, StoreEvent};
use foras_types::filter::OpportunityFilter;
use foras_types::models::{Direction, Language, Message, Opportunity, OpportunityType};

use crate::adapter::StoreAdapter;
use crate::error::StoreError;
use crate::i18n;

#[derive(Default)]
struct CachedState {
    opportunities: Vec<Opportunity>,
    messages: Vec<Message>,
}

/// Single in-memory source of truth for the view layer.
///
/// Owns the cached collections, the refresh-after-mutation policy, the
/// active language/direction, and the translation lookup. Views hold no
/// authoritative state of their own.
pub struct AppStore {
    adapter: Arc<dyn StoreAdapter>,
    state: RwLock<CachedState>,
    language: std::sync::RwLock<Language>,
    events: broadcast::Sender<StoreEvent>,
}

impl AppStore {
    pub fn new(adapter: Arc<dyn StoreAdapter>) -> Self {
        Self::with_language(adapter, Language::default())
    }

    pub fn with_language(adapter: Arc<dyn StoreAdapter>, language: Language) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            adapter,
            state: RwLock::new(CachedState::default()),
            language: std::sync::RwLock::new(language),
            events,
        }
    }

    /// Subscribe to store events. Read failures that were served as
    /// empty collections surface here.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: StoreEvent) {
        let _ = self.events.send(event);
    }

    /// Replace both cached collections wholesale. Reads degrade to
    /// empty on failure — a best-effort cache, never a hard error.
    pub async fn refresh(&self) {
        let opportunities = match self.adapter.list_opportunities().await {
            Ok(opps) => opps,
            Err(e) => {
                warn!("Refreshing opportunities failed: {}", e);
                self.emit(StoreEvent::ReadFailed {
                    collection: Collection::Opportunities,
                    detail: e.to_string(),
                });
                vec![]
            }
        };

        let messages = match self.adapter.list_messages().await {
            Ok(msgs) => msgs,
            Err(e) => {
                warn!("Refreshing messages failed: {}", e);
                self.emit(StoreEvent::ReadFailed {
                    collection: Collection::Messages,
                    detail: e.to_string(),
                });
                vec![]
            }
        };

        let mut state = self.state.write().await;
        *state = CachedState { opportunities, messages };
    }

    /// Persist a new listing, then refresh. On failure the cache is
    /// left untouched and the error propagates to the caller.
    pub async fn add_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, StoreError> {
        let created = self.adapter.create_opportunity(new).await?;

        self.emit(StoreEvent::OpportunityCreated {
            id: created.id,
            title: created.title.clone(),
        });
        self.refresh().await;

        Ok(created)
    }

    /// Persist a contact inquiry, then refresh. Refresh-after-mutation
    /// is uniform store policy, independent of the adapter variant.
    pub async fn send_message(&self, new: NewMessage) -> Result<(), StoreError> {
        let opportunity_id = new.opportunity_id;
        self.adapter.send_message(new).await?;

        self.emit(StoreEvent::MessageSent { opportunity_id });
        self.refresh().await;

        Ok(())
    }

    pub async fn reply_to_message(&self, message_id: Uuid, content: &str) -> Result<(), StoreError> {
        self.adapter.reply_to_message(message_id, content).await?;

        self.emit(StoreEvent::ReplyAdded { message_id });
        self.refresh().await;

        Ok(())
    }

    pub async fn opportunities(&self) -> Vec<Opportunity> {
        self.state.read().await.opportunities.clone()
    }

    pub async fn opportunity_by_id(&self, id: Uuid) -> Option<Opportunity> {
        self.state
            .read()
            .await
            .opportunities
            .iter()
            .find(|opp| opp.id == id)
            .cloned()
    }

    /// Explore-view read: the cached collection through the filter
    /// predicate, order preserved.
    pub async fn filtered_opportunities(&self, filter: &OpportunityFilter) -> Vec<Opportunity> {
        filter.apply(&self.state.read().await.opportunities)
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    // -- Language / direction --

    pub fn language(&self) -> Language {
        *self.language.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn direction(&self) -> Direction {
        self.language().direction()
    }

    /// Flip between the two supported locales. In-memory only; not
    /// persisted across restarts.
    pub fn toggle_language(&self) -> Language {
        let mut lang = self.language.write().unwrap_or_else(|e| e.into_inner());
        *lang = lang.toggled();
        *lang
    }

    /// Display string for the current locale. Unknown keys echo back
    /// unchanged — this never fails.
    pub fn translate(&self, key: &str) -> String {
        i18n::lookup(self.language(), key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn type_label(&self, kind: OpportunityType) -> &'static str {
        i18n::type_label(self.language(), kind)
    }
}
