// file: src/pipeline/board.rs
// description: dashboard state machine with stale-response protection
// reference: single outstanding listing fetch per reload trigger

use crate::client::ResumeSource;
use crate::error::{ReviewError, Result};
use crate::models::{BackendRecord, ResumeRecord};
use crate::pipeline::collection::ResumeCollection;
use crate::pipeline::merge::RecordBuilder;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub enum BoardState {
    Loading,
    Loaded(ResumeCollection),
    Error(String),
}

/// Identifies one reload. Only the most recently issued ticket may
/// replace the board's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

#[derive(Debug)]
pub struct ResumeBoard {
    builder: RecordBuilder,
    state: BoardState,
    latest: u64,
}

impl ResumeBoard {
    pub fn new(builder: RecordBuilder) -> Self {
        Self {
            builder,
            state: BoardState::Loading,
            latest: 0,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, BoardState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            BoardState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn collection(&self) -> Option<&ResumeCollection> {
        match &self.state {
            BoardState::Loaded(collection) => Some(collection),
            _ => None,
        }
    }

    /// Records currently on display; empty unless loaded.
    pub fn displayed(&self) -> &[Arc<ResumeRecord>] {
        self.collection()
            .map(ResumeCollection::displayed)
            .unwrap_or_default()
    }

    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.latest += 1;
        self.state = BoardState::Loading;
        ReloadTicket(self.latest)
    }

    /// Applies a listing response. Responses for superseded tickets are
    /// discarded and `false` is returned.
    pub fn complete_reload(
        &mut self,
        ticket: ReloadTicket,
        response: Result<Vec<BackendRecord>>,
    ) -> bool {
        if ticket.0 != self.latest {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale resume listing"
            );
            return false;
        }

        self.state = match response {
            Ok(raws) => {
                let collection = ResumeCollection::new(self.builder.build_all(raws));
                info!("Loaded {} resumes", collection.len());
                BoardState::Loaded(collection)
            }
            Err(e) => {
                warn!("Failed to load resumes: {}", e);
                BoardState::Error(format!("Failed to load resumes: {}", e))
            }
        };
        true
    }

    pub async fn reload<S: ResumeSource>(&mut self, source: &S, user_id: &str) {
        let ticket = self.begin_reload();
        let response = fetch(source, user_id).await;
        self.complete_reload(ticket, response);
    }

    /// Reload for a board shared between tasks. The lock is released while
    /// the fetch is in flight, so a newer reload can overtake this one.
    pub async fn reload_shared<S: ResumeSource>(board: &Mutex<Self>, source: &S, user_id: &str) {
        let ticket = board.lock().await.begin_reload();
        let response = fetch(source, user_id).await;
        board.lock().await.complete_reload(ticket, response);
    }

    /// Blank filter text leaves the view unchanged.
    pub fn filter(&mut self, needle: &str) -> bool {
        match &mut self.state {
            BoardState::Loaded(collection) => collection.filter(needle),
            _ => false,
        }
    }

    pub fn show_all(&mut self) {
        if let BoardState::Loaded(collection) = &mut self.state {
            collection.show_all();
        }
    }

    /// Forgets a record the backend has already deleted.
    pub fn remove(&mut self, id: &str) -> bool {
        match &mut self.state {
            BoardState::Loaded(collection) => collection.remove(id),
            _ => false,
        }
    }

    /// Asks the backend to delete `id` and drops it locally once confirmed.
    pub async fn delete<S: ResumeSource>(&mut self, source: &S, id: &str) -> Result<()> {
        source.delete_resume(id).await?;
        self.remove(id);
        Ok(())
    }
}

impl Default for ResumeBoard {
    fn default() -> Self {
        Self::new(RecordBuilder::default())
    }
}

async fn fetch<S: ResumeSource>(source: &S, user_id: &str) -> Result<Vec<BackendRecord>> {
    if user_id.trim().is_empty() {
        return Err(ReviewError::Validation(
            "no user id supplied, please log in".to_string(),
        ));
    }
    source.fetch_user_resumes(user_id).await
}
