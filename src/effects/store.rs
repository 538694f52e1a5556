//! Store facade that owns the session state.

use crate::core::{reduce, Action, CacheEntry, Entity, SessionState};
use crate::effects::error::StoreError;
use crate::effects::lookup::{EntityLookup, LookupError};
use crate::validation::check_entity;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

/// Source of the current time, used to stamp and age cache entries.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub(crate) fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// How a successful search was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Served from the cache without touching the lookup
    CacheHit,

    /// Fetched from the lookup and applied
    Fetched,

    /// Fetched, but a later search was applied first; nothing changed
    Superseded,
}

/// The single owner of a session's state.
///
/// State lives in a `watch` channel as an `Arc<SessionState>` and is replaced
/// wholesale on every accepted action, with the reducer running under the
/// channel's lock. Readers always see a complete snapshot. Share the store
/// between tasks with `Arc<Store<_>>`.
///
/// Overlapping selections are ordered by a ticket taken when each search
/// starts, or when a `SelectEntity` is dispatched directly. A fetched result is
/// dropped if a selection issued later has already been applied, so the current
/// entity always belongs to the newest selection.
pub struct Store<L: EntityLookup> {
    lookup: L,
    state: watch::Sender<Arc<SessionState>>,
    cache_ttl: Option<Duration>,
    clock: Clock,
    session_id: Uuid,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl<L: EntityLookup> Store<L> {
    /// Create a store with a fresh session, no cache expiry and the system clock.
    pub fn new(lookup: L) -> Self {
        Self::from_parts(lookup, SessionState::new(), None, system_clock())
    }

    pub(crate) fn from_parts(
        lookup: L,
        initial: SessionState,
        cache_ttl: Option<Duration>,
        clock: Clock,
    ) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        let session_id = Uuid::new_v4();
        tracing::debug!(session = %session_id, ?cache_ttl, "session started");

        Self {
            lookup,
            state,
            cache_ttl,
            clock,
            session_id,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Current state snapshot (pure read).
    pub fn state(&self) -> Arc<SessionState> {
        self.state.borrow().clone()
    }

    /// Receive every snapshot that replaces the current one.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionState>> {
        self.state.subscribe()
    }

    /// Identifier attached to this session's log records.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Apply an action to the current state.
    ///
    /// Returns `true` if the state changed. Observers are only notified on
    /// change. A dispatched `SelectEntity` takes a ticket like a search does,
    /// so searches already in flight cannot overwrite it.
    pub fn dispatch(&self, action: Action) -> bool {
        let name = action.name();
        let ticket = matches!(action, Action::SelectEntity(_)).then(|| self.issue_ticket());
        let changed = self.apply(ticket, action).unwrap_or(false);

        tracing::debug!(
            session = %self.session_id,
            action = name,
            changed,
            "dispatched action"
        );
        changed
    }

    /// Increment the level of the current selection.
    pub fn level_up(&self) {
        self.dispatch(Action::LevelUp);
    }

    /// Forget every cached entity, forcing the next searches to fetch.
    pub fn clear_cache(&self) {
        self.dispatch(Action::ClearCache);
    }

    /// Select the entity called `name`, fetching it on a cache miss.
    ///
    /// A fresh cache entry is selected without calling the lookup. Otherwise
    /// the lookup is called once; its result is validated and selected. On
    /// failure the state is left untouched and the error is returned.
    pub async fn search(&self, name: &str) -> Result<SearchOutcome, StoreError> {
        let ticket = self.issue_ticket();
        let now = (self.clock)();

        let cached = self
            .state
            .borrow()
            .cache
            .get_fresh(name, now, self.cache_ttl)
            .cloned();

        if let Some(entry) = cached {
            tracing::debug!(session = %self.session_id, entity = name, "cache hit");
            return Ok(self.select(ticket, entry, SearchOutcome::CacheHit));
        }

        tracing::debug!(session = %self.session_id, entity = name, "cache miss, fetching");
        let entity = match self.fetch_valid(name).await {
            Ok(entity) => entity,
            Err(source) => {
                tracing::warn!(
                    session = %self.session_id,
                    entity = name,
                    error = %source,
                    "lookup failed, state unchanged"
                );
                return Err(StoreError::LookupFailed {
                    name: name.to_string(),
                    source,
                });
            }
        };

        tracing::info!(
            session = %self.session_id,
            entity = name,
            stats = entity.stats.len(),
            "fetched entity"
        );
        let entry = CacheEntry::new(entity, (self.clock)());
        Ok(self.select(ticket, entry, SearchOutcome::Fetched))
    }

    async fn fetch_valid(&self, name: &str) -> Result<Entity, LookupError> {
        let entity = self.lookup.fetch(name).await?;
        check_entity(&entity).map_err(|violations| LookupError::Invalid { violations })?;
        Ok(entity)
    }

    fn issue_ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run the reducer under the channel lock.
    ///
    /// Returns `None` without touching the state if `ticket` is older than the
    /// last applied one, otherwise whether the state changed.
    fn apply(&self, ticket: Option<u64>, action: Action) -> Option<bool> {
        let mut superseded = false;

        let changed = self.state.send_if_modified(|current| {
            // Ticket bookkeeping happens under the channel lock
            if let Some(ticket) = ticket {
                if self.applied.load(Ordering::SeqCst) > ticket {
                    superseded = true;
                    return false;
                }
                self.applied.store(ticket, Ordering::SeqCst);
            }
            replace_if_changed(current, action)
        });

        (!superseded).then_some(changed)
    }

    fn select(&self, ticket: u64, entry: CacheEntry, outcome: SearchOutcome) -> SearchOutcome {
        let name = entry.entity.name.clone();

        if self.apply(Some(ticket), Action::SelectEntity(entry)).is_none() {
            tracing::warn!(
                session = %self.session_id,
                entity = %name,
                ticket,
                "dropping result of superseded search"
            );
            return SearchOutcome::Superseded;
        }

        tracing::debug!(session = %self.session_id, entity = %name, ?outcome, "selected entity");
        outcome
    }
}

fn replace_if_changed(current: &mut Arc<SessionState>, action: Action) -> bool {
    let next = reduce(&**current, action);
    if next == **current {
        return false;
    }
    *current = Arc::new(next);
    true
}
