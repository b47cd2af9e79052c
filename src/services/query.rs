//! Keyed query cache with single-flight fetches.
//!
//! One [`QueryEntry`] per [`QueryKey`] holds the last good value, the last
//! error and an in-flight flag. Mounted views subscribe to the keys they read
//! and are re-rendered whenever an entry changes.

use crate::models::error::AppError;
use chrono::{DateTime, Duration, Utc};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Type-erased cached value.
pub type QueryData = Rc<dyn Any>;

/// Identity of one logical resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Index,
    Sectors,
    TopCompanies(u32),
    Health,
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKey::Index => write!(f, "index"),
            QueryKey::Sectors => write!(f, "sectors"),
            QueryKey::TopCompanies(limit) => write!(f, "companies(top {limit})"),
            QueryKey::Health => write!(f, "health"),
        }
    }
}

/// Refresh policy of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Background refetch period while mounted.
    pub refetch_interval_ms: Option<u32>,
    /// Age after which cached data is refetched on mount.
    pub stale_time_ms: u32,
}

impl QueryOptions {
    /// Refetch on every mount and then every `interval_ms`.
    pub const fn polling(interval_ms: u32) -> Self {
        Self {
            refetch_interval_ms: Some(interval_ms),
            stale_time_ms: 0,
        }
    }

    /// Fetch on mount only when the cache is older than `stale_time_ms`.
    pub const fn stale_after(stale_time_ms: u32) -> Self {
        Self {
            refetch_interval_ms: None,
            stale_time_ms,
        }
    }
}

/// Cache slot for one key.
#[derive(Clone, Default)]
pub struct QueryEntry {
    data: Option<QueryData>,
    error: Option<AppError>,
    updated_at: Option<DateTime<Utc>>,
    fetching: bool,
}

impl QueryEntry {
    /// Marks a request as in flight. Returns `false` if one already is.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetching {
            return false;
        }
        self.fetching = true;
        true
    }

    /// Replaces the cached value and clears the error.
    pub fn succeed(&mut self, data: QueryData, now: DateTime<Utc>) {
        self.data = Some(data);
        self.error = None;
        self.updated_at = Some(now);
        self.fetching = false;
    }

    /// Records a failure; the previous value stays cached.
    pub fn fail(&mut self, error: AppError) {
        self.error = Some(error);
        self.fetching = false;
    }

    /// No successful fetch yet, or the last one is at least `stale_time_ms` old.
    pub fn is_stale(&self, now: DateTime<Utc>, stale_time_ms: u32) -> bool {
        match self.updated_at {
            Some(updated_at) => now - updated_at >= Duration::milliseconds(i64::from(stale_time_ms)),
            None => true,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// The cached value, if present and of type `T`.
    pub fn data<T: 'static>(&self) -> Option<Rc<T>> {
        self.data.clone().and_then(|data| data.downcast::<T>().ok())
    }
}

type Listeners = Vec<(u64, Callback<()>)>;

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, QueryEntry>,
    listeners: HashMap<QueryKey, Listeners>,
    next_listener: u64,
}

/// Shared query cache, handed to components through a yew context.
#[derive(Clone, Default)]
pub struct QueryClient {
    state: Rc<RefCell<CacheState>>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entry for `key`.
    pub fn entry(&self, key: QueryKey) -> QueryEntry {
        self.state
            .borrow()
            .entries
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a mount should trigger a fetch for `key`.
    pub fn needs_fetch(&self, key: QueryKey, options: QueryOptions, now: DateTime<Utc>) -> bool {
        let entry = self.entry(key);
        !entry.is_fetching() && entry.is_stale(now, options.stale_time_ms)
    }

    /// Calls `listener` after every change to `key` until the subscription is dropped.
    pub fn subscribe(&self, key: QueryKey, listener: Callback<()>) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.entry(key).or_default().push((id, listener));

        Subscription {
            state: Rc::downgrade(&self.state),
            key,
            id,
        }
    }

    /// Marks `key` as in flight. Returns `false` if a request is already running.
    pub fn try_begin(&self, key: QueryKey) -> bool {
        let started = self
            .state
            .borrow_mut()
            .entries
            .entry(key)
            .or_default()
            .begin_fetch();
        if started {
            self.notify(key);
        }
        started
    }

    /// Stores the outcome of a request for `key` and notifies subscribers.
    pub fn settle(&self, key: QueryKey, result: Result<QueryData, AppError>, now: DateTime<Utc>) {
        {
            let mut state = self.state.borrow_mut();
            let entry = state.entries.entry(key).or_default();
            match result {
                Ok(data) => entry.succeed(data, now),
                Err(error) => entry.fail(error),
            }
        }
        self.notify(key);
    }

    /// Runs `fetcher` for `key` unless a request is already in flight.
    pub fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F)
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        if !self.try_begin(key) {
            return;
        }

        let future = fetcher();
        let client = self.clone();
        spawn_local(async move {
            let result = future.await.map(|data| Rc::new(data) as QueryData);
            if let Err(e) = &result {
                gloo::console::error!(format!("Fetching {key} failed: {e}"));
            }
            client.settle(key, result, Utc::now());
        });
    }

    fn notify(&self, key: QueryKey) {
        // Collect first: a listener may subscribe or unsubscribe while running
        let listeners: Vec<Callback<()>> = self
            .state
            .borrow()
            .listeners
            .get(&key)
            .map(|listeners| listeners.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default();

        for listener in listeners {
            listener.emit(());
        }
    }
}

/// Removes its listener when dropped.
pub struct Subscription {
    state: Weak<RefCell<CacheState>>,
    key: QueryKey,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Some(listeners) = state.borrow_mut().listeners.get_mut(&self.key) {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
