use chrono::Utc;
use gloo_timers::callback::Interval;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::query::{QueryClient, QueryEntry, QueryKey, QueryOptions};

/// What a view sees of one query.
#[derive(Clone, Debug)]
pub struct QueryHandle<T> {
    pub data: Option<Rc<T>>,
    pub error: Option<AppError>,
    pub is_fetching: bool,
    pub refetch: Callback<()>,
}

impl<T: 'static> QueryHandle<T> {
    pub fn from_entry(entry: &QueryEntry, refetch: Callback<()>) -> Self {
        Self {
            data: entry.data::<T>(),
            error: entry.error().cloned(),
            is_fetching: entry.is_fetching(),
            refetch,
        }
    }
}

impl<T> QueryHandle<T> {
    /// Nothing to show yet: no data and no error.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    /// A request is running while older data is displayed.
    pub fn is_refetching(&self) -> bool {
        self.is_fetching && self.data.is_some()
    }
}

/// Returns the client provided at the app root, or a component-local one.
#[hook]
pub fn use_query_client() -> QueryClient {
    let provided = use_context::<QueryClient>();
    let local = use_memo((), |_| QueryClient::new());
    provided.unwrap_or_else(|| (*local).clone())
}

/// Subscribes to `key`, fetching on mount when the cache is stale and, if
/// configured, on an interval while mounted.
#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, options: QueryOptions, fetcher: F) -> QueryHandle<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let client = use_query_client();
    let update = use_force_update();
    let fetcher = Rc::new(fetcher);

    {
        let client = client.clone();
        let fetcher = fetcher.clone();

        use_effect_with((key, options), move |&(key, options)| {
            let subscription = client.subscribe(key, Callback::from(move |()| update.force_update()));

            if client.needs_fetch(key, options, Utc::now()) {
                let fetcher = fetcher.clone();
                client.fetch(key, move || fetcher());
            }

            let poller = options.refetch_interval_ms.map(|interval_ms| {
                let client = client.clone();
                Interval::new(interval_ms, move || {
                    let fetcher = fetcher.clone();
                    client.fetch(key, move || fetcher());
                })
            });

            // Unmounting stops polling; a request still in flight lands in
            // the cache without re-rendering this view
            move || {
                drop(poller);
                drop(subscription);
            }
        });
    }

    let refetch = {
        let client = client.clone();
        Callback::from(move |()| {
            let fetcher = fetcher.clone();
            client.fetch(key, move || fetcher());
        })
    };

    QueryHandle::from_entry(&client.entry(key), refetch)
}
