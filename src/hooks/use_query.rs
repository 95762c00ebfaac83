use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::services::query_cache::{Cached, QueryClient, QueryKey, QuerySnapshot};

/// Per-query fetching behaviour.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct QueryOptions {
    /// Refetch on this interval while mounted, in milliseconds
    pub refetch_interval_ms: Option<u32>,
}

impl QueryOptions {
    pub const fn polling(interval_ms: u32) -> Self {
        Self {
            refetch_interval_ms: Some(interval_ms),
        }
    }
}

/// What a view sees of a query.
#[derive(Clone, PartialEq, Debug)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub updated_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
    pub is_fetching: bool,
    /// `data` was borrowed from another query and the real answer is pending
    pub is_placeholder: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            updated_at: None,
            error: None,
            is_fetching: false,
            is_placeholder: false,
        }
    }
}

impl<T> QueryState<T> {
    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns true while nothing is available yet
    pub const fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    /// The last error, but only while there is nothing to show instead
    pub fn blocking_error(&self) -> Option<String> {
        if self.data.is_some() {
            None
        } else {
            self.error.clone()
        }
    }
}

impl<T: Cached> QueryState<T> {
    pub fn from_snapshot(snapshot: QuerySnapshot) -> Self {
        Self {
            data: snapshot.data.as_ref().and_then(T::from_data),
            updated_at: snapshot.updated_at,
            error: snapshot.error.map(|e| e.to_string()),
            is_fetching: snapshot.is_fetching,
            is_placeholder: false,
        }
    }
}

/// The cache shared by the component tree.
#[hook]
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient context missing; wrap the app in a ContextProvider<QueryClient>")
}

/// Starts a request for `key` unless one is already in flight.
fn spawn_fetch<T, F, Fut>(client: &QueryClient, key: &QueryKey, fetcher: &Rc<F>)
where
    T: Cached,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let Some(token) = client.begin_fetch(key) else {
        return;
    };

    let client = client.clone();
    let key = key.clone();
    let fetcher = Rc::clone(fetcher);
    spawn_local(async move {
        let result = fetcher().await.map(Cached::into_data);
        client.finish_fetch(&key, token, result, Utc::now());
    });
}

/// Subscribes to a cached query, fetching it when missing or invalidated.
///
/// All components using the same key share one cache entry and at most one
/// in-flight request. With a refetch interval, every mounted user ticks
/// independently; ticks landing while a request is running are dropped.
#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, options: QueryOptions, fetcher: F) -> QueryState<T>
where
    T: Cached,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let client = use_query_client();
    let update = use_force_update();

    {
        let client = client.clone();

        use_effect_with((key.clone(), options), move |(key, options)| {
            let fetcher = Rc::new(fetcher);

            let on_change = {
                let client = client.clone();
                let key = key.clone();
                let fetcher = Rc::clone(&fetcher);
                Callback::from(move |()| {
                    update.force_update();
                    if client.needs_fetch(&key) {
                        spawn_fetch(&client, &key, &fetcher);
                    }
                })
            };
            let subscription = client.subscribe(key.clone(), on_change);

            if client.needs_fetch(key) {
                spawn_fetch(&client, key, &fetcher);
            }

            // Schedule polling if enabled
            let interval = options
                .refetch_interval_ms
                .filter(|_| Config::ENABLE_AUTO_REFRESH)
                .map(|interval_ms| {
                    let client = client.clone();
                    let key = key.clone();
                    Interval::new(interval_ms, move || spawn_fetch(&client, &key, &fetcher))
                });

            move || {
                drop(interval);
                drop(subscription);
            }
        });
    }

    QueryState::from_snapshot(client.snapshot(&key))
}
