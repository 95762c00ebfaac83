//! Shared query cache.
//!
//! Every piece of server data the views show lives in one [`QueryCache`],
//! keyed by [`QueryKey`]. Components reach it through a cloned
//! [`QueryClient`] handle provided by a Yew context. Views subscribe to the
//! keys they render and are notified when the entry changes, when it is
//! invalidated, or when a fetch for it starts or finishes.

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use yew::Callback;

use crate::models::{
    archive::Archive,
    area::Area,
    error::AppError,
    place::{AddressKey, Place},
    property::{Property, PropertyDetail, PropertyId},
    user::{LoginOutcome, Session},
};

/// Identity of a cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Vacancies,
    Vacancy(PropertyId),
    Area(String),
    User,
    Geocode(AddressKey),
    Archive { max: u32 },
}

impl QueryKey {
    /// Keys whose data depends on who is signed in.
    pub const fn is_vacancy_data(&self) -> bool {
        matches!(self, Self::Vacancies | Self::Vacancy(_))
    }
}

/// Cached payload of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Vacancies(Rc<Vec<Property>>),
    Vacancy(Rc<PropertyDetail>),
    Area(Rc<Area>),
    Session(Session),
    Place(Place),
    Archive(Rc<Archive>),
}

/// Conversion between a typed query result and [`QueryData`].
pub trait Cached: Clone + 'static {
    fn from_data(data: &QueryData) -> Option<Self>;
    fn into_data(self) -> QueryData;
}

macro_rules! cached {
    ($ty:ty, $variant:ident) => {
        impl Cached for $ty {
            fn from_data(data: &QueryData) -> Option<Self> {
                match data {
                    QueryData::$variant(value) => Some(value.clone()),
                    _ => None,
                }
            }

            fn into_data(self) -> QueryData {
                QueryData::$variant(self)
            }
        }
    };
}

cached!(Rc<Vec<Property>>, Vacancies);
cached!(Rc<PropertyDetail>, Vacancy);
cached!(Rc<Area>, Area);
cached!(Session, Session);
cached!(Place, Place);
cached!(Rc<Archive>, Archive);

#[derive(Debug, Clone, Default)]
struct QueryEntry {
    data: Option<QueryData>,
    updated_at: Option<DateTime<Utc>>,
    error: Option<AppError>,
    fetching: bool,
    stale: bool,
    /// Bumped whenever a request in flight must not land
    generation: u64,
}

impl QueryEntry {
    /// Orphans any request in flight so a fresh one can start.
    fn disown_fetch(&mut self) {
        self.generation += 1;
        self.fetching = false;
    }
}

/// Proof of a claimed request, handed back to [`QueryClient::finish_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
}

/// Read-only view of one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot {
    pub data: Option<QueryData>,
    pub updated_at: Option<DateTime<Utc>>,
    pub error: Option<AppError>,
    pub is_fetching: bool,
}

type SubscriberId = u64;

#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, QueryEntry>,
    subscribers: HashMap<QueryKey, Vec<(SubscriberId, Callback<()>)>>,
    next_subscriber: SubscriberId,
}

impl QueryCache {
    fn listeners<'a>(&self, keys: impl IntoIterator<Item = &'a QueryKey>) -> Vec<Callback<()>> {
        keys.into_iter()
            .filter_map(|key| self.subscribers.get(key))
            .flatten()
            .map(|(_, callback)| callback.clone())
            .collect()
    }
}

/// Handle to the shared cache. Clones refer to the same cache.
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Rc<RefCell<QueryCache>>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.inner.borrow();
        f.debug_struct("QueryClient")
            .field("entries", &cache.entries.len())
            .field("subscribers", &cache.subscribers.len())
            .finish()
    }
}

/// Keeps a subscription alive; dropping it unsubscribes.
pub struct Subscription {
    cache: Weak<RefCell<QueryCache>>,
    key: QueryKey,
    id: SubscriberId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(cache) = self.cache.upgrade() else {
            return;
        };
        let mut cache = cache.borrow_mut();
        if let Some(list) = cache.subscribers.get_mut(&self.key) {
            list.retain(|(id, _)| *id != self.id);
            if list.is_empty() {
                cache.subscribers.remove(&self.key);
            }
        }
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the callbacks outside the cache borrow, so they may read it.
    fn notify(listeners: Vec<Callback<()>>) {
        for listener in listeners {
            listener.emit(());
        }
    }

    fn notify_key(&self, key: &QueryKey) {
        let listeners = self.inner.borrow().listeners([key]);
        Self::notify(listeners);
    }

    pub fn subscribe(&self, key: QueryKey, callback: Callback<()>) -> Subscription {
        let mut cache = self.inner.borrow_mut();
        let id = cache.next_subscriber;
        cache.next_subscriber += 1;
        cache
            .subscribers
            .entry(key.clone())
            .or_default()
            .push((id, callback));

        Subscription {
            cache: Rc::downgrade(&self.inner),
            key,
            id,
        }
    }

    pub fn subscriber_count(&self, key: &QueryKey) -> usize {
        self.inner
            .borrow()
            .subscribers
            .get(key)
            .map_or(0, Vec::len)
    }

    pub fn get(&self, key: &QueryKey) -> Option<QueryData> {
        self.inner
            .borrow()
            .entries
            .get(key)
            .and_then(|entry| entry.data.clone())
    }

    /// Typed read of a cached value.
    pub fn get_as<T: Cached>(&self, key: &QueryKey) -> Option<T> {
        self.get(key).as_ref().and_then(T::from_data)
    }

    pub fn snapshot(&self, key: &QueryKey) -> QuerySnapshot {
        let cache = self.inner.borrow();
        let entry = cache.entries.get(key);

        QuerySnapshot {
            data: entry.and_then(|e| e.data.clone()),
            updated_at: entry.and_then(|e| e.updated_at),
            error: entry.and_then(|e| e.error.clone()),
            is_fetching: entry.is_some_and(|e| e.fetching),
        }
    }

    /// True when the key has never loaded or was invalidated, and nothing
    /// is in flight for it.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        self.inner
            .borrow()
            .entries
            .get(key)
            .is_none_or(|entry| {
                let never_loaded = entry.updated_at.is_none() && entry.error.is_none();
                !entry.fetching && (entry.stale || never_loaded)
            })
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.inner
            .borrow()
            .entries
            .get(key)
            .is_some_and(|entry| entry.fetching)
    }

    /// Claims the key for a network request.
    ///
    /// Returns `None` when a request for the key is already in flight; the
    /// caller must not start another one.
    pub fn begin_fetch(&self, key: &QueryKey) -> Option<FetchToken> {
        let token = {
            let mut cache = self.inner.borrow_mut();
            let entry = cache.entries.entry(key.clone()).or_default();
            if entry.fetching {
                return None;
            }
            entry.fetching = true;
            FetchToken {
                generation: entry.generation,
            }
        };
        self.notify_key(key);
        Some(token)
    }

    /// Stores the outcome of a request started with [`Self::begin_fetch`].
    ///
    /// A failure keeps the previous data so views never go blank because a
    /// refetch failed. Results of requests orphaned by [`Self::set_data`],
    /// [`Self::invalidate`] or [`Self::reset`] are dropped.
    pub fn finish_fetch(
        &self,
        key: &QueryKey,
        token: FetchToken,
        result: Result<QueryData, AppError>,
        now: DateTime<Utc>,
    ) {
        {
            let mut cache = self.inner.borrow_mut();
            let entry = cache.entries.entry(key.clone()).or_default();
            if entry.generation != token.generation {
                tracing::debug!(?key, "dropped superseded response");
                return;
            }
            entry.fetching = false;
            entry.stale = false;
            match result {
                Ok(data) => {
                    entry.data = Some(data);
                    entry.updated_at = Some(now);
                    entry.error = None;
                }
                Err(error) => {
                    tracing::warn!(?key, %error, "query failed");
                    entry.error = Some(error);
                }
            }
        }
        self.notify_key(key);
    }

    /// Replaces an entry's data directly, without a request.
    pub fn set_data(&self, key: QueryKey, data: QueryData, now: DateTime<Utc>) {
        {
            let mut cache = self.inner.borrow_mut();
            let entry = cache.entries.entry(key.clone()).or_default();
            entry.disown_fetch();
            entry.data = Some(data);
            entry.updated_at = Some(now);
            entry.error = None;
            entry.stale = false;
        }
        self.notify_key(&key);
    }

    /// Marks matching entries stale and notifies their subscribers, which
    /// refetch. Cached data stays visible until the new data arrives.
    pub fn invalidate<P>(&self, predicate: P) -> usize
    where
        P: Fn(&QueryKey) -> bool,
    {
        self.mark(predicate, false)
    }

    /// Like [`Self::invalidate`], but also drops the cached data.
    pub fn reset<P>(&self, predicate: P) -> usize
    where
        P: Fn(&QueryKey) -> bool,
    {
        self.mark(predicate, true)
    }

    fn mark<P>(&self, predicate: P, clear: bool) -> usize
    where
        P: Fn(&QueryKey) -> bool,
    {
        let (count, listeners) = {
            let mut cache = self.inner.borrow_mut();
            let mut keys = Vec::new();
            for (key, entry) in cache.entries.iter_mut().filter(|(key, _)| predicate(key)) {
                entry.stale = true;
                entry.disown_fetch();
                if clear {
                    entry.data = None;
                    entry.updated_at = None;
                    entry.error = None;
                }
                keys.push(key.clone());
            }
            tracing::debug!(count = keys.len(), clear, "invalidated queries");
            (keys.len(), cache.listeners(&keys))
        };

        Self::notify(listeners);
        count
    }

    /// The list entry for `id` from the last loaded collection.
    pub fn vacancy_placeholder(&self, id: PropertyId) -> Option<PropertyDetail> {
        let vacancies: Rc<Vec<Property>> = self.get_as(&QueryKey::Vacancies)?;
        vacancies
            .iter()
            .find(|property| property.id == id)
            .cloned()
            .map(PropertyDetail::from)
    }

    /// The loaded detail for `id`, falling back to its list entry.
    pub fn vacancy_or_placeholder(&self, id: PropertyId) -> Option<Rc<PropertyDetail>> {
        self.get_as(&QueryKey::Vacancy(id))
            .or_else(|| self.vacancy_placeholder(id).map(Rc::new))
    }

    /// Applies a login result to the cached session.
    ///
    /// On success the session is replaced and vacancy data refetched, since
    /// queue positions belong to the signed-in user. Rejected credentials
    /// change nothing. Returns whether the session changed.
    pub fn apply_login(&self, outcome: &LoginOutcome, now: DateTime<Utc>) -> bool {
        match outcome {
            LoginOutcome::Success(user) => {
                self.set_data(
                    QueryKey::User,
                    QueryData::Session(Session::Authenticated(user.clone())),
                    now,
                );
                self.invalidate(QueryKey::is_vacancy_data);
                true
            }
            LoginOutcome::InvalidCredentials => false,
        }
    }

    /// Signs the cached session out and discards the user's queue positions.
    pub fn apply_logout(&self, now: DateTime<Utc>) {
        self.set_data(
            QueryKey::User,
            QueryData::Session(Session::Unauthenticated),
            now,
        );
        self.reset(QueryKey::is_vacancy_data);
    }

    /// Current session; `None` until the first lookup finishes.
    pub fn session(&self) -> Option<Session> {
        self.get_as(&QueryKey::User)
    }
}
