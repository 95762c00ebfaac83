use std::rc::Rc;
use yew::prelude::*;

use super::use_query::{QueryOptions, QueryState, use_query};
use crate::config::Config;
use crate::models::archive::Archive;
use crate::services::api::fetch_archive;
use crate::services::query_cache::QueryKey;

#[hook]
pub fn use_archive(max: u32) -> QueryState<Rc<Archive>> {
    use_query(
        QueryKey::Archive { max },
        QueryOptions::polling(Config::ARCHIVE_REFETCH_INTERVAL_MS),
        move || async move { fetch_archive(max).await.map(Rc::new) },
    )
}
