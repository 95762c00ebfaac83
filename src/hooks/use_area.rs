use std::rc::Rc;
use yew::prelude::*;

use super::use_query::{QueryOptions, QueryState, use_query};
use crate::models::area::Area;
use crate::services::api::fetch_area;
use crate::services::query_cache::QueryKey;

/// Pictures for an area, cached by area name.
#[hook]
pub fn use_area(name: String) -> QueryState<Rc<Area>> {
    let key = QueryKey::Area(name.clone());
    use_query(key, QueryOptions::default(), move || {
        let name = name.clone();
        async move { fetch_area(name).await.map(Rc::new) }
    })
}
