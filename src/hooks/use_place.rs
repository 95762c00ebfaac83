use yew::prelude::*;

use super::use_query::{QueryOptions, use_query};
use crate::models::place::{AddressKey, Place};
use crate::services::api::fetch_place;
use crate::services::query_cache::QueryKey;

/// Coordinates for an address, or `None` until (or unless) geocoding succeeds.
///
/// Lookups are keyed by the address, so properties sharing one trigger a
/// single request.
#[hook]
pub fn use_place(address: AddressKey) -> Option<Place> {
    let key = QueryKey::Geocode(address.clone());
    use_query(key, QueryOptions::default(), move || fetch_place(address.clone())).data
}
