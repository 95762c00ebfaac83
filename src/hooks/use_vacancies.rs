use std::rc::Rc;
use yew::prelude::*;

use super::use_query::{QueryOptions, QueryState, use_query, use_query_client};
use crate::config::Config;
use crate::models::property::{Property, PropertyDetail, PropertyId};
use crate::services::api::{fetch_vacancies, fetch_vacancy};
use crate::services::query_cache::QueryKey;

async fn load_vacancies() -> Result<Rc<Vec<Property>>, crate::models::error::AppError> {
    fetch_vacancies().await.map(Rc::new)
}

/// The full vacancy list, refetched every 30 seconds while mounted.
#[hook]
pub fn use_vacancies() -> QueryState<Rc<Vec<Property>>> {
    use_query(
        QueryKey::Vacancies,
        QueryOptions::polling(Config::VACANCY_REFETCH_INTERVAL_MS),
        load_vacancies,
    )
}

/// One vacancy, seeded from the list until its own response arrives.
#[hook]
pub fn use_vacancy(id: PropertyId) -> QueryState<Rc<PropertyDetail>> {
    let client = use_query_client();
    // Keeps the list subscribed so the placeholder tracks it
    let _list = use_vacancies();
    let detail = use_query(QueryKey::Vacancy(id), QueryOptions::default(), move || async move {
        fetch_vacancy(id).await.map(Rc::new)
    });

    if detail.data.is_some() {
        return detail;
    }

    match client.vacancy_placeholder(id) {
        Some(placeholder) => QueryState {
            data: Some(Rc::new(placeholder)),
            is_placeholder: true,
            ..detail
        },
        None => detail,
    }
}
