use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::property::PropertyId;

pub mod account;
pub mod detail;
pub mod history;
pub mod home;
pub mod not_found;
pub mod table;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tabell")]
    Table,
    #[at("/bostad/:id")]
    Vacancy { id: PropertyId },
    #[at("/konto")]
    Account,
    #[at("/historik")]
    History,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Page for a matched route.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <home::HomePage /> },
        Route::Table => html! { <table::TablePage /> },
        Route::Vacancy { id } => html! { <detail::VacancyPage {id} /> },
        Route::Account => html! { <account::AccountPage /> },
        Route::History => html! { <history::HistoryPage /> },
        Route::NotFound => html! { <not_found::NotFoundPage /> },
    }
}
