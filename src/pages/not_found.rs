use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Sidan finns inte"}</h1>
            <Link<Route> to={Route::Home}>{"Till lediga bostäder"}</Link<Route>>
        </main>
    }
}
