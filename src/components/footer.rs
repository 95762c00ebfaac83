use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::Route;

pub const SOURCE_URL: &str = "https://github.com/akeamc/afbostader";

/// Pages linked from the footer, in display order.
pub const LINKS: [(Route, &str); 2] = [(Route::Home, "Start"), (Route::History, "Historik")];

#[function_component(Footer)]
pub fn footer() -> Html {
    let links = LINKS.iter().map(|(route, label)| {
        html! {
            <li key={*label}>
                <Link<Route> to={route.clone()}>{*label}</Link<Route>>
            </li>
        }
    });

    html! {
        <footer class="app-footer">
            <div class="footer-inner">
                <span class="brand">
                    {"A"}
                    <a class="brand-muted" href="https://amcoff.net">{"(mcof)"}</a>
                    {"F Bostäder"}
                </span>
                <section>
                    <h3>{"Lediga bostäder"}</h3>
                    <ul>{ for links }</ul>
                </section>
                <p class="footer-source">
                    <a href={SOURCE_URL}>{"GitHub: akeamc/afbostader"}</a>
                </p>
            </div>
        </footer>
    }
}
