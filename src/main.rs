use yew::prelude::*;
use yew_router::prelude::*;

use bostad_dashboard::components::{Footer, Header};
use bostad_dashboard::pages::{Route, switch};
use bostad_dashboard::services::query_cache::QueryClient;

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| QueryClient::default());

    html! {
        <ContextProvider<QueryClient> context={(*client).clone()}>
            <BrowserRouter>
                <div class="app-container">
                    <Header />
                    <Switch<Route> render={switch} />
                    <Footer />
                </div>
            </BrowserRouter>

            <style>
                {include_str!("style.css")}
            </style>
        </ContextProvider<QueryClient>>
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
