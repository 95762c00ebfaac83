use yew::prelude::*;

use crate::components::chart::QueueChart;

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    html! {
        <main class="history-page">
            <h1>{"Köplatser över tid"}</h1>
            <QueueChart />
        </main>
    }
}
