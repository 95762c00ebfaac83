use yew::prelude::*;

use crate::components::vacancy_table::VacancyTable;
use crate::hooks::use_sorting::SortingProvider;

#[function_component(TablePage)]
pub fn table_page() -> Html {
    html! {
        <SortingProvider>
            <main class="table-page">
                <VacancyTable />
            </main>
        </SortingProvider>
    }
}
