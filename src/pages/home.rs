use yew::prelude::*;

use crate::components::vacancy_grid::VacancyGrid;
use crate::components::vacancy_map::VacancyMap;
use crate::hooks::use_sorting::SortingProvider;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <SortingProvider>
            <main class="home">
                <div class="home-list">
                    <VacancyGrid />
                </div>
                <div class="home-map">
                    <VacancyMap />
                </div>
            </main>
        </SortingProvider>
    }
}
