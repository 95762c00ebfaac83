use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use super::queue_info::QueueInfo;
use super::reservation_span::{AccessDate, ReservationSpan};
use super::sort_dropdown::SortDropdown;
use super::status::Status;
use crate::hooks::use_area::use_area;
use crate::hooks::use_sorting::use_sorting;
use crate::hooks::use_vacancies::use_vacancies;
use crate::models::property::Property;
use crate::models::sorting::sort_vacancies;
use crate::pages::Route;
use crate::utils::format::{format_rent, format_size};

#[derive(Properties, PartialEq)]
pub struct VacancyCellProps {
    pub property: Rc<Property>,
}

/// One card of the grid: cover picture, queue badge, summary and rent.
#[function_component(VacancyCell)]
pub fn vacancy_cell(props: &VacancyCellProps) -> Html {
    let property = &props.property;
    let area = use_area(property.area.clone());
    let picture = area.data().and_then(|area| area.cover().cloned());

    html! {
        <Link<Route> to={Route::Vacancy { id: property.id }} classes="vacancy-link">
            <article class="vacancy-cell">
                <div class="cover">
                    if let Some(picture) = picture {
                        <img src={picture.url.clone()} alt={picture.alt_text().to_owned()} />
                    }
                    <QueueInfo class="corner" queue={property.queue_position} />
                </div>
                <h3>{property.area.clone()}</h3>
                <div>
                    {property.short_description.to_lowercase()}
                    {" ⋅ "}{format_size(property.size_sqm)}{" m"}<sup>{"2"}</sup>
                    {" ⋅ vån "}{property.floor}
                </div>
                <div>
                    <ReservationSpan from={property.reserve_from} until={property.reserve_until} />
                    {" ⋅ "}
                    <AccessDate date={property.move_in} />
                </div>
                <div class="rent">{format_rent(property.rent)}{"/mån"}</div>
            </article>
        </Link<Route>>
    }
}

/// Card grid of all vacancies in the shared sort order.
#[function_component(VacancyGrid)]
pub fn vacancy_grid() -> Html {
    let vacancies = use_vacancies();
    let sorting = use_sorting();

    let cells = vacancies.data().map(|list| {
        sort_vacancies(list, &sorting.sort)
            .into_iter()
            .map(|property| {
                html! {
                    <VacancyCell key={property.id} property={Rc::new(property.clone())} />
                }
            })
            .collect::<Html>()
    });

    html! {
        <section class="vacancy-grid-section">
            <div class="filter-bar">
                <SortDropdown />
            </div>
            <Status loading={vacancies.is_loading()} error={vacancies.blocking_error()} />
            <div class="vacancy-grid">
                {cells.unwrap_or_default()}
            </div>
        </section>
    }
}
