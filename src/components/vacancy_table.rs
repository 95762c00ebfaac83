use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::debounced_input::DebouncedInput;
use super::status::Status;
use crate::hooks::use_sorting::use_sorting;
use crate::hooks::use_vacancies::use_vacancies;
use crate::models::property::{Property, PropertyType};
use crate::models::sorting::{FilterAction, SortColumn, VacancyFilter, visible_rows};
use crate::pages::Route;
use crate::utils::format::{format_clock, format_grant_share, format_integer, format_rent, format_size};

fn cell(column: SortColumn, property: &Property) -> Html {
    match column {
        SortColumn::QueuePosition => property
            .queue_position
            .position
            .map(|position| html! { {position} })
            .unwrap_or_default(),
        SortColumn::TotalInQueue => html! { {property.queue_position.total_in_queue} },
        SortColumn::Reserved if property.reserved => html! { {"ja"} },
        SortColumn::Reserved => Html::default(),
        SortColumn::Rent => html! {
            {format!("{} ({})", format_rent(property.rent), format_grant_share(property.rent))}
        },
        SortColumn::Area => html! {
            <Link<Route> to={Route::Vacancy { id: property.id }}>{property.area.clone()}</Link<Route>>
        },
        SortColumn::Floor => html! { {property.floor} },
        SortColumn::Description => html! { {property.description.clone()} },
        SortColumn::SizeSqm => html! { {format_size(property.size_sqm)} },
        SortColumn::Street => html! { {property.address.street.clone()} },
        SortColumn::PropertyType => html! { {property.property_type.label()} },
        SortColumn::ReserveUntil => html! { {property.reserve_until.to_string()} },
        SortColumn::MoveIn => html! { {property.move_in.to_string()} },
    }
}

impl Reducible for VacancyFilter {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: FilterAction) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[derive(Properties, PartialEq)]
struct ColumnFilterProps {
    column: SortColumn,
    filter: VacancyFilter,
    dispatch: Callback<FilterAction>,
}

/// Filter control under a header, for the columns that have one.
#[function_component(ColumnFilter)]
fn column_filter(props: &ColumnFilterProps) -> Html {
    match props.column {
        SortColumn::Area => {
            let on_change = props.dispatch.reform(FilterAction::SetArea);

            html! {
                <DebouncedInput
                    value={props.filter.area.clone()}
                    placeholder="Sök..."
                    {on_change}
                />
            }
        }
        SortColumn::PropertyType => {
            let on_change = props.dispatch.reform(|e: Event| {
                let target: HtmlSelectElement = e.target_unchecked_into();
                FilterAction::SetType(target.value().parse::<PropertyType>().ok())
            });

            html! {
                <select onchange={on_change} aria-label="Filtrera på typ">
                    <option value="" selected={props.filter.property_type.is_none()}>{"Alla"}</option>
                    {
                        PropertyType::all().iter().map(|t| {
                            let selected = props.filter.property_type == Some(*t);
                            html! { <option value={t.code()} {selected}>{t.label()}</option> }
                        }).collect::<Html>()
                    }
                </select>
            }
        }
        _ => Html::default(),
    }
}

/// Sortable, filterable table of every vacancy.
#[function_component(VacancyTable)]
pub fn vacancy_table() -> Html {
    let vacancies = use_vacancies();
    let sorting = use_sorting();
    let filter = use_reducer_eq(VacancyFilter::default);

    let dispatch = {
        let filter = filter.dispatcher();
        Callback::from(move |action| filter.dispatch(action))
    };

    let rows = vacancies
        .data()
        .map(|list| visible_rows(list, &sorting.sort, &filter))
        .unwrap_or_default();

    let headers = SortColumn::table().iter().map(|&column| {
        let onclick = {
            let sorting = sorting.clone();
            Callback::from(move |_| sorting.toggle(column))
        };
        let title = if sorting.sort.column == column && !sorting.sort.desc {
            "Sortera fallande"
        } else {
            "Sortera stigande"
        };

        html! {
            <th key={column.id()}>
                <div class="sortable" {onclick} {title}>
                    {column.label()}
                    {sorting.sort.indicator(column).unwrap_or_default()}
                </div>
                <ColumnFilter {column} filter={(*filter).clone()} dispatch={dispatch.clone()} />
            </th>
        }
    });

    let body = rows.iter().map(|property| {
        html! {
            <tr key={property.id}>
                { for SortColumn::table().iter().map(|&column| html! { <td>{cell(column, property)}</td> }) }
            </tr>
        }
    });

    html! {
        <section class="vacancy-table">
            <p class="freshness">
                {vacancies.updated_at.map(format_clock).unwrap_or_default()}
                if vacancies.is_fetching {
                    {" ..."}
                }
            </p>
            <Status loading={vacancies.is_loading()} error={vacancies.blocking_error()} />
            <table>
                <thead>
                    <tr>{ for headers }</tr>
                </thead>
                <tbody>
                    { for body }
                </tbody>
            </table>
            <div class="row-count">{format_integer(rows.len() as u64)}{" rader"}</div>
        </section>
    }
}
