use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_sorting::use_sorting;
use crate::models::sorting::SortColumn;

/// "Sortera efter" selector for the grid.
#[function_component(SortDropdown)]
pub fn sort_dropdown() -> Html {
    let sorting = use_sorting();
    let current = sorting.sort.column;

    let on_change = {
        let sorting = sorting.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Some(column) = SortColumn::from_id(&target.value()) {
                sorting.select(column);
            }
        })
    };

    html! {
        <label class="sort-dropdown">
            {"Sortera efter"}
            <select onchange={on_change} aria-label="Sortera efter">
                {
                    SortColumn::dropdown().iter().map(|column| {
                        let selected = *column == current;
                        html! {
                            <option value={column.id()} {selected}>{column.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </label>
    }
}
