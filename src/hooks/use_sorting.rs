use yew::prelude::*;

use crate::models::sorting::{SortColumn, SortState};

/// Handle returned by `use_sorting` hook
#[derive(Clone, PartialEq)]
pub struct SortingHandle {
    pub sort: SortState,
    pub set_sort: Callback<SortState>,
}

impl SortingHandle {
    /// Dropdown choice: single column, ascending.
    pub fn select(&self, column: SortColumn) {
        self.set_sort.emit(SortState::select(column));
    }

    /// Header click on `column`.
    pub fn toggle(&self, column: SortColumn) {
        self.set_sort.emit(self.sort.toggled(column));
    }
}

#[derive(Properties, PartialEq)]
pub struct SortingProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Holds the page's sort order for every vacancy view below it.
#[function_component(SortingProvider)]
pub fn sorting_provider(props: &SortingProviderProps) -> Html {
    let sort = use_state_eq(SortState::default);

    let handle = SortingHandle {
        sort: *sort,
        set_sort: {
            let sort = sort.clone();
            Callback::from(move |next| sort.set(next))
        },
    };

    html! {
        <ContextProvider<SortingHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SortingHandle>>
    }
}

/// The sort order of the nearest `SortingProvider`, or the default order
/// with a no-op setter outside one.
#[hook]
pub fn use_sorting() -> SortingHandle {
    use_context::<SortingHandle>().unwrap_or_else(|| SortingHandle {
        sort: SortState::default(),
        set_sort: Callback::noop(),
    })
}
