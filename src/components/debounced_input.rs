use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::Debouncer;

#[derive(Properties, PartialEq)]
pub struct DebouncedInputProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(Config::FILTER_DEBOUNCE_MS)]
    pub debounce_ms: u32,
}

/// Text input that reports its value once typing pauses.
#[function_component(DebouncedInput)]
pub fn debounced_input(props: &DebouncedInputProps) -> Html {
    let value = use_state(|| props.value.to_string());
    let debouncer = use_mut_ref(|| Debouncer::new(props.debounce_ms));

    // Follow outside resets
    {
        let value = value.clone();
        use_effect_with(props.value.clone(), move |external| {
            value.set(external.to_string());
        });
    }

    let oninput = {
        let value = value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let text = e.target_unchecked_into::<HtmlInputElement>().value();
            value.set(text.clone());

            let on_change = on_change.clone();
            debouncer.borrow().call(move || on_change.emit(text));
        })
    };

    html! {
        <input
            type="text"
            class="debounced-input"
            value={(*value).clone()}
            placeholder={props.placeholder.clone()}
            {oninput}
        />
    }
}
