use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Loading spinner or error line for a query; renders nothing once data is in.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if let Some(msg) = &props.error {
        return html! {
            <div class="status error">
                <p>{"❌ Kunde inte hämta data: "}{msg}</p>
            </div>
        };
    }

    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Laddar..."}</p>
            </div>
        };
    }

    Html::default()
}
