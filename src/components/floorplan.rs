use yew::prelude::*;

use crate::models::property::{Address, PropertyId};
use crate::services::api::floorplan_src;
use crate::utils::format::format_postal_code;

#[derive(Properties, PartialEq)]
pub struct FloorplanProps {
    pub id: PropertyId,
    pub address: Address,
}

/// "Planritning" button opening the floorplan in a dialog.
#[function_component(FloorplanButton)]
pub fn floorplan_button(props: &FloorplanProps) -> Html {
    let open = use_state_eq(|| false);

    let on_open = {
        let open = open.clone();
        Callback::from(move |_| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };
    // Clicks inside the panel must not reach the backdrop
    let on_panel = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <button class="floorplan-button" onclick={on_open}>{"Planritning"}</button>
            if *open {
                <div class="dialog-backdrop" onclick={on_close}>
                    <div class="dialog-panel" role="dialog" aria-modal="true" onclick={on_panel}>
                        <h3 class="dialog-title">
                            <div class="street">{props.address.street.clone()}</div>
                            <div class="postal">
                                {format_postal_code(&props.address.postal_code)}{" "}{props.address.city.clone()}
                            </div>
                        </h3>
                        if let Some(src) = floorplan_src(props.id) {
                            <img class="floorplan" {src} alt="Planritning över bostaden" />
                        }
                    </div>
                </div>
            }
        </>
    }
}
