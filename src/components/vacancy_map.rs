use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_place::use_place;
use crate::hooks::use_vacancies::use_vacancies;
use crate::models::place::AddressKey;
use crate::models::property::{Property, PropertyId};
use crate::utils::geo::Viewport;

const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Used until the container has been measured.
const FALLBACK_SIZE: (f64, f64) = (640.0, 480.0);

#[derive(Properties, PartialEq)]
struct VacancyMarkerProps {
    property: Rc<Property>,
    viewport: Viewport,
    open: bool,
    on_select: Callback<PropertyId>,
}

/// Marker for one property; absent until its address has been geocoded.
#[function_component(VacancyMarker)]
fn vacancy_marker(props: &VacancyMarkerProps) -> Html {
    let place = use_place(AddressKey::from(&props.property.address));

    let Some((left, top)) = place.and_then(|place| props.viewport.locate(place.lat, place.lon)) else {
        return Html::default();
    };

    let onclick = {
        let on_select = props.on_select.clone();
        let id = props.property.id;
        Callback::from(move |_| on_select.emit(id))
    };
    let style = format!("left: {left:.1}px; top: {top:.1}px;");

    html! {
        <div class="map-marker-anchor" {style}>
            <button class="map-marker" {onclick} aria-label={props.property.area.clone()} />
            if props.open {
                <div class="map-popup">
                    <strong>{format!("{}:", props.property.area)}</strong>
                    {" "}{props.property.description.clone()}
                </div>
            }
        </div>
    }
}

/// Tile map with a marker per listed vacancy.
#[function_component(VacancyMap)]
pub fn vacancy_map() -> Html {
    let vacancies = use_vacancies();
    let container_ref = use_node_ref();
    let size = use_state_eq(|| FALLBACK_SIZE);
    let open = use_state_eq(|| None::<PropertyId>);

    {
        let container_ref = container_ref.clone();
        let size = size.clone();

        use_effect_with(container_ref, move |container_ref| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                let measure = move || {
                    let width = f64::from(container.client_width());
                    let height = f64::from(container.client_height());
                    if width > 0.0 && height > 0.0 {
                        size.set((width, height));
                    }
                };
                measure();

                web_sys::window().map(|window| EventListener::new(&window, "resize", move |_| measure()))
            });

            move || drop(listener)
        });
    }

    let viewport = Viewport {
        center: Config::MAP_CENTER,
        zoom: Config::MAP_ZOOM,
        width: size.0,
        height: size.1,
    };

    let on_select = {
        let open = open.clone();
        Callback::from(move |id: PropertyId| {
            let next = if *open == Some(id) { None } else { Some(id) };
            open.set(next);
        })
    };

    let tiles = viewport.tiles().into_iter().map(|tile| {
        let style = format!("left: {:.1}px; top: {:.1}px;", tile.left, tile.top);
        html! {
            <img class="map-tile" src={tile.url(TILE_URL)} {style} alt="" />
        }
    });

    let markers = vacancies.data().into_iter().flat_map(|list| list.iter()).map(|property| {
        html! {
            <VacancyMarker
                key={property.id}
                property={Rc::new(property.clone())}
                {viewport}
                open={*open == Some(property.id)}
                on_select={on_select.clone()}
            />
        }
    });

    html! {
        <div class="vacancy-map" ref={container_ref}>
            <div class="map-tiles">{ for tiles }</div>
            <div class="map-markers">{ for markers }</div>
            <div class="map-attribution">
                {"© "}
                <a href="https://www.openstreetmap.org/copyright">{"OpenStreetMap"}</a>
                {" contributors"}
            </div>
        </div>
    }
}
