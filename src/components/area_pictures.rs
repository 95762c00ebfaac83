use yew::prelude::*;

use crate::hooks::use_area::use_area;
use crate::models::area::Picture;

/// Slots in the gallery; the first is drawn large.
const SLOTS: usize = 5;

#[derive(Properties, PartialEq)]
struct AreaPictureProps {
    picture: Option<Picture>,
    large: bool,
}

#[function_component(AreaPicture)]
fn area_picture(props: &AreaPictureProps) -> Html {
    let class = classes!("area-picture", if props.large { "large" } else { "small" });

    match &props.picture {
        Some(picture) => html! {
            <img {class} src={picture.url.clone()} alt={picture.alt_text().to_owned()} />
        },
        None => html! { <div {class} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaPicturesProps {
    pub area: AttrValue,
}

/// Five-picture gallery of an area, with empty slots while loading or missing.
#[function_component(AreaPictures)]
pub fn area_pictures(props: &AreaPicturesProps) -> Html {
    let area = use_area(props.area.to_string());
    let pictures = area.data().map(|area| area.pictures.as_slice()).unwrap_or_default();

    html! {
        <div class="area-pictures">
            {
                (0..SLOTS).map(|slot| html! {
                    <AreaPicture picture={pictures.get(slot).cloned()} large={slot == 0} />
                }).collect::<Html>()
            }
        </div>
    }
}
