use yew::prelude::*;

use crate::components::area_pictures::AreaPictures;
use crate::components::floorplan::FloorplanButton;
use crate::components::queue_info::QueueInfo;
use crate::components::reservation_span::{AccessDate, ReservationSpan};
use crate::components::status::Status;
use crate::hooks::use_vacancies::use_vacancy;
use crate::models::property::{PropertyDetail, PropertyId};
use crate::utils::format::{format_grant_share, format_postal_code, format_rent, format_size};

const LISTING_URL: &str = "https://www.afbostader.se/lediga-bostader/bostadsdetalj/";

/// Link to the landlord's own listing.
fn listing_url(detail: &PropertyDetail) -> Option<String> {
    let mut url = reqwest::Url::parse(LISTING_URL).ok()?;
    url.query_pairs_mut()
        .append_pair("obj", &detail.id.to_string())
        .append_pair("area", &detail.area)
        .append_pair("mode", "0");
    Some(url.into())
}

#[derive(Properties, PartialEq)]
pub struct VacancyPageProps {
    pub id: PropertyId,
}

/// One vacancy: pictures, facts and floorplan.
///
/// Coming from the list, the listed entry is shown until the detail request
/// answers, so the page never starts blank.
#[function_component(VacancyPage)]
pub fn vacancy_page(props: &VacancyPageProps) -> Html {
    let vacancy = use_vacancy(props.id);

    let Some(detail) = vacancy.data.clone() else {
        return html! {
            <main class="vacancy-page">
                <Status loading={vacancy.is_loading()} error={vacancy.error.clone()} />
            </main>
        };
    };

    // The list entry has no orientation; the detail answer fills it in
    let facing = match (&detail.facing, vacancy.is_placeholder) {
        (Some(facing), _) => facing.clone(),
        (None, true) => "…".to_owned(),
        (None, false) => "–".to_owned(),
    };

    html! {
        <main class={classes!("vacancy-page", vacancy.is_placeholder.then_some("placeholder"))}>
            <h1>{detail.short_description.clone()}</h1>
            <AreaPictures area={detail.area.clone()} />
            <div class="vacancy-actions">
                <FloorplanButton id={detail.id} address={detail.address.clone()} />
                if let Some(href) = listing_url(&detail) {
                    <a class="listing-link" {href}>{"Visa på AF Bostäder"}</a>
                }
            </div>
            <dl class="vacancy-facts">
                <dt>{"Köplats"}</dt>
                <dd><QueueInfo queue={detail.queue_position} /></dd>
                <dt>{"Område"}</dt>
                <dd>{detail.area.clone()}</dd>
                <dt>{"Adress"}</dt>
                <dd>
                    {detail.address.street.clone()}{", "}
                    {format_postal_code(&detail.address.postal_code)}{" "}{detail.address.city.clone()}
                </dd>
                <dt>{"Typ"}</dt>
                <dd>{detail.property_type.label()}</dd>
                <dt>{"Golvyta"}</dt>
                <dd>{format_size(detail.size_sqm)}{" m"}<sup>{"2"}</sup></dd>
                <dt>{"Våning"}</dt>
                <dd>{detail.floor}</dd>
                <dt>{"Väderstreck"}</dt>
                <dd>{facing}</dd>
                <dt>{"Hyra"}</dt>
                <dd>{format!("{}/mån ({} av studiemedlet)", format_rent(detail.rent), format_grant_share(detail.rent))}</dd>
                <dt>{"Anmälan"}</dt>
                <dd><ReservationSpan from={detail.reserve_from} until={detail.reserve_until} /></dd>
                <dt>{"Inflyttning"}</dt>
                <dd><AccessDate date={detail.move_in} /></dd>
            </dl>
            <p class="description">{detail.description.clone()}</p>
        </main>
    }
}
