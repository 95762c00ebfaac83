use chrono::{NaiveDate, Utc};
use yew::prelude::*;

use crate::hooks::use_urgency::use_urgency;
use crate::utils::format::{format_date, format_date_range, today};

#[derive(Properties, PartialEq)]
pub struct ReservationSpanProps {
    pub from: NaiveDate,
    pub until: NaiveDate,
}

/// "Anmälan 3–17 okt." with the window turning red during its last day.
#[function_component(ReservationSpan)]
pub fn reservation_span(props: &ReservationSpanProps) -> Html {
    let urgent = use_urgency(props.until);
    let range = format_date_range(props.from, props.until, today(Utc::now()));

    html! {
        <span class={classes!("reservation", urgent.then_some("urgent"))}>
            {"Anmälan "}
            <time datetime={props.from.to_string()}>{range.from}</time>
            {range.separator}
            <time datetime={props.until.to_string()}>{range.until}</time>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessDateProps {
    pub date: NaiveDate,
}

/// "Tillträde 1 nov."
#[function_component(AccessDate)]
pub fn access_date(props: &AccessDateProps) -> Html {
    html! {
        <span class="access-date">
            {"Tillträde "}
            <time datetime={props.date.to_string()}>
                {format_date(props.date, today(Utc::now()))}
            </time>
        </span>
    }
}
