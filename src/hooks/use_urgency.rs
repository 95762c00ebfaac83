use chrono::{NaiveDate, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::deadline::is_urgent;

/// Whether the reservation window closing on `until` is about to end.
///
/// Re-checked every second while mounted; the timer belongs to the calling
/// component and stops when it unmounts.
#[hook]
pub fn use_urgency(until: NaiveDate) -> bool {
    let urgent = use_state_eq(|| is_urgent(until, Utc::now()));

    {
        let urgent = urgent.clone();
        use_effect_with(until, move |until| {
            let until = *until;
            urgent.set(is_urgent(until, Utc::now()));

            let interval = Interval::new(Config::URGENCY_TICK_MS, move || {
                urgent.set(is_urgent(until, Utc::now()));
            });

            move || drop(interval)
        });
    }

    *urgent
}
