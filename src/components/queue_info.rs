use yew::prelude::*;

use crate::models::property::QueuePosition;
use crate::utils::format::format_queue_position;

#[derive(Properties, PartialEq)]
pub struct QueueInfoProps {
    pub queue: QueuePosition,
    #[prop_or_default]
    pub class: Classes,
}

/// Queue badge; first place gets highlighted.
#[function_component(QueueInfo)]
pub fn queue_info(props: &QueueInfoProps) -> Html {
    let first = props.queue.position == Some(1);

    html! {
        <div
            class={classes!("queue-info", first.then_some("first"), props.class.clone())}
            title="Köplats"
        >
            {format_queue_position(&props.queue)}
        </div>
    }
}
