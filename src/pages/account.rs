use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_auth::use_auth;
use crate::models::user::Session;

/// Greeting and logout; sends signed-out visitors to the start page.
#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    {
        let signed_out = auth.is_authenticated() == Some(false);
        use_effect_with(signed_out, move |signed_out| {
            if *signed_out && let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    }

    let Some(Session::Authenticated(user)) = &auth.session else {
        return Html::default();
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <main class="account-page">
            <h1>{format!("Hej {}!", user.first_name)}</h1>
            <button class="logout-button" onclick={on_logout}>{"Logga ut"}</button>
        </main>
    }
}
