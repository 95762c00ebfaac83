use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth::{LoginStatus, use_auth};
use crate::hooks::use_vacancies::use_vacancies;
use crate::models::user::{Credentials, Session};
use crate::pages::Route;

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    to: Route,
    #[prop_or_default]
    children: Html,
}

/// Navigation link, highlighted on its own page.
#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let active = use_route::<Route>().as_ref() == Some(&props.to);

    html! {
        <Link<Route> to={props.to.clone()} classes={classes!("nav-link", active.then_some("active"))}>
            {props.children.clone()}
        </Link<Route>>
    }
}

/// "Lediga bostäder" with the number of listed vacancies once known.
#[function_component(AvailableLink)]
fn available_link() -> Html {
    let vacancies = use_vacancies();
    let count = vacancies.data().map(|list| list.len());

    html! {
        <NavLink to={Route::Home}>
            {"Lediga bostäder"}
            if let Some(count) = count {
                <span class="nav-count">{count}</span>
            }
        </NavLink>
    }
}

/// Email and password form posting to `/login`.
#[function_component(LoginForm)]
fn login_form() -> Html {
    let auth = use_auth();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let login = auth.login.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            login.emit(Credentials::new(value(&email_ref), value(&password_ref)));
        })
    };

    let invalid = matches!(auth.login_status, LoginStatus::InvalidCredentials);

    html! {
        <form class="login-form" {onsubmit}>
            <p>{"Använd samma inloggningsuppgifter som på afbostader.se."}</p>
            <label>
                {"E-postadress"}
                <input ref={email_ref} name="email" type="email" required={true} aria-invalid={invalid.to_string()} />
            </label>
            <label>
                {"Lösenord"}
                <input ref={password_ref} name="password" type="password" required={true} aria-invalid={invalid.to_string()} />
            </label>
            if invalid {
                <p class="login-error">{"Felaktigt användarnamn eller lösenord."}</p>
            }
            if let LoginStatus::Failed(msg) = &auth.login_status {
                <p class="login-error">{"Inloggningen misslyckades: "}{msg.clone()}</p>
            }
            <button type="submit" disabled={auth.login_status.is_pending()}>{"Logga in"}</button>
        </form>
    }
}

/// Avatar linking to the account page, or a login button with its form.
#[function_component(AuthSection)]
fn auth_section() -> Html {
    let auth = use_auth();
    let form_open = use_state_eq(|| false);

    let toggle_form = {
        let form_open = form_open.clone();
        Callback::from(move |_| form_open.set(!*form_open))
    };

    match &auth.session {
        // Session not known yet
        None => Html::default(),
        Some(Session::Authenticated(user)) => html! {
            <Link<Route> to={Route::Account} classes="avatar">{user.initials()}</Link<Route>>
        },
        Some(Session::Unauthenticated) => html! {
            <div class="auth-section">
                <button class="login-button" onclick={toggle_form}>{"Logga in"}</button>
                if *form_open {
                    <div class="login-popover">
                        <LoginForm />
                    </div>
                }
            </div>
        },
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                {"A"}<span class="brand-muted">{"(mcof)"}</span>{"F "}
                <span class="brand-long">{"Bostäder"}</span>
            </div>
            <nav class="app-nav">
                <AvailableLink />
                <NavLink to={Route::Table}>{"Tabell"}</NavLink>
                <NavLink to={Route::History}>{"Historik"}</NavLink>
            </nav>
            <div class="auth">
                <AuthSection />
            </div>
        </header>
    }
}
