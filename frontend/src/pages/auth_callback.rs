use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::{use_location, use_navigator, Link};

use crate::auth::AuthContext;
use crate::config::CALLBACK_REDIRECT_DELAY_MS;
use crate::redirect::token_from_query;
use crate::theme::use_theme_mode;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CallbackStatus {
    Pending,
    SignedIn,
    Invalid,
}

#[function_component]
pub fn AuthCallback() -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let location = use_location();
    let status = use_state(|| CallbackStatus::Pending);
    let mode = use_theme_mode();
    let palette = mode.palette();

    {
        let status = status.clone();
        use_mount(move || {
            let token = location
                .as_ref()
                .and_then(|location| token_from_query(location.query_str()));

            match (token, auth) {
                (Some(token), Some(auth)) => {
                    auth.login.emit(token);
                    status.set(CallbackStatus::SignedIn);
                    spawn_local(async move {
                        TimeoutFuture::new(CALLBACK_REDIRECT_DELAY_MS).await;
                        match navigator {
                            Some(navigator) => navigator.replace(&Route::Home),
                            None => warn!("No router in scope, staying on callback page"),
                        }
                    });
                }
                (Some(_), None) => {
                    warn!("Auth callback rendered without a session provider");
                    status.set(CallbackStatus::Invalid);
                }
                (None, _) => {
                    info!("Auth callback opened without a token");
                    status.set(CallbackStatus::Invalid);
                }
            }
        });
    }

    let message = match *status {
        CallbackStatus::Pending => html! { <p>{"Signing you in..."}</p> },
        CallbackStatus::SignedIn => html! { <p>{"Signed in, redirecting..."}</p> },
        CallbackStatus::Invalid => html! {
            <>
                <p>{"This sign-in link is invalid or has expired."}</p>
                <Link<Route> to={Route::Home} classes="forward-link">
                    {"Back to home"}
                </Link<Route>>
            </>
        },
    };

    html! {
        <div class="page-shell" style={mode.shell_style()}>
            <div
                class="callback-container"
                style={format!("min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; color: {};", palette.heading)}
            >
                { message }
            </div>
        </div>
    }
}
