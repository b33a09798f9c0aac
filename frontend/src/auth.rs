use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config::TOKEN_STORAGE_KEY;

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub token: Option<String>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

impl AuthContext {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

pub fn stored_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok())
        .flatten()
        .filter(|token| !token.is_empty())
}

fn store_token(token: &str) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                warn!("Failed to store session token");
            }
        }
    }
}

fn clear_token() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let token = use_state(stored_token);

    let login = {
        let token = token.clone();
        Callback::from(move |new_token: String| {
            store_token(&new_token);
            token.set(Some(new_token));
            info!("Session started");
        })
    };

    let logout = {
        let token = token.clone();
        Callback::from(move |_| {
            clear_token();
            token.set(None);
            info!("Session cleared");
        })
    };

    let context = AuthContext {
        token: (*token).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<AuthContext>>
    }
}
