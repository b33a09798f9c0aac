//! Forwarding of one-time sign-in tokens from the landing page to the
//! auth callback route.
//!
//! A landing URL like `/?token=abc123` is turned into exactly one
//! history-replacing navigation to `/auth/callback?token=abc123` per page
//! activation. Re-renders of the same page never navigate again.

use log::{error, info, warn};
use serde::Serialize;
use url::form_urlencoded;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::{use_location, use_navigator, Navigator};

use crate::Route;

pub const TOKEN_PARAM: &str = "token";
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Reads the sign-in token out of a query string.
///
/// The query may carry its leading `?`. Values are form-decoded the same way
/// the browser's `URLSearchParams` does it. Only the first `token` pair is
/// looked at, and an empty value counts as no token at all. Garbage input
/// just yields `None`.
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Decoded token value. The router encodes it once when it builds the URL.
    pub token: String,
    pub replace: bool,
}

/// Query of the callback URL, serialized by the router.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct TokenQuery<'a> {
    pub token: &'a str,
}

impl Redirect {
    pub fn replacing(token: String) -> Self {
        Self { token, replace: true }
    }

    pub fn query(&self) -> TokenQuery<'_> {
        TokenQuery { token: &self.token }
    }
}

pub trait Navigate {
    fn navigate(&self, redirect: &Redirect);
}

impl Navigate for Navigator {
    fn navigate(&self, redirect: &Redirect) {
        let query = redirect.query();
        let result = if redirect.replace {
            self.replace_with_query(&Route::AuthCallback, &query)
        } else {
            self.push_with_query(&Route::AuthCallback, &query)
        };
        if let Err(e) = result {
            error!("Navigation to {} failed: {:?}", CALLBACK_PATH, e);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    NotYetChecked,
    Checked,
}

/// One guard lives for one activation of the page.
#[derive(Debug, Default)]
pub struct RedirectGuard {
    state: GuardState,
}

impl RedirectGuard {
    /// Checks `query` on the first call only. Returns the redirect that was
    /// handed to `navigator`, if any.
    pub fn activate<N: Navigate + ?Sized>(&mut self, query: &str, navigator: &N) -> Option<Redirect> {
        if self.state == GuardState::Checked {
            return None;
        }
        self.state = GuardState::Checked;

        let redirect = Redirect::replacing(token_from_query(query)?);
        info!("Sign-in token on landing URL, forwarding to {}", CALLBACK_PATH);
        navigator.navigate(&redirect);
        Some(redirect)
    }
}

/// Runs the token check once when the calling page mounts.
#[hook]
pub fn use_token_redirect() {
    let navigator = use_navigator();
    let location = use_location();
    let guard = use_mut_ref(RedirectGuard::default);

    use_mount(move || {
        let query = location
            .as_ref()
            .map(|location| location.query_str().to_string())
            .unwrap_or_default();
        match navigator {
            Some(navigator) => {
                guard.borrow_mut().activate(&query, &navigator);
            }
            None => warn!("No router in scope, skipping sign-in token check"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use yew_router::Routable;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<Redirect>>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, redirect: &Redirect) {
            self.calls.borrow_mut().push(redirect.clone());
        }
    }

    /// The URL the router pushes for `redirect`: route path plus the
    /// serde_urlencoded query, same as `Navigator::replace_with_query`.
    fn router_target(redirect: &Redirect) -> String {
        let query = serde_urlencoded::to_string(redirect.query()).unwrap();
        format!("{}?{}", Route::AuthCallback.to_path(), query)
    }

    impl RecordingNavigator {
        fn targets(&self) -> Vec<String> {
            self.calls.borrow().iter().map(router_target).collect()
        }
    }

    #[test]
    fn no_token_means_no_navigation() {
        let navigator = RecordingNavigator::default();
        let mut guard = RedirectGuard::default();

        assert_eq!(guard.activate("?ref=twitter&utm_source=x", &navigator), None);
        assert!(navigator.calls.borrow().is_empty());

        // the check is spent even though nothing was found
        assert_eq!(guard.activate("?token=abc123", &navigator), None);
        assert!(navigator.calls.borrow().is_empty());
    }

    #[test]
    fn token_redirects_once_with_replace() {
        let navigator = RecordingNavigator::default();
        let mut guard = RedirectGuard::default();

        let redirect = guard.activate("?token=abc123", &navigator).unwrap();
        assert!(redirect.replace);
        assert_eq!(navigator.targets(), vec!["/auth/callback?token=abc123"]);
        assert!(navigator.calls.borrow()[0].replace);
    }

    #[test]
    fn rerenders_never_fire_twice() {
        let navigator = RecordingNavigator::default();
        let mut guard = RedirectGuard::default();

        for _ in 0..5 {
            guard.activate("?token=abc123", &navigator);
        }
        assert_eq!(navigator.calls.borrow().len(), 1);
    }

    #[test]
    fn each_activation_gets_its_own_redirect() {
        let navigator = RecordingNavigator::default();

        for _ in 0..2 {
            let mut guard = RedirectGuard::default();
            guard.activate("?token=abc123", &navigator);
            guard.activate("?token=abc123", &navigator);
        }
        assert_eq!(navigator.calls.borrow().len(), 2);
    }

    #[test]
    fn encoded_values_are_forwarded_without_double_encoding() {
        let navigator = RecordingNavigator::default();
        let mut guard = RedirectGuard::default();

        let redirect = guard.activate("?token=a%2Fb", &navigator).unwrap();
        assert_eq!(redirect.token, "a/b");
        assert_eq!(navigator.targets(), vec!["/auth/callback?token=a%2Fb"]);
    }

    #[test]
    fn router_url_decodes_back_to_the_landing_token() {
        for landing in [
            "?token=abc123",
            "?token=a%2Fb",
            "?token=%C3%A9t%C3%A9+%E2%9C%93",
            "?token=a%2Bb+c%26d%3De",
        ] {
            let navigator = RecordingNavigator::default();
            let redirect = RedirectGuard::default().activate(landing, &navigator).unwrap();

            let target = router_target(&redirect);
            let (path, query) = target.split_once('?').unwrap();
            assert_eq!(path, CALLBACK_PATH);
            assert_eq!(token_from_query(query), token_from_query(landing), "{}", landing);
        }
    }

    #[test]
    fn special_characters_are_encoded_exactly_once() {
        let redirect = Redirect::replacing("a+b c&d=e".to_string());
        assert_eq!(router_target(&redirect), "/auth/callback?token=a%2Bb+c%26d%3De");

        let redirect = Redirect::replacing("été ✓".to_string());
        assert_eq!(router_target(&redirect), "/auth/callback?token=%C3%A9t%C3%A9+%E2%9C%93");
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        for _ in 0..3 {
            let navigator = RecordingNavigator::default();
            assert_eq!(RedirectGuard::default().activate("?token=", &navigator), None);
            assert_eq!(RedirectGuard::default().activate("?token", &navigator), None);
            assert!(navigator.calls.borrow().is_empty());
        }
        assert_eq!(token_from_query("token="), None);
        assert_eq!(token_from_query("?token"), None);
    }

    #[test]
    fn first_token_wins() {
        assert_eq!(token_from_query("?token=first&token=second").as_deref(), Some("first"));
        assert_eq!(token_from_query("?token=&token=second"), None);
    }

    #[test]
    fn query_prefix_is_optional() {
        assert_eq!(token_from_query("token=abc").as_deref(), Some("abc"));
        assert_eq!(token_from_query("?token=abc").as_deref(), Some("abc"));
        assert_eq!(token_from_query("").as_deref(), None);
    }

    #[test]
    fn malformed_query_fails_open() {
        assert_eq!(token_from_query("?%%%&&==&tok%en=1"), None);
        assert_eq!(token_from_query("?=&=token"), None);
        assert_eq!(token_from_query("?token=%zz").as_deref(), Some("%zz"));
    }
}
