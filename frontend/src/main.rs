use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod auth;
mod theme;
mod stats;
mod redirect;
mod components {
    pub mod navbar;
}
mod pages {
    pub mod landing;
    pub mod auth_callback;
}

use auth::AuthProvider;
use theme::ThemeProvider;
use stats::StatsProvider;
use pages::{
    landing::LandingPage,
    auth_callback::AuthCallback,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/callback")]
    AuthCallback,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <LandingPage /> }
        },
        Route::AuthCallback => {
            info!("Rendering Auth callback page");
            html! { <AuthCallback /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ThemeProvider>
                <AuthProvider>
                    <StatsProvider>
                        <Switch<Route> render={switch} />
                    </StatsProvider>
                </AuthProvider>
            </ThemeProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_route_matches_redirect_path() {
        assert_eq!(Route::AuthCallback.to_path(), redirect::CALLBACK_PATH);
        assert_eq!(Route::recognize(redirect::CALLBACK_PATH), Some(Route::AuthCallback));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        let resolved = Route::recognize("/nope/never").or_else(Route::not_found_route);
        assert_eq!(resolved, Some(Route::NotFound));
    }
}
