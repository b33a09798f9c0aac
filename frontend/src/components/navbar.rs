use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::auth::AuthContext;
use crate::theme::{ThemeContext, ThemeMode};
use crate::Route;

/// Section anchors shown in the navbar, in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#why-choose-us", "Why Grainlify"),
    ("#testimonials", "Testimonials"),
];

const SCROLLED_THRESHOLD_PX: i32 = 80;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_context::<ThemeContext>();
    let auth = use_context::<AuthContext>();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map_or(0, |e| e.scroll_top());
                    is_scrolled.set(scroll_top > SCROLLED_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let mode = theme.as_ref().map(|t| t.mode).unwrap_or_default();
    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(theme) = &theme {
                theme.toggle.emit(());
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };
    let palette = mode.palette();

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span style={format!("color: {};", palette.accent)}>{"Grainlify"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a
                                href={*href}
                                class="nav-link"
                                style={format!("color: {};", palette.body)}
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                    <button class="nav-theme-toggle" onclick={toggle_theme}>
                        { if mode == ThemeMode::Dark { "Light mode" } else { "Dark mode" } }
                    </button>
                    {
                        match auth {
                            Some(auth) if auth.is_logged_in() => {
                                let logout = auth.logout.clone();
                                html! {
                                    <button
                                        class="nav-logout-button"
                                        onclick={Callback::from(move |_: MouseEvent| logout.emit(()))}
                                    >
                                        {"Sign out"}
                                    </button>
                                }
                            }
                            _ => html! {},
                        }
                    }
                </div>
            </div>
        </nav>
    }
}
