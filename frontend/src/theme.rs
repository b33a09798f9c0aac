use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Colours the landing sections draw with. Hex strings, ready for inline
/// `style` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub gradient: [&'static str; 3],
    pub heading: &'static str,
    pub body: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub accent: &'static str,
}

const DARK: Palette = Palette {
    gradient: ["#1a1512", "#231c17", "#2d241d"],
    heading: "#e8dfd0",
    body: "#b8a898",
    card_background: "rgba(255, 255, 255, 0.08)",
    card_border: "rgba(255, 255, 255, 0.15)",
    accent: "#c9983a",
};

const LIGHT: Palette = Palette {
    gradient: ["#e8dfd0", "#d4c5b0", "#c9b89a"],
    heading: "#2d2820",
    body: "#7a6b5a",
    card_background: "rgba(255, 255, 255, 0.15)",
    card_border: "rgba(255, 255, 255, 0.25)",
    accent: "#c9983a",
};

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn card_style(self) -> String {
        let palette = self.palette();
        format!(
            "background: {}; border: 1px solid {}; border-radius: 24px; padding: 2rem; backdrop-filter: blur(40px);",
            palette.card_background, palette.card_border
        )
    }

    /// Background for the whole page shell.
    pub fn shell_style(self) -> String {
        let [from, via, to] = self.palette().gradient;
        format!(
            "min-height: 100vh; transition: background 0.3s ease, color 0.3s ease; background: linear-gradient(to bottom right, {}, {}, {});",
            from, via, to
        )
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

fn stored_mode() -> Option<ThemeMode> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
        .flatten()
        .and_then(|value| ThemeMode::parse(&value))
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map_or(false, |query| query.matches())
}

fn initial_mode() -> ThemeMode {
    stored_mode().unwrap_or_else(|| {
        if prefers_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    })
}

fn persist_mode(mode: ThemeMode) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
                warn!("Could not persist theme choice");
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(initial_mode);

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_| {
            let next = (*mode).toggled();
            info!("Switching to {} theme", next.as_str());
            persist_mode(next);
            mode.set(next);
        })
    };

    let context = ThemeContext { mode: *mode, toggle };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Theme mode for sections; falls back to light outside a provider.
#[hook]
pub fn use_theme_mode() -> ThemeMode {
    use_context::<ThemeContext>()
        .map(|theme| theme.mode)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_stored_names() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(" light\n"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn stored_name_reads_back() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn palettes_differ_per_mode() {
        let light = ThemeMode::Light.palette();
        let dark = ThemeMode::Dark.palette();
        assert_ne!(light.heading, dark.heading);
        assert_ne!(light.gradient, dark.gradient);
        assert_eq!(light.accent, dark.accent);
    }

    #[test]
    fn shell_style_uses_the_mode_gradient() {
        let style = ThemeMode::Light.shell_style();
        for stop in LIGHT.gradient {
            assert!(style.contains(stop));
        }
        assert!(!style.contains(DARK.gradient[0]));
    }

    #[test]
    fn card_style_uses_palette_colours() {
        let style = ThemeMode::Dark.card_style();
        assert!(style.contains(DARK.card_background));
        assert!(style.contains(DARK.card_border));
    }
}
