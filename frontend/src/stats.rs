use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LandingStats {
    #[serde(alias = "activeProjects")]
    pub active_projects: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum StatsSnapshot {
    #[default]
    Loading,
    Ready(LandingStats),
    Unavailable,
}

/// Strings the landing sections print as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsDisplay {
    pub active_projects: String,
}

const LOADING_PLACEHOLDER: &str = "…";
const UNAVAILABLE_PLACEHOLDER: &str = "—";

impl StatsSnapshot {
    pub fn display(&self) -> StatsDisplay {
        let active_projects = match self {
            StatsSnapshot::Loading => LOADING_PLACEHOLDER.to_string(),
            StatsSnapshot::Ready(stats) => format_count(stats.active_projects),
            StatsSnapshot::Unavailable => UNAVAILABLE_PLACEHOLDER.to_string(),
        };
        StatsDisplay { active_projects }
    }
}

/// `1234567` -> `"1,234,567"`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("stats endpoint answered with status {0}")]
    Status(u16),
}

pub async fn fetch_landing_stats() -> Result<LandingStats, StatsError> {
    let response = Request::get(&config::landing_stats_url()).send().await?;
    if !response.ok() {
        return Err(StatsError::Status(response.status()));
    }
    Ok(response.json::<LandingStats>().await?)
}

#[derive(Properties, PartialEq)]
pub struct StatsProviderProps {
    pub children: Children,
}

#[function_component(StatsProvider)]
pub fn stats_provider(props: &StatsProviderProps) -> Html {
    let snapshot = use_state(StatsSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_landing_stats().await {
                        Ok(stats) => {
                            info!("Landing stats loaded: {} active projects", stats.active_projects);
                            snapshot.set(StatsSnapshot::Ready(stats));
                        }
                        Err(e) => {
                            warn!("Landing stats unavailable: {}", e);
                            snapshot.set(StatsSnapshot::Unavailable);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<StatsSnapshot> context={(*snapshot).clone()}>
            { for props.children.iter() }
        </ContextProvider<StatsSnapshot>>
    }
}

#[hook]
pub fn use_landing_stats() -> StatsDisplay {
    use_context::<StatsSnapshot>().unwrap_or_default().display()
}
