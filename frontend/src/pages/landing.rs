use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::redirect::use_token_redirect;
use crate::stats::use_landing_stats;
use crate::theme::use_theme_mode;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "code-icon",
        title: "Smart Matching",
        description: "AI-powered algorithm matches contributors with projects that fit their skills and interests.",
    },
    Feature {
        icon: "git-branch-icon",
        title: "Seamless Integration",
        description: "Connect your GitHub, track contributions, and manage everything in one place.",
    },
    Feature {
        icon: "award-icon",
        title: "Rewards & Recognition",
        description: "Get compensated for your contributions with transparent grant distribution.",
    },
    Feature {
        icon: "shield-icon",
        title: "Secure & Transparent",
        description: "Built on blockchain technology ensuring secure, transparent transactions.",
    },
    Feature {
        icon: "zap-icon",
        title: "Real-time Updates",
        description: "Stay informed with instant notifications about project updates and opportunities.",
    },
    Feature {
        icon: "users-icon",
        title: "Community Driven",
        description: "Join a thriving community of developers, maintainers, and open-source enthusiasts.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Create Your Profile",
        description: "Sign up and showcase your skills, interests, and open-source experience.",
    },
    Step {
        number: "02",
        title: "Discover Projects",
        description: "Browse through curated projects or get matched with opportunities that fit you.",
    },
    Step {
        number: "03",
        title: "Start Contributing",
        description: "Connect with maintainers, pick up tasks, and start making an impact.",
    },
    Step {
        number: "04",
        title: "Earn Rewards",
        description: "Receive grants and recognition for your valuable contributions.",
    },
];

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let mode = use_theme_mode();
    use_token_redirect();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page-shell" style={mode.shell_style()}>
            <Navbar />
            <Hero />
            <Features />
            <HowItWorks />
            <WhyChooseUs />
            <Testimonials />
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    let palette = use_theme_mode().palette();
    html! {
        <div style="text-align: center; margin-bottom: 4rem;">
            <h2 style={format!("font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; color: {};", palette.heading)}>
                { props.title.clone() }
            </h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <p style={format!("font-size: 1.25rem; max-width: 42rem; margin: 0 auto; color: {};", palette.body)}>
                            { subtitle.clone() }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let palette = use_theme_mode().palette();
    html! {
        <section id="hero" class="hero" style="padding: 10rem 1.5rem 6rem; text-align: center;">
            <h1 style={format!("font-size: 4rem; font-weight: 800; color: {};", palette.heading)}>
                {"Grow Open Source, "}
                <span style={format!("color: {};", palette.accent)}>{"Get Rewarded"}</span>
            </h1>
            <p class="hero-subtitle" style={format!("font-size: 1.25rem; color: {};", palette.body)}>
                {"Grainlify connects contributors with the projects that need them and funds the work that gets done."}
            </p>
            <a href="#features" class="hero-cta">{"Explore Features"}</a>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let mode = use_theme_mode();
    let palette = mode.palette();
    html! {
        <section id="features" class="features" style="padding: 8rem 1.5rem;">
            <SectionHeader
                title="Everything You Need to Succeed"
                subtitle={Some(AttrValue::from("Powerful features designed to streamline your open-source journey"))}
            />
            <div class="features-grid">
                {
                    FEATURES.iter().map(|feature| html! {
                        <div class="feature-item" key={feature.title} style={mode.card_style()}>
                            <i class={feature.icon} style={format!("color: {};", palette.accent)}></i>
                            <h3 style={format!("color: {};", palette.heading)}>{feature.title}</h3>
                            <p style={format!("color: {};", palette.body)}>{feature.description}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    let mode = use_theme_mode();
    let palette = mode.palette();
    html! {
        <section id="how-it-works" class="how-it-works" style="padding: 8rem 1.5rem;">
            <SectionHeader title="How It Works" />
            <div class="steps-grid">
                {
                    STEPS.iter().map(|step| html! {
                        <div class="step" key={step.number} style={mode.card_style()}>
                            <div class="step-number" style={format!("font-size: 3.75rem; font-weight: 700; color: {};", palette.accent)}>
                                {step.number}
                            </div>
                            <h3 style={format!("color: {};", palette.heading)}>{step.title}</h3>
                            <p style={format!("color: {};", palette.body)}>{step.description}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    let palette = use_theme_mode().palette();
    let stats = use_landing_stats();
    html! {
        <section id="why-choose-us" class="why-choose-us" style="padding: 8rem 1.5rem;">
            <SectionHeader title="Why Choose Grainlify?" />
            <p class="stat-line" style={format!("text-align: center; color: {};", palette.body)}>
                {"Active Projects: "}
                <span style={format!("font-weight: 700; color: {};", palette.accent)}>{stats.active_projects}</span>
            </p>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials" style="padding: 8rem 1.5rem;">
            <SectionHeader title="What Builders Say" />
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let palette = use_theme_mode().palette();
    html! {
        <footer id="footer" class="landing-footer" style="padding: 4rem 0; text-align: center; border-top: 1px solid rgba(255, 255, 255, 0.2);">
            <p style={format!("color: {};", palette.body)}>{"© 2024 Grainlify. All rights reserved."}</p>
        </footer>
    }
}
