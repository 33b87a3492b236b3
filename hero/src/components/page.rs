//! Root hero view and the static document around it.

use leptos::prelude::*;

use super::{Backdrop, CallsToAction, CornerRings, Headline, Logo, Stats, Tagline};
use crate::config::{CONFIG_ELEMENT_ID, HeroConfig};
use crate::pointer::PointerPosition;
use crate::reveal::{RevealSequencer, Stage, StageMotion};
use crate::styles::{HERO_CSS, animation_css};

/// The landing hero.
///
/// A pure function of the config, the pointer position and the reveal
/// signals. The caller owns the pointer subscription and decides when to call
/// [`RevealSequencer::start`].
#[component]
pub fn HeroView(
    config: HeroConfig,
    #[prop(into)] pointer: Signal<PointerPosition>,
    reveal: RevealSequencer,
) -> impl IntoView {
    let sheet = format!("{}\n{}", HERO_CSS, animation_css(&config));
    let HeroConfig {
        brand,
        headline,
        tagline,
        primary_cta,
        secondary_cta,
        stats,
        particles,
        blobs,
        grid,
        corners,
        entrance,
        flourishes,
    } = config;
    let [logo_motion, headline_motion, tagline_motion, actions_motion] =
        Stage::ALL.map(|stage| entrance.stage_motion(stage));
    let cta_flourishes = flourishes.clone();
    let phase = reveal.phase();
    let loaded = reveal.loaded();
    let container_style = move || entrance.container_style(phase.get());

    view! {
        <div class="hero-page">
            <style>{sheet}</style>
            <Backdrop blobs=blobs particles=particles grid=grid pointer=pointer />
            <div
                class="hero-content"
                style=container_style
                data-phase=move || phase.get().as_str()
            >
                <StageSlot motion=logo_motion reveal=reveal class="hero-logo-slot">
                    <Logo brand=brand flourishes=flourishes />
                </StageSlot>
                <StageSlot motion=headline_motion reveal=reveal class="hero-headline-slot">
                    <Headline headline=headline loaded=loaded />
                </StageSlot>
                <StageSlot motion=tagline_motion reveal=reveal class="hero-tagline-slot">
                    <Tagline text=tagline />
                </StageSlot>
                <StageSlot motion=actions_motion reveal=reveal class="hero-actions-slot">
                    <CallsToAction
                        primary=primary_cta
                        secondary=secondary_cta
                        flourishes=cta_flourishes
                    />
                </StageSlot>
                <Stats stats=stats />
            </div>
            <CornerRings corners=corners />
        </div>
    }
}

/// One staged child of the content container.
///
/// Reports its own `opacity` transition end to the sequencer; bubbling
/// `transitionend` events from hover effects further down are ignored.
#[component]
fn StageSlot(
    motion: StageMotion,
    reveal: RevealSequencer,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let index = motion.stage.index();
    let phase = reveal.phase();
    let style = move || motion.style(phase.get());
    let on_settled = move |ev: web_sys::TransitionEvent| {
        if ev.property_name() == "opacity" && ev.target() == ev.current_target() {
            reveal.settle_stage(index);
        }
    };

    view! {
        <div class=format!("hero-stage {class}") style=style on:transitionend=on_settled>
            {children()}
        </div>
    }
}

/// Complete pre-rendered page: pointer centered, content hidden, not loaded.
///
/// The config is embedded as JSON so a browser bundle mounted on the same
/// page boots with identical values.
#[component]
pub fn HeroDocument(config: HeroConfig) -> impl IntoView {
    let title = format!(
        "{} - {} {}",
        config.brand,
        config.headline.lead.join(" "),
        config.headline.accent
    );
    let embedded = embed_config(&config);
    let reveal = RevealSequencer::new(Stage::ALL.len());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
            </head>
            <body>
                <HeroView
                    config=config
                    pointer=Signal::stored(PointerPosition::CENTER)
                    reveal=reveal
                />
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
            </body>
        </html>
    }
}

/// JSON for the config `<script>`; `</` is escaped so copy cannot close it.
fn embed_config(config: &HeroConfig) -> String {
    match serde_json::to_string(config) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(err) => {
            tracing::warn!(error = %err, "hero config not embedded");
            String::from("{}")
        }
    }
}
