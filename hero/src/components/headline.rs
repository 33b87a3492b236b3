//! Logo badge, headline and tagline.

use leptos::prelude::*;

use crate::config::{FlourishConfig, HeadlineConfig, TweenConfig};
use crate::motion::{Easing, Transition};
use crate::styles;

/// Accent highlight: collapsed to the left edge until the page has loaded.
pub(crate) fn underline_style(tween: &TweenConfig, loaded: bool) -> String {
    let scale = if loaded { 1 } else { 0 };
    let transition = Transition::tween(tween.duration, tween.easing)
        .with_delay(tween.delay)
        .css_for(&["transform"]);
    format!("transform: skewX(-12deg) scaleX({scale}); transform-origin: 0% 50%; {transition}")
}

/// Brand badge with a looping shine.
#[component]
pub fn Logo(brand: String, flourishes: FlourishConfig) -> impl IntoView {
    let shine = Transition::tween(flourishes.shimmer_duration, Easing::Linear)
        .animation_css(styles::SHIMMER, true);
    view! {
        <div class="hero-logo">
            <div class="hero-logo-shine" style=shine></div>
            {brand}
        </div>
    }
}

/// Two-line headline; the accent highlight grows once `loaded` is `true`.
#[component]
pub fn Headline(headline: HeadlineConfig, #[prop(into)] loaded: Signal<bool>) -> impl IntoView {
    let underline = headline.underline;
    let words = headline
        .lead
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            // alternate words tilt away from each other on hover
            let class = if i % 2 == 0 {
                "hero-title-word tilt-right"
            } else {
                "hero-title-word tilt-left"
            };
            view! { <span class=class>{word}</span>" " }
        })
        .collect::<Vec<_>>();

    view! {
        <h1 class="hero-title">
            <div class="hero-title-lead">{words}</div>
            <div class="hero-title-accent-row">
                <span class="hero-title-accent">{headline.accent}</span>
                <div
                    class="hero-accent-underline"
                    style=move || underline_style(&underline, loaded.get())
                ></div>
            </div>
        </h1>
    }
}

/// Sub-headline paragraph.
#[component]
pub fn Tagline(text: String) -> impl IntoView {
    view! { <p class="hero-tagline">{text}</p> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn underline_waits_for_loaded() {
        let tween = HeroConfig::default().headline.underline;
        assert_eq!(
            underline_style(&tween, false),
            "transform: skewX(-12deg) scaleX(0); transform-origin: 0% 50%; \
             transition: transform 0.8s cubic-bezier(0, 0, 0.58, 1) 1.5s;"
        );
        assert!(underline_style(&tween, true).contains("scaleX(1)"));
    }

    #[test]
    fn headline_rerenders_underline_when_loaded_flips() {
        let loaded = RwSignal::new(false);
        let headline = HeroConfig::default().headline;
        let render = || view! { <Headline headline=headline.clone() loaded=loaded /> }.to_html();

        let before = render();
        assert!(before.contains("Design"));
        assert!(before.contains("Intelligent"));
        assert!(before.contains("scaleX(0)"));

        loaded.set(true);
        let after = render();
        assert!(after.contains("scaleX(1)"));
        assert!(!after.contains("scaleX(0)"));
    }

    #[test]
    fn logo_shine_sweeps_forever() {
        let html = view! { <Logo brand="DMI".to_string() flourishes=FlourishConfig::default() /> }
            .to_html();
        assert!(html.contains("DMI"));
        assert!(html.contains("animation: dmi-shimmer 2s linear 0s infinite;"));
    }
}
