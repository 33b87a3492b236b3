use leptos::prelude::*;

use crate::config::{CtaConfig, FlourishConfig};
use crate::motion::{Easing, Transition};
use crate::styles;

/// Primary and secondary buttons. Neither is wired to an action.
#[component]
pub fn CallsToAction(
    primary: CtaConfig,
    secondary: CtaConfig,
    flourishes: FlourishConfig,
) -> impl IntoView {
    let ripple = Transition::tween(flourishes.cta_pulse_duration, Easing::EaseInOut)
        .animation_css(styles::CTA_PULSE, true);
    let nudge = Transition::tween(flourishes.arrow_nudge_duration, Easing::EaseInOut)
        .animation_css(styles::NUDGE, true);

    view! {
        <div class="hero-actions">
            <button type="button" class="hero-cta hero-cta-primary">
                <div class="hero-cta-fill"></div>
                <div class="hero-cta-ripple" style=ripple></div>
                <span class="hero-cta-label">
                    <span>{primary.glyph}</span>
                    {primary.label}
                </span>
            </button>
            <button type="button" class="hero-cta hero-cta-secondary">
                <div class="hero-cta-fill"></div>
                <span class="hero-cta-label">
                    {secondary.label}
                    <span class="hero-cta-arrow" style=nudge>{secondary.glyph}</span>
                </span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn buttons_carry_copy_and_loops() {
        let config = HeroConfig::default();
        let html = view! {
            <CallsToAction
                primary=config.primary_cta
                secondary=config.secondary_cta
                flourishes=config.flourishes
            />
        }
        .to_html();
        assert!(html.contains("Try the Demo"));
        assert!(html.contains("Join Waitlist"));
        assert!(html.contains("\u{2192}"));
        assert!(html.contains("animation: dmi-cta-pulse 2s"));
        assert!(html.contains("animation: dmi-nudge 1.5s"));
    }
}
