//! Stat pills under the buttons.
//!
//! These run on their own mount-time clock (plain CSS `animation-delay`), not
//! on the entrance reveal. They still sit inside the content container, so
//! nothing shows before the container has faded in.

use leptos::prelude::*;

use crate::config::{StatConfig, StatsConfig};
use crate::motion::{Easing, Transition};
use crate::styles;

/// `animation:` for the `index`-th pill popping in.
pub(crate) fn pill_animation(stats: &StatsConfig, index: usize) -> String {
    Transition::spring(stats.pill_spring)
        .with_delay(stats.pill_delay + stats.pill_step * index as f64)
        .animation_css(styles::POP, false)
}

/// Row of stat pills rising in after the entrance.
#[component]
pub fn Stats(stats: StatsConfig) -> impl IntoView {
    let rise = Transition::tween(stats.duration, Easing::EaseOut)
        .with_delay(stats.delay)
        .animation_css(styles::RISE, false);
    let pills = stats
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! { <StatPill item=item.clone() pop=pill_animation(&stats, index) /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="hero-stats" style=rise>
            <div class="hero-stats-row">{pills}</div>
        </div>
    }
}

/// Pop-in runs on the slot so the pill's own hover transform stays free.
#[component]
fn StatPill(item: StatConfig, pop: String) -> impl IntoView {
    let dot = format!("background-color: {};", item.dot_color);
    view! {
        <div class="hero-stat-slot" style=pop>
            <div class="hero-stat">
                <div class="hero-stat-dot" style=dot></div>
                <span class="hero-stat-text">{item.text}</span>
                <span class="hero-stat-icon">{item.icon}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn pills_pop_in_one_after_another() {
        let stats = HeroConfig::default().stats;
        let delays = (0..stats.items.len())
            .map(|i| pill_animation(&stats, i))
            .collect::<Vec<_>>();
        assert!(delays[0].starts_with("animation: dmi-pop "));
        assert!(delays[0].ends_with(" 1.8s both;"));
        assert!(delays[1].ends_with(" 1.9s both;"));
        assert!(delays[2].ends_with(" 2s both;"));
    }

    #[test]
    fn row_rises_after_its_delay() {
        let html = view! { <Stats stats=HeroConfig::default().stats /> }.to_html();
        assert!(html.contains("animation: dmi-rise 0.8s cubic-bezier(0, 0, 0.58, 1) 1.5s both;"));
        assert!(html.contains("500+ Startups"));
        assert!(html.contains("background-color: #c084fc;"));
        assert_eq!(html.matches("class=\"hero-stat\"").count(), 3);
    }
}
