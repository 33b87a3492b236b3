//! CSS for the hero page.
//!
//! Two layers:
//!
//! - [`HERO_CSS`] - static layout, palette and the hover/tap responses
//! - [`animation_css`] - `@keyframes` derived from a [`HeroConfig`]
//!
//! Components reference keyframes only through the names exported here, so a
//! loop and its `animation:` declaration cannot drift apart.
//!
//! ```rust
//! use dmi_hero::{config::HeroConfig, styles::{animation_css, HERO_CSS}};
//!
//! let css = format!("{}\n{}", HERO_CSS, animation_css(&HeroConfig::default()));
//! assert!(css.contains("@keyframes dmi-float"));
//! ```

use crate::config::HeroConfig;
use crate::motion::{Easing, FrameState, Keyframes, Transition};

/// Particle drift loop.
pub const FLOAT: &str = "dmi-float";
/// Logo shine sweep.
pub const SHIMMER: &str = "dmi-shimmer";
/// Primary button ripple.
pub const CTA_PULSE: &str = "dmi-cta-pulse";
/// Secondary button arrow.
pub const NUDGE: &str = "dmi-nudge";
/// Stats row fade-up.
pub const RISE: &str = "dmi-rise";
/// Stat pill pop-in.
pub const POP: &str = "dmi-pop";

/// Breathing loop of blob `index`.
pub fn blob_pulse(index: usize) -> String {
    format!("dmi-blob-pulse-{index}")
}

/// Rotation loop of corner ring `index`.
pub fn corner_spin(index: usize) -> String {
    format!("dmi-spin-{index}")
}

/// Every keyframe animation the config asks for.
pub fn keyframes(config: &HeroConfig) -> Vec<Keyframes> {
    let flourishes = &config.flourishes;
    let mut all = vec![
        Keyframes::evenly(
            FLOAT,
            [
                FrameState { rotate: 0.0, ..FrameState::translate(-10.0, -20.0) },
                FrameState { rotate: 180.0, ..FrameState::translate(10.0, 20.0) },
                FrameState { rotate: 360.0, ..FrameState::translate(-10.0, -20.0) },
            ],
        ),
        Keyframes::evenly(
            SHIMMER,
            [
                FrameState::translate(flourishes.shimmer_from, 0.0),
                FrameState::translate(flourishes.shimmer_to, 0.0),
            ],
        ),
        Keyframes::evenly(
            CTA_PULSE,
            [
                FrameState::scaled(0.0),
                FrameState::scaled(flourishes.cta_pulse_peak),
                FrameState::scaled(0.0),
            ],
        ),
        Keyframes::evenly(
            NUDGE,
            [
                FrameState::translate(0.0, 0.0),
                FrameState::translate(flourishes.arrow_nudge, 0.0),
                FrameState::translate(0.0, 0.0),
            ],
        ),
        Keyframes::evenly(
            RISE,
            [
                FrameState { opacity: Some(0.0), ..FrameState::translate(0.0, config.stats.rise) },
                FrameState::faded(1.0),
            ],
        ),
        Keyframes::evenly(
            POP,
            [
                FrameState { opacity: Some(0.0), ..FrameState::scaled(0.8) },
                FrameState::faded(1.0),
            ],
        ),
    ];

    all.extend(config.blobs.iter().enumerate().map(|(i, blob)| {
        Keyframes::evenly(blob_pulse(i), blob.pulse.iter().map(|s| FrameState::scaled(*s)))
    }));
    all.extend(config.corners.iter().enumerate().map(|(i, corner)| {
        Keyframes::evenly(
            corner_spin(i),
            [FrameState::rotated(0.0), FrameState::rotated(corner.turn)],
        )
    }));
    all
}

/// All config-driven `@keyframes` as one stylesheet.
pub fn animation_css(config: &HeroConfig) -> String {
    keyframes(config)
        .iter()
        .map(Keyframes::to_css)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `animation:` declaration for a particle drifting with its own period/offset.
pub fn float_animation(duration: f64, delay: f64) -> String {
    Transition::tween(duration, Easing::EaseInOut)
        .with_delay(delay)
        .animation_css(FLOAT, true)
}

/// Static stylesheet - light theme, Tailwind-like scale.
pub const HERO_CSS: &str = r#"
:root {
    --hero-red: #dc2626;
    --hero-red-dark: #b91c1c;
    --hero-ink: #111827;
    --hero-ink-soft: #374151;
    --hero-ink-muted: #1f2937;
    --hero-border: #e5e7eb;
    --hero-font: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--hero-font);
    -webkit-font-smoothing: antialiased;
}

/* ------------------------------------------------------------------ */
/* Page + backdrop                                                     */
/* ------------------------------------------------------------------ */

.hero-page {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: linear-gradient(to bottom right, #f8fafc, #ffffff, #f9fafb);
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    overflow: hidden;
}

.hero-blob {
    position: absolute;
    width: var(--blob-compact);
    height: var(--blob-compact);
    will-change: transform;
}

.hero-blob-body {
    width: 100%;
    height: 100%;
    border-radius: 9999px;
    opacity: 0.2;
    filter: blur(64px);
}

.hero-particle {
    position: absolute;
    border-radius: 9999px;
    opacity: 0.3;
}

.hero-grid {
    position: absolute;
    inset: 0;
    opacity: 0.05;
    will-change: transform;
}

.hero-corner {
    position: absolute;
    width: var(--corner-compact);
    height: var(--corner-compact);
    border: 2px solid;
    border-radius: 9999px;
    opacity: 0.3;
}

.hero-corner-spinner {
    position: relative;
    width: 100%;
    height: 100%;
}

.hero-corner-spinner::after {
    content: "";
    position: absolute;
    top: -4px;
    left: calc(50% - 3px);
    width: 6px;
    height: 6px;
    border-radius: 9999px;
    background: currentColor;
}

/* ------------------------------------------------------------------ */
/* Content                                                             */
/* ------------------------------------------------------------------ */

.hero-content {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    padding: 2rem 1rem;
}

.hero-stage {
    will-change: transform, opacity;
}

.hero-logo-slot {
    margin-bottom: 1.5rem;
}

.hero-logo {
    position: relative;
    overflow: hidden;
    padding: 0.5rem 1rem;
    border-radius: 1rem;
    background: var(--hero-red);
    color: #ffffff;
    font-weight: 700;
    font-size: 1.125rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.hero-logo:hover {
    transform: scale(1.05);
    box-shadow: 0 25px 50px -12px rgba(239, 68, 68, 0.4);
    animation: dmi-wiggle 0.4s ease-in-out;
}

.hero-logo:active {
    transform: scale(0.95);
}

.hero-logo-shine {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, transparent, #ffffff, transparent);
    opacity: 0;
    transition: opacity 0.3s ease;
}

.hero-logo-shine:hover {
    opacity: 0.2;
}

.hero-headline-slot {
    margin-bottom: 1rem;
    text-align: center;
}

.hero-title {
    margin: 0;
    color: var(--hero-ink);
    font-size: 1.875rem;
    font-weight: 900;
    line-height: 1.25;
    letter-spacing: -0.025em;
}

.hero-title-lead {
    margin-bottom: 0.5rem;
    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.hero-title-lead:hover {
    transform: scale(1.02);
}

.hero-title-word {
    display: inline-block;
    background-image: linear-gradient(to right, #111827, #374151, #111827);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.hero-title-word.tilt-right:hover {
    transform: perspective(600px) rotateY(5deg);
}

.hero-title-word.tilt-left:hover {
    transform: perspective(600px) rotateY(-5deg);
}

.hero-title-accent-row {
    position: relative;
    isolation: isolate;
}

.hero-title-accent {
    position: relative;
    z-index: 10;
    display: inline-block;
    color: var(--hero-red);
    font-weight: 900;
    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.hero-title-accent:hover {
    transform: scale(1.02);
}

.hero-accent-underline {
    position: absolute;
    inset: 0;
    z-index: -10;
    border-radius: 0.5rem;
    background: #fee2e2;
}

.hero-tagline-slot {
    max-width: 20rem;
    margin-bottom: 1rem;
    text-align: center;
}

.hero-tagline {
    margin: 0;
    color: var(--hero-ink-soft);
    font-size: 1.125rem;
    font-weight: 700;
    line-height: 1.25;
    transition: transform 0.2s ease;
}

.hero-tagline:hover {
    transform: scale(1.01);
}

/* ------------------------------------------------------------------ */
/* Calls to action                                                     */
/* ------------------------------------------------------------------ */

.hero-actions {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
    width: 100%;
    max-width: 20rem;
}

.hero-cta {
    position: relative;
    overflow: hidden;
    width: 100%;
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 0.75rem;
    font: inherit;
    font-size: 1rem;
    font-weight: 700;
    cursor: pointer;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    transition: transform 0.2s ease, box-shadow 0.2s ease, background-color 0.2s ease, border-color 0.2s ease;
}

.hero-cta:hover {
    transform: translateY(-3px) scale(1.05);
}

.hero-cta:active {
    transform: scale(0.95);
}

.hero-cta-primary {
    background: var(--hero-red);
    color: #ffffff;
}

.hero-cta-primary:hover {
    background: var(--hero-red-dark);
    box-shadow: 0 25px 50px -12px rgba(239, 68, 68, 0.4);
}

.hero-cta-secondary {
    background: #ffffff;
    color: var(--hero-ink-muted);
    border: 2px solid var(--hero-border);
}

.hero-cta-secondary:hover {
    background: #f9fafb;
    border-color: var(--hero-red);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.1);
}

.hero-cta-fill {
    position: absolute;
    inset: 0;
    opacity: 0;
    transition: opacity 0.3s ease;
}

.hero-cta-primary .hero-cta-fill {
    background: linear-gradient(to right, #ef4444, #b91c1c);
}

.hero-cta-secondary .hero-cta-fill {
    background: linear-gradient(to right, #fef2f2, #fee2e2);
}

.hero-cta:hover .hero-cta-fill {
    opacity: 1;
}

.hero-cta-ripple {
    position: absolute;
    inset: 0;
    background: #ffffff;
    opacity: 0;
}

.hero-cta:hover .hero-cta-ripple {
    opacity: 0.1;
}

.hero-cta-label {
    position: relative;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
}

.hero-cta-arrow {
    display: inline-block;
}

/* ------------------------------------------------------------------ */
/* Stats                                                               */
/* ------------------------------------------------------------------ */

.hero-stats {
    width: 100%;
    max-width: 20rem;
    margin-top: 3rem;
    text-align: center;
}

.hero-stats-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem;
}

.hero-stat {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: 1px solid #f3f4f6;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(4px);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.hero-stat:hover {
    transform: translateY(-3px) scale(1.05);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.hero-stat-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    animation: dmi-dot-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.hero-stat-text {
    color: var(--hero-ink-soft);
    font-size: 0.75rem;
    font-weight: 600;
}

.hero-stat-icon {
    font-size: 0.875rem;
}

@keyframes dmi-wiggle {
    0% { transform: scale(1.05) rotate(0deg); }
    33% { transform: scale(1.05) rotate(-1deg); }
    66% { transform: scale(1.05) rotate(1deg); }
    100% { transform: scale(1.05) rotate(0deg); }
}

@keyframes dmi-dot-pulse {
    50% { opacity: 0.5; }
}

/* ------------------------------------------------------------------ */
/* Breakpoints                                                         */
/* ------------------------------------------------------------------ */

@media (min-width: 640px) {
    .hero-blob { width: var(--blob-size); height: var(--blob-size); }
    .hero-corner { width: var(--corner-size); height: var(--corner-size); }
    .hero-content { padding: 2rem 1.5rem; }
    .hero-logo-slot { margin-bottom: 3rem; }
    .hero-logo { padding: 0.75rem 1.5rem; font-size: 1.5rem; }
    .hero-headline-slot { margin-bottom: 2rem; }
    .hero-title { font-size: 3rem; }
    .hero-title-lead { margin-bottom: 1rem; }
    .hero-tagline-slot { max-width: 42rem; margin-bottom: 2rem; }
    .hero-tagline { font-size: 1.5rem; }
    .hero-actions { flex-direction: row; gap: 1.5rem; max-width: 32rem; }
    .hero-cta { width: auto; padding: 1rem 2rem; font-size: 1.125rem; }
    .hero-stats { max-width: 56rem; margin-top: 5rem; }
    .hero-stats-row { gap: 2rem; }
    .hero-stat { gap: 0.75rem; padding: 1rem 1.5rem; }
    .hero-stat-dot { width: 0.75rem; height: 0.75rem; }
    .hero-stat-text { font-size: 1rem; }
    .hero-stat-icon { font-size: 1.125rem; }
}

@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
}

@media (min-width: 1024px) {
    .hero-content { padding: 2rem; }
    .hero-title { font-size: 4.5rem; }
    .hero-tagline-slot { max-width: 56rem; }
    .hero-tagline { font-size: 1.875rem; }
    .hero-stats-row { gap: 3rem; }
}

@media (min-width: 1280px) {
    .hero-title { font-size: 6rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_keyframes_block_per_named_loop() {
        let config = HeroConfig::default();
        let names = keyframes(&config)
            .into_iter()
            .map(|k| k.name)
            .collect::<Vec<_>>();
        for fixed in [FLOAT, SHIMMER, CTA_PULSE, NUDGE, RISE, POP] {
            assert_eq!(names.iter().filter(|n| n.as_str() == fixed).count(), 1, "{fixed}");
        }
        assert!(names.contains(&blob_pulse(0)));
        assert!(names.contains(&blob_pulse(1)));
        assert!(names.contains(&corner_spin(0)));
        assert!(names.contains(&corner_spin(1)));
        assert_eq!(names.len(), 6 + config.blobs.len() + config.corners.len());
    }

    #[test]
    fn corner_spin_follows_turn_direction() {
        let css = animation_css(&HeroConfig::default());
        assert!(css.contains(
            "@keyframes dmi-spin-1 {\n  0% { transform: translate(0px, 0px) scale(1) rotate(0deg); }\n  \
             100% { transform: translate(0px, 0px) scale(1) rotate(-360deg); }\n}"
        ));
    }

    #[test]
    fn float_loop_drifts_and_turns() {
        let css = animation_css(&HeroConfig::default());
        assert!(css.contains("  50% { transform: translate(10px, 20px) scale(1) rotate(180deg); }"));
        assert_eq!(
            float_animation(7.0, 1.5),
            "animation: dmi-float 7s cubic-bezier(0.42, 0, 0.58, 1) 1.5s infinite;"
        );
    }

    #[test]
    fn static_sheet_defines_referenced_helpers() {
        assert!(HERO_CSS.contains("@keyframes dmi-wiggle"));
        assert!(HERO_CSS.contains("@keyframes dmi-dot-pulse"));
        assert!(HERO_CSS.contains("var(--blob-size)"));
    }
}
