//! # dmi-hero
//!
//! The animated hero section of the DMI landing page as a Leptos view.
//!
//! The page is decorative: blurred gradient blobs and a line grid drift with
//! the pointer, the content reveals itself once in a staggered entrance, and a
//! handful of small loops (particles, shine, ripples, spinning rings) run for
//! as long as the page is open. No business logic lives here.
//!
//! ## Architecture
//!
//! ```text
//!  mousemove ──> PointerTracker ──Signal<PointerPosition>──┐
//!                                                           ├──> HeroView ──> DOM / HTML
//!  mount ──start()──> RevealSequencer ──phase, loaded──────┘        │
//!        <──settle_stage(i)── transitionend (per staged child) <────┘
//! ```
//!
//! - [`pointer`] - normalized pointer position and its subscription lifecycle
//! - [`reveal`] - one-shot `Hidden -> Visible` reveal and the loaded flag
//! - [`motion`] - springs, easings and poses rendered as CSS for the browser
//! - [`config`] - every literal of the page, overridable from JSON
//! - [`styles`] - static stylesheet plus generated `@keyframes`
//! - [`components`] - the Leptos views
//!
//! Interpolation is the browser's job. The crate only decides *targets* and
//! *timing* and writes them as inline CSS; CSS transitions and animations play
//! them.
//!
//! ## Static pre-render
//!
//! ```rust
//! use dmi_hero::{render_hero_page, HeroConfig};
//!
//! let html = render_hero_page(&HeroConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Intelligent"));
//! ```
//!
//! In the browser the view is mounted by `dmi-landing`, which wires a window
//! `mousemove` listener into [`PointerTracker`] and starts the reveal after
//! the first painted frame.
//!
//! ---
//!
//! Developed by The DMI Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod error;
pub mod motion;
pub mod pointer;
pub mod reveal;
pub mod styles;

pub use components::{HeroDocument, HeroView};
pub use config::HeroConfig;
pub use error::ConfigError;
pub use pointer::{PointerPosition, PointerSample, PointerSource, PointerTracker, Viewport};
pub use reveal::{RevealPhase, RevealSequencer, Stage};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the hero as a complete HTML document.
///
/// The snapshot is the initial state: pointer centered, content hidden, not
/// loaded. Useful as a static pre-render and as a test entry point.
pub fn render_hero_page(config: &HeroConfig) -> String {
    let doc = view! { <HeroDocument config=config.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_complete_document() {
        let html = render_hero_page(&HeroConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>DMI - Design Made Intelligent</title>"));
        assert!(html.contains("@keyframes dmi-float"));
        assert!(html.contains("id=\"dmi-hero-config\""));
    }

    #[test]
    fn document_starts_in_initial_state() {
        let html = render_hero_page(&HeroConfig::default());
        assert!(html.contains("data-phase=\"hidden\""));
        assert!(html.contains("scaleX(0)"));
        assert!(html.contains("transform: translate(0px, 0px);"));
    }

    #[test]
    fn config_override_reaches_the_page() {
        let config = HeroConfig::from_json(r#"{ "brand": "ACME", "tagline": "Ship it." }"#).unwrap();
        let html = render_hero_page(&config);
        assert!(html.contains("ACME"));
        assert!(html.contains("Ship it."));
    }
}
