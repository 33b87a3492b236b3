//! Leptos components of the hero page.
//!
//! Every component is a pure function of the configuration table plus the
//! pointer and reveal signals handed down from [`HeroView`]. Continuous
//! motion is left to CSS: components only write inline `transform`,
//! `transition` and `animation` declarations.
//!
//! # Component Hierarchy
//!
//! ```text
//! HeroDocument (SSR only)
//! └── HeroView
//!     ├── Backdrop
//!     │   ├── Blob (per blob, pointer parallax + pulse loop)
//!     │   ├── Particle (per particle, float loop)
//!     │   └── GridOverlay (pointer parallax)
//!     ├── content container (fades in first)
//!     │   ├── StageSlot 0: Logo
//!     │   ├── StageSlot 1: Headline (accent underline waits for loaded)
//!     │   ├── StageSlot 2: Tagline
//!     │   ├── StageSlot 3: CallsToAction
//!     │   └── Stats
//!     └── CornerRings
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use dmi_hero::{components::HeroView, HeroConfig, RevealSequencer, Stage};
//!
//! let reveal = RevealSequencer::new(Stage::ALL.len());
//! view! { <HeroView config=HeroConfig::default() pointer=tracker.position() reveal=reveal /> }
//! ```

mod background;
mod cta;
mod headline;
mod page;
mod stats;

pub use background::{Backdrop, CornerRings};
pub use cta::CallsToAction;
pub use headline::{Headline, Logo, Tagline};
pub use page::{HeroDocument, HeroView};
pub use stats::Stats;
