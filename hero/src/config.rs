//! Static configuration table for the hero view.
//!
//! Every literal the page shows or animates with lives here: copy, colors,
//! sizes, positions and timing constants. The types are:
//!
//! - **Serializable** - a page can ship a JSON override next to the wasm bundle
//! - **Default-able** - `HeroConfig::default()` is the DMI landing page itself
//! - **Partial** - `#[serde(default)]` lets an override name only what changes
//!
//! # Example
//!
//! ```rust
//! use dmi_hero::config::HeroConfig;
//!
//! let config = HeroConfig::from_json(r#"{ "brand": "ACME" }"#).unwrap();
//! assert_eq!(config.brand, "ACME");
//! assert_eq!(config.particles.len(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::motion::{Easing, SpringSpec, VisualState};

/// `id` of the `<script type="application/json">` element carrying an override.
pub const CONFIG_ELEMENT_ID: &str = "dmi-hero-config";

/// Everything the hero view renders that is not runtime state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Logo badge text
    pub brand: String,
    /// Main headline and its accent
    pub headline: HeadlineConfig,
    /// Sub-headline under the main headline
    pub tagline: String,
    /// Filled button
    pub primary_cta: CtaConfig,
    /// Outlined button
    pub secondary_cta: CtaConfig,
    /// Pill row under the buttons
    pub stats: StatsConfig,
    /// Drifting dots
    pub particles: Vec<ParticleConfig>,
    /// Pointer-following blurred blobs
    pub blobs: Vec<BlobConfig>,
    /// Pointer-following line grid
    pub grid: GridConfig,
    /// Spinning corner rings
    pub corners: Vec<CornerConfig>,
    /// One-shot reveal timing and poses
    pub entrance: EntranceConfig,
    /// Small looping details
    pub flourishes: FlourishConfig,
}

/// Main headline: a line of lead words plus a highlighted accent word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlineConfig {
    /// Words of the first line, each tilting on hover
    pub lead: Vec<String>,
    /// Highlighted word on the second line
    pub accent: String,
    /// Highlight bar drawn under the accent once the entrance has finished
    pub underline: TweenConfig,
}

/// Call-to-action button copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaConfig {
    /// Button text
    pub label: String,
    /// Leading icon on the primary button, trailing arrow on the secondary one
    pub glyph: String,
}

/// Stat pills under the buttons; they animate in on their own clock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Row fade-in delay (s)
    pub delay: f64,
    /// Row fade-in duration (s)
    pub duration: f64,
    /// Row starts this many px below its final position
    pub rise: f64,
    /// First pill pop delay (s)
    pub pill_delay: f64,
    /// Extra delay per following pill (s)
    pub pill_step: f64,
    /// Spring of each pill's pop-in
    pub pill_spring: SpringSpec,
    /// Pills, left to right
    pub items: Vec<StatConfig>,
}

/// One stat pill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatConfig {
    /// Trailing emoji
    pub icon: String,
    /// Pill label
    pub text: String,
    /// Pulsing status dot color
    pub dot_color: String,
}

/// A small dot drifting in a loop over the background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Diameter (px)
    pub size: f64,
    /// CSS color
    pub color: String,
    /// CSS length, e.g. `"20%"`
    pub top: String,
    /// CSS length, e.g. `"10%"`
    pub left: String,
    /// Loop start offset (s)
    pub delay: f64,
    /// Loop period (s)
    pub duration: f64,
}

/// Pointer-following motion of a background layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    /// Pixels of travel per unit of normalized pointer offset
    pub factor: f64,
    /// Spring the layer follows the pointer with
    pub spring: SpringSpec,
}

/// Large blurred gradient blob behind the content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlobConfig {
    /// Offsets from the page edges
    pub placement: Placement,
    /// CSS gradient direction, e.g. `"to bottom right"`
    pub direction: String,
    /// Gradient start color
    pub from: String,
    /// Gradient end color
    pub to: String,
    /// Diameter on wide viewports (px)
    pub size: f64,
    /// Diameter on narrow viewports (px)
    pub compact_size: f64,
    /// Pointer-following motion
    pub parallax: ParallaxConfig,
    /// Scale keyframes for the breathing loop
    pub pulse: Vec<f64>,
    /// Breathing loop period (s)
    pub pulse_duration: f64,
}

/// Faint line grid that drifts with the pointer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cell edge (px)
    pub cell: f64,
    /// CSS color of the grid lines
    pub line_color: String,
    /// Pointer-following motion
    pub parallax: ParallaxConfig,
}

/// Slowly spinning ring in a page corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerConfig {
    /// Offsets from the page edges
    pub placement: Placement,
    /// Diameter on wide viewports (px)
    pub size: f64,
    /// Diameter on narrow viewports (px)
    pub compact_size: f64,
    /// Ring and marker color
    pub border_color: String,
    /// Degrees per cycle; negative spins counter-clockwise
    pub turn: f64,
    /// Cycle period (s)
    pub duration: f64,
}

/// Absolute offsets as CSS lengths; unset sides stay `auto`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// `top` offset
    pub top: Option<String>,
    /// `right` offset
    pub right: Option<String>,
    /// `bottom` offset
    pub bottom: Option<String>,
    /// `left` offset
    pub left: Option<String>,
}

impl Placement {
    /// Anchored to the top-right corner.
    pub fn top_right(top: &str, right: &str) -> Self {
        Self {
            top: Some(top.into()),
            right: Some(right.into()),
            ..Self::default()
        }
    }

    /// Anchored to the bottom-left corner.
    pub fn bottom_left(bottom: &str, left: &str) -> Self {
        Self {
            bottom: Some(bottom.into()),
            left: Some(left.into()),
            ..Self::default()
        }
    }

    /// Anchored to the top-left corner.
    pub fn top_left(top: &str, left: &str) -> Self {
        Self {
            top: Some(top.into()),
            left: Some(left.into()),
            ..Self::default()
        }
    }

    /// Anchored to the bottom-right corner.
    pub fn bottom_right(bottom: &str, right: &str) -> Self {
        Self {
            bottom: Some(bottom.into()),
            right: Some(right.into()),
            ..Self::default()
        }
    }

    /// `top: ..; left: ..;` declarations for the set sides.
    pub fn to_css(&self) -> String {
        [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
        .into_iter()
        .filter_map(|(side, value)| value.as_ref().map(|v| format!("{side}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Timed change that is not a spring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenConfig {
    /// Seconds
    pub delay: f64,
    /// Seconds
    pub duration: f64,
    /// Timing curve
    pub easing: Easing,
}

/// Timing of the one-shot entrance transition.
///
/// The container fades in first; its children start only after it finished,
/// `stagger` seconds apart unless a variant sets its own delay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    /// Container opacity fade (s)
    pub container_fade: f64,
    /// Gap between consecutive children (s)
    pub stagger: f64,
    /// Logo, headline and tagline
    pub item: VariantConfig,
    /// Call-to-action row
    pub button: VariantConfig,
}

/// Hidden and visible poses of a staged element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Pose before the reveal; opacity must differ from `visible`
    pub hidden: VisualState,
    /// Pose after the reveal
    pub visible: VisualState,
    /// Spring carrying the element between the poses
    pub spring: SpringSpec,
    /// Replaces the stagger offset when set (s)
    #[serde(default)]
    pub delay: Option<f64>,
}

/// Small looping details on the logo and buttons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlourishConfig {
    /// Logo shine sweep start (px)
    pub shimmer_from: f64,
    /// Logo shine sweep end (px)
    pub shimmer_to: f64,
    /// Shine sweep period (s)
    pub shimmer_duration: f64,
    /// Peak scale of the primary button's ripple
    pub cta_pulse_peak: f64,
    /// Ripple period (s)
    pub cta_pulse_duration: f64,
    /// Secondary button arrow travel (px)
    pub arrow_nudge: f64,
    /// Arrow nudge period (s)
    pub arrow_nudge_duration: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            brand: "DMI".into(),
            headline: HeadlineConfig::default(),
            tagline: "From brand kit to launch-ready content, websites & apps \u{2014} powered by AI."
                .into(),
            primary_cta: CtaConfig {
                label: "Try the Demo".into(),
                glyph: "\u{2713}".into(),
            },
            secondary_cta: CtaConfig {
                label: "Join Waitlist".into(),
                glyph: "\u{2192}".into(),
            },
            stats: StatsConfig::default(),
            particles: default_particles(),
            blobs: default_blobs(),
            grid: GridConfig::default(),
            corners: default_corners(),
            entrance: EntranceConfig::default(),
            flourishes: FlourishConfig::default(),
        }
    }
}

impl Default for HeadlineConfig {
    fn default() -> Self {
        Self {
            lead: vec!["Design".into(), "Made".into()],
            accent: "Intelligent".into(),
            underline: TweenConfig {
                delay: 1.5,
                duration: 0.8,
                easing: Easing::EaseOut,
            },
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        let stat = |icon: &str, text: &str, dot_color: &str| StatConfig {
            icon: icon.into(),
            text: text.into(),
            dot_color: dot_color.into(),
        };
        Self {
            delay: 1.5,
            duration: 0.8,
            rise: 30.0,
            pill_delay: 1.8,
            pill_step: 0.1,
            pill_spring: SpringSpec::new(200.0, 10.0),
            items: vec![
                stat("\u{1F680}", "500+ Startups", "#4ade80"),
                stat("\u{1F916}", "AI-Powered", "#60a5fa"),
                stat("\u{26A1}", "Minutes, Not Months", "#c084fc"),
            ],
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell: 40.0,
            line_color: "rgba(0, 0, 0, 0.1)".into(),
            parallax: ParallaxConfig {
                factor: 20.0,
                spring: SpringSpec::new(50.0, 30.0),
            },
        }
    }
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            container_fade: 0.8,
            stagger: 0.15,
            item: VariantConfig {
                hidden: VisualState {
                    opacity: 0.0,
                    y: 100.0,
                    scale: 0.8,
                    rotate_x: 45.0,
                    blur: Some(10.0),
                    ..VisualState::default()
                },
                visible: VisualState {
                    blur: Some(0.0),
                    ..VisualState::default()
                },
                spring: SpringSpec::new(100.0, 20.0),
                delay: None,
            },
            button: VariantConfig {
                hidden: VisualState {
                    opacity: 0.0,
                    scale: 0.0,
                    rotate_y: 180.0,
                    ..VisualState::default()
                },
                visible: VisualState::default(),
                spring: SpringSpec::new(200.0, 15.0),
                delay: Some(0.3),
            },
        }
    }
}

impl Default for FlourishConfig {
    fn default() -> Self {
        Self {
            shimmer_from: -100.0,
            shimmer_to: 200.0,
            shimmer_duration: 2.0,
            cta_pulse_peak: 1.5,
            cta_pulse_duration: 2.0,
            arrow_nudge: 5.0,
            arrow_nudge_duration: 1.5,
        }
    }
}

fn default_particles() -> Vec<ParticleConfig> {
    let particle = |size: f64, color: &str, top: &str, left: &str, delay: f64, duration: f64| {
        ParticleConfig {
            size,
            color: color.into(),
            top: top.into(),
            left: left.into(),
            delay,
            duration,
        }
    };
    vec![
        particle(6.0, "#ef4444", "20%", "10%", 0.0, 4.0),
        particle(4.0, "#3b82f6", "30%", "85%", 1.0, 5.0),
        particle(8.0, "#8b5cf6", "70%", "15%", 2.0, 6.0),
        particle(3.0, "#10b981", "15%", "70%", 0.5, 3.0),
        particle(10.0, "#f59e0b", "80%", "80%", 1.5, 7.0),
        particle(5.0, "#ec4899", "60%", "90%", 2.5, 4.0),
    ]
}

fn default_blobs() -> Vec<BlobConfig> {
    vec![
        BlobConfig {
            placement: Placement::top_right("-10rem", "-10rem"),
            direction: "to bottom right".into(),
            from: "#fecaca".into(),
            to: "#fbcfe8".into(),
            size: 384.0,
            compact_size: 256.0,
            parallax: ParallaxConfig {
                factor: 30.0,
                spring: SpringSpec::new(50.0, 30.0),
            },
            pulse: vec![1.0, 1.1, 1.0],
            pulse_duration: 8.0,
        },
        BlobConfig {
            placement: Placement::bottom_left("-10rem", "-10rem"),
            direction: "to top right".into(),
            from: "#bfdbfe".into(),
            to: "#e9d5ff".into(),
            size: 320.0,
            compact_size: 256.0,
            parallax: ParallaxConfig {
                factor: -25.0,
                spring: SpringSpec::new(40.0, 25.0),
            },
            pulse: vec![1.1, 1.0, 1.1],
            pulse_duration: 6.0,
        },
    ]
}

fn default_corners() -> Vec<CornerConfig> {
    vec![
        CornerConfig {
            placement: Placement::top_left("2.5rem", "2.5rem"),
            size: 64.0,
            compact_size: 48.0,
            border_color: "#fecaca".into(),
            turn: 360.0,
            duration: 20.0,
        },
        CornerConfig {
            placement: Placement::bottom_right("2.5rem", "2.5rem"),
            size: 48.0,
            compact_size: 40.0,
            border_color: "#bfdbfe".into(),
            turn: -360.0,
            duration: 15.0,
        },
    ]
}

impl HeroConfig {
    /// Parse a JSON override (missing fields keep their defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HeroConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the animation engine cannot play.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let headline = &self.headline.underline;
        check_duration("headline.underline.delay", headline.delay)?;
        check_duration("headline.underline.duration", headline.duration)?;
        check_easing("headline.underline.easing", &headline.easing)?;

        check_duration("stats.delay", self.stats.delay)?;
        check_duration("stats.duration", self.stats.duration)?;
        check_duration("stats.pill_delay", self.stats.pill_delay)?;
        check_duration("stats.pill_step", self.stats.pill_step)?;
        check_spring("stats.pill_spring", &self.stats.pill_spring)?;

        for (i, particle) in self.particles.iter().enumerate() {
            check_size(&format!("particles[{i}].size"), particle.size)?;
            check_duration(&format!("particles[{i}].delay"), particle.delay)?;
            check_duration(&format!("particles[{i}].duration"), particle.duration)?;
        }

        for (i, blob) in self.blobs.iter().enumerate() {
            check_size(&format!("blobs[{i}].size"), blob.size)?;
            check_size(&format!("blobs[{i}].compact_size"), blob.compact_size)?;
            check_spring(&format!("blobs[{i}].parallax.spring"), &blob.parallax.spring)?;
            check_duration(&format!("blobs[{i}].pulse_duration"), blob.pulse_duration)?;
        }

        check_size("grid.cell", self.grid.cell)?;
        check_spring("grid.parallax.spring", &self.grid.parallax.spring)?;

        for (i, corner) in self.corners.iter().enumerate() {
            check_size(&format!("corners[{i}].size"), corner.size)?;
            check_size(&format!("corners[{i}].compact_size"), corner.compact_size)?;
            check_duration(&format!("corners[{i}].duration"), corner.duration)?;
        }

        let entrance = &self.entrance;
        check_duration("entrance.container_fade", entrance.container_fade)?;
        check_duration("entrance.stagger", entrance.stagger)?;
        for (name, variant) in [("item", &entrance.item), ("button", &entrance.button)] {
            check_spring(&format!("entrance.{name}.spring"), &variant.spring)?;
            if let Some(delay) = variant.delay {
                check_duration(&format!("entrance.{name}.delay"), delay)?;
            }
            check_fades(&format!("entrance.{name}"), variant)?;
        }

        let flourishes = &self.flourishes;
        check_duration("flourishes.shimmer_duration", flourishes.shimmer_duration)?;
        check_duration("flourishes.cta_pulse_duration", flourishes.cta_pulse_duration)?;
        check_duration("flourishes.arrow_nudge_duration", flourishes.arrow_nudge_duration)?;

        Ok(())
    }
}

fn check_duration(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration {
            field: field.to_string(),
            value,
        })
    }
}

fn check_size(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize {
            field: field.to_string(),
            value,
        })
    }
}

fn check_spring(field: &str, spring: &SpringSpec) -> Result<(), ConfigError> {
    let reason = if !(spring.stiffness.is_finite() && spring.stiffness > 0.0) {
        Some("stiffness must be positive")
    } else if !(spring.mass.is_finite() && spring.mass > 0.0) {
        Some("mass must be positive")
    } else if !(spring.damping.is_finite() && spring.damping >= 0.0) {
        Some("damping must not be negative")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::InvalidSpring {
            field: field.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Stages report completion through their `opacity` transition, so a variant
/// that keeps opacity constant would never settle.
fn check_fades(field: &str, variant: &VariantConfig) -> Result<(), ConfigError> {
    let (hidden, visible) = (variant.hidden.opacity, variant.visible.opacity);
    if hidden.is_finite() && visible.is_finite() && hidden != visible {
        Ok(())
    } else {
        Err(ConfigError::StaticOpacity {
            field: field.to_string(),
            opacity: hidden,
        })
    }
}

fn check_easing(field: &str, easing: &Easing) -> Result<(), ConfigError> {
    match easing {
        Easing::Spring(spring) => check_spring(field, spring),
        _ => Ok(()),
    }
}
