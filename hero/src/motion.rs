//! Motion parameters handed to the browser's animation engine.
//!
//! Nothing in here animates anything by itself. Each type renders the CSS the
//! browser needs to play a transition or an infinite loop:
//!
//! - [`Easing`] / [`SpringSpec`] - timing curves, springs sampled into `linear()`
//! - [`Transition`] - a `transition:` entry or an `animation:` shorthand
//! - [`VisualState`] - a start or end pose for the entrance transition
//! - [`Keyframes`] / [`FrameState`] - `@keyframes` for looping flourishes
//!
//! All numbers go through [`css_number`] so the same input always renders the
//! same string.

use serde::{Deserialize, Serialize};

/// Residual progress below which a spring counts as settled.
const REST_DELTA: f64 = 0.001;
/// Springs that never settle are cut off here.
const MAX_SETTLE_SECS: f64 = 10.0;
const SETTLE_STEP: f64 = 1.0 / 120.0;
/// Points in the `linear()` easing generated for a spring.
const EASING_SAMPLES: usize = 32;

/// Format a number for CSS: at most three decimals, no trailing zeros, no `-0`.
///
/// Non-finite values are passed through as `NaN` / `inf`. The browser drops
/// the declaration, which is the intended degenerate behavior for a
/// zero-sized viewport.
pub fn css_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Damped harmonic spring, parameterized like framer-style motion springs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringSpec {
    /// Spring constant (k)
    pub stiffness: f64,
    /// Damping coefficient (c)
    pub damping: f64,
    /// Moving mass (m)
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

impl SpringSpec {
    /// Spring with unit mass.
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Undamped angular frequency, `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `c / (2 * sqrt(k * m))`. Below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized progress (0 at rest, 1 at target) `t` seconds after release
    /// from rest.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            // Two real roots; exponential form stays finite for stiff springs.
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        }
    }

    /// Seconds until the residual stays under the rest delta for good.
    pub fn settle_time(&self) -> f64 {
        let steps = (MAX_SETTLE_SECS / SETTLE_STEP) as usize;
        let mut last_unsettled = 0.0;
        for i in 0..=steps {
            let t = i as f64 * SETTLE_STEP;
            if (1.0 - self.progress(t)).abs() > REST_DELTA {
                last_unsettled = t;
            }
        }
        (last_unsettled + SETTLE_STEP).min(MAX_SETTLE_SECS)
    }

    /// The spring curve as a CSS `linear()` easing, sampled over
    /// [`settle_time`](Self::settle_time).
    pub fn css_easing(&self) -> String {
        let settle = self.settle_time();
        let points = (0..=EASING_SAMPLES)
            .map(|i| {
                if i == EASING_SAMPLES {
                    return "1".to_string();
                }
                let t = settle * i as f64 / EASING_SAMPLES as f64;
                css_number(self.progress(t))
            })
            .collect::<Vec<_>>();
        format!("linear({})", points.join(", "))
    }
}

/// Timing curve for a transition or loop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// framer `easeIn`
    EaseIn,
    /// framer `easeOut`
    EaseOut,
    /// framer `easeInOut`
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier([f64; 4]),
    /// Spring sampled into `linear()`
    Spring(SpringSpec),
}

impl Easing {
    /// CSS `<easing-function>`.
    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "cubic-bezier(0.42, 0, 1, 1)".to_string(),
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)".to_string(),
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)".to_string(),
            Easing::CubicBezier([x1, y1, x2, y2]) => format!(
                "cubic-bezier({}, {}, {}, {})",
                css_number(*x1),
                css_number(*y1),
                css_number(*x2),
                css_number(*y2)
            ),
            Easing::Spring(spec) => spec.css_easing(),
        }
    }
}

/// Duration, delay and curve of one animated change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds
    pub duration: f64,
    /// Seconds before the change starts
    pub delay: f64,
    /// Timing curve
    pub easing: Easing,
}

impl Transition {
    /// Fixed-duration transition starting immediately.
    pub fn tween(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
        }
    }

    /// Spring transition; lasts exactly as long as the spring takes to settle.
    pub fn spring(spec: SpringSpec) -> Self {
        Self {
            duration: spec.settle_time(),
            delay: 0.0,
            easing: Easing::Spring(spec),
        }
    }

    /// Same transition, started `delay` seconds later.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Seconds from trigger to completion.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration
    }

    /// `transition: <prop> <dur> <easing> <delay>, ...;`
    pub fn css_for(&self, properties: &[&str]) -> String {
        let easing = self.easing.to_css();
        let duration = css_number(self.duration);
        let delay = css_number(self.delay);
        let entries = properties
            .iter()
            .map(|prop| format!("{prop} {duration}s {easing} {delay}s"))
            .collect::<Vec<_>>();
        format!("transition: {};", entries.join(", "))
    }

    /// `animation:` shorthand. Loops run forever; one-shots hold both ends.
    pub fn animation_css(&self, name: &str, looping: bool) -> String {
        format!(
            "animation: {name} {}s {} {}s {};",
            css_number(self.duration),
            self.easing.to_css(),
            css_number(self.delay),
            if looping { "infinite" } else { "both" }
        )
    }
}

/// Start or end pose of an element in the entrance transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualState {
    /// 0 (transparent) to 1
    pub opacity: f64,
    /// Vertical offset in px
    pub y: f64,
    /// Uniform scale factor
    pub scale: f64,
    /// Degrees
    pub rotate_x: f64,
    /// Degrees
    pub rotate_y: f64,
    /// Blur radius in px; `None` leaves `filter` untouched
    pub blur: Option<f64>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            y: 0.0,
            scale: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            blur: None,
        }
    }
}

impl VisualState {
    /// `translateY(..) scale(..) rotateX(..) rotateY(..)`
    pub fn transform_css(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotateX({}deg) rotateY({}deg)",
            css_number(self.y),
            css_number(self.scale),
            css_number(self.rotate_x),
            css_number(self.rotate_y)
        )
    }

    /// `opacity` and `transform` declarations, plus `filter` when blurred.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: {};",
            css_number(self.opacity),
            self.transform_css()
        );
        if let Some(blur) = self.blur {
            css.push_str(&format!(" filter: blur({}px);", css_number(blur)));
        }
        css
    }
}

/// One pose inside a looping keyframe animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameState {
    /// px
    pub x: f64,
    /// px
    pub y: f64,
    /// Uniform scale factor
    pub scale: f64,
    /// Degrees
    pub rotate: f64,
    /// Left untouched when `None`
    pub opacity: Option<f64>,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            opacity: None,
        }
    }
}

impl FrameState {
    /// Offset by `(x, y)` px.
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Scaled in place.
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Rotated by `rotate` degrees.
    pub fn rotated(rotate: f64) -> Self {
        Self {
            rotate,
            ..Self::default()
        }
    }

    /// At rest with the given opacity.
    pub fn faded(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::default()
        }
    }

    fn to_css(self) -> String {
        let mut css = format!(
            "transform: translate({}px, {}px) scale({}) rotate({}deg);",
            css_number(self.x),
            css_number(self.y),
            css_number(self.scale),
            css_number(self.rotate)
        );
        if let Some(opacity) = self.opacity {
            css.push_str(&format!(" opacity: {};", css_number(opacity)));
        }
        css
    }
}

/// A named `@keyframes` block.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    /// `animation-name`
    pub name: String,
    /// (offset in 0..=1, pose)
    pub frames: Vec<(f64, FrameState)>,
}

impl Keyframes {
    /// Spread the poses evenly across the cycle, first at 0%, last at 100%.
    pub fn evenly(name: impl Into<String>, states: impl IntoIterator<Item = FrameState>) -> Self {
        let states = states.into_iter().collect::<Vec<_>>();
        let last = states.len().saturating_sub(1).max(1) as f64;
        let frames = states
            .into_iter()
            .enumerate()
            .map(|(i, state)| (i as f64 / last, state))
            .collect();
        Self {
            name: name.into(),
            frames,
        }
    }

    /// The `@keyframes` rule.
    pub fn to_css(&self) -> String {
        let body = self
            .frames
            .iter()
            .map(|(offset, state)| format!("  {}% {{ {} }}", css_number(offset * 100.0), state.to_css()))
            .collect::<Vec<_>>()
            .join("\n");
        format!("@keyframes {} {{\n{}\n}}\n", self.name, body)
    }
}
