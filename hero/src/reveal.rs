//! One-shot entrance reveal.
//!
//! The hero content starts [`RevealPhase::Hidden`] and moves to
//! [`RevealPhase::Visible`] exactly once after mount. The browser plays the
//! CSS transition; each staged element reports back when its own `opacity`
//! transition ended. Once every stage has settled the loaded flag flips to
//! `true` for good, which starts the accent underline.
//!
//! The host also arms a deadline of [`EntranceConfig::settle_time`] after
//! `start()` and calls [`RevealSequencer::finish`] when it fires, so the flag
//! flips even if the browser never delivers a `transitionend` (tab in the
//! background, transitions disabled).
//!
//! ```text
//!  Hidden ──start()──> Visible ──settle_stage(0..N)──> loaded = true
//! ```
//!
//! There is no way back: no reverse transition, no cancellation, no retry.

use leptos::prelude::*;

use crate::config::{EntranceConfig, VariantConfig};
use crate::motion::{Easing, Transition};

/// Visual state of the staged content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    /// Before `start()`
    #[default]
    Hidden,
    /// After `start()`, for good
    Visible,
}

impl RevealPhase {
    /// Lowercase name, used as the `data-phase` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealPhase::Hidden => "hidden",
            RevealPhase::Visible => "visible",
        }
    }
}

/// Staged children of the hero content, in reveal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Brand badge
    Logo,
    /// Headline with the accent word
    Headline,
    /// Sub-headline
    Tagline,
    /// Call-to-action row
    Actions,
}

impl Stage {
    /// Every stage in reveal order.
    pub const ALL: [Stage; 4] = [Stage::Logo, Stage::Headline, Stage::Tagline, Stage::Actions];

    /// Position in [`Stage::ALL`]; also the stagger slot.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Hidden/visible styles and timing of one staged element.
#[derive(Clone, Debug, PartialEq)]
pub struct StageMotion {
    /// Which staged element
    pub stage: Stage,
    /// Hidden and visible poses
    pub variant: VariantConfig,
    /// Spring transition, delayed into its stagger slot
    pub transition: Transition,
}

impl StageMotion {
    /// Inline style for the element in `phase`.
    pub fn style(&self, phase: RevealPhase) -> String {
        let state = match phase {
            RevealPhase::Hidden => &self.variant.hidden,
            RevealPhase::Visible => &self.variant.visible,
        };
        let blurs = self.variant.hidden.blur.is_some() || self.variant.visible.blur.is_some();
        let properties: &[&str] = if blurs {
            &["opacity", "transform", "filter"]
        } else {
            &["opacity", "transform"]
        };
        format!("{} {}", state.to_css(), self.transition.css_for(properties))
    }
}

impl EntranceConfig {
    /// Container fade that runs before any child starts.
    pub fn container_transition(&self) -> Transition {
        Transition::tween(self.container_fade, Easing::EaseOut)
    }

    /// Inline style of the content container in `phase`.
    pub fn container_style(&self, phase: RevealPhase) -> String {
        let opacity = match phase {
            RevealPhase::Hidden => 0,
            RevealPhase::Visible => 1,
        };
        format!(
            "opacity: {opacity}; {}",
            self.container_transition().css_for(&["opacity"])
        )
    }

    /// Children wait for the container, then start `stagger` apart; a
    /// variant's own delay replaces its stagger offset.
    pub fn stage_motion(&self, stage: Stage) -> StageMotion {
        let variant = match stage {
            Stage::Actions => &self.button,
            _ => &self.item,
        };
        let offset = variant
            .delay
            .unwrap_or(self.stagger * stage.index() as f64);
        StageMotion {
            stage,
            variant: variant.clone(),
            transition: Transition::spring(variant.spring).with_delay(self.container_fade + offset),
        }
    }

    /// Seconds from `start()` until the last stage comes to rest; the reveal
    /// deadline.
    pub fn settle_time(&self) -> f64 {
        Stage::ALL
            .iter()
            .map(|stage| self.stage_motion(*stage).transition.end_time())
            .fold(self.container_fade, f64::max)
    }
}

/// Drives the reveal of one view instance.
///
/// A `Copy` handle over signals owned by the view's reactive owner; hand it
/// to the view and to whatever triggers [`start`](Self::start).
#[derive(Clone, Copy, Debug)]
pub struct RevealSequencer {
    phase: RwSignal<RevealPhase>,
    loaded: RwSignal<bool>,
    settled: StoredValue<Vec<bool>>,
}

impl RevealSequencer {
    /// Sequencer waiting on `stages` completion signals.
    pub fn new(stages: usize) -> Self {
        Self {
            phase: RwSignal::new(RevealPhase::Hidden),
            loaded: RwSignal::new(false),
            settled: StoredValue::new(vec![false; stages]),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ReadSignal<RevealPhase> {
        self.phase.read_only()
    }

    /// `true` once every stage has settled.
    pub fn loaded(&self) -> ReadSignal<bool> {
        self.loaded.read_only()
    }

    /// `Hidden -> Visible`. Returns `false` if the reveal already started.
    pub fn start(&self) -> bool {
        if self.phase.get_untracked() == RevealPhase::Visible {
            return false;
        }
        self.phase.set(RevealPhase::Visible);
        tracing::debug!(
            stages = self.settled.with_value(Vec::len),
            "entrance reveal started"
        );
        if self.settled.with_value(|settled| settled.iter().all(|done| *done)) {
            self.mark_loaded();
        }
        true
    }

    /// Completion signal of stage `index`.
    ///
    /// Returns `true` only for the call that flips the loaded flag. Signals
    /// before `start()`, repeats and unknown indices are ignored.
    pub fn settle_stage(&self, index: usize) -> bool {
        if self.phase.get_untracked() == RevealPhase::Hidden || self.loaded.get_untracked() {
            return false;
        }
        let known = self.settled.try_update_value(|settled| match settled.get_mut(index) {
            Some(done) => {
                *done = true;
                true
            }
            None => false,
        });
        if known != Some(true) {
            tracing::warn!(index, "ignoring completion of unknown reveal stage");
            return false;
        }
        if self.settled.with_value(|settled| settled.iter().all(|done| *done)) {
            self.mark_loaded();
            return true;
        }
        false
    }

    /// Deadline: treat every outstanding stage as settled.
    ///
    /// Returns `true` if this call flipped the loaded flag. Ignored before
    /// `start()` and once loaded.
    pub fn finish(&self) -> bool {
        if self.phase.get_untracked() == RevealPhase::Hidden || self.loaded.get_untracked() {
            return false;
        }
        let pending = self.settled.try_update_value(|settled| {
            let pending = settled.iter().filter(|done| !**done).count();
            settled.iter_mut().for_each(|done| *done = true);
            pending
        });
        tracing::debug!(pending = pending.unwrap_or(0), "reveal deadline reached");
        self.mark_loaded();
        true
    }

    fn mark_loaded(&self) {
        self.loaded.set(true);
        tracing::info!("entrance reveal settled, hero loaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::SpringSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden_and_not_loaded() {
        let reveal = RevealSequencer::new(Stage::ALL.len());
        assert_eq!(reveal.phase().get_untracked(), RevealPhase::Hidden);
        assert!(!reveal.loaded().get_untracked());
    }

    #[test]
    fn start_fires_once() {
        let reveal = RevealSequencer::new(2);
        assert!(reveal.start());
        assert_eq!(reveal.phase().get_untracked(), RevealPhase::Visible);
        assert!(!reveal.start());
        assert_eq!(reveal.phase().get_untracked(), RevealPhase::Visible);
    }

    #[test]
    fn loads_exactly_once_after_every_stage_settles() {
        let reveal = RevealSequencer::new(Stage::ALL.len());
        reveal.start();

        let mut flips = 0;
        for stage in Stage::ALL {
            assert!(!reveal.loaded().get_untracked());
            if reveal.settle_stage(stage.index()) {
                flips += 1;
            }
        }
        assert!(reveal.loaded().get_untracked());

        for stage in Stage::ALL {
            if reveal.settle_stage(stage.index()) {
                flips += 1;
            }
        }
        assert_eq!(flips, 1);
        assert!(reveal.loaded().get_untracked());
    }

    #[test]
    fn completion_before_start_is_ignored() {
        let reveal = RevealSequencer::new(1);
        assert!(!reveal.settle_stage(0));
        assert!(!reveal.loaded().get_untracked());

        reveal.start();
        assert!(!reveal.loaded().get_untracked());
        assert!(reveal.settle_stage(0));
    }

    #[test]
    fn repeated_and_unknown_stages_do_not_count() {
        let reveal = RevealSequencer::new(2);
        reveal.start();
        assert!(!reveal.settle_stage(0));
        assert!(!reveal.settle_stage(0));
        assert!(!reveal.settle_stage(7));
        assert!(!reveal.loaded().get_untracked());
        assert!(reveal.settle_stage(1));
    }

    #[test]
    fn zero_stages_load_on_start() {
        let reveal = RevealSequencer::new(0);
        assert!(!reveal.loaded().get_untracked());
        reveal.start();
        assert!(reveal.loaded().get_untracked());
    }

    #[test]
    fn deadline_loads_stage_that_never_reports() {
        let reveal = RevealSequencer::new(Stage::ALL.len());
        assert!(!reveal.finish());
        assert!(!reveal.loaded().get_untracked());

        reveal.start();
        // actions row never fires transitionend
        for stage in &Stage::ALL[..3] {
            assert!(!reveal.settle_stage(stage.index()));
        }
        assert!(!reveal.loaded().get_untracked());

        assert!(reveal.finish());
        assert!(reveal.loaded().get_untracked());
        assert!(!reveal.finish());
        assert!(!reveal.settle_stage(Stage::Actions.index()));
    }

    #[test]
    fn deadline_after_natural_settle_is_a_no_op() {
        let reveal = RevealSequencer::new(1);
        reveal.start();
        assert!(reveal.settle_stage(0));
        assert!(!reveal.finish());
    }

    #[test]
    fn children_wait_for_container_then_stagger() {
        let entrance = EntranceConfig::default();
        let delays = Stage::ALL
            .map(|stage| entrance.stage_motion(stage).transition.delay);
        assert_eq!(delays[0], 0.8);
        assert!((delays[1] - 0.95).abs() < 1e-9);
        assert!((delays[2] - 1.1).abs() < 1e-9);
        // explicit button delay replaces the stagger slot
        assert!((delays[3] - 1.1).abs() < 1e-9);
    }

    #[test]
    fn stage_style_switches_between_variants() {
        let motion = EntranceConfig::default().stage_motion(Stage::Logo);
        let hidden = motion.style(RevealPhase::Hidden);
        let visible = motion.style(RevealPhase::Visible);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(100px) scale(0.8)"));
        assert!(hidden.contains("filter: blur(10px);"));
        assert!(visible.starts_with("opacity: 1; transform: translateY(0px) scale(1)"));
        assert!(visible.contains("filter: blur(0px);"));
        assert!(visible.contains("transition: opacity "));
        assert!(visible.contains(", filter "));
    }

    #[test]
    fn button_stage_does_not_touch_filter() {
        let motion = EntranceConfig::default().stage_motion(Stage::Actions);
        assert_eq!(motion.variant.spring, SpringSpec::new(200.0, 15.0));
        let style = motion.style(RevealPhase::Hidden);
        assert!(style.contains("rotateY(180deg)"));
        assert!(!style.contains("filter"));
    }

    #[test]
    fn container_fades_before_children() {
        let entrance = EntranceConfig::default();
        assert_eq!(
            entrance.container_style(RevealPhase::Hidden),
            "opacity: 0; transition: opacity 0.8s cubic-bezier(0, 0, 0.58, 1) 0s;"
        );
        let settle = entrance.settle_time();
        assert!(settle > entrance.container_fade + 1.0 && settle < 3.0, "{settle}");
    }
}
