use std::time::Duration;

use dmi_hero::{HeroConfig, HeroView, PointerTracker, RevealSequencer, Stage};
use leptos::prelude::*;

use crate::browser::WindowPointerSource;

#[component]
pub fn Home(config: HeroConfig) -> impl IntoView {
    let tracker = PointerTracker::attach(&WindowPointerSource);
    let pointer = tracker.position();
    on_cleanup(move || tracker.detach());

    let reveal = RevealSequencer::new(Stage::ALL.len());
    let deadline = Duration::from_secs_f64(config.entrance.settle_time());
    Effect::new(move || {
        // Hidden styles must reach a painted frame, or nothing transitions.
        request_animation_frame(move || {
            request_animation_frame(move || {
                if reveal.start() {
                    set_timeout(
                        move || {
                            reveal.finish();
                        },
                        deadline,
                    );
                }
            });
        });
    });

    view! { <HeroView config=config pointer=pointer reveal=reveal /> }
}
