//! Rendering properties of the full hero view.

use dmi_hero::{
    HeroConfig, HeroView, PointerPosition, PointerSample, RevealSequencer, Stage, Viewport,
    render_hero_page,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn render(pointer: RwSignal<PointerPosition>, reveal: RevealSequencer) -> String {
    view! { <HeroView config=HeroConfig::default() pointer=pointer reveal=reveal /> }.to_html()
}

#[test]
fn same_state_renders_same_html() {
    let pointer = RwSignal::new(PointerPosition { x: 0.25, y: -0.75 });
    let reveal = RevealSequencer::new(Stage::ALL.len());
    assert_eq!(render(pointer, reveal), render(pointer, reveal));

    reveal.start();
    for stage in Stage::ALL {
        reveal.settle_stage(stage.index());
    }
    assert_eq!(render(pointer, reveal), render(pointer, reveal));

    assert_eq!(
        render_hero_page(&HeroConfig::default()),
        render_hero_page(&HeroConfig::default())
    );
}

#[test]
fn pointer_moves_every_parallax_layer() {
    let pointer = RwSignal::new(PointerPosition::CENTER);
    let reveal = RevealSequencer::new(Stage::ALL.len());
    let centered = render(pointer, reveal);

    let sample = PointerSample {
        client_x: 1280.0,
        client_y: 0.0,
        viewport: Viewport::new(1280.0, 800.0),
    };
    pointer.set(sample.normalize());
    let moved = render(pointer, reveal);

    assert_ne!(centered, moved);
    assert!(moved.contains("transform: translate(30px, -30px);"));
    assert!(moved.contains("transform: translate(-25px, 25px);"));
    assert!(moved.contains("transform: translate(20px, -20px);"));
}

#[test]
fn degenerate_viewport_renders_without_panicking() {
    let pointer = RwSignal::new(PointerPosition::CENTER);
    let sample = PointerSample {
        client_x: 0.0,
        client_y: 5.0,
        viewport: Viewport::default(),
    };
    pointer.set(sample.normalize());
    let html = render(pointer, RevealSequencer::new(Stage::ALL.len()));
    assert!(html.contains("NaNpx"));
    assert!(html.contains("Try the Demo"));
}

#[test]
fn underline_only_grows_after_loaded() {
    let pointer = RwSignal::new(PointerPosition::CENTER);
    let reveal = RevealSequencer::new(Stage::ALL.len());
    reveal.start();

    for stage in &Stage::ALL[..Stage::ALL.len() - 1] {
        reveal.settle_stage(stage.index());
        assert!(render(pointer, reveal).contains("scaleX(0)"));
    }
    reveal.settle_stage(Stage::Actions.index());
    assert!(render(pointer, reveal).contains("scaleX(1)"));
}

#[test]
fn page_shows_all_copy() {
    let html = render_hero_page(&HeroConfig::default());
    for text in [
        "DMI",
        "Design",
        "Made",
        "Intelligent",
        "launch-ready content",
        "Try the Demo",
        "Join Waitlist",
        "500+ Startups",
        "AI-Powered",
        "Minutes, Not Months",
    ] {
        assert!(html.contains(text), "missing {text:?}");
    }
}
