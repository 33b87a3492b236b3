//! Decorative layers behind and around the content.

use leptos::prelude::*;

use crate::config::{BlobConfig, CornerConfig, GridConfig, ParticleConfig};
use crate::motion::{Easing, Transition, css_number};
use crate::pointer::PointerPosition;
use crate::styles;

/// `transform` for a layer that follows the pointer `factor` px per unit.
pub(crate) fn parallax_transform(position: PointerPosition, factor: f64) -> String {
    let (x, y) = position.scaled(factor);
    format!(
        "transform: translate({}px, {}px);",
        css_number(x),
        css_number(y)
    )
}

/// Blobs, drifting particles and the grid.
#[component]
pub fn Backdrop(
    blobs: Vec<BlobConfig>,
    particles: Vec<ParticleConfig>,
    grid: GridConfig,
    #[prop(into)] pointer: Signal<PointerPosition>,
) -> impl IntoView {
    view! {
        <div class="hero-backdrop" aria-hidden="true">
            {blobs
                .into_iter()
                .enumerate()
                .map(|(index, blob)| view! { <Blob index=index blob=blob pointer=pointer /> })
                .collect::<Vec<_>>()}
            {particles
                .into_iter()
                .map(|particle| view! { <Particle particle=particle /> })
                .collect::<Vec<_>>()}
            <GridOverlay grid=grid pointer=pointer />
        </div>
    }
}

/// Outer element follows the pointer, inner element breathes.
#[component]
fn Blob(index: usize, blob: BlobConfig, pointer: Signal<PointerPosition>) -> impl IntoView {
    let frame = format!(
        "{} --blob-size: {}px; --blob-compact: {}px;",
        blob.placement.to_css(),
        css_number(blob.size),
        css_number(blob.compact_size)
    );
    let follow = Transition::spring(blob.parallax.spring).css_for(&["transform"]);
    let factor = blob.parallax.factor;
    let style = move || {
        format!(
            "{frame} {} {follow}",
            parallax_transform(pointer.get(), factor)
        )
    };

    let body = format!(
        "background: linear-gradient({}, {}, {}); {}",
        blob.direction,
        blob.from,
        blob.to,
        Transition::tween(blob.pulse_duration, Easing::EaseInOut)
            .animation_css(&styles::blob_pulse(index), true)
    );

    view! {
        <div class="hero-blob" style=style>
            <div class="hero-blob-body" style=body></div>
        </div>
    }
}

#[component]
fn Particle(particle: ParticleConfig) -> impl IntoView {
    let size = css_number(particle.size);
    let style = format!(
        "top: {}; left: {}; width: {size}px; height: {size}px; background-color: {}; {}",
        particle.top,
        particle.left,
        particle.color,
        styles::float_animation(particle.duration, particle.delay)
    );
    view! { <div class="hero-particle" style=style></div> }
}

#[component]
fn GridOverlay(grid: GridConfig, pointer: Signal<PointerPosition>) -> impl IntoView {
    let cell = css_number(grid.cell);
    let lines = format!(
        "background-image: linear-gradient({color} 1px, transparent 1px), \
         linear-gradient(90deg, {color} 1px, transparent 1px); \
         background-size: {cell}px {cell}px;",
        color = grid.line_color
    );
    let follow = Transition::spring(grid.parallax.spring).css_for(&["transform"]);
    let factor = grid.parallax.factor;
    let style = move || {
        format!(
            "{lines} {} {follow}",
            parallax_transform(pointer.get(), factor)
        )
    };
    view! { <div class="hero-grid" style=style></div> }
}

/// Spinning rings pinned to the page corners.
#[component]
pub fn CornerRings(corners: Vec<CornerConfig>) -> impl IntoView {
    corners
        .into_iter()
        .enumerate()
        .map(|(index, corner)| {
            let ring = format!(
                "{} --corner-size: {}px; --corner-compact: {}px; border-color: {color}; color: {color};",
                corner.placement.to_css(),
                css_number(corner.size),
                css_number(corner.compact_size),
                color = corner.border_color
            );
            let spin = Transition::tween(corner.duration, Easing::Linear)
                .animation_css(&styles::corner_spin(index), true);
            view! {
                <div class="hero-corner" style=ring aria-hidden="true">
                    <div class="hero-corner-spinner" style=spin></div>
                </div>
            }
        })
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn parallax_follows_pointer_and_factor() {
        let corner = PointerPosition { x: 1.0, y: -1.0 };
        assert_eq!(parallax_transform(corner, 30.0), "transform: translate(30px, -30px);");
        assert_eq!(parallax_transform(corner, -25.0), "transform: translate(-25px, 25px);");
        assert_eq!(
            parallax_transform(PointerPosition::CENTER, 20.0),
            "transform: translate(0px, 0px);"
        );
    }

    #[test]
    fn backdrop_tracks_pointer_signal() {
        let config = HeroConfig::default();
        let pointer = RwSignal::new(PointerPosition::CENTER);
        let render = || {
            view! {
                <Backdrop
                    blobs=config.blobs.clone()
                    particles=config.particles.clone()
                    grid=config.grid.clone()
                    pointer=pointer
                />
            }
            .to_html()
        };

        let centered = render();
        assert!(centered.contains("transform: translate(0px, 0px);"));
        assert_eq!(centered.matches("class=\"hero-particle\"").count(), 6);

        pointer.set(PointerPosition { x: 0.5, y: 0.5 });
        let moved = render();
        assert!(moved.contains("transform: translate(15px, 15px);"));
        assert!(moved.contains("transform: translate(-12.5px, -12.5px);"));
        assert!(moved.contains("transform: translate(10px, 10px);"));
    }

    #[test]
    fn corner_rings_spin_with_their_own_period() {
        let html = view! { <CornerRings corners=HeroConfig::default().corners /> }.to_html();
        assert!(html.contains("animation: dmi-spin-0 20s linear 0s infinite;"));
        assert!(html.contains("animation: dmi-spin-1 15s linear 0s infinite;"));
        assert!(html.contains("--corner-size: 64px;"));
    }
}
