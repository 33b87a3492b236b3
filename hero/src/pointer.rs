//! Pointer tracking: window pointer coordinates normalized to `[-1, 1]`.
//!
//! The tracker does not know where events come from. A [`PointerSource`]
//! hands out subscriptions; dropping a subscription removes the listener.
//! In the browser the source is a `mousemove` listener on `window`
//! (see `dmi-landing`), in tests it is an in-memory bus.
//!
//! ```text
//! mousemove ──> PointerSample ──normalize──> RwSignal<PointerPosition> ──> HeroView
//! ```

use leptos::prelude::*;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// `innerWidth`
    pub width: f64,
    /// `innerHeight`
    pub height: f64,
}

impl Viewport {
    /// Viewport of `width` x `height` px.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One raw pointer-move notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// `clientX` in px
    pub client_x: f64,
    /// `clientY` in px
    pub client_y: f64,
    /// Viewport at the time of the event
    pub viewport: Viewport,
}

impl PointerSample {
    /// `(client / viewport - 0.5) * 2` on both axes.
    ///
    /// Not clamped. A zero-sized viewport yields NaN or infinities, which
    /// render as CSS the browser ignores.
    pub fn normalize(&self) -> PointerPosition {
        PointerPosition {
            x: (self.client_x / self.viewport.width - 0.5) * 2.0,
            y: (self.client_y / self.viewport.height - 0.5) * 2.0,
        }
    }
}

/// Normalized pointer offset from the viewport center; `(0, 0)` is centered,
/// `(-1, -1)` the top-left corner and `(1, 1)` the bottom-right one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    /// Horizontal, -1 (left) to 1 (right)
    pub x: f64,
    /// Vertical, -1 (top) to 1 (bottom)
    pub y: f64,
}

impl PointerPosition {
    /// Pointer over the viewport center; the initial position.
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Offset in px for a parallax layer moving `factor` px per unit.
    pub fn scaled(&self, factor: f64) -> (f64, f64) {
        (self.x * factor, self.y * factor)
    }
}

/// Callback invoked for every pointer-move notification.
pub type PointerHandler = Box<dyn Fn(PointerSample) + Send + Sync>;

/// Something that delivers pointer-move notifications.
pub trait PointerSource {
    /// Live registration. Dropping it must stop further calls to the handler.
    type Subscription: Send + Sync + 'static;

    /// Start calling `handler` for every pointer move.
    fn subscribe(&self, handler: PointerHandler) -> Self::Subscription;
}

/// Owns the pointer subscription and the reactive [`PointerPosition`].
pub struct PointerTracker<S: PointerSource> {
    position: RwSignal<PointerPosition>,
    subscription: Option<S::Subscription>,
}

impl<S: PointerSource> PointerTracker<S> {
    /// Subscribe to `source`; the position starts centered.
    pub fn attach(source: &S) -> Self {
        let position = RwSignal::new(PointerPosition::CENTER);
        let subscription = source.subscribe(Box::new(move |sample: PointerSample| {
            position.set(sample.normalize());
        }));
        tracing::debug!("pointer tracker attached");
        Self {
            position,
            subscription: Some(subscription),
        }
    }

    /// Read side of the current position.
    pub fn position(&self) -> ReadSignal<PointerPosition> {
        self.position.read_only()
    }

    /// Release the listener. Call from `on_cleanup` when the view unmounts.
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            drop(subscription);
            tracing::debug!("pointer tracker detached");
        }
    }
}

impl<S: PointerSource> Drop for PointerTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory pointer source; dispatch runs every live handler.
    #[derive(Clone, Default)]
    struct PointerBus {
        inner: Arc<Mutex<BusState>>,
    }

    #[derive(Default)]
    struct BusState {
        next_id: u64,
        handlers: Vec<(u64, Arc<PointerHandler>)>,
    }

    struct BusSubscription {
        id: u64,
        inner: Arc<Mutex<BusState>>,
    }

    impl Drop for BusSubscription {
        fn drop(&mut self) {
            let mut state = self.inner.lock().unwrap();
            state.handlers.retain(|(id, _)| *id != self.id);
        }
    }

    impl PointerSource for PointerBus {
        type Subscription = BusSubscription;

        fn subscribe(&self, handler: PointerHandler) -> BusSubscription {
            let mut state = self.inner.lock().unwrap();
            let id = state.next_id;
            state.next_id += 1;
            state.handlers.push((id, Arc::new(handler)));
            BusSubscription {
                id,
                inner: self.inner.clone(),
            }
        }
    }

    impl PointerBus {
        fn dispatch(&self, sample: PointerSample) {
            let handlers = self
                .inner
                .lock()
                .unwrap()
                .handlers
                .iter()
                .map(|(_, handler)| handler.clone())
                .collect::<Vec<_>>();
            for handler in handlers {
                handler(sample);
            }
        }

        fn listeners(&self) -> usize {
            self.inner.lock().unwrap().handlers.len()
        }
    }

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn at(client_x: f64, client_y: f64) -> PointerSample {
        PointerSample {
            client_x,
            client_y,
            viewport: VIEWPORT,
        }
    }

    #[test]
    fn center_normalizes_to_origin() {
        assert_eq!(at(640.0, 400.0).normalize(), PointerPosition { x: 0.0, y: 0.0 });

        let odd = PointerSample {
            client_x: 333.5,
            client_y: 101.0,
            viewport: Viewport::new(667.0, 202.0),
        };
        assert_eq!(odd.normalize(), PointerPosition::CENTER);
    }

    #[test]
    fn corners_normalize_to_unit_extremes() {
        assert_eq!(at(0.0, 0.0).normalize(), PointerPosition { x: -1.0, y: -1.0 });
        assert_eq!(at(1280.0, 800.0).normalize(), PointerPosition { x: 1.0, y: 1.0 });
    }

    #[test]
    fn zero_viewport_degrades_without_panicking() {
        let sample = PointerSample {
            client_x: 10.0,
            client_y: 0.0,
            viewport: Viewport::default(),
        };
        let position = sample.normalize();
        assert!(position.x.is_infinite());
        assert!(position.y.is_nan());
    }

    #[test]
    fn tracker_publishes_every_event() {
        let bus = PointerBus::default();
        let tracker = PointerTracker::attach(&bus);
        let position = tracker.position();
        assert_eq!(position.get_untracked(), PointerPosition::CENTER);

        bus.dispatch(at(0.0, 0.0));
        assert_eq!(position.get_untracked(), PointerPosition { x: -1.0, y: -1.0 });

        bus.dispatch(at(960.0, 200.0));
        assert_eq!(position.get_untracked(), PointerPosition { x: 0.5, y: -0.5 });
    }

    #[test]
    fn detached_tracker_ignores_later_events() {
        let bus = PointerBus::default();
        let tracker = PointerTracker::attach(&bus);
        let position = tracker.position();
        bus.dispatch(at(1280.0, 800.0));
        assert_eq!(bus.listeners(), 1);

        tracker.detach();
        assert_eq!(bus.listeners(), 0);

        bus.dispatch(at(0.0, 0.0));
        assert_eq!(position.get_untracked(), PointerPosition { x: 1.0, y: 1.0 });
    }

    #[test]
    fn dropping_tracker_releases_listener() {
        let bus = PointerBus::default();
        {
            let _tracker = PointerTracker::attach(&bus);
            assert_eq!(bus.listeners(), 1);
        }
        assert_eq!(bus.listeners(), 0);
        bus.dispatch(at(10.0, 10.0));
    }

    #[test]
    fn owner_cleanup_detaches_tracker() {
        let bus = PointerBus::default();
        let owner = Owner::new();
        owner.with(|| {
            let tracker = PointerTracker::attach(&bus);
            on_cleanup(move || tracker.detach());
        });
        assert_eq!(bus.listeners(), 1);

        owner.cleanup();
        assert_eq!(bus.listeners(), 0);
        bus.dispatch(at(0.0, 0.0));
    }

    #[test]
    fn parallax_offset_scales_position() {
        let position = PointerPosition { x: 0.5, y: -1.0 };
        assert_eq!(position.scaled(30.0), (15.0, -30.0));
        assert_eq!(position.scaled(-25.0), (-12.5, 25.0));
    }
}
