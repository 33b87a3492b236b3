//! Browser glue: the window as a pointer source, the page as a config source.

use dmi_hero::config::CONFIG_ELEMENT_ID;
use dmi_hero::pointer::PointerHandler;
use dmi_hero::{HeroConfig, PointerSample, PointerSource, Viewport};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// `mousemove` on `window`.
pub struct WindowPointerSource;

/// Live `mousemove` listener; removed on drop.
pub struct WindowSubscription(Option<WindowListenerHandle>);

impl Drop for WindowSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

impl PointerSource for WindowPointerSource {
    type Subscription = WindowSubscription;

    fn subscribe(&self, handler: PointerHandler) -> WindowSubscription {
        let handle = window_event_listener(ev::mousemove, move |event| {
            handler(PointerSample {
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
                viewport: current_viewport(),
            });
        });
        WindowSubscription(Some(handle))
    }
}

/// `innerWidth` x `innerHeight`; zero when the window is unavailable.
fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let px = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(px(window.inner_width()), px(window.inner_height()))
}

/// Config override embedded in the page, or the built-in table.
pub fn load_config() -> HeroConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(json) = embedded else {
        return HeroConfig::default();
    };
    match HeroConfig::from_json(&json) {
        Ok(config) => {
            tracing::debug!("hero config override applied");
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring hero config override, using defaults");
            HeroConfig::default()
        }
    }
}
