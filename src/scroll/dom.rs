//! Browser-backed implementations of the scroll traits.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Event, EventTarget, ScrollRestoration};

use super::viewport::{
    FrameCallback, FrameHandle, FrameScheduler, ScrollEvents, SectionRect, Viewport,
};

/// The page's top-level window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }

    fn height(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn max_scroll(&self) -> f64 {
        let document_height = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        (document_height - self.height()).max(0.0)
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let element = window()?.document()?.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionRect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

/// `requestAnimationFrame` on the page's window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let window = window()?;
        let callback = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        window
            .request_animation_frame(callback.unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}

/// A passive event listener, removed again when dropped.
pub struct PassiveListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl PassiveListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Listens on the window itself.
    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        Self::new(window.as_ref(), event, handler)
    }
}

impl Drop for PassiveListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Window scroll and resize events.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEvents;

impl ScrollEvents for BrowserEvents {
    type Guard = Vec<PassiveListener>;

    fn listen(&self, handler: Rc<dyn Fn()>) -> Self::Guard {
        ["scroll", "resize"]
            .into_iter()
            .filter_map(|event| {
                let handler = handler.clone();
                PassiveListener::on_window(event, move |_| handler())
            })
            .collect()
    }
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Stops the browser from restoring the previous scroll offset on reload.
pub fn disable_scroll_restoration() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }
}
