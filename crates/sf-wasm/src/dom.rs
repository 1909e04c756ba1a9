//! Browser implementations of the `sf-core` host traits.

use sf_core::{HostWindow, ResizeNotifier, SurfaceResolver, SurfaceTarget, ViewportSize};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, Window};

/// Reads `innerWidth` / `innerHeight` from the global window.
pub struct BrowserWindow {
    window: Window,
}

impl BrowserWindow {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl HostWindow for BrowserWindow {
    fn inner_size(&self) -> ViewportSize {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        ViewportSize::from_host(width, height)
    }
}

/// Canvas element resolved for a single cycle.
pub struct Canvas(HtmlCanvasElement);

impl SurfaceTarget for Canvas {
    fn set_width(&mut self, width: u32) {
        self.0.set_width(width);
    }

    fn set_height(&mut self, height: u32) {
        self.0.set_height(height);
    }
}

/// Finds the canvas with `document.querySelector`.
pub struct CanvasResolver {
    document: Document,
    selector: String,
}

impl CanvasResolver {
    pub fn new(document: Document, selector: impl Into<String>) -> Self {
        Self {
            document,
            selector: selector.into(),
        }
    }
}

impl SurfaceResolver for CanvasResolver {
    type Surface = Canvas;

    fn selector(&self) -> &str {
        &self.selector
    }

    fn resolve(&self) -> Option<Canvas> {
        let element = match self.document.query_selector(&self.selector) {
            Ok(found) => found?,
            Err(err) => {
                log::warn!("invalid selector `{}`: {err:?}", self.selector);
                return None;
            }
        };
        match element.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => Some(Canvas(canvas)),
            Err(_) => {
                log::warn!("`{}` matched a non-canvas element", self.selector);
                None
            }
        }
    }
}

/// Dispatches a payload-free DOM event on the canvas itself, for consumers
/// that listen on the surface rather than the window.
pub struct DomEventNotifier {
    event_name: String,
}

impl DomEventNotifier {
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
        }
    }
}

impl ResizeNotifier<Canvas> for DomEventNotifier {
    fn notify(&mut self, surface: &Canvas, _size: ViewportSize) {
        let dispatched = Event::new(&self.event_name)
            .and_then(|event| surface.0.dispatch_event(&event));
        if let Err(err) = dispatched {
            log::error!("failed to dispatch `{}` on canvas: {err:?}", self.event_name);
        }
    }
}
