//! WASM bridge for SF — keeps a canvas sized to the browser window.
//!
//! Compiled via `wasm-pack build --target web`. The page calls [`install`]
//! once; from then on the window's `load` and `resize` events resize the
//! canvas and re-dispatch `resize` on the canvas itself, which is where the
//! compiled runtime listens.

mod dom;
mod logger;

pub use dom::{BrowserWindow, Canvas, CanvasResolver, DomEventNotifier};

use js_sys::Function;
use sf_core::{
    Coalescer, Lifecycle, ResizeAction, ResizeNotifier, SurfaceSizeSynchronizer, SyncConfig,
    Trigger, ViewportSize,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

type BrowserLifecycle =
    Lifecycle<BrowserWindow, CanvasResolver, (SnapshotNotifier, DomEventNotifier)>;

/// Lifecycle counters readable from inside a canvas listener, while the
/// lifecycle itself is still borrowed by the running cycle.
#[derive(Debug, Clone, Copy, Default)]
struct Snapshot {
    cycles: u64,
    failures: u64,
    last_size: Option<ViewportSize>,
}

impl Snapshot {
    fn of(lifecycle: &BrowserLifecycle) -> Self {
        Self {
            cycles: lifecycle.cycles(),
            failures: lifecycle.failures(),
            last_size: lifecycle.last_size(),
        }
    }
}

/// Records the new size and cycle count before the DOM event goes out, so
/// a canvas listener reading the counters sees the cycle that woke it.
struct SnapshotNotifier(Rc<Cell<Snapshot>>);

impl<S> ResizeNotifier<S> for SnapshotNotifier {
    fn notify(&mut self, _surface: &S, size: ViewportSize) {
        let mut snapshot = self.0.get();
        snapshot.cycles += 1;
        snapshot.last_size = Some(size);
        self.0.set(snapshot);
    }
}

/// State shared by the window listeners and the JS handle.
struct Shared {
    lifecycle: RefCell<BrowserLifecycle>,
    coalescer: RefCell<Coalescer>,
    snapshot: Rc<Cell<Snapshot>>,
}

impl Shared {
    fn fire(&self, trigger: Trigger) {
        // A canvas listener can re-enter through `SurfaceSync::synchronize`.
        match self.lifecycle.try_borrow_mut() {
            Ok(mut lifecycle) => {
                lifecycle.on_trigger(trigger);
                self.snapshot.set(Snapshot::of(&lifecycle));
            }
            Err(_) => log::warn!("{trigger:?} arrived while a cycle was running; skipped"),
        }
    }
}

/// Handle returned by [`install`].
///
/// Dropping it does not unregister anything: the listeners live as long as
/// the page.
#[wasm_bindgen]
pub struct SurfaceSync {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl SurfaceSync {
    /// Run one cycle now. Throws if the canvas cannot be resolved.
    pub fn synchronize(&self) -> Result<(), JsValue> {
        let mut lifecycle = self
            .shared
            .lifecycle
            .try_borrow_mut()
            .map_err(|_| JsError::new("synchronize() called while a cycle was running"))?;
        let result = lifecycle.synchronize();
        self.shared.snapshot.set(Snapshot::of(&lifecycle));
        result
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()).into())
    }

    /// Completed cycles since install.
    pub fn cycles(&self) -> u32 {
        saturate(self.shared.snapshot.get().cycles)
    }

    /// Cycles that failed to find the canvas.
    pub fn failures(&self) -> u32 {
        saturate(self.shared.snapshot.get().failures)
    }

    /// Last applied size as `{"width":..,"height":..}`, or `null`.
    pub fn last_size_json(&self) -> String {
        match self.shared.snapshot.get().last_size {
            Some(size) => serde_json::to_string(&size).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }
}

/// Install the synchronizer.
///
/// `options` is a JSON object (see `SyncConfig`); pass `""` for defaults.
/// Registers `load` and `resize` listeners on `window`. If the document has
/// already finished loading, the load cycle runs immediately.
#[wasm_bindgen]
pub fn install(options: &str) -> Result<SurfaceSync, JsValue> {
    console_error_panic_hook_setup();

    let config = SyncConfig::from_json(options).map_err(|e| JsError::new(&e.to_string()))?;
    logger::init(config.level_filter().unwrap_or(log::LevelFilter::Info));

    let window = web_sys::window().ok_or_else(|| JsError::new("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| JsError::new("window has no document"))?;

    let snapshot = Rc::new(Cell::new(Snapshot::default()));
    let sync = SurfaceSizeSynchronizer::new(
        BrowserWindow::new(window.clone()),
        CanvasResolver::new(document.clone(), config.selector.as_str()),
        (
            SnapshotNotifier(Rc::clone(&snapshot)),
            DomEventNotifier::new(config.event_name.as_str()),
        ),
    );
    let shared = Rc::new(Shared {
        lifecycle: RefCell::new(Lifecycle::new(sync)),
        coalescer: RefCell::new(Coalescer::new(config.debounce_ms)),
        snapshot,
    });

    register_resize(&window, &shared)?;
    register_load(&window, &document, &shared)?;

    log::info!(
        "installed for `{}` (event `{}`, debounce {}ms)",
        config.selector,
        config.event_name,
        config.debounce_ms
    );
    Ok(SurfaceSync { shared })
}

// ─── Listener registration ───────────────────────────────────────────────

fn register_load(
    window: &Window,
    document: &Document,
    shared: &Rc<Shared>,
) -> Result<(), JsValue> {
    if document.ready_state() == "complete" {
        shared.fire(Trigger::Load);
        return Ok(());
    }

    let shared = Rc::clone(shared);
    let on_load = Closure::<dyn FnMut()>::new(move || shared.fire(Trigger::Load));
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

fn register_resize(window: &Window, shared: &Rc<Shared>) -> Result<(), JsValue> {
    let timer_window = window.clone();
    let shared = Rc::clone(shared);
    let on_resize = Closure::<dyn FnMut()>::new(move || on_window_resize(&timer_window, &shared));
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn on_window_resize(window: &Window, shared: &Rc<Shared>) {
    let action = shared.coalescer.borrow_mut().on_resize();
    let ResizeAction::Defer { ticket, delay_ms } = action else {
        shared.fire(Trigger::Resize);
        return;
    };

    let shared = Rc::clone(shared);
    let deferred = Closure::once_into_js(move || {
        let current = shared.coalescer.borrow().is_current(ticket);
        if current {
            shared.fire(Trigger::Resize);
        }
    });
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        deferred.unchecked_ref::<Function>(),
        timeout,
    );
    if let Err(err) = scheduled {
        log::error!("failed to schedule deferred resize: {err:?}");
    }
}

fn saturate(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("SF WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_is_current_when_later_notifiers_run() {
        let snapshot = Rc::new(Cell::new(Snapshot::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = sf_core::CallbackRegistry::new();
        {
            let snapshot = Rc::clone(&snapshot);
            let seen = Rc::clone(&seen);
            registry.subscribe(move |_| {
                let current = snapshot.get();
                seen.borrow_mut().push((current.cycles, current.last_size));
            });
        }
        let mut notifier = (SnapshotNotifier(Rc::clone(&snapshot)), registry);

        notifier.notify(&(), ViewportSize::new(1024, 768));
        notifier.notify(&(), ViewportSize::new(800, 600));

        assert_eq!(
            *seen.borrow(),
            vec![
                (1, Some(ViewportSize::new(1024, 768))),
                (2, Some(ViewportSize::new(800, 600)))
            ]
        );
    }

    #[test]
    fn saturate_caps_at_u32_max() {
        assert_eq!(saturate(7), 7);
        assert_eq!(saturate(u64::from(u32::MAX) + 1), u32::MAX);
    }
}
