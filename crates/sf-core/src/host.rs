//! Seams to the host environment.
//!
//! The synchronizer never talks to a window or a DOM directly. A host
//! bridge implements these traits (see `sf-wasm` for the browser one) and
//! tests implement them with plain structs.

use crate::size::ViewportSize;

/// Source of the current inner window size.
pub trait HostWindow {
    /// Read the inner size right now. Assumed always available once the
    /// host has started.
    fn inner_size(&self) -> ViewportSize;
}

/// A drawable surface whose pixel size can be written.
pub trait SurfaceTarget {
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);
}

/// Looks up the drawable surface for one cycle.
///
/// Resolution is repeated on every cycle, so a surface that is detached
/// and later re-attached is picked up again.
pub trait SurfaceResolver {
    type Surface: SurfaceTarget;

    /// Human-readable reference used in error reports.
    fn selector(&self) -> &str;

    fn resolve(&self) -> Option<Self::Surface>;
}
