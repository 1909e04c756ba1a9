//! The surface size synchronizer.
//!
//! One cycle resolves the surface, reads the window's inner size, writes
//! width then height, and finally notifies the consumer. Nothing is read or
//! written when resolution fails.

use crate::error::SyncError;
use crate::host::{HostWindow, SurfaceResolver, SurfaceTarget};
use crate::notify::ResizeNotifier;
use crate::size::ViewportSize;

/// Keeps a drawable surface the same size as the host window's inner area.
#[derive(Debug)]
pub struct SurfaceSizeSynchronizer<W, R, N> {
    window: W,
    resolver: R,
    notifier: N,
}

impl<W, R, N> SurfaceSizeSynchronizer<W, R, N>
where
    W: HostWindow,
    R: SurfaceResolver,
    N: ResizeNotifier<R::Surface>,
{
    pub fn new(window: W, resolver: R, notifier: N) -> Self {
        Self {
            window,
            resolver,
            notifier,
        }
    }

    /// Run one synchronization cycle.
    ///
    /// Returns the size that was applied. The notifier runs only after both
    /// dimensions are written, so its listeners never see a half-updated
    /// surface.
    ///
    /// # Errors
    /// [`SyncError::SurfaceNotFound`] when the surface cannot be resolved.
    pub fn synchronize(&mut self) -> Result<ViewportSize, SyncError> {
        let mut surface =
            self.resolver
                .resolve()
                .ok_or_else(|| SyncError::SurfaceNotFound {
                    selector: self.resolver.selector().to_string(),
                })?;

        let size = self.window.inner_size();
        surface.set_width(size.width);
        surface.set_height(size.height);
        self.notifier.notify(&surface, size);

        log::debug!("surface `{}` synced to {size}", self.resolver.selector());
        Ok(size)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
