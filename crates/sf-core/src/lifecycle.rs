//! Routes host triggers (page load, window resize) into sync cycles.
//!
//! Errors stop here: a failed cycle is logged and counted, and the next
//! trigger starts over.

use crate::error::SyncError;
use crate::host::{HostWindow, SurfaceResolver};
use crate::notify::ResizeNotifier;
use crate::size::ViewportSize;
use crate::sync::SurfaceSizeSynchronizer;

/// Host notifications that start a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The page finished loading. Honored once.
    Load,
    /// The host window changed size.
    Resize,
}

/// What a trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Synced(ViewportSize),
    Failed(SyncError),
    /// Duplicate load signal; no cycle ran.
    Ignored,
}

#[derive(Debug)]
pub struct Lifecycle<W, R, N> {
    sync: SurfaceSizeSynchronizer<W, R, N>,
    loaded: bool,
    cycles: u64,
    failures: u64,
    last_size: Option<ViewportSize>,
}

impl<W, R, N> Lifecycle<W, R, N>
where
    W: HostWindow,
    R: SurfaceResolver,
    N: ResizeNotifier<R::Surface>,
{
    pub fn new(sync: SurfaceSizeSynchronizer<W, R, N>) -> Self {
        Self {
            sync,
            loaded: false,
            cycles: 0,
            failures: 0,
            last_size: None,
        }
    }

    /// Handle one host notification.
    pub fn on_trigger(&mut self, trigger: Trigger) -> CycleOutcome {
        if trigger == Trigger::Load {
            if self.loaded {
                log::debug!("ignoring repeated load signal");
                return CycleOutcome::Ignored;
            }
            self.loaded = true;
        }

        match self.synchronize() {
            Ok(size) => CycleOutcome::Synced(size),
            Err(err) => {
                log::error!("{trigger:?} sync failed: {err}");
                CycleOutcome::Failed(err)
            }
        }
    }

    /// Run a cycle outside the trigger flow, returning the error to the
    /// caller instead of logging it.
    pub fn synchronize(&mut self) -> Result<ViewportSize, SyncError> {
        match self.sync.synchronize() {
            Ok(size) => {
                self.cycles += 1;
                self.last_size = Some(size);
                Ok(size)
            }
            Err(err) => {
                self.failures += 1;
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Cycles that failed to resolve the surface.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Size applied by the most recent successful cycle.
    pub fn last_size(&self) -> Option<ViewportSize> {
        self.last_size
    }
}
