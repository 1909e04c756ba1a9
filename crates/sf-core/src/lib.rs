pub mod coalesce;
pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod notify;
pub mod size;
pub mod sync;

pub use coalesce::{Coalescer, PendingResize, ResizeAction};
pub use config::SyncConfig;
pub use error::{ConfigError, SyncError};
pub use host::{HostWindow, SurfaceResolver, SurfaceTarget};
pub use lifecycle::{CycleOutcome, Lifecycle, Trigger};
pub use notify::{CallbackId, CallbackRegistry, ResizeNotifier};
pub use size::ViewportSize;
pub use sync::SurfaceSizeSynchronizer;
