use thiserror::Error;

/// Failure of a single synchronization cycle.
///
/// Local to the cycle that raised it: the next trigger resolves the surface
/// again from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("drawable surface `{selector}` could not be resolved")]
    SurfaceNotFound { selector: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse sync options: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("sync option `{field}` must not be empty")]
    Empty { field: &'static str },

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}
