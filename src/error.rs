use std::path::PathBuf;

/// Errors surfaced by the library's typed APIs.
///
/// Higher-level entry points (export, chart rendering, the binaries) wrap these
/// in `anyhow::Error` with context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex color {0:?}, expected 6 hex digits with optional leading '#'")]
    InvalidHexColor(String),

    #[error("invalid CSS color {0:?}")]
    InvalidCssColor(String),

    #[error("unknown theme {0:?}, expected \"dark\" or \"light\"")]
    UnknownTheme(String),

    #[error("unknown region {0:?}")]
    UnknownRegion(String),

    #[error("unknown trade bloc {0:?}")]
    UnknownBloc(String),

    #[error("key-value store at {path}: {source}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key-value store at {path} is not a flat JSON object: {source}")]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
