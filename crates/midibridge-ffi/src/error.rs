//! Error taxonomy for library loading and foreign calls.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the adapter.
///
/// Every variant is terminal for the adapter instance; none is retried. The
/// adapter never prints on the error path: callers receive the typed value
/// and decide whether to continue or abort.
#[derive(Debug, Error)]
pub enum FfiError {
    /// The library file does not exist on disk. Checked before any loader
    /// call so the diagnostic stays distinct from a loader rejection.
    #[error("could not find the library file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but the dynamic loader rejected it (wrong
    /// architecture, corrupt binary, missing transitive dependencies).
    #[error("failed to load library '{}': {source}", path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The named export is not present in the loaded library.
    #[error("function '{symbol}' not found in '{library}': {source}")]
    SymbolNotFound {
        symbol: String,
        library: String,
        #[source]
        source: libloading::Error,
    },

    /// Dynamic call arguments do not match the bound signature in count or
    /// type. Statically typed wrappers rule this out at compile time.
    #[error("type mismatch calling '{function}': {message}")]
    TypeMismatch { function: String, message: String },
}
