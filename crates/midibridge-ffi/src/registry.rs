//! Process-lifetime cache of loaded libraries.
//!
//! A loaded handle is never released: the library stays mapped for the life
//! of the process, and repeated loads of the same path hand back the same
//! shared handle. Independently bound functions on a shared handle may be
//! called concurrently; the adapter guarantees its own load/bind/call
//! sequence is race-free but makes no such claim for the native callee.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use log::debug;
use once_cell::sync::Lazy;

use crate::error::FfiError;
use crate::library::NativeLibrary;

static REGISTRY: Lazy<Mutex<HashMap<String, Arc<NativeLibrary>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Cache key for a library path.
///
/// Canonicalized so equivalent spellings of the same file (`/a/./b`,
/// relative vs absolute) share one handle; falls back to the raw string
/// when the path cannot be canonicalized (e.g. it does not exist yet).
fn registry_key(path: &Path) -> String {
    path.canonicalize()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// Load a library, or return the already-loaded handle for the same path.
pub fn load_library(path: impl AsRef<Path>) -> Result<Arc<NativeLibrary>, FfiError> {
    let path = path.as_ref();
    let key = registry_key(path);

    let mut registry = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(lib) = registry.get(&key) {
        return Ok(Arc::clone(lib));
    }

    let lib = Arc::new(NativeLibrary::load(path)?);
    debug!("registered native library '{key}'");
    registry.insert(key, Arc::clone(&lib));
    Ok(lib)
}

/// Whether a library at this path has already been loaded.
pub fn is_loaded(path: impl AsRef<Path>) -> bool {
    let key = registry_key(path.as_ref());
    REGISTRY
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .contains_key(&key)
}

/// Number of libraries currently held by the registry.
pub fn loaded_count() -> usize {
    REGISTRY.lock().unwrap_or_else(|e| e.into_inner()).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_is_not_registered() {
        let path = "/no/such/dir/libmissing.so";
        assert!(load_library(path).is_err());
        assert!(!is_loaded(path));
    }

    #[test]
    fn test_key_normalizes_equivalent_spellings() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("libthing.so");
        std::fs::write(&file, b"x").unwrap();

        let dotted = dir.path().join(".").join("libthing.so");
        assert_eq!(registry_key(&file), registry_key(&dotted));
    }

    #[test]
    fn test_key_falls_back_for_missing_paths() {
        let path = Path::new("/no/such/dir/libmissing.so");
        assert_eq!(registry_key(path), path.display().to_string());
    }
}
