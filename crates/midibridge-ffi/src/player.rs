//! Typed bindings to the JsonMidiPlayer ctypes library.
//!
//! The native library ships alongside the host program in a `lib`
//! subdirectory and exports two C functions:
//!
//! ```c
//! int add_ctypes(int a, int b);
//! int PlayList_ctypes(const char* json_str, int verbose);
//! ```
//!
//! `add_ctypes` is the link-check function. `PlayList_ctypes` hands a JSON
//! document to the playback engine and returns a status code; the JSON text
//! is passed through opaquely, with no schema handling on this side.

use std::ffi::CString;
use std::os::raw::c_char;
use std::path::Path;
use std::sync::Arc;

use libloading::Symbol;
use log::info;

use crate::error::FfiError;
use crate::library::NativeLibrary;
use crate::platform::resolve_library_path;
use crate::registry;

/// Base name of the JsonMidiPlayer ctypes library.
pub const DEFAULT_LIBRARY_NAME: &str = "JsonMidiPlayer_ctypes";

/// Exported link-check function: `int add_ctypes(int, int)`.
pub const ADD_SYMBOL: &str = "add_ctypes";

/// Exported playback entry point: `int PlayList_ctypes(const char*, int)`.
pub const PLAY_LIST_SYMBOL: &str = "PlayList_ctypes";

type AddFn = unsafe extern "C" fn(i32, i32) -> i32;
type PlayListFn = unsafe extern "C" fn(*const c_char, i32) -> i32;

/// A loaded JsonMidiPlayer library, with exports bound on demand.
///
/// Handles come from the process-lifetime [`crate::registry`], so opening
/// the same path twice reuses the already-mapped module.
pub struct PlayerLibrary {
    lib: Arc<NativeLibrary>,
}

impl PlayerLibrary {
    /// Open the library under `base_dir/lib`, using the platform-specific
    /// filename for [`DEFAULT_LIBRARY_NAME`].
    ///
    /// `base_dir` should be the host program's own install directory so the
    /// library is found regardless of the process working directory.
    pub fn open(base_dir: &Path) -> Result<Self, FfiError> {
        Self::open_named(base_dir, DEFAULT_LIBRARY_NAME)
    }

    /// Open a library with a custom base name, same layout convention.
    pub fn open_named(base_dir: &Path, name: &str) -> Result<Self, FfiError> {
        let path = resolve_library_path(base_dir, name);
        let lib = registry::load_library(&path)?;
        info!("library found in: {}", lib.path());
        Ok(Self { lib })
    }

    /// Add two integers through the native `add_ctypes` export.
    ///
    /// Overflow follows the platform's two's-complement wraparound.
    pub fn add(&self, a: i32, b: i32) -> Result<i32, FfiError> {
        let func: Symbol<AddFn> = unsafe { self.lib.get_function(ADD_SYMBOL)? };
        Ok(unsafe { func(a, b) })
    }

    /// Hand a JSON document to `PlayList_ctypes` and return its status code.
    ///
    /// The call blocks until the player returns; there is no cancellation.
    pub fn play_list(&self, json: &str, verbose: bool) -> Result<i32, FfiError> {
        let c_json = CString::new(json).map_err(|_| FfiError::TypeMismatch {
            function: PLAY_LIST_SYMBOL.to_string(),
            message: "JSON text contains an interior NUL".to_string(),
        })?;

        let func: Symbol<PlayListFn> = unsafe { self.lib.get_function(PLAY_LIST_SYMBOL)? };
        Ok(unsafe { func(c_json.as_ptr(), i32::from(verbose)) })
    }

    /// The resolved path this library was loaded from.
    pub fn path(&self) -> &str {
        self.lib.path()
    }

    /// The underlying library handle, for dynamic calls.
    pub fn library(&self) -> &NativeLibrary {
        &self.lib
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn test_open_missing_library_is_file_not_found() {
        let result = PlayerLibrary::open(Path::new("/no/such/install/dir"));
        assert!(matches!(result, Err(FfiError::FileNotFound { .. })));
    }

    #[test]
    fn test_default_name_resolves_like_original_layout() {
        let path = Platform::OtherUnix.library_path(Path::new("/opt/app"), DEFAULT_LIBRARY_NAME);
        assert_eq!(
            path,
            Path::new("/opt/app/lib/libJsonMidiPlayer_ctypes.so")
        );
    }
}
