//! Native library loading and function lookup.

use std::ffi::CString;
use std::path::Path;

use libloading::{Library, Symbol};
use log::debug;

use crate::error::FfiError;

/// A loaded native library.
///
/// The handle keeps the module mapped into process memory for as long as it
/// lives; libraries shared through the [`crate::registry`] are kept for the
/// process lifetime.
pub struct NativeLibrary {
    /// The underlying library handle
    library: Library,
    /// Path the library was loaded from (for diagnostics)
    path: String,
}

impl NativeLibrary {
    /// Load a native library from a resolved path.
    ///
    /// A missing file is reported as [`FfiError::FileNotFound`] without
    /// touching the platform loader, so the diagnostic stays distinct from a
    /// loader rejection ([`FfiError::LoadFailure`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FfiError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(FfiError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let library = unsafe { Library::new(path) }.map_err(|source| FfiError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded native library from {}", path.display());

        Ok(Self {
            library,
            path: path.display().to_string(),
        })
    }

    /// Get a function pointer from the library.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the type `F` matches the actual signature
    /// of the exported function (calling convention, argument and return
    /// widths). An ABI mismatch is undefined behavior at the native
    /// boundary.
    pub unsafe fn get_function<F>(&self, name: &str) -> Result<Symbol<'_, F>, FfiError> {
        let c_name = CString::new(name).map_err(|_| FfiError::TypeMismatch {
            function: name.to_string(),
            message: "function name contains an interior NUL".to_string(),
        })?;

        self.library
            .get(c_name.as_bytes_with_nul())
            .map_err(|source| FfiError::SymbolNotFound {
                symbol: name.to_string(),
                library: self.path.clone(),
                source,
            })
    }

    /// Get the path this library was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_file_not_found() {
        let result = NativeLibrary::load("/no/such/dir/libmissing.so");
        assert!(matches!(result, Err(FfiError::FileNotFound { .. })));
    }

    #[test]
    fn test_directory_is_file_not_found() {
        // A directory exists but is not a loadable file.
        let result = NativeLibrary::load(std::env::temp_dir());
        assert!(matches!(result, Err(FfiError::FileNotFound { .. })));
    }
}
