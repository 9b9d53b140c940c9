//! Platform identity and library path resolution.

use std::path::{Path, PathBuf};

/// Subdirectory, relative to the host program's install location, that holds
/// the native library.
pub const LIB_SUBDIR: &str = "lib";

/// Host platform identity used to pick the shared-library filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and any other Unix-like system; also the fallback for
    /// unrecognized hosts.
    OtherUnix,
}

impl Platform {
    /// Identity of the running host, fixed for the process lifetime.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    ///
    /// Only `"windows"` and `"macos"` are matched exactly; everything else
    /// gets the Unix-style library name.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::OtherUnix,
        }
    }

    /// Shared-library filename for a base name such as
    /// `JsonMidiPlayer_ctypes`.
    pub fn library_filename(&self, name: &str) -> String {
        match self {
            Platform::Windows => format!("{name}.dll"),
            Platform::MacOs => format!("lib{name}.dylib"),
            Platform::OtherUnix => format!("lib{name}.so"),
        }
    }

    /// Full library path: `base_dir/lib/<platform filename>`.
    ///
    /// `base_dir` should be the host program's own install directory so
    /// resolution does not depend on where the process was launched from.
    pub fn library_path(&self, base_dir: &Path, name: &str) -> PathBuf {
        base_dir.join(LIB_SUBDIR).join(self.library_filename(name))
    }
}

/// Resolve the library path for the running host.
pub fn resolve_library_path(base_dir: &Path, name: &str) -> PathBuf {
    Platform::host().library_path(base_dir, name)
}
