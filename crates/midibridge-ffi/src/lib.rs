//! Foreign Function Interface adapter for the JsonMidiPlayer native library.
//!
//! This crate locates the platform-specific JsonMidiPlayer shared library
//! (`.dll`/`.dylib`/`.so`), loads it, and binds its exported C functions
//! behind typed call wrappers.
//!
//! # Example
//!
//! ```no_run
//! use midibridge_ffi::PlayerLibrary;
//!
//! # fn main() -> Result<(), midibridge_ffi::FfiError> {
//! let exe = std::env::current_exe().unwrap();
//! let base = exe.parent().unwrap();
//! let player = PlayerLibrary::open(base)?;
//! assert_eq!(player.add(3, 4)?, 7);
//! # Ok(())
//! # }
//! ```
//!
//! # Layout convention
//!
//! The library is expected in a `lib` subdirectory alongside the host
//! program, under exactly one of these names:
//!
//! - Windows: `{name}.dll`
//! - macOS: `lib{name}.dylib`
//! - anything else: `lib{name}.so`
//!
//! There is no search across candidate paths; resolution is anchored at the
//! host program's own install directory, never the process working
//! directory.
//!
//! # ABI precondition
//!
//! Bound functions must match the declared C signatures exactly (cdecl
//! calling convention, 32-bit signed integers, NUL-terminated strings where
//! declared). A calling-convention or integer-width mismatch is undefined
//! behavior at the native boundary; it is a documented precondition, not
//! something caught at runtime.

mod binding;
mod error;
mod library;
mod platform;
mod player;
mod registry;
mod types;

pub use binding::{call_dynamic, FfiValue};
pub use error::FfiError;
pub use library::NativeLibrary;
pub use platform::{resolve_library_path, Platform, LIB_SUBDIR};
pub use player::{PlayerLibrary, ADD_SYMBOL, DEFAULT_LIBRARY_NAME, PLAY_LIST_SYMBOL};
pub use registry::{is_loaded, load_library, loaded_count};
pub use types::{FfiSignature, FfiType};
