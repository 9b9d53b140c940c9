//! Dynamic foreign-call dispatch with runtime signature checks.
//!
//! Statically typed wrappers (see [`crate::player`]) pin argument types at
//! compile time. This module is the dynamically typed path: arguments arrive
//! as [`FfiValue`]s and are validated against an [`FfiSignature`] before
//! dispatch, so a count or type mismatch becomes a typed error instead of
//! undefined behavior at the native boundary.

use std::ffi::CString;
use std::os::raw::c_char;

use libloading::Symbol;

use crate::error::FfiError;
use crate::library::NativeLibrary;
use crate::types::{FfiSignature, FfiType};

/// A dynamically typed argument or result value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FfiValue {
    I32(i32),
    Str(String),
}

impl FfiValue {
    /// The FFI type this value is passed as.
    pub fn ffi_type(&self) -> FfiType {
        match self {
            FfiValue::I32(_) => FfiType::I32,
            FfiValue::Str(_) => FfiType::CStr,
        }
    }
}

/// Validate argument count and types against a signature.
pub(crate) fn validate_args(sig: &FfiSignature, args: &[FfiValue]) -> Result<(), FfiError> {
    if args.len() != sig.args.len() {
        return Err(FfiError::TypeMismatch {
            function: sig.name.clone(),
            message: format!("expected {} arguments, got {}", sig.args.len(), args.len()),
        });
    }

    for (i, (expected, actual)) in sig.args.iter().zip(args).enumerate() {
        if *expected != actual.ffi_type() {
            return Err(FfiError::TypeMismatch {
                function: sig.name.clone(),
                message: format!(
                    "argument {} expects {}, got {}",
                    i + 1,
                    expected,
                    actual.ffi_type()
                ),
            });
        }
    }

    Ok(())
}

/// Call a function through its declared signature.
///
/// Arguments must match the signature exactly in count and type; a mismatch
/// is [`FfiError::TypeMismatch`]. A foreign-call failure is not transient
/// and nothing here retries.
pub fn call_dynamic(
    library: &NativeLibrary,
    sig: &FfiSignature,
    args: &[FfiValue],
) -> Result<FfiValue, FfiError> {
    validate_args(sig, args)?;

    // Validation guarantees the argument shapes below line up with sig.args.
    match (args, sig.ret) {
        ([], FfiType::I32) => {
            type NullaryFn = unsafe extern "C" fn() -> i32;
            let func: Symbol<NullaryFn> = unsafe { library.get_function(&sig.name)? };
            let result = unsafe { func() };
            Ok(FfiValue::I32(result))
        }
        ([FfiValue::I32(a), FfiValue::I32(b)], FfiType::I32) => {
            type BinaryIntFn = unsafe extern "C" fn(i32, i32) -> i32;
            let func: Symbol<BinaryIntFn> = unsafe { library.get_function(&sig.name)? };
            let result = unsafe { func(*a, *b) };
            Ok(FfiValue::I32(result))
        }
        ([FfiValue::Str(text), FfiValue::I32(flag)], FfiType::I32) => {
            type StrIntFn = unsafe extern "C" fn(*const c_char, i32) -> i32;
            let c_text = CString::new(text.as_str()).map_err(|_| FfiError::TypeMismatch {
                function: sig.name.clone(),
                message: "string argument contains an interior NUL".to_string(),
            })?;
            let func: Symbol<StrIntFn> = unsafe { library.get_function(&sig.name)? };
            let result = unsafe { func(c_text.as_ptr(), *flag) };
            Ok(FfiValue::I32(result))
        }
        _ => Err(FfiError::TypeMismatch {
            function: sig.name.clone(),
            message: format!("unsupported signature {sig}"),
        }),
    }
}
