//! FFI type definitions for function signatures.

use std::fmt;

/// Supported FFI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiType {
    /// 32-bit signed integer (C `int`)
    I32,
    /// Borrowed NUL-terminated string (C `const char*`)
    CStr,
    /// No value (return type only)
    Void,
}

impl fmt::Display for FfiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FfiType::I32 => "i32",
            FfiType::CStr => "cstr",
            FfiType::Void => "void",
        };
        write!(f, "{s}")
    }
}

/// A function signature for foreign calls: the exported symbol name paired
/// with its declared parameter and return types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiSignature {
    /// Exported symbol name in the native library
    pub name: String,
    /// Argument types
    pub args: Vec<FfiType>,
    /// Return type
    pub ret: FfiType,
}

impl FfiSignature {
    /// Create a new FFI signature.
    pub fn new(name: impl Into<String>, args: Vec<FfiType>, ret: FfiType) -> Self {
        Self {
            name: name.into(),
            args,
            ret,
        }
    }

    /// Signature for a binary integer function: `(i32, i32) -> i32`
    pub fn int_binary(name: impl Into<String>) -> Self {
        Self::new(name, vec![FfiType::I32, FfiType::I32], FfiType::I32)
    }

    /// Signature for a string-plus-flag function: `(cstr, i32) -> i32`
    pub fn str_int(name: impl Into<String>) -> Self {
        Self::new(name, vec![FfiType::CStr, FfiType::I32], FfiType::I32)
    }
}

impl fmt::Display for FfiSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: (", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_binary_signature() {
        let sig = FfiSignature::int_binary("add_ctypes");
        assert_eq!(sig.name, "add_ctypes");
        assert_eq!(sig.args, vec![FfiType::I32, FfiType::I32]);
        assert_eq!(sig.ret, FfiType::I32);
    }

    #[test]
    fn test_str_int_signature() {
        let sig = FfiSignature::str_int("PlayList_ctypes");
        assert_eq!(sig.args, vec![FfiType::CStr, FfiType::I32]);
        assert_eq!(sig.ret, FfiType::I32);
    }

    #[test]
    fn test_signature_display() {
        let sig = FfiSignature::int_binary("add_ctypes");
        assert_eq!(sig.to_string(), "add_ctypes: (i32, i32) -> i32");
    }
}
