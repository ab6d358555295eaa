//! C spellings of abstract scalar categories.
//!
//! Shared lookup table for code generators targeting C. The comment
//! stripper does not use it.

use std::fmt;

/// Abstract scalar category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// Boolean.
    Bool,
    /// Character.
    Char,
    /// No value.
    Void,
    /// Null pointer constant.
    Null,
}

impl ScalarType {
    /// Every category, in declaration order.
    pub const ALL: [ScalarType; 12] = [
        ScalarType::I8,
        ScalarType::I16,
        ScalarType::I32,
        ScalarType::I64,
        ScalarType::U8,
        ScalarType::U16,
        ScalarType::U32,
        ScalarType::U64,
        ScalarType::Bool,
        ScalarType::Char,
        ScalarType::Void,
        ScalarType::Null,
    ];

    /// Spelling of this category in C (`<stdint.h>` / `<stdbool.h>` names).
    pub const fn c_name(self) -> &'static str {
        match self {
            ScalarType::I8 => "int8_t",
            ScalarType::I16 => "int16_t",
            ScalarType::I32 => "int32_t",
            ScalarType::I64 => "int64_t",
            ScalarType::U8 => "uint8_t",
            ScalarType::U16 => "uint16_t",
            ScalarType::U32 => "uint32_t",
            ScalarType::U64 => "uint64_t",
            ScalarType::Bool => "bool",
            ScalarType::Char => "char",
            ScalarType::Void => "void",
            ScalarType::Null => "NULL",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// Free-function form of [`ScalarType::c_name`].
pub const fn c_type_name(ty: ScalarType) -> &'static str {
    ty.c_name()
}
