//! Fixed mappings between [`ElementKind`] and the external type systems.
//!
//! Lookups never fail: a type without a counterpart maps to the sentinel of
//! the target side (`ElementKind::Undefined`, `OvElementType::Undefined` or
//! `TfDataType::Invalid`) and callers decide what to do with it.

use crate::ElementKind;

/// Element types of the native inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OvElementType {
    Undefined,
    Dynamic,
    Boolean,
    Bf16,
    F16,
    F32,
    F64,
    I4,
    I8,
    I16,
    I32,
    I64,
    U1,
    U4,
    U8,
    U16,
    U32,
    U64,
}

/// Data types of the dataflow framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TfDataType {
    Invalid,
    Float,
    Double,
    Half,
    BFloat16,
    Int64,
    Int32,
    Int16,
    Int8,
    UInt64,
    UInt32,
    UInt16,
    UInt8,
    Bool,
    String,
    Complex64,
}

impl OvElementType {
    pub fn to_kind(self) -> ElementKind {
        match self {
            OvElementType::F64 => ElementKind::Fp64,
            OvElementType::F32 => ElementKind::Fp32,
            OvElementType::F16 => ElementKind::Fp16,
            OvElementType::Bf16 => ElementKind::Bf16,
            OvElementType::I64 => ElementKind::I64,
            OvElementType::I32 => ElementKind::I32,
            OvElementType::I16 => ElementKind::I16,
            OvElementType::I8 => ElementKind::I8,
            OvElementType::I4 => ElementKind::I4,
            OvElementType::U64 => ElementKind::U64,
            OvElementType::U32 => ElementKind::U32,
            OvElementType::U16 => ElementKind::U16,
            OvElementType::U8 => ElementKind::U8,
            OvElementType::U4 => ElementKind::U4,
            OvElementType::U1 => ElementKind::U1,
            OvElementType::Boolean => ElementKind::Bool,
            OvElementType::Undefined => ElementKind::Undefined,
            OvElementType::Dynamic => ElementKind::Dynamic,
        }
    }

    pub fn from_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Fp64 => OvElementType::F64,
            ElementKind::Fp32 => OvElementType::F32,
            ElementKind::Fp16 => OvElementType::F16,
            ElementKind::Bf16 => OvElementType::Bf16,
            ElementKind::I64 => OvElementType::I64,
            ElementKind::I32 => OvElementType::I32,
            ElementKind::I16 => OvElementType::I16,
            ElementKind::I8 => OvElementType::I8,
            ElementKind::I4 => OvElementType::I4,
            ElementKind::U64 => OvElementType::U64,
            ElementKind::U32 => OvElementType::U32,
            ElementKind::U16 => OvElementType::U16,
            ElementKind::U8 => OvElementType::U8,
            ElementKind::U4 => OvElementType::U4,
            ElementKind::U1 => OvElementType::U1,
            ElementKind::Bool => OvElementType::Boolean,
            ElementKind::Dynamic => OvElementType::Dynamic,
            ElementKind::Undefined
            | ElementKind::Custom
            | ElementKind::Mixed
            | ElementKind::Q78
            | ElementKind::Bin => OvElementType::Undefined,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, OvElementType::Undefined | OvElementType::Dynamic)
    }
}

impl TfDataType {
    pub fn to_kind(self) -> ElementKind {
        match self {
            TfDataType::Float => ElementKind::Fp32,
            TfDataType::Double => ElementKind::Fp64,
            TfDataType::Half => ElementKind::Fp16,
            TfDataType::BFloat16 => ElementKind::Bf16,
            TfDataType::Int64 => ElementKind::I64,
            TfDataType::Int32 => ElementKind::I32,
            TfDataType::Int16 => ElementKind::I16,
            TfDataType::Int8 => ElementKind::I8,
            TfDataType::UInt64 => ElementKind::U64,
            TfDataType::UInt32 => ElementKind::U32,
            TfDataType::UInt16 => ElementKind::U16,
            TfDataType::UInt8 => ElementKind::U8,
            TfDataType::Bool => ElementKind::Bool,
            TfDataType::Invalid | TfDataType::String | TfDataType::Complex64 => {
                ElementKind::Undefined
            }
        }
    }

    pub fn from_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Fp32 => TfDataType::Float,
            ElementKind::Fp64 => TfDataType::Double,
            ElementKind::Fp16 => TfDataType::Half,
            ElementKind::Bf16 => TfDataType::BFloat16,
            ElementKind::I64 => TfDataType::Int64,
            ElementKind::I32 => TfDataType::Int32,
            ElementKind::I16 => TfDataType::Int16,
            ElementKind::I8 => TfDataType::Int8,
            ElementKind::U64 => TfDataType::UInt64,
            ElementKind::U32 => TfDataType::UInt32,
            ElementKind::U16 => TfDataType::UInt16,
            ElementKind::U8 => TfDataType::UInt8,
            ElementKind::Bool => TfDataType::Bool,
            _ => TfDataType::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != TfDataType::Invalid
    }

    /// Bytes per element for the numeric types, `None` otherwise.
    pub fn size(&self) -> Option<usize> {
        match self.to_kind() {
            ElementKind::Undefined => None,
            kind => kind.bit_width().map(|bits| bits / 8),
        }
    }
}
