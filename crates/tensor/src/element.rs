use std::fmt;

/// Canonical element type of a tensor.
///
/// Every external format maps its own type enumeration onto this one. Variants
/// are never removed; `Custom`, `Undefined`, `Dynamic` and `Mixed` are
/// sentinels without a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Bf16,
    Fp64,
    Fp32,
    Fp16,
    I64,
    I32,
    I16,
    I8,
    I4,
    U64,
    U32,
    U16,
    U8,
    U4,
    U1,
    Bool,
    Custom,
    Undefined,
    Dynamic,
    Mixed,
    Q78,
    Bin,
}

impl ElementKind {
    pub const ALL: [ElementKind; 22] = [
        ElementKind::Bf16,
        ElementKind::Fp64,
        ElementKind::Fp32,
        ElementKind::Fp16,
        ElementKind::I64,
        ElementKind::I32,
        ElementKind::I16,
        ElementKind::I8,
        ElementKind::I4,
        ElementKind::U64,
        ElementKind::U32,
        ElementKind::U16,
        ElementKind::U8,
        ElementKind::U4,
        ElementKind::U1,
        ElementKind::Bool,
        ElementKind::Custom,
        ElementKind::Undefined,
        ElementKind::Dynamic,
        ElementKind::Mixed,
        ElementKind::Q78,
        ElementKind::Bin,
    ];

    /// Bits per element, `None` for the sentinels.
    pub fn bit_width(&self) -> Option<usize> {
        match self {
            ElementKind::Fp64 | ElementKind::I64 | ElementKind::U64 => Some(64),
            ElementKind::Fp32 | ElementKind::I32 | ElementKind::U32 => Some(32),
            ElementKind::Bf16
            | ElementKind::Fp16
            | ElementKind::I16
            | ElementKind::U16
            | ElementKind::Q78 => Some(16),
            ElementKind::I8 | ElementKind::U8 | ElementKind::Bool => Some(8),
            ElementKind::I4 | ElementKind::U4 => Some(4),
            ElementKind::U1 | ElementKind::Bin => Some(1),
            ElementKind::Custom
            | ElementKind::Undefined
            | ElementKind::Dynamic
            | ElementKind::Mixed => None,
        }
    }

    /// Bytes needed for `count` elements; sub-byte kinds are packed.
    pub fn byte_len(&self, count: usize) -> Option<usize> {
        let bits = self.bit_width()?;
        count.checked_mul(bits).map(|total| total.div_ceil(8))
    }

    pub fn is_sentinel(&self) -> bool {
        self.bit_width().is_none()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Bf16 => "BF16",
            ElementKind::Fp64 => "FP64",
            ElementKind::Fp32 => "FP32",
            ElementKind::Fp16 => "FP16",
            ElementKind::I64 => "I64",
            ElementKind::I32 => "I32",
            ElementKind::I16 => "I16",
            ElementKind::I8 => "I8",
            ElementKind::I4 => "I4",
            ElementKind::U64 => "U64",
            ElementKind::U32 => "U32",
            ElementKind::U16 => "U16",
            ElementKind::U8 => "U8",
            ElementKind::U4 => "U4",
            ElementKind::U1 => "U1",
            ElementKind::Bool => "BOOL",
            ElementKind::Custom => "CUSTOM",
            ElementKind::Undefined => "UNDEFINED",
            ElementKind::Dynamic => "DYNAMIC",
            ElementKind::Mixed => "MIXED",
            ElementKind::Q78 => "Q78",
            ElementKind::Bin => "BIN",
        };
        write!(f, "{name}")
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Rust types that can be read from or written into a tensor buffer.
pub trait TensorElement: sealed::Sealed + Sized + Copy {
    const KIND: ElementKind;
    const SIZE: usize;

    fn write_ne(self, out: &mut [u8]);
    fn read_ne(bytes: &[u8]) -> Self;
}

macro_rules! numeric_element {
    ($ty:ty, $kind:expr) => {
        impl sealed::Sealed for $ty {}
        impl TensorElement for $ty {
            const KIND: ElementKind = $kind;
            const SIZE: usize = std::mem::size_of::<$ty>();

            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                <$ty>::from_ne_bytes(raw)
            }
        }
    };
}

numeric_element!(f64, ElementKind::Fp64);
numeric_element!(f32, ElementKind::Fp32);
numeric_element!(i64, ElementKind::I64);
numeric_element!(i32, ElementKind::I32);
numeric_element!(i16, ElementKind::I16);
numeric_element!(i8, ElementKind::I8);
numeric_element!(u64, ElementKind::U64);
numeric_element!(u32, ElementKind::U32);
numeric_element!(u16, ElementKind::U16);
numeric_element!(u8, ElementKind::U8);

impl sealed::Sealed for bool {}
impl TensorElement for bool {
    const KIND: ElementKind = ElementKind::Bool;
    const SIZE: usize = 1;

    fn write_ne(self, out: &mut [u8]) {
        out[0] = self as u8;
    }

    fn read_ne(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

/// Encodes a slice of elements into native-endian bytes.
pub fn encode<T: TensorElement>(data: &[T]) -> Vec<u8> {
    let mut bytes = vec![0u8; data.len() * T::SIZE];
    for (value, chunk) in data.iter().zip(bytes.chunks_exact_mut(T::SIZE)) {
        value.write_ne(chunk);
    }
    bytes
}

/// Decodes native-endian bytes; a trailing partial element is ignored.
pub fn decode<T: TensorElement>(bytes: &[u8]) -> Vec<T> {
    bytes.chunks_exact(T::SIZE).map(T::read_ne).collect()
}
