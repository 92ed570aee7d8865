use {
    crate::{
        Buffer,
        ElementKind,
        TensorElement,
        TensorError,
        element::{decode, encode},
        f16::{bf16_to_f32, f16_to_f32},
    },
    std::fmt,
};

/// Dimensions of a tensor, outermost first.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Product of the dimensions; a scalar has one element.
    pub fn element_count(&self) -> Result<usize, TensorError> {
        let mut product: usize = 1;
        for &dim in &self.0 {
            product = product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)?;
        }
        Ok(product)
    }

    /// Builds a shape from signed dimensions, rejecting negative ones.
    pub fn from_signed<I>(dims: I) -> Result<Self, TensorError>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        dims.into_iter()
            .map(|dim| {
                let dim = dim.into();
                usize::try_from(dim).map_err(|_| TensorError::NegativeDimension(dim))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Shape)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Format-agnostic tensor: element kind, shape and the bytes behind them.
#[derive(Clone, Debug, PartialEq)]
pub struct TensorHandle {
    kind: ElementKind,
    shape: Shape,
    buffer: Buffer,
}

impl TensorHandle {
    /// Checks that the buffer holds exactly `shape` worth of `kind` elements.
    ///
    /// `Custom` tensors carry opaque bytes and skip the length check;
    /// `Undefined`, `Dynamic` and `Mixed` cannot describe a concrete buffer and
    /// are rejected.
    pub fn new(kind: ElementKind, shape: Shape, buffer: Buffer) -> Result<Self, TensorError> {
        let count = shape.element_count()?;
        if kind != ElementKind::Custom {
            let expected = kind
                .byte_len(count)
                .ok_or(TensorError::UnsupportedElementKind(kind))?;
            if expected != buffer.len() {
                return Err(TensorError::ShapeMismatch {
                    expected,
                    got: buffer.len(),
                });
            }
        }
        Ok(Self {
            kind,
            shape,
            buffer,
        })
    }

    pub fn from_slice<T: TensorElement>(shape: Shape, data: &[T]) -> Result<Self, TensorError> {
        let count = shape.element_count()?;
        if count != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: count,
                got: data.len(),
            });
        }
        Self::new(T::KIND, shape, Buffer::owned(encode(data)))
    }

    pub fn zeros(kind: ElementKind, shape: Shape) -> Result<Self, TensorError> {
        let count = shape.element_count()?;
        let len = kind
            .byte_len(count)
            .ok_or(TensorError::UnsupportedElementKind(kind))?;
        Self::new(kind, shape, Buffer::zeroed(len))
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    /// Element count; the shape was validated at construction.
    pub fn element_count(&self) -> usize {
        self.shape.dims().iter().product()
    }

    pub fn to_vec<T: TensorElement>(&self) -> Result<Vec<T>, TensorError> {
        if self.kind != T::KIND {
            return Err(TensorError::ElementKindMismatch {
                expected: T::KIND,
                got: self.kind,
            });
        }
        Ok(decode(self.bytes()))
    }

    /// Widens any floating point tensor to f32.
    pub fn to_f32_lossy(&self) -> Result<Vec<f32>, TensorError> {
        match self.kind {
            ElementKind::Fp32 => self.to_vec::<f32>(),
            ElementKind::Fp64 => Ok(decode::<f64>(self.bytes())
                .into_iter()
                .map(|v| v as f32)
                .collect()),
            ElementKind::Fp16 => Ok(decode::<u16>(self.bytes())
                .into_iter()
                .map(f16_to_f32)
                .collect()),
            ElementKind::Bf16 => Ok(decode::<u16>(self.bytes())
                .into_iter()
                .map(bf16_to_f32)
                .collect()),
            other => Err(TensorError::UnsupportedElementKind(other)),
        }
    }
}
