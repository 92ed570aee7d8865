use {
    super::{checked_count, unsigned_dims},
    crate::{
        TensorElement,
        TensorError,
        TfDataType,
        element::{decode, encode},
    },
};

/// Tensor of the dataflow framework. Its bytes come from the framework's own
/// allocator, so they are never shared with other formats.
#[derive(Clone, Debug, PartialEq)]
pub struct TfTensor {
    dtype: TfDataType,
    shape: Vec<i64>,
    data: Vec<u8>,
}

impl TfTensor {
    pub fn new(dtype: TfDataType, shape: Vec<i64>, data: Vec<u8>) -> Result<Self, TensorError> {
        let expected = Self::expected_bytes(dtype, &shape)?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { dtype, shape, data })
    }

    /// Zero-filled tensor of the given type and shape.
    pub fn allocate(dtype: TfDataType, shape: Vec<i64>) -> Result<Self, TensorError> {
        let len = Self::expected_bytes(dtype, &shape)?;
        Ok(Self {
            dtype,
            shape,
            data: vec![0u8; len],
        })
    }

    pub fn from_slice<T: TensorElement>(shape: Vec<i64>, data: &[T]) -> Result<Self, TensorError> {
        Self::new(TfDataType::from_kind(T::KIND), shape, encode(data))
    }

    fn expected_bytes(dtype: TfDataType, shape: &[i64]) -> Result<usize, TensorError> {
        let count = checked_count(&unsigned_dims(shape)?)?;
        let size = dtype
            .size()
            .ok_or(TensorError::UnsupportedElementKind(dtype.to_kind()))?;
        count.checked_mul(size).ok_or(TensorError::ShapeOverflow)
    }

    pub fn dtype(&self) -> TfDataType {
        self.dtype
    }

    pub fn shape(&self) -> &[i64] {
        &self.shape
    }

    pub fn num_elements(&self) -> usize {
        self.shape.iter().map(|&dim| dim as usize).product()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn to_vec<T: TensorElement>(&self) -> Result<Vec<T>, TensorError> {
        let kind = self.dtype.to_kind();
        if kind != T::KIND {
            return Err(TensorError::ElementKindMismatch {
                expected: T::KIND,
                got: kind,
            });
        }
        Ok(decode(&self.data))
    }
}
