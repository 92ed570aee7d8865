use {
    super::checked_count,
    crate::{
        Buffer,
        OvElementType,
        TensorElement,
        TensorError,
        element::{decode, encode},
    },
};

/// Tensor of the native inference engine.
///
/// The data is reference counted: cloning an `OvTensor` shares its bytes, the
/// way engine tensors share their host memory.
#[derive(Clone, Debug, PartialEq)]
pub struct OvTensor {
    element_type: OvElementType,
    shape: Vec<usize>,
    data: Buffer,
}

impl OvTensor {
    pub fn new(
        element_type: OvElementType,
        shape: Vec<usize>,
        bytes: Vec<u8>,
    ) -> Result<Self, TensorError> {
        Self::from_buffer(element_type, shape, Buffer::shared(bytes))
    }

    pub fn from_slice<T: TensorElement>(
        shape: Vec<usize>,
        data: &[T],
    ) -> Result<Self, TensorError> {
        let count = checked_count(&shape)?;
        if count != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: count,
                got: data.len(),
            });
        }
        Self::new(OvElementType::from_kind(T::KIND), shape, encode(data))
    }

    pub(crate) fn from_buffer(
        element_type: OvElementType,
        shape: Vec<usize>,
        mut data: Buffer,
    ) -> Result<Self, TensorError> {
        let kind = element_type.to_kind();
        let expected = kind
            .byte_len(checked_count(&shape)?)
            .ok_or(TensorError::UnsupportedElementKind(kind))?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        let data = data.alias();
        Ok(Self {
            element_type,
            shape,
            data,
        })
    }

    pub fn element_type(&self) -> OvElementType {
        self.element_type
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn byte_size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_bytes()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.data
    }

    pub fn to_vec<T: TensorElement>(&self) -> Result<Vec<T>, TensorError> {
        let kind = self.element_type.to_kind();
        if kind != T::KIND {
            return Err(TensorError::ElementKindMismatch {
                expected: T::KIND,
                got: kind,
            });
        }
        Ok(decode(self.data()))
    }
}
