use {
    super::{checked_count, unsigned_dims},
    crate::{
        Buffer,
        ElementKind,
        TensorError,
        element::{decode, encode},
    },
};

/// Tensor of the mobile runtime.
///
/// Always 32-bit float. `dims` leaves out the leading batch dimension, which
/// the runtime treats as an implicit 1 on input.
#[derive(Clone, Debug, PartialEq)]
pub struct TfLiteTensor {
    name: String,
    dims: Vec<i32>,
    data: Buffer,
}

impl TfLiteTensor {
    pub const ELEMENT_KIND: ElementKind = ElementKind::Fp32;

    pub fn new(dims: Vec<i32>, data: &[f32]) -> Result<Self, TensorError> {
        Self::from_buffer(String::new(), dims, Buffer::shared(encode(data)))
    }

    pub fn from_buffer(name: String, dims: Vec<i32>, data: Buffer) -> Result<Self, TensorError> {
        let count = checked_count(&unsigned_dims(&dims)?)?;
        let expected = Self::ELEMENT_KIND
            .byte_len(count)
            .ok_or(TensorError::ShapeOverflow)?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { name, dims, data })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> &[i32] {
        &self.dims
    }

    pub fn bytes(&self) -> usize {
        self.data.len()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.data
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.data
    }

    pub fn data_f32(&self) -> Vec<f32> {
        decode(self.data.as_bytes())
    }
}
