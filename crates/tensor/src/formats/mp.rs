use {
    super::{checked_count, unsigned_dims},
    crate::{ElementKind, TensorError},
};

/// Tensor of the graph framework. Only 32-bit floats are carried.
#[derive(Clone, Debug, PartialEq)]
pub struct MpTensor {
    dims: Vec<i32>,
    data: Vec<f32>,
}

impl MpTensor {
    pub const ELEMENT_KIND: ElementKind = ElementKind::Fp32;

    pub fn new(dims: Vec<i32>, data: Vec<f32>) -> Result<Self, TensorError> {
        let count = checked_count(&unsigned_dims(&dims)?)?;
        if count != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: count,
                got: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    pub fn zeros(dims: Vec<i32>) -> Result<Self, TensorError> {
        let count = checked_count(&unsigned_dims(&dims)?)?;
        Ok(Self {
            dims,
            data: vec![0.0; count],
        })
    }

    pub fn dims(&self) -> &[i32] {
        &self.dims
    }

    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    pub fn read_view(&self) -> &[f32] {
        &self.data
    }

    pub fn write_view(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
