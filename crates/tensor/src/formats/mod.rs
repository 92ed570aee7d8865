//! In-memory models of the four external tensor formats.
//!
//! Each type keeps the shape representation, element typing and ownership
//! rules of the format it stands for; [`crate::convert`] moves data between
//! them and [`crate::TensorHandle`].

mod mp;
mod ov;
mod tf;
mod tflite;

pub use mp::MpTensor;
pub use ov::OvTensor;
pub use tf::TfTensor;
pub use tflite::TfLiteTensor;

use crate::TensorError;

pub(crate) fn checked_count(dims: &[usize]) -> Result<usize, TensorError> {
    dims.iter().try_fold(1usize, |acc, &dim| {
        acc.checked_mul(dim).ok_or(TensorError::ShapeOverflow)
    })
}

pub(crate) fn unsigned_dims<T: Copy + Into<i64>>(dims: &[T]) -> Result<Vec<usize>, TensorError> {
    dims.iter()
        .map(|&dim| {
            let dim = dim.into();
            usize::try_from(dim).map_err(|_| TensorError::NegativeDimension(dim))
        })
        .collect()
}
