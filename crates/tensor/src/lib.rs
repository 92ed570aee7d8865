pub mod buffer;
pub mod convert;
pub mod element;
pub mod error;
mod f16;
pub mod formats;
pub mod handle;
pub mod named;
pub mod precision;

pub use buffer::Buffer;
pub use element::{ElementKind, TensorElement};
pub use error::TensorError;
pub use formats::{MpTensor, OvTensor, TfLiteTensor, TfTensor};
pub use handle::{Shape, TensorHandle};
pub use named::NamedTensorSet;
pub use precision::{OvElementType, TfDataType};
