//! Conversions between [`TensorHandle`] and the external formats.
//!
//! Element counts are preserved by construction; a converter that would
//! change them has a bug and panics. An element type that one side cannot
//! express is an ordinary [`TensorError::UnsupportedElementKind`].

use crate::{
    Buffer,
    ElementKind,
    MpTensor,
    OvElementType,
    OvTensor,
    Shape,
    TensorError,
    TensorHandle,
    TfDataType,
    TfLiteTensor,
    TfTensor,
    element::{decode, encode},
};

fn assert_same_count(source: usize, dest: &Shape) {
    let dest: usize = dest.dims().iter().product();
    assert_eq!(
        source, dest,
        "tensor conversion changed the element count ({source} -> {dest})"
    );
}

/// Checks a byte length taken from the source storage against the destination shape.
fn assert_same_size(kind: ElementKind, source_bytes: usize, dest: &Shape) {
    let Ok(count) = dest.element_count() else {
        return;
    };
    let Some(dest_bytes) = kind.byte_len(count) else {
        return;
    };
    assert_eq!(
        source_bytes, dest_bytes,
        "tensor conversion changed the element count ({source_bytes} -> {dest_bytes} bytes)"
    );
}

fn to_i32_dims(shape: &Shape) -> Result<Vec<i32>, TensorError> {
    shape
        .dims()
        .iter()
        .map(|&dim| i32::try_from(dim).map_err(|_| TensorError::ShapeOverflow))
        .collect()
}

/// Zero-copy: the handle aliases the engine tensor's bytes.
pub fn ov_to_handle(tensor: &OvTensor) -> Result<TensorHandle, TensorError> {
    let kind = tensor.element_type().to_kind();
    let shape = Shape::new(tensor.shape().to_vec());
    assert_same_size(kind, tensor.byte_size(), &shape);
    TensorHandle::new(kind, shape, tensor.buffer().clone())
}

/// Materializes a newly allocated engine tensor holding a copy of the bytes.
pub fn handle_to_ov(handle: &TensorHandle) -> Result<OvTensor, TensorError> {
    let element_type = OvElementType::from_kind(handle.kind());
    if !element_type.is_valid() {
        return Err(TensorError::UnsupportedElementKind(handle.kind()));
    }
    let dims = handle.shape().dims().to_vec();
    let tensor = OvTensor::new(element_type, dims, handle.bytes().to_vec())?;
    assert_same_size(handle.kind(), tensor.byte_size(), handle.shape());
    Ok(tensor)
}

pub fn mp_to_handle(tensor: &MpTensor) -> Result<TensorHandle, TensorError> {
    let shape = Shape::from_signed(tensor.dims().iter().copied())?;
    assert_same_count(tensor.num_elements(), &shape);
    TensorHandle::new(
        MpTensor::ELEMENT_KIND,
        shape,
        Buffer::owned(encode(tensor.read_view())),
    )
}

pub fn handle_to_mp(handle: &TensorHandle) -> Result<MpTensor, TensorError> {
    if handle.kind() != MpTensor::ELEMENT_KIND {
        return Err(TensorError::ElementKindMismatch {
            expected: MpTensor::ELEMENT_KIND,
            got: handle.kind(),
        });
    }
    let mut tensor = MpTensor::zeros(to_i32_dims(handle.shape())?)?;
    assert_same_count(tensor.num_elements(), handle.shape());
    let values: Vec<f32> = decode(handle.bytes());
    tensor.write_view().copy_from_slice(&values);
    Ok(tensor)
}

pub fn tf_to_handle(tensor: &TfTensor) -> Result<TensorHandle, TensorError> {
    let kind = tensor.dtype().to_kind();
    if kind == ElementKind::Undefined {
        return Err(TensorError::UnsupportedElementKind(kind));
    }
    let shape = Shape::from_signed(tensor.shape().iter().copied())?;
    assert_same_size(kind, tensor.data().len(), &shape);
    TensorHandle::new(kind, shape, Buffer::owned(tensor.data().to_vec()))
}

pub fn handle_to_tf(handle: &TensorHandle) -> Result<TfTensor, TensorError> {
    let dtype = TfDataType::from_kind(handle.kind());
    if !dtype.is_valid() {
        return Err(TensorError::UnsupportedElementKind(handle.kind()));
    }
    let shape = handle
        .shape()
        .dims()
        .iter()
        .map(|&dim| i64::try_from(dim).map_err(|_| TensorError::ShapeOverflow))
        .collect::<Result<Vec<_>, _>>()?;
    let mut tensor = TfTensor::allocate(dtype, shape)?;
    assert_same_size(handle.kind(), tensor.data().len(), handle.shape());
    tensor.data_mut().copy_from_slice(handle.bytes());
    Ok(tensor)
}

/// Zero-copy, with the implicit batch dimension of 1 made explicit.
pub fn tflite_to_handle(tensor: &TfLiteTensor) -> Result<TensorHandle, TensorError> {
    let mut dims = vec![1usize];
    dims.extend(Shape::from_signed(tensor.dims().iter().copied())?.dims());
    let shape = Shape::new(dims);
    assert_same_size(TfLiteTensor::ELEMENT_KIND, tensor.bytes(), &shape);
    TensorHandle::new(TfLiteTensor::ELEMENT_KIND, shape, tensor.buffer().clone())
}
