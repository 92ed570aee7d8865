use tensor::{
    Buffer, ElementKind, MpTensor, OvElementType, OvTensor, Shape, TensorError, TensorHandle,
    TfDataType, TfLiteTensor, TfTensor, convert,
};

#[test]
fn test_ov_to_handle_aliases_engine_memory() {
    let ov = OvTensor::from_slice(vec![1, 3], &[1.0f32, 2.0, 3.0]).unwrap();
    let handle = convert::ov_to_handle(&ov).unwrap();
    assert_eq!(handle.kind(), ElementKind::Fp32);
    assert_eq!(handle.shape().dims(), &[1, 3]);
    assert_eq!(handle.buffer().as_ptr(), ov.buffer().as_ptr());
}

#[test]
fn test_handle_to_ov_copies() {
    let handle = TensorHandle::from_slice(Shape::new(vec![2, 2]), &[1i32, 2, 3, 4]).unwrap();
    let ov = convert::handle_to_ov(&handle).unwrap();
    assert_eq!(ov.element_type(), OvElementType::I32);
    assert_eq!(ov.shape(), &[2, 2]);
    assert_eq!(ov.data(), handle.bytes());
    assert_ne!(ov.buffer().as_ptr(), handle.buffer().as_ptr());
}

#[test]
fn test_handle_to_ov_rejects_custom() {
    let handle = TensorHandle::new(
        ElementKind::Custom,
        Shape::new(vec![3]),
        Buffer::owned(vec![0; 3]),
    )
    .unwrap();
    assert_eq!(
        convert::handle_to_ov(&handle).unwrap_err(),
        TensorError::UnsupportedElementKind(ElementKind::Custom)
    );
}

#[test]
fn test_mp_round_trip_keeps_values() {
    let mp = MpTensor::new(vec![2, 3], vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let handle = convert::mp_to_handle(&mp).unwrap();
    assert_eq!(handle.shape().dims(), &[2, 3]);
    assert_eq!(handle.element_count(), mp.num_elements());
    let back = convert::handle_to_mp(&handle).unwrap();
    assert_eq!(back, mp);
}

#[test]
fn test_handle_to_mp_requires_fp32() {
    let handle = TensorHandle::from_slice(Shape::new(vec![2]), &[1u8, 2]).unwrap();
    assert_eq!(
        convert::handle_to_mp(&handle).unwrap_err(),
        TensorError::ElementKindMismatch {
            expected: ElementKind::Fp32,
            got: ElementKind::U8,
        }
    );
}

#[test]
fn test_mp_negative_dims_rejected() {
    assert_eq!(
        MpTensor::new(vec![-1, 2], vec![]).unwrap_err(),
        TensorError::NegativeDimension(-1)
    );
}

#[test]
fn test_tf_conversions_copy_through_type_table() {
    let tf = TfTensor::from_slice(vec![3], &[1i64, -2, 3]).unwrap();
    let handle = convert::tf_to_handle(&tf).unwrap();
    assert_eq!(handle.kind(), ElementKind::I64);
    assert_eq!(handle.to_vec::<i64>().unwrap(), vec![1, -2, 3]);

    let back = convert::handle_to_tf(&handle).unwrap();
    assert_eq!(back.dtype(), TfDataType::Int64);
    assert_eq!(back.shape(), &[3]);
    assert_eq!(back.data(), tf.data());
}

#[test]
fn test_tf_unmapped_type_is_unsupported() {
    let handle = TensorHandle::zeros(ElementKind::U4, Shape::new(vec![4])).unwrap();
    assert_eq!(
        convert::handle_to_tf(&handle).unwrap_err(),
        TensorError::UnsupportedElementKind(ElementKind::U4)
    );
}

#[test]
fn test_tflite_prepends_batch_and_aliases() {
    let lite = TfLiteTensor::new(vec![2, 2], &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let handle = convert::tflite_to_handle(&lite).unwrap();
    assert_eq!(handle.shape().dims(), &[1, 2, 2]);
    assert_eq!(handle.element_count(), 4);
    assert_eq!(handle.buffer().as_ptr(), lite.buffer().as_ptr());
    assert_eq!(handle.to_vec::<f32>().unwrap(), lite.data_f32());
}

#[test]
fn test_element_counts_preserved_across_formats() {
    let shapes: [&[usize]; 4] = [&[], &[5], &[2, 3], &[1, 2, 2, 2]];
    for dims in shapes {
        let count: usize = dims.iter().product();
        let values: Vec<f32> = (0..count).map(|v| v as f32).collect();
        let handle = TensorHandle::from_slice(Shape::from(dims), &values).unwrap();
        assert_eq!(convert::handle_to_ov(&handle).unwrap().size(), count);
        let mp = convert::handle_to_mp(&handle).unwrap();
        assert_eq!(mp.num_elements(), count);
        let tf = convert::handle_to_tf(&handle).unwrap();
        assert_eq!(tf.num_elements(), count);
    }
}
