use tensor::{ElementKind, OvElementType, TfDataType};

#[test]
fn test_ov_round_trip_for_every_mapped_kind() {
    for kind in ElementKind::ALL {
        let external = OvElementType::from_kind(kind);
        if external == OvElementType::Undefined {
            continue;
        }
        assert_eq!(external.to_kind(), kind, "round trip through {external:?}");
    }
}

#[test]
fn test_tf_round_trip_for_every_mapped_kind() {
    for kind in ElementKind::ALL {
        let external = TfDataType::from_kind(kind);
        if external == TfDataType::Invalid {
            continue;
        }
        assert_eq!(external.to_kind(), kind, "round trip through {external:?}");
    }
}

#[test]
fn test_ov_unmapped_kinds_resolve_to_sentinel() {
    for kind in [
        ElementKind::Custom,
        ElementKind::Mixed,
        ElementKind::Q78,
        ElementKind::Bin,
    ] {
        assert_eq!(OvElementType::from_kind(kind), OvElementType::Undefined);
    }
    assert!(!OvElementType::Undefined.is_valid());
    assert!(!OvElementType::Dynamic.is_valid());
}

#[test]
fn test_tf_unmapped_types_resolve_to_sentinel() {
    assert_eq!(TfDataType::String.to_kind(), ElementKind::Undefined);
    assert_eq!(TfDataType::Complex64.to_kind(), ElementKind::Undefined);
    assert_eq!(TfDataType::from_kind(ElementKind::I4), TfDataType::Invalid);
    assert_eq!(TfDataType::from_kind(ElementKind::U1), TfDataType::Invalid);
    assert_eq!(
        TfDataType::from_kind(ElementKind::Dynamic),
        TfDataType::Invalid
    );
}

#[test]
fn test_common_pairs() {
    assert_eq!(OvElementType::F32.to_kind(), ElementKind::Fp32);
    assert_eq!(OvElementType::Boolean.to_kind(), ElementKind::Bool);
    assert_eq!(TfDataType::Half.to_kind(), ElementKind::Fp16);
    assert_eq!(TfDataType::from_kind(ElementKind::U8), TfDataType::UInt8);
    assert_eq!(TfDataType::Double.size(), Some(8));
    assert_eq!(TfDataType::String.size(), None);
}
