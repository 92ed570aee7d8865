use serving::{
    Cardinality, Contract, InferenceOptions, Packet, ServingError, TagKind, TensorFormat, classify,
};
use tensor::{MpTensor, OvTensor};

#[test]
fn test_classify_prefixes() {
    assert_eq!(classify("OVTENSOR"), TagKind::OV);
    assert_eq!(classify("OVTENSOR_IMAGE"), TagKind::OV);
    assert_eq!(classify("OVTENSORS_IMAGES"), TagKind::OV_VEC);
    assert_eq!(classify("TENSOR_IN"), TagKind::MP);
    assert_eq!(classify("TENSORS"), TagKind::MP_VEC);
    assert_eq!(classify("TFTENSOR_X"), TagKind::TF);
    assert_eq!(classify("TFTENSORS_X"), TagKind::TF_VEC);
    assert_eq!(classify("TFLITE_TENSOR"), TagKind::TFLITE);
    assert_eq!(classify("TFLITE_TENSORS_BOXES"), TagKind::TFLITE_VEC);
}

#[test]
fn test_plural_prefix_is_vector() {
    for tag in ["OVTENSORS", "TENSORS", "TFTENSORS", "TFLITE_TENSORS"] {
        assert_eq!(classify(tag).cardinality, Cardinality::Vector, "{tag}");
    }
}

#[test]
fn test_unknown_tag_defaults_to_engine_single() {
    assert_eq!(classify("IMAGE"), TagKind::OV);
    assert_eq!(classify(""), TagKind::OV);
    assert_eq!(classify("tensor"), TagKind::OV);
}

#[test]
fn test_tag_kind_display_and_parse() {
    assert_eq!(TagKind::TFLITE_VEC.to_string(), "TFLITE_TENSORS");
    assert_eq!(
        "TFTENSOR".parse::<TagKind>(),
        Ok(TagKind::new(TensorFormat::TensorFlow, Cardinality::Single))
    );
    assert!("OV".parse::<TagKind>().is_err());
}

#[test]
fn test_explicit_kind_overrides_prefix() {
    let options =
        InferenceOptions::from_json(r#"{"tag_kinds": {"IMAGE": "TENSORS"}}"#).unwrap();
    let contract = Contract::resolve(["IMAGE", "OVTENSOR_B"], ["OUT"], &options).unwrap();
    assert_eq!(contract.input_kind("IMAGE"), Some(TagKind::MP_VEC));
    assert_eq!(contract.input_kind("OVTENSOR_B"), Some(TagKind::OV));
    assert_eq!(contract.output_kind("OUT"), Some(TagKind::OV));
}

#[test]
fn test_bad_tag_kind_in_options() {
    let result = InferenceOptions::from_json(r#"{"tag_kinds": {"IMAGE": "PICTURE"}}"#);
    assert!(matches!(result, Err(ServingError::Json(_))));
}

#[test]
fn test_contract_requires_inputs_and_outputs() {
    let options = InferenceOptions::default();
    let no_inputs = Contract::resolve(Vec::<String>::new(), ["OUT"], &options);
    assert!(matches!(no_inputs, Err(ServingError::Config(_))));
    let no_outputs = Contract::resolve(["IN"], Vec::<String>::new(), &options);
    assert!(matches!(no_outputs, Err(ServingError::Config(_))));
}

#[test]
fn test_packet_checked_against_contract() {
    let options = InferenceOptions::default();
    let contract = Contract::resolve(["OVTENSOR_A"], ["OUT"], &options).unwrap();

    let ov = Packet::Ov(OvTensor::from_slice(vec![1], &[1.0f32]).unwrap());
    let kind = contract.check_input("OVTENSOR_A", &ov).unwrap();
    assert_eq!(kind, TagKind::OV);

    let mp = Packet::Mp(MpTensor::new(vec![1], vec![1.0]).unwrap());
    match contract.check_input("OVTENSOR_A", &mp) {
        Err(ServingError::PacketKind { expected, got, .. }) => {
            assert_eq!(expected, TagKind::OV);
            assert_eq!(got, TagKind::MP);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        contract.check_input("OVTENSOR_B", &ov),
        Err(ServingError::UnknownTag(tag)) if tag == "OVTENSOR_B"
    ));
}
