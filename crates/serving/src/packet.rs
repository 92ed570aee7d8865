use {
    crate::TagKind,
    tensor::{MpTensor, OvTensor, TensorError, TensorHandle, TfLiteTensor, TfTensor, convert},
};

/// One value travelling on a node stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    Ov(OvTensor),
    OvVec(Vec<OvTensor>),
    Mp(MpTensor),
    MpVec(Vec<MpTensor>),
    Tf(TfTensor),
    TfVec(Vec<TfTensor>),
    TfLite(TfLiteTensor),
    TfLiteVec(Vec<TfLiteTensor>),
}

impl Packet {
    pub fn kind(&self) -> TagKind {
        match self {
            Packet::Ov(_) => TagKind::OV,
            Packet::OvVec(_) => TagKind::OV_VEC,
            Packet::Mp(_) => TagKind::MP,
            Packet::MpVec(_) => TagKind::MP_VEC,
            Packet::Tf(_) => TagKind::TF,
            Packet::TfVec(_) => TagKind::TF_VEC,
            Packet::TfLite(_) => TagKind::TFLITE,
            Packet::TfLiteVec(_) => TagKind::TFLITE_VEC,
        }
    }

    /// Number of tensors carried.
    pub fn len(&self) -> usize {
        match self {
            Packet::OvVec(v) => v.len(),
            Packet::MpVec(v) => v.len(),
            Packet::TfVec(v) => v.len(),
            Packet::TfLiteVec(v) => v.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts every carried tensor, in packet order.
    pub fn to_handles(&self) -> Result<Vec<TensorHandle>, TensorError> {
        match self {
            Packet::Ov(t) => Ok(vec![convert::ov_to_handle(t)?]),
            Packet::OvVec(v) => v.iter().map(convert::ov_to_handle).collect(),
            Packet::Mp(t) => Ok(vec![convert::mp_to_handle(t)?]),
            Packet::MpVec(v) => v.iter().map(convert::mp_to_handle).collect(),
            Packet::Tf(t) => Ok(vec![convert::tf_to_handle(t)?]),
            Packet::TfVec(v) => v.iter().map(convert::tf_to_handle).collect(),
            Packet::TfLite(t) => Ok(vec![convert::tflite_to_handle(t)?]),
            Packet::TfLiteVec(v) => v.iter().map(convert::tflite_to_handle).collect(),
        }
    }

    pub fn as_ov(&self) -> Option<&OvTensor> {
        match self {
            Packet::Ov(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_ov_vec(&self) -> Option<&[OvTensor]> {
        match self {
            Packet::OvVec(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tf(&self) -> Option<&TfTensor> {
        match self {
            Packet::Tf(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_tflite_vec(&self) -> Option<&[TfLiteTensor]> {
        match self {
            Packet::TfLiteVec(v) => Some(v),
            _ => None,
        }
    }
}
