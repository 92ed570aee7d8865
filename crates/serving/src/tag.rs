//! Stream tag categories.
//!
//! A tag names one input or output stream of a node. Its prefix tells which
//! tensor format travels on the stream and whether a packet carries one tensor
//! or a list of them.

use {
    serde::Deserialize,
    std::{fmt, str::FromStr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TensorFormat {
    OpenVino,
    MediaPipe,
    TensorFlow,
    TfLite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Single,
    Vector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct TagKind {
    pub format: TensorFormat,
    pub cardinality: Cardinality,
}

impl TagKind {
    pub const OV: TagKind = TagKind::new(TensorFormat::OpenVino, Cardinality::Single);
    pub const OV_VEC: TagKind = TagKind::new(TensorFormat::OpenVino, Cardinality::Vector);
    pub const MP: TagKind = TagKind::new(TensorFormat::MediaPipe, Cardinality::Single);
    pub const MP_VEC: TagKind = TagKind::new(TensorFormat::MediaPipe, Cardinality::Vector);
    pub const TF: TagKind = TagKind::new(TensorFormat::TensorFlow, Cardinality::Single);
    pub const TF_VEC: TagKind = TagKind::new(TensorFormat::TensorFlow, Cardinality::Vector);
    pub const TFLITE: TagKind = TagKind::new(TensorFormat::TfLite, Cardinality::Single);
    pub const TFLITE_VEC: TagKind = TagKind::new(TensorFormat::TfLite, Cardinality::Vector);

    /// Prefixes in matching order. A plural prefix always comes before the
    /// singular one it extends.
    const PRECEDENCE: [TagKind; 8] = [
        TagKind::OV_VEC,
        TagKind::OV,
        TagKind::MP_VEC,
        TagKind::MP,
        TagKind::TF_VEC,
        TagKind::TF,
        TagKind::TFLITE_VEC,
        TagKind::TFLITE,
    ];

    pub const fn new(format: TensorFormat, cardinality: Cardinality) -> Self {
        Self {
            format,
            cardinality,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match (self.format, self.cardinality) {
            (TensorFormat::OpenVino, Cardinality::Single) => "OVTENSOR",
            (TensorFormat::OpenVino, Cardinality::Vector) => "OVTENSORS",
            (TensorFormat::MediaPipe, Cardinality::Single) => "TENSOR",
            (TensorFormat::MediaPipe, Cardinality::Vector) => "TENSORS",
            (TensorFormat::TensorFlow, Cardinality::Single) => "TFTENSOR",
            (TensorFormat::TensorFlow, Cardinality::Vector) => "TFTENSORS",
            (TensorFormat::TfLite, Cardinality::Single) => "TFLITE_TENSOR",
            (TensorFormat::TfLite, Cardinality::Vector) => "TFLITE_TENSORS",
        }
    }

    pub fn is_vector(&self) -> bool {
        self.cardinality == Cardinality::Vector
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for TagKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagKind::PRECEDENCE
            .into_iter()
            .find(|kind| kind.prefix() == s)
            .ok_or_else(|| format!("unknown tag kind: {s}"))
    }
}

impl TryFrom<String> for TagKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Category of a tag by prefix. Tags that match no prefix are single
/// native-engine tensors.
pub fn classify(tag: &str) -> TagKind {
    TagKind::PRECEDENCE
        .into_iter()
        .find(|kind| tag.starts_with(kind.prefix()))
        .unwrap_or(TagKind::OV)
}
