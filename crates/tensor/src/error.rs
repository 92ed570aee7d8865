use {crate::ElementKind, std::fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
    NegativeDimension(i64),
    UnsupportedElementKind(ElementKind),
    ElementKindMismatch {
        expected: ElementKind,
        got: ElementKind,
    },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            TensorError::NegativeDimension(dim) => write!(f, "negative dimension: {dim}"),
            TensorError::UnsupportedElementKind(kind) => {
                write!(f, "unsupported element kind: {kind}")
            }
            TensorError::ElementKindMismatch { expected, got } => {
                write!(f, "element kind mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}
