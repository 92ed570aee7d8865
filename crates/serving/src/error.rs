use {crate::TagKind, std::fmt, tensor::TensorError};

/// Status reported by the serving backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub code: u32,
    pub message: String,
}

impl BackendError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend status {}: {}", self.code, self.message)
    }
}

impl std::error::Error for BackendError {}

#[derive(Debug)]
pub enum ServingError {
    Config(String),
    OrderingList {
        tag: String,
        expected: usize,
        got: usize,
    },
    UnknownTag(String),
    PacketKind {
        tag: String,
        expected: TagKind,
        got: TagKind,
    },
    TooFewOutputs { expected: usize, got: usize },
    MissingOutput(String),
    OutputLayoutChanged(String),
    Tensor(TensorError),
    ServerStart(BackendError),
    ServerNotLive,
    ServerNotReady,
    ModelLoad {
        servable: String,
        source: BackendError,
    },
    Inference(BackendError),
    Backend(BackendError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ServingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServingError::Config(msg) => write!(f, "configuration error: {msg}"),
            ServingError::OrderingList { tag, expected, got } => write!(
                f,
                "ordering list for {tag} has {got} entries, {expected} tensors were passed"
            ),
            ServingError::UnknownTag(tag) => write!(f, "tag {tag} is not declared on this node"),
            ServingError::PacketKind { tag, expected, got } => {
                write!(f, "packet on {tag} is {got}, expected {expected}")
            }
            ServingError::TooFewOutputs { expected, got } => write!(
                f,
                "inference returned {got} outputs, {expected} output tags are declared"
            ),
            ServingError::MissingOutput(name) => {
                write!(f, "output {name} not found in inference results")
            }
            ServingError::OutputLayoutChanged(tag) => {
                write!(f, "output layout of {tag} differs from the first call")
            }
            ServingError::Tensor(err) => write!(f, "tensor error: {err}"),
            ServingError::ServerStart(err) => write!(f, "failed to start server: {err}"),
            ServingError::ServerNotLive => write!(f, "server was started but is not live"),
            ServingError::ServerNotReady => write!(f, "server started but is not ready"),
            ServingError::ModelLoad { servable, source } => {
                write!(f, "failed to load servable {servable}: {source}")
            }
            ServingError::Inference(err) => write!(f, "inference failed: {err}"),
            ServingError::Backend(err) => write!(f, "backend error: {err}"),
            ServingError::Io(err) => write!(f, "io error: {err}"),
            ServingError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for ServingError {}

impl From<TensorError> for ServingError {
    fn from(err: TensorError) -> Self {
        ServingError::Tensor(err)
    }
}

impl From<BackendError> for ServingError {
    fn from(err: BackendError) -> Self {
        ServingError::Backend(err)
    }
}

impl From<std::io::Error> for ServingError {
    fn from(err: std::io::Error) -> Self {
        ServingError::Io(err)
    }
}

impl From<serde_json::Error> for ServingError {
    fn from(err: serde_json::Error) -> Self {
        ServingError::Json(err)
    }
}
