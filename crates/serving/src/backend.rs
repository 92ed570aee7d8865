use {
    crate::{BackendError, ServableVersion},
    base::Level,
    std::{path::PathBuf, sync::Arc},
    tensor::NamedTensorSet,
};

/// Settings a server is started with.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub config_path: PathBuf,
    pub log_level: Level,
}

/// A model as the backend addresses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Servable {
    pub name: String,
    pub version: ServableVersion,
}

impl Servable {
    pub fn new(name: impl Into<String>, version: ServableVersion) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// The process-wide inference server.
pub trait Server: Send + Sync {
    fn is_live(&self) -> Result<bool, BackendError>;
    fn is_ready(&self) -> Result<bool, BackendError>;
    fn start(&self, settings: &ServerSettings) -> Result<(), BackendError>;
    fn create_session(&self, servable: Servable) -> Result<Arc<dyn Session>, BackendError>;
}

/// Handle bound to one servable, shared by every node using it.
pub trait Session: Send + Sync {
    fn servable(&self) -> &Servable;
    fn load_model(&self) -> Result<(), BackendError>;
    fn infer(&self, inputs: &NamedTensorSet) -> Result<NamedTensorSet, BackendError>;
}
