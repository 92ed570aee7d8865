//! In-process server.
//!
//! Models are plain Rust callables registered by name and version. Starting
//! the server reads a model server config file and serves exactly the models
//! it lists.

use {
    crate::{BackendError, Servable, ServableVersion, Server, ServerSettings, Session},
    serde::Deserialize,
    std::{
        collections::{BTreeMap, BTreeSet},
        path::Path,
        sync::{
            Arc,
            Mutex,
            MutexGuard,
            OnceLock,
            atomic::{AtomicUsize, Ordering},
        },
    },
    tensor::NamedTensorSet,
};

pub const STATUS_CONFIG: u32 = 1;
pub const STATUS_NOT_FOUND: u32 = 2;
pub const STATUS_UNAVAILABLE: u32 = 3;
pub const STATUS_INFERENCE: u32 = 4;

pub trait Model: Send + Sync {
    fn infer(&self, inputs: &NamedTensorSet) -> Result<NamedTensorSet, BackendError>;
}

impl<F> Model for F
where
    F: Fn(&NamedTensorSet) -> Result<NamedTensorSet, BackendError> + Send + Sync,
{
    fn infer(&self, inputs: &NamedTensorSet) -> Result<NamedTensorSet, BackendError> {
        self(inputs)
    }
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    model_config_list: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    config: ModelConfig,
}

#[derive(Debug, Deserialize)]
struct ModelConfig {
    name: String,
    #[serde(default)]
    base_path: String,
}

fn read_config(path: &Path) -> Result<ServerConfig, BackendError> {
    let json = std::fs::read_to_string(path).map_err(|err| {
        let message = format!("cannot read {}: {err}", path.display());
        BackendError::new(STATUS_CONFIG, message)
    })?;
    serde_json::from_str(&json).map_err(|err| {
        let message = format!("invalid config {}: {err}", path.display());
        BackendError::new(STATUS_CONFIG, message)
    })
}

#[derive(Default)]
struct Status {
    live: bool,
    configured: BTreeSet<String>,
}

type Versions = BTreeMap<u32, Arc<dyn Model>>;

#[derive(Default)]
struct Registry {
    models: Mutex<BTreeMap<String, Versions>>,
    status: Mutex<Status>,
}

impl Registry {
    fn models(&self) -> MutexGuard<'_, BTreeMap<String, Versions>> {
        self.models.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn status(&self) -> MutexGuard<'_, Status> {
        self.status.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_live(&self) -> bool {
        self.status().live
    }

    fn resolve(&self, servable: &Servable) -> Result<Arc<dyn Model>, BackendError> {
        let status = self.status();
        if !status.live {
            return Err(BackendError::new(STATUS_UNAVAILABLE, "server is not live"));
        }
        if !status.configured.contains(&servable.name) {
            return Err(BackendError::new(
                STATUS_NOT_FOUND,
                format!("servable {} is not configured", servable.name),
            ));
        }
        drop(status);

        let models = self.models();
        let versions = models.get(&servable.name).ok_or_else(|| {
            BackendError::new(
                STATUS_NOT_FOUND,
                format!("servable {} is not registered", servable.name),
            )
        })?;
        let model = match servable.version {
            ServableVersion::Default => versions.values().next_back(),
            ServableVersion::Specific(version) => versions.get(&version),
        };
        model.cloned().ok_or_else(|| {
            BackendError::new(
                STATUS_NOT_FOUND,
                format!(
                    "servable {} has no version {}",
                    servable.name,
                    servable.version.as_u32()
                ),
            )
        })
    }
}

/// Server running models inside the current process.
#[derive(Clone, Default)]
pub struct LocalServer {
    registry: Arc<Registry>,
    starts: Arc<AtomicUsize>,
}

impl LocalServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `model` as version 1 of `name`.
    pub fn register(&self, name: impl Into<String>, model: impl Model + 'static) {
        self.register_version(name, 1, model);
    }

    pub fn register_version(
        &self,
        name: impl Into<String>,
        version: u32,
        model: impl Model + 'static,
    ) {
        let name = name.into();
        base::log_debug!("registering {} version {}", name, version);
        self.registry
            .models()
            .entry(name)
            .or_default()
            .insert(version, Arc::new(model));
    }

    /// How many times `start` was called.
    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    /// Takes the server down; sessions stop answering.
    pub fn stop(&self) {
        let mut status = self.registry.status();
        status.live = false;
        base::log_info!("local server stopped");
    }
}

impl Server for LocalServer {
    fn is_live(&self) -> Result<bool, BackendError> {
        Ok(self.registry.is_live())
    }

    fn is_ready(&self) -> Result<bool, BackendError> {
        Ok(self.registry.is_live())
    }

    fn start(&self, settings: &ServerSettings) -> Result<(), BackendError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        base::log_debug!(
            "starting local server from {} with log level {}",
            settings.config_path.display(),
            settings.log_level
        );
        let config = read_config(&settings.config_path)?;
        let configured = config
            .model_config_list
            .into_iter()
            .map(|entry| {
                let config = entry.config;
                base::log_debug!("serving {} from {:?}", config.name, config.base_path);
                config.name
            })
            .collect::<BTreeSet<_>>();
        {
            let models = self.registry.models();
            if let Some(missing) = configured.iter().find(|name| !models.contains_key(*name)) {
                return Err(BackendError::new(
                    STATUS_NOT_FOUND,
                    format!("configured model {missing} is not registered"),
                ));
            }
        }
        let mut status = self.registry.status();
        status.configured = configured;
        status.live = true;
        Ok(())
    }

    fn create_session(&self, servable: Servable) -> Result<Arc<dyn Session>, BackendError> {
        Ok(Arc::new(LocalSession {
            servable,
            registry: Arc::clone(&self.registry),
            model: OnceLock::new(),
        }))
    }
}

struct LocalSession {
    servable: Servable,
    registry: Arc<Registry>,
    model: OnceLock<Arc<dyn Model>>,
}

impl Session for LocalSession {
    fn servable(&self) -> &Servable {
        &self.servable
    }

    fn load_model(&self) -> Result<(), BackendError> {
        let model = self.registry.resolve(&self.servable)?;
        let _ = self.model.set(model);
        Ok(())
    }

    fn infer(&self, inputs: &NamedTensorSet) -> Result<NamedTensorSet, BackendError> {
        let model = self.model.get().ok_or_else(|| {
            BackendError::new(
                STATUS_UNAVAILABLE,
                format!("servable {} is not loaded", self.servable.name),
            )
        })?;
        if !self.registry.is_live() {
            return Err(BackendError::new(STATUS_UNAVAILABLE, "server is not live"));
        }
        model.infer(inputs).map_err(|err| {
            let message = format!("{}: {}", self.servable.name, err.message);
            BackendError::new(STATUS_INFERENCE, message)
        })
    }
}
