use {
    crate::{Server, ServerSettings, ServingError},
    base::Level,
    std::{path::Path, sync::Mutex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// No start was attempted from this state.
    NotStarted,
    Live,
    /// A start was attempted and did not bring the server up.
    Failed,
}

/// Records whether this process already tried to start the server.
///
/// Callers that find an attempt on record never start again; they only check
/// that the server is live.
#[derive(Debug)]
pub struct BootstrapState {
    phase: Mutex<BootstrapPhase>,
}

static GLOBAL: BootstrapState = BootstrapState::new();

impl BootstrapState {
    pub const fn new() -> Self {
        Self {
            phase: Mutex::new(BootstrapPhase::NotStarted),
        }
    }

    /// The instance shared by the whole process.
    pub fn global() -> &'static BootstrapState {
        &GLOBAL
    }

    pub fn phase(&self) -> BootstrapPhase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Starts `server` from `config_path` unless it is live already or a start
    /// was attempted before.
    pub fn ensure_server(
        &self,
        server: &dyn Server,
        config_path: &Path,
    ) -> Result<(), ServingError> {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        let live = server.is_live()?;
        match *phase {
            BootstrapPhase::NotStarted if live => {
                base::log_info!("server already live, not starting it");
            }
            BootstrapPhase::NotStarted => {
                *phase = BootstrapPhase::Failed;
                base::log_info!("starting server from {}", config_path.display());
                let settings = ServerSettings {
                    config_path: config_path.to_path_buf(),
                    log_level: Level::Debug,
                };
                if let Err(err) = server.start(&settings) {
                    base::log_error!("server start failed: {}", err);
                    return Err(ServingError::ServerStart(err));
                }
                if !server.is_ready()? {
                    base::log_error!("server started but is not ready");
                    return Err(ServingError::ServerNotReady);
                }
                *phase = BootstrapPhase::Live;
                base::log_info!("server started");
            }
            BootstrapPhase::Live | BootstrapPhase::Failed => {
                if !live {
                    base::log_error!("server start was attempted before but server is not live");
                    return Err(ServingError::ServerNotLive);
                }
                base::log_debug!("server already started by this process");
            }
        }
        Ok(())
    }
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self::new()
    }
}
