use {
    crate::{BootstrapState, Servable, Server, ServingError, Session, SessionOptions},
    std::sync::Arc,
};

/// Produces the session a graph's inference nodes share.
///
/// With a server config path the server is bootstrapped through `state`
/// first; without one the server is assumed to be running already. The lock
/// in `state` is not held while the session is created.
pub fn open_session(
    options: &SessionOptions,
    server: &dyn Server,
    state: &BootstrapState,
) -> Result<Arc<dyn Session>, ServingError> {
    options.validate()?;
    match options.bootstrap_config() {
        Some(config_path) => state.ensure_server(server, config_path)?,
        None => base::log_debug!("no server config given, using the running server"),
    }

    let servable = Servable::new(options.servable_name.as_str(), options.version());
    let load_error = |source| ServingError::ModelLoad {
        servable: servable.name.clone(),
        source,
    };
    let session = server.create_session(servable.clone()).map_err(load_error)?;
    session.load_model().map_err(load_error)?;
    base::log_info!(
        "session for {} version {} created",
        servable.name,
        servable.version.as_u32()
    );
    Ok(session)
}
