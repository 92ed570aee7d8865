use {
    serving::{
        BackendError, BootstrapPhase, BootstrapState, LocalServer, ServableVersion, Server,
        ServingError, Session, SessionOptions, open_session,
    },
    std::{
        path::PathBuf,
        sync::{Arc, Barrier},
        thread,
    },
    tensor::NamedTensorSet,
};

fn identity(inputs: &NamedTensorSet) -> Result<NamedTensorSet, BackendError> {
    Ok(inputs.clone())
}

fn write_config(name: &str, models: &[&str]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{name}_{}.json", std::process::id()));
    let entries: Vec<String> = models
        .iter()
        .map(|model| {
            format!(r#"{{"config": {{"name": "{model}", "base_path": "/models/{model}"}}}}"#)
        })
        .collect();
    let list = format!(r#"{{"model_config_list": [{}]}}"#, entries.join(","));
    std::fs::write(&path, list).unwrap();
    path
}

fn server_with(models: &[&str]) -> LocalServer {
    let server = LocalServer::new();
    for model in models {
        server.register(*model, identity);
    }
    server
}

#[test]
fn test_concurrent_bootstrap_starts_once() {
    let config = write_config("concurrent", &["identity"]);
    let server = server_with(&["identity"]);
    let state = BootstrapState::new();
    let options = SessionOptions::new("identity").with_server_config(&config);
    let barrier = Barrier::new(2);

    let sessions: Vec<Result<Arc<dyn Session>, ServingError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    open_session(&options, &server, &state)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    std::fs::remove_file(&config).unwrap();

    assert_eq!(server.start_count(), 1);
    assert_eq!(state.phase(), BootstrapPhase::Live);
    assert!(server.is_live().unwrap());
    assert!(server.is_ready().unwrap());
    for session in sessions {
        assert_eq!(session.unwrap().servable().name, "identity");
    }
}

#[test]
fn test_failed_start_is_never_retried() {
    let missing = std::env::temp_dir().join(format!("missing_config_{}.json", std::process::id()));
    let server = server_with(&["identity"]);
    let state = BootstrapState::new();
    let options = SessionOptions::new("identity").with_server_config(&missing);

    let first = open_session(&options, &server, &state);
    assert!(matches!(first, Err(ServingError::ServerStart(_))));
    assert_eq!(state.phase(), BootstrapPhase::Failed);

    let second = open_session(&options, &server, &state);
    assert!(matches!(second, Err(ServingError::ServerNotLive)));
    assert_eq!(server.start_count(), 1);
}

#[test]
fn test_unregistered_configured_model_fails_start() {
    let config = write_config("unregistered", &["identity", "detector"]);
    let server = server_with(&["identity"]);
    let state = BootstrapState::new();
    let options = SessionOptions::new("identity").with_server_config(&config);
    let result = open_session(&options, &server, &state);
    std::fs::remove_file(&config).unwrap();
    match result {
        Err(ServingError::ServerStart(err)) => assert!(err.message.contains("detector")),
        other => panic!("unexpected {:?}", other.err()),
    }
}

#[test]
fn test_dead_server_after_start() {
    let config = write_config("dead", &["identity"]);
    let server = server_with(&["identity"]);
    let state = BootstrapState::new();
    let options = SessionOptions::new("identity").with_server_config(&config);
    open_session(&options, &server, &state).unwrap();
    std::fs::remove_file(&config).unwrap();

    server.stop();
    let result = open_session(&options, &server, &state);
    assert!(matches!(result, Err(ServingError::ServerNotLive)));
    assert_eq!(server.start_count(), 1);
}

#[test]
fn test_live_server_is_not_started_again() {
    let config = write_config("already_live", &["identity"]);
    let server = server_with(&["identity"]);
    let options = SessionOptions::new("identity").with_server_config(&config);
    open_session(&options, &server, &BootstrapState::new()).unwrap();

    let other = BootstrapState::new();
    open_session(&options, &server, &other).unwrap();
    std::fs::remove_file(&config).unwrap();

    assert_eq!(server.start_count(), 1);
    assert_eq!(other.phase(), BootstrapPhase::NotStarted);
}

#[test]
fn test_without_config_assumes_running_server() {
    let server = server_with(&["identity"]);
    let state = BootstrapState::new();
    let result = open_session(&SessionOptions::new("identity"), &server, &state);
    assert!(matches!(result, Err(ServingError::ModelLoad { .. })));
    assert_eq!(server.start_count(), 0);
    assert_eq!(state.phase(), BootstrapPhase::NotStarted);
}

#[test]
fn test_empty_servable_name_rejected_before_bootstrap() {
    let server = server_with(&["identity"]);
    let state = BootstrapState::new();
    let options = SessionOptions::new("").with_server_config("/nonexistent/config.json");
    let result = open_session(&options, &server, &state);
    assert!(matches!(result, Err(ServingError::Config(_))));
    assert_eq!(server.start_count(), 0);
}

#[test]
fn test_servable_versions() {
    let config = write_config("versions", &["detector"]);
    let server = LocalServer::new();
    server.register_version("detector", 1, identity);
    server.register_version("detector", 2, identity);
    let state = BootstrapState::new();

    let options = SessionOptions::new("detector")
        .with_server_config(&config)
        .with_version("2");
    let session = open_session(&options, &server, &state).unwrap();
    assert_eq!(session.servable().version, ServableVersion::Specific(2));

    let latest = open_session(&options.clone().with_version("0"), &server, &state).unwrap();
    assert_eq!(latest.servable().version, ServableVersion::Default);

    let missing = open_session(&options.clone().with_version("3"), &server, &state);
    std::fs::remove_file(&config).unwrap();
    match missing {
        Err(ServingError::ModelLoad { servable, source }) => {
            assert_eq!(servable, "detector");
            assert_eq!(source.code, serving::local::STATUS_NOT_FOUND);
        }
        other => panic!("unexpected {:?}", other.err()),
    }
}

#[test]
fn test_unconfigured_servable_fails_load() {
    let config = write_config("unconfigured", &["identity"]);
    let server = server_with(&["identity", "detector"]);
    let state = BootstrapState::new();
    open_session(
        &SessionOptions::new("identity").with_server_config(&config),
        &server,
        &state,
    )
    .unwrap();
    let result = open_session(
        &SessionOptions::new("detector").with_server_config(&config),
        &server,
        &state,
    );
    std::fs::remove_file(&config).unwrap();
    assert!(matches!(result, Err(ServingError::ModelLoad { .. })));
}

#[test]
fn test_global_state_is_shared() {
    let first: *const BootstrapState = BootstrapState::global();
    let second: *const BootstrapState = BootstrapState::global();
    assert_eq!(first, second);
}
