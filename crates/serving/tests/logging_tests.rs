use {
    base::{Level, MemoryLogger, init_memory_logger, set_max_level},
    serving::{
        BackendError, BootstrapState, Contract, InferenceOptions, LocalServer, SessionOptions,
        open_session,
    },
    tensor::NamedTensorSet,
};

fn identity(inputs: &NamedTensorSet) -> Result<NamedTensorSet, BackendError> {
    Ok(inputs.clone())
}

#[test]
fn test_bootstrap_and_resolution_are_logged() {
    let logger = init_memory_logger(MemoryLogger::new());
    set_max_level(Level::Debug);

    let config = std::env::temp_dir().join(format!("logged_{}.json", std::process::id()));
    std::fs::write(
        &config,
        r#"{"model_config_list": [{"config": {"name": "logged", "base_path": "/models"}}]}"#,
    )
    .unwrap();
    let server = LocalServer::new();
    server.register("logged", identity);
    open_session(
        &SessionOptions::new("logged").with_server_config(&config),
        &server,
        &BootstrapState::new(),
    )
    .unwrap();
    std::fs::remove_file(&config).unwrap();

    let options = InferenceOptions::default();
    Contract::resolve(["TFLITE_TENSORS_X"], ["OVTENSOR"], &options).unwrap();

    assert!(logger.contains("server started"));
    assert!(logger.contains("session for logged version 0 created"));
    assert!(logger.contains("input tag TFLITE_TENSORS_X resolved as TFLITE_TENSORS"));
    assert!(
        logger
            .records()
            .iter()
            .any(|(level, message)| *level == Level::Info && message.contains("starting server"))
    );
}
