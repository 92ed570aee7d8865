use base::{Level, MemoryLogger, Stamped, Timestamp};

// The logger and level filter are process globals, so everything touching
// them lives in one test.
#[test]
fn test_memory_logger_and_level_filter() {
    let logger = base::init_memory_logger(MemoryLogger::new());
    base::set_max_level(Level::Debug);

    base::log_debug!("debug {}", 1);
    base::log_info!("info {}", 2);
    base::log_warn!("warn");
    base::log_error!("error");
    assert!(logger.contains("debug 1"));
    assert!(logger.contains("info 2"));
    let levels: Vec<Level> = logger.records().iter().map(|(level, _)| *level).collect();
    let expected = [Level::Debug, Level::Info, Level::Warn, Level::Error];
    assert_eq!(levels, expected);

    logger.clear();
    base::set_max_level(Level::Warn);
    base::log_debug!("hidden debug");
    base::log_info!("hidden info");
    base::log_warn!("shown warn");
    assert!(!logger.contains("hidden"));
    assert!(logger.contains("shown warn"));
    assert_eq!(base::max_level(), Level::Warn);
    base::set_max_level(Level::Debug);
}

#[test]
fn test_file_logger_writes_to_dated_file() {
    use base::Logger;

    let dir = std::env::temp_dir().join(format!("base-log-test-{}-file", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let logger = base::FileLogger::new(&dir).unwrap();
    logger.log(Level::Info, "log_tests.rs", 42, "hello file");
    let path = dir.join(format!("{}.log", base::format_today()));
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("hello file"));
    assert!(content.contains("log_tests.rs:42"));
    assert!(content.contains("INFO"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_format_timestamp_structure() {
    let ts = base::format_timestamp();
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[16..17], ":");
}

#[test]
fn test_stamped_keeps_timestamp_through_map() {
    let stamped = Stamped::new(Timestamp::from_micros(1500), 21);
    let doubled = stamped.map(|v| v * 2);
    assert_eq!(doubled.timestamp, Timestamp::from_micros(1500));
    assert_eq!(doubled.inner, 42);
}

#[test]
fn test_timestamp_display_and_unset() {
    assert_eq!(Timestamp::from_micros(7).to_string(), "7us");
    assert_eq!(Timestamp::UNSET.to_string(), "unset");
    assert!(!Timestamp::UNSET.is_set());
    assert!(Timestamp::from_micros(0) > Timestamp::UNSET);
}
