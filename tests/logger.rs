use std::sync::mpsc;

use log::{Level, LevelFilter, Log, Record};
use taskgate::config::LoggingConfig;
use taskgate::logger;

fn emit(logger: &dyn Log, level: Level, target: &str, message: &str) {
    logger.log(
        &Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target(target)
            .build(),
    );
}

#[test]
fn test_log_file_path() {
    let path = logger::get_log_file_path().unwrap();
    assert!(path.ends_with("taskgate/taskgate.log"));
}

#[test]
fn test_disabled_logging_is_a_no_op() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(logger::init(&config).is_ok());
}

#[test]
fn test_dispatch_formats_and_filters() {
    let (tx, rx) = mpsc::channel::<String>();
    let (_, log) = logger::dispatch(LevelFilter::Debug).chain(tx).into_log();

    emit(log.as_ref(), Level::Info, "taskgate::providers", "Fetched 3 tasks");
    emit(log.as_ref(), Level::Debug, "reqwest::connect", "pool noise");
    emit(log.as_ref(), Level::Trace, "taskgate::api", "too verbose");
    log.flush();

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("INFO taskgate::providers] Fetched 3 tasks"));
}
