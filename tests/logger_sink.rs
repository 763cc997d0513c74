use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, Mutex};

use taglog::{args, BuildConfig, Error, Level, Logger, Sink};

/// Sink that records every write for assertions
#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<(Level, String, String)>>,
}

impl RecordingSink {
    fn lines(&self) -> Vec<(Level, String, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for RecordingSink {
    fn write(&self, level: Level, tag: &str, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((level, tag.to_string(), message.to_string()));
    }
}

#[derive(Debug)]
struct ResetError;

impl fmt::Display for ResetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset by peer")
    }
}

impl StdError for ResetError {}

fn recording_logger(primary: &str, secondary: &str) -> (Logger, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::new(primary, secondary).with_sink(sink.clone());
    (logger, sink)
}

#[test]
fn info_substitutes_and_tags() {
    let (logger, sink) = recording_logger("APP", "Net");

    logger
        .info("Connected to %s on port %d", &args!["host1", 8080])
        .unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Level::Info);
    assert_eq!(lines[0].1, "APP Net");
    assert_eq!(lines[0].2, "Connected to host1 on port 8080");
}

#[test]
fn each_level_writes_exactly_once() {
    let (logger, sink) = recording_logger("APP", "Net");

    logger.verbose("v", &args![]).unwrap();
    logger.debug("d", &args![]).unwrap();
    logger.info("i", &args![]).unwrap();
    logger.warn("w", &args![]).unwrap();
    logger.error("e", &args![]).unwrap();

    let levels: Vec<Level> = sink.lines().iter().map(|line| line.0).collect();
    assert_eq!(
        levels,
        vec![
            Level::Verbose,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error
        ]
    );
    assert!(sink.lines().iter().all(|line| line.1 == "APP Net"));
}

#[test]
fn empty_secondary_tags_with_primary_alone() {
    let (logger, sink) = recording_logger("APP", "");

    logger.warn("low disk", &args![]).unwrap();

    assert_eq!(sink.lines()[0].1, "APP");
}

#[test]
fn type_derived_tag_matches_explicit_label() {
    struct Parser;

    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::for_type::<Parser>("App").with_sink(sink.clone());

    logger.info("ready", &args![]).unwrap();

    assert_eq!(sink.lines()[0].1, "App Parser");
    assert_eq!(logger.tag(), Logger::new("App", "Parser").tag());
}

#[test]
fn config_flag_false_disables_all_levels() {
    let sink = Arc::new(RecordingSink::default());
    let release = BuildConfig::new(false);
    let logger = Logger::with_config("APP", Some("Net"), &release).with_sink(sink.clone());

    logger.verbose("v %d", &args![1]).unwrap();
    logger.debug("d", &args![]).unwrap();
    logger.info("i %s", &args!["x"]).unwrap();
    logger.warn("w", &args![]).unwrap();
    logger.error("e", &args![]).unwrap();
    logger.error_cause(&ResetError);
    logger.error_with("m %s", &args!["y"], &ResetError).unwrap();

    assert!(sink.lines().is_empty());
}

#[test]
fn config_flag_true_keeps_the_gate_open() {
    let sink = Arc::new(RecordingSink::default());
    let debug = BuildConfig::new(true);
    let logger = Logger::with_config("APP", Some("Net"), &debug).with_sink(sink.clone());

    logger.info("up", &args![]).unwrap();

    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn error_cause_writes_one_line() {
    let (logger, sink) = recording_logger("APP", "Net");

    logger.error_cause(&ResetError);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Level::Error);
    assert_eq!(lines[0].2, "connection reset by peer");
}

#[test]
fn error_with_writes_message_then_cause() {
    let (logger, sink) = recording_logger("APP", "Net");

    logger
        .error_with("retry %d failed", &args![3], &ResetError)
        .unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].2, "retry 3 failed");
    assert_eq!(lines[1].2, "connection reset by peer");
    assert!(lines.iter().all(|line| line.0 == Level::Error));
}

#[test]
fn format_mismatch_propagates_without_writes() {
    let (logger, sink) = recording_logger("APP", "Net");

    let err = logger
        .error_with("retry %d failed", &args!["three"], &ResetError)
        .unwrap_err();

    assert_eq!(
        err,
        Error::ArgumentType {
            spec: 'd',
            index: 0,
            found: "string"
        }
    );
    assert!(sink.lines().is_empty());
}

#[test]
fn shared_clones_log_through_the_same_sink() {
    let (logger, sink) = recording_logger("APP", "Net");
    let clone = logger.clone();

    logger.info("first", &args![]).unwrap();
    clone.info("second", &args![]).unwrap();

    assert_eq!(sink.lines().len(), 2);
}
