//! Logger backends and the process-wide instance.

use std::error::Error as StdError;
use std::fs;

use super::common::CaptureSink;
use optres::logger::{self, FileLogger, LogSink, LoggerConfig, NullLogger, TracingLogger};
use optres::Error;

#[test]
fn test_file_logger_formats_every_line_kind() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggerConfig::default()
        .with_file_path(dir.path().join("service.log"))
        .with_debug(true)
        .with_buffer_size(2);

    let sink = FileLogger::new(&config).unwrap();
    sink.start();
    sink.write("booted");
    sink.write_request("handled", "req-42");
    assert_eq!(sink.write_err(Some(&Error::Null)), 1);
    assert_eq!(sink.write_err_request(Some(&Error::FailedUnwrap), "req-43"), 1);
    sink.write_debug("verbose");
    sink.stop();

    let contents = fs::read_to_string(dir.path().join("service.log")).unwrap();
    let messages: Vec<&str> = contents
        .lines()
        .map(|line| line.split_once(" : ").unwrap().1)
        .collect();
    assert_eq!(
        messages,
        vec![
            "booted",
            "req-42 : handled",
            "Error: value was null",
            "req-43 : Error: Tried to unwrap a failed result!",
            "verbose",
        ]
    );
}

#[test]
fn test_file_logger_appends_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggerConfig::default().with_file_path(dir.path().join("append.log"));

    for message in ["one", "two"] {
        let sink = FileLogger::new(&config).unwrap();
        sink.start();
        sink.write(message);
        sink.stop();
    }

    let contents = fs::read_to_string(dir.path().join("append.log")).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn test_null_and_tracing_sinks_still_count_errors() {
    let err: &(dyn StdError + 'static) = &Error::Unset;

    let null = NullLogger::new(true);
    assert_eq!(null.write_err(Some(err)), 1);
    assert_eq!(null.write_err_request(None, "req"), 0);

    let traced = TracingLogger::new(false);
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt().with_test_writer().finish(),
    );
    traced.write("hello");
    assert_eq!(traced.write_err_request(Some(err), "req"), 1);
    assert_eq!(traced.write_err_debug(Some(err)), 1);
    assert_eq!(traced.write_err_msg_request(Some(err), "loading", "req"), 1);
    assert_eq!(traced.write_err_msg_request_debug(None, "loading", "req"), 0);
}

#[test]
fn test_capture_sink_uses_default_debug_gating() {
    let sink = CaptureSink::with_debug(false);
    sink.write_debug("hidden");
    sink.write_request_debug("hidden", "req");
    sink.write("shown");
    assert_eq!(sink.lines(), vec!["shown"]);
}

#[test]
fn test_error_with_message_is_request_scoped() {
    let sink = CaptureSink::with_debug(true);
    assert_eq!(sink.write_err_msg_request(None, "saving profile", "req-9"), 0);
    assert_eq!(
        sink.write_err_msg_request(Some(&Error::Null), "saving profile", "req-9"),
        1
    );
    assert_eq!(
        sink.write_err_msg_request_debug(Some(&Error::Unset), "reloading", "req-10"),
        1
    );
    assert_eq!(
        sink.lines(),
        vec![
            "req-9 : Error: value was null (saving profile)",
            "req-10 : Error: result was never set (reloading)",
        ]
    );
}

#[test]
fn test_error_with_message_debug_counts_without_writing() {
    let sink = CaptureSink::with_debug(false);
    assert_eq!(
        sink.write_err_msg_request_debug(Some(&Error::Null), "quiet", "req"),
        1
    );
    assert_eq!(sink.write_err_msg_request_debug(None, "quiet", "req"), 0);
    assert!(sink.lines().is_empty());
}

#[test]
fn test_global_instance_is_first_wins() {
    assert!(logger::init(NullLogger::new(true)));
    assert!(!logger::init(NullLogger::new(false)));
    assert!(logger::instance().debug_enabled());
}

#[test]
fn test_render_json_reports_type_and_body() {
    let rendered = logger::render_json(&super::common::sample_profile());
    assert!(rendered.contains("Profile:\n"));
    assert!(rendered.contains("\"city\": \"London\""));
}
