//! End-to-end dump scenarios.
//!
//! Each test dumps a value to a scratch file and compares the file contents
//! byte-for-byte against the format existing debug-log tooling parses.

use std::fs;

use dumplog::test_support::{MemorySink, read_dump, scratch_file};
use dumplog::{DumpError, Dumper, LoggableValue, WriteMode, dump_log};
use serde::Serialize;

fn dump_and_read(value: impl Into<LoggableValue>) -> String {
    let (_dir, path) = scratch_file("test.log").expect("scratch");
    dump_log(&path, value, WriteMode::Overwrite).expect("dump");
    read_dump(&path).expect("read")
}

#[test]
fn string_is_written_with_terminator() {
    assert_eq!(dump_and_read("test"), "test\r\n");
}

#[test]
fn integer_is_written_in_base_ten() {
    assert_eq!(dump_and_read(100), "100\r\n");
}

#[test]
fn zero_is_not_treated_as_unset() {
    assert_eq!(dump_and_read(0), "0\r\n");
    assert_eq!(dump_and_read("0"), "0\r\n");
}

#[test]
fn empty_string_writes_only_terminator() {
    assert_eq!(dump_and_read(""), "\r\n");
}

#[test]
fn booleans_and_null() {
    assert_eq!(dump_and_read(true), "True\r\n");
    assert_eq!(dump_and_read(false), "False\r\n");
    assert_eq!(dump_and_read(LoggableValue::Null), "Null\r\n");
}

#[test]
fn unset_writes_placeholder() {
    assert_eq!(
        dump_and_read(LoggableValue::default()),
        "The data to be verified is not set.\r\n"
    );
}

#[test]
fn sequence_writes_one_line_per_element() {
    assert_eq!(
        dump_and_read(vec!["line1", "line2", "line3"]),
        "line1\r\nline2\r\nline3\r\n"
    );
}

#[test]
fn record_writes_bracketed_dump() {
    let record = LoggableValue::record([
        ("name", LoggableValue::from("John")),
        ("age", LoggableValue::from(31)),
    ]);
    assert_eq!(
        dump_and_read(record),
        "(object) array(\n   'name' => 'John',\n   'age' => 31,\n)\r\n"
    );
}

#[test]
fn serializable_struct_writes_like_a_record() {
    #[derive(Serialize)]
    struct Person {
        name: &'static str,
        age: u8,
    }

    let value = LoggableValue::from_serialize(&Person {
        name: "John",
        age: 31,
    })
    .expect("convert");
    assert_eq!(
        dump_and_read(value),
        "(object) array(\n   'name' => 'John',\n   'age' => 31,\n)\r\n"
    );
}

#[test]
fn json_value_writes_like_a_record() {
    let value = serde_json::json!({"name": "John", "age": 31});
    assert_eq!(
        dump_and_read(value),
        "(object) array(\n   'name' => 'John',\n   'age' => 31,\n)\r\n"
    );
}

#[test]
fn overwrite_keeps_only_last_value() {
    let (_dir, path) = scratch_file("test.log").expect("scratch");

    dump_log(&path, "first", WriteMode::Overwrite).expect("first");
    dump_log(&path, "second", WriteMode::Overwrite).expect("second");

    assert_eq!(read_dump(&path).expect("read"), "second\r\n");
}

#[test]
fn append_accumulates_in_order() {
    let (_dir, path) = scratch_file("test.txt").expect("scratch");

    dump_log(&path, "first", WriteMode::Overwrite).expect("first");
    dump_log(&path, vec!["a", "b"], WriteMode::Append).expect("second");

    assert_eq!(read_dump(&path).expect("read"), "first\r\na\r\nb\r\n");
}

#[test]
fn append_creates_missing_file() {
    let (_dir, path) = scratch_file("fresh.log").expect("scratch");

    dump_log(&path, 7, WriteMode::Append).expect("append");

    assert_eq!(read_dump(&path).expect("read"), "7\r\n");
}

#[test]
fn invalid_extensions_never_touch_the_filesystem() {
    for name in ["test.invalid", "noext", "test.TXT", "test.log.bak"] {
        let (_dir, path) = scratch_file(name).expect("scratch");
        let sink = MemorySink::default();
        let dumper = Dumper::with_sink(&sink);

        let err = dumper.dump(&path, "test").expect_err(name);

        assert!(matches!(err, DumpError::InvalidExtension { .. }), "{name}");
        assert!(!path.exists(), "{name} was created");
        assert_eq!(sink.messages(), vec!["File extension should be txt or log."]);
    }
}

#[test]
fn unopenable_path_reports_open_failure() {
    let (dir, _) = scratch_file("unused.log").expect("scratch");
    let path = dir.path().join("no-such-dir").join("test.log");
    let sink = MemorySink::default();
    let dumper = Dumper::with_sink(&sink);

    let err = dumper.dump(&path, "test").expect_err("missing parent");

    assert!(matches!(err, DumpError::OpenFailed { .. }));
    assert!(!path.exists());
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].path, path);
    assert!(diagnostics[0].message.starts_with("Failed to open the file: "));
}

#[test]
fn directory_target_reports_open_failure() {
    let (dir, _) = scratch_file("unused.log").expect("scratch");
    let path = dir.path().join("folder.log");
    fs::create_dir(&path).expect("mkdir");
    let sink = MemorySink::default();

    let err = Dumper::with_sink(&sink)
        .dump(&path, "test")
        .expect_err("directory");

    assert!(matches!(err, DumpError::OpenFailed { .. }));
    assert!(path.is_dir());
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn large_unsigned_and_f32_are_written_exactly() {
    let value = LoggableValue::from_serialize(&u64::MAX).expect("convert");
    assert_eq!(dump_and_read(value), "18446744073709551615\r\n");
    assert_eq!(dump_and_read(u64::MAX), "18446744073709551615\r\n");
    assert_eq!(dump_and_read(0.1f32), "0.1\r\n");
    assert_eq!(dump_and_read(vec![1usize, 2]), "1\r\n2\r\n");
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_reports_write_failure() {
    let (dir, _) = scratch_file("unused.log").expect("scratch");
    let path = dir.path().join("full.log");
    std::os::unix::fs::symlink("/dev/full", &path).expect("symlink");
    let sink = MemorySink::default();

    let err = Dumper::with_sink(&sink)
        .dump(&path, "test")
        .expect_err("device is full");

    assert!(matches!(err, DumpError::WriteFailed { .. }));
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.starts_with("Failed to write the file: "));
    assert!(diagnostics[0].cause.is_some());
}
