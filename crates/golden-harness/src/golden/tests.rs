//! Unit tests for golden comparison.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::error::{DecodeError, HarnessError};
use crate::golden::compare::*;
use crate::golden::file::GoldenFile;
use crate::golden::report::*;

const HELLO_WORLD_BLAKE3: &str = "d74981efa70a0c880b8d8c1985d075dbcbf679b99a5f9914e5aaf96b831a9e24";
const EMPTY_BLAKE3: &str = "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262";

#[test]
fn test_compare_hex_match() {
    let outcome = compare_hex("00ff0a", &[0x00, 0xff, 0x0a]).unwrap();
    assert!(outcome.is_match());
    assert!(outcome.diff().is_none());
}

#[test]
fn test_compare_hex_accepts_uppercase_literal() {
    assert!(compare_hex("00FF0A", &[0x00, 0xff, 0x0a]).unwrap().is_match());
}

#[test]
fn test_compare_hex_empty() {
    assert!(compare_hex("", &[]).unwrap().is_match());
}

#[test]
fn test_compare_hex_mismatch_reports_first_difference() {
    let outcome = compare_hex("0102030405", &[0x01, 0x02, 0xff, 0x04, 0x05]).unwrap();
    let diff = outcome.diff().expect("expected a mismatch");
    assert_eq!(diff.offset, 2);
    assert_eq!(diff.expected, Some(0x03));
    assert_eq!(diff.actual, Some(0xff));
    assert_eq!(diff.expected_context.before, vec![0x01, 0x02]);
    assert_eq!(diff.expected_context.after, vec![0x04, 0x05]);
    assert_eq!(diff.actual_context.after, vec![0x04, 0x05]);
}

#[test]
fn test_compare_hex_actual_too_short() {
    let outcome = compare_hex("01020304", &[0x01, 0x02]).unwrap();
    let diff = outcome.diff().expect("expected a mismatch");
    assert_eq!(diff.offset, 2);
    assert_eq!(diff.expected, Some(0x03));
    assert_eq!(diff.actual, None);
    assert_eq!(diff.expected_len, 4);
    assert_eq!(diff.actual_len, 2);
    assert!(diff.actual_context.after.is_empty());
}

#[test]
fn test_compare_hex_actual_too_long() {
    let outcome = compare_hex("0102", &[0x01, 0x02, 0x03]).unwrap();
    let diff = outcome.diff().expect("expected a mismatch");
    assert_eq!(diff.offset, 2);
    assert_eq!(diff.expected, None);
    assert_eq!(diff.actual, Some(0x03));
}

#[test]
fn test_malformed_literal_is_not_a_mismatch() {
    match compare_hex("0", &[0x00]) {
        Err(HarnessError::Decode(DecodeError::OddLength { len: 1 })) => {}
        other => panic!("expected OddLength, got {:?}", other),
    }
    match compare_hex("zz", &[0x00]) {
        Err(HarnessError::Decode(DecodeError::InvalidCharacter { ch: 'z', index: 0 })) => {}
        other => panic!("expected InvalidCharacter, got {:?}", other),
    }
}

#[test]
fn test_diff_context_is_bounded() {
    let data: Vec<u8> = (0..32).collect();
    let context = extract_context(&data, 16);
    assert_eq!(context.before, (8..16).collect::<Vec<u8>>());
    assert_eq!(context.after, (17..25).collect::<Vec<u8>>());
}

#[test]
fn test_diff_context_at_start() {
    let data = vec![0, 1, 2, 3, 4, 5];
    let context = extract_context(&data, 0);

    assert!(context.before.is_empty());
    assert_eq!(context.after, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_diff_context_past_end() {
    let data = vec![0, 1, 2];
    let context = extract_context(&data, 3);

    assert_eq!(context.before, vec![0, 1, 2]);
    assert!(context.after.is_empty());
}

#[test]
fn test_diff_display() {
    let diff = diff_bytes(&[0x01, 0xab, 0x03], &[0x01, 0xcd, 0x03]).unwrap();
    let display = diff.to_string();
    assert!(display.contains("byte 1"));
    assert!(display.contains("0xab"));
    assert!(display.contains("0xcd"));
    assert!(display.contains("Golden: 01 [ab] 03"));
    assert!(display.contains("Actual: 01 [cd] 03"));
}

#[test]
fn test_diff_display_at_end() {
    let diff = diff_bytes(&[0x01], &[]).unwrap();
    let display = diff.to_string();
    assert!(display.contains("got <end>"));
    assert!(display.contains("Actual: [..]"));
}

#[test]
fn test_identical_buffers_have_no_diff() {
    assert!(diff_bytes(b"same", b"same").is_none());
    assert!(diff_bytes(&[], &[]).is_none());
}

#[test]
fn test_compute_hash() {
    let hash = compute_hash(b"hello world");
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, HELLO_WORLD_BLAKE3);
    assert_eq!(compute_hash(&[]), EMPTY_BLAKE3);
}

#[test]
fn test_compare_hash() {
    assert!(compare_hash(HELLO_WORLD_BLAKE3, b"hello world").unwrap().is_match());
    assert!(!compare_hash(HELLO_WORLD_BLAKE3, b"hello world!").unwrap().is_match());
}

#[test]
fn test_compare_hash_wrong_length() {
    match compare_hash("abcd", b"hello world") {
        Err(HarnessError::HashLength {
            expected: 32,
            actual: 2,
        }) => {}
        other => panic!("expected HashLength, got {:?}", other),
    }
}

#[test]
fn test_assert_golden_hex_passes() {
    assert_golden_hex("01020304", [1u8, 2, 3, 4]);
    assert_golden_hex("", Vec::<u8>::new());
}

#[test]
#[should_panic(expected = "Golden mismatch")]
fn test_assert_golden_hex_mismatch_panics() {
    assert_golden_hex("01020304", [1u8, 2, 3, 5]);
}

#[test]
#[should_panic(expected = "Golden literal is malformed")]
fn test_assert_golden_hex_malformed_panics() {
    assert_golden_hex("0102030", [1u8, 2, 3, 4]);
}

#[test]
fn test_assert_golden_hash_passes() {
    assert_golden_hash(EMPTY_BLAKE3, b"");
}

#[test]
#[should_panic(expected = "Golden hash mismatch")]
fn test_assert_golden_hash_mismatch_panics() {
    assert_golden_hash(EMPTY_BLAKE3, b"not empty");
}

#[test]
fn test_golden_file_roundtrip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let golden = GoldenFile::at(dir.path().join("golden").join("block.hex"));

    golden.write(&[0xde, 0xad]).expect("Failed to write golden file");
    let stored = fs::read_to_string(golden.path()).unwrap();
    assert_eq!(stored, "dead\n");
    assert_eq!(golden.read().unwrap(), "dead");

    assert!(golden.check_with_mode(&[0xde, 0xad], false).unwrap().is_match());
    assert!(!golden.check_with_mode(&[0xbe, 0xef], false).unwrap().is_match());
}

#[test]
fn test_golden_file_update_mode_rewrites() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let golden = GoldenFile::at(dir.path().join("value.hex"));
    fs::write(golden.path(), "0000\n").unwrap();

    assert!(golden.check_with_mode(&[0x12, 0x34], true).unwrap().is_match());
    assert_eq!(golden.read().unwrap(), "1234");
    assert!(golden.check_with_mode(&[0x12, 0x34], false).unwrap().is_match());
}

#[test]
fn test_golden_file_missing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let golden = GoldenFile::at(dir.path().join("missing.hex"));
    let err = golden.check_with_mode(&[0x00], false).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_golden_file_malformed() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let golden = GoldenFile::at(dir.path().join("broken.hex"));
    fs::write(golden.path(), "not hex\n").unwrap();
    let err = golden.check_with_mode(&[0x00], false).unwrap_err();
    assert!(matches!(err, HarnessError::Decode(_)), "unexpected error: {}", err);
}

#[test]
fn test_report_counting() {
    let mut report = GoldenReport::new();
    report.check_hex("match", "0102", &[0x01, 0x02]);
    report.check_hex("mismatch", "0102", &[0x01, 0x03]);
    report.check_hex("malformed", "012", &[0x01]);
    report.check_hash("hash", EMPTY_BLAKE3, &[]);

    assert_eq!(report.passed_count(), 2);
    assert_eq!(report.failed_count(), 2);
    assert_eq!(report.total_count(), 4);
    assert!(!report.all_passed());

    let statuses: Vec<CheckStatus> = report.failures().iter().map(|e| e.status).collect();
    assert_eq!(statuses, vec![CheckStatus::Mismatch, CheckStatus::Error]);
}

#[test]
fn test_report_display() {
    let mut report = GoldenReport::new();
    report.check_hex("bc1", "00", &[0x00]);
    report.check_hex("bc4", "00", &[0x01]);

    let display = report.to_string();
    assert!(display.contains("Golden Report: 1/2 passed"));
    assert!(display.contains("[PASS] bc1"));
    assert!(display.contains("[FAIL] bc4"));
    assert!(display.contains("Difference at byte 0"));
}

#[test]
fn test_report_json() {
    let mut report = GoldenReport::new();
    report.check_hex("ok", "ff", &[0xff]);
    report.check_hex("broken", "f", &[0xff]);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "ok");
    assert_eq!(entries[0]["status"], "pass");
    assert!(entries[0].get("detail").is_none());
    assert_eq!(entries[1]["status"], "error");
    assert_eq!(entries[1]["detail"], "malformed hex: hex string has odd length 1");
}

#[test]
#[should_panic(expected = "Golden verification failed")]
fn test_report_assert_all_passed_panics() {
    let mut report = GoldenReport::new();
    report.check_hex("bad", "00", &[0x01]);
    report.assert_all_passed();
}

#[test]
fn test_empty_report_passes() {
    let report = GoldenReport::new();
    assert!(report.all_passed());
    report.assert_all_passed();
}

crate::golden_test!(macro_hex_golden, hex = "cafe", vec![0xcau8, 0xfe]);

crate::golden_test!(macro_hash_golden, blake3 = HELLO_WORLD_BLAKE3, b"hello world".to_vec());
