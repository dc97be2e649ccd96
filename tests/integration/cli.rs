//! End-to-end tests of the compiled binary.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::{hex, run_binary, BINARY, PIPELINE_VECTORS};

#[test]
fn test_default_invocation_encodes_stdin() {
    for &(input, expected) in PIPELINE_VECTORS {
        let output = run_binary(&[], input.as_bytes());
        assert!(output.status.success(), "input {:?}", input);
        assert_eq!(output.stdout, hex(expected), "input {:?}", input);
    }
}

#[test]
fn test_stdout_carries_only_der_even_when_verbose() {
    let output = run_binary(&["-vvv"], b"[1, 2, 3]");
    assert!(output.status.success());
    assert_eq!(output.stdout, hex("30 09 02 01 01 02 01 02 02 01 03"));
}

#[test]
fn test_encode_subcommand_parallel() {
    let output = run_binary(&["encode", "--parallel"], b"[128, -128]");
    assert!(output.status.success());
    assert_eq!(output.stdout, hex("30 07 02 02 00 80 02 01 80"));
}

#[test]
fn test_decode_roundtrip_via_stdin() {
    let der = run_binary(&[], b"[-1, 0, 70000]").stdout;
    let output = run_binary(&["decode"], &der);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[-1,0,70000]");
}

#[test]
fn test_inspect_file_shows_children() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&hex("30 07 02 02 00 80 02 01 80")).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = run_binary(&["inspect", &path], b"");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SEQUENCE OF INTEGER"), "{stdout}");
    assert!(stdout.contains("[INT]"), "{stdout}");
    assert!(stdout.contains("02 02 00 80"), "{stdout}");
    assert!(stdout.trim_end().ends_with("[128,-128]"), "{stdout}");
}

#[test]
fn test_decode_rejects_non_minimal_length_unless_lenient() {
    let der = hex("30 81 03 02 01 07");

    let strict = run_binary(&["decode"], &der);
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("non-minimal length"), "{stderr}");

    let lenient = run_binary(&["decode", "--lenient"], &der);
    assert!(lenient.status.success());
    assert_eq!(String::from_utf8_lossy(&lenient.stdout).trim(), "[7]");
}

#[test]
fn test_inspect_missing_file_fails() {
    let output = run_binary(&["inspect", "/nonexistent/ints2der/input.der"], b"");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_closed_stdout_is_an_error_not_a_panic() {
    let der = hex("30 07 02 02 00 80 02 01 80");
    for subcommand in ["decode", "inspect"] {
        let mut child = Command::new(BINARY)
            .arg(subcommand)
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        // Reader goes away before the binary has anything to write
        drop(child.stdout.take());
        {
            let mut stdin = child.stdin.take().unwrap();
            stdin.write_all(&der).unwrap();
        }

        let output = child.wait_with_output().unwrap();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(1), "{subcommand}: {stderr}");
        assert!(!stderr.contains("panicked"), "{subcommand}: {stderr}");
        assert!(stderr.contains("Failed to write to stdout"), "{subcommand}: {stderr}");
    }
}
