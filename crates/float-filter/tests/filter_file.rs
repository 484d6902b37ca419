use std::fs;

use float_filter::{filter_file, FilterError, FilterReport};
use tempfile::TempDir;

#[test]
fn should_filter_a_data_file() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let input = dir.path().join("data.txt");
    let output = dir.path().join("dataOut.txt");
    fs::write(&input, "10 20.5 x\ny 1e-1\n\n-7 nope 0\n").expect("Cannot write input");

    let report = filter_file(&input, &output).expect("Filtering failed");

    assert_eq!(report, FilterReport { valid: 5, invalid: 3 });
    assert_eq!(
        fs::read_to_string(&output).expect("Output was not written"),
        "10.000000\n20.500000\n0.100000\n-7.000000\n0.000000\n"
    );
}

#[test]
fn should_fail_with_minus_one_for_a_missing_input() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let output = dir.path().join("dataOut.txt");

    let err = filter_file(dir.path().join("missing.txt"), &output).unwrap_err();

    assert!(matches!(err, FilterError::OpenInput { .. }));
    assert_eq!(err.exit_code(), -1);
    assert!(!output.exists(), "no output expected without input");
}

#[test]
fn should_fail_with_minus_two_for_an_uncreatable_output() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let input = dir.path().join("data.txt");
    fs::write(&input, "1 2 3\n").expect("Cannot write input");

    let err = filter_file(&input, dir.path().join("no/such/folder/out.txt")).unwrap_err();

    assert!(matches!(err, FilterError::CreateOutput { .. }));
    assert_eq!(err.exit_code(), -2);
}
