//! Integration tests for the public API

use std::io::{Cursor, Write};
use strcalc_api::{
    sum_file, sum_text, ApiError, Config, DelimiterSet, FixedDelimiterSource, Input,
    StringCalculator,
};
use tempfile::NamedTempFile;

#[test]
fn test_sum_text_examples() {
    assert_eq!(sum_text("").unwrap(), 0);
    assert_eq!(sum_text("1,2").unwrap(), 3);
    assert_eq!(sum_text("1,2,3\n4").unwrap(), 10);
    assert_eq!(sum_text("//!\n1!2!3").unwrap(), 6);
    assert_eq!(sum_text("//[***]\n1***2***3").unwrap(), 6);
    assert_eq!(sum_text("//[*][%]\n1*2%3").unwrap(), 6);
    assert_eq!(sum_text("1;2;1001").unwrap(), 3);
}

#[test]
fn test_absent_input() {
    let calculator = StringCalculator::new();
    let absent: Option<&str> = None;
    assert_eq!(calculator.sum(absent).unwrap(), 0);
}

#[test]
fn test_errors_surface_through_api() {
    let err = sum_text("1;-2;3;-9").unwrap_err();
    assert_eq!(err.to_string(), "Negatives not allowed: -2, -9");
    assert_eq!(err.negatives(), Some(&[-2, -9][..]));

    let err = sum_text("//!\n1!,2!3").unwrap_err();
    assert!(err.is_format());
    assert!(matches!(err, ApiError::Calculation(_)));
}

#[test]
fn test_custom_config() {
    let config = Config::builder()
        .default_delimiters(["|"])
        .max_value(10)
        .build()
        .unwrap();
    let calculator = StringCalculator::with_config(config).unwrap();

    assert_eq!(calculator.sum("1|2|11").unwrap(), 3);
    assert!(calculator.sum("1,2").is_err());
    assert_eq!(calculator.config().range().max, 10);
}

#[test]
fn test_total_beyond_i64_is_exact() {
    let config = Config::builder().max_value(i64::MAX).build().unwrap();
    let calculator = StringCalculator::with_config(config).unwrap();

    let input = format!("{max}\n{max}", max = i64::MAX);
    assert_eq!(calculator.sum(input.as_str()).unwrap(), 2 * i128::from(i64::MAX));
    let report = calculator.evaluate_text(&input).unwrap();
    assert!(report.ignored.is_empty());
}

#[test]
fn test_with_stub_source() {
    let source = FixedDelimiterSource::new(DelimiterSet::with_defaults([
        "\n", ",", ";", "***",
    ]));
    let calculator = StringCalculator::with_source(Config::default(), source).unwrap();
    assert_eq!(calculator.sum("//[***]\n1***2***3").unwrap(), 6);
}

#[test]
fn test_evaluate_report() {
    let calculator = StringCalculator::new();
    let report = calculator.evaluate_text("//[*][%]\n1*2%3000").unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.values, vec![1, 2, 3000]);
    assert_eq!(report.ignored, vec![3000]);
    assert_eq!(report.declaration.as_deref(), Some("[*][%]"));
    assert_eq!(report.delimiters, vec!["\n", ",", ";", "*", "%"]);
    assert_eq!(report.metadata.value_count, 3);
    assert_eq!(report.metadata.total_bytes, "//[*][%]\n1*2%3000".len());
}

#[test]
fn test_evaluate_reader_and_bytes() {
    let calculator = StringCalculator::new();

    let report = calculator
        .evaluate(Input::from_reader(Cursor::new(b"4,5\n6".to_vec())))
        .unwrap();
    assert_eq!(report.total, 15);

    let report = calculator
        .evaluate(Input::from_bytes(b"1;1".to_vec()))
        .unwrap();
    assert_eq!(report.total, 2);
}

#[test]
fn test_invalid_utf8_bytes() {
    let err = StringCalculator::new()
        .evaluate(Input::from_bytes(vec![0xff, 0xfe]))
        .unwrap_err();
    assert!(matches!(err, ApiError::Utf8(_)));
}

#[test]
fn test_sum_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "//;\n10;20;30").unwrap();
    assert_eq!(sum_file(file.path()).unwrap(), 60);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = sum_file(dir.path().join("numbers.txt")).unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[range]\nmax = 5\n").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let calculator = StringCalculator::with_config(config).unwrap();
    assert_eq!(calculator.sum("1,5,6").unwrap(), 6);
}

#[cfg(feature = "serde")]
#[test]
fn test_report_json() {
    let report = StringCalculator::new().evaluate_text("1,2").unwrap();
    let json = report.to_json(false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["total"], 3);
    assert_eq!(value["values"], serde_json::json!([1, 2]));
    assert_eq!(value["declaration"], serde_json::Value::Null);
}
