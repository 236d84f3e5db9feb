// File: crates/spectrum-core/tests/parse.rs
// Purpose: Parser acceptance rules and line-order preservation.

use spectrum_core::parser::parse_line;
use spectrum_core::{parse_peaks, Peak, SpectrumError};

#[test]
fn well_formed_lines_keep_order() {
    let s = parse_peaks("100\t5\n101\t0\n103\t9").expect("valid input");
    assert_eq!(s.masses, vec![100.0, 101.0, 103.0]);
    assert_eq!(s.intensities, vec![5.0, 0.0, 9.0]);
}

#[test]
fn malformed_line_is_dropped_without_touching_neighbours() {
    let s = parse_peaks("100\t5\nbadline\n103\t9").expect("two valid lines");
    assert_eq!(s.masses, vec![100.0, 103.0]);
    assert_eq!(s.intensities, vec![5.0, 9.0]);
}

#[test]
fn mixed_garbage_is_skipped() {
    let input = "mass\tintensity\n  98.5 \t 1e3 \n99\t\n1\t2\t3\n-4\t+7\r\n\n";
    let s = parse_peaks(input).expect("two valid lines");
    assert_eq!(s.masses, vec![98.5, -4.0]);
    assert_eq!(s.intensities, vec![1000.0, 7.0]);
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_peaks(""), Err(SpectrumError::UserInputEmpty)));
    assert!(matches!(parse_peaks("  \n\t\n"), Err(SpectrumError::UserInputEmpty)));
    assert!(matches!(parse_peaks("badline\n1 2"), Err(SpectrumError::UserInputEmpty)));
}

#[test]
fn empty_input_message_asks_for_valid_data() {
    let err = parse_peaks("").unwrap_err();
    assert!(err.is_user_alert());
    assert_eq!(err.to_string(), "Por favor, insira dados válidos.");
}

#[test]
fn fields_keep_their_leading_number() {
    assert_eq!(parse_line("100,5\t3"), Some(Peak { mass: 100.0, intensity: 3.0 }));
    assert_eq!(parse_line("5\t7 counts"), Some(Peak { mass: 5.0, intensity: 7.0 }));

    let s = parse_peaks("100,5\t3\n101 Da\t4.5%\nx100\t1").expect("two lines with leading numbers");
    assert_eq!(s.masses, vec![100.0, 101.0]);
    assert_eq!(s.intensities, vec![3.0, 4.5]);
}

#[test]
fn infinite_fields_are_not_peaks() {
    assert_eq!(parse_line("Infinity\t1"), None);
    assert_eq!(parse_line("1\t-Infinity"), None);
    assert_eq!(parse_line("1e400\t1"), None);
}
