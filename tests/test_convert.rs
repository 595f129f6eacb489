//! Tests for the FASTRAK converter through the public library API

use fastrak_hpts::converter::{ConversionOptions, Converter, FastrakConverter};
use fastrak_hpts::domain::{label_points, PointCategory, UnitScale};
use fastrak_hpts::error::ConvertError;
use fastrak_hpts::format::read_pos_file;
use std::fs;
use tempfile::TempDir;

/// Brainstorm export: three fiducials, four electrodes, three shape points
const BRAINSTORM_POS: &str = "10\n\
    NA\t0.25\t9.5\t-1.0\n\
    LPA\t-7.25\t0.5\t-2.0\n\
    RPA\t7.25\t0.5\t-2.0\n\
    1\tFCz\t0.0\t3.5\t9.0\n\
    2\tFp1\t-2.5\t8.75\t1.5\n\
    3\t\t0.5\t0.5\t10.0\n\
    4\tFp2\t2.5\t8.75\t1.5\n\
    5\t\t-0.5\t-0.5\t10.0\n\
    6\t\t1.0\t-4.0\t9.5\n\
    7\tOz\t0.0\t-10.0\t2.0\n";

fn write_pos(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_brainstorm_file_labels() {
    let tmp = TempDir::new().unwrap();
    let pos = write_pos(&tmp, "sub01.pos", BRAINSTORM_POS);

    let records = read_pos_file(&pos).unwrap();
    assert_eq!(records.len(), 10);

    let points = label_points(&records, UnitScale::CM_TO_MM);
    let eeg: Vec<u32> = points
        .iter()
        .filter(|p| p.category == PointCategory::Eeg)
        .map(|p| p.identifier)
        .collect();
    let extra: Vec<u32> = points
        .iter()
        .filter(|p| p.category == PointCategory::Extra)
        .map(|p| p.identifier)
        .collect();

    // First digitised electrode is the reference
    assert_eq!(eeg, vec![0, 1, 2, 3]);
    assert_eq!(extra, vec![1, 2, 3]);
}

#[test]
fn test_full_conversion_output() {
    let tmp = TempDir::new().unwrap();
    let pos = write_pos(&tmp, "sub01.pos", BRAINSTORM_POS);
    let hpts = tmp.path().join("sub01.hpts");

    let converter = FastrakConverter::with_options(ConversionOptions {
        timestamp: false,
        ..Default::default()
    });
    let summary = converter.convert(&pos, &hpts, false).unwrap();

    assert_eq!(summary.counts.cardinal, 3);
    assert_eq!(summary.counts.eeg, 4);
    assert_eq!(summary.counts.extra, 3);

    let text = fs::read_to_string(&hpts).unwrap();
    let expected = format!(
        "# Converted from {} to {}\n\
         cardinal 2 2.5 95.0 -10.0\n\
         cardinal 1 -72.5 5.0 -20.0\n\
         cardinal 3 72.5 5.0 -20.0\n\
         eeg 0 0.0 35.0 90.0\n\
         eeg 1 -25.0 87.5 15.0\n\
         extra 1 5.0 5.0 100.0\n\
         eeg 2 25.0 87.5 15.0\n\
         extra 2 -5.0 -5.0 100.0\n\
         extra 3 10.0 -40.0 95.0\n\
         eeg 3 0.0 -100.0 20.0\n",
        pos.display(),
        hpts.display()
    );
    assert_eq!(text, expected);
}

#[test]
fn test_second_run_refuses_to_clobber() {
    let tmp = TempDir::new().unwrap();
    let pos = write_pos(&tmp, "sub01.pos", BRAINSTORM_POS);
    let hpts = tmp.path().join("sub01.hpts");
    let converter = FastrakConverter::new();

    converter.convert(&pos, &hpts, false).unwrap();
    let first = fs::read_to_string(&hpts).unwrap();

    let err = converter.convert(&pos, &hpts, false).unwrap_err();
    assert!(matches!(err, ConvertError::OutputExists(ref p) if p == &hpts));
    assert_eq!(fs::read_to_string(&hpts).unwrap(), first);
}

#[test]
fn test_missing_output_directory() {
    let tmp = TempDir::new().unwrap();
    let pos = write_pos(&tmp, "sub01.pos", BRAINSTORM_POS);
    let hpts = tmp.path().join("no_such_dir").join("sub01.hpts");

    let err = FastrakConverter::new()
        .convert(&pos, &hpts, false)
        .unwrap_err();
    assert!(matches!(err, ConvertError::WriteOutput { .. }));
}
