//! Polhemus FASTRAK `.pos` reader
//!
//! Reads the tab-separated position files written by Brainstorm. The first
//! line is a header and is never interpreted.

use crate::domain::{Fiducial, PosRecord, Position};
use crate::error::ParseError;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Field count of a cardinal (fiducial) line
const FIDUCIAL_FIELDS: usize = 4;
/// Field count of an electrode or head-shape line
const POINT_FIELDS: usize = 5;

/// Parse `.pos` records from any buffered reader
pub fn parse_pos<R: BufRead>(reader: R) -> Result<Vec<PosRecord>, ParseError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            log::debug!("Skipping blank line {}", line_no);
            continue;
        }

        records.push(parse_line(trimmed, line_no)?);
    }

    Ok(records)
}

/// Open and parse a `.pos` file
pub fn read_pos_file<P: AsRef<Path>>(path: P) -> Result<Vec<PosRecord>, ParseError> {
    let file = File::open(path.as_ref())?;
    parse_pos(BufReader::new(file))
}

fn parse_line(line: &str, line_no: usize) -> Result<PosRecord, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();

    match fields.len() {
        FIDUCIAL_FIELDS => {
            let fiducial = fields[0]
                .parse::<Fiducial>()
                .map_err(|label| ParseError::UnknownFiducial {
                    line: line_no,
                    label,
                })?;
            let position = parse_position(&fields[1..], 2, line_no)?;
            Ok(PosRecord::Fiducial { fiducial, position })
        }
        POINT_FIELDS => {
            let id = fields[0].to_string();
            let name = fields[1];
            let position = parse_position(&fields[2..], 3, line_no)?;

            if name.is_empty() {
                Ok(PosRecord::Shape { id, position })
            } else {
                Ok(PosRecord::Electrode {
                    id,
                    name: name.to_string(),
                    position,
                })
            }
        }
        count => Err(ParseError::UnexpectedFieldCount {
            line: line_no,
            count,
        }),
    }
}

/// Parse three coordinate fields; `first_column` is the 1-based column of `x`
fn parse_position(
    fields: &[&str],
    first_column: usize,
    line_no: usize,
) -> Result<Position, ParseError> {
    let mut axes = [0.0; 3];

    for (offset, (axis, raw)) in axes.iter_mut().zip(fields).enumerate() {
        *axis = parse_coordinate(raw).ok_or_else(|| ParseError::InvalidCoordinate {
            line: line_no,
            column: first_column + offset,
            value: raw.to_string(),
        })?;
    }

    Ok(Position::new(axes[0], axes[1], axes[2]))
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<PosRecord>, ParseError> {
        parse_pos(Cursor::new(text))
    }

    #[test]
    fn test_header_line_ignored() {
        // A header that would itself parse as a fiducial must still be skipped
        let records = parse("NA\t1\t2\t3\nLPA\t-7.1\t0\t0\n").unwrap();
        assert_eq!(records.len(), 1);
        assert!(matches!(
            records[0],
            PosRecord::Fiducial {
                fiducial: Fiducial::Lpa,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_fiducials() {
        let records = parse("3\nNA\t0\t10.2\t0\nLPA\t-7\t0\t0\nRPA\t7\t0\t0\n").unwrap();
        let fiducials: Vec<_> = records
            .iter()
            .map(|r| match r {
                PosRecord::Fiducial { fiducial, .. } => *fiducial,
                other => panic!("Expected fiducial, got {other:?}"),
            })
            .collect();
        assert_eq!(fiducials, vec![Fiducial::Nasion, Fiducial::Lpa, Fiducial::Rpa]);
        assert_eq!(records[0].position(), Position::new(0.0, 10.2, 0.0));
    }

    #[test]
    fn test_parse_electrode_and_shape() {
        let records = parse("header\n1\tCz\t0\t0\t9.5\n2\t\t1.25\t-3\t4\n").unwrap();

        assert_eq!(
            records[0],
            PosRecord::Electrode {
                id: "1".to_string(),
                name: "Cz".to_string(),
                position: Position::new(0.0, 0.0, 9.5),
            }
        );
        assert_eq!(
            records[1],
            PosRecord::Shape {
                id: "2".to_string(),
                position: Position::new(1.25, -3.0, 4.0),
            }
        );
    }

    #[test]
    fn test_only_empty_name_is_shape() {
        let records = parse("header\n1\t \t1\t2\t3\n2\t\t1\t2\t3\n").unwrap();
        assert!(matches!(
            records[0],
            PosRecord::Electrode { ref name, .. } if name == " "
        ));
        assert!(matches!(records[1], PosRecord::Shape { .. }));
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let records = parse("header\r\n\r\nNA\t0\t1\t0\r\n\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_and_header_only() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("header only\n").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_fiducial() {
        let err = parse("header\nINION\t0\t0\t0\n").unwrap_err();
        match err {
            ParseError::UnknownFiducial { line, label } => {
                assert_eq!(line, 2);
                assert_eq!(label, "INION");
            }
            other => panic!("Expected UnknownFiducial, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_field_count() {
        let err = parse("header\nNA\t0\t0\t0\n1\t2\t3\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedFieldCount { line: 3, count: 3 }
        ));
    }

    #[test]
    fn test_invalid_coordinate_column() {
        let err = parse("header\n1\tCz\t0\tabc\t0\n").unwrap_err();
        match err {
            ParseError::InvalidCoordinate {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 4);
                assert_eq!(value, "abc");
            }
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        assert!(parse("header\nNA\tinf\t0\t0\n").is_err());
        assert!(parse("header\nNA\t0\tNaN\t0\n").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_pos_file("/nonexistent/session.pos");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
