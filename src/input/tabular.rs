//! Uploaded file source: headerless CSV, one row of 178 columns

use csv::{ReaderBuilder, StringRecord, Trim};

use super::sample::parse_value;
use super::{EegSample, InputError};
use crate::constants::EEG_SAMPLE_COUNT;

/// Observed `(rows, columns)` of a parsed table. Columns is the widest row.
pub fn shape_of(rows: &[StringRecord]) -> (usize, usize) {
    let columns = rows.iter().map(StringRecord::len).max().unwrap_or(0);
    (rows.len(), columns)
}

/// Parse an uploaded CSV into an epoch.
///
/// Shape is checked before any cell is parsed. Files with more than one row
/// are rejected rather than silently scoring the first one.
pub fn parse_csv(bytes: &[u8]) -> Result<EegSample, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let rows = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()
        .map_err(|e| InputError::Malformed(e.to_string()))?;

    let (row_count, columns) = shape_of(&rows);
    if row_count != 1 || columns != EEG_SAMPLE_COUNT {
        return Err(InputError::InvalidShape {
            rows: row_count,
            columns,
        });
    }

    let values = rows[0]
        .iter()
        .map(parse_value)
        .collect::<Result<Vec<f32>, InputError>>()?;

    EegSample::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_row(count: usize, value: &str) -> String {
        vec![value; count].join(",")
    }

    #[test]
    fn test_single_row() {
        let body = format!("{}\n", csv_row(EEG_SAMPLE_COUNT, "1.25"));
        let sample = parse_csv(body.as_bytes()).unwrap();
        assert_eq!(sample.as_slice().len(), EEG_SAMPLE_COUNT);
        assert!(sample.as_slice().iter().all(|&v| v == 1.25));
    }

    #[test]
    fn test_wrong_column_count() {
        let body = csv_row(10, "0");
        assert_eq!(
            parse_csv(body.as_bytes()),
            Err(InputError::InvalidShape { rows: 1, columns: 10 })
        );
    }

    #[test]
    fn test_multi_row_rejected() {
        let row = csv_row(EEG_SAMPLE_COUNT, "0.5");
        let body = format!("{row}\n{row}\n");
        assert_eq!(
            parse_csv(body.as_bytes()),
            Err(InputError::InvalidShape { rows: 2, columns: EEG_SAMPLE_COUNT })
        );
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(
            parse_csv(b""),
            Err(InputError::InvalidShape { rows: 0, columns: 0 })
        );
    }

    #[test]
    fn test_bad_cell() {
        let mut cells = vec!["0.1"; EEG_SAMPLE_COUNT];
        cells[42] = "spike";
        let body = cells.join(",");
        assert_eq!(
            parse_csv(body.as_bytes()),
            Err(InputError::Parse { token: "spike".to_string() })
        );
    }

    #[test]
    fn test_cells_are_trimmed() {
        let body = vec![" 2.0 "; EEG_SAMPLE_COUNT].join(",");
        let sample = parse_csv(body.as_bytes()).unwrap();
        assert_eq!(sample.as_slice()[0], 2.0);
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut body = csv_row(EEG_SAMPLE_COUNT, "1").into_bytes();
        body[0] = 0xFF;
        assert!(matches!(parse_csv(&body), Err(InputError::Malformed(_))));
    }
}
