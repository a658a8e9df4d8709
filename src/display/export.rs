//! CSV export of the annual breakdown

use super::BreakdownRow;
use std::error::Error;
use std::io::Write;

/// Write breakdown rows with a header line
pub fn write_breakdown_csv<W: Write>(writer: W, rows: &[BreakdownRow]) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let rows = vec![
            BreakdownRow { year: 1, contributions: 6000.0, returns: 955.5, end_value: 16955.5 },
            BreakdownRow { year: 2, contributions: 6000.0, returns: -12.25, end_value: 22943.25 },
        ];
        let mut buffer = Vec::new();

        write_breakdown_csv(&mut buffer, &rows).expect("Failed to write");

        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,contributions,returns,endValue");
        assert_eq!(lines[1], "1,6000.0,955.5,16955.5");
        assert_eq!(lines[2], "2,6000.0,-12.25,22943.25");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_rows_write_nothing() {
        let mut buffer = Vec::new();
        write_breakdown_csv(&mut buffer, &[]).expect("Failed to write");
        assert!(buffer.is_empty());
    }
}
