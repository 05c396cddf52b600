use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::extractor::BusinessRecord;

pub const SHEET_NAME: &str = "Houzz Businesses";

/// One spreadsheet column: header, display width, and the record field it is
/// sourced from. The leading 1-based `No` column is handled separately since
/// it carries no record field.
struct Column {
    header: &'static str,
    width: f64,
    value: fn(&BusinessRecord) -> &str,
}

const COLUMNS: &[Column] = &[
    Column { header: "URL", width: 80.0, value: |r| &r.url },
    Column { header: "Business Name", width: 30.0, value: |r| &r.business_name },
    Column { header: "Phone", width: 20.0, value: |r| &r.phone },
    Column { header: "Website", width: 40.0, value: |r| &r.website },
    Column { header: "Address", width: 50.0, value: |r| &r.address },
    Column { header: "Typical Job Cost", width: 20.0, value: |r| &r.typical_job_cost },
    Column { header: "License Number", width: 20.0, value: |r| &r.license_number },
    Column { header: "Followers", width: 15.0, value: |r| &r.followers },
    Column { header: "Facebook", width: 40.0, value: |r| &r.facebook },
    Column { header: "LinkedIn", width: 40.0, value: |r| &r.linkedin },
    Column { header: "Other Website", width: 40.0, value: |r| &r.other_website },
];

/// Renders the result set as a single-sheet XLSX file: one header row, one
/// row per record in insertion order, row numbers starting at 1.
pub fn export_table<P: AsRef<Path>>(records: &[BusinessRecord], path: P) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    sheet.write_string(0, 0, "No")?;
    sheet.set_column_width(0, 6.0)?;
    for (i, column) in COLUMNS.iter().enumerate() {
        let col = (i + 1) as u16;
        sheet.write_string(0, col, column.header)?;
        sheet.set_column_width(col, column.width)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, (i + 1) as f64)?;
        for (j, column) in COLUMNS.iter().enumerate() {
            sheet.write_string(row, (j + 1) as u16, (column.value)(record))?;
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Reader, Xlsx};

    fn record(url: &str, name: &str) -> BusinessRecord {
        BusinessRecord {
            url: url.to_string(),
            business_name: name.to_string(),
            ..BusinessRecord::default()
        }
    }

    #[test]
    fn three_records_make_four_rows_with_running_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let records = vec![
            record("https://www.houzz.com/professionals/a~1", "A"),
            record("https://www.houzz.com/professionals/b~2", "B"),
            record("https://www.houzz.com/professionals/c~3", "C"),
        ];

        export_table(&records, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let worksheets = workbook.worksheets();
        let (name, range) = worksheets.first().unwrap();
        assert_eq!(name, SHEET_NAME);
        assert_eq!(range.height(), 4);

        assert_eq!(range.get((0, 0)).unwrap().to_string(), "No");
        assert_eq!(range.get((0, 1)).unwrap().to_string(), "URL");
        assert_eq!(range.get((0, 2)).unwrap().to_string(), "Business Name");

        for (i, record) in records.iter().enumerate() {
            let row = i + 1;
            assert_eq!(range.get((row, 0)).unwrap().to_string(), (i + 1).to_string());
            assert_eq!(range.get((row, 1)).unwrap().to_string(), record.url);
            assert_eq!(range.get((row, 2)).unwrap().to_string(), record.business_name);
        }
    }

    #[test]
    fn empty_fields_export_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.xlsx");
        let records = vec![record("https://www.houzz.com/professionals/a~1", "A")];

        export_table(&records, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let worksheets = workbook.worksheets();
        let (_, range) = worksheets.first().unwrap();
        // Phone column (index 3) was never filled in.
        assert_eq!(range.get((1, 3)).map(|c| c.to_string()).unwrap_or_default(), "");
    }
}
