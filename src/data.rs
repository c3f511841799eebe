use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use log::debug;
use thiserror::Error;

use crate::ledger::book::Book;
use crate::ledger::record::OpenRecord;

/// Sheet holding account history metadata, never converted.
pub const RESUME_SHEET: &str = "履历表";

const BEAN_EXT: &str = "bean";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read workbook")]
    Workbook(#[from] calamine::XlsxError),
    #[error("failed to write {path:?}")]
    Write { path: PathBuf, source: io::Error },
}

/// One sheet row in the fixed six-column shape. Cells whose column is
/// missing from the sheet materialize as empty strings, so downstream logic
/// never distinguishes a missing column from a missing value.
#[derive(Debug, Default, PartialEq)]
pub struct RawRow {
    pub open_date: String,
    pub currency: String,
    pub display_name: String,
    pub account_full_name: String,
    pub note: String,
    pub category: String,
}

impl From<RawRow> for OpenRecord {
    fn from(row: RawRow) -> OpenRecord {
        // The display name is what lands in the directive comment; the note
        // column is carried through the row shape but stays out of the output.
        OpenRecord::new(
            &row.open_date,
            &row.account_full_name,
            &row.currency,
            &row.display_name,
            &row.category,
        )
    }
}

/// Column indices of the six logical columns in one sheet's header row.
#[derive(Debug, Default)]
struct SheetSchema {
    open_date: Option<usize>,
    currency: Option<usize>,
    display_name: Option<usize>,
    account_full_name: Option<usize>,
    note: Option<usize>,
    category: Option<usize>,
}

impl SheetSchema {
    /// Headers match the original Chinese labels or their English logical
    /// names, trimmed. The first matching column wins.
    fn resolve(headers: &[Data]) -> SheetSchema {
        let mut schema = SheetSchema::default();

        for (index, cell) in headers.iter().enumerate() {
            let header = cell_to_string(cell);
            let slot = match header.trim() {
                "开账时间" | "open_date" => &mut schema.open_date,
                "货币" | "currency" => &mut schema.currency,
                "名称" | "display_name" => &mut schema.display_name,
                "账户全名" | "account_full_name" => &mut schema.account_full_name,
                "备注" | "note" => &mut schema.note,
                "一级" | "category" => &mut schema.category,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(index);
            }
        }

        schema
    }

    fn extract(&self, row: &[Data]) -> RawRow {
        RawRow {
            open_date: column(row, self.open_date),
            currency: column(row, self.currency),
            display_name: column(row, self.display_name),
            account_full_name: column(row, self.account_full_name),
            note: column(row, self.note),
            category: column(row, self.category),
        }
    }
}

fn column(row: &[Data], index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .map(cell_to_string)
        .unwrap_or_default()
}

/// Empty, error and NaN cells become the empty string so a single blankness
/// check covers them downstream. Native date cells render as ISO datetimes
/// and go through the same parser as textual dates.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::Float(value) if value.is_nan() => String::new(),
        Data::DateTime(value) => value
            .as_datetime()
            .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

/// All data rows of one sheet, extracted through the resolved schema. The
/// first row is the header row; a sheet without one yields nothing.
pub fn sheet_rows(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let Some(headers) = rows.next() else {
        return Vec::new();
    };

    let schema = SheetSchema::resolve(headers);
    rows.map(|row| schema.extract(row)).collect()
}

/// Scans every sheet of the workbook except the reserved metadata sheet and
/// accumulates one directive per row into the book.
pub fn process_workbook(path: &Path, book: &mut Book) -> Result<(), DataError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    for sheet_name in workbook.sheet_names() {
        if sheet_name == RESUME_SHEET {
            debug!("skipping reserved sheet {:?}", sheet_name);
            continue;
        }

        let range = workbook.worksheet_range(&sheet_name)?;
        for row in sheet_rows(&range) {
            book.add(&OpenRecord::from(row));
        }
    }

    Ok(())
}

/// Writes one `<category>.bean` file per bucket, in encounter order, and
/// prints a completion line for each. The category is used as the file stem
/// verbatim.
pub fn export_bean(book: &Book, dir: &Path) -> Result<(), DataError> {
    for (category, lines) in book.groups_iter() {
        let file_name = format!("{}.{}", category, BEAN_EXT);
        let path = dir.join(&file_name);

        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&path, content).map_err(|source| DataError::Write {
            path: path.clone(),
            source,
        })?;

        println!("generated {}", file_name);
    }

    Ok(())
}
