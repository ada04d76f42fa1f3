use crate::core::row::DynamicRow;
use crate::core::schema::ColumnDescriptor;
use crate::core::value::CellValue;
use crate::error::ReportError;

/// One worksheet's worth of data, ready for an encoder.
///
/// The name is already sanitized by the time a `SheetData` exists; the
/// encoder may still reject it (duplicate or empty names, length limits)
/// and that rejection propagates untranslated.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub print_headers: bool,
    pub auto_filter: bool,
}

impl SheetData {
    /// Sheet from a projected entity table: header from the column
    /// descriptors, rows as projected.
    pub fn from_table(
        name: impl Into<String>,
        descriptors: &[ColumnDescriptor],
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        Self {
            name: name.into(),
            header: descriptors.iter().map(|d| d.name.clone()).collect(),
            rows,
            print_headers: true,
            auto_filter: false,
        }
    }

    /// Sheet from dictionary-shaped rows.
    ///
    /// The **first** row's key order defines the header, and every row is
    /// laid out positionally against that header width: a row's values map
    /// onto columns by index, not by key lookup. Extra trailing values in
    /// later rows are dropped, shorter rows pad with blank cells. Rows with
    /// different keys therefore land under the first row's header unchanged.
    /// This mirrors the long-standing export contract and is pinned by
    /// tests; key-aware alignment is deliberately not performed.
    pub fn from_dynamic_rows(name: impl Into<String>, rows: &[DynamicRow]) -> Self {
        let header: Vec<String> = rows
            .first()
            .map(|row| row.keys().map(str::to_string).collect())
            .unwrap_or_default();

        let width = header.len();
        let projected = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<CellValue> = row.values().take(width).cloned().collect();
                cells.resize(width, CellValue::Null);
                cells
            })
            .collect();

        Self {
            name: name.into(),
            header,
            rows: projected,
            print_headers: true,
            auto_filter: true,
        }
    }

    pub fn without_headers(mut self) -> Self {
        self.print_headers = false;
        self
    }
}

/// Opaque workbook encoder.
///
/// The generator hands over fully projected sheets and asks for bytes; it
/// never touches the encoder's cell-addressing model. Implementations hold
/// the in-progress workbook for the duration of one generation call and are
/// dropped on every exit path.
pub trait WorkbookSink {
    fn add_sheet(&mut self, sheet: &SheetData) -> Result<(), ReportError>;

    /// Encode everything added so far and yield the final byte buffer.
    fn finalize(&mut self) -> Result<Vec<u8>, ReportError>;
}
