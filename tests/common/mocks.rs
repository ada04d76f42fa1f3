//! Workbook sink doubles for assembly-level assertions.

use entity_report_rs::error::ReportError;
use entity_report_rs::report::sheet::{SheetData, WorkbookSink};

pub const FINALIZE_MARKER: &[u8] = b"finalized";

/// Records every sheet the generator hands over instead of encoding it.
///
/// `finalize` returns a fixed marker so a test can tell whether the byte
/// materialization step was ever reached.
#[derive(Default)]
pub struct RecordingSink {
    pub sheets: Vec<SheetData>,
    pub finalized: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkbookSink for RecordingSink {
    fn add_sheet(&mut self, sheet: &SheetData) -> Result<(), ReportError> {
        self.sheets.push(sheet.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<Vec<u8>, ReportError> {
        self.finalized = true;
        Ok(FINALIZE_MARKER.to_vec())
    }
}

/// Rejects every sheet, standing in for an encoder that refuses its input.
pub struct RejectingSink;

impl WorkbookSink for RejectingSink {
    fn add_sheet(&mut self, sheet: &SheetData) -> Result<(), ReportError> {
        Err(ReportError::Encoding(format!(
            "sheet '{}' rejected",
            sheet.name
        )))
    }

    fn finalize(&mut self) -> Result<Vec<u8>, ReportError> {
        Ok(Vec::new())
    }
}
