use rust_xlsxwriter::{DocProperties, Workbook, XlsxError};

use crate::core::page::{DynamicPage, ReportPage};
use crate::core::schema::ReportEntity;
use crate::core::value::CellValue;
use crate::error::ReportError;
use crate::report::sheet::{SheetData, WorkbookSink};
use crate::report::EntityReportGenerator;

/// Row height applied uniformly to every generated sheet.
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;
/// Column width applied uniformly to every populated column.
pub const DEFAULT_COLUMN_WIDTH: f64 = 12.0;

impl From<XlsxError> for ReportError {
    fn from(error: XlsxError) -> Self {
        ReportError::Encoding(error.to_string())
    }
}

/// Workbook encoder backed by `rust_xlsxwriter`.
///
/// Owns one in-progress workbook; the bytes materialize only in
/// [`WorkbookSink::finalize`], so a failed generation call leaves nothing
/// behind once the file is dropped.
pub struct XlsxFile {
    workbook: Workbook,
    author: Option<String>,
    subject: Option<String>,
    company: Option<String>,
}

impl Default for XlsxFile {
    fn default() -> Self {
        Self::new()
    }
}

impl XlsxFile {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            author: None,
            subject: None,
            company: None,
        }
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = Some(company.into());
    }

    fn apply_properties(&mut self) {
        if self.author.is_none() && self.subject.is_none() && self.company.is_none() {
            return;
        }

        let mut properties = DocProperties::new();
        if let Some(author) = &self.author {
            properties = properties.set_author(author);
        }
        if let Some(subject) = &self.subject {
            properties = properties.set_subject(subject);
        }
        if let Some(company) = &self.company {
            properties = properties.set_company(company);
        }

        self.workbook.set_properties(&properties);
    }
}

impl WorkbookSink for XlsxFile {
    fn add_sheet(&mut self, sheet: &SheetData) -> Result<(), ReportError> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        let width = sheet
            .header
            .len()
            .max(sheet.rows.iter().map(Vec::len).max().unwrap_or(0));
        for col in 0..width {
            worksheet.set_column_width(col as u16, DEFAULT_COLUMN_WIDTH)?;
        }

        let mut next_row: u32 = 0;
        if sheet.print_headers {
            worksheet.set_row_height(0, DEFAULT_ROW_HEIGHT)?;
            for (col, name) in sheet.header.iter().enumerate() {
                worksheet.write_string(0, col as u16, name.as_str())?;
            }
            next_row = 1;
        }

        for cells in &sheet.rows {
            worksheet.set_row_height(next_row, DEFAULT_ROW_HEIGHT)?;
            for (col, value) in cells.iter().enumerate() {
                let col = col as u16;
                match value {
                    // blank cell; the encoder needs no explicit write
                    CellValue::Null => {}
                    CellValue::Int(int) => {
                        worksheet.write_number(next_row, col, *int as f64)?;
                    }
                    CellValue::Bool(flag) => {
                        worksheet.write_boolean(next_row, col, *flag)?;
                    }
                    CellValue::Text(text) => {
                        worksheet.write_string(next_row, col, text.as_str())?;
                    }
                    CellValue::Guid(guid) => {
                        worksheet.write_string(next_row, col, guid.to_string())?;
                    }
                    // collections store their leading element only
                    CellValue::TextList(elements) => {
                        if let Some(first) = elements.first() {
                            worksheet.write_string(next_row, col, first.as_str())?;
                        }
                    }
                    CellValue::Other(text) => {
                        worksheet.write_string(next_row, col, text.as_str())?;
                    }
                }
            }
            next_row += 1;
        }

        if sheet.auto_filter && width > 0 && next_row > 0 {
            worksheet.autofilter(0, 0, next_row - 1, (width - 1) as u16)?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<Vec<u8>, ReportError> {
        self.apply_properties();
        Ok(self.workbook.save_to_buffer()?)
    }
}

impl EntityReportGenerator {
    /// One sheet per page, encoded as workbook bytes.
    pub fn generate_excel_content<T: ReportEntity>(
        &self,
        pages: &[ReportPage<T>],
    ) -> Result<Vec<u8>, ReportError> {
        let mut file = XlsxFile::new();
        self.generate_excel_content_with(pages, &mut file)
    }

    /// Dictionary-shaped variant of [`generate_excel_content`].
    ///
    /// [`generate_excel_content`]: Self::generate_excel_content
    pub fn generate_excel_content_dynamic(
        &self,
        pages: &[DynamicPage],
    ) -> Result<Vec<u8>, ReportError> {
        let mut file = XlsxFile::new();
        self.generate_excel_content_dynamic_with(pages, &mut file)
    }

    /// Single sheet straight from a dataset, bypassing the page collection.
    pub fn generate_excel_content_direct<T: ReportEntity>(
        &self,
        sheet_name: &str,
        dataset: &[T],
    ) -> Result<Vec<u8>, ReportError> {
        let mut file = XlsxFile::new();
        self.generate_excel_content_direct_with(sheet_name, dataset, &mut file)
    }
}
