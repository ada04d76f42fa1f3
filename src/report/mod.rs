//! Report generation entry points.
//!
//! [`EntityReportGenerator`] drives both output pipelines: CSV text and
//! spreadsheet workbooks. Projection is shared; only the final rendering
//! differs. Generation is fail-fast: the first projection error aborts the
//! whole call and no partial artifact is returned, because the byte or
//! string materialization step only runs after every page succeeded.

/// Sheet-level data model and the workbook encoder seam.
pub mod sheet;

#[cfg(feature = "csv")]
/// CSV text rendering.
pub mod csv_report;

#[cfg(feature = "xlsx")]
/// Workbook encoding backed by `rust_xlsxwriter`.
pub mod xlsx_file;

use log::{debug, error};

use crate::core::naming::{friendly_type_name, sanitize_sheet_name};
use crate::core::page::{DynamicPage, ReportPage};
use crate::core::schema::{ColumnDescriptor, ReportEntity};
use crate::core::value::CellValue;
use crate::core::EntityReportOptions;
use crate::error::ReportError;
use crate::report::sheet::{SheetData, WorkbookSink};

/// Generates CSV and workbook reports from entity collections.
///
/// The generator owns nothing but its immutable options, so one instance
/// can serve any number of independent calls.
pub struct EntityReportGenerator {
    options: EntityReportOptions,
}

impl Default for EntityReportGenerator {
    fn default() -> Self {
        Self::new(EntityReportOptions::default())
    }
}

impl EntityReportGenerator {
    pub fn new(options: EntityReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EntityReportOptions {
        &self.options
    }

    /// Assemble one sheet per page into the supplied sink and return the
    /// encoded bytes.
    ///
    /// Page order is preserved. Each page name is sanitized independently;
    /// two raw names may collapse to the same sheet name, and it is the
    /// sink's prerogative to reject the duplicate.
    pub fn generate_excel_content_with<T, S>(
        &self,
        pages: &[ReportPage<T>],
        sink: &mut S,
    ) -> Result<Vec<u8>, ReportError>
    where
        T: ReportEntity,
        S: WorkbookSink,
    {
        for page in pages {
            let sheet_name = sanitize_sheet_name(&page.name);
            debug!("adding sheet {sheet_name} with {} items", page.items.len());
            let table = project_rows(&page.items)?;
            sink.add_sheet(&SheetData::from_table(
                sheet_name,
                &table.descriptors,
                table.rows,
            ))?;
        }

        sink.finalize()
    }

    /// Dictionary-shaped variant of [`generate_excel_content_with`].
    ///
    /// The first row of each page defines the header; see
    /// [`SheetData::from_dynamic_rows`] for the positional layout rule.
    ///
    /// [`generate_excel_content_with`]: Self::generate_excel_content_with
    pub fn generate_excel_content_dynamic_with<S>(
        &self,
        pages: &[DynamicPage],
        sink: &mut S,
    ) -> Result<Vec<u8>, ReportError>
    where
        S: WorkbookSink,
    {
        for page in pages {
            let sheet_name = sanitize_sheet_name(&page.name);
            debug!("adding sheet {sheet_name} with {} rows", page.rows.len());
            sink.add_sheet(&SheetData::from_dynamic_rows(sheet_name, &page.rows))?;
        }

        sink.finalize()
    }

    /// Single-sheet convenience form bypassing the page collection.
    pub fn generate_excel_content_direct_with<T, S>(
        &self,
        sheet_name: &str,
        dataset: &[T],
        sink: &mut S,
    ) -> Result<Vec<u8>, ReportError>
    where
        T: ReportEntity,
        S: WorkbookSink,
    {
        let sheet_name = sanitize_sheet_name(sheet_name);
        let table = project_rows(dataset)?;
        sink.add_sheet(&SheetData::from_table(
            sheet_name,
            &table.descriptors,
            table.rows,
        ))?;

        sink.finalize()
    }
}

/// Projection output: the exported column set plus one native-valued row
/// per entity, every row exactly as wide as the column set.
pub(crate) struct ProjectedTable {
    pub descriptors: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Project entities onto their schema's active columns.
///
/// An accessor failure is logged with the entity's friendly type name and
/// aborts the projection.
pub(crate) fn project_rows<T: ReportEntity>(items: &[T]) -> Result<ProjectedTable, ReportError> {
    let schema = T::report_schema();
    let descriptors = schema.descriptors();
    let columns = schema.active_columns();

    let mut rows = Vec::with_capacity(items.len());

    for item in items {
        let mut cells = Vec::with_capacity(columns.len());

        for column in &columns {
            match column.value_of(item) {
                Ok(value) => cells.push(value),
                Err(source) => {
                    let entity = friendly_type_name::<T>();
                    error!("error converting entities of type {entity}: {source}");
                    return Err(ReportError::PropertyAccess { entity, source });
                }
            }
        }

        rows.push(cells);
    }

    Ok(ProjectedTable { descriptors, rows })
}
