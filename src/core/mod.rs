/// Entity schemas: column registration, type tags, discovery.
pub mod schema;

/// Native cell values carried through both projection pipelines.
pub mod value;

/// Ordered dictionary-shaped rows for the dynamic workbook path.
pub mod row;

/// Page containers mapping raw names onto sheet contents.
pub mod page;

/// Generator options.
pub mod options;

/// Friendly type naming and name/field sanitization.
pub mod naming;

pub use options::EntityReportOptions;
pub use page::{DynamicPage, ReportPage};
pub use row::DynamicRow;
pub use schema::{Column, ColumnDescriptor, EntitySchema, ReportEntity, TypeTag};
pub use value::CellValue;
