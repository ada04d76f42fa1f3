use log::debug;

use crate::core::naming::{friendly_type_name, sanitize_sheet_name, strip_delimiter_chars};
use crate::core::schema::ReportEntity;
use crate::core::value::CellValue;
use crate::error::ReportError;
use crate::report::{project_rows, EntityReportGenerator};

/// Row terminator for generated CSV text.
const LINE_TERMINATOR: &str = "\r\n";

impl EntityReportGenerator {
    /// Render a dataset as CSV text: header row first, fields joined with
    /// the configured delimiter, rows separated (and terminated) by CRLF.
    ///
    /// Field values are never quoted or escaped; the only guard is that
    /// every delimiter character is stripped out of rendered values, so a
    /// field cannot silently introduce an extra column. Embedded newlines
    /// in source data will corrupt row boundaries; callers exporting such
    /// data should clean it up first.
    ///
    /// # Example
    ///
    /// ```
    /// use entity_report_rs::core::{
    ///     CellValue, EntityReportOptions, EntitySchema, ReportEntity, TypeTag,
    /// };
    /// use entity_report_rs::report::EntityReportGenerator;
    ///
    /// struct City {
    ///     name: String,
    ///     population: Option<i64>,
    /// }
    ///
    /// impl ReportEntity for City {
    ///     fn report_schema() -> EntitySchema<Self> {
    ///         EntitySchema::builder()
    ///             .column("name", TypeTag::String, |c: &City| c.name.clone().into())
    ///             .column("population", TypeTag::Int, |c: &City| c.population.into())
    ///             .build()
    ///     }
    /// }
    ///
    /// let generator = EntityReportGenerator::default();
    /// let csv = generator
    ///     .generate_csv_content(&[City {
    ///         name: "Boston".to_string(),
    ///         population: Some(4628910),
    ///     }])
    ///     .unwrap();
    ///
    /// assert_eq!(csv, "name,population\r\nBoston,4628910\r\n");
    /// ```
    pub fn generate_csv_content<T: ReportEntity>(
        &self,
        dataset: &[T],
    ) -> Result<String, ReportError> {
        let artifact_name = sanitize_sheet_name(&friendly_type_name::<T>());
        debug!("rendering csv report {artifact_name}");

        let delimiter = self.options.csv_delimiter.as_str();
        let detailed = self.options.detailed_enumerables;
        let table = project_rows(dataset)?;

        let mut out = String::new();

        let header: Vec<&str> = table
            .descriptors
            .iter()
            .map(|descriptor| descriptor.name.as_str())
            .collect();
        out.push_str(&header.join(delimiter));
        out.push_str(LINE_TERMINATOR);

        for row in &table.rows {
            let fields: Vec<String> = row
                .iter()
                .map(|value| {
                    strip_delimiter_chars(&render_csv_cell(value, detailed), delimiter)
                })
                .collect();
            out.push_str(&fields.join(delimiter));
            out.push_str(LINE_TERMINATOR);
        }

        Ok(out)
    }
}

/// One string per cell, chosen by value tag. Collections honor the
/// compact/detailed mode; everything else renders through its display form
/// with `Null` as an empty field.
fn render_csv_cell(value: &CellValue, detailed: bool) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Int(int) => int.to_string(),
        CellValue::Bool(flag) => flag.to_string(),
        CellValue::Text(text) => text.clone(),
        CellValue::Guid(guid) => guid.to_string(),
        CellValue::TextList(elements) => {
            if detailed {
                elements.join(",")
            } else {
                elements.first().cloned().unwrap_or_default()
            }
        }
        CellValue::Other(text) => text.clone(),
    }
}
