use serde::{Deserialize, Serialize};

/// Field delimiter used when none is configured.
pub const DEFAULT_CSV_DELIMITER: &str = ",";

/// Generator settings, fixed at construction time.
///
/// Every call on a generator instance sees the same options; there is no
/// per-call override. The struct deserializes from configuration files with
/// missing fields falling back to defaults.
///
/// # Example
///
/// ```
/// use entity_report_rs::core::EntityReportOptions;
///
/// let options = EntityReportOptions::builder()
///     .csv_delimiter("`")
///     .detailed_enumerables(true)
///     .build();
///
/// assert_eq!(options.csv_delimiter, "`");
/// assert!(options.detailed_enumerables);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityReportOptions {
    /// Field delimiter for CSV output. May hold several characters; the
    /// whole set is stripped from rendered field values.
    pub csv_delimiter: String,
    /// When set, string-collection columns render every element joined with
    /// a comma instead of only the first element.
    pub detailed_enumerables: bool,
}

impl Default for EntityReportOptions {
    fn default() -> Self {
        Self {
            csv_delimiter: DEFAULT_CSV_DELIMITER.to_string(),
            detailed_enumerables: false,
        }
    }
}

impl EntityReportOptions {
    pub fn builder() -> EntityReportOptionsBuilder {
        EntityReportOptionsBuilder {
            options: EntityReportOptions::default(),
        }
    }
}

#[derive(Default)]
pub struct EntityReportOptionsBuilder {
    options: EntityReportOptions,
}

impl EntityReportOptionsBuilder {
    pub fn csv_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.csv_delimiter = delimiter.into();
        self
    }

    pub fn detailed_enumerables(mut self, detailed: bool) -> Self {
        self.options.detailed_enumerables = detailed;
        self
    }

    pub fn build(self) -> EntityReportOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_a_comma_and_compact_lists() {
        let options = EntityReportOptions::default();
        assert_eq!(options.csv_delimiter, ",");
        assert!(!options.detailed_enumerables);
    }

    #[test]
    fn missing_configuration_fields_fall_back_to_defaults() {
        let options: EntityReportOptions =
            serde_json::from_str(r#"{"csv_delimiter": "`"}"#).unwrap();
        assert_eq!(options.csv_delimiter, "`");
        assert!(!options.detailed_enumerables);
    }
}
