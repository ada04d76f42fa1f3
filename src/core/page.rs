use crate::core::row::DynamicRow;

/// One named collection of entities destined for one worksheet.
///
/// The raw name may carry characters a worksheet cannot; it is sanitized at
/// assembly time, and the raw and sanitized names remain distinct values.
#[derive(Debug, Clone)]
pub struct ReportPage<T> {
    pub name: String,
    pub items: Vec<T>,
}

impl<T> ReportPage<T> {
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// One named collection of dictionary-shaped rows.
#[derive(Debug, Clone, Default)]
pub struct DynamicPage {
    pub name: String,
    pub rows: Vec<DynamicRow>,
}

impl DynamicPage {
    pub fn new(name: impl Into<String>, rows: Vec<DynamicRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}
