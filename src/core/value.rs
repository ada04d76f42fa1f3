use std::fmt;

use uuid::Uuid;

/// Native cell value carried from an entity into a report cell.
///
/// Values keep their source type until the moment a concrete output needs a
/// representation: the CSV path renders every variant as text, while the
/// workbook path hands numbers and booleans to the encoder unconverted so
/// the resulting cells are typed. Absent values are `Null` and render as an
/// empty field or a blank cell, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Int(i64),
    Bool(bool),
    Text(String),
    Guid(Uuid),
    TextList(Vec<String>),
    /// Any other scalar, captured through its display form.
    Other(String),
}

impl CellValue {
    /// Capture an arbitrary displayable value as an `Other` cell.
    pub fn other(value: impl fmt::Display) -> Self {
        CellValue::Other(value.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Map a JSON value onto the closest native cell variant.
    ///
    /// Integers stay integers, an all-string array becomes a `TextList`, and
    /// anything without a native counterpart (floats, nested structures)
    /// falls back to `Other` with its JSON rendering.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(flag) => CellValue::Bool(*flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => CellValue::Int(int),
                None => CellValue::Other(number.to_string()),
            },
            serde_json::Value::String(text) => CellValue::Text(text.clone()),
            serde_json::Value::Array(elements) => {
                let strings: Option<Vec<String>> = elements
                    .iter()
                    .map(|e| e.as_str().map(str::to_string))
                    .collect();
                match strings {
                    Some(list) => CellValue::TextList(list),
                    None => CellValue::Other(value.to_string()),
                }
            }
            serde_json::Value::Object(_) => CellValue::Other(value.to_string()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<Uuid> for CellValue {
    fn from(value: Uuid) -> Self {
        CellValue::Guid(value)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        CellValue::TextList(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optionals_become_null() {
        let id: Option<i64> = None;
        assert_eq!(CellValue::from(id), CellValue::Null);
        assert_eq!(CellValue::from(Some(42i64)), CellValue::Int(42));
    }

    #[test]
    fn json_integers_keep_native_type() {
        let value = serde_json::json!(100500);
        assert_eq!(CellValue::from_json(&value), CellValue::Int(100500));
    }

    #[test]
    fn json_floats_fall_back_to_other() {
        let value = serde_json::json!(99.995);
        assert_eq!(
            CellValue::from_json(&value),
            CellValue::Other("99.995".to_string())
        );
    }

    #[test]
    fn json_string_arrays_become_text_lists() {
        let value = serde_json::json!(["string1", "string2"]);
        assert_eq!(
            CellValue::from_json(&value),
            CellValue::TextList(vec!["string1".to_string(), "string2".to_string()])
        );
    }

    #[test]
    fn json_mixed_arrays_fall_back_to_other() {
        let value = serde_json::json!(["string1", 2]);
        assert_eq!(
            CellValue::from_json(&value),
            CellValue::Other("[\"string1\",2]".to_string())
        );
    }
}
