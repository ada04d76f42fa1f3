use crate::core::value::CellValue;
use crate::error::ReportError;

/// Ordered `key -> value` row for the no-fixed-schema workbook path.
///
/// Keys keep insertion order; inserting an existing key replaces the value
/// in place without moving the key. The first row of a page defines the
/// sheet header, so ordering is part of the contract, not a nicety.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicRow {
    entries: Vec<(String, CellValue)>,
}

impl DynamicRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Replacement keeps the key's position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for DynamicRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        let mut row = DynamicRow::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

/// Build a row from a JSON object, keeping the object's key order.
///
/// Dictionary-shaped rows typically arrive as deserialized JSON; anything
/// other than an object is rejected.
impl TryFrom<&serde_json::Value> for DynamicRow {
    type Error = ReportError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let object = value.as_object().ok_or_else(|| {
            ReportError::InvalidInput(format!(
                "dynamic row requires a JSON object, got {value}"
            ))
        })?;

        Ok(object
            .iter()
            .map(|(key, value)| (key.clone(), CellValue::from_json(value)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let mut row = DynamicRow::new();
        row.insert("b", 1i64);
        row.insert("a", 2i64);
        row.insert("c", 3i64);

        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn reinserting_a_key_replaces_in_place() {
        let mut row = DynamicRow::new();
        row.insert("a", "first");
        row.insert("b", "second");
        row.insert("a", "replaced");

        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(row.get("a"), Some(&CellValue::Text("replaced".to_string())));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn json_objects_convert_with_key_order() {
        let value = serde_json::json!({
            "word": "value",
            "count": 100500,
            "flag": true,
            "ratio": 99.995
        });

        let row = DynamicRow::try_from(&value).unwrap();
        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, ["word", "count", "flag", "ratio"]);
        assert_eq!(row.get("count"), Some(&CellValue::Int(100500)));
        assert_eq!(row.get("ratio"), Some(&CellValue::Other("99.995".to_string())));
    }

    #[test]
    fn non_object_json_is_rejected() {
        let value = serde_json::json!([1, 2, 3]);
        let err = DynamicRow::try_from(&value).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)));
    }
}
