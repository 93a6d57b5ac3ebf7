use serde_json::{Map, Value};

/// One CSV record as read from disk: column name → raw value, in header order.
///
/// `line_number` is the physical 1-based line where the record starts
/// (the header is line 1, so the first data record is line 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line_number: u64,
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(line_number: u64) -> Self {
        Self {
            line_number,
            fields: Vec::new(),
        }
    }

    /// Build a row from `(column, value)` pairs. Handy in tests and in the reader.
    pub fn from_pairs<I, K, V>(line_number: u64, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new(line_number);
        for (k, v) in pairs {
            row.push(k, v);
        }
        row
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Untouched value of `column`, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value of `column`; an absent column reads as "".
    pub fn value(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }

    pub fn is_blank(&self, column: &str) -> bool {
        self.value(column).is_empty()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Raw row as a JSON object text (column order kept), used by the error report.
    pub fn to_json(&self) -> String {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map).to_string()
    }
}
