/// A single data row from the source table.
///
/// Fields are stored exactly as read. Accessors trim surrounding whitespace
/// and hand back an empty string for out-of-range indexes, so short or
/// ragged rows never panic downstream — missing columns read as empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Trimmed field at `index`, or `""` when the row is too short.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.trim()).unwrap_or("")
    }

    /// Number of fields actually present in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every field is the empty string.
    ///
    /// Judged on the raw fields: a whitespace-only field still counts as
    /// content, so the row is kept and its fields trim to empty later.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }
}

impl From<&csv::StringRecord> for Row {
    fn from(record: &csv::StringRecord) -> Self {
        Self::new(record.iter().map(str::to_string).collect())
    }
}
