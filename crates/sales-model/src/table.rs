#![deny(unsafe_code)]

use std::fmt;

use chrono::NaiveDate;

/// A single typed cell in a [`Table`].
///
/// `Missing` is the explicit no-value marker used for absent or unparseable
/// data; it is distinct from any valid value and is what the row-dropping
/// stages filter on.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Text(String),
    Number(f64),
    Integer(i64),
    Date(NaiveDate),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell, covering both decimal and integral values.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Lossy text conversion used when a stage matches cells as strings.
    ///
    /// `Missing` renders as the literal token `nan`, so missing values take
    /// part in string matching instead of being skipped.
    pub fn to_text(&self) -> String {
        match self {
            Value::Missing => "nan".to_string(),
            other => other.to_string(),
        }
    }
}

/// Output rendering, used for CSV cells and previews.
///
/// `Missing` renders as the empty string; dates render ISO.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Missing => Ok(()),
        }
    }
}

/// In-memory rectangular dataset: ordered named columns over ordered rows.
///
/// Every row holds exactly one [`Value`] per column. Stages never mutate a
/// table in place; each produces a fresh snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Same data under new column names.
    pub fn with_columns(&self, columns: Vec<String>) -> Table {
        debug_assert_eq!(columns.len(), self.columns.len());
        Table {
            columns,
            rows: self.rows.clone(),
        }
    }

    /// New table with one column rewritten cell by cell.
    pub fn map_column<F>(&self, index: usize, f: F) -> Table
    where
        F: Fn(&Value) -> Value,
    {
        let mut table = self.clone();
        for row in &mut table.rows {
            row[index] = f(&row[index]);
        }
        table
    }

    /// New table keeping only the rows whose mask entry is true.
    ///
    /// Row order among kept rows is preserved.
    pub fn filter_rows(&self, keep: &[bool]) -> Table {
        debug_assert_eq!(keep.len(), self.rows.len());
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .zip(keep)
                .filter(|(_, kept)| **kept)
                .map(|(row, _)| row.clone())
                .collect(),
        }
    }
}
