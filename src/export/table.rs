//! Comma-separated tables embedded in an export section.
//!
//! Each section body is a small CSV document: the first line names the
//! columns, every following line is one row. Rows are kept as text; typed
//! conversion happens when records are built from the table.

use super::Section;
use crate::error::DigestError;

/// A header-plus-rows table parsed from one export section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse a table from already-trimmed, non-blank lines.
    ///
    /// The first line is the header. Missing input yields an empty table.
    pub fn parse<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter();
        let Some(header) = lines.next() else {
            return Self::default();
        };

        Self {
            columns: split_fields(header),
            rows: lines.map(split_fields).collect(),
        }
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, or `MissingColumn` for the given section.
    pub fn column(&self, section: Section, name: &'static str) -> Result<usize, DigestError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or(DigestError::MissingColumn {
                section,
                column: name,
            })
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row { values })
    }
}

/// A borrowed table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Value at a column position; empty cells and short rows read as absent.
    pub fn get(&self, column: usize) -> Option<&'a str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value parsed as a number; non-numeric text reads as absent.
    pub fn number(&self, column: usize) -> Option<f64> {
        self.get(column)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|n| n.is_finite())
    }
}

/// Split one CSV line into trimmed fields.
///
/// Double-quoted fields may contain commas; `""` inside quotes is a literal quote.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
