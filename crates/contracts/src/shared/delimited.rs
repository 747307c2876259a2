//! Minimal delimited-text reader.
//!
//! Splits on newlines, then on a single delimiter character. There is no
//! quoting or escaping: a delimiter inside a value always starts a new field.
//! The first line is the header and fixes the field count; every later
//! non-blank line with a different field count is reported in
//! [`DelimitedTable::row_errors`] and skipped.

use std::collections::HashMap;
use thiserror::Error;

/// Positional schema: column `i` of every row is stored under `fields[i]`.
#[derive(Debug, Clone)]
pub struct DelimitedSchema {
    pub delimiter: char,
    pub fields: Vec<&'static str>,
}

impl DelimitedSchema {
    pub fn comma(fields: &[&'static str]) -> Self {
        Self {
            delimiter: ',',
            fields: fields.to_vec(),
        }
    }
}

/// Whole-file failure. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("file is empty")]
    Empty,
    #[error("header has {found} columns, at least {expected} required")]
    MissingColumns { expected: usize, found: usize },
}

/// A skipped row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected {expected} fields, found {found}")]
pub struct RowError {
    /// 1-based line number in the source text
    pub line: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedRecord {
    pub line: usize,
    pub values: HashMap<String, String>,
}

impl DelimitedRecord {
    /// Trimmed value of a schema field, empty when the field is unknown
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub records: Vec<DelimitedRecord>,
    pub row_errors: Vec<RowError>,
}

pub fn parse_delimited(text: &str, schema: &DelimitedSchema) -> Result<DelimitedTable, ImportError> {
    let mut lines = text
        .trim_start_matches('\u{FEFF}')
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .enumerate();

    let header_line = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(ImportError::Empty),
        }
    };

    let headers: Vec<String> = header_line
        .split(schema.delimiter)
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < schema.fields.len() {
        return Err(ImportError::MissingColumns {
            expected: schema.fields.len(),
            found: headers.len(),
        });
    }

    let mut records = Vec::new();
    let mut row_errors = Vec::new();

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(schema.delimiter).collect();
        if values.len() != headers.len() {
            row_errors.push(RowError {
                line: idx + 1,
                expected: headers.len(),
                found: values.len(),
            });
            continue;
        }

        let values = schema
            .fields
            .iter()
            .zip(values)
            .map(|(field, value)| (field.to_string(), value.trim().to_string()))
            .collect();

        records.push(DelimitedRecord {
            line: idx + 1,
            values,
        });
    }

    Ok(DelimitedTable {
        headers,
        records,
        row_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> DelimitedSchema {
        DelimitedSchema::comma(&["a", "b", "c"])
    }

    #[test]
    fn test_positional_mapping_and_trim() {
        let table = parse_delimited("A,B,C\n 1 , 2,3 \n", &schema()).unwrap();
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.records.len(), 1);
        let r = &table.records[0];
        assert_eq!((r.get("a"), r.get("b"), r.get("c")), ("1", "2", "3"));
        assert_eq!(r.line, 2);
        assert_eq!(r.get("missing"), "");
    }

    #[test]
    fn test_mismatched_rows_are_reported_and_skipped() {
        let text = "A,B,C\n1,2\nx,y,z\n1,2,3,4\nq,r,s";
        let table = parse_delimited(text, &schema()).unwrap();

        let firsts: Vec<&str> = table.records.iter().map(|r| r.get("a")).collect();
        assert_eq!(firsts, vec!["x", "q"]);
        assert_eq!(
            table.row_errors,
            vec![
                RowError { line: 2, expected: 3, found: 2 },
                RowError { line: 4, expected: 3, found: 4 },
            ]
        );
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let text = "A,B,C\r\n\r\n1,2,3\r\n   \r\n4,5,6\r\n";
        let table = parse_delimited(text, &schema()).unwrap();
        assert_eq!(table.records.len(), 2);
        assert!(table.row_errors.is_empty());
        assert_eq!(table.records[1].get("c"), "6");
    }

    #[test]
    fn test_no_escaping_of_quoted_delimiters() {
        let table = parse_delimited("A,B,C\n\"x,y\",z\n", &schema()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].get("a"), "\"x");
        assert_eq!(table.records[0].get("b"), "y\"");

        let table = parse_delimited("A,B,C\n\"x,y\",z,w\n", &schema()).unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.row_errors[0].found, 4);
    }

    #[test]
    fn test_whole_file_errors() {
        assert_eq!(parse_delimited("", &schema()), Err(ImportError::Empty));
        assert_eq!(parse_delimited("\n  \n", &schema()), Err(ImportError::Empty));
        assert_eq!(
            parse_delimited("A,B\n1,2", &schema()),
            Err(ImportError::MissingColumns { expected: 3, found: 2 })
        );
    }
}
