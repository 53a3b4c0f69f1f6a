//! Minimal CSV codec used by the roster import/export paths.
//!
//! The reader is tolerant: it takes the first record as the header, maps
//! every following record to header-keyed fields, handles quoted fields
//! (embedded commas, doubled quotes, newlines), accepts LF and CRLF line
//! endings, and drops blank lines before they are ever counted as rows.
//! Unknown columns are carried along and simply never looked up.

use std::collections::HashMap;

/// One parsed data record, keyed by header name.
#[derive(Debug, Clone)]
pub struct CsvRecord {
    values: HashMap<String, String>,
    field_count: usize,
}

impl CsvRecord {
    /// Field value for a header column, empty if the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Number of raw fields the record carried, including any overflow
    /// beyond the header width.
    pub fn field_count(&self) -> usize {
        self.field_count
    }
}

/// A parsed CSV document: header names plus header-keyed data records.
#[derive(Debug, Clone, Default)]
pub struct CsvDocument {
    pub headers: Vec<String>,
    pub records: Vec<CsvRecord>,
}

/// Parse CSV text with a header row into header-keyed records.
///
/// An empty or header-only input yields a document with no records.
pub fn parse(text: &str) -> CsvDocument {
    let mut raw = parse_raw(text).into_iter();

    let headers: Vec<String> = match raw.next() {
        Some(header_record) => header_record.iter().map(|h| h.trim().to_string()).collect(),
        None => return CsvDocument::default(),
    };

    let records = raw
        .map(|fields| {
            let field_count = fields.len();
            let values = headers
                .iter()
                .cloned()
                .zip(fields)
                .collect::<HashMap<_, _>>();
            CsvRecord {
                values,
                field_count,
            }
        })
        .collect();

    CsvDocument { headers, records }
}

/// Encode records into CSV text with a header row.
pub fn encode(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|field| escape(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Quote a field when it contains a separator, quote, or line break.
fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split CSV text into raw records, skipping blank lines.
fn parse_raw(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {
                // CRLF collapses into the newline handling below.
                if chars.peek() == Some(&'\n') {
                    continue;
                }
                flush_record(&mut records, &mut record, &mut field);
            }
            '\n' => flush_record(&mut records, &mut record, &mut field),
            _ => field.push(c),
        }
    }
    flush_record(&mut records, &mut record, &mut field);

    records
}

fn flush_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, field: &mut String) {
    // A single whitespace-only field with no separators is a blank line.
    if record.is_empty() && field.trim().is_empty() {
        field.clear();
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_keyed_records() {
        let doc = parse("firstname,lastname\nJane,Doe\nJohn,Smith\n");
        assert_eq!(doc.headers, vec!["firstname", "lastname"]);
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.records[0].get("firstname"), "Jane");
        assert_eq!(doc.records[1].get("lastname"), "Smith");
        assert_eq!(doc.records[0].get("missing"), "");
    }

    #[test]
    fn quoted_fields_keep_commas_quotes_and_newlines() {
        let doc = parse("name,notes\n\"Doe, Jane\",\"says \"\"hi\"\"\nbye\"\n");
        assert_eq!(doc.records[0].get("name"), "Doe, Jane");
        assert_eq!(doc.records[0].get("notes"), "says \"hi\"\nbye");
    }

    #[test]
    fn blank_lines_are_never_records() {
        let doc = parse("name\n\n  \nJane\n\n");
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].get("name"), "Jane");
    }

    #[test]
    fn crlf_input_parses_like_lf() {
        let doc = parse("name,city\r\nJane,Berlin\r\n");
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].get("city"), "Berlin");
    }

    #[test]
    fn overflow_fields_are_counted() {
        let doc = parse("a,b\n1,2,3\n");
        assert_eq!(doc.records[0].field_count(), 3);
    }

    #[test]
    fn header_only_input_has_no_records() {
        let doc = parse("a,b,c\n");
        assert!(doc.records.is_empty());
        assert!(parse("").records.is_empty());
    }

    #[test]
    fn encode_round_trips_through_parse() {
        let rows = vec![
            vec!["Doe, Jane".to_string(), "line\nbreak \"q\"".to_string()],
            vec!["Smith".to_string(), String::new()],
        ];
        let text = encode(&["name", "notes"], &rows);
        let doc = parse(&text);
        assert_eq!(doc.records[0].get("name"), "Doe, Jane");
        assert_eq!(doc.records[0].get("notes"), "line\nbreak \"q\"");
        assert_eq!(doc.records[1].get("name"), "Smith");
    }
}
