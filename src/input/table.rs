use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

#[derive(Debug, Clone)]
pub struct Row {
    pub line_no: usize,
    pub fields: Vec<String>,
}

impl Row {
    /// Short rows read as empty cells past their end.
    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn is_gz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn delimiter_for(path: &Path) -> char {
    let stem = if is_gz(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };
    let ext = stem
        .and_then(|p| p.extension())
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => ',',
        _ => '\t',
    }
}

pub fn read_table(path: &Path) -> Result<Table, InputError> {
    let delimiter = delimiter_for(path);
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut columns: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let line = if columns.is_none() {
            line.trim_start_matches('\u{feff}')
        } else {
            line
        };
        let fields = split_fields(line, delimiter);
        if columns.is_none() {
            columns = Some(fields);
            continue;
        }
        rows.push(Row { line_no, fields });
    }

    let columns = columns.ok_or_else(|| {
        InputError::Parse(format!("{} has no header line", path.display()))
    })?;

    Ok(Table { columns, rows })
}

/// Splits one line on `delimiter`, honouring double-quoted fields with `""`
/// escapes. Fields are trimmed outside the quotes only.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

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
        } else if c == '"' && field.trim().is_empty() {
            field.clear();
            in_quotes = true;
        } else if c == delimiter {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }
    fields.push(field.trim().to_string());
    fields
}
