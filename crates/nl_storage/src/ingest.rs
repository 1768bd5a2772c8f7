//! Reads the input tables into keyed rows with per-column defaults applied.

use csv::ReaderBuilder;
use nl_core::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Cell contents that count as "no value", on top of the empty cell.
pub const MISSING_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#NA", "#N/A N/A", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

pub fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

/// Normalizes a key cell to its text form. Integral floats (`101.0`) collapse
/// to their integer spelling so keys agree across files.
pub fn normalize_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    if is_missing(key) {
        return None;
    }
    if let Some((whole, fraction)) = key.split_once('.') {
        let digits = whole.strip_prefix('-').unwrap_or(whole);
        if !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit())
            && !fraction.is_empty()
            && fraction.chars().all(|c| c == '0')
        {
            return Some(whole.to_string());
        }
    }
    Some(key.to_string())
}

/// A column the caller wants, with the value used when the cell or the whole
/// column is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub default: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, default: &'static str) -> Self {
        Self { name, default }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    key: String,
    values: HashMap<String, String>,
}

impl Row {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value for a requested column. Defaults are already applied, so this is
    /// only empty for columns that were never requested.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug)]
pub struct Table {
    pub path: PathBuf,
    pub rows: Vec<Row>,
    /// Rows dropped for a blank key or an unreadable record.
    pub skipped_rows: usize,
}

impl Table {
    /// Distinct keys in first-seen order.
    pub fn distinct_keys(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.key()))
            .map(|row| row.key().to_string())
            .collect()
    }
}

/// Opens `path` and reads it as a table keyed by `key`.
///
/// An absent file is reported as [`Error::MissingFile`] so callers can tell it
/// apart from a file that exists but is empty or unreadable.
pub fn read_table(path: &Path, key: &str, columns: &[Column]) -> Result<Table> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingFile { path: path.to_path_buf() },
        _ => Error::Io(e),
    })?;
    read_from(file, path, key, columns)
}

pub fn read_from<R: Read>(input: R, path: &Path, key: &str, columns: &[Column]) -> Result<Table> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let key_index = headers
        .iter()
        .position(|h| h == key)
        .ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: key.to_string(),
        })?;

    let indices: Vec<(Column, Option<usize>)> = columns
        .iter()
        .map(|column| (*column, headers.iter().position(|h| h == column.name)))
        .collect();
    for (column, _) in indices.iter().filter(|(_, index)| index.is_none()) {
        debug!(
            "Column '{}' absent from {}, using default {:?}",
            column.name,
            path.display(),
            column.default
        );
    }

    let mut rows = Vec::new();
    let mut skipped_rows = 0;
    for (line, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = line + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable row {} of {}: {}", line, path.display(), e);
                skipped_rows += 1;
                continue;
            }
        };

        let Some(row_key) = normalize_key(record.get(key_index).unwrap_or("")) else {
            warn!("Skipping row {} of {}: blank '{}'", line, path.display(), key);
            skipped_rows += 1;
            continue;
        };

        let values = indices
            .iter()
            .map(|(column, index)| {
                let value = index
                    .and_then(|i| record.get(i))
                    .filter(|cell| !is_missing(cell))
                    .unwrap_or(column.default);
                (column.name.to_string(), value.to_string())
            })
            .collect();

        rows.push(Row { key: row_key, values });
    }

    Ok(Table {
        path: path.to_path_buf(),
        rows,
        skipped_rows,
    })
}
