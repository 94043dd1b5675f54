//! Corpus file readers for the supported formats.

use std::path::Path;

use serde_json::Value;
use ticketsage_core::{CorpusColumns, Error, Result};
use tracing::debug;

/// Cell values treated as missing in CSV input.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One labeled row as read from disk. `None` marks a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub text: Option<String>,
    pub label: Option<String>,
}

impl RawRecord {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            label: Some(label.into()),
        }
    }
}

/// Supported corpus file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Csv,
    Json,
    JsonLines,
}

impl CorpusFormat {
    /// Detect the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Read every labeled row from a corpus file.
pub fn load_records(path: &Path, columns: &CorpusColumns) -> Result<Vec<RawRecord>> {
    let format = CorpusFormat::from_path(path).ok_or_else(|| {
        Error::Corpus(format!(
            "unsupported corpus format: {} (expected .csv, .json or .jsonl)",
            path.display()
        ))
    })?;

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Corpus(format!("cannot read {}: {}", path.display(), e)))?;

    let records = match format {
        CorpusFormat::Csv => parse_csv(&content, columns)?,
        CorpusFormat::Json => parse_json(&content, columns)?,
        CorpusFormat::JsonLines => parse_json_lines(&content, columns)?,
    };

    debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

fn parse_csv(content: &str, columns: &CorpusColumns) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::Corpus(format!("missing column: {}", name)))
    };
    let text_idx = find(&columns.text)?;
    let label_idx = find(&columns.label)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawRecord {
            text: csv_cell(row.get(text_idx)),
            label: csv_cell(row.get(label_idx)),
        });
    }
    Ok(records)
}

fn csv_cell(cell: Option<&str>) -> Option<String> {
    cell.filter(|c| !MISSING_MARKERS.contains(c))
        .map(|c| c.to_string())
}

fn parse_json(content: &str, columns: &CorpusColumns) -> Result<Vec<RawRecord>> {
    let rows: Vec<Value> = serde_json::from_str(content)?;
    records_from_values(&rows, columns)
}

fn parse_json_lines(content: &str, columns: &CorpusColumns) -> Result<Vec<RawRecord>> {
    let mut rows = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .map_err(|e| Error::Corpus(format!("line {}: {}", i + 1, e)))?;
        rows.push(value);
    }
    records_from_values(&rows, columns)
}

fn records_from_values(rows: &[Value], columns: &CorpusColumns) -> Result<Vec<RawRecord>> {
    for name in [&columns.text, &columns.label] {
        if !rows.is_empty() && !rows.iter().any(|r| r.get(name.as_str()).is_some()) {
            return Err(Error::Corpus(format!("missing column: {}", name)));
        }
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            if !row.is_object() {
                return Err(Error::Corpus(format!("row {} is not an object", i + 1)));
            }
            Ok(RawRecord {
                text: json_field(row, &columns.text),
                label: json_field(row, &columns.label),
            })
        })
        .collect()
}

fn json_field(row: &Value, name: &str) -> Option<String> {
    match row.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
