// src/table/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs, path::Path};

/// One raw CSV held fully in memory.
///
/// The upstream exports are a few hundred rows at most, so each file is
/// buffered whole and decoded lossily: these tables arrive in ISO-8859-1
/// flavoured encodings and a strict UTF-8 read would reject them.
#[derive(Debug)]
pub struct Table {
    /// Column names exactly as the file claims them, before any cleaning.
    pub headers: Vec<String>,
    /// Each data row, one `String` per field.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        Self::from_csv_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // ragged trailing fields show up in these exports
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .context("reading CSV header row")?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record =
                result.with_context(|| format!("CSV parse error at record {}", idx))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Table { headers, rows })
    }

    /// Index of the first header equal to `name`. Callers that clean headers
    /// first should search their cleaned copy instead.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Field access tolerant of short rows from flexible parsing.
pub fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Write `headers` + `rows` as a CSV file. The writer rejects rows whose
/// field count differs from the header row, so arity drift in a passthrough
/// dataset surfaces as a hard failure here.
pub fn write_csv(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    wtr.write_record(headers)
        .with_context(|| format!("writing header row to {}", path.display()))?;
    for (idx, row) in rows.iter().enumerate() {
        wtr.write_record(row)
            .with_context(|| format!("writing record {} to {}", idx, path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
