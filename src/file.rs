// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use serde::Serialize;

use crate::{
    analyze::{ Analysis, PlayerRow },
    config::options::{ ExportFormat, ExportOptions, Layout },
    error::ExportError,
    specs::SkippedLine,
    table::TableData,
};

/// Delimited text (CSV/TSV) from a table, optional header row.
pub fn to_delimited(table: &TableData, include_headers: bool, delim: u8) -> Result<String, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .from_writer(Vec::new());

    if include_headers {
        if let Some(h) = &table.headers {
            wtr.write_record(h)?;
        }
    }
    for r in &table.rows {
        wtr.write_record(r)?;
    }

    let buf = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[derive(Serialize)]
struct JsonExport<'a> {
    layout: Layout,
    max_confidence: u32,
    total_points_possible: u32,
    rows: &'a [PlayerRow],
    skipped: &'a [SkippedLine],
}

pub fn to_json(analysis: &Analysis) -> Result<String, ExportError> {
    let doc = JsonExport {
        layout: analysis.layout,
        max_confidence: analysis.week.max_confidence(),
        total_points_possible: analysis.total_points_possible(),
        rows: &analysis.rows,
        skipped: &analysis.skipped,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Create a full export string (Copy/Export) in the configured format.
pub fn to_export_string(export: &ExportOptions, analysis: &Analysis) -> Result<String, ExportError> {
    if analysis.rows.is_empty() {
        return Err(ExportError::Empty);
    }
    match export.format.delimiter() {
        Some(delim) => to_delimited(&TableData::from_analysis(analysis), export.include_headers, delim),
        None => to_json(analysis),
    }
}

/// Write the export file to `export.out_path()`, creating parent dirs.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, analysis: &Analysis) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    let contents = to_export_string(export, analysis)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)?;
    logf!("Export: wrote {} ({:?}, {} rows)", path.display(), export.format, analysis.rows.len());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Format picked from a file extension, if it is one we write.
pub fn format_for_path(path: &Path) -> Option<ExportFormat> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "csv" => Some(ExportFormat::Csv),
        "tsv" | "tab" => Some(ExportFormat::Tsv),
        "json" => Some(ExportFormat::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_with_delimiters() {
        let table = TableData::with(
            Some(vec![s!("Name"), s!("Points Remaining")]),
            vec![vec![s!("Smith, J"), s!("7")]],
        );
        let csv = to_delimited(&table, true, b',').unwrap();
        assert_eq!(csv, "Name,Points Remaining\n\"Smith, J\",7\n");

        let tsv = to_delimited(&table, false, b'\t').unwrap();
        assert_eq!(tsv, "Smith, J\t7\n");
    }

    #[test]
    fn formats_from_extension() {
        assert_eq!(format_for_path(Path::new("a/b.TSV")), Some(ExportFormat::Tsv));
        assert_eq!(format_for_path(Path::new("b.json")), Some(ExportFormat::Json));
        assert_eq!(format_for_path(Path::new("b.txt")), None);
    }
}
