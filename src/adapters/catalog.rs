use crate::domain::model::{CatalogColumns, CatalogRow};
use crate::utils::error::{HabitabilityError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::{Cursor, Read};
use zip::ZipArchive;

const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";
const MISSING_MARKERS: [&str; 6] = ["", "nan", "na", "n/a", "null", "none"];

/// 讀取目錄 (CSV 或 zip 壓縮的 CSV) 並轉成目錄列
pub fn parse_catalog(path: &str, bytes: &[u8], columns: &CatalogColumns) -> Result<Vec<CatalogRow>> {
    if bytes.starts_with(ZIP_SIGNATURE) {
        let csv_data = extract_first_csv(path, bytes)?;
        parse_csv(path, &csv_data, columns)
    } else {
        parse_csv(path, bytes, columns)
    }
}

fn extract_first_csv(path: &str, bytes: &[u8]) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| HabitabilityError::catalog_load(path, format!("invalid zip archive: {}", e)))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            HabitabilityError::catalog_load(path, format!("unreadable zip entry: {}", e))
        })?;
        if !entry.is_file() || !entry.name().to_ascii_lowercase().ends_with(".csv") {
            continue;
        }

        tracing::debug!("Reading catalog entry '{}' from archive", entry.name());
        let mut data = Vec::new();
        entry.read_to_end(&mut data).map_err(|e| {
            HabitabilityError::catalog_load(path, format!("failed to decompress catalog: {}", e))
        })?;
        return Ok(data);
    }

    Err(HabitabilityError::catalog_load(
        path,
        "zip archive does not contain a .csv file",
    ))
}

struct ColumnIndex {
    name: usize,
    radius: usize,
    period: usize,
    star_temp: usize,
    semi_major_axis: usize,
}

impl ColumnIndex {
    fn resolve(path: &str, headers: &StringRecord, columns: &CatalogColumns) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| {
                    HabitabilityError::catalog_load(
                        path,
                        format!("missing required column '{}'", column),
                    )
                })
        };

        Ok(Self {
            name: find(columns.name.as_str())?,
            radius: find(columns.radius.as_str())?,
            period: find(columns.period.as_str())?,
            star_temp: find(columns.star_temp.as_str())?,
            semi_major_axis: find(columns.semi_major_axis.as_str())?,
        })
    }
}

fn is_missing(cell: &str) -> bool {
    let lowered = cell.trim().to_ascii_lowercase();
    MISSING_MARKERS.contains(&lowered.as_str())
}

fn parse_number(path: &str, record: &StringRecord, index: usize, column: &str) -> Result<Option<f64>> {
    let cell = record.get(index).unwrap_or("");
    if is_missing(cell) {
        return Ok(None);
    }

    // "-nan" 之類的寫法也會解析成 NaN，視同缺值
    let value = cell.trim().parse::<f64>().map_err(|_| {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        HabitabilityError::catalog_load(
            path,
            format!("non-numeric value '{}' in column '{}' at line {}", cell, column, line),
        )
    })?;
    Ok((!value.is_nan()).then_some(value))
}

fn parse_csv(path: &str, data: &[u8], columns: &CatalogColumns) -> Result<Vec<CatalogRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| HabitabilityError::catalog_load(path, format!("unreadable header: {}", e)))?
        .clone();
    let index = ColumnIndex::resolve(path, &headers, columns)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| HabitabilityError::catalog_load(path, format!("malformed row: {}", e)))?;

        let name = record
            .get(index.name)
            .filter(|cell| !is_missing(cell))
            .map(|cell| cell.trim().to_string());

        rows.push(CatalogRow {
            name,
            radius: parse_number(path, &record, index.radius, &columns.radius)?,
            period: parse_number(path, &record, index.period, &columns.period)?,
            star_temp: parse_number(path, &record, index.star_temp, &columns.star_temp)?,
            semi_major_axis: parse_number(
                path,
                &record,
                index.semi_major_axis,
                &columns.semi_major_axis,
            )?,
        });
    }

    tracing::debug!("Parsed {} catalog rows from {}", rows.len(), path);
    Ok(rows)
}
