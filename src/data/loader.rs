use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use super::model::{Column, ShapeError, Table, Value};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Cell texts read as missing values, following the usual dataframe defaults.
const NULL_TOKENS: &[&str] = &["", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("the file has no header row")]
    MissingHeader,
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch a CSV over HTTP(S) and parse it. Blocks until the whole body is in.
pub fn load_remote(url: &str) -> Result<Table, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes()?;
    let table = load_uploaded(&body)?;
    log::info!(
        "Fetched {url}: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

/// Parse an in-memory CSV payload, e.g. the bytes of an uploaded file.
pub fn load_uploaded(bytes: &[u8]) -> Result<Table, LoadError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    parse_csv(bytes)
}

/// Read a CSV file from disk and parse it.
pub fn load_path(path: &Path) -> Result<Table, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_uploaded(&bytes)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Header row first, comma separated. Every record must have exactly as
/// many fields as the header; anything else fails the whole load.
fn parse_csv<R: Read>(input: R) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::MissingHeader);
    }

    let mut columns: Vec<Column> = unique_headers(&headers)
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for result in reader.records() {
        let record = result?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.values.push(infer_value(field));
        }
    }

    Ok(Table::from_columns(columns)?)
}

/// Blank header cells become `Unnamed: <idx>`; repeated names get `.1`,
/// `.2`, … suffixes so every column stays addressable by name.
fn unique_headers(raw: &csv::StringRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();

    raw.iter()
        .enumerate()
        .map(|(idx, name)| {
            let base = if name.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.to_string()
            };
            let mut candidate = base.clone();
            while seen.contains(&candidate) {
                let n = suffixes.entry(base.clone()).or_insert(0);
                *n += 1;
                candidate = format!("{base}.{n}");
            }
            seen.insert(candidate.clone());
            candidate
        })
        .collect()
}

fn infer_value(field: &str) -> Value {
    let s = field.trim();
    if NULL_TOKENS.contains(&s) {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    match s {
        "true" | "True" | "TRUE" => Value::Bool(true),
        "false" | "False" | "FALSE" => Value::Bool(false),
        _ => Value::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(table: &Table) -> Vec<&str> {
        table.columns().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn parses_header_and_infers_types() {
        let csv = "region,kwh,peak,solar\nnorth,12,true,1.5\nsouth,7,False,\n";
        let table = load_uploaded(csv.as_bytes()).unwrap();

        assert_eq!(names(&table), ["region", "kwh", "peak", "solar"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("region").unwrap().values,
            [Value::Text("north".into()), Value::Text("south".into())]
        );
        assert_eq!(
            table.column("kwh").unwrap().values,
            [Value::Integer(12), Value::Integer(7)]
        );
        assert_eq!(
            table.column("peak").unwrap().values,
            [Value::Bool(true), Value::Bool(false)]
        );
        assert_eq!(
            table.column("solar").unwrap().values,
            [Value::Float(1.5), Value::Null]
        );
    }

    #[test]
    fn null_tokens_are_missing_values() {
        let table = load_uploaded(b"a\nNA\nNaN\nnull\n 3 \n").unwrap();
        assert_eq!(
            table.column("a").unwrap().values,
            [Value::Null, Value::Null, Value::Null, Value::Integer(3)]
        );
    }

    #[test]
    fn ragged_row_fails_the_whole_load() {
        let err = load_uploaded(b"a,b\n1,2\n3\n4,5\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn empty_payload_has_no_header() {
        let err = load_uploaded(b"").unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader), "got {err:?}");
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = load_uploaded(b"a,b\n1,\xff\xfe\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn header_only_gives_empty_table() {
        let table = load_uploaded(b"date,kwh\n").unwrap();
        assert_eq!(names(&table), ["date", "kwh"]);
        assert!(table.is_empty());
    }

    #[test]
    fn bom_is_stripped_from_first_header() {
        let table = load_uploaded(b"\xEF\xBB\xBFdate,kwh\n2020-01-01,4\n").unwrap();
        assert_eq!(names(&table), ["date", "kwh"]);
    }

    #[test]
    fn duplicate_and_blank_headers_are_made_unique() {
        let table = load_uploaded(b"kwh,kwh,,kwh\n1,2,3,4\n").unwrap();
        assert_eq!(names(&table), ["kwh", "kwh.1", "Unnamed: 2", "kwh.2"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn refused_connection_is_fetch_error() {
        let err = load_remote("http://127.0.0.1:1/energy.csv").unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)), "got {err:?}");
    }
}
