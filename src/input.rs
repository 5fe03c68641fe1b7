use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::session::SessionPoint;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read session data: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON session data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV session data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: Option<String>,
    score: Option<f64>,
}

impl From<CsvRow> for SessionPoint<Value> {
    fn from(row: CsvRow) -> Self {
        SessionPoint {
            score: row.score,
            timestamp: row.timestamp.map(Value::String),
        }
    }
}

pub fn read_session<R: Read>(
    reader: R,
    format: InputFormat,
) -> Result<Vec<SessionPoint<Value>>, InputError> {
    let points: Vec<SessionPoint<Value>> = match format {
        InputFormat::Json => serde_json::from_reader(reader)?,
        InputFormat::Csv => csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader)
            .deserialize::<CsvRow>()
            .map(|row| row.map(SessionPoint::from))
            .collect::<Result<Vec<_>, _>>()?,
    };

    log::debug!("loaded {} session points as {}", points.len(), format);
    Ok(points)
}

/// Load a session file; the format is inferred from the extension when not given.
pub fn load_session<P: AsRef<Path>>(
    path: P,
    format: Option<InputFormat>,
) -> Result<Vec<SessionPoint<Value>>, InputError> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(&path));
    let file = File::open(path)?;
    read_session(BufReader::new(file), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path("a/b.csv"), InputFormat::Csv);
        assert_eq!(InputFormat::from_path("b.CSV"), InputFormat::Csv);
        assert_eq!(InputFormat::from_path("b.json"), InputFormat::Json);
        assert_eq!(InputFormat::from_path("b"), InputFormat::Json);
    }

    #[test]
    fn json_tolerates_missing_and_extra_fields() {
        let data = r#"[
            {"score": 0.9, "timestamp": "2024-01-01T00:00:00Z", "user": "a"},
            {"timestamp": 17},
            {"score": null},
            {}
        ]"#;
        let points = read_session(data.as_bytes(), InputFormat::Json).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].score, Some(0.9));
        assert_eq!(points[1].timestamp, Some(json!(17)));
        assert_eq!(points[1].score, None);
        assert_eq!(points[2].score, None);
        assert_eq!(points[3].timestamp, None);
    }

    #[test]
    fn json_rejects_non_array() {
        assert_matches!(
            read_session(r#"{"score": 1}"#.as_bytes(), InputFormat::Json),
            Err(InputError::Json(_))
        );
    }

    #[test]
    fn csv_empty_score_is_missing() {
        let data = "timestamp,score\nt0,10\nt1,\nt2, 2.5\n";
        let points = read_session(data.as_bytes(), InputFormat::Csv).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].timestamp, Some(json!("t0")));
        assert_eq!(points[1].score, None);
        assert_eq!(points[2].score, Some(2.5));
    }

    #[test]
    fn csv_rejects_bad_score() {
        let data = "timestamp,score\nt0,high\n";
        assert_matches!(
            read_session(data.as_bytes(), InputFormat::Csv),
            Err(InputError::Csv(_))
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert_matches!(
            load_session(dir.path().join("nope.json"), None),
            Err(InputError::Io(_))
        );
    }

    #[test]
    fn load_infers_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.csv");
        std::fs::write(&path, "timestamp,score\na,1\nb,0\n").unwrap();
        let points = load_session(&path, None).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].score, Some(0.0));
    }
}
