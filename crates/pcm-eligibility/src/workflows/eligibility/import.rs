use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::ExperienceSubmission;

#[derive(Debug)]
pub enum ExperienceImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidFlag { line: u64, value: String },
}

impl std::fmt::Display for ExperienceImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceImportError::Io(err) => write!(f, "failed to read experience file: {}", err),
            ExperienceImportError::Csv(err) => write!(f, "invalid experience CSV data: {}", err),
            ExperienceImportError::InvalidFlag { line, value } => write!(
                f,
                "line {}: reported flag '{}' is not one of yes/y/true/1/済 or no/n/false/0/未",
                line, value
            ),
        }
    }
}

impl std::error::Error for ExperienceImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExperienceImportError::Io(err) => Some(err),
            ExperienceImportError::Csv(err) => Some(err),
            ExperienceImportError::InvalidFlag { .. } => None,
        }
    }
}

impl From<std::io::Error> for ExperienceImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExperienceImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct ExperienceRow {
    facility: String,
    start: String,
    #[serde(default)]
    end: String,
    reported: String,
}

/// Reads `facility,start,end,reported` rows into unvalidated submissions.
///
/// Rows are returned in file order; validation happens when they are recorded.
pub struct ExperienceCsvImporter;

impl ExperienceCsvImporter {
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Vec<ExperienceSubmission>, ExperienceImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ExperienceSubmission>, ExperienceImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut submissions = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);
            let row: ExperienceRow = record.deserialize(Some(&headers))?;
            let reporting_compliant =
                parse_flag(&row.reported).ok_or_else(|| ExperienceImportError::InvalidFlag {
                    line,
                    value: row.reported.clone(),
                })?;

            submissions.push(ExperienceSubmission {
                facility_name: row.facility,
                start_date: row.start,
                end_marker: row.end,
                reporting_compliant,
            });
        }

        Ok(submissions)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "済" => Some(true),
        "no" | "n" | "false" | "0" | "未" => Some(false),
        _ => None,
    }
}
