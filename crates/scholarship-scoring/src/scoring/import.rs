//! CSV intake of applications for batch scoring.
//!
//! Expected header:
//! `application_id,full_name,email,average_grade,baccalaureate_mention,family_income,number_of_dependents,has_disability,motivation_letter`.
//! Empty cells are read as absent values.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Applicant, ApplicantRecord, ApplicationId, BaccalaureateMention};
use super::repository::{ApplicantRepository, RepositoryError};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
    Repository(RepositoryError),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read applicant export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
            ImportError::InvalidRow { line, reason } => {
                write!(f, "invalid applicant row on line {}: {}", line, reason)
            }
            ImportError::Repository(err) => write!(f, "could not store applicant: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::InvalidRow { .. } => None,
            ImportError::Repository(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>, ImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Applicant>, ImportError> {
        Ok(Self::read_rows(reader)?
            .into_iter()
            .map(|(_, applicant)| applicant)
            .collect())
    }

    /// Parse `reader` and insert every applicant, returning how many were stored.
    ///
    /// Duplicate identifiers, within the export or against stored applicants,
    /// are rejected before anything is inserted.
    pub fn load_into<R, S>(repository: &S, reader: R) -> Result<usize, ImportError>
    where
        R: Read,
        S: ApplicantRepository + ?Sized,
    {
        let rows = Self::read_rows(reader)?;

        let mut seen = HashSet::new();
        for (line, applicant) in &rows {
            let id = &applicant.application_id;
            if !seen.insert(id) {
                return Err(ImportError::InvalidRow {
                    line: *line,
                    reason: format!("duplicate application_id '{id}'"),
                });
            }
            if repository.fetch(id)?.is_some() {
                return Err(ImportError::Repository(RepositoryError::Conflict));
            }
        }

        let count = rows.len();
        for (_, applicant) in rows {
            repository.insert(applicant)?;
        }
        Ok(count)
    }

    fn read_rows<R: Read>(reader: R) -> Result<Vec<(u64, Applicant)>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut rows = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let mut row: ApplicantRow = record.deserialize(Some(&headers))?;
            row.line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let line = row.line;
            rows.push((line, row.into_applicant()?));
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    #[serde(skip)]
    line: u64,
    application_id: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    average_grade: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    baccalaureate_mention: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    family_income: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    number_of_dependents: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_disability: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    motivation_letter: Option<String>,
}

impl ApplicantRow {
    fn into_applicant(self) -> Result<Applicant, ImportError> {
        let line = self.line;
        let invalid = |reason: String| ImportError::InvalidRow { line, reason };

        if self.application_id.is_empty() {
            return Err(invalid("missing application_id".to_string()));
        }

        let average_grade = self
            .average_grade
            .map(|raw| {
                raw.replace(',', ".")
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("average_grade '{raw}' is not a number")))
            })
            .transpose()?;

        let baccalaureate_mention = self
            .baccalaureate_mention
            .map(|raw| {
                raw.parse::<BaccalaureateMention>()
                    .map_err(|err| invalid(err.to_string()))
            })
            .transpose()?;

        let family_income = self
            .family_income
            .map(|raw| {
                parse_amount(&raw)
                    .ok_or_else(|| invalid(format!("family_income '{raw}' is not an amount")))
            })
            .transpose()?;

        let number_of_dependents = self
            .number_of_dependents
            .map(|raw| {
                raw.parse::<u32>()
                    .map_err(|_| invalid(format!("number_of_dependents '{raw}' is not a count")))
            })
            .transpose()?;

        let has_disability = match self.has_disability {
            None => false,
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| invalid(format!("has_disability '{raw}' is not a yes/no value")))?,
        };

        let record = ApplicantRecord {
            average_grade,
            baccalaureate_mention,
            family_income,
            number_of_dependents,
            has_disability,
            motivation_letter: self.motivation_letter,
        };

        Ok(Applicant::new(
            ApplicationId(self.application_id),
            self.full_name,
            self.email,
            record,
        ))
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Whole currency units; a zero fractional part such as `1500000.00` is accepted.
fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '_').collect();
    let (whole, fraction) = match cleaned.split_once(['.', ',']) {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };
    if !fraction.chars().all(|c| c == '0') {
        return None;
    }
    whole.parse::<u64>().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "oui" => Some(true),
        "0" | "false" | "no" | "n" | "non" => Some(false),
        _ => None,
    }
}
