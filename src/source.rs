//! Loading company records.
//!
//! The backend exports companies as a JSON array of flat records. Fields
//! may be strings, numbers, booleans or null; nothing beyond that is
//! validated here, so a record with odd values still loads and simply
//! scores as undisclosed where it cannot be read.

use crate::core::{CompanyRecord, Error, Result};
use std::path::{Path, PathBuf};

/// Anything that can supply the full company list.
pub trait CompanySource {
    /// Load every company.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or is not a
    /// JSON array of objects.
    fn load(&self) -> Result<Vec<CompanyRecord>>;

    /// Human-readable name for log and error messages.
    fn describe(&self) -> String;
}

/// Company list stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompanySource for JsonFileSource {
    fn load(&self) -> Result<Vec<CompanyRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::file_system_io(&self.path, e))?;
        parse_companies(&content, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a JSON array of company records.
pub fn parse_companies(json: &str, source_name: &str) -> Result<Vec<CompanyRecord>> {
    let companies: Vec<CompanyRecord> =
        serde_json::from_str(json).map_err(|e| Error::company_data(source_name, e))?;

    log::info!("Loaded {} companies from {}", companies.len(), source_name);
    Ok(companies)
}
