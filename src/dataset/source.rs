use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use crate::filter::City;
use crate::{BikeshareError, Result};

/// Supplies the raw CSV table for a city.
pub trait DataSource {
    /// Opens the table for `city`.
    ///
    /// # Errors
    /// Returns an error if the table cannot be opened.
    fn open(&self, city: City) -> Result<Box<dyn Read + '_>>;

    /// Where the table for `city` lives, for diagnostics.
    fn location(&self, city: City) -> String;
}

/// Reads `<dir>/<file>` per city, with optional per-city file overrides.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    files: HashMap<City, PathBuf>,
}

impl DirectorySource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: HashMap::new(),
        }
    }

    /// Overrides the file used for `city`. Relative paths resolve against the data dir.
    #[must_use]
    pub fn with_file(mut self, city: City, file: impl Into<PathBuf>) -> Self {
        self.files.insert(city, file.into());
        self
    }

    #[must_use]
    pub fn path_for(&self, city: City) -> PathBuf {
        self.files.get(&city).map_or_else(
            || self.dir.join(city.default_file()),
            |file| self.dir.join(file),
        )
    }
}

impl DataSource for DirectorySource {
    fn open(&self, city: City) -> Result<Box<dyn Read + '_>> {
        let path = self.path_for(city);
        let file = File::open(&path).map_err(|source| BikeshareError::DataSource {
            path: path.clone(),
            source,
        })?;
        Ok(Box::new(file))
    }

    fn location(&self, city: City) -> String {
        self.path_for(city).display().to_string()
    }
}

/// In-memory tables, keyed by city.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<City, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table(mut self, city: City, csv: impl Into<String>) -> Self {
        self.tables.insert(city, csv.into());
        self
    }
}

impl DataSource for MemorySource {
    fn open(&self, city: City) -> Result<Box<dyn Read + '_>> {
        let table = self
            .tables
            .get(&city)
            .ok_or_else(|| BikeshareError::DataSource {
                path: PathBuf::from(self.location(city)),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no table for city"),
            })?;
        Ok(Box::new(Cursor::new(table.as_bytes())))
    }

    fn location(&self, city: City) -> String {
        format!("memory:{city}")
    }
}
