//! JSON dataset loading
//!
//! The dataset is a single JSON array of [`GeoEntry`] objects with camelCase
//! keys (`provinceNameEn`, `subdistrictNameTh`, ...). A missing file, bad
//! JSON or a dataset with no usable record is a
//! [`SuggestError::DataLoadError`]; a failed load is meant to abort startup.

use crate::error::{Result, SuggestError};
use crate::flat::FlatMatcher;
use crate::region::GeoEntry;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl FlatMatcher {
    /// Parses a JSON array of records from `reader` and builds the matcher.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<GeoEntry> = serde_json::from_reader(reader)?;
        Self::build(records)
    }

    /// Parses a JSON array of records from a string.
    ///
    /// ```rust
    /// use thaigeo::FlatMatcher;
    ///
    /// let matcher = FlatMatcher::from_json_str(
    ///     r#"[{"id": 1, "provinceNameEn": "Nonthaburi", "provinceNameTh": "นนทบุรี"}]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(matcher.search("นนท").len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<GeoEntry> = serde_json::from_str(json)?;
        Self::build(records)
    }

    /// Reads the dataset file at `path`.
    ///
    /// ```rust,no_run
    /// # fn main() -> thaigeo::Result<()> {
    /// let matcher = thaigeo::FlatMatcher::from_path("data/geography.json")?;
    /// for s in matcher.search("chiang") {
    ///     println!("{} ({})", s.full_display_name, s.postal_code);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SuggestError::DataLoadError(format!("dataset not found at {}: {}", path.display(), e))
        })?;

        let matcher = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} location records from {}",
            matcher.len(),
            path.display()
        );
        Ok(matcher)
    }
}
