//! Discovery of RAW data files for numbered experiment runs.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Where run data lives on disk and which campaign date is baked into the
/// run directory names.
///
/// Runs are laid out as `<data_path>/run_<DD_MM_YYYY>_<run_nmr>/RAW/`, one
/// file per acquisition segment inside `RAW/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDataLayout {
    /// Dataset root containing the run directories.
    pub data_path: PathBuf,
    /// Campaign date used in the run directory names.
    pub run_date: NaiveDate,
}

impl Default for RunDataLayout {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("."),
            run_date: default_run_date(),
        }
    }
}

impl RunDataLayout {
    /// Layout rooted at `data_path`, with the default campaign date.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }

    /// List the RAW files of run `run_nmr` with the given file extension,
    /// sorted.
    ///
    /// A missing run directory (or no matching files) yields an empty list;
    /// unreadable directory entries are skipped with a warning.
    pub fn raw_files(&self, run_nmr: u32, extension: &str) -> Result<Vec<PathBuf>, Error> {
        let pattern = format!(
            "{}/run_{}_{}/RAW/*.{}",
            self.data_path.display(),
            self.run_date.format("%d_%m_%Y"),
            run_nmr,
            extension
        );
        log::debug!("scanning {pattern}");

        let mut paths = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => log::warn!("skipping unreadable entry: {e}"),
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// The 2024-06-25 measurement campaign the default directory names refer to.
fn default_run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 25).expect("valid campaign date")
}
