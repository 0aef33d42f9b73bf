use std::{
  fs::OpenOptions,
  path::{Path, PathBuf},
};

use csv::WriterBuilder;
use thiserror::Error;

use crate::RunResult;

pub const HEADER: [&str; 4] = [
  "n_elements",
  "r_combination_size",
  "combinations_count",
  "execution_time_microseconds",
];

#[derive(Debug, Error)]
pub enum ResultLogError {
  #[error("i/o error on {path}: {source}")]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
  #[error("csv error on {path}: {source}")]
  Csv { path: PathBuf, source: csv::Error },
}

/// Append-only CSV file with one header row followed by one row per [`RunResult`].
#[derive(Debug, Clone)]
pub struct ResultLog {
  path: PathBuf,
}

impl ResultLog {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Truncates the file and writes the header row.
  pub fn init(&self) -> Result<(), ResultLogError> {
    let mut writer = WriterBuilder::new()
      .has_headers(false)
      .from_path(&self.path)
      .map_err(|source| self.csv_error(source))?;
    writer
      .write_record(HEADER)
      .map_err(|source| self.csv_error(source))?;
    writer.flush().map_err(|source| self.io_error(source))
  }

  /// Appends and flushes one row. The file must already exist, so that rows never land in a file
  /// without a header.
  pub fn append(&self, result: &RunResult) -> Result<(), ResultLogError> {
    let file = OpenOptions::new()
      .append(true)
      .open(&self.path)
      .map_err(|source| self.io_error(source))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer
      .serialize(result)
      .map_err(|source| self.csv_error(source))?;
    writer.flush().map_err(|source| self.io_error(source))
  }

  fn io_error(&self, source: std::io::Error) -> ResultLogError {
    ResultLogError::Io {
      path: self.path.clone(),
      source,
    }
  }

  fn csv_error(&self, source: csv::Error) -> ResultLogError {
    ResultLogError::Csv {
      path: self.path.clone(),
      source,
    }
  }
}
