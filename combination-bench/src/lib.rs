pub mod cases;
pub mod resultlog;

use std::{
  fmt::Display,
  io::Write,
  path::PathBuf,
  time::{Duration, Instant},
};

use combinations::{binomial, min_adjacent_swaps, EnumerationError};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  cases::{basic_cases, extra_cases, TestCase, STEPS_INITIAL, STEPS_TARGET},
  resultlog::ResultLog,
};

pub type Element = i64;

pub const DEFAULT_LOG_PATH: &str = "combination_results.csv";

#[derive(Debug, Clone)]
pub struct BenchConfig {
  pub log_path: PathBuf,
  pub extra: bool,
  pub steps: bool,
}

impl Default for BenchConfig {
  fn default() -> Self {
    Self {
      log_path: PathBuf::from(DEFAULT_LOG_PATH),
      extra: false,
      steps: true,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
  #[serde(rename = "n_elements")]
  pub n: usize,
  #[serde(rename = "r_combination_size")]
  pub r: usize,
  #[serde(rename = "combinations_count")]
  pub count: usize,
  #[serde(rename = "execution_time_microseconds")]
  pub elapsed_microseconds: u64,
}

#[derive(Debug, Error)]
pub enum HarnessError {
  #[error(transparent)]
  Enumeration(#[from] EnumerationError),
  #[error("failed to write report: {0}")]
  Output(#[from] std::io::Error),
}

/// Whole microseconds, rounded down.
pub fn whole_micros(elapsed: Duration) -> u64 {
  u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn spaced<T: Display>(items: &[T]) -> String {
  items
    .iter()
    .map(|it| it.to_string())
    .collect::<Vec<_>>()
    .join(" ")
}

fn concatenated<T: Display>(items: &[T]) -> String {
  items.iter().fold(String::new(), |mut acc, it| {
    acc.push_str(&it.to_string());
    acc
  })
}

/// Owns the report stream and the result log for the duration of a benchmark session.
pub struct Harness<W: Write> {
  out: W,
  log: ResultLog,
}

impl<W: Write> Harness<W> {
  /// Initializes (truncates) the result log before any case can run. A log that cannot be
  /// created is reported and the session continues without it.
  pub fn start(config: &BenchConfig, mut out: W) -> Result<Self, HarnessError> {
    let log = ResultLog::new(&config.log_path);
    match log.init() {
      Ok(()) => {
        info!("initialized result log at {}", log.path().display());
        writeln!(
          out,
          "CSV file '{}' initialized with headers.",
          log.path().display()
        )?;
      }
      Err(e) => {
        error!("{e}");
        writeln!(
          out,
          "Error: Could not create CSV file '{}'.",
          log.path().display()
        )?;
      }
    }
    Ok(Self { out, log })
  }

  pub fn log(&self) -> &ResultLog {
    &self.log
  }

  pub fn into_output(self) -> W {
    self.out
  }

  /// Times the full materialization of every r-element combination of `elements`, reports them,
  /// and appends the measurement to the result log.
  pub fn run_case(&mut self, elements: &[Element], r: usize) -> Result<RunResult, HarnessError> {
    let n = elements.len();
    writeln!(self.out, "\n=== GENERATING COMBINATIONS ===")?;
    writeln!(self.out, "Elements: {}", spaced(elements))?;
    writeln!(
      self.out,
      "Generating combinations of size {r} from {n} elements\n"
    )?;

    let start = Instant::now();
    let generated = combinations::generate(elements, r);
    let elapsed = start.elapsed();

    let generated = match generated {
      Ok(generated) => generated,
      Err(e) => {
        error!("skipping C({n},{r}): {e}");
        writeln!(self.out, "Error: {e}")?;
        return Err(e.into());
      }
    };
    let result = RunResult {
      n,
      r,
      count: generated.len(),
      elapsed_microseconds: whole_micros(elapsed),
    };
    debug!("C({n},{r}) generated in {elapsed:?}");
    check_count(&result);

    for (k, combination) in generated.iter().enumerate() {
      writeln!(self.out, "Combination {}: {}", k + 1, concatenated(combination))?;
    }
    writeln!(self.out, "\nTotal combinations found: {}", result.count)?;
    writeln!(
      self.out,
      "Execution time: {} microseconds",
      result.elapsed_microseconds
    )?;

    match self.log.append(&result) {
      Ok(()) => writeln!(
        self.out,
        "Results logged to CSV: n={}, r={}, count={}, time={} μs",
        result.n, result.r, result.count, result.elapsed_microseconds
      )?,
      Err(e) => {
        error!("{e}");
        writeln!(
          self.out,
          "Error: Could not open CSV file '{}' for writing.",
          self.log.path().display()
        )?;
      }
    }
    Ok(result)
  }

  /// Runs each case in order. A case with invalid parameters is skipped; only a failure to write
  /// the report stops the sequence.
  pub fn run_all(&mut self, cases: &[TestCase]) -> Result<Vec<RunResult>, HarnessError> {
    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
      writeln!(self.out, "\n--- {}: C({},{}) ---", case.label, case.n(), case.r)?;
      match self.run_case(&case.elements, case.r) {
        Ok(result) => results.push(result),
        Err(HarnessError::Enumeration(e)) => warn!("{}: {e}", case.label),
        Err(e) => return Err(e),
      }
    }
    Ok(results)
  }

  /// Reports every adjacent swap taken to turn `initial` into `target`. Returns the number of
  /// swaps.
  pub fn find_min_steps(
    &mut self,
    initial: &[Element],
    target: &[Element],
  ) -> Result<usize, HarnessError> {
    writeln!(self.out, "\n=== FINDING MINIMUM STEPS ===")?;
    writeln!(self.out, "Initial sequence: {}", spaced(initial))?;
    writeln!(self.out, "Target sequence:  {}", spaced(target))?;
    writeln!(self.out, "\nSearching for minimum steps...\n")?;
    let swaps = match min_adjacent_swaps(initial, target) {
      Ok(swaps) => swaps,
      Err(e) => {
        error!("{e}");
        writeln!(self.out, "Error: {e}")?;
        return Err(e.into());
      }
    };
    for (k, step) in swaps.steps.iter().enumerate() {
      writeln!(self.out, "Step {}: {}", k + 1, spaced(step))?;
    }
    writeln!(self.out, "\nMinimum steps required: {}", swaps.len())?;
    if swaps.reached {
      writeln!(self.out, "Successfully reached target sequence!")?;
    } else {
      warn!("adjacent swaps did not reach the target sequence");
      writeln!(
        self.out,
        "Warning: Could not reach target sequence with this approach."
      )?;
    }
    Ok(swaps.len())
  }
}

fn check_count(result: &RunResult) {
  match binomial(result.n as u64, result.r as u64) {
    Some(expected) if expected == result.count as u64 => {}
    Some(expected) => warn!(
      "C({},{}) should be {expected} but {} combinations were generated",
      result.n, result.r, result.count
    ),
    None => warn!(
      "C({},{}) does not fit in 64 bits; count not verified",
      result.n, result.r
    ),
  }
}

/// The full benchmark session: basic cases, optionally the extra performance cases, then the
/// adjacent-swap demo.
pub fn run<W: Write>(config: &BenchConfig, mut out: W) -> Result<Vec<RunResult>, HarnessError> {
  writeln!(out, "COMBINATION GENERATOR")?;
  writeln!(out, "=====================")?;
  let mut harness = Harness::start(config, out)?;

  writeln!(harness.out, "\n=== RUNNING MULTIPLE COMBINATION EXAMPLES ===")?;
  let mut results = harness.run_all(&basic_cases())?;
  writeln!(harness.out, "\n=== COMBINATION TESTING COMPLETED ===")?;
  writeln!(
    harness.out,
    "Results saved to: {}",
    harness.log.path().display()
  )?;

  if config.extra {
    writeln!(harness.out, "\n=== RUNNING EXTRA PERFORMANCE TESTS ===")?;
    writeln!(harness.out, "WARNING: These tests may take significant time!")?;
    results.extend(harness.run_all(&extra_cases())?);
    writeln!(harness.out, "\n=== EXTREME PERFORMANCE TESTING COMPLETED ===")?;
  }

  if config.steps {
    writeln!(harness.out, "\n=== RUNNING PERMUTATION EXAMPLE ===")?;
    harness.find_min_steps(&STEPS_INITIAL, &STEPS_TARGET)?;
  }

  writeln!(harness.out, "\n=== PROGRAM COMPLETED ===")?;
  info!("{} cases logged to {}", results.len(), config.log_path.display());
  Ok(results)
}
