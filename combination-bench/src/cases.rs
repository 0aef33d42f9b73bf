use crate::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
  pub label: String,
  pub elements: Vec<Element>,
  pub r: usize,
}

impl TestCase {
  /// Chooses `r` of the elements `1..=n`.
  pub fn one_to(label: impl Into<String>, n: usize, r: usize) -> Self {
    Self {
      label: label.into(),
      elements: (1..=n as Element).collect(),
      r,
    }
  }
  pub fn n(&self) -> usize {
    self.elements.len()
  }
}

const BASIC: [(usize, usize); 9] = [
  (4, 2),
  (3, 2),
  (5, 2),
  (4, 3),
  (5, 3),
  (6, 2),
  (6, 3),
  (5, 4),
  (6, 4),
];

const EXTRA: [(usize, usize); 4] = [(10, 5), (12, 6), (15, 7), (18, 9)];

pub const STEPS_INITIAL: [Element; 4] = [1, 2, 3, 4];
pub const STEPS_TARGET: [Element; 4] = [4, 3, 2, 1];

pub fn basic_cases() -> Vec<TestCase> {
  BASIC
    .iter()
    .enumerate()
    .map(|(idx, (n, r))| TestCase::one_to(format!("Test Case {}", idx + 1), *n, *r))
    .collect()
}

/// Large cases; C(18,9) alone prints 48620 lines.
pub fn extra_cases() -> Vec<TestCase> {
  EXTRA
    .iter()
    .enumerate()
    .map(|(idx, (n, r))| {
      TestCase::one_to(
        format!("Extra Test Case {}", BASIC.len() + idx + 1),
        *n,
        *r,
      )
    })
    .collect()
}
