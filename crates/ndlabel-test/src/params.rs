//! Regression test parameters and operations

use std::fmt::Debug;

use ndarray::{ArrayBase, Data, Dimension};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results with expected values (default)
    #[default]
    Compare,
    /// Compare and also print the compared arrays
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognized means compare
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "label")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "label")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance configured based on the `REGTEST_MODE`
    /// environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two arrays for exact equality of shape and elements
    ///
    /// # Returns
    ///
    /// `true` if the arrays are identical, `false` otherwise.
    pub fn compare_arrays<S1, S2, D, A>(
        &mut self,
        expected: &ArrayBase<S1, D>,
        actual: &ArrayBase<S2, D>,
    ) -> bool
    where
        S1: Data<Elem = A>,
        S2: Data<Elem = A>,
        D: Dimension,
        A: PartialEq + Debug,
    {
        self.index += 1;

        if self.display() {
            eprintln!("[{}] expected:\n{:?}", self.index, expected);
            eprintln!("[{}] actual:\n{:?}", self.index, actual);
        }

        if expected.shape() != actual.shape() {
            let msg = format!(
                "Failure in {}_reg: array comparison for index {} - shape mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            );
            return self.fail(msg);
        }

        let first_diff = expected
            .indexed_iter()
            .zip(actual.iter())
            .find(|((_, e), a)| e != a);
        match first_diff {
            Some(((pos, e), a)) => {
                let msg = format!(
                    "Failure in {}_reg: array comparison for index {} - element mismatch at {:?}: \
                     expected {:?}, actual {:?}",
                    self.test_name, self.index, pos, e, a
                );
                self.fail(msg)
            }
            None => true,
        }
    }

    /// Compare two boolean masks, reporting how many elements differ
    ///
    /// # Returns
    ///
    /// `true` if the masks are identical, `false` otherwise.
    pub fn compare_masks<S1, S2, D>(
        &mut self,
        expected: &ArrayBase<S1, D>,
        actual: &ArrayBase<S2, D>,
    ) -> bool
    where
        S1: Data<Elem = bool>,
        S2: Data<Elem = bool>,
        D: Dimension,
    {
        self.index += 1;

        if expected.shape() != actual.shape() {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - shape mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            );
            return self.fail(msg);
        }

        let differing = expected
            .iter()
            .zip(actual.iter())
            .filter(|(e, a)| e != a)
            .count();

        if self.display() {
            eprintln!(
                "[{}] mask: {} set expected, {} set actual",
                self.index,
                expected.iter().filter(|&&v| v).count(),
                actual.iter().filter(|&&v| v).count()
            );
        }

        if differing > 0 {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - {} of {} elements differ",
                self.test_name,
                self.index,
                differing,
                expected.len()
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Record a boolean check
    ///
    /// # Arguments
    ///
    /// * `what` - Short description used in the failure message
    /// * `ok` - Outcome of the check
    pub fn check(&mut self, what: &str, ok: bool) -> bool {
        self.index += 1;
        if ok {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg)
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
