//! Geometry, sequences, and a calculator that remembers what it did.

use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Area of a circle with the given radius.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] unless `radius > 0` (NaN included).
pub fn circle_area(radius: f64) -> Result<f64> {
    if radius.is_nan() || radius <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "radius must be greater than 0, got {radius}"
        )));
    }
    Ok(PI * radius * radius)
}

/// Longest sequence [`fibonacci`] can produce without leaving `u64`.
pub const MAX_FIBONACCI_LEN: usize = 94;

/// The first `n` Fibonacci numbers, starting `0, 1`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `n` exceeds [`MAX_FIBONACCI_LEN`],
/// i.e. some requested term does not fit in a `u64`.
pub fn fibonacci(n: usize) -> Result<Vec<u64>> {
    let mut out = Vec::with_capacity(n.min(MAX_FIBONACCI_LEN));
    let (mut current, mut next) = (Some(0_u64), Some(1_u64));
    for i in 0..n {
        let term = current.ok_or_else(|| {
            Error::InvalidArgument(format!(
                "fibonacci term {i} overflows u64; at most {MAX_FIBONACCI_LEN} terms fit"
            ))
        })?;
        out.push(term);
        let following = next.and_then(|b| b.checked_add(term));
        current = next;
        next = following;
    }
    Ok(out)
}

/// Largest element, or `None` when `values` is empty.
#[must_use]
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |max, &v| if v > max { v } else { max }))
}

/// Arithmetic with a history of every successful operation.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    /// A calculator with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    fn record(&mut self, a: f64, op: char, b: f64, result: f64) -> f64 {
        self.history.push(format!("{a} {op} {b} = {result}"));
        result
    }

    /// `a + b`.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record(a, '+', b, a + b)
    }

    /// `a - b`.
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.record(a, '-', b, a - b)
    }

    /// `a * b`.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record(a, '*', b, a * b)
    }

    /// `a / b`. Nothing is recorded on failure.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] when `b == 0`.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.record(a, '/', b, a / b))
    }

    /// A copy of the history, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.clone()
    }

    /// Forget every recorded operation.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
