//! # Rescale
//!
//! Rescales a pair of numbers in place: the first becomes their scaled sum, the
//! second their scaled difference.
//!
//! Input that is not two real numbers is rejected by [`parse_pair`] with a
//! [`ParseError`], nothing gets rescaled then.
//!
//! ```rust
//! let (mut a, mut b) = (2.0_f32, 3.0_f32);
//! rescale::update_scale_default(&mut a, &mut b);
//!
//! assert_eq!(rescale::format_real(a, 7, 3), " 50.000");
//! assert_eq!(rescale::format_real(b, 7, 3), "-10.000");
//! ```

use std::num::ParseFloatError;
use std::ops::{Add, Mul, Sub};

use log::debug;
use thiserror::Error;

/// factor used by [`update_scale_default`]
pub const DEFAULT_FACTOR: u8 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Represents input with less than two numbers
    #[error("Expected two real numbers but found {0}")]
    Missing(usize),

    /// Represents a token that is no real number
    #[error("Not a real number: {token:?}")]
    InvalidNumber {
        token: String,
        source: ParseFloatError,
    },
}

/// Sets `m1` to `(m1 + m2) * factor` and `m2` to `(m1 - m2) * factor`, both computed
/// from the values before the call.
///
/// Integer types follow the usual overflow rules of their arithmetic operators.
pub fn update_scale<T>(m1: &mut T, m2: &mut T, factor: T)
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    let (a, b) = (*m1, *m2);
    *m1 = (a + b) * factor;
    *m2 = (a - b) * factor;
}

/// [`update_scale`] with [`DEFAULT_FACTOR`]
pub fn update_scale_default<T>(m1: &mut T, m2: &mut T)
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + From<u8>,
{
    update_scale(m1, m2, T::from(DEFAULT_FACTOR));
}

/// Fixed point notation with `precision` decimals, right aligned in `width` columns.
pub fn format_real(value: f32, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}

/// reads the first two real numbers from whitespace separated `text`
pub fn parse_pair(text: &str) -> Result<(f32, f32), ParseError> {
    let mut numbers = text.split_whitespace().take(2).map(|token| {
        token
            .parse::<f32>()
            .map_err(|source| ParseError::InvalidNumber {
                token: token.to_string(),
                source,
            })
    });

    match (numbers.next(), numbers.next()) {
        (Some(a), Some(b)) => {
            let pair = (a?, b?);
            debug!("parsed pair {pair:?}");
            Ok(pair)
        }
        (Some(a), None) => {
            a?;
            Err(ParseError::Missing(1))
        }
        _ => Err(ParseError::Missing(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_scale_sum_and_difference() {
        let (mut a, mut b) = (2.0_f32, 3.0_f32);
        update_scale(&mut a, &mut b, 10.0);

        assert_eq!((a, b), (50.0, -10.0));
    }

    #[test]
    fn should_use_factor_ten_by_default() {
        let (mut a, mut b) = (2_i32, 3_i32);
        update_scale_default(&mut a, &mut b);
        assert_eq!((a, b), (50, -10));

        let (mut a, mut b) = (1.5_f64, 0.5_f64);
        update_scale_default(&mut a, &mut b);
        assert_eq!((a, b), (20.0, 10.0));
    }

    #[test]
    fn should_use_the_original_values_for_both_results() {
        let (mut a, mut b) = (7_i64, 7_i64);
        update_scale(&mut a, &mut b, 3);

        assert_eq!((a, b), (42, 0));
    }

    #[test]
    fn should_format_like_fixed_setw_setprecision() {
        assert_eq!(format_real(3.14159, 7, 3), "  3.142");
        assert_eq!(format_real(-2.5, 7, 3), " -2.500");
        assert_eq!(format_real(12345.678, 7, 3), "12345.678");
        assert_eq!(format_real(0.0, 0, 0), "0");
    }

    #[test]
    fn should_parse_two_numbers() {
        assert_eq!(parse_pair(" 1.25\n-4 ignored"), Ok((1.25, -4.0)));
    }

    #[test]
    fn should_complain_about_missing_numbers() {
        assert_eq!(parse_pair(""), Err(ParseError::Missing(0)));
        assert_eq!(parse_pair("  7 "), Err(ParseError::Missing(1)));
    }

    #[test]
    fn should_complain_about_invalid_numbers() {
        match parse_pair("1 two") {
            Err(ParseError::InvalidNumber { token, .. }) => assert_eq!(token, "two"),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
