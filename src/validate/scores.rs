//! Scores matrix validation.

use super::{check_cell, label_text};
use crate::error::{Axis, Result, ValidationError};
use crate::primitives::{is_missing_label, Element, LabeledMatrix};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const INPUT: &str = "scores";

/// Check that a scores matrix is suitable for diffusion.
///
/// Checks, in order:
/// 1. column labels and row labels are present
/// 2. the backing store is floating-point or integer
/// 3. every cell is numeric, not missing and not NaN, and its labels are present
/// 4. every column has a defined, non-zero standard deviation
///
/// # Errors
///
/// Returns the first violated invariant. Column statistics failures name
/// the offending column.
///
/// # Examples
///
/// ```
/// use diffusion_gate::prelude::*;
///
/// let mat = Matrix::from_vec(3, 2, vec![
///     1.0, 0.0,
///     1.0, 1.0,
///     1.0, 0.0,
/// ]).expect("3x2 data");
/// let scores = LabeledMatrix::with_labels(mat, ["A", "B", "C"], ["exp1", "exp2"])
///     .expect("labels fit");
///
/// let err = validate_scores(&scores).expect_err("exp1 is constant");
/// assert!(err.to_string().contains("exp1"));
/// ```
pub fn validate_scores<T: Element>(scores: &LabeledMatrix<T>) -> Result<()> {
    let (n_rows, n_cols) = scores.shape();
    debug!(rows = n_rows, cols = n_cols, "validating scores");

    if scores.col_labels().is_empty() {
        return Err(ValidationError::EmptyLabels {
            input: INPUT,
            axis: Axis::Column,
        });
    }
    if scores.row_labels().is_empty() {
        return Err(ValidationError::EmptyLabels {
            input: INPUT,
            axis: Axis::Row,
        });
    }

    let dtype = scores.dtype();
    if !dtype.is_numeric() {
        return Err(ValidationError::NonNumericDType {
            input: INPUT,
            dtype,
        });
    }

    for (i, (value, col_label, row_label)) in scores.cells().enumerate() {
        check_cell(INPUT, value.classify(), col_label, row_label)?;
        if is_missing_label(col_label) {
            return Err(ValidationError::MissingLabel {
                input: INPUT,
                axis: Axis::Column,
                index: i % n_cols,
            });
        }
        if is_missing_label(row_label) {
            return Err(ValidationError::MissingLabel {
                input: INPUT,
                axis: Axis::Row,
                index: i / n_cols,
            });
        }
    }

    for (col, sd) in column_std_devs(scores).into_iter().enumerate() {
        let column = label_text(scores.col_label(col));
        if sd.is_nan() {
            return Err(ValidationError::UndefinedStdDev { column });
        }
        if sd == 0.0 {
            return Err(ValidationError::ZeroStdDev { column });
        }
    }

    Ok(())
}

/// Numeric values of one column, top to bottom.
fn column_values<T: Element>(scores: &LabeledMatrix<T>, col: usize) -> Vec<f64> {
    scores
        .matrix()
        .column(col)
        .map(|v| v.classify().as_f64().unwrap_or(f64::NAN))
        .collect()
}

/// Population standard deviation of every column.
#[cfg(feature = "parallel")]
fn column_std_devs<T: Element>(scores: &LabeledMatrix<T>) -> Vec<f64> {
    let columns: Vec<Vec<f64>> = (0..scores.n_cols())
        .map(|col| column_values(scores, col))
        .collect();
    columns.par_iter().map(|values| std_dev(values)).collect()
}

/// Population standard deviation of every column.
#[cfg(not(feature = "parallel"))]
fn column_std_devs<T: Element>(scores: &LabeledMatrix<T>) -> Vec<f64> {
    (0..scores.n_cols())
        .map(|col| std_dev(&column_values(scores, col)))
        .collect()
}

/// Population (ddof = 0) standard deviation.
///
/// A constant finite column yields exactly `0.0`; the two-pass formula alone
/// can leave rounding residue for values such as `0.1`. Infinite values give
/// NaN.
fn std_dev(values: &[f64]) -> f64 {
    let Some(&first) = values.first() else {
        return f64::NAN;
    };
    if first.is_finite() && values.iter().all(|&x| x == first) {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
#[path = "scores_tests.rs"]
mod tests;
