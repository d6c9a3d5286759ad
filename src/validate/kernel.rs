//! Kernel matrix validation.

use super::{check_cell, label_text};
use crate::error::{Axis, Result, ValidationError};
use crate::primitives::{is_missing_label, Element, LabeledMatrix};
use std::collections::HashSet;
use tracing::debug;

const INPUT: &str = "k";

/// Check that `k` is a formally valid diffusion kernel.
///
/// Positive semi-definiteness is not checked.
///
/// Checks, in order:
/// 1. the backing store is floating-point or integer
/// 2. the matrix is square
/// 3. row labels and column labels are present
/// 4. row labels equal column labels, position by position
/// 5. every cell is numeric, not missing and not NaN, and its labels are present
/// 6. no row label and no column label appears twice
///
/// # Errors
///
/// Returns the first violated invariant. A non-square kernel reports both
/// dimensions.
///
/// # Examples
///
/// ```
/// use diffusion_gate::prelude::*;
///
/// let mat = Matrix::<f64>::zeros(3, 4);
/// let k = LabeledMatrix::with_labels(mat, ["A", "B", "C"], ["A", "B", "C", "D"])
///     .expect("labels fit");
///
/// let msg = validate_kernel(&k).expect_err("3x4 is not square").to_string();
/// assert!(msg.contains('3') && msg.contains('4'));
/// ```
pub fn validate_kernel<T: Element>(k: &LabeledMatrix<T>) -> Result<()> {
    let (rows, cols) = k.shape();
    debug!(rows, cols, "validating kernel");

    let dtype = k.dtype();
    if !dtype.is_numeric() {
        return Err(ValidationError::NonNumericDType {
            input: INPUT,
            dtype,
        });
    }

    if rows != cols {
        return Err(ValidationError::NotSquare { rows, cols });
    }

    if k.row_labels().is_empty() {
        return Err(ValidationError::EmptyLabels {
            input: INPUT,
            axis: Axis::Row,
        });
    }
    if k.col_labels().is_empty() {
        return Err(ValidationError::EmptyLabels {
            input: INPUT,
            axis: Axis::Column,
        });
    }

    if let Some(position) = first_label_mismatch(k.row_labels(), k.col_labels()) {
        return Err(ValidationError::LabelMismatch {
            position,
            row: label_text(k.row_label(position)),
            col: label_text(k.col_label(position)),
        });
    }

    for (i, (value, col_label, row_label)) in k.cells().enumerate() {
        check_cell(INPUT, value.classify(), col_label, row_label)?;
        if is_missing_label(col_label) {
            return Err(ValidationError::MissingLabel {
                input: INPUT,
                axis: Axis::Column,
                index: i % cols,
            });
        }
        if is_missing_label(row_label) {
            return Err(ValidationError::MissingLabel {
                input: INPUT,
                axis: Axis::Row,
                index: i / cols,
            });
        }
    }

    if let Some(label) = first_duplicate(k.row_labels()) {
        return Err(ValidationError::DuplicateLabel {
            axis: Axis::Row,
            label,
        });
    }
    if let Some(label) = first_duplicate(k.col_labels()) {
        return Err(ValidationError::DuplicateLabel {
            axis: Axis::Column,
            label,
        });
    }

    Ok(())
}

/// First label that repeats an earlier one.
fn first_duplicate(labels: &[Option<String>]) -> Option<String> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels
        .iter()
        .map(Option::as_deref)
        .find(|label| !seen.insert(*label))
        .map(label_text)
}

/// Index of the first position where the two label lists differ.
///
/// Lists of different lengths differ at the end of the shorter one.
fn first_label_mismatch(rows: &[Option<String>], cols: &[Option<String>]) -> Option<usize> {
    rows.iter()
        .zip(cols)
        .position(|(row, col)| row != col)
        .or_else(|| (rows.len() != cols.len()).then_some(rows.len().min(cols.len())))
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
