//! Labeled matrix: a [`Matrix`] with ordered row and column labels.

use super::element::{DType, Element};
use super::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// A matrix whose rows and columns carry labels.
///
/// Scores matrices have one row per node and one column per score set;
/// kernels have one row and one column per node. A label may be `None`
/// (missing), and a label list may be empty (unnamed axis); both are
/// representable so that validators can reject them.
///
/// # Iteration order
///
/// [`LabeledMatrix::cells`] walks the matrix in row-major order: every
/// column of row 0, then every column of row 1, and so on.
///
/// # Examples
///
/// ```
/// use diffusion_gate::primitives::{LabeledMatrix, Matrix};
///
/// let mat = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2 data");
/// let scores = LabeledMatrix::with_labels(mat, ["A", "B"], ["exp1", "exp2"])
///     .expect("labels fit");
///
/// let cells: Vec<_> = scores.cells().collect();
/// assert_eq!(cells[1], (&2.0, Some("exp2"), Some("A")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLabeledMatrix<T>")]
pub struct LabeledMatrix<T> {
    mat: Matrix<T>,
    row_labels: Vec<Option<String>>,
    col_labels: Vec<Option<String>>,
}

/// Wire form of [`LabeledMatrix`], checked by [`LabeledMatrix::new`].
#[derive(Deserialize)]
struct RawLabeledMatrix<T> {
    mat: Matrix<T>,
    row_labels: Vec<Option<String>>,
    col_labels: Vec<Option<String>>,
}

impl<T> TryFrom<RawLabeledMatrix<T>> for LabeledMatrix<T> {
    type Error = &'static str;

    fn try_from(raw: RawLabeledMatrix<T>) -> Result<Self, Self::Error> {
        Self::new(raw.mat, raw.row_labels, raw.col_labels)
    }
}

impl<T> LabeledMatrix<T> {
    /// Attaches labels to a matrix.
    ///
    /// Each label list must either be empty or have exactly one entry per
    /// row (respectively column).
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty label list has the wrong length.
    pub fn new(
        mat: Matrix<T>,
        row_labels: Vec<Option<String>>,
        col_labels: Vec<Option<String>>,
    ) -> Result<Self, &'static str> {
        if !row_labels.is_empty() && row_labels.len() != mat.n_rows() {
            return Err("Row label count must equal the number of rows");
        }
        if !col_labels.is_empty() && col_labels.len() != mat.n_cols() {
            return Err("Column label count must equal the number of columns");
        }
        Ok(Self {
            mat,
            row_labels,
            col_labels,
        })
    }

    /// Attaches fully present labels to a matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty label list has the wrong length.
    pub fn with_labels<R, C, S, U>(mat: Matrix<T>, rows: R, cols: C) -> Result<Self, &'static str>
    where
        R: IntoIterator<Item = S>,
        C: IntoIterator<Item = U>,
        S: Into<String>,
        U: Into<String>,
    {
        let rows = rows.into_iter().map(|s| Some(s.into())).collect();
        let cols = cols.into_iter().map(|s| Some(s.into())).collect();
        Self::new(mat, rows, cols)
    }

    /// Wraps a matrix without any labels.
    #[must_use]
    pub fn unlabeled(mat: Matrix<T>) -> Self {
        Self {
            mat,
            row_labels: Vec::new(),
            col_labels: Vec::new(),
        }
    }

    /// Returns the backing matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix<T> {
        &self.mat
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.mat.shape()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.mat.n_rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.mat.n_cols()
    }

    /// Returns the row labels in order.
    #[must_use]
    pub fn row_labels(&self) -> &[Option<String>] {
        &self.row_labels
    }

    /// Returns the column labels in order.
    #[must_use]
    pub fn col_labels(&self) -> &[Option<String>] {
        &self.col_labels
    }

    /// Label of row `idx`, or `None` if it is missing or the axis is unnamed.
    #[must_use]
    pub fn row_label(&self, idx: usize) -> Option<&str> {
        self.row_labels.get(idx).and_then(Option::as_deref)
    }

    /// Label of column `idx`, or `None` if it is missing or the axis is unnamed.
    #[must_use]
    pub fn col_label(&self, idx: usize) -> Option<&str> {
        self.col_labels.get(idx).and_then(Option::as_deref)
    }

    /// Iterates over `(value, column_label, row_label)` triples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (&T, Option<&str>, Option<&str>)> + '_ {
        let cols = self.mat.n_cols();
        self.mat
            .as_slice()
            .iter()
            .enumerate()
            .map(move |(i, value)| (value, self.col_label(i % cols), self.row_label(i / cols)))
    }
}

impl<T: Element> LabeledMatrix<T> {
    /// Element category of the backing store.
    #[must_use]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }
}

#[cfg(test)]
#[path = "labeled_tests.rs"]
mod tests;
