//! Error types for diffusion input validation.
//!
//! Every fatal validation failure is a [`ValidationError`]. Non-fatal
//! findings (directed graphs, negative edge weights) are never errors; they
//! are reported as [`Advisory`](crate::validate::Advisory) values instead.

use crate::primitives::DType;
use std::fmt;

/// Matrix axis named in label-related failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row labels (one per node for scores and kernels)
    Row,
    /// Column labels (one per score set, or per node for kernels)
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Fatal validation failure.
///
/// Each variant names the violated invariant and carries the offending
/// identifiers (labels, node names, or literal dimension counts).
///
/// # Examples
///
/// ```
/// use diffusion_gate::error::ValidationError;
///
/// let err = ValidationError::NotSquare { rows: 3, cols: 4 };
/// let msg = err.to_string();
/// assert!(msg.contains("3 rows"));
/// assert!(msg.contains("4 columns"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A matrix has no labels along one axis.
    EmptyLabels {
        /// Which input failed ("scores" or "k")
        input: &'static str,
        /// Axis without labels
        axis: Axis,
    },

    /// The backing store of a matrix is not floating-point or integer.
    NonNumericDType {
        /// Which input failed
        input: &'static str,
        /// Element category found
        dtype: DType,
    },

    /// A cell holds the missing-value sentinel.
    MissingValue {
        /// Which input failed
        input: &'static str,
        /// Row label of the cell
        row: String,
        /// Column label of the cell
        col: String,
    },

    /// A cell holds a floating-point not-a-number.
    NotANumber {
        /// Which input failed
        input: &'static str,
        /// Row label of the cell
        row: String,
        /// Column label of the cell
        col: String,
    },

    /// A cell holds a value that is not numeric.
    NonNumericValue {
        /// Which input failed
        input: &'static str,
        /// Row label of the cell
        row: String,
        /// Column label of the cell
        col: String,
    },

    /// A row or column label is missing.
    MissingLabel {
        /// Which input failed
        input: &'static str,
        /// Axis carrying the missing label
        axis: Axis,
        /// Position of the label along the axis
        index: usize,
    },

    /// The standard deviation of a scores column is undefined.
    UndefinedStdDev {
        /// Column label
        column: String,
    },

    /// A scores column is constant and carries no diffusible signal.
    ZeroStdDev {
        /// Column label
        column: String,
    },

    /// A kernel is not square.
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Kernel row labels and column labels differ.
    LabelMismatch {
        /// First position where the labels differ
        position: usize,
        /// Row label at that position
        row: String,
        /// Column label at that position
        col: String,
    },

    /// A label appears twice along one axis of a kernel.
    DuplicateLabel {
        /// Axis with the duplicate
        axis: Axis,
        /// Duplicated label
        label: String,
    },

    /// No graph was supplied.
    MissingGraph,

    /// No node carries the name attribute.
    MissingNodeNames {
        /// Attribute looked up
        attribute: String,
    },

    /// A node has no usable name.
    MissingNodeName {
        /// Node index
        node: usize,
    },

    /// Two nodes share a name.
    DuplicateNodeName {
        /// The shared name
        name: String,
    },

    /// The graph is weighted but an edge has no weight.
    MissingEdgeWeight {
        /// Source node name
        source: String,
        /// Target node name
        target: String,
    },

    /// An edge weight is not a number.
    NonNumericEdgeWeight {
        /// Source node name
        source: String,
        /// Target node name
        target: String,
        /// Offending value as text
        value: String,
    },

    /// A diffusion method name is not recognised.
    UnknownMethod {
        /// Name supplied by the caller
        name: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyLabels { input, axis } => {
                write!(
                    f,
                    "'{input}' must be a named matrix but it has no {axis} names"
                )
            }
            ValidationError::NonNumericDType { input, dtype } => {
                write!(f, "'{input}' must be numeric, but its elements are {dtype}")
            }
            ValidationError::MissingValue { input, row, col } => {
                write!(f, "'{input}' cannot contain NA values, found one at ({row}, {col})")
            }
            ValidationError::NotANumber { input, row, col } => {
                write!(f, "'{input}' cannot contain NaN values, found one at ({row}, {col})")
            }
            ValidationError::NonNumericValue { input, row, col } => {
                write!(f, "'{input}' must be numeric, but ({row}, {col}) is not")
            }
            ValidationError::MissingLabel { input, axis, index } => {
                write!(f, "'{input}' {axis} names cannot be NA (position {index})")
            }
            ValidationError::UndefinedStdDev { column } => {
                write!(f, "Standard deviation in background is NA in column: {column}")
            }
            ValidationError::ZeroStdDev { column } => {
                write!(f, "Standard deviation in background is 0 in column: {column}")
            }
            ValidationError::NotSquare { rows, cols } => {
                write!(
                    f,
                    "'k' must be a square matrix, but it has {rows} rows and {cols} columns"
                )
            }
            ValidationError::LabelMismatch { position, row, col } => {
                write!(
                    f,
                    "'k' row names and column names must coincide, \
                     position {position} has {row} and {col}"
                )
            }
            ValidationError::DuplicateLabel { axis, label } => {
                write!(f, "'k' cannot contain duplicated {axis} names: {label}")
            }
            ValidationError::MissingGraph => write!(f, "'graph' missing"),
            ValidationError::MissingNodeNames { attribute } => {
                write!(f, "'graph' must have node names (attribute '{attribute}')")
            }
            ValidationError::MissingNodeName { node } => {
                write!(f, "'graph' cannot have NA as node names (node {node})")
            }
            ValidationError::DuplicateNodeName { name } => {
                write!(
                    f,
                    "'graph' has non-unique names: {name} appears more than once"
                )
            }
            ValidationError::MissingEdgeWeight { source, target } => {
                write!(
                    f,
                    "'graph' cannot contain NA edge weights, \
                     all must have weights ({source} - {target})"
                )
            }
            ValidationError::NonNumericEdgeWeight {
                source,
                target,
                value,
            } => {
                write!(
                    f,
                    "'graph' edge weights must be numeric, ({source} - {target}) has {value}"
                )
            }
            ValidationError::UnknownMethod { name } => {
                write!(
                    f,
                    "unknown diffusion method '{name}', expected one of: {}",
                    crate::method::DiffusionMethod::NAMES.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Returns true if the failure concerns graph structure rather than a matrix.
    #[must_use]
    pub fn is_graph_error(&self) -> bool {
        matches!(
            self,
            Self::MissingGraph
                | Self::MissingNodeNames { .. }
                | Self::MissingNodeName { .. }
                | Self::DuplicateNodeName { .. }
                | Self::MissingEdgeWeight { .. }
                | Self::NonNumericEdgeWeight { .. }
        )
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ValidationError>;
