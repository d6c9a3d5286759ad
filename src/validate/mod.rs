//! Input validation for diffusion pipelines.
//!
//! Three independent, read-only checks run before a diffusion algorithm
//! touches its inputs:
//!
//! - [`validate_scores`]: labeled numeric scores matrix
//! - [`validate_graph`]: node/edge substrate with unique node names
//! - [`validate_kernel`]: square, symmetrically labeled kernel matrix
//!
//! Each returns the first violated invariant as a
//! [`ValidationError`](crate::error::ValidationError). Graph validation
//! also produces non-fatal [`Advisory`] values, returned in a
//! [`GraphReport`] and never raised as errors.
//!
//! # Examples
//!
//! ```
//! use diffusion_gate::prelude::*;
//!
//! let mat = Matrix::from_vec(3, 3, vec![
//!     1.0, 0.2, 0.1,
//!     0.2, 1.0, 0.3,
//!     0.1, 0.3, 1.0,
//! ]).expect("3x3 data");
//! let k = LabeledMatrix::with_labels(mat, ["A", "B", "C"], ["A", "B", "C"]).expect("labels fit");
//! assert!(validate_kernel(&k).is_ok());
//!
//! let mut g = Graph::from_edges(&[(0, 1), (1, 2)], true);
//! g.set_node_names(["A", "B", "C"]);
//! let report = validate_graph(Some(&g)).expect("directed graphs are tolerated");
//! assert!(!report.is_clean());
//! ```

mod graph;
mod kernel;
mod scores;

pub use graph::{validate_graph, validate_graph_with};
pub use kernel::validate_kernel;
pub use scores::validate_scores;

use crate::error::{Result, ValidationError};
use crate::method::DiffusionMethod;
use crate::primitives::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal finding reported alongside a successful validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// The graph is directed; diffusion expects an undirected substrate.
    DirectedGraph,
    /// An edge carries a negative weight.
    NegativeEdgeWeight {
        /// Source node name
        source: String,
        /// Target node name
        target: String,
        /// The negative weight
        weight: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DirectedGraph => write!(f, "'graph' should be an undirected graph"),
            Advisory::NegativeEdgeWeight {
                source,
                target,
                weight,
            } => write!(
                f,
                "'graph' should not contain negative edge weights ({source} - {target}: {weight})"
            ),
        }
    }
}

/// Outcome of a successful graph validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphReport {
    /// Advisories in detection order
    pub advisories: Vec<Advisory>,
}

impl GraphReport {
    /// Returns true if validation produced no advisory.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Returns true if the graph was flagged as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.advisories.contains(&Advisory::DirectedGraph)
    }

    /// Advisories about negative edge weights.
    pub fn negative_weights(&self) -> impl Iterator<Item = &Advisory> {
        self.advisories
            .iter()
            .filter(|a| matches!(a, Advisory::NegativeEdgeWeight { .. }))
    }
}

/// Check that a diffusion method name is known.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownMethod`] for unrecognised names.
///
/// # Examples
///
/// ```
/// use diffusion_gate::method::DiffusionMethod;
/// use diffusion_gate::validate::validate_method;
///
/// assert_eq!(validate_method("ber_s").expect("known"), DiffusionMethod::BerS);
/// assert!(validate_method("heat").is_err());
/// ```
pub fn validate_method(name: &str) -> Result<DiffusionMethod> {
    name.parse()
}

/// Text used for a label in error messages.
fn label_text(label: Option<&str>) -> String {
    label.unwrap_or("NA").to_string()
}

/// Reject missing, NaN and non-numeric cells.
fn check_cell(
    input: &'static str,
    cell: Cell,
    col_label: Option<&str>,
    row_label: Option<&str>,
) -> Result<()> {
    match cell {
        Cell::Number(x) if !x.is_nan() => Ok(()),
        Cell::Number(_) => Err(ValidationError::NotANumber {
            input,
            row: label_text(row_label),
            col: label_text(col_label),
        }),
        Cell::Missing => Err(ValidationError::MissingValue {
            input,
            row: label_text(row_label),
            col: label_text(col_label),
        }),
        Cell::NonNumeric => Err(ValidationError::NonNumericValue {
            input,
            row: label_text(row_label),
            col: label_text(col_label),
        }),
    }
}
