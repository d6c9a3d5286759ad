//! diffusion-gate: input validation for graph-diffusion pipelines.
//!
//! Diffusion algorithms silently produce garbage when handed malformed
//! inputs. This crate checks the three inputs of a diffusion run up front
//! and rejects them with a descriptive error:
//!
//! - a **scores** matrix: nodes by score sets, labeled, numeric, complete,
//!   and with some variation in every column
//! - a **graph**: uniquely named nodes, all-or-nothing edge weights
//! - a **kernel** matrix: square, numeric, complete, labeled by one node set
//!
//! # Quick Start
//!
//! ```
//! use diffusion_gate::prelude::*;
//!
//! let mat = Matrix::from_vec(3, 2, vec![
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 1.0,
//! ]).unwrap();
//! let scores = LabeledMatrix::with_labels(mat, ["A", "B", "C"], ["exp1", "exp2"]).unwrap();
//! validate_scores(&scores).unwrap();
//!
//! let mut g = Graph::from_weighted_edges(&[(0, 1, 1.0), (1, 2, -0.5)], false);
//! g.set_node_names(["A", "B", "C"]);
//! let report = validate_graph(Some(&g)).unwrap();
//! assert_eq!(report.negative_weights().count(), 1);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Matrix, LabeledMatrix and element classification
//! - [`graph`]: Attributed graphs and label extraction
//! - [`validate`]: Scores, graph and kernel validators
//! - [`method`]: Diffusion method names
//! - [`config`]: Graph validation settings
//! - [`error`]: Validation errors

pub mod config;
pub mod error;
pub mod graph;
pub mod method;
pub mod prelude;
pub mod primitives;
pub mod validate;

pub use error::{Result, ValidationError};
pub use primitives::{LabeledMatrix, Matrix};
pub use validate::{
    validate_graph, validate_graph_with, validate_kernel, validate_method, validate_scores,
    Advisory, GraphReport,
};
