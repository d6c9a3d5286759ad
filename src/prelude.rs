//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use diffusion_gate::prelude::*;
//! ```

pub use crate::config::ValidationConfig;
pub use crate::error::{Axis, ValidationError};
pub use crate::graph::{AttrValue, AttributedGraph, Graph};
pub use crate::method::DiffusionMethod;
pub use crate::primitives::{DType, Element, LabeledMatrix, Matrix};
pub use crate::validate::{
    validate_graph, validate_graph_with, validate_kernel, validate_method, validate_scores,
    Advisory, GraphReport,
};
