//! Core data primitives consumed by the validators.
//!
//! [`Matrix`] is the plain row-major store; [`LabeledMatrix`] attaches row
//! and column labels to it and defines the cell iteration order every
//! validator relies on.

mod element;
mod labeled;
mod matrix;

pub use element::{is_missing_label, is_missing_token, Cell, DType, Element, MISSING_TOKENS};
pub use labeled::LabeledMatrix;
pub use matrix::Matrix;
