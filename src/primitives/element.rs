//! Element classification and the canonical missing-value predicates.
//!
//! Every matrix element type reports the dtype category of its backing store
//! and classifies each value as a number, the missing-value sentinel, or
//! something non-numeric. Validators never compare values against token
//! lists; they ask the element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual tokens that mean "no value" in labels and text cells.
pub const MISSING_TOKENS: &[&str] = &["NA", "NaN"];

/// Element category of a matrix backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    /// Floating-point elements
    Float,
    /// Integer elements
    Int,
    /// Anything else (text, objects)
    Other,
}

impl DType {
    /// Returns true for floating-point and integer categories.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Float => write!(f, "floating-point"),
            DType::Int => write!(f, "integer"),
            DType::Other => write!(f, "non-numeric"),
        }
    }
}

/// Classification of a single matrix value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// A numeric value (may still be NaN or infinite)
    Number(f64),
    /// The missing-value sentinel
    Missing,
    /// A value that is present but not numeric
    NonNumeric,
}

impl Cell {
    /// Returns true if the value is the missing-value sentinel.
    ///
    /// A floating NaN is *not* missing; use [`Cell::is_nan`] for that.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true if the value is a floating-point not-a-number.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(x) if x.is_nan())
    }

    /// Returns the numeric value, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }
}

/// A type that can back a labeled matrix.
///
/// # Examples
///
/// ```
/// use diffusion_gate::primitives::{Cell, DType, Element};
///
/// assert_eq!(<f64 as Element>::DTYPE, DType::Float);
/// assert_eq!(<Option<i64> as Element>::DTYPE, DType::Int);
/// assert!(None::<f64>.classify().is_missing());
/// assert!(Element::classify(&f64::NAN).is_nan());
/// assert_eq!(3_i32.classify(), Cell::Number(3.0));
/// ```
pub trait Element {
    /// Category of the backing store, fixed per element type.
    const DTYPE: DType;

    /// Classify one value.
    fn classify(&self) -> Cell;
}

macro_rules! impl_numeric_element {
    ($dtype:expr => $($t:ty),+) => {
        $(
            impl Element for $t {
                const DTYPE: DType = $dtype;

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn classify(&self) -> Cell {
                    Cell::Number(*self as f64)
                }
            }
        )+
    };
}

impl_numeric_element!(DType::Float => f32, f64);
impl_numeric_element!(DType::Int => i32, i64, u32, u64);

impl<T: Element> Element for Option<T> {
    const DTYPE: DType = T::DTYPE;

    fn classify(&self) -> Cell {
        match self {
            Some(v) => v.classify(),
            None => Cell::Missing,
        }
    }
}

impl Element for String {
    const DTYPE: DType = DType::Other;

    fn classify(&self) -> Cell {
        self.as_str().classify()
    }
}

impl Element for &str {
    const DTYPE: DType = DType::Other;

    fn classify(&self) -> Cell {
        if is_missing_token(self) {
            Cell::Missing
        } else {
            Cell::NonNumeric
        }
    }
}

/// Returns true if `text` is one of the [`MISSING_TOKENS`].
///
/// Comparison ignores ASCII case and surrounding whitespace.
#[must_use]
pub fn is_missing_token(text: &str) -> bool {
    let text = text.trim();
    MISSING_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(text))
}

/// Returns true if a row, column or node label is missing.
///
/// # Examples
///
/// ```
/// use diffusion_gate::primitives::is_missing_label;
///
/// assert!(is_missing_label(None));
/// assert!(is_missing_label(Some("nan")));
/// assert!(!is_missing_label(Some("TP53")));
/// ```
#[must_use]
pub fn is_missing_label(label: Option<&str>) -> bool {
    label.map_or(true, is_missing_token)
}
