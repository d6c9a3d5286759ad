//! Diffusion method names.
//!
//! A pipeline selects how scores are propagated and normalised by name.
//! This module only recognises the names; it does not run diffusion.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score propagation and normalisation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffusionMethod {
    /// Plain kernel propagation of the input scores
    Raw,
    /// Labelled nodes as +1 / -1, unlabelled as 0
    Ml,
    /// Like `Ml`, with unlabelled nodes biased by the label ratio
    Gm,
    /// Bayesian-style scaling of raw scores by node propagation
    BerS,
    /// Combination of `BerS` with permutation p-values
    BerP,
    /// Monte Carlo permutation p-values
    Mc,
    /// Analytical z-scores
    Z,
}

impl DiffusionMethod {
    /// Accepted method names, in declaration order.
    pub const NAMES: [&'static str; 7] = ["raw", "ml", "gm", "ber_s", "ber_p", "mc", "z"];

    /// All methods, in declaration order.
    pub const ALL: [DiffusionMethod; 7] = [
        Self::Raw,
        Self::Ml,
        Self::Gm,
        Self::BerS,
        Self::BerP,
        Self::Mc,
        Self::Z,
    ];

    /// Canonical name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Ml => "ml",
            Self::Gm => "gm",
            Self::BerS => "ber_s",
            Self::BerP => "ber_p",
            Self::Mc => "mc",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for DiffusionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffusionMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::UnknownMethod {
                name: s.to_string(),
            })
    }
}
