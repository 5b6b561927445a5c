use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Which powers of x make up the columns of the design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    /// `x^1 ..= x^n`; the fitted polynomial has no constant term.
    #[default]
    FromOne,
    /// `x^0 ..= x^(n-1)`, the classic Vandermonde matrix.
    Vandermonde,
}

impl Basis {
    pub fn first_power(self) -> usize {
        match self {
            Basis::FromOne => 1,
            Basis::Vandermonde => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pivoting {
    /// Pivot on the diagonal as found; a zero pivot is a singular-matrix error.
    #[default]
    Diagonal,
    /// Swap in the first lower row with a non-zero entry when the diagonal is zero.
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub basis: Basis,
    pub pivoting: Pivoting,
}

impl FitOptions {
    pub fn with_basis(mut self, basis: Basis) -> Self {
        self.basis = basis;
        self
    }

    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Reads options from a TOML fragment such as `basis = "vandermonde"`. Keys that
    /// are absent keep their defaults.
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| FitError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FitError::Config(e.to_string()))
    }
}
