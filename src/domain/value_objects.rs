// Domain value objects representing core business concepts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supply regime for the master stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyMode {
    /// Unlimited supply: minimize the number of master units consumed
    Unbounded,
    /// Fixed inventory: demand must fit within the available units
    Bounded {
        /// Number of master units on hand
        available_units: u32,
    },
}

impl SupplyMode {
    pub fn available_units(&self) -> Option<u32> {
        match self {
            SupplyMode::Unbounded => None,
            SupplyMode::Bounded { available_units } => Some(*available_units),
        }
    }
}

/// Comparison operator of a linear constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// Less than or equal (≤)
    LessOrEqual,
    /// Greater than or equal (≥)
    GreaterOrEqual,
}

impl fmt::Display for ConstraintSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintSense::LessOrEqual => write!(f, "<="),
            ConstraintSense::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverBackend {
    /// Automatically select best solver
    #[default]
    Auto,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}
