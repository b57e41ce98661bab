use super::solver_service::SolverError;
use super::value_objects::SupplyMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors raised while validating or computing a cutting request
#[derive(Debug, thiserror::Error)]
pub enum CutError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("value {value} cannot be represented exactly at scale 10^{digits}")]
    InvalidPrecision { value: Decimal, digits: u32 },

    #[error("solver failure: {0}")]
    Solver(#[from] SolverError),
}

/// One demanded piece size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSpec {
    /// Length of the cut piece
    pub width: Decimal,
    /// Number of pieces required
    pub quantity: u32,
}

impl PieceSpec {
    pub fn new(width: Decimal, quantity: u32) -> Self {
        Self { width, quantity }
    }
}

/// A complete cutting request, validated on construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInput {
    pub master_length: Decimal,
    pub kerf: Decimal,
    pub pieces: Vec<PieceSpec>,
    pub mode: SupplyMode,
}

impl ProblemInput {
    /// Builds a request after checking lengths, kerf and demand quantities.
    ///
    /// Pieces sharing a width are merged by summing their quantities; the
    /// first occurrence keeps its position for reporting. A width larger
    /// than the master length is accepted here; that is a structural
    /// infeasibility surfaced by the optimizer, not a malformed request.
    pub fn new(
        master_length: Decimal,
        kerf: Decimal,
        pieces: Vec<PieceSpec>,
        mode: SupplyMode,
    ) -> Result<Self, CutError> {
        if master_length <= Decimal::ZERO {
            return Err(CutError::InvalidInput(format!(
                "master length must be positive, got {master_length}"
            )));
        }
        if kerf < Decimal::ZERO {
            return Err(CutError::InvalidInput(format!(
                "kerf must be non-negative, got {kerf}"
            )));
        }
        if kerf >= master_length {
            return Err(CutError::InvalidInput(format!(
                "kerf {kerf} leaves no usable length on a {master_length} master"
            )));
        }
        if let SupplyMode::Bounded { available_units } = mode {
            if available_units == 0 {
                return Err(CutError::InvalidInput(
                    "bounded supply requires at least one available unit".to_string(),
                ));
            }
        }

        let mut merged: Vec<PieceSpec> = Vec::with_capacity(pieces.len());
        for piece in pieces {
            if piece.width <= Decimal::ZERO {
                return Err(CutError::InvalidInput(format!(
                    "piece width must be positive, got {}",
                    piece.width
                )));
            }
            if piece.quantity == 0 {
                return Err(CutError::InvalidInput(format!(
                    "piece {} has zero demand",
                    piece.width
                )));
            }
            match merged.iter_mut().find(|p| p.width == piece.width) {
                Some(existing) => existing.quantity += piece.quantity,
                None => merged.push(piece),
            }
        }

        Ok(Self {
            master_length,
            kerf,
            pieces: merged,
            mode,
        })
    }

    /// Widths in reporting order.
    pub fn widths(&self) -> Vec<Decimal> {
        self.pieces.iter().map(|p| p.width).collect()
    }

    /// Demand quantities aligned with [`ProblemInput::widths`].
    pub fn demand(&self) -> Vec<u32> {
        self.pieces.iter().map(|p| p.quantity).collect()
    }

    /// Widths that exceed the master length and can never be cut.
    pub fn oversize_widths(&self) -> Vec<Decimal> {
        self.pieces
            .iter()
            .filter(|p| p.width > self.master_length)
            .map(|p| p.width)
            .collect()
    }
}

/// Integer mirror of a request under a single scale factor `10^digits`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledProblem {
    /// Decimal digits absorbed into the integer representation
    pub digits: u32,
    /// Scale factor `10^digits`
    pub factor: i64,
    pub master_length: i64,
    pub kerf: i64,
    pub widths: Vec<i64>,
    pub demand: Vec<u32>,
    pub mode: SupplyMode,
}

impl ScaledProblem {
    /// Maps a scaled length back to the caller's decimal unit system.
    pub fn unscale(&self, value: i64) -> Decimal {
        Decimal::new(value, self.digits)
    }
}

/// Per-size piece counts cut from one master unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub counts: Vec<u32>,
}

impl Pattern {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Total number of pieces the pattern yields.
    pub fn total_pieces(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Scaled length consumed by pieces plus the kerf charge for every cut
    /// beyond the first.
    pub fn used_length(&self, widths: &[i64], kerf: i64) -> i64 {
        let pieces: i64 = self
            .counts
            .iter()
            .zip(widths)
            .map(|(&c, &w)| i64::from(c) * w)
            .sum();
        let cuts = i64::from(self.total_pieces()).saturating_sub(1).max(0);
        pieces + cuts * kerf
    }
}
