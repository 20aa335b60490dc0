//! 5G NR LDPC base graphs.
//!
//! This module contains the two base graphs used by the 5G NR LDPC codes, as
//! described in 3GPP TS 38.212 section 5.3.2. A base graph is a small sparse
//! matrix of shift coefficients. The parity check matrix for a lifting size
//! `Zc` is obtained by replacing each coefficient by a `Zc x Zc` circulant
//! (an identity matrix cyclically rotated by the coefficient modulo `Zc`) and
//! each absent entry by the `Zc x Zc` zero matrix.
//!
//! The base graph data is immutable process-wide state. It is shared freely
//! between threads and queried without synchronization.
//!
//! ## References
//! \[1\] [3GPP TS 38.212 V17.3.0 section 5.3.2](https://www.3gpp.org/DynaReport/38212.htm).

use crate::sparse::SparseMatrix;
use enum_iterator::Sequence;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod tables;

/// Number of core parity rows of each base graph.
///
/// The first four parity rows of both base graphs form the dual-diagonal
/// sub-matrix that makes linear-time systematic encoding possible.
pub const CORE_ROWS: usize = 4;

/// Largest lifting size of any lifting size set.
pub const MAX_LIFTING_SIZE: usize = 384;

// Table 5.3.2-1 in [1]. Set index iLS corresponds to a = 2, 3, 5, 7, 9, 11,
// 13, 15.
static LIFTING_SETS: [&[usize]; 8] = [
    &[2, 4, 8, 16, 32, 64, 128, 256],
    &[3, 6, 12, 24, 48, 96, 192, 384],
    &[5, 10, 20, 40, 80, 160, 320],
    &[7, 14, 28, 56, 112, 224],
    &[9, 18, 36, 72, 144, 288],
    &[11, 22, 44, 88, 176, 352],
    &[13, 26, 52, 104, 208],
    &[15, 30, 60, 120, 240],
];

// Lifting sizes with an encoder kernel. Smaller standard lifting sizes exist,
// but the code block segmentation used upstream never produces them.
static BG1_LIFTING_SIZES: [usize; 10] = [176, 192, 208, 224, 240, 256, 288, 320, 352, 384];
static BG2_LIFTING_SIZES: [usize; 20] = [
    72, 80, 88, 96, 104, 112, 120, 128, 144, 160, 176, 192, 208, 224, 240, 256, 288, 320, 352, 384,
];

/// 5G NR LDPC base graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Sequence)]
pub enum BaseGraph {
    /// Base graph 1, used for large transport blocks and low code rates.
    BG1,
    /// Base graph 2, used for small transport blocks and high code rates.
    BG2,
}

/// Base graph parse error.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseBaseGraphError {
    /// The string does not name a base graph.
    #[error("invalid base graph '{0}' (expected 1 or 2)")]
    Invalid(String),
}

impl BaseGraph {
    /// Returns the number of systematic column groups of the base graph.
    ///
    /// This is 22 for BG1 and 10 for BG2. Codes with a higher rate use fewer
    /// systematic columns; the remaining columns are treated as zero.
    pub const fn systematic_columns(&self) -> usize {
        match self {
            BaseGraph::BG1 => 22,
            BaseGraph::BG2 => 10,
        }
    }

    /// Returns the number of parity row groups of the base graph.
    pub const fn parity_rows(&self) -> usize {
        match self {
            BaseGraph::BG1 => 46,
            BaseGraph::BG2 => 42,
        }
    }

    /// Returns the total number of column groups of the base graph.
    pub const fn base_columns(&self) -> usize {
        self.systematic_columns() + self.parity_rows()
    }

    /// Returns the lifting sizes supported by the encoder for this base graph.
    pub fn lifting_sizes(&self) -> &'static [usize] {
        match self {
            BaseGraph::BG1 => &BG1_LIFTING_SIZES,
            BaseGraph::BG2 => &BG2_LIFTING_SIZES,
        }
    }

    /// Returns `true` if the lifting size is supported for this base graph.
    pub fn is_supported(&self, zc: usize) -> bool {
        self.lifting_sizes().contains(&zc)
    }

    /// Returns the position of a lifting size in [`lifting_sizes`].
    ///
    /// The index is used to address the encoder kernel dispatch table.
    ///
    /// [`lifting_sizes`]: BaseGraph::lifting_sizes
    pub fn zc_index(&self, zc: usize) -> Option<usize> {
        self.lifting_sizes().iter().position(|&z| z == zc)
    }

    /// Returns the lifting size set index (iLS) of a lifting size.
    ///
    /// Every standard lifting size belongs to exactly one of the eight sets of
    /// Table 5.3.2-1 in \[1\]; the set selects the shift coefficient column of
    /// the base graph tables.
    pub fn lifting_set_index(zc: usize) -> Option<usize> {
        LIFTING_SETS.iter().position(|set| set.contains(&zc))
    }

    /// Returns an iterator over the base graph entries for a lifting size.
    ///
    /// The items are `(row, col, shift)` with the shift already reduced modulo
    /// `zc`.
    ///
    /// # Panics
    /// Panics if `zc` is not a supported lifting size for this base graph.
    pub fn entries(&self, zc: usize) -> impl Iterator<Item = (usize, usize, usize)> {
        crate::encoder::require_supported(*self, zc);
        let set = BaseGraph::lifting_set_index(zc).unwrap();
        let table = match self {
            BaseGraph::BG1 => tables::BG1,
            BaseGraph::BG2 => tables::BG2,
        };
        table.iter().map(move |e| {
            (
                usize::from(e.row),
                usize::from(e.col),
                usize::from(e.shifts[set]) % zc,
            )
        })
    }

    /// Constructs the expanded parity check matrix for a lifting size.
    ///
    /// Each base graph entry with shift `s` expands into a `Zc x Zc` identity
    /// matrix cyclically rotated by `s`. The resulting matrix has
    /// `parity_rows * Zc` rows and `base_columns * Zc` columns.
    ///
    /// # Panics
    /// Panics if `zc` is not a supported lifting size for this base graph.
    pub fn h(&self, zc: usize) -> SparseMatrix {
        let mut h = SparseMatrix::new(self.parity_rows() * zc, self.base_columns() * zc);
        for (row, col, shift) in self.entries(zc) {
            for j in 0..zc {
                h.insert(row * zc + j, col * zc + (j + shift) % zc);
            }
        }
        h
    }
}

impl fmt::Display for BaseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseGraph::BG1 => write!(f, "BG1"),
            BaseGraph::BG2 => write!(f, "BG2"),
        }
    }
}

impl FromStr for BaseGraph {
    type Err = ParseBaseGraphError;

    fn from_str(s: &str) -> Result<BaseGraph, ParseBaseGraphError> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "bg1" => Ok(BaseGraph::BG1),
            "2" | "bg2" => Ok(BaseGraph::BG2),
            _ => Err(ParseBaseGraphError::Invalid(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(BaseGraph::BG1.systematic_columns(), 22);
        assert_eq!(BaseGraph::BG1.parity_rows(), 46);
        assert_eq!(BaseGraph::BG1.base_columns(), 68);
        assert_eq!(BaseGraph::BG2.systematic_columns(), 10);
        assert_eq!(BaseGraph::BG2.parity_rows(), 42);
        assert_eq!(BaseGraph::BG2.base_columns(), 52);
    }

    #[test]
    fn supported_lifting_sizes() {
        assert!(BaseGraph::BG1.is_supported(176));
        assert!(BaseGraph::BG1.is_supported(384));
        assert!(!BaseGraph::BG1.is_supported(72));
        assert!(!BaseGraph::BG1.is_supported(0));
        assert!(BaseGraph::BG2.is_supported(72));
        assert!(BaseGraph::BG2.is_supported(384));
        assert!(!BaseGraph::BG2.is_supported(71));
        for bg in enum_iterator::all::<BaseGraph>() {
            for (idx, &zc) in bg.lifting_sizes().iter().enumerate() {
                assert_eq!(bg.zc_index(zc), Some(idx));
            }
        }
    }

    #[test]
    fn lifting_set_index() {
        assert_eq!(BaseGraph::lifting_set_index(256), Some(0));
        assert_eq!(BaseGraph::lifting_set_index(384), Some(1));
        assert_eq!(BaseGraph::lifting_set_index(320), Some(2));
        assert_eq!(BaseGraph::lifting_set_index(224), Some(3));
        assert_eq!(BaseGraph::lifting_set_index(72), Some(4));
        assert_eq!(BaseGraph::lifting_set_index(176), Some(5));
        assert_eq!(BaseGraph::lifting_set_index(208), Some(6));
        assert_eq!(BaseGraph::lifting_set_index(240), Some(7));
        assert_eq!(BaseGraph::lifting_set_index(100), None);
    }

    #[test]
    fn dual_diagonal_structure() {
        // The core parity sub-matrix is what the encoder recurrence relies
        // on: the first core parity column has weight 3 with a single odd
        // shift, and the remaining core parity columns form the staircase
        // with zero shifts.
        for bg in enum_iterator::all::<BaseGraph>() {
            let zc = bg.lifting_sizes()[0];
            let kb = bg.systematic_columns();
            let mut weight = [0usize; CORE_ROWS];
            let mut odd_shifts = 0;
            for (row, col, shift) in bg.entries(zc) {
                if row >= CORE_ROWS || col < kb || col >= kb + CORE_ROWS {
                    continue;
                }
                weight[col - kb] += 1;
                if col == kb && shift != 0 {
                    odd_shifts += 1;
                }
            }
            assert_eq!(weight[0], 3);
            assert_eq!(weight[1], 2);
            assert_eq!(weight[2], 2);
            assert_eq!(weight[3], 2);
            assert!(odd_shifts <= 1);
        }
    }

    #[test]
    fn expanded_matrix_dimensions() {
        let h = BaseGraph::BG1.h(176);
        assert_eq!(h.num_rows(), 46 * 176);
        assert_eq!(h.num_cols(), 68 * 176);
        let h = BaseGraph::BG2.h(72);
        assert_eq!(h.num_rows(), 42 * 72);
        assert_eq!(h.num_cols(), 52 * 72);
    }

    #[test]
    fn extension_rows_end_in_identity() {
        // Every parity row beyond the core contains exactly one entry in its
        // own extension column, with shift zero.
        for bg in enum_iterator::all::<BaseGraph>() {
            let zc = *bg.lifting_sizes().last().unwrap();
            let ext0 = bg.systematic_columns() + CORE_ROWS;
            for (row, col, shift) in bg.entries(zc) {
                if col >= ext0 {
                    assert_eq!(col - ext0, row - CORE_ROWS);
                    assert_eq!(shift, 0);
                }
            }
        }
    }

    #[test]
    fn parse() {
        assert_eq!("1".parse::<BaseGraph>().unwrap(), BaseGraph::BG1);
        assert_eq!("BG2".parse::<BaseGraph>().unwrap(), BaseGraph::BG2);
        assert!("3".parse::<BaseGraph>().is_err());
    }
}
