//! 5G NR QC-LDPC encoder.
//!
//! This module implements systematic encoding for the 5G NR LDPC codes. The
//! encoder works on byte-per-bit data: the systematic input and the parity
//! output use one byte per bit, with values 0 and 1, grouped in blocks of
//! `Zc` bytes (one block per base graph column).
//!
//! Encoding exploits the dual-diagonal structure of the base graphs, so it
//! runs in linear time. A call first builds the replicated working layout in
//! a caller-provided [`Scratch`] buffer, in which every circulant rotation of
//! a systematic column is a contiguous byte range, and then runs one encode
//! kernel selected by `(BaseGraph, Zc)` from a static dispatch table. All
//! kernels implement the same transform; the [`Reference`] kernel is the
//! correctness oracle that the fast paths must match bit-exactly.
//!
//! The encode path performs no heap allocation and takes no locks. Distinct
//! calls using distinct [`Scratch`] buffers may run concurrently on separate
//! threads.
//!
//! [`Reference`]: KernelImplementation::Reference

use crate::basegraph::BaseGraph;
use std::str::FromStr;
use thiserror::Error;

mod reference;
mod scratch;
mod wordwise;

pub use scratch::Scratch;

/// Generic LDPC encode kernel.
///
/// This trait is used to form encode kernel trait objects, abstracting over
/// the implementation of the parity computation for one `(BaseGraph, Zc)`
/// pair. Kernels are stateless pure functions: the parity output depends only
/// on the arguments.
pub trait EncodeKernel: std::fmt::Debug + Send + Sync {
    /// Computes the parity blocks for one code block.
    ///
    /// The systematic data must already have been loaded into `scratch` with
    /// [`Scratch::replicate`]. The parity output is fully overwritten.
    fn encode(&self, bg: BaseGraph, zc: usize, ncols: usize, scratch: &mut Scratch, d: &mut [u8]);
}

/// Encode kernel implementation.
///
/// This enum lists the available kernel implementations. All implementations
/// produce bit-identical parity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum KernelImplementation {
    /// Generic table-driven kernel working one byte at a time.
    Reference,
    /// Fast path accumulating eight bytes per operation using 64-bit words.
    Wordwise,
}

/// Kernel implementation parse error.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseKernelError {
    /// The string does not name a kernel implementation.
    #[error("invalid kernel implementation '{0}'")]
    Invalid(String),
}

impl KernelImplementation {
    /// Returns the kernel corresponding to this implementation.
    pub fn kernel(&self) -> &'static dyn EncodeKernel {
        match self {
            KernelImplementation::Reference => &REFERENCE,
            KernelImplementation::Wordwise => &WORDWISE,
        }
    }
}

impl FromStr for KernelImplementation {
    type Err = ParseKernelError;

    fn from_str(s: &str) -> Result<KernelImplementation, ParseKernelError> {
        match s {
            "reference" => Ok(KernelImplementation::Reference),
            "wordwise" => Ok(KernelImplementation::Wordwise),
            _ => Err(ParseKernelError::Invalid(s.to_string())),
        }
    }
}

static REFERENCE: reference::Reference = reference::Reference;
static WORDWISE: wordwise::Wordwise = wordwise::Wordwise;

// Kernel dispatch tables, indexed by BaseGraph::zc_index. Adding a new
// specialized kernel for some lifting size only requires pointing its entry
// here at the new implementation.
static BG1_KERNELS: [&dyn EncodeKernel; 10] = [&WORDWISE; 10];
static BG2_KERNELS: [&dyn EncodeKernel; 20] = [&WORDWISE; 20];

/// Checks that a `(BaseGraph, Zc)` pair is supported by the encoder.
///
/// An unsupported pair can only arise from a configuration defect upstream,
/// since valid combinations are fully determined by the standard and are
/// validated when the radio configuration is built. This is therefore not a
/// recoverable error: the process is terminated with a diagnostic.
pub(crate) fn require_supported(bg: BaseGraph, zc: usize) {
    if !bg.is_supported(zc) {
        log::error!("unsupported LDPC configuration: {} with Zc = {}", bg, zc);
        panic!("unsupported LDPC configuration: {} with Zc = {}", bg, zc);
    }
}

/// Encodes one code block.
///
/// The systematic input `cc` must contain at least `ncols * zc` bytes with
/// values 0 or 1, one contiguous block of `zc` bytes per transmitted
/// systematic column. The parity output `d` must be exactly
/// `bg.parity_rows() * zc` bytes long; it is fully overwritten. The output
/// does not depend on which kernel implementation serves the pair.
///
/// Encoding is a pure function of `(bg, zc, cc, ncols)`; `scratch` is only
/// working memory and carries no state between calls.
///
/// # Panics
/// Panics (terminating the process in a release RAN build) if `zc` is not a
/// supported lifting size for `bg`. Panics if `ncols` exceeds the number of
/// systematic columns of the base graph, if `cc` is shorter than
/// `ncols * zc`, or if `d` has the wrong length.
pub fn encode(
    bg: BaseGraph,
    zc: usize,
    cc: &[u8],
    ncols: usize,
    d: &mut [u8],
    scratch: &mut Scratch,
) {
    require_supported(bg, zc);
    assert!(ncols <= bg.systematic_columns());
    assert!(cc.len() >= ncols * zc);
    assert_eq!(d.len(), bg.parity_rows() * zc);
    let kernel = match bg {
        BaseGraph::BG1 => BG1_KERNELS[bg.zc_index(zc).unwrap()],
        BaseGraph::BG2 => BG2_KERNELS[bg.zc_index(zc).unwrap()],
    };
    scratch.replicate(cc, zc, ncols);
    kernel.encode(bg, zc, ncols, scratch, d);
}

// Core parity solve structure shared by the kernel implementations.
//
// The first CORE_ROWS rows of a base graph, restricted to the core parity
// columns kb..kb+4, form the dual-diagonal sub-matrix. XORing the systematic
// contributions of the four core rows cancels every parity term except a
// single rotation of the first parity block (the odd shift left in the
// weight-3 column); undoing that rotation gives p0, and each remaining row
// then has exactly one unknown parity block.
#[derive(Debug, Default, Clone, Copy)]
struct CoreStructure {
    // shifts[row][col - kb]
    shifts: [[Option<usize>; crate::basegraph::CORE_ROWS]; crate::basegraph::CORE_ROWS],
}

impl CoreStructure {
    fn collect(bg: BaseGraph, zc: usize) -> CoreStructure {
        let kb = bg.systematic_columns();
        let mut s = CoreStructure::default();
        for (row, col, shift) in bg.entries(zc) {
            if row < crate::basegraph::CORE_ROWS
                && (kb..kb + crate::basegraph::CORE_ROWS).contains(&col)
            {
                s.shifts[row][col - kb] = Some(shift);
            }
        }
        s
    }

    // Returns the rotation of p0 that survives the XOR of the core rows.
    // Rotations with the same shift cancel pairwise, so the survivor is the
    // shift that occurs an odd number of times in the weight-3 column.
    fn surviving_shift(&self) -> usize {
        let mut odd: [Option<usize>; crate::basegraph::CORE_ROWS] =
            [None; crate::basegraph::CORE_ROWS];
        for row in 0..crate::basegraph::CORE_ROWS {
            if let Some(s) = self.shifts[row][0] {
                if let Some(pos) = odd.iter().position(|&x| x == Some(s)) {
                    odd[pos] = None;
                } else {
                    let free = odd.iter().position(|x| x.is_none()).unwrap();
                    odd[free] = Some(s);
                }
            }
        }
        let mut survivors = odd.iter().flatten();
        let shift = *survivors.next().unwrap();
        debug_assert!(survivors.next().is_none());
        shift
    }
}

// Writes into dst the cyclic rotation of src by k: dst[t] = src[(t + k) % n].
fn rotate_into(dst: &mut [u8], src: &[u8], k: usize) {
    let n = src.len();
    dst[..n - k].copy_from_slice(&src[k..]);
    dst[n - k..n].copy_from_slice(&src[..k]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basegraph::CORE_ROWS;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use rayon::prelude::*;

    fn random_systematic(zc: usize, ncols: usize, rng: &mut ChaCha8Rng) -> Vec<u8> {
        (0..ncols * zc).map(|_| rng.gen_range(0..=1)).collect()
    }

    // Checks every row equation of the expanded parity check matrix against
    // the codeword [systematic | core parity | extension parity], with the
    // untransmitted systematic columns taken as zero.
    fn check_parity(bg: BaseGraph, zc: usize, cc: &[u8], ncols: usize, d: &[u8]) {
        let h = bg.h(zc);
        let kb = bg.systematic_columns();
        let systematic_len = kb * zc;
        let codeword_bit = |col: usize| -> u8 {
            if col < systematic_len {
                if col < ncols * zc {
                    cc[col]
                } else {
                    0
                }
            } else {
                d[col - systematic_len]
            }
        };
        for row in 0..h.num_rows() {
            let parity = h
                .iter_row(row)
                .fold(0, |acc, &col| acc ^ codeword_bit(col));
            assert_eq!(parity, 0, "row {} check failed", row);
        }
    }

    fn encode_to_vec(bg: BaseGraph, zc: usize, cc: &[u8], ncols: usize) -> Vec<u8> {
        let mut d = vec![0xff; bg.parity_rows() * zc];
        let mut scratch = Scratch::new();
        encode(bg, zc, cc, ncols, &mut d, &mut scratch);
        d
    }

    #[test]
    fn zero_input_gives_zero_parity() {
        for bg in enum_iterator::all::<BaseGraph>() {
            for &zc in bg.lifting_sizes() {
                let cc = vec![0; bg.systematic_columns() * zc];
                let d = encode_to_vec(bg, zc, &cc, bg.systematic_columns());
                assert!(d.iter().all(|&b| b == 0), "{} Zc = {}", bg, zc);
            }
        }
    }

    #[test]
    fn parity_check_all_configurations() {
        let cases: Vec<(BaseGraph, usize)> = enum_iterator::all::<BaseGraph>()
            .flat_map(|bg| bg.lifting_sizes().iter().map(move |&zc| (bg, zc)))
            .collect();
        cases.par_iter().for_each(|&(bg, zc)| {
            let mut rng = ChaCha8Rng::seed_from_u64(zc as u64);
            let ncols = bg.systematic_columns();
            let cc = random_systematic(zc, ncols, &mut rng);
            let d = encode_to_vec(bg, zc, &cc, ncols);
            assert_eq!(d.len(), bg.parity_rows() * zc);
            check_parity(bg, zc, &cc, ncols, &d);
        });
    }

    #[test]
    fn parity_check_shortened() {
        // fewer systematic columns than the base graph maximum
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for (bg, zc, ncols) in [
            (BaseGraph::BG2, 72, 8),
            (BaseGraph::BG2, 384, 6),
            (BaseGraph::BG1, 176, 20),
        ] {
            let cc = random_systematic(zc, ncols, &mut rng);
            let d = encode_to_vec(bg, zc, &cc, ncols);
            assert_eq!(d.len(), bg.parity_rows() * zc);
            check_parity(bg, zc, &cc, ncols, &d);
        }
    }

    #[test]
    fn deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let bg = BaseGraph::BG1;
        let zc = 240;
        let ncols = bg.systematic_columns();
        let cc = random_systematic(zc, ncols, &mut rng);
        let first = encode_to_vec(bg, zc, &cc, ncols);
        for _ in 0..3 {
            assert_eq!(encode_to_vec(bg, zc, &cc, ncols), first);
        }
    }

    #[test]
    fn kernels_match() {
        // the fast path must be bit-identical to the reference kernel
        for bg in enum_iterator::all::<BaseGraph>() {
            for &zc in bg.lifting_sizes() {
                let mut rng = ChaCha8Rng::seed_from_u64(zc as u64 ^ 0x5eed);
                let ncols = bg.systematic_columns();
                let cc = random_systematic(zc, ncols, &mut rng);
                let mut scratch = Scratch::new();
                let mut d_ref = vec![0; bg.parity_rows() * zc];
                scratch.replicate(&cc, zc, ncols);
                KernelImplementation::Reference.kernel().encode(
                    bg,
                    zc,
                    ncols,
                    &mut scratch,
                    &mut d_ref,
                );
                let mut d_word = vec![0; bg.parity_rows() * zc];
                scratch.replicate(&cc, zc, ncols);
                KernelImplementation::Wordwise.kernel().encode(
                    bg,
                    zc,
                    ncols,
                    &mut scratch,
                    &mut d_word,
                );
                assert_eq!(d_ref, d_word, "{} Zc = {}", bg, zc);
            }
        }
    }

    #[test]
    fn single_bit_sensitivity() {
        // BG2, Zc = 72, ncols = 8: all-zero input encodes to all-zero
        // parity, and flipping any single systematic bit changes the parity
        let bg = BaseGraph::BG2;
        let zc = 72;
        let ncols = 8;
        let zero = vec![0; ncols * zc];
        let d_zero = encode_to_vec(bg, zc, &zero, ncols);
        assert_eq!(d_zero.len(), bg.parity_rows() * zc);
        assert!(d_zero.iter().all(|&b| b == 0));
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..10 {
            let bit = rng.gen_range(0..ncols * zc);
            let mut cc = zero.clone();
            cc[bit] = 1;
            let d = encode_to_vec(bg, zc, &cc, ncols);
            assert!(d.iter().any(|&b| b != 0), "bit {} is a don't-care", bit);
        }
    }

    #[test]
    #[should_panic(expected = "unsupported LDPC configuration: BG1 with Zc = 72")]
    fn rejects_unsupported_lifting_size() {
        let cc = vec![0; 22 * 72];
        let mut d = vec![0; 46 * 72];
        let mut scratch = Scratch::new();
        encode(BaseGraph::BG1, 72, &cc, 22, &mut d, &mut scratch);
    }

    #[test]
    fn core_structure_solvable() {
        for bg in enum_iterator::all::<BaseGraph>() {
            for &zc in bg.lifting_sizes() {
                let s = CoreStructure::collect(bg, zc);
                let shift = s.surviving_shift();
                assert!(shift < zc);
                // the staircase columns have zero shifts
                for row in 0..CORE_ROWS {
                    for col in 1..CORE_ROWS {
                        if let Some(s) = s.shifts[row][col] {
                            assert_eq!(s, 0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn size_invariants() {
        // parity length depends on the base graph and lifting size only
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for ncols in [6, 8, 10] {
            let cc = random_systematic(128, ncols, &mut rng);
            let d = encode_to_vec(BaseGraph::BG2, 128, &cc, ncols);
            assert_eq!(d.len(), 42 * 128);
        }
    }
}
