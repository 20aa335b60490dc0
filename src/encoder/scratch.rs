//! Replication buffer.
//!
//! The encode kernels never perform modulo arithmetic to read a rotated
//! column: the systematic data is laid out in this buffer so that every
//! cyclic rotation of a column block is a contiguous byte range. Each column
//! block is written twice back to back, which makes the rotation by `s` of
//! column `i` exactly the range `[2*i*Zc + s, 2*i*Zc + s + Zc)`. The doubled
//! row is then replicated into [`LANES`] lanes, with lane `k` holding a copy
//! of the row advanced by `k` bytes, so that a kernel working on words can
//! always find the range it needs starting at a word boundary of some lane.

use crate::basegraph::{CORE_ROWS, MAX_LIFTING_SIZE};

/// Number of byte-shifted lanes held by the buffer.
pub(super) const LANES: usize = 8;

// Worst case is BG1, which uses 22 systematic columns.
const MAX_SYSTEMATIC_COLUMNS: usize = 22;
const ROW_CAPACITY: usize = 2 * MAX_SYSTEMATIC_COLUMNS * MAX_LIFTING_SIZE;
const CORE_STRIDE: usize = 2 * MAX_LIFTING_SIZE;

/// Encoder working memory.
///
/// A `Scratch` owns the replicated systematic layout and the doubled core
/// parity blocks used while encoding one code block. Its capacity covers the
/// worst case (BG1 with `Zc = 384`), so a single buffer serves every
/// configuration without reallocation. The buffer carries no state between
/// calls; it exists so that the encode path itself never allocates.
///
/// A buffer must not be shared between concurrent encode calls. Callers that
/// encode from several threads keep one `Scratch` per thread (or per HARQ
/// pipeline stage) and reuse it.
#[derive(Debug, Clone)]
pub struct Scratch {
    sys: Box<[u8]>,
    core: Box<[u8]>,
}

impl Scratch {
    /// Creates a new scratch buffer.
    ///
    /// This is the only allocation performed by the encoder.
    pub fn new() -> Scratch {
        Scratch {
            sys: vec![0; LANES * ROW_CAPACITY].into_boxed_slice(),
            core: vec![0; CORE_ROWS * CORE_STRIDE].into_boxed_slice(),
        }
    }

    /// Loads systematic data into the replicated layout.
    ///
    /// `cc` must contain at least `ncols * zc` bytes, one block of `zc` bytes
    /// per systematic column. This is called by [`encode`] before the kernel
    /// runs; it only needs to be called directly when driving an
    /// [`EncodeKernel`] by hand.
    ///
    /// # Panics
    /// Panics if `ncols` or `zc` exceed the buffer capacity (22 columns,
    /// `Zc = 384`) or if `cc` is too short.
    ///
    /// [`encode`]: super::encode
    /// [`EncodeKernel`]: super::EncodeKernel
    pub fn replicate(&mut self, cc: &[u8], zc: usize, ncols: usize) {
        assert!(zc <= MAX_LIFTING_SIZE);
        assert!(ncols <= MAX_SYSTEMATIC_COLUMNS);
        assert!(cc.len() >= ncols * zc);
        let row_len = 2 * ncols * zc;
        for i in 0..ncols {
            let src = &cc[i * zc..(i + 1) * zc];
            self.sys[2 * i * zc..2 * i * zc + zc].copy_from_slice(src);
            self.sys[2 * i * zc + zc..2 * (i + 1) * zc].copy_from_slice(src);
        }
        for k in 1..LANES {
            if k < row_len {
                self.sys.copy_within(k..row_len, k * ROW_CAPACITY);
            }
        }
    }

    /// Returns the rotation by `shift` of systematic column `col`.
    pub(super) fn column(&self, col: usize, shift: usize, zc: usize) -> &[u8] {
        let q = 2 * col * zc + shift;
        &self.sys[q..q + zc]
    }

    /// Returns the same bytes as [`column`], read from the lane in which the
    /// range starts at a word boundary.
    ///
    /// [`column`]: Scratch::column
    pub(super) fn column_lane(&self, col: usize, shift: usize, zc: usize) -> &[u8] {
        let q = 2 * col * zc + shift;
        let k = q % LANES;
        let base = k * ROW_CAPACITY + (q - k);
        &self.sys[base..base + zc]
    }

    /// Stores a solved core parity block, doubled so that its rotations can
    /// be read as contiguous ranges.
    pub(super) fn store_core(&mut self, group: usize, zc: usize, data: &[u8]) {
        let base = group * CORE_STRIDE;
        self.core[base..base + zc].copy_from_slice(data);
        self.core[base + zc..base + 2 * zc].copy_from_slice(data);
    }

    /// Returns the rotation by `shift` of core parity block `group`.
    pub(super) fn core(&self, group: usize, shift: usize, zc: usize) -> &[u8] {
        let base = group * CORE_STRIDE + shift;
        &self.core[base..base + zc]
    }
}

impl Default for Scratch {
    fn default() -> Scratch {
        Scratch::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_columns() {
        let zc = 72;
        let ncols = 4;
        let cc: Vec<u8> = (0..ncols * zc).map(|j| (j % 2) as u8).collect();
        let mut scratch = Scratch::new();
        scratch.replicate(&cc, zc, ncols);
        for i in 0..ncols {
            for s in 0..zc {
                let rotated = scratch.column(i, s, zc);
                for t in 0..zc {
                    assert_eq!(rotated[t], cc[i * zc + (t + s) % zc]);
                }
            }
        }
    }

    #[test]
    fn lanes_are_shifted_copies() {
        let zc = 104;
        let ncols = 10;
        let cc: Vec<u8> = (0..ncols * zc).map(|j| ((j * 7) % 2) as u8).collect();
        let mut scratch = Scratch::new();
        scratch.replicate(&cc, zc, ncols);
        for i in 0..ncols {
            for s in 0..zc {
                assert_eq!(
                    scratch.column(i, s, zc),
                    scratch.column_lane(i, s, zc),
                    "col {} shift {}",
                    i,
                    s
                );
            }
        }
    }

    #[test]
    fn core_rotations() {
        let zc = 96;
        let data: Vec<u8> = (0..zc).map(|j| (j % 2) as u8).collect();
        let mut scratch = Scratch::new();
        scratch.store_core(2, zc, &data);
        for s in 0..zc {
            let rotated = scratch.core(2, s, zc);
            for t in 0..zc {
                assert_eq!(rotated[t], data[(t + s) % zc]);
            }
        }
    }
}
