//! Word-wise fast-path encode kernel.
//!
//! Every supported lifting size is a multiple of eight, so a parity block is
//! a whole number of 64-bit words and the XOR accumulations can run eight
//! bytes at a time. Systematic columns are read from the lane of the
//! replication buffer in which the rotated range starts at a word boundary.
//! The output is bit-identical to the [`reference`](super::reference) kernel
//! for every input.

use super::{rotate_into, CoreStructure, EncodeKernel, Scratch};
use crate::basegraph::{BaseGraph, CORE_ROWS, MAX_LIFTING_SIZE};

/// Word-wise kernel.
#[derive(Debug)]
pub(super) struct Wordwise;

impl EncodeKernel for Wordwise {
    fn encode(&self, bg: BaseGraph, zc: usize, ncols: usize, scratch: &mut Scratch, d: &mut [u8]) {
        debug_assert_eq!(zc % 8, 0);
        let kb = bg.systematic_columns();
        d.fill(0);

        for (row, col, shift) in bg.entries(zc) {
            if col < ncols {
                xor_words(
                    &mut d[row * zc..(row + 1) * zc],
                    scratch.column_lane(col, shift, zc),
                );
            }
        }

        let core = CoreStructure::collect(bg, zc);
        let mut sum = [0u8; MAX_LIFTING_SIZE];
        for row in 0..CORE_ROWS {
            xor_words(&mut sum[..zc], &d[row * zc..(row + 1) * zc]);
        }
        let mut buf = [0u8; MAX_LIFTING_SIZE];
        let s = core.surviving_shift();
        rotate_into(&mut buf[..zc], &sum[..zc], (zc - s) % zc);
        scratch.store_core(0, zc, &buf[..zc]);
        let mut stored = [false; CORE_ROWS];
        stored[0] = true;
        for row in 0..CORE_ROWS {
            let mut unknown = None;
            for col in 0..CORE_ROWS {
                if core.shifts[row][col].is_some() && !stored[col] {
                    debug_assert!(unknown.is_none());
                    unknown = Some(col);
                }
            }
            let Some(unknown) = unknown else {
                continue;
            };
            buf[..zc].copy_from_slice(&d[row * zc..(row + 1) * zc]);
            for col in 0..CORE_ROWS {
                if col == unknown {
                    continue;
                }
                if let Some(shift) = core.shifts[row][col] {
                    xor_words(&mut buf[..zc], scratch.core(col, shift, zc));
                }
            }
            let shift = core.shifts[row][unknown].unwrap();
            if shift == 0 {
                scratch.store_core(unknown, zc, &buf[..zc]);
            } else {
                let mut rotated = [0u8; MAX_LIFTING_SIZE];
                rotate_into(&mut rotated[..zc], &buf[..zc], (zc - shift) % zc);
                scratch.store_core(unknown, zc, &rotated[..zc]);
            }
            stored[unknown] = true;
        }
        debug_assert!(stored.iter().all(|&s| s));
        for group in 0..CORE_ROWS {
            d[group * zc..(group + 1) * zc].copy_from_slice(scratch.core(group, 0, zc));
        }

        for (row, col, shift) in bg.entries(zc) {
            if row >= CORE_ROWS && (kb..kb + CORE_ROWS).contains(&col) {
                xor_words(
                    &mut d[row * zc..(row + 1) * zc],
                    scratch.core(col - kb, shift, zc),
                );
            }
        }
    }
}

// XOR accumulation eight bytes at a time. The byte-per-bit representation
// keeps every byte at 0 or 1, so XOR in the word domain is exact.
fn xor_words(acc: &mut [u8], src: &[u8]) {
    debug_assert_eq!(acc.len(), src.len());
    debug_assert_eq!(acc.len() % 8, 0);
    for (a, b) in acc.chunks_exact_mut(8).zip(src.chunks_exact(8)) {
        let x = u64::from_ne_bytes((&*a).try_into().unwrap());
        let y = u64::from_ne_bytes(b.try_into().unwrap());
        a.copy_from_slice(&(x ^ y).to_ne_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_words_matches_bytes() {
        let a: Vec<u8> = (0..64).map(|j| (j % 2) as u8).collect();
        let b: Vec<u8> = (0..64).map(|j| ((j / 3) % 2) as u8).collect();
        let mut words = a.clone();
        xor_words(&mut words, &b);
        let expected: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();
        assert_eq!(words, expected);
    }
}
