//! Generic table-driven encode kernel.
//!
//! This kernel works one byte at a time, directly off the base graph tables.
//! It serves any supported `(BaseGraph, Zc)` pair and is the correctness
//! oracle for the specialized kernels: the dispatch table may point a pair at
//! a fast path only if that fast path produces bit-identical output.

use super::{rotate_into, CoreStructure, EncodeKernel, Scratch};
use crate::basegraph::{BaseGraph, CORE_ROWS, MAX_LIFTING_SIZE};

/// Generic table-driven kernel.
#[derive(Debug)]
pub(super) struct Reference;

impl EncodeKernel for Reference {
    fn encode(&self, bg: BaseGraph, zc: usize, ncols: usize, scratch: &mut Scratch, d: &mut [u8]) {
        let kb = bg.systematic_columns();
        d.fill(0);

        // systematic contributions of every parity row
        for (row, col, shift) in bg.entries(zc) {
            if col < ncols {
                xor_bytes(&mut d[row * zc..(row + 1) * zc], scratch.column(col, shift, zc));
            }
        }

        // solve the core parity blocks through the dual-diagonal structure
        let core = CoreStructure::collect(bg, zc);
        let mut sum = [0u8; MAX_LIFTING_SIZE];
        for row in 0..CORE_ROWS {
            xor_bytes(&mut sum[..zc], &d[row * zc..(row + 1) * zc]);
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
                    xor_bytes(&mut buf[..zc], scratch.core(col, shift, zc));
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

        // extension parity rows: direct sparse XOR of the core parity blocks
        // on top of the systematic contributions accumulated above
        for (row, col, shift) in bg.entries(zc) {
            if row >= CORE_ROWS && (kb..kb + CORE_ROWS).contains(&col) {
                xor_bytes(
                    &mut d[row * zc..(row + 1) * zc],
                    scratch.core(col - kb, shift, zc),
                );
            }
        }
    }
}

fn xor_bytes(acc: &mut [u8], src: &[u8]) {
    for (a, &b) in acc.iter_mut().zip(src) {
        *a ^= b;
    }
}
