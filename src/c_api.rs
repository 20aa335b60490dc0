//! C API.
//!
//! This module contains a C API for the encoder, so that it can be called
//! from the surrounding C RAN stack. An encoder object is created for one
//! `(base graph, lifting size, ncols)` configuration and owns its scratch
//! buffer; one object therefore serves one calling thread.

use crate::basegraph::BaseGraph;
use crate::encoder::{self, Scratch};
use libc::size_t;
use std::convert::TryFrom;
use std::ffi::c_void;

#[allow(clippy::useless_conversion)]
fn size_t_to_usize(n: size_t) -> usize {
    usize::try_from(n).unwrap()
}

#[derive(Debug)]
struct Encoder {
    bg: BaseGraph,
    zc: usize,
    ncols: usize,
    scratch: Scratch,
}

#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_ctor(
    base_graph: libc::c_uint,
    lifting_size: size_t,
    ncols: size_t,
) -> *mut c_void {
    let bg = match base_graph {
        1 => BaseGraph::BG1,
        2 => BaseGraph::BG2,
        _ => {
            log::error!("unsupported LDPC configuration: base graph {}", base_graph);
            panic!("unsupported LDPC configuration: base graph {}", base_graph);
        }
    };
    let zc = size_t_to_usize(lifting_size);
    let ncols = size_t_to_usize(ncols);
    encoder::require_supported(bg, zc);
    assert!(ncols <= bg.systematic_columns());
    let encoder = Encoder {
        bg,
        zc,
        ncols,
        scratch: Scratch::new(),
    };
    Box::into_raw(Box::new(encoder)) as *mut c_void
}

#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_dtor(encoder: *mut c_void) {
    drop(Box::from_raw(encoder as *mut Encoder));
}

#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_encode(
    encoder: *mut c_void,
    d: *mut u8,
    d_len: size_t,
    cc: *const u8,
    cc_len: size_t,
) {
    let d = std::slice::from_raw_parts_mut(d, size_t_to_usize(d_len));
    let cc = std::slice::from_raw_parts(cc, size_t_to_usize(cc_len));
    let encoder = &mut *(encoder as *mut Encoder);
    encoder::encode(
        encoder.bg,
        encoder.zc,
        cc,
        encoder.ncols,
        d,
        &mut encoder.scratch,
    );
}
