//! nr-ldpc is a library to encode the 5G NR QC-LDPC codes defined in
//! Section 5.3.2 of 3GPP TS 38.212. It contains the base graph coefficient
//! tables for base graphs 1 and 2, an encoder with byte-oriented and
//! word-oriented kernels, tools to expand the parity check matrices, and a
//! C API intended to be called from a C RAN stack.
//!
//! The encoder works with unpacked bits (one byte per bit) and does not
//! allocate in the encoding path; the caller owns a reusable [`Scratch`]
//! buffer (see [`encoder`]).
//!
//! [`Scratch`]: encoder::Scratch

#![warn(missing_docs)]

pub mod basegraph;
pub mod c_api;
pub mod cli;
pub mod encoder;
pub mod sparse;
