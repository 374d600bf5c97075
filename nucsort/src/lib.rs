// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array construction for nucleotide strings.
//!
//! This crate sorts the suffixes of strings over the alphabet `$`, `a`, `c`, `g`, `t` (in that
//! order), where `$` is a terminator that callers append once to the end of their data. Two
//! constructions are provided: prefix doubling as described by Manber and Myers, which runs in
//! *O*(*n* log(*n*)) time, and a naive comparison sort which is mostly useful for checking it.
//! Both always produce the same suffix array.
//!
//! # Examples
//!
//! ```
//! use nucsort::SuffixArray;
//!
//! # fn main() -> Result<(), nucsort::Error> {
//! let mut data = b"gattaca".to_vec();
//! // Append the terminator
//! data.push(nucsort::TERMINATOR);
//!
//! let sa = SuffixArray::new(&data)?;
//! assert_eq!(sa.as_slice(), [7, 6, 4, 1, 5, 0, 3, 2]);
//! assert_eq!(
//!     nucsort::build_suffix_array_naive(&data, data.len())?,
//!     sa.into_inner(),
//! );
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod config;
mod doubling;
mod error;
mod naive;
mod suffix_array;

pub use alphabet::{ALPHABET, ALPHABET_SIZE, TERMINATOR, encode, rank_of, symbol_of};
pub use config::{Algorithm, SortConfig};
pub use error::Error;
pub use suffix_array::{SuffixArray, build_suffix_array_doubling, build_suffix_array_naive};
