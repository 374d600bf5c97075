// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! The fixed nucleotide alphabet and its total order.

use crate::Error;

/// The symbols of the alphabet in ascending order
pub const ALPHABET: [u8; ALPHABET_SIZE] = *b"$acgt";

/// The number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 5;

/// The terminator symbol, which sorts before every other symbol
pub const TERMINATOR: u8 = ALPHABET[0];

/// Marks a byte that has no rank
const INVALID: u8 = u8::MAX;

/// Maps every byte to its rank, or to `INVALID` if it is not part of the alphabet
static RANKS: [u8; 256] = {
    let mut ranks = [INVALID; 256];
    let mut rank = 0;
    while rank < ALPHABET_SIZE {
        ranks[ALPHABET[rank] as usize] = rank as u8;
        rank += 1;
    }
    ranks
};

/// Returns the rank of `symbol` in the alphabet.
///
/// The terminator has rank 0 and the letters `a`, `c`, `g` and `t` have ranks 1 through 4.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] if `symbol` is not part of the alphabet. The reported offset
/// is always 0 since a lone symbol has no position; see [`encode()`] for offsets into an input.
///
/// # Examples
///
/// ```
/// assert_eq!(nucsort::rank_of(b'$'), Ok(0));
/// assert_eq!(nucsort::rank_of(b'g'), Ok(3));
/// assert!(nucsort::rank_of(b'n').is_err());
/// ```
pub fn rank_of(symbol: u8) -> Result<u8, Error> {
    match RANKS[symbol as usize] {
        INVALID => Err(Error::InvalidSymbol { symbol, offset: 0 }),
        rank => Ok(rank),
    }
}

/// Returns the symbol with the given rank, or `None` if `rank` is out of range.
pub fn symbol_of(rank: u8) -> Option<u8> {
    ALPHABET.get(rank as usize).copied()
}

/// Maps every symbol of `input` to its rank.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] for the first symbol that is not part of the alphabet.
///
/// # Examples
///
/// ```
/// use nucsort::Error;
///
/// assert_eq!(nucsort::encode(b"gat$"), Ok(vec![3, 1, 4, 0]));
/// assert_eq!(
///     nucsort::encode(b"gant$"),
///     Err(Error::InvalidSymbol { symbol: b'n', offset: 2 }),
/// );
/// ```
pub fn encode(input: &[u8]) -> Result<Vec<u8>, Error> {
    input
        .iter()
        .enumerate()
        .map(|(offset, &symbol)| match RANKS[symbol as usize] {
            INVALID => Err(Error::InvalidSymbol { symbol, offset }),
            rank => Ok(rank),
        })
        .collect()
}
