// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error,
    fmt::{self, Display, Formatter},
};

/// An error indicating that a suffix array could not be constructed.
///
/// Every error is detected while validating the input, before any sorting work begins, so a
/// failed call never leaves behind a partially built suffix array.
///
/// # Examples
///
/// ```
/// use nucsort::Error;
///
/// let result = nucsort::build_suffix_array_doubling(b"gattaca$", 9);
///
/// assert!(matches!(result, Err(Error::LengthMismatch { declared: 9, actual: 8 })));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// A symbol outside of the alphabet was found
    InvalidSymbol {
        /// The offending byte
        symbol: u8,
        /// The offset of the offending byte in the input
        offset: usize,
    },
    /// The declared length exceeds the length of the input
    LengthMismatch {
        /// The length given by the caller
        declared: usize,
        /// The actual length of the input
        actual: usize,
    },
    /// The input has more symbols than a suffix array offset can address
    TooLong {
        /// The length of the input
        len: usize,
    },
    /// The input does not end in exactly one terminator
    ///
    /// This is only reported when [`SortConfig::require_terminator()`] is enabled.
    ///
    /// [`SortConfig::require_terminator()`]: crate::SortConfig::require_terminator
    MissingTerminator,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidSymbol { symbol, offset } => {
                write!(
                    f,
                    "invalid symbol '{}' at offset {offset}",
                    char::from(*symbol).escape_default(),
                )
            }
            Error::LengthMismatch { declared, actual } => {
                write!(
                    f,
                    "length mismatch: declared {declared}, but input has {actual} symbols",
                )
            }
            Error::TooLong { len } => {
                write!(f, "input too long: {len} symbols, maximum is {}", u32::MAX)
            }
            Error::MissingTerminator => {
                write!(f, "input does not end in exactly one terminator")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_symbol() {
        let err = Error::InvalidSymbol {
            symbol: b'n',
            offset: 3,
        };

        assert_eq!(err.to_string(), "invalid symbol 'n' at offset 3");
    }

    #[test]
    fn display_escapes_control_bytes() {
        let err = Error::InvalidSymbol {
            symbol: b'\n',
            offset: 0,
        };

        assert_eq!(err.to_string(), r"invalid symbol '\n' at offset 0");
    }

    #[test]
    fn display_length_mismatch() {
        let err = Error::LengthMismatch {
            declared: 9,
            actual: 8,
        };

        assert_eq!(
            err.to_string(),
            "length mismatch: declared 9, but input has 8 symbols",
        );
    }
}
