// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    Error,
    alphabet,
    config::{Algorithm, SortConfig},
    doubling, naive,
};

/// A suffix array for a nucleotide string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuffixArray<'a> {
    data: &'a [u8],
    inner: Vec<u32>,
}

impl<'a> SuffixArray<'a> {
    /// Creates a new `SuffixArray` for `data` with the default configuration.
    ///
    /// Note that `data` SHOULD have the terminator `$` appended to the end of the data you
    /// actually wish to sort so that no suffix is a prefix of another.
    ///
    /// This operation is *O*(*n* log(*n*)).
    ///
    /// # Errors
    ///
    /// Returns an error if `data` contains a symbol outside of the alphabet or if
    /// `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucsort::SuffixArray;
    ///
    /// # fn main() -> Result<(), nucsort::Error> {
    /// let data = b"acata$";
    /// let sa = SuffixArray::new(data)?;
    ///
    /// assert_eq!(sa.as_slice(), [5, 4, 0, 2, 1, 3]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_config(data, &SortConfig::default())
    }

    /// Creates a new `SuffixArray` for `data` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` contains a symbol outside of the alphabet, if
    /// `data.len() > u32::MAX`, or if the configuration requires a terminator and `data` does not
    /// end in exactly one.
    pub fn with_config(data: &'a [u8], config: &SortConfig) -> Result<Self, Error> {
        let text = validate(data, data.len())?;

        if config.get_require_terminator() && !has_unique_terminator(&text) {
            return Err(Error::MissingTerminator);
        }

        let inner = match config.get_algorithm() {
            Algorithm::Naive => naive::naive(&text),
            Algorithm::Doubling => doubling::doubling(&text),
        };

        Ok(Self { data, inner })
    }

    /// Returns the sorted suffix offsets.
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Consumes the `SuffixArray`, returning the sorted suffix offsets.
    pub fn into_inner(self) -> Vec<u32> {
        self.inner
    }

    /// Returns the data the suffix array was built for.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the number of suffixes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the suffix array has no suffixes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the suffix at sorted position `index`, or `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucsort::SuffixArray;
    ///
    /// # fn main() -> Result<(), nucsort::Error> {
    /// let sa = SuffixArray::new(b"acata$")?;
    ///
    /// assert_eq!(sa.suffix(0), Some(&b"$"[..]));
    /// assert_eq!(sa.suffix(2), Some(&b"acata$"[..]));
    /// assert_eq!(sa.suffix(6), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn suffix(&self, index: usize) -> Option<&'a [u8]> {
        self.inner
            .get(index)
            .map(|&offset| &self.data[offset as usize..])
    }

    /// Returns the inverse suffix array, i.e., the sorted position of each suffix offset.
    ///
    /// This operation is *O*(*n*).
    pub fn inverse(&self) -> Vec<u32> {
        let mut inverse = vec![0; self.inner.len()];
        for (i, &offset) in self.inner.iter().enumerate() {
            inverse[offset as usize] = i as u32;
        }

        inverse
    }
}

impl AsRef<[u32]> for SuffixArray<'_> {
    fn as_ref(&self) -> &[u32] {
        &self.inner
    }
}

/// Computes the suffix array of the first `length` symbols of `input` by sorting suffixes
/// directly.
///
/// This is *O*(*n*² log(*n*)) in the worst case. It produces exactly the same result as
/// [`build_suffix_array_doubling()`] and is mostly useful for checking it.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `length > input.len()`, [`Error::TooLong`] if
/// `length > u32::MAX`, and [`Error::InvalidSymbol`] if the sorted range contains a symbol outside
/// of the alphabet.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), nucsort::Error> {
/// let sa = nucsort::build_suffix_array_naive(b"gggg$", 5)?;
///
/// assert_eq!(sa, [4, 3, 2, 1, 0]);
/// # Ok(())
/// # }
/// ```
pub fn build_suffix_array_naive(input: &[u8], length: usize) -> Result<Vec<u32>, Error> {
    let text = validate(input, length)?;

    Ok(naive::naive(&text))
}

/// Computes the suffix array of the first `length` symbols of `input` by prefix doubling.
///
/// Note that the sorted range SHOULD end with the terminator `$`. This operation is
/// *O*(*n* log(*n*)).
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `length > input.len()`, [`Error::TooLong`] if
/// `length > u32::MAX`, and [`Error::InvalidSymbol`] if the sorted range contains a symbol outside
/// of the alphabet.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), nucsort::Error> {
/// let sa = nucsort::build_suffix_array_doubling(b"acata$", 6)?;
///
/// assert_eq!(sa, [5, 4, 0, 2, 1, 3]);
/// # Ok(())
/// # }
/// ```
pub fn build_suffix_array_doubling(input: &[u8], length: usize) -> Result<Vec<u32>, Error> {
    let text = validate(input, length)?;

    Ok(doubling::doubling(&text))
}

/// Checks the declared length and encodes the first `length` symbols of `input` into ranks.
fn validate(input: &[u8], length: usize) -> Result<Vec<u8>, Error> {
    if length > input.len() {
        return Err(Error::LengthMismatch {
            declared: length,
            actual: input.len(),
        });
    }
    if u32::try_from(length).is_err() {
        return Err(Error::TooLong { len: length });
    }

    alphabet::encode(&input[..length])
}

fn has_unique_terminator(text: &[u8]) -> bool {
    // The terminator has rank 0
    match text.split_last() {
        Some((&0, rest)) => !rest.contains(&0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        let data = b"acata$";

        let naive = build_suffix_array_naive(data, data.len()).unwrap();
        let doubling = build_suffix_array_doubling(data, data.len()).unwrap();

        assert_eq!(naive, doubling);
        assert_eq!(naive[0], 5);
    }

    #[test]
    fn empty_input() {
        assert_eq!(build_suffix_array_naive(b"", 0), Ok(Vec::new()));
        assert_eq!(build_suffix_array_doubling(b"", 0), Ok(Vec::new()));
        assert!(SuffixArray::new(b"").unwrap().is_empty());
    }

    #[test]
    fn shorter_length_sorts_prefix() {
        let data = b"gggg$ignored";

        assert_eq!(build_suffix_array_doubling(data, 5), Ok(vec![4, 3, 2, 1, 0]));
        assert_eq!(build_suffix_array_naive(data, 5), Ok(vec![4, 3, 2, 1, 0]));
    }

    #[test]
    fn length_too_long() {
        let err = Err(Error::LengthMismatch {
            declared: 7,
            actual: 6,
        });

        assert_eq!(build_suffix_array_naive(b"acata$", 7), err);
        assert_eq!(build_suffix_array_doubling(b"acata$", 7), err);
    }

    #[test]
    fn invalid_symbol() {
        let err = Err(Error::InvalidSymbol {
            symbol: b'n',
            offset: 3,
        });

        assert_eq!(build_suffix_array_naive(b"acgnt$", 6), err);
        assert_eq!(build_suffix_array_doubling(b"acgnt$", 6), err);
        assert_eq!(SuffixArray::new(b"acgnt$").map(SuffixArray::into_inner), err);
    }

    #[test]
    fn invalid_symbol_outside_length_is_ignored() {
        assert_eq!(build_suffix_array_doubling(b"ac$n", 3), Ok(vec![2, 0, 1]));
    }

    #[test]
    fn require_terminator() {
        let mut config = SortConfig::new();
        config.require_terminator(true);

        assert!(SuffixArray::with_config(b"gattaca$", &config).is_ok());
        assert_eq!(
            SuffixArray::with_config(b"gattaca", &config),
            Err(Error::MissingTerminator),
        );
        assert_eq!(
            SuffixArray::with_config(b"gat$taca$", &config),
            Err(Error::MissingTerminator),
        );
        assert_eq!(
            SuffixArray::with_config(b"", &config),
            Err(Error::MissingTerminator),
        );
    }

    #[test]
    fn naive_algorithm_config() {
        let mut config = SortConfig::new();
        config.algorithm(Algorithm::Naive);

        let sa = SuffixArray::with_config(b"gggg$", &config).unwrap();

        assert_eq!(sa.as_slice(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn suffixes_are_sorted() {
        let sa = SuffixArray::new(b"tgcatgcaacgt$").unwrap();

        let suffixes: Vec<&[u8]> = (0..sa.len()).filter_map(|i| sa.suffix(i)).collect();
        assert!(suffixes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn inverse_of_suffix_array() {
        let sa = SuffixArray::new(b"acata$").unwrap();
        let inverse = sa.inverse();

        for (i, &offset) in sa.as_slice().iter().enumerate() {
            assert_eq!(inverse[offset as usize] as usize, i);
        }
    }
}
