// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// A suffix array construction algorithm.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Algorithm {
    /// Sorts suffixes by comparing them directly
    ///
    /// This is *O*(*n*² log(*n*)) in the worst case and is only suitable for small inputs or for
    /// checking other results.
    Naive,
    /// Sorts suffixes by prefix doubling as described by Manber and Myers
    ///
    /// This is *O*(*n* log(*n*)).
    #[default]
    Doubling,
}

/// Configuration for a suffix array construction.
///
/// The defaults are suitable for most use cases.
///
/// # Examples
///
/// ```
/// use nucsort::{Algorithm, SortConfig, SuffixArray};
///
/// # fn main() -> Result<(), nucsort::Error> {
/// let config = *SortConfig::new()
///     .algorithm(Algorithm::Naive)
///     .require_terminator(true);
/// let sa = SuffixArray::with_config(b"gattaca$", &config)?;
///
/// assert_eq!(sa.as_slice(), [7, 6, 4, 1, 5, 0, 3, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct SortConfig {
    algorithm: Algorithm,
    require_terminator: bool,
}

impl SortConfig {
    /// Creates a new configuration for suffix array construction
    ///
    /// This configuration can be reused across constructions.
    pub const fn new() -> Self {
        Self {
            algorithm: Self::DEFAULT_ALGORITHM,
            require_terminator: Self::DEFAULT_REQUIRE_TERMINATOR,
        }
    }

    /// Sets the algorithm used to construct the suffix array.
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets whether the input must end in exactly one terminator.
    ///
    /// When enabled, construction fails with [`Error::MissingTerminator`] if the last symbol of
    /// the input is not the terminator or if the terminator appears anywhere else. When disabled,
    /// the input is sorted as is and keeping to the terminator convention is up to the caller.
    ///
    /// [`Error::MissingTerminator`]: crate::Error::MissingTerminator
    pub fn require_terminator(&mut self, require: bool) -> &mut Self {
        self.require_terminator = require;
        self
    }

    /// Returns the configured algorithm.
    pub const fn get_algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns whether the input must end in exactly one terminator.
    pub const fn get_require_terminator(&self) -> bool {
        self.require_terminator
    }

    /// The default construction algorithm
    pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Doubling;

    /// Whether to require a terminator by default
    ///
    /// We set this to `false` so that inputs are sorted exactly as given.
    pub const DEFAULT_REQUIRE_TERMINATOR: bool = false;
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new()
    }
}
